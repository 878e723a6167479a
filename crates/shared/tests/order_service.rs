mod common;

use rust_decimal::Decimal;
use shared::{
    domain::requests::{
        CreateOrderRequest, MAX_MONEY, OrderItemRequest, ProductRequest, UpdateOrderRequest,
    },
    errors::ServiceError,
    model::OrderStatus,
    service::TransitionPolicy,
    state::AppState,
};
use uuid::Uuid;

fn product(name: &str, price: Decimal, discount: Option<Decimal>) -> ProductRequest {
    ProductRequest {
        name: name.into(),
        description: String::new(),
        price,
        discount_price: discount,
        stock_quantity: 10,
        images: vec![],
        category: "Leather Products".into(),
        subcategory: None,
        featured: false,
    }
}

async fn create_product(state: &AppState, req: ProductRequest) -> Uuid {
    state
        .di_container
        .product_service
        .command
        .create_product(&req)
        .await
        .unwrap()
        .data
        .id
}

async fn place_order(state: &AppState, items: Vec<(Uuid, i32)>) -> Uuid {
    let req = CreateOrderRequest {
        user_id: None,
        items: items
            .into_iter()
            .map(|(product_id, quantity)| OrderItemRequest {
                product_id,
                quantity,
            })
            .collect(),
        shipping_address: None,
    };

    state
        .di_container
        .order_service
        .command
        .create_order(&req)
        .await
        .unwrap()
        .data
        .id
}

#[tokio::test]
async fn total_uses_price_snapshot() {
    let state = common::state_with(TransitionPolicy::Unconstrained).await;

    let wallet = create_product(&state, product("Wallet", Decimal::new(4000, 2), None)).await;
    let belt = create_product(
        &state,
        product("Belt", Decimal::new(2500, 2), Some(Decimal::new(2000, 2))),
    )
    .await;

    let order_id = place_order(&state, vec![(wallet, 2), (belt, 3)]).await;

    state
        .di_container
        .product_service
        .command
        .update_product(wallet, &product("Wallet", Decimal::new(9900, 2), None))
        .await
        .unwrap();

    let order = state
        .di_container
        .order_service
        .query
        .find_by_id(order_id)
        .await
        .unwrap()
        .data;

    assert_eq!(order.total, Decimal::new(14000, 2));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items[0].price, Decimal::new(4000, 2));
    assert_eq!(order.items[1].price, Decimal::new(2000, 2));
}

#[tokio::test]
async fn unknown_product_is_rejected() {
    let state = common::state_with(TransitionPolicy::Unconstrained).await;
    let missing = Uuid::new_v4();

    let req = CreateOrderRequest {
        user_id: None,
        items: vec![OrderItemRequest {
            product_id: missing,
            quantity: 1,
        }],
        shipping_address: None,
    };

    let err = state
        .di_container
        .order_service
        .command
        .create_order(&req)
        .await
        .unwrap_err();

    match err {
        ServiceError::Validation(errors) => assert!(errors[0].contains(&missing.to_string())),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn total_beyond_column_precision_is_rejected() {
    let state = common::state_with(TransitionPolicy::Unconstrained).await;
    let crate_id = create_product(&state, product("Shipping Crate", MAX_MONEY, None)).await;

    let req = CreateOrderRequest {
        user_id: None,
        items: vec![OrderItemRequest {
            product_id: crate_id,
            quantity: 2,
        }],
        shipping_address: None,
    };

    let err = state
        .di_container
        .order_service
        .command
        .create_order(&req)
        .await
        .unwrap_err();

    match err {
        ServiceError::Validation(errors) => assert!(errors[0].contains("exceeds the maximum")),
        other => panic!("unexpected error: {other:?}"),
    }

    let orders = state.di_container.order_service.query.find_all().await.unwrap();
    assert!(orders.data.is_empty());
}

#[tokio::test]
async fn status_update_on_missing_order_is_not_found() {
    let state = common::state_with(TransitionPolicy::Unconstrained).await;

    let err = state
        .di_container
        .order_service
        .command
        .update_order_status(Uuid::new_v4(), OrderStatus::Shipped)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Order not found"));

    let orders = state.di_container.order_service.query.find_all().await.unwrap();
    assert!(orders.data.is_empty());
}

#[tokio::test]
async fn unconstrained_policy_allows_any_move() {
    let state = common::state_with(TransitionPolicy::Unconstrained).await;
    let wallet = create_product(&state, product("Wallet", Decimal::new(4000, 2), None)).await;
    let order_id = place_order(&state, vec![(wallet, 1)]).await;
    let orders = &state.di_container.order_service.command;

    orders
        .update_order_status(order_id, OrderStatus::Delivered)
        .await
        .unwrap();
    let reopened = orders
        .update_order_status(order_id, OrderStatus::Pending)
        .await
        .unwrap();

    assert_eq!(reopened.data.status, OrderStatus::Pending);
}

#[tokio::test]
async fn enforced_policy_rejects_illegal_move() {
    let state = common::state_with(TransitionPolicy::Enforced).await;
    let wallet = create_product(&state, product("Wallet", Decimal::new(4000, 2), None)).await;
    let order_id = place_order(&state, vec![(wallet, 1)]).await;
    let orders = &state.di_container.order_service.command;

    let err = orders
        .update_order(
            order_id,
            &UpdateOrderRequest {
                status: Some(OrderStatus::Shipped),
                shipping_address: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::InvalidTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Shipped
        }
    ));

    let processing = orders
        .update_order_status(order_id, OrderStatus::Processing)
        .await
        .unwrap();
    assert_eq!(processing.data.status, OrderStatus::Processing);
}

#[tokio::test]
async fn deleted_order_is_gone() {
    let state = common::state_with(TransitionPolicy::Unconstrained).await;
    let wallet = create_product(&state, product("Wallet", Decimal::new(4000, 2), None)).await;
    let order_id = place_order(&state, vec![(wallet, 1)]).await;
    let orders = &state.di_container.order_service;

    orders.command.delete_order(order_id).await.unwrap();

    let err = orders.command.delete_order(order_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert!(orders.query.find_by_id(order_id).await.is_err());
}
