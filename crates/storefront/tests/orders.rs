mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::{Value, json};
use shared::{model::UserRole, service::TransitionPolicy};

async fn product(app: &TestApp, admin: &str, price: f64, discount: Option<f64>) -> String {
    let (_, body) = app
        .send(
            "POST",
            "/api/products",
            Some(admin),
            Some(json!({
                "name": "Item",
                "price": price,
                "discount_price": discount,
                "stock_quantity": 10,
                "category": "Leather Products"
            })),
        )
        .await;

    body["data"]["id"].as_str().unwrap().to_string()
}

async fn place(app: &TestApp, items: Value) -> (StatusCode, Value) {
    app.send("POST", "/api/orders", None, Some(json!({ "items": items })))
        .await
}

#[tokio::test]
async fn guest_checkout_snapshots_prices() {
    let app = TestApp::new(TransitionPolicy::Unconstrained).await;
    let admin = app.token(UserRole::Admin);
    let wallet = product(&app, &admin, 40.0, None).await;
    let belt = product(&app, &admin, 25.0, Some(20.0)).await;

    let (status, order) = place(
        &app,
        json!([
            { "product_id": wallet, "quantity": 2 },
            { "product_id": belt, "quantity": 1 }
        ]),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["data"]["total"], 100.0);
    assert_eq!(order["data"]["status"], "pending");
    assert!(order["data"]["user"].is_null());
}

#[tokio::test]
async fn oversized_quantities_and_totals_are_bad_requests() {
    let app = TestApp::new(TransitionPolicy::Unconstrained).await;
    let admin = app.token(UserRole::Admin);
    let wallet = product(&app, &admin, 40.0, None).await;
    let crate_id = product(&app, &admin, 9_999_999_999.0, None).await;

    let (status, body) = place(&app, json!([{ "product_id": wallet, "quantity": 300_000_000 }])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");

    let (status, body) = place(&app, json!([{ "product_id": crate_id, "quantity": 2 }])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("exceeds the maximum"));

    let (status, _) = app
        .send(
            "POST",
            "/api/products",
            Some(&admin),
            Some(json!({
                "name": "Too Dear",
                "price": 1e20,
                "stock_quantity": 1,
                "category": "Leather Products"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_product_is_a_bad_request() {
    let app = TestApp::new(TransitionPolicy::Unconstrained).await;
    let missing = uuid::Uuid::new_v4();

    let (status, body) = place(&app, json!([{ "product_id": missing, "quantity": 1 }])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains(&missing.to_string()));
}

#[tokio::test]
async fn empty_order_is_rejected() {
    let app = TestApp::new(TransitionPolicy::Unconstrained).await;

    let (status, _) = place(&app, json!([])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_orders_is_admin_only_and_newest_first() {
    let app = TestApp::new(TransitionPolicy::Unconstrained).await;
    let admin = app.token(UserRole::Admin);
    let wallet = product(&app, &admin, 40.0, None).await;

    let (_, first) = place(&app, json!([{ "product_id": wallet, "quantity": 1 }])).await;
    let (_, second) = place(&app, json!([{ "product_id": wallet, "quantity": 2 }])).await;

    let (unauthorized, _) = app.send("GET", "/api/orders", None, None).await;
    assert_eq!(unauthorized, StatusCode::UNAUTHORIZED);

    let (status, body) = app.send("GET", "/api/orders", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], second["data"]["id"]);
    assert_eq!(body["data"][1]["id"], first["data"]["id"]);
}

#[tokio::test]
async fn status_patch_on_missing_order_is_not_found() {
    let app = TestApp::new(TransitionPolicy::Unconstrained).await;
    let admin = app.token(UserRole::Admin);
    let uri = format!("/api/orders/{}/status", uuid::Uuid::new_v4());

    let (status, body) = app
        .send("PATCH", &uri, Some(&admin), Some(json!({ "status": "shipped" })))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order not found");
}

#[tokio::test]
async fn enforced_transitions_return_conflict() {
    let app = TestApp::new(TransitionPolicy::Enforced).await;
    let admin = app.token(UserRole::Admin);
    let wallet = product(&app, &admin, 40.0, None).await;
    let (_, order) = place(&app, json!([{ "product_id": wallet, "quantity": 1 }])).await;
    let id = order["data"]["id"].as_str().unwrap();

    let (status, body) = app
        .send(
            "PUT",
            &format!("/api/orders/{id}"),
            Some(&admin),
            Some(json!({ "status": "delivered" })),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Cannot move order from pending to delivered");

    let (status, body) = app
        .send(
            "PATCH",
            &format!("/api/orders/{id}/status"),
            Some(&admin),
            Some(json!({ "status": "cancelled" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "cancelled");
}

#[tokio::test]
async fn shipping_address_can_be_replaced() {
    let app = TestApp::new(TransitionPolicy::Unconstrained).await;
    let admin = app.token(UserRole::Admin);
    let wallet = product(&app, &admin, 40.0, None).await;
    let (_, order) = place(&app, json!([{ "product_id": wallet, "quantity": 1 }])).await;
    let id = order["data"]["id"].as_str().unwrap();

    let (status, body) = app
        .send(
            "PUT",
            &format!("/api/orders/{id}"),
            Some(&admin),
            Some(json!({
                "shipping_address": {
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "address": "1 Mall Road",
                    "city": "Lahore",
                    "zip": "54000"
                }
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["shipping_address"]["city"], "Lahore");
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
}
