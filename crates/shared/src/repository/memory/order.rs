use super::{MemoryState, MemoryStore};
use crate::{
    abstract_trait::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
    domain::requests::NewOrder,
    errors::RepositoryError,
    model::{Order, OrderDetail, OrderItem, OrderStatus, OrderUser, ShippingAddress},
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;

fn detail(state: &MemoryState, order: &Order) -> OrderDetail {
    let mut items: Vec<OrderItem> = state
        .order_items
        .iter()
        .filter(|item| item.order_id == order.id)
        .cloned()
        .collect();
    items.sort_by_key(|item| item.position);

    let user = order.user_id.and_then(|user_id| {
        state
            .users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| OrderUser {
                id: u.id,
                name: u.name.clone(),
                email: u.email.clone(),
            })
    });

    OrderDetail {
        order: order.clone(),
        items,
        user,
    }
}

fn find_order_mut(state: &mut MemoryState, id: Uuid) -> Result<&mut Order, RepositoryError> {
    state
        .orders
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or(RepositoryError::NotFound)
}

#[async_trait]
impl OrderQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<OrderDetail>, RepositoryError> {
        let state = self.state.read().await;

        // Later inserts first among equal timestamps.
        let mut orders: Vec<&Order> = state.orders.iter().rev().collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(orders.into_iter().map(|o| detail(&state, o)).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<OrderDetail>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .orders
            .iter()
            .find(|o| o.id == id)
            .map(|o| detail(&state, o)))
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for MemoryStore {
    async fn create_order(&self, req: &NewOrder) -> Result<OrderDetail, RepositoryError> {
        let mut state = self.state.write().await;

        if let Some(user_id) = req.user_id {
            if !state.users.iter().any(|u| u.id == user_id) {
                return Err(RepositoryError::ForeignKey("orders_user_id_fkey".into()));
            }
        }

        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            user_id: req.user_id,
            total: req.total,
            status: OrderStatus::Pending,
            shipping_address: req.shipping_address.clone().map(Json),
            created_at: now,
            updated_at: now,
        };

        let items: Vec<OrderItem> = req
            .items
            .iter()
            .enumerate()
            .map(|(position, item)| OrderItem {
                id: Uuid::new_v4(),
                order_id: order.id,
                product_id: item.product_id,
                quantity: item.quantity,
                price: item.price,
                position: position as i32,
            })
            .collect();

        state.orders.push(order.clone());
        state.order_items.extend(items);

        Ok(detail(&state, &order))
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let mut state = self.state.write().await;
        let order = find_order_mut(&mut state, id)?;

        order.status = status;
        order.updated_at = Utc::now();

        Ok(order.clone())
    }

    async fn update_shipping_address(
        &self,
        id: Uuid,
        address: &ShippingAddress,
    ) -> Result<Order, RepositoryError> {
        let mut state = self.state.write().await;
        let order = find_order_mut(&mut state, id)?;

        order.shipping_address = Some(Json(address.clone()));
        order.updated_at = Utc::now();

        Ok(order.clone())
    }

    async fn delete_order(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        let before = state.orders.len();
        state.orders.retain(|o| o.id != id);

        if state.orders.len() == before {
            return Err(RepositoryError::NotFound);
        }

        state.order_items.retain(|item| item.order_id != id);
        Ok(())
    }
}
