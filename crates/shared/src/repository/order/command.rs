use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::NewOrder,
    errors::RepositoryError,
    model::{Order, OrderDetail, OrderItem, OrderStatus, OrderUser, ShippingAddress},
    repository::order::ORDER_COLUMNS,
};
use async_trait::async_trait;
use sqlx::types::Json;
use tracing::{error, info};
use uuid::Uuid;

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, req: &NewOrder) -> Result<OrderDetail, RepositoryError> {
        let mut tx = self.db.begin().await?;

        let sql = format!(
            r#"
            INSERT INTO orders (id, user_id, total, status, shipping_address, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, current_timestamp, current_timestamp)
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let order = sqlx::query_as::<_, Order>(&sql)
            .bind(Uuid::new_v4())
            .bind(req.user_id)
            .bind(req.total)
            .bind(OrderStatus::Pending)
            .bind(req.shipping_address.as_ref().map(Json))
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to insert order: {err:?}");
                RepositoryError::from(err)
            })?;

        let mut items = Vec::with_capacity(req.items.len());
        for (position, item) in req.items.iter().enumerate() {
            let inserted = sqlx::query_as::<_, OrderItem>(
                r#"
                INSERT INTO order_items (id, order_id, product_id, quantity, price, position)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, order_id, product_id, quantity, price, position
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(order.id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.price)
            .bind(position as i32)
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to insert item for order {}: {err:?}", order.id);
                RepositoryError::from(err)
            })?;

            items.push(inserted);
        }

        let user = match order.user_id {
            Some(user_id) => sqlx::query_as::<_, (String, String)>(
                "SELECT name, email FROM users WHERE id = $1",
            )
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?
            .map(|(name, email)| OrderUser {
                id: user_id,
                name,
                email,
            }),
            None => None,
        };

        tx.commit().await?;

        info!(
            "✅ Created order {} with {} items, total {}",
            order.id,
            items.len(),
            order.total
        );

        Ok(OrderDetail { order, items, user })
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let sql = format!(
            "UPDATE orders SET status = $2, updated_at = current_timestamp WHERE id = $1 \
             RETURNING {ORDER_COLUMNS}"
        );

        let order = sqlx::query_as::<_, Order>(&sql)
            .bind(id)
            .bind(status)
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to update status of order {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        info!("🔄 Order {id} is now {}", order.status);
        Ok(order)
    }

    async fn update_shipping_address(
        &self,
        id: Uuid,
        address: &ShippingAddress,
    ) -> Result<Order, RepositoryError> {
        let sql = format!(
            "UPDATE orders SET shipping_address = $2, updated_at = current_timestamp \
             WHERE id = $1 RETURNING {ORDER_COLUMNS}"
        );

        let order = sqlx::query_as::<_, Order>(&sql)
            .bind(id)
            .bind(Json(address))
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to update shipping address of order {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        info!("🔄 Updated shipping address of order {id}");
        Ok(order)
    }

    async fn delete_order(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete order {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted order {id}");
        Ok(())
    }
}
