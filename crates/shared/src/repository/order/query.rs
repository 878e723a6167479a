use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::OrderDetail,
    repository::order::{OrderRow, assemble, load_items, order_select},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self) -> Result<Vec<OrderDetail>, RepositoryError> {
        let sql = order_select("ORDER BY o.created_at DESC");

        let rows = sqlx::query_as::<_, OrderRow>(&sql)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch orders: {e:?}");
                RepositoryError::from(e)
            })?;

        let ids: Vec<Uuid> = rows.iter().map(|row| row.order.id).collect();
        let items = load_items(&self.db, &ids).await?;

        info!("✅ Found {} orders", rows.len());
        Ok(assemble(rows, items))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<OrderDetail>, RepositoryError> {
        let sql = order_select("WHERE o.id = $1");

        let row = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch order {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        let Some(row) = row else {
            info!("ℹ️ Order {id} not found");
            return Ok(None);
        };

        let items = load_items(&self.db, &[id]).await?;
        Ok(assemble(vec![row], items).pop())
    }
}
