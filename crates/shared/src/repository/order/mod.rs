mod command;
mod query;

use self::command::OrderCommandRepository;
use self::query::OrderQueryRepository;

use crate::{
    abstract_trait::{DynOrderCommandRepository, DynOrderQueryRepository},
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Order, OrderDetail, OrderItem, OrderUser},
};
use sqlx::{FromRow, PgExecutor};
use std::{collections::HashMap, sync::Arc};
use uuid::Uuid;

pub(crate) const ORDER_COLUMNS: &str =
    "id, user_id, total, status, shipping_address, created_at, updated_at";

const ORDER_ITEM_COLUMNS: &str = "id, order_id, product_id, quantity, price, position";

#[derive(Clone)]
pub struct OrderRepository {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
}

impl OrderRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(OrderQueryRepository::new(pool.clone())) as DynOrderQueryRepository;

        let command = Arc::new(OrderCommandRepository::new(pool)) as DynOrderCommandRepository;

        Self { query, command }
    }
}

/// An order header joined with the placing user's public fields.
#[derive(Debug, FromRow)]
struct OrderRow {
    #[sqlx(flatten)]
    order: Order,
    user_name: Option<String>,
    user_email: Option<String>,
}

impl OrderRow {
    fn user(&self) -> Option<OrderUser> {
        match (self.order.user_id, &self.user_name, &self.user_email) {
            (Some(id), Some(name), Some(email)) => Some(OrderUser {
                id,
                name: name.clone(),
                email: email.clone(),
            }),
            _ => None,
        }
    }
}

fn order_select(filter: &str) -> String {
    let columns = ORDER_COLUMNS
        .split(", ")
        .map(|column| format!("o.{column}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "SELECT {columns}, u.name AS user_name, u.email AS user_email \
         FROM orders o LEFT JOIN users u ON u.id = o.user_id {filter}"
    )
}

async fn load_items<'e, E>(
    executor: E,
    order_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<OrderItem>>, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let sql = format!(
        "SELECT {ORDER_ITEM_COLUMNS} FROM order_items WHERE order_id = ANY($1) \
         ORDER BY order_id, position"
    );

    let items = sqlx::query_as::<_, OrderItem>(&sql)
        .bind(order_ids)
        .fetch_all(executor)
        .await?;

    let mut grouped: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();
    for item in items {
        grouped.entry(item.order_id).or_default().push(item);
    }

    Ok(grouped)
}

fn assemble(rows: Vec<OrderRow>, mut items: HashMap<Uuid, Vec<OrderItem>>) -> Vec<OrderDetail> {
    rows.into_iter()
        .map(|row| {
            let user = row.user();
            let items = items.remove(&row.order.id).unwrap_or_default();
            OrderDetail {
                order: row.order,
                items,
                user,
            }
        })
        .collect()
}
