use crate::{
    abstract_trait::ProductQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::FindAllProducts,
    errors::RepositoryError,
    model::Product as ProductModel,
    repository::product::PRODUCT_COLUMNS,
};
use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};
use uuid::Uuid;

pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching products with filter {req:?}");

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE TRUE"));

        if req.featured {
            builder.push(" AND featured = TRUE");
        }
        if let Some(category) = &req.category {
            builder.push(" AND category = ").push_bind(category.clone());
        }
        if let Some(subcategory) = &req.subcategory {
            builder.push(" AND subcategory = ").push_bind(subcategory.clone());
        }

        builder.push(" ORDER BY seq ASC");

        if let Some(limit) = req.limit {
            builder.push(" LIMIT ").push_bind(limit);
        }

        let products = builder
            .build_query_as::<ProductModel>()
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {e:?}");
                RepositoryError::from(e)
            })?;

        info!("✅ Found {} products", products.len());
        Ok(products)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductModel>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");

        let result = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        match &result {
            Some(product) => info!("✅ Found product: {} ({})", product.name, product.id),
            None => info!("ℹ️ Product {id} not found"),
        }

        Ok(result)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ProductModel>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ANY($1)");

        sqlx::query_as::<_, ProductModel>(&sql)
            .bind(ids)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products by id: {e:?}");
                RepositoryError::from(e)
            })
    }
}
