use super::MemoryStore;
use crate::{
    abstract_trait::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
    domain::requests::{FindAllProducts, ProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

fn matches(product: &Product, filter: &FindAllProducts) -> bool {
    (!filter.featured || product.featured)
        && filter
            .category
            .as_ref()
            .is_none_or(|category| &product.category == category)
        && filter
            .subcategory
            .as_ref()
            .is_none_or(|sub| product.subcategory.as_ref() == Some(sub))
}

#[async_trait]
impl ProductQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<Product>, RepositoryError> {
        let state = self.state.read().await;
        let limit = req
            .limit
            .map(|limit| usize::try_from(limit).unwrap_or(0))
            .unwrap_or(usize::MAX);

        Ok(state
            .products
            .iter()
            .filter(|product| matches(product, req))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemoryStore {
    async fn create_product(&self, req: &ProductRequest) -> Result<Product, RepositoryError> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            discount_price: req.discount_price,
            stock_quantity: req.stock_quantity,
            images: req.images.clone(),
            category: req.category.clone(),
            subcategory: req.subcategory.clone(),
            featured: req.featured,
            created_at: now,
            updated_at: now,
        };

        self.state.write().await.products.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: Uuid,
        req: &ProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut state = self.state.write().await;
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        product.name = req.name.clone();
        product.description = req.description.clone();
        product.price = req.price;
        product.discount_price = req.discount_price;
        product.stock_quantity = req.stock_quantity;
        product.images = req.images.clone();
        product.category = req.category.clone();
        product.subcategory = req.subcategory.clone();
        product.featured = req.featured;
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    async fn delete_product(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        let before = state.products.len();
        state.products.retain(|p| p.id != id);

        if state.products.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
