use super::MemoryStore;
use crate::{
    abstract_trait::{CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait},
    domain::requests::NewCategory,
    errors::RepositoryError,
    model::Category,
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;

#[async_trait]
impl CategoryQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.state.read().await.categories.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.categories.iter().find(|c| c.slug == slug).cloned())
    }
}

const SLUG_KEY: &str = "categories_slug_key";

#[async_trait]
impl CategoryCommandRepositoryTrait for MemoryStore {
    async fn create_category(&self, req: &NewCategory) -> Result<Category, RepositoryError> {
        let mut state = self.state.write().await;
        if state.categories.iter().any(|c| c.slug == req.slug) {
            return Err(RepositoryError::AlreadyExists(SLUG_KEY.to_string()));
        }

        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            slug: req.slug.clone(),
            description: req.description.clone(),
            subcategories: Json(req.subcategories.clone()),
            created_at: now,
            updated_at: now,
        };

        state.categories.push(category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        id: Uuid,
        req: &NewCategory,
    ) -> Result<Category, RepositoryError> {
        let mut state = self.state.write().await;
        if state.categories.iter().any(|c| c.slug == req.slug && c.id != id) {
            return Err(RepositoryError::AlreadyExists(SLUG_KEY.to_string()));
        }

        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)?;

        category.name = req.name.clone();
        category.slug = req.slug.clone();
        category.description = req.description.clone();
        category.subcategories = Json(req.subcategories.clone());
        category.updated_at = Utc::now();

        Ok(category.clone())
    }

    async fn delete_category(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);

        if state.categories.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
