use crate::model::{Category, Subcategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub subcategories: Vec<Subcategory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(value: Category) -> Self {
        CategoryResponse {
            id: value.id,
            name: value.name,
            slug: value.slug,
            description: value.description,
            subcategories: value.subcategories.0,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
