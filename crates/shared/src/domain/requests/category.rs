use crate::{model::Subcategory, utils::slugify};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SubcategoryRequest {
    #[validate(length(min = 1, max = 150, message = "Subcategory name is required"))]
    #[schema(example = "Leather Bags")]
    pub name: String,

    /// Derived from the name when omitted.
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 150, message = "Category name is required"))]
    #[schema(example = "Leather Products")]
    pub name: String,

    /// Derived from the name when omitted.
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub description: String,

    #[validate(nested)]
    #[serde(default)]
    pub subcategories: Vec<SubcategoryRequest>,
}

/// A category with every slug resolved, ready for storage.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub subcategories: Vec<Subcategory>,
}

impl From<&CategoryRequest> for NewCategory {
    fn from(req: &CategoryRequest) -> Self {
        NewCategory {
            name: req.name.trim().to_string(),
            slug: resolve_slug(req.slug.as_deref(), &req.name),
            description: req.description.clone(),
            subcategories: req
                .subcategories
                .iter()
                .map(|sub| Subcategory {
                    name: sub.name.trim().to_string(),
                    slug: resolve_slug(sub.slug.as_deref(), &sub.name),
                    description: sub.description.clone(),
                })
                .collect(),
        }
    }
}

fn resolve_slug(explicit: Option<&str>, name: &str) -> String {
    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => slugify(slug),
        None => slugify(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_derived_from_names() {
        let req = CategoryRequest {
            name: "Sports Products".into(),
            slug: None,
            description: String::new(),
            subcategories: vec![SubcategoryRequest {
                name: "Bags & Carriers".into(),
                slug: None,
                description: String::new(),
            }],
        };

        let category = NewCategory::from(&req);

        assert_eq!(category.slug, "sports-products");
        assert_eq!(category.subcategories[0].slug, "bags-carriers");
    }

    #[test]
    fn explicit_slug_wins() {
        let req = CategoryRequest {
            name: "Travel & Utility Leather".into(),
            slug: Some("travel-utility-leather".into()),
            description: String::new(),
            subcategories: vec![],
        };

        assert_eq!(NewCategory::from(&req).slug, "travel-utility-leather");
    }
}
