//! Repository implementations over process memory. Used by `STORE_BACKEND=memory` and by tests;
//! enforces the same uniqueness and reference rules as the SQL schema.

mod category;
mod order;
mod product;
mod user;

use crate::model::{Category, Order, OrderItem, Product, User};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct MemoryState {
    products: Vec<Product>,
    categories: Vec<Category>,
    orders: Vec<Order>,
    order_items: Vec<OrderItem>,
    users: Vec<User>,
}

/// Clones share the same underlying data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait,
            OrderCommandRepositoryTrait, OrderQueryRepositoryTrait, ProductCommandRepositoryTrait,
            ProductQueryRepositoryTrait, UserCommandRepositoryTrait,
        },
        domain::requests::{
            FindAllProducts, NewCategory, NewOrder, NewOrderItem, NewUser, ProductRequest,
        },
        errors::RepositoryError,
        model::{OrderStatus, UserRole},
    };
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn product(name: &str, featured: bool) -> ProductRequest {
        ProductRequest {
            name: name.into(),
            description: String::new(),
            price: Decimal::new(4000, 2),
            discount_price: None,
            stock_quantity: 5,
            images: vec![],
            category: "Leather Products".into(),
            subcategory: None,
            featured,
        }
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Jane".into(),
            email: email.into(),
            password_hash: "hash".into(),
            role: UserRole::Customer,
        }
    }

    #[tokio::test]
    async fn products_keep_insertion_order_and_filters() {
        let store = MemoryStore::new();
        for (name, featured) in [("A", true), ("B", false), ("C", true), ("D", true)] {
            store.create_product(&product(name, featured)).await.unwrap();
        }

        let featured = ProductQueryRepositoryTrait::find_all(
            &store,
            &FindAllProducts {
                featured: true,
                limit: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let names: Vec<_> = featured.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);

        let unfiltered = ProductQueryRepositoryTrait::find_all(&store, &FindAllProducts::default())
            .await
            .unwrap();
        assert_eq!(unfiltered.len(), 4);
    }

    #[tokio::test]
    async fn category_and_subcategory_filters_combine() {
        let store = MemoryStore::new();
        let rows = [
            ("Tote", "Leather Products", Some("Leather Bags"), true),
            ("Biker", "Leather Products", Some("Leather Jackets"), false),
            ("Duffel", "Leather Products", Some("Leather Bags"), false),
            ("Tracksuit", "Sports Products", Some("Sportswear"), true),
        ];
        for (name, category, subcategory, featured) in rows {
            let req = ProductRequest {
                category: category.into(),
                subcategory: subcategory.map(Into::into),
                ..product(name, featured)
            };
            store.create_product(&req).await.unwrap();
        }

        let names = |products: Vec<crate::model::Product>| -> Vec<String> {
            products.into_iter().map(|p| p.name).collect()
        };
        let filter = |category: &str, subcategory: Option<&str>, featured: bool| FindAllProducts {
            featured,
            category: Some(category.into()),
            subcategory: subcategory.map(Into::into),
            limit: None,
        };

        let leather = ProductQueryRepositoryTrait::find_all(
            &store,
            &filter("Leather Products", None, false),
        )
        .await
        .unwrap();
        assert_eq!(names(leather), ["Tote", "Biker", "Duffel"]);

        let bags = ProductQueryRepositoryTrait::find_all(
            &store,
            &filter("Leather Products", Some("Leather Bags"), false),
        )
        .await
        .unwrap();
        assert_eq!(names(bags), ["Tote", "Duffel"]);

        let featured_leather = ProductQueryRepositoryTrait::find_all(
            &store,
            &filter("Leather Products", None, true),
        )
        .await
        .unwrap();
        assert_eq!(names(featured_leather), ["Tote"]);
    }

    fn new_category(name: &str, slug: &str) -> NewCategory {
        NewCategory {
            name: name.into(),
            slug: slug.into(),
            description: String::new(),
            subcategories: vec![],
        }
    }

    #[tokio::test]
    async fn categories_resolve_by_unique_slug() {
        let store = MemoryStore::new();
        let leather = store
            .create_category(&new_category("Leather Products", "leather-products"))
            .await
            .unwrap();
        let sports = store
            .create_category(&new_category("Sports Products", "sports-products"))
            .await
            .unwrap();

        let found = store.find_by_slug("leather-products").await.unwrap();
        assert_eq!(found.map(|c| c.id), Some(leather.id));
        assert!(store.find_by_slug("garden").await.unwrap().is_none());

        let duplicate = store
            .create_category(&new_category("Leather", "leather-products"))
            .await
            .unwrap_err();
        assert!(matches!(duplicate, RepositoryError::AlreadyExists(_)));

        let renamed = store
            .update_category(sports.id, &new_category("Leather", "leather-products"))
            .await
            .unwrap_err();
        assert!(matches!(renamed, RepositoryError::AlreadyExists(_)));

        store
            .update_category(leather.id, &new_category("Leather Goods", "leather-products"))
            .await
            .unwrap();

        let all = CategoryQueryRepositoryTrait::find_all(&store).await.unwrap();
        let slugs: Vec<_> = all.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, ["leather-products", "sports-products"]);
    }

    #[tokio::test]
    async fn product_round_trips_by_id() {
        let store = MemoryStore::new();
        let created = store.create_product(&product("Wallet", false)).await.unwrap();

        let found = ProductQueryRepositoryTrait::find_by_id(&store, created.id)
            .await
            .unwrap();

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn deleting_missing_product_is_not_found() {
        let store = MemoryStore::new();
        let err = store.delete_product(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = MemoryStore::new();
        store.create_user(&new_user("jane@example.com")).await.unwrap();

        let err = store
            .create_user(&new_user("jane@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn orders_resolve_user_and_list_newest_first() {
        let store = MemoryStore::new();
        let user = store.create_user(&new_user("jane@example.com")).await.unwrap();

        let order = |user_id| NewOrder {
            user_id,
            items: vec![NewOrderItem {
                product_id: Uuid::new_v4(),
                quantity: 2,
                price: Decimal::new(1000, 2),
            }],
            total: Decimal::new(2000, 2),
            shipping_address: None,
        };

        let first = store.create_order(&order(Some(user.id))).await.unwrap();
        let second = store.create_order(&order(None)).await.unwrap();

        assert_eq!(
            first.user.as_ref().map(|u| u.email.as_str()),
            Some("jane@example.com")
        );
        assert_eq!(first.order.status, OrderStatus::Pending);

        let all = OrderQueryRepositoryTrait::find_all(&store).await.unwrap();
        assert_eq!(all[0].order.id, second.order.id);
        assert_eq!(all[1].order.id, first.order.id);
    }

    #[tokio::test]
    async fn order_for_unknown_user_violates_reference() {
        let store = MemoryStore::new();
        let err = store
            .create_order(&NewOrder {
                user_id: Some(Uuid::new_v4()),
                items: vec![],
                total: Decimal::ZERO,
                shipping_address: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::ForeignKey(_)));
    }

    #[tokio::test]
    async fn status_update_on_missing_order_changes_nothing() {
        let store = MemoryStore::new();
        let err = store
            .update_status(Uuid::new_v4(), OrderStatus::Shipped)
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound));
        assert!(OrderQueryRepositoryTrait::find_all(&store).await.unwrap().is_empty());
    }
}
