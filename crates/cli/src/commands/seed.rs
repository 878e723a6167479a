//! Starter data: the administrator account and the two launch categories with a
//! few products each.

use super::app_state;
use anyhow::{Result, bail};
use rand::Rng;
use rust_decimal::Decimal;
use shared::{
    domain::requests::{CategoryRequest, ProductRequest, RegisterRequest, SubcategoryRequest},
    errors::ServiceError,
    model::UserRole,
};
use tracing::{info, warn};
use validator::Validate;

pub async fn admin(email: &str, name: &str, password: &str) -> Result<()> {
    let req = RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    if let Err(errors) = req.validate() {
        bail!("Invalid admin details: {errors}");
    }

    let state = app_state().await?;

    match state
        .di_container
        .auth_service
        .register_with_role(&req, UserRole::Admin)
        .await
    {
        Ok(response) => {
            info!("Admin user created: {} ({})", response.data.email, response.data.id);
            Ok(())
        }
        Err(ServiceError::AlreadyExists(_)) => {
            warn!("Admin user {email} already exists; nothing to do");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

struct SeedCategory {
    name: &'static str,
    description: &'static str,
    subcategories: &'static [(&'static str, &'static str)],
}

const CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        name: "Leather Products",
        description: "Premium leather goods and accessories",
        subcategories: &[
            ("Leather Bags", "Handbags, shoulder bags, totes, and more"),
            ("Leather Jackets", "Men and women leather jackets"),
            ("Leather Accessories", "Belts, gloves, keychains, and more"),
            ("Leather Footwear", "Men and women leather shoes and boots"),
            ("Travel & Utility Leather", "Luggage, toiletry bags, and document holders"),
        ],
    },
    SeedCategory {
        name: "Sports Products",
        description: "Sports equipment, apparel, and accessories",
        subcategories: &[
            ("Sportswear", "Men, women, and kids sportswear"),
            ("Fitness Equipment", "Dumbbells, yoga mats, resistance bands, and more"),
            ("Outdoor Sports", "Football, cricket, basketball, and other sports equipment"),
            ("Gym Accessories", "Gloves, belts, supports, and gym gear"),
            ("Sports Footwear", "Running shoes, training shoes, and more"),
            ("Bags & Carriers", "Gym bags, sports backpacks, and kit bags"),
        ],
    },
];

/// name, category, subcategory, price in cents, discount in cents
const PRODUCTS: &[(&str, &str, &str, i64, Option<i64>)] = &[
    ("Classic Leather Tote", "Leather Products", "Leather Bags", 8999, Some(7499)),
    ("Biker Leather Jacket", "Leather Products", "Leather Jackets", 19999, None),
    ("Bifold Leather Wallet", "Leather Products", "Leather Accessories", 2999, None),
    ("Handstitched Belt", "Leather Products", "Leather Accessories", 2499, Some(1999)),
    ("Chelsea Boots", "Leather Products", "Leather Footwear", 12999, None),
    ("Weekender Duffel", "Leather Products", "Travel & Utility Leather", 14999, Some(12999)),
    ("Training Tracksuit", "Sports Products", "Sportswear", 5999, None),
    ("Adjustable Dumbbell Set", "Sports Products", "Fitness Equipment", 9999, Some(8999)),
    ("Match Cricket Bat", "Sports Products", "Outdoor Sports", 7999, None),
    ("Weightlifting Gloves", "Sports Products", "Gym Accessories", 1999, None),
    ("Road Running Shoes", "Sports Products", "Sports Footwear", 11999, Some(9999)),
    ("Gym Kit Backpack", "Sports Products", "Bags & Carriers", 4499, None),
];

pub async fn catalog() -> Result<()> {
    let state = app_state().await?;
    let categories = &state.di_container.category_service;
    let products = &state.di_container.product_service;

    if !categories.query.find_all().await?.data.is_empty() {
        warn!("Catalog already has categories; skipping seed");
        return Ok(());
    }

    for seed in CATEGORIES {
        let req = CategoryRequest {
            name: seed.name.to_string(),
            slug: None,
            description: seed.description.to_string(),
            subcategories: seed
                .subcategories
                .iter()
                .map(|(name, description)| SubcategoryRequest {
                    name: name.to_string(),
                    slug: None,
                    description: description.to_string(),
                })
                .collect(),
        };

        categories.command.create_category(&req).await?;
    }
    info!("Categories inserted: {}", CATEGORIES.len());

    let mut rng = rand::rng();

    for (index, (name, category, subcategory, price, discount)) in PRODUCTS.iter().enumerate() {
        let req = ProductRequest {
            name: name.to_string(),
            description: format!("{name} from our {subcategory} range"),
            price: Decimal::new(*price, 2),
            discount_price: discount.map(|cents| Decimal::new(cents, 2)),
            stock_quantity: rng.random_range(10..=110),
            images: vec!["/next.svg".to_string()],
            category: category.to_string(),
            subcategory: Some(subcategory.to_string()),
            featured: index % 5 == 0,
        };

        products.command.create_product(&req).await?;
    }
    info!("Products inserted: {}", PRODUCTS.len());

    Ok(())
}
