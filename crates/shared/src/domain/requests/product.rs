use crate::domain::requests::validate::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllProducts {
    /// `true` keeps only featured products; any other value means no filter.
    #[serde(default, deserialize_with = "featured_flag")]
    pub featured: bool,

    /// Exact category label.
    pub category: Option<String>,

    /// Exact subcategory label.
    pub subcategory: Option<String>,

    /// Maximum number of products returned; zero, negative or unparsable means no limit.
    #[serde(default, deserialize_with = "positive_limit")]
    pub limit: Option<i64>,
}

fn featured_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref() == Some("true"))
}

/// Reads the leading integer of the value, like `parseInt`, and drops anything below 1.
fn positive_limit<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);

    Ok(trimmed[..end].parse::<i64>().ok().filter(|limit| *limit > 0))
}

/// Body for creating a product and for replacing one in full.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ProductRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    #[schema(example = "Leather Wallet")]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(custom(function = "money"))]
    #[schema(example = 40.0)]
    pub price: Decimal,

    #[validate(custom(function = "money"))]
    #[serde(default)]
    pub discount_price: Option<Decimal>,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 5)]
    pub stock_quantity: i32,

    #[serde(default)]
    pub images: Vec<String>,

    #[validate(length(min = 1, max = 150, message = "Category is required"))]
    #[schema(example = "Leather Products")]
    pub category: String,

    #[validate(length(min = 1, max = 150, message = "Subcategory cannot be empty"))]
    #[serde(default)]
    pub subcategory: Option<String>,

    #[serde(default)]
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wallet() -> serde_json::Value {
        json!({
            "name": "Wallet",
            "price": 40,
            "stock_quantity": 5,
            "category": "Leather Products"
        })
    }

    #[test]
    fn minimal_body_is_valid() {
        let req: ProductRequest = serde_json::from_value(wallet()).unwrap();

        assert!(req.validate().is_ok());
        assert!(!req.featured);
        assert!(req.images.is_empty());
    }

    #[test]
    fn rejects_non_positive_price() {
        let mut body = wallet();
        body["price"] = json!(0);
        let req: ProductRequest = serde_json::from_value(body).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        let mut body = wallet();
        body["color"] = json!("brown");

        assert!(serde_json::from_value::<ProductRequest>(body).is_err());
    }

    fn query(raw: &str) -> FindAllProducts {
        let pairs: Vec<(String, String)> = raw
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let map: serde_json::Map<String, serde_json::Value> = pairs
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect();

        serde_json::from_value(serde_json::Value::Object(map)).unwrap()
    }

    #[test]
    fn only_featured_true_filters() {
        assert!(query("featured=true").featured);
        assert!(!query("featured=false").featured);
        assert!(!query("featured=yes").featured);
        assert!(!FindAllProducts::default().featured);
    }

    #[test]
    fn non_positive_or_garbage_limit_is_ignored() {
        assert_eq!(query("limit=3").limit, Some(3));
        assert_eq!(query("limit=10abc").limit, Some(10));
        assert_eq!(query("limit=0").limit, None);
        assert_eq!(query("limit=-2").limit, None);
        assert_eq!(query("limit=abc").limit, None);
        assert_eq!(query("category=Leather").limit, None);
    }
}
