use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum number of rows returned by the list operation
pub const LIST_LIMIT: u64 = 50;

/// Confirmation message returned by the delete operation
pub const PRODUCT_DELETED: &str = "Product deleted";

/// A product row, as returned by the single-item operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// The product ID
    #[schema(example = 1)]
    pub id: i32,
    /// The product name
    #[schema(example = "gaming mouse")]
    pub name: String,
    /// The product price
    #[schema(example = 40.0)]
    pub price: f64,
    /// The product availability
    #[schema(example = true)]
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The list representation: timestamps excluded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            availability: product.availability,
        }
    }
}

/// DTO for creating a new product.
///
/// `availability` may be supplied by the client; it defaults to `true` when
/// omitted. Unknown body fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "mouse gaming")]
    pub name: String,
    #[schema(example = 40.0)]
    pub price: f64,
    #[serde(default)]
    pub availability: Option<bool>,
}

/// DTO for the full-update operation: every mutable field is mandatory
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct UpdateProduct {
    #[schema(example = "mouse gaming")]
    pub name: String,
    #[schema(example = 40.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

/// 200/201 envelope for a single product
#[derive(Serialize, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

/// 200 envelope for the list operation
#[derive(Serialize, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<ProductSummary>,
}

/// 200 envelope for the delete confirmation
#[derive(Serialize, ToSchema)]
pub struct DeletedResponse {
    /// Literal confirmation string
    #[schema(example = "Product deleted")]
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_drops_timestamps() {
        let now = Utc::now();
        let product = Product {
            id: 3,
            name: "keyboard".to_string(),
            price: 75.0,
            availability: false,
            created_at: now,
            updated_at: now,
        };

        let summary: ProductSummary = product.into();
        let json = serde_json::to_value(&summary).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for key in ["id", "name", "price", "availability"] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
        assert!(!object.contains_key("created_at"));
        assert!(!object.contains_key("updated_at"));
    }

    #[test]
    fn test_create_product_defaults_availability() {
        let input: CreateProduct =
            serde_json::from_value(serde_json::json!({"name": "mouse", "price": 40})).unwrap();
        assert_eq!(input.availability, None);
    }
}
