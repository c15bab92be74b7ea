use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ProductDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub gemstone: String,
    pub carat_weight: Option<f64>,
    pub origin: Option<String>,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub category: String,
    pub featured: bool,
    pub active: bool,
    pub stock: i32,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or fully replacing a product.
///
/// `slug` is derived from `name` when omitted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpsertProductDto {
    #[serde(default)]
    pub slug: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub gemstone: String,
    #[serde(default)]
    pub carat_weight: Option<f64>,
    #[serde(default)]
    pub origin: Option<String>,
    pub price_cents: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginatedProductsDto {
    pub products: Vec<ProductDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
