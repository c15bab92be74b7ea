use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ReviewDto {
    pub id: i32,
    pub product_id: i32,
    pub author_name: String,
    pub rating: i16,
    pub title: Option<String>,
    pub body: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateReviewDto {
    pub product_id: i32,
    pub author_name: String,
    pub rating: i16,
    #[serde(default)]
    pub title: Option<String>,
    pub body: String,
}

/// Approved reviews for one product along with their summary.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ProductReviewsDto {
    pub reviews: Vec<ReviewDto>,
    pub count: u64,
    /// Mean rating rounded to one decimal, absent when there are no reviews
    pub average_rating: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginatedReviewsDto {
    pub reviews: Vec<ReviewDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
