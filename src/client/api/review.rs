use crate::{
    client::model::error::ApiError,
    model::review::{CreateReviewDto, PaginatedReviewsDto, ProductReviewsDto, ReviewDto},
};

use super::helper::{
    authorized, delete, get, parse_empty_response, parse_response, post, put, send_request,
    serialize_json,
};

/// Get approved reviews for a product with the rating summary
pub async fn get_product_reviews(product_id: i32) -> Result<ProductReviewsDto, ApiError> {
    let url = format!("/api/products/{}/reviews", product_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Submit a review; it stays hidden until approved
pub async fn submit_review(payload: CreateReviewDto) -> Result<ReviewDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/reviews").body(body)).await?;
    parse_response(response).await
}

pub async fn get_admin_reviews(
    token: &str,
    status: &str,
    page: u64,
    per_page: u64,
) -> Result<PaginatedReviewsDto, ApiError> {
    let url = format!(
        "/api/admin/reviews?status={}&page={}&entries={}",
        status, page, per_page
    );

    let response = send_request(authorized(get(&url), token)).await?;
    parse_response(response).await
}

pub async fn approve_review(token: &str, id: i32) -> Result<ReviewDto, ApiError> {
    let url = format!("/api/admin/reviews/{}/approve", id);

    let response = send_request(authorized(put(&url), token)).await?;
    parse_response(response).await
}

pub async fn delete_review(token: &str, id: i32) -> Result<(), ApiError> {
    let url = format!("/api/admin/reviews/{}", id);

    let response = send_request(authorized(delete(&url), token)).await?;
    parse_empty_response(response).await
}
