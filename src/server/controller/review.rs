use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewDto, PaginatedReviewsDto, ProductReviewsDto, ReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            pagination::clamp_per_page,
            review::{CreateReviewParams, Review, ReviewStatusFilter},
        },
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

#[derive(Debug, Deserialize)]
pub struct ReviewListParams {
    pub status: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub entries: Option<u64>,
}

/// Get approved reviews for a product.
///
/// Returns reviews newest first together with the review count and the average rating
/// rounded to one decimal.
///
/// # Returns
/// - `200 OK` - Reviews and summary
/// - `404 Not Found` - Product missing or inactive
#[utoipa::path(
    get,
    path = "/api/products/{product}/reviews",
    tag = REVIEW_TAG,
    params(
        ("product" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Approved reviews", body = ProductReviewsDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .get_for_product(product_id)
        .await?;

    Ok((StatusCode::OK, Json(reviews.into_dto())))
}

/// Submit a review. Reviews stay hidden until approved.
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review submitted for moderation", body = ReviewDto),
        (status = 400, description = "Invalid review data", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateReviewParams::from_dto(payload)?;
    let review = ReviewService::new(&state.db).submit(params).await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/reviews",
    tag = REVIEW_TAG,
    params(
        ("status" = Option<String>, Query, description = "pending (default), approved or all"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of reviews", body = PaginatedReviewsDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_admin_reviews(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ReviewListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let status = ReviewStatusFilter::parse(params.status.as_deref())?;

    let page = ReviewService::new(&state.db)
        .get_paginated(status, params.page, clamp_per_page(params.entries))
        .await?
        .map(Review::into_dto);

    Ok((
        StatusCode::OK,
        Json(PaginatedReviewsDto {
            reviews: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/reviews/{id}/approve",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review approved", body = ReviewDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn approve_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let review = ReviewService::new(&state.db).approve(id).await?;

    Ok((StatusCode::OK, Json(review.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    ReviewService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
