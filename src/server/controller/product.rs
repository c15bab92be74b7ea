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
        product::{PaginatedProductsDto, ProductDto, UpsertProductDto},
    },
    server::{
        controller::param::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::product::{Product, ProductFilter, UpsertProductParams},
        service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

#[derive(Debug, Deserialize)]
pub struct ProductFilterParams {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

/// List active products.
///
/// Sorted by `sort_order` ascending, newest first within the same order. The category
/// filter is case-insensitive.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(
        ("category" = Option<String>, Query, description = "Only products in this category"),
        ("featured" = Option<bool>, Query, description = "Only featured or non-featured products")
    ),
    responses(
        (status = 200, description = "Active products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<ProductFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ProductFilter {
        category: params
            .category
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty()),
        featured: params.featured,
    };

    let products = ProductService::new(&state.db).list_active(filter).await?;

    let dto: Vec<ProductDto> = products.into_iter().map(Product::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/products/{product}",
    tag = PRODUCT_TAG,
    params(
        ("product" = String, Path, description = "Product slug")
    ),
    responses(
        (status = 200, description = "The product", body = ProductDto),
        (status = 404, description = "Product missing or inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db).get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Get every product, active or not, one page at a time.
///
/// # Access Control
/// - Admin bearer token
#[utoipa::path(
    get,
    path = "/api/admin/products",
    tag = PRODUCT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of products", body = PaginatedProductsDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_admin_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let page = ProductService::new(&state.db)
        .get_paginated(pagination.page, pagination.per_page())
        .await?
        .map(Product::into_dto);

    Ok((
        StatusCode::OK,
        Json(PaginatedProductsDto {
            products: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    tag = PRODUCT_TAG,
    request_body = UpsertProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product data or slug already taken", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let params = UpsertProductParams::from_dto(payload)?;
    let product = ProductService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpsertProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid product data or slug already taken", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let params = UpsertProductParams::from_dto(payload)?;
    let product = ProductService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Delete a product and its reviews.
#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    ProductService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
