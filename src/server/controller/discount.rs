use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        discount::{
            CreateDiscountCodeDto, DiscountCodeDto, UpdateDiscountCodeDto, ValidDiscountDto,
            ValidateDiscountDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::discount::{CreateDiscountCodeParams, DiscountCode, UpdateDiscountCodeParams},
        service::discount::DiscountService,
        state::AppState,
    },
};

pub static DISCOUNT_TAG: &str = "discount";

/// Check a customer-entered discount code.
///
/// Codes are matched case-insensitively. Unknown, inactive, expired and exhausted codes
/// all produce the same 404 message.
#[utoipa::path(
    post,
    path = "/api/discounts/validate",
    tag = DISCOUNT_TAG,
    request_body = ValidateDiscountDto,
    responses(
        (status = 200, description = "Code can be applied", body = ValidDiscountDto),
        (status = 404, description = "Invalid or expired discount code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate_discount(
    State(state): State<AppState>,
    Json(payload): Json<ValidateDiscountDto>,
) -> Result<impl IntoResponse, AppError> {
    let discount = DiscountService::new(&state.db)
        .validate(&payload.code, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(discount.into_valid_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/discounts",
    tag = DISCOUNT_TAG,
    responses(
        (status = 200, description = "Every discount code, newest first", body = Vec<DiscountCodeDto>),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_discounts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let codes = DiscountService::new(&state.db).list().await?;

    let dto: Vec<DiscountCodeDto> = codes.into_iter().map(DiscountCode::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Create a discount code, generating an 8-character code when none is given.
#[utoipa::path(
    post,
    path = "/api/admin/discounts",
    tag = DISCOUNT_TAG,
    request_body = CreateDiscountCodeDto,
    responses(
        (status = 201, description = "Discount code created", body = DiscountCodeDto),
        (status = 400, description = "Invalid data or code already exists", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_discount(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDiscountCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let discount = DiscountService::new(&state.db)
        .create(CreateDiscountCodeParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(discount.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/discounts/{id}",
    tag = DISCOUNT_TAG,
    params(
        ("id" = i32, Path, description = "Discount code ID")
    ),
    request_body = UpdateDiscountCodeDto,
    responses(
        (status = 200, description = "Discount code updated", body = DiscountCodeDto),
        (status = 400, description = "Invalid data", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 404, description = "Discount code not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_discount(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDiscountCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let discount = DiscountService::new(&state.db)
        .update(id, UpdateDiscountCodeParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(discount.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/discounts/{id}",
    tag = DISCOUNT_TAG,
    params(
        ("id" = i32, Path, description = "Discount code ID")
    ),
    responses(
        (status = 204, description = "Discount code deleted"),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 404, description = "Discount code not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_discount(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    DiscountService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
