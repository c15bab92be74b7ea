use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        faq::{FaqDto, UpsertFaqDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::faq::{Faq, UpsertFaqParams},
        service::faq::FaqService,
        state::AppState,
    },
};

pub static FAQ_TAG: &str = "faq";

#[utoipa::path(
    get,
    path = "/api/faq",
    tag = FAQ_TAG,
    responses(
        (status = 200, description = "Active FAQ entries in display order", body = Vec<FaqDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faq(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries = FaqService::new(&state.db).list(true).await?;

    let dto: Vec<FaqDto> = entries.into_iter().map(Faq::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/admin/faq",
    tag = FAQ_TAG,
    responses(
        (status = 200, description = "Every FAQ entry", body = Vec<FaqDto>),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_admin_faq(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let entries = FaqService::new(&state.db).list(false).await?;

    let dto: Vec<FaqDto> = entries.into_iter().map(Faq::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/admin/faq",
    tag = FAQ_TAG,
    request_body = UpsertFaqDto,
    responses(
        (status = 201, description = "FAQ entry created", body = FaqDto),
        (status = 400, description = "Invalid FAQ data", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_faq(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertFaqDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let faq = FaqService::new(&state.db)
        .create(UpsertFaqParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(faq.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/faq/{id}",
    tag = FAQ_TAG,
    params(
        ("id" = i32, Path, description = "FAQ entry ID")
    ),
    request_body = UpsertFaqDto,
    responses(
        (status = 200, description = "FAQ entry updated", body = FaqDto),
        (status = 400, description = "Invalid FAQ data", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 404, description = "FAQ entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_faq(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertFaqDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let faq = FaqService::new(&state.db)
        .update(id, UpsertFaqParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(faq.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/faq/{id}",
    tag = FAQ_TAG,
    params(
        ("id" = i32, Path, description = "FAQ entry ID")
    ),
    responses(
        (status = 204, description = "FAQ entry deleted"),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 404, description = "FAQ entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_faq(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    FaqService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
