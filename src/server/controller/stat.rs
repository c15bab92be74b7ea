use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        stat::{AnalyticsDto, CreatePageViewDto, DashboardDto, StatDto, UpsertStatDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::stat::{analytics_days, CreatePageViewParams, Stat, UpsertStatParams},
        service::{analytics::AnalyticsService, stat::StatService},
        state::AppState,
    },
};

/// Tag for grouping stats, page view and analytics endpoints in OpenAPI documentation
pub static STAT_TAG: &str = "stat";

#[derive(Debug, Deserialize)]
pub struct AnalyticsParams {
    pub days: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STAT_TAG,
    responses(
        (status = 200, description = "Public stats in display order", body = Vec<StatDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = StatService::new(&state.db).list().await?;

    let dto: Vec<StatDto> = stats.into_iter().map(Stat::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/admin/stats",
    tag = STAT_TAG,
    request_body = UpsertStatDto,
    responses(
        (status = 201, description = "Stat created", body = StatDto),
        (status = 400, description = "Invalid stat data", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_stat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertStatDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let stat = StatService::new(&state.db)
        .create(UpsertStatParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(stat.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/stats/{id}",
    tag = STAT_TAG,
    params(
        ("id" = i32, Path, description = "Stat ID")
    ),
    request_body = UpsertStatDto,
    responses(
        (status = 200, description = "Stat updated", body = StatDto),
        (status = 400, description = "Invalid stat data", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 404, description = "Stat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_stat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertStatDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let stat = StatService::new(&state.db)
        .update(id, UpsertStatParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(stat.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/stats/{id}",
    tag = STAT_TAG,
    params(
        ("id" = i32, Path, description = "Stat ID")
    ),
    responses(
        (status = 204, description = "Stat deleted"),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 404, description = "Stat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_stat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    StatService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Record a page view reported by the storefront client.
#[utoipa::path(
    post,
    path = "/api/page-views",
    tag = STAT_TAG,
    request_body = CreatePageViewDto,
    responses(
        (status = 204, description = "Page view recorded"),
        (status = 400, description = "Invalid path or referrer", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_page_view(
    State(state): State<AppState>,
    Json(payload): Json<CreatePageViewDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePageViewParams::from_dto(payload)?;

    AnalyticsService::new(&state.db)
        .record_page_view(params)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get page view analytics for a trailing window of days.
///
/// # Access Control
/// - Admin bearer token
///
/// # Returns
/// - `200 OK` - Total views, top 10 paths and per-day counts
/// - `400 Bad Request` - `days` outside 1 to 365
#[utoipa::path(
    get,
    path = "/api/admin/analytics",
    tag = STAT_TAG,
    params(
        ("days" = Option<u32>, Query, description = "Window in days (default: 30, max: 365)")
    ),
    responses(
        (status = 200, description = "Page view analytics", body = AnalyticsDto),
        (status = 400, description = "Invalid window", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_analytics(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AnalyticsParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let days = analytics_days(params.days)?;
    let analytics = AnalyticsService::new(&state.db)
        .analytics(days, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(analytics.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = STAT_TAG,
    responses(
        (status = 200, description = "Dashboard counters", body = DashboardDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let dashboard = AnalyticsService::new(&state.db)
        .dashboard(Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}
