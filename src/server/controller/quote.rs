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
        quote::{CreateQuoteDto, PaginatedQuotesDto, QuoteDto, QuoteStatus, UpdateQuoteStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            pagination::clamp_per_page,
            quote::{CreateQuoteParams, Quote},
        },
        service::quote::QuoteService,
        state::AppState,
    },
};

/// Tag for grouping quote request endpoints in OpenAPI documentation
pub static QUOTE_TAG: &str = "quote";

#[derive(Debug, Deserialize)]
pub struct QuoteListParams {
    pub status: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub entries: Option<u64>,
}

/// Submit a custom jewellery quote request.
///
/// # Returns
/// - `201 Created` - Request stored with status `new`
/// - `400 Bad Request` - Missing name or message, invalid email, unknown product
#[utoipa::path(
    post,
    path = "/api/quotes",
    tag = QUOTE_TAG,
    request_body = CreateQuoteDto,
    responses(
        (status = 201, description = "Quote request received", body = QuoteDto),
        (status = 400, description = "Invalid quote request", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_quote(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateQuoteParams::from_dto(payload)?;
    let quote = QuoteService::new(&state.db).submit(params).await?;

    Ok((StatusCode::CREATED, Json(quote.into_dto())))
}

/// Get quote requests newest first, optionally filtered by status.
///
/// # Access Control
/// - Admin bearer token
#[utoipa::path(
    get,
    path = "/api/admin/quotes",
    tag = QUOTE_TAG,
    params(
        ("status" = Option<String>, Query, description = "new, contacted or closed"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of quote requests", body = PaginatedQuotesDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_admin_quotes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<QuoteListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let status = match params.status.as_deref().filter(|s| !s.is_empty()) {
        Some(value) => Some(QuoteStatus::parse(value).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Unknown quote status '{}', expected new, contacted or closed",
                value
            ))
        })?),
        None => None,
    };

    let page = QuoteService::new(&state.db)
        .get_paginated(status, params.page, clamp_per_page(params.entries))
        .await?
        .map(Quote::into_dto);

    Ok((
        StatusCode::OK,
        Json(PaginatedQuotesDto {
            quotes: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/quotes/{id}/status",
    tag = QUOTE_TAG,
    params(
        ("id" = i32, Path, description = "Quote request ID")
    ),
    request_body = UpdateQuoteStatusDto,
    responses(
        (status = 200, description = "Status updated", body = QuoteDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 404, description = "Quote request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_quote_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateQuoteStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let quote = QuoteService::new(&state.db)
        .update_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(quote.into_dto())))
}
