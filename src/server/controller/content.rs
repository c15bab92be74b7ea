use std::collections::BTreeMap;

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
        content::{SeoMetadataDto, SiteContentDto, UpdateSiteContentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::content::{SeoMetadata, UpsertContentParams},
        service::content::SiteContentService,
        state::AppState,
    },
};

/// Tag for grouping site content and SEO endpoints in OpenAPI documentation
pub static CONTENT_TAG: &str = "content";

#[derive(Debug, Deserialize)]
pub struct SeoParams {
    pub path: Option<String>,
}

/// Get all editable site content as a key/value map.
#[utoipa::path(
    get,
    path = "/api/content",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Content map", body = BTreeMap<String, String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_content(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let content = SiteContentService::new(&state.db).get_map().await?;

    Ok((StatusCode::OK, Json(content)))
}

#[utoipa::path(
    get,
    path = "/api/content/{key}",
    tag = CONTENT_TAG,
    params(
        ("key" = String, Path, description = "Content key")
    ),
    responses(
        (status = 200, description = "Content value", body = SiteContentDto),
        (status = 404, description = "Content not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_content_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let content = SiteContentService::new(&state.db).get(&key).await?;

    Ok((StatusCode::OK, Json(content.into_dto())))
}

/// Create or replace one content value.
///
/// # Access Control
/// - Admin bearer token
///
/// # Returns
/// - `200 OK` - Stored value
/// - `400 Bad Request` - Key not `[a-z0-9_.-]{1,100}` or value too long
#[utoipa::path(
    put,
    path = "/api/admin/content/{key}",
    tag = CONTENT_TAG,
    params(
        ("key" = String, Path, description = "Content key")
    ),
    request_body = UpdateSiteContentDto,
    responses(
        (status = 200, description = "Content stored", body = SiteContentDto),
        (status = 400, description = "Invalid key or value", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn put_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(key): Path<String>,
    Json(payload): Json<UpdateSiteContentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let params = UpsertContentParams::new(key, payload.value)?;
    let content = SiteContentService::new(&state.db).upsert(params).await?;

    Ok((StatusCode::OK, Json(content.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/content/{key}",
    tag = CONTENT_TAG,
    params(
        ("key" = String, Path, description = "Content key")
    ),
    responses(
        (status = 204, description = "Content deleted"),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 404, description = "Content not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    SiteContentService::new(&state.db).delete(&key).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get SEO metadata for a site path, falling back to the site defaults.
#[utoipa::path(
    get,
    path = "/api/seo",
    tag = CONTENT_TAG,
    params(
        ("path" = Option<String>, Query, description = "Site path starting with '/' (default: /)")
    ),
    responses(
        (status = 200, description = "SEO metadata", body = SeoMetadataDto),
        (status = 400, description = "Path does not start with '/'", body = ErrorDto)
    ),
)]
pub async fn get_seo(
    State(state): State<AppState>,
    Query(params): Query<SeoParams>,
) -> Result<impl IntoResponse, AppError> {
    let path = params.path.unwrap_or_else(|| "/".to_string());
    if !path.starts_with('/') {
        return Err(AppError::BadRequest("path must start with '/'".to_string()));
    }

    let metadata = state.seo.get(&path).await;

    Ok((StatusCode::OK, Json(metadata.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/seo",
    tag = CONTENT_TAG,
    request_body = SeoMetadataDto,
    responses(
        (status = 200, description = "SEO metadata stored", body = SeoMetadataDto),
        (status = 400, description = "Invalid metadata", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn put_seo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SeoMetadataDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    let metadata = SeoMetadata::from_dto(payload)?;
    let metadata = state.seo.save(&state.db, metadata).await?;

    Ok((StatusCode::OK, Json(metadata.into_dto())))
}
