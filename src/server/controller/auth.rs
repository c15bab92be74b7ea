use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, TokenDto, TokenStatusDto},
    },
    server::{error::AppError, middleware::auth::AuthGuard, state::AppState},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Exchanges the admin password for a bearer token.
///
/// # Returns
/// - `200 OK` - Token valid for eight hours
/// - `401 Unauthorized` - Wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login succeeded", body = TokenDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let issued = state.auth_tokens.login(&payload.password, Utc::now())?;

    tracing::info!("Admin logged in, token expires at {}", issued.expires_at);

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            token: issued.token,
            expires_at: issued.expires_at,
        }),
    ))
}

/// Confirms the bearer token on the request is still valid.
///
/// # Returns
/// - `200 OK` - Token valid, with its expiry
/// - `401 Unauthorized` - Missing, malformed, badly signed or expired token
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Token is valid", body = TokenStatusDto),
        (status = 401, description = "Token missing or invalid", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.auth_tokens, &headers).require_admin()?;

    Ok((
        StatusCode::OK,
        Json(TokenStatusDto {
            valid: true,
            expires_at: claims.expires_at(),
        }),
    ))
}
