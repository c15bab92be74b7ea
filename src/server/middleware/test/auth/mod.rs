use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    service::auth::{AuthTokenService, ADMIN_SUBJECT},
};

mod require_admin;

fn tokens() -> AuthTokenService {
    AuthTokenService::new("guard-secret", "correct horse").unwrap()
}

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}
