use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::Utc;

use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::{AuthTokenService, Claims},
};

const BEARER_PREFIX: &str = "Bearer ";

/// Guards admin endpoints behind an `Authorization: Bearer <jwt>` header.
pub struct AuthGuard<'a> {
    tokens: &'a AuthTokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a AuthTokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Requires a valid admin token on the request
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token verified and not expired
    /// - `Err(AppError::AuthErr)` - Header missing, not a bearer token, badly signed or expired
    pub fn require_admin(&self) -> Result<Claims, AppError> {
        let token = bearer_token(self.headers)?;

        Ok(self.tokens.verify(token, Utc::now())?)
    }
}

/// Extracts the token from an `Authorization: Bearer` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::MalformedToken("non-ASCII authorization header".to_string()))?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AuthError::MalformedToken("expected a bearer token".to_string()))?;

    Ok(token)
}
