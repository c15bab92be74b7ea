use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request to an admin endpoint carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token is not a three-part JWT, uses an unexpected algorithm, or has undecodable parts.
    #[error("Malformed bearer token: {0}")]
    MalformedToken(String),

    /// Token signature does not match the configured secret.
    #[error("Bearer token signature mismatch")]
    InvalidSignature,

    /// Token was valid but its `exp` claim has passed.
    #[error("Bearer token expired at {0}")]
    TokenExpired(i64),

    /// Admin login attempted with the wrong password.
    #[error("Invalid admin credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized. The specific reason is logged at debug level while
/// the client only learns whether it should log in again.
///
/// # Returns
/// - 401 Unauthorized - For all authentication failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::InvalidCredentials => "Invalid password",
            Self::TokenExpired(_) => "Session expired, please log in again",
            Self::MissingToken | Self::MalformedToken(_) | Self::InvalidSignature => "Unauthorized",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
