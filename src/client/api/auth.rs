use crate::{
    client::model::error::ApiError,
    model::auth::{LoginDto, TokenDto, TokenStatusDto},
};

use super::helper::{authorized, get, parse_response, post, send_request, serialize_json};

/// Exchanges the admin password for a bearer token
pub async fn login(password: String) -> Result<TokenDto, ApiError> {
    let body = serialize_json(&LoginDto { password })?;

    let response = send_request(post("/api/auth/login").body(body)).await?;
    parse_response(response).await
}

pub async fn verify_token(token: &str) -> Result<TokenStatusDto, ApiError> {
    let response = send_request(authorized(get("/api/auth/verify"), token)).await?;
    parse_response(response).await
}
