use crate::{
    client::model::error::ApiError,
    model::quote::{
        CreateQuoteDto, PaginatedQuotesDto, QuoteDto, QuoteStatus, UpdateQuoteStatusDto,
    },
};

use super::helper::{authorized, get, parse_response, post, put, send_request, serialize_json};

pub async fn submit_quote(payload: CreateQuoteDto) -> Result<QuoteDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/quotes").body(body)).await?;
    parse_response(response).await
}

/// Get quote requests, optionally only those in `status`
pub async fn get_admin_quotes(
    token: &str,
    status: Option<QuoteStatus>,
    page: u64,
    per_page: u64,
) -> Result<PaginatedQuotesDto, ApiError> {
    let mut url = format!("/api/admin/quotes?page={}&entries={}", page, per_page);
    if let Some(status) = status {
        url.push_str(&format!("&status={}", status.as_str()));
    }

    let response = send_request(authorized(get(&url), token)).await?;
    parse_response(response).await
}

pub async fn update_quote_status(
    token: &str,
    id: i32,
    status: QuoteStatus,
) -> Result<QuoteDto, ApiError> {
    let url = format!("/api/admin/quotes/{}/status", id);
    let body = serialize_json(&UpdateQuoteStatusDto { status })?;

    let response = send_request(authorized(put(&url), token).body(body)).await?;
    parse_response(response).await
}
