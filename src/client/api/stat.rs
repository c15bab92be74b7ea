use crate::{
    client::model::error::ApiError,
    model::stat::{CreatePageViewDto, DashboardDto, StatDto},
};

use super::helper::{
    authorized, get, parse_empty_response, parse_response, post, send_request, serialize_json,
};

pub async fn get_stats() -> Result<Vec<StatDto>, ApiError> {
    let response = send_request(get("/api/stats")).await?;
    parse_response(response).await
}

/// Reports a page view for analytics
pub async fn record_page_view(path: String, referrer: Option<String>) -> Result<(), ApiError> {
    let body = serialize_json(&CreatePageViewDto { path, referrer })?;

    let response = send_request(post("/api/page-views").body(body)).await?;
    parse_empty_response(response).await
}

pub async fn get_dashboard(token: &str) -> Result<DashboardDto, ApiError> {
    let response = send_request(authorized(get("/api/admin/dashboard"), token)).await?;
    parse_response(response).await
}
