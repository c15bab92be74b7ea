use std::collections::BTreeMap;

use crate::{client::model::error::ApiError, model::content::SeoMetadataDto};

use super::helper::{encode_query, get, parse_response, send_request};

/// Get all editable site content keyed by content key
pub async fn get_content() -> Result<BTreeMap<String, String>, ApiError> {
    let response = send_request(get("/api/content")).await?;
    parse_response(response).await
}

/// Get title and description overrides for a page path
pub async fn get_seo(path: &str) -> Result<SeoMetadataDto, ApiError> {
    let url = format!("/api/seo?path={}", encode_query(path));

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
