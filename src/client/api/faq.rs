use crate::{client::model::error::ApiError, model::faq::FaqDto};

use super::helper::{get, parse_response, send_request};

/// Get active FAQ entries in display order
pub async fn get_faq() -> Result<Vec<FaqDto>, ApiError> {
    let response = send_request(get("/api/faq")).await?;
    parse_response(response).await
}
