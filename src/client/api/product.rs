use crate::{
    client::model::error::ApiError,
    model::product::ProductDto,
};

use super::helper::{encode_query, get, parse_response, send_request};

/// Get active products, optionally filtered by category or featured flag
pub async fn get_products(
    category: Option<String>,
    featured: Option<bool>,
) -> Result<Vec<ProductDto>, ApiError> {
    let mut query = Vec::new();
    if let Some(category) = category {
        query.push(format!("category={}", encode_query(&category)));
    }
    if let Some(featured) = featured {
        query.push(format!("featured={}", featured));
    }

    let url = if query.is_empty() {
        "/api/products".to_string()
    } else {
        format!("/api/products?{}", query.join("&"))
    };

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_product(slug: &str) -> Result<ProductDto, ApiError> {
    let url = format!("/api/products/{}", encode_query(slug));

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
