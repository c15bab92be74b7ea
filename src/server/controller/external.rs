use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        external::{CryptoPricesDto, GeocodeDto},
    },
    server::{
        error::AppError,
        service::{geocode::GeocodeService, price_feed::PriceFeedService},
        state::AppState,
    },
};

pub static EXTERNAL_TAG: &str = "external";

#[derive(Debug, Deserialize)]
pub struct GeocodeParams {
    #[serde(default)]
    pub q: String,
}

/// Geocode an address.
///
/// Falls back to the store location with `fallback: true` when the upstream service
/// fails or has no match.
#[utoipa::path(
    get,
    path = "/api/geocode",
    tag = EXTERNAL_TAG,
    params(
        ("q" = String, Query, description = "Address to look up, 1 to 256 characters")
    ),
    responses(
        (status = 200, description = "Coordinates", body = GeocodeDto),
        (status = 400, description = "Empty or overlong query", body = ErrorDto)
    ),
)]
pub async fn geocode(
    State(state): State<AppState>,
    Query(params): Query<GeocodeParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = GeocodeService::new(&state.http_client, &state.geocode_url)
        .lookup(&params.q)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Get bitcoin and ethereum prices in CAD, or static prices with `fallback: true`.
#[utoipa::path(
    get,
    path = "/api/prices/crypto",
    tag = EXTERNAL_TAG,
    responses(
        (status = 200, description = "Crypto prices", body = CryptoPricesDto)
    ),
)]
pub async fn get_crypto_prices(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let prices = PriceFeedService::new(&state.http_client, &state.price_feed_url)
        .crypto_prices()
        .await;

    Ok((StatusCode::OK, Json(prices)))
}
