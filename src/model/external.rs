use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Geocoding result. `fallback` is set when the store location was substituted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GeocodeDto {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
    pub fallback: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CryptoPricesDto {
    pub bitcoin_cad: f64,
    pub ethereum_cad: f64,
    pub fallback: bool,
}
