//! Crypto price lookup against a CoinGecko-compatible simple-price API.

use dioxus_logger::tracing;
use serde::Deserialize;
use url::Url;

use crate::{
    model::external::CryptoPricesDto,
    server::{error::AppError, util::endpoint::endpoint},
};

/// Static CAD prices used when the feed is unavailable.
pub const FALLBACK_BITCOIN_CAD: f64 = 90_000.0;
pub const FALLBACK_ETHEREUM_CAD: f64 = 3_000.0;

#[derive(Debug, Deserialize)]
struct SimplePrice {
    bitcoin: CadPrice,
    ethereum: CadPrice,
}

#[derive(Debug, Deserialize)]
struct CadPrice {
    cad: f64,
}

pub struct PriceFeedService<'a> {
    http_client: &'a reqwest::Client,
    api_url: &'a str,
}

impl<'a> PriceFeedService<'a> {
    pub fn new(http_client: &'a reqwest::Client, api_url: &'a str) -> Self {
        Self {
            http_client,
            api_url,
        }
    }

    /// Gets bitcoin and ethereum prices in CAD, falling back to static prices on any failure
    pub async fn crypto_prices(&self) -> CryptoPricesDto {
        match self.fetch().await {
            Ok(prices) => CryptoPricesDto {
                bitcoin_cad: prices.bitcoin.cad,
                ethereum_cad: prices.ethereum.cad,
                fallback: false,
            },
            Err(e) => {
                tracing::warn!("Price feed unavailable, using static prices: {}", e);
                fallback()
            }
        }
    }

    async fn fetch(&self) -> Result<SimplePrice, AppError> {
        Ok(self
            .http_client
            .get(price_url(self.api_url)?)
            .send()
            .await?
            .error_for_status()?
            .json::<SimplePrice>()
            .await?)
    }
}

fn price_url(api_url: &str) -> Result<Url, AppError> {
    let mut url = endpoint(api_url, "simple/price")?;
    url.query_pairs_mut()
        .append_pair("ids", "bitcoin,ethereum")
        .append_pair("vs_currencies", "cad");
    Ok(url)
}

fn fallback() -> CryptoPricesDto {
    CryptoPricesDto {
        bitcoin_cad: FALLBACK_BITCOIN_CAD,
        ethereum_cad: FALLBACK_ETHEREUM_CAD,
        fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_price_url() {
        let url = price_url("https://api.coingecko.com/api/v3").unwrap();
        assert_eq!(url.path(), "/api/v3/simple/price");
        assert_eq!(
            url.query(),
            Some("ids=bitcoin%2Cethereum&vs_currencies=cad")
        );
    }

    #[test]
    fn parses_simple_price_body() {
        let body = r#"{"bitcoin":{"cad":95000.5},"ethereum":{"cad":3200.25}}"#;
        let prices: SimplePrice = serde_json::from_str(body).unwrap();
        assert_eq!(prices.bitcoin.cad, 95_000.5);
        assert_eq!(prices.ethereum.cad, 3_200.25);
    }

    #[tokio::test]
    async fn falls_back_when_upstream_unreachable() {
        let client = reqwest::Client::new();

        let prices = PriceFeedService::new(&client, "http://127.0.0.1:1")
            .crypto_prices()
            .await;

        assert!(prices.fallback);
        assert_eq!(prices.bitcoin_cad, FALLBACK_BITCOIN_CAD);
    }
}
