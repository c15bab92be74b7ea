//! Address lookup against a Nominatim-compatible search API.

use dioxus_logger::tracing;
use serde::Deserialize;
use url::Url;

use crate::{
    model::external::GeocodeDto,
    server::{error::AppError, util::endpoint::endpoint},
};

const MAX_QUERY_LENGTH: usize = 256;

/// Store location returned when the upstream lookup fails.
pub const FALLBACK_LAT: f64 = 43.6532;
pub const FALLBACK_LON: f64 = -79.3832;
pub const FALLBACK_DISPLAY_NAME: &str = "Toronto, Ontario, Canada";

/// Nominatim reports coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
}

pub struct GeocodeService<'a> {
    http_client: &'a reqwest::Client,
    api_url: &'a str,
}

impl<'a> GeocodeService<'a> {
    pub fn new(http_client: &'a reqwest::Client, api_url: &'a str) -> Self {
        Self {
            http_client,
            api_url,
        }
    }

    /// Resolves a free-text address to coordinates
    ///
    /// # Returns
    /// - `Ok(GeocodeDto)` - First search hit, or the store location with `fallback: true`
    ///   when the upstream call fails or finds nothing
    /// - `Err(AppError::BadRequest)` - Empty query or longer than 256 characters
    pub async fn lookup(&self, query: &str) -> Result<GeocodeDto, AppError> {
        let query = query.trim();
        if query.is_empty() || query.chars().count() > MAX_QUERY_LENGTH {
            return Err(AppError::BadRequest(format!(
                "q must be between 1 and {} characters",
                MAX_QUERY_LENGTH
            )));
        }

        match self.search(query).await {
            Ok(Some(result)) => Ok(result),
            Ok(None) => {
                tracing::warn!("No geocode result for {:?}, using store location", query);
                Ok(fallback())
            }
            Err(e) => {
                tracing::warn!("Geocode lookup failed, using store location: {}", e);
                Ok(fallback())
            }
        }
    }

    async fn search(&self, query: &str) -> Result<Option<GeocodeDto>, AppError> {
        let url = search_url(self.api_url, query)?;

        let results = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<SearchResult>>()
            .await?;

        let Some(first) = results.into_iter().next() else {
            return Ok(None);
        };

        let (Ok(lat), Ok(lon)) = (first.lat.parse::<f64>(), first.lon.parse::<f64>()) else {
            return Ok(None);
        };

        Ok(Some(GeocodeDto {
            lat,
            lon,
            display_name: first.display_name,
            fallback: false,
        }))
    }
}

fn search_url(api_url: &str, query: &str) -> Result<Url, AppError> {
    let mut url = endpoint(api_url, "search")?;
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("format", "json")
        .append_pair("limit", "1");
    Ok(url)
}

fn fallback() -> GeocodeDto {
    GeocodeDto {
        lat: FALLBACK_LAT,
        lon: FALLBACK_LON,
        display_name: FALLBACK_DISPLAY_NAME.to_string(),
        fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_search_url() {
        let url = search_url("https://nominatim.example.org", "1 Main St, Toronto").unwrap();
        assert_eq!(url.path(), "/search");
        assert_eq!(
            url.query(),
            Some("q=1+Main+St%2C+Toronto&format=json&limit=1")
        );
    }

    #[tokio::test]
    async fn rejects_empty_and_long_queries() {
        let client = reqwest::Client::new();
        let service = GeocodeService::new(&client, "http://127.0.0.1:1");

        assert!(matches!(
            service.lookup("   ").await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.lookup(&"a".repeat(257)).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn falls_back_when_upstream_unreachable() {
        let client = reqwest::Client::new();
        let service = GeocodeService::new(&client, "http://127.0.0.1:1");

        let result = service.lookup("Toronto").await.unwrap();

        assert!(result.fallback);
        assert_eq!(result.display_name, FALLBACK_DISPLAY_NAME);
    }
}
