use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_STRIPE_API_URL: &str = "https://api.stripe.com";
const DEFAULT_GEOCODE_API_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_PRICE_FEED_API_URL: &str = "https://api.coingecko.com/api/v3";
const DEFAULT_PAGE_VIEW_RETENTION_DAYS: i64 = 365;

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub admin_password: String,

    pub stripe_secret_key: String,
    pub stripe_webhook_secret: Option<String>,
    pub stripe_api_url: String,

    pub geocode_api_url: String,
    pub price_feed_api_url: String,

    pub app_url: String,
    pub page_view_retention_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            admin_password: required("ADMIN_PASSWORD")?,
            stripe_secret_key: required("STRIPE_SECRET_KEY")?,
            stripe_webhook_secret: optional("STRIPE_WEBHOOK_SECRET"),
            stripe_api_url: optional("STRIPE_API_URL")
                .unwrap_or_else(|| DEFAULT_STRIPE_API_URL.to_string()),
            geocode_api_url: optional("GEOCODE_API_URL")
                .unwrap_or_else(|| DEFAULT_GEOCODE_API_URL.to_string()),
            price_feed_api_url: optional("PRICE_FEED_API_URL")
                .unwrap_or_else(|| DEFAULT_PRICE_FEED_API_URL.to_string()),
            app_url: optional("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            page_view_retention_days: match optional("PAGE_VIEW_RETENTION_DAYS") {
                Some(value) => parse_retention_days(&value)?,
                None => DEFAULT_PAGE_VIEW_RETENTION_DAYS,
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

/// Reads an optional variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn parse_retention_days(value: &str) -> Result<i64, ConfigError> {
    match value.trim().parse::<i64>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "PAGE_VIEW_RETENTION_DAYS".to_string(),
            reason: format!("expected a positive number of days, got '{}'", value),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_retention_days() {
        assert_eq!(parse_retention_days("30").unwrap(), 30);
        assert_eq!(parse_retention_days(" 7 ").unwrap(), 7);
    }

    #[test]
    fn rejects_invalid_retention_days() {
        assert!(matches!(
            parse_retention_days("0"),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
        assert!(matches!(
            parse_retention_days("forever"),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
    }
}
