//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for external API requests
//! - Token service for admin bearer authentication
//! - Stripe client for payment intents and webhook verification
//! - SEO metadata store
//! - Upstream URLs for the geocoding and price feed proxies

use sea_orm::DatabaseConnection;

use crate::server::service::{auth::AuthTokenService, payment::StripeClient, seo::SeoStore};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `AuthTokenService` and `StripeClient` hold `Arc`-backed secrets
/// - `SeoStore` uses `Arc` for shared state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Does not follow redirects. Shared by the Stripe client and the geocode and price
    /// proxies.
    pub http_client: reqwest::Client,

    /// Signs and verifies admin bearer tokens and checks the admin password.
    pub auth_tokens: AuthTokenService,

    /// Stripe REST client used for payment intents and webhook signature checks.
    pub payments: StripeClient,

    /// In-memory SEO metadata, written through to site content.
    pub seo: SeoStore,

    /// Base URL of the Nominatim-compatible geocoding API.
    pub geocode_url: String,

    /// Base URL of the CoinGecko-compatible price feed API.
    pub price_feed_url: String,

    /// Application base URL for generating links.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        auth_tokens: AuthTokenService,
        payments: StripeClient,
        seo: SeoStore,
        geocode_url: String,
        price_feed_url: String,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            auth_tokens,
            payments,
            seo,
            geocode_url,
            price_feed_url,
            app_url,
        }
    }
}
