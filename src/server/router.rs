use std::{
    net::{IpAddr, Ipv4Addr},
    sync::Arc,
};

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, Request,
    },
    Router,
};
use dioxus_logger::tracing;
use tower_governor::{
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, SmartIpKeyExtractor},
    GovernorError, GovernorLayer,
};
use tower_http::cors::CorsLayer;
use utoipa::{
    openapi::{
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
        Components,
    },
    OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, checkout, content, discount, external, faq, product, quote, review, stat},
    state::AppState,
};

/// Seconds between replenished rate limit tokens for public form posts.
const RATE_LIMIT_PERIOD_SECONDS: u64 = 2;
/// Requests a client may burst before being limited.
const RATE_LIMIT_BURST: u32 = 10;

#[derive(OpenApi)]
#[openapi(info(
    title = "Storefront API",
    description = "Catalog, checkout and admin API for the gemstone storefront"
))]
struct ApiDoc;

/// Builds the `/api` router with OpenAPI docs, rate limited public forms and CORS.
///
/// # Arguments
/// - `app_url` - Storefront origin allowed for cross-origin requests
pub fn router(app_url: &str) -> Router<AppState> {
    let mut limited = OpenApiRouter::new()
        .routes(routes!(review::submit_review))
        .routes(routes!(quote::submit_quote))
        .routes(routes!(stat::record_page_view));

    // Burst of 10, then one request every 2 seconds per client
    match GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor)
        .per_second(RATE_LIMIT_PERIOD_SECONDS)
        .burst_size(RATE_LIMIT_BURST)
        .finish()
    {
        Some(config) => limited = limited.layer(GovernorLayer::new(Arc::new(config))),
        None => tracing::error!("Invalid rate limit configuration, public forms are unlimited"),
    }

    let (router, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::verify))
        .routes(routes!(product::get_products))
        .routes(routes!(product::get_product))
        .routes(routes!(review::get_product_reviews))
        .routes(routes!(product::get_admin_products, product::create_product))
        .routes(routes!(product::update_product, product::delete_product))
        .routes(routes!(review::get_admin_reviews))
        .routes(routes!(review::approve_review))
        .routes(routes!(review::delete_review))
        .routes(routes!(faq::get_faq))
        .routes(routes!(faq::get_admin_faq, faq::create_faq))
        .routes(routes!(faq::update_faq, faq::delete_faq))
        .routes(routes!(quote::get_admin_quotes))
        .routes(routes!(quote::update_quote_status))
        .routes(routes!(stat::get_stats))
        .routes(routes!(stat::create_stat))
        .routes(routes!(stat::update_stat, stat::delete_stat))
        .routes(routes!(stat::get_analytics))
        .routes(routes!(stat::get_dashboard))
        .routes(routes!(content::get_content))
        .routes(routes!(content::get_content_value))
        .routes(routes!(content::put_content, content::delete_content))
        .routes(routes!(content::get_seo))
        .routes(routes!(content::put_seo))
        .routes(routes!(discount::validate_discount))
        .routes(routes!(discount::get_discounts, discount::create_discount))
        .routes(routes!(discount::update_discount, discount::delete_discount))
        .routes(routes!(checkout::get_summary))
        .routes(routes!(checkout::create_payment_intent))
        .routes(routes!(checkout::handle_webhook))
        .routes(routes!(external::geocode))
        .routes(routes!(external::get_crypto_prices))
        .merge(limited)
        .split_for_parts();

    add_bearer_scheme(&mut api);

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(cors_layer(app_url))
}

/// Registers the `bearer` security scheme referenced by admin endpoints.
fn add_bearer_scheme(api: &mut utoipa::openapi::OpenApi) {
    api.components.get_or_insert_with(Components::new).add_security_scheme(
        "bearer",
        SecurityScheme::Http(
            HttpBuilder::new()
                .scheme(HttpAuthScheme::Bearer)
                .bearer_format("JWT")
                .build(),
        ),
    );
}

fn cors_layer(app_url: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    match HeaderValue::from_str(app_url.trim_end_matches('/')) {
        Ok(origin) => cors.allow_origin(origin),
        Err(e) => {
            tracing::warn!("APP_URL is not a valid origin, CORS disabled: {}", e);
            cors
        }
    }
}

/// Rate limit key for public form posts.
///
/// Uses the client IP from `X-Forwarded-For`, `X-Real-IP`, `Forwarded` or the peer
/// address. Requests with no identifiable IP share one bucket.
#[derive(Debug, Clone, Copy)]
pub struct ClientIpKeyExtractor;

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        Ok(SmartIpKeyExtractor
            .extract(req)
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)))
    }
}
