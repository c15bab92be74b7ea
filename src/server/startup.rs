use std::time::Duration;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::AppError,
    service::{
        auth::AuthTokenService, content::SiteContentService, payment::StripeClient,
        seo::SeoStore,
    },
};

/// Timeout applied to every outbound HTTP request.
const HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared HTTP client for outbound requests.
///
/// Redirects are not followed. Every request carries the storefront user agent, which
/// Nominatim requires.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECONDS))
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;

    Ok(client)
}

/// Creates the admin token service from the configured secret and password.
pub fn setup_auth_tokens(config: &Config) -> Result<AuthTokenService, AppError> {
    Ok(AuthTokenService::new(
        &config.jwt_secret,
        &config.admin_password,
    )?)
}

/// Creates the Stripe client sharing the application's HTTP client.
pub fn setup_stripe_client(config: &Config, http_client: reqwest::Client) -> StripeClient {
    StripeClient::new(
        http_client,
        &config.stripe_api_url,
        &config.stripe_secret_key,
        config.stripe_webhook_secret.as_deref(),
    )
}

/// Loads persisted SEO metadata into a fresh in-memory store.
///
/// Entries that fail to decode are skipped with a warning so a single bad row cannot
/// prevent startup.
///
/// # Arguments
/// - `db` - Database connection to read site content from
///
/// # Returns
/// - `Ok(SeoStore)` - Store populated with every persisted entry
/// - `Err(AppError)` - Database error while reading site content
pub async fn load_seo_store(db: &DatabaseConnection) -> Result<SeoStore, AppError> {
    let store = SeoStore::new();

    let entries = SiteContentService::new(db).load_seo_entries().await?;
    let count = entries.len();
    store.replace_all(entries).await;

    tracing::info!("Loaded {} SEO metadata entries", count);

    Ok(store)
}
