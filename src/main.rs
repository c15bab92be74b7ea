mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, scheduler::page_view_retention, startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let http_client = startup::setup_reqwest_client()?;
        let auth_tokens = startup::setup_auth_tokens(&config)?;
        let payments = startup::setup_stripe_client(&config, http_client.clone());
        let seo = startup::load_seo_store(&db).await?;

        if config.stripe_webhook_secret.is_none() {
            tracing::warn!("STRIPE_WEBHOOK_SECRET is not set, webhook events will be rejected");
        }

        tracing::info!("Starting server");

        // Start page view retention scheduler
        let scheduler_db = db.clone();
        let retention_days = config.page_view_retention_days;
        tokio::spawn(async move {
            if let Err(e) = page_view_retention::start_scheduler(scheduler_db, retention_days).await
            {
                tracing::error!("Page view retention scheduler error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router(&config.app_url).with_state(AppState::new(
            db,
            http_client,
            auth_tokens,
            payments,
            seo,
            config.geocode_api_url.clone(),
            config.price_feed_api_url.clone(),
            config.app_url.clone(),
        ));
        router = router.merge(server_routes);

        Ok(router)
    })
}
