use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::analytics::AnalyticsService};

/// Daily at 03:00 UTC.
const RETENTION_SCHEDULE: &str = "0 0 3 * * *";

/// Starts the page view retention scheduler
///
/// Once a day the job deletes page views older than the retention window.
///
/// # Arguments
/// - `db`: Database connection
/// - `retention_days`: Age in days after which page views are deleted
pub async fn start_scheduler(db: DatabaseConnection, retention_days: i64) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(RETENTION_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = prune_page_views(&db, retention_days).await {
                tracing::error!("Error pruning page views: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Page view retention scheduler started, keeping {} days",
        retention_days
    );

    Ok(())
}

async fn prune_page_views(db: &DatabaseConnection, retention_days: i64) -> Result<(), AppError> {
    let removed = AnalyticsService::new(db)
        .prune_page_views(retention_days, Utc::now())
        .await?;

    tracing::info!("Pruned {} page views older than {} days", removed, retention_days);

    Ok(())
}
