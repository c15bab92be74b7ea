//! Page view logging, traffic analytics and the admin dashboard.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::quote::QuoteStatus,
    server::{
        data::{
            page_view::PageViewRepository, product::ProductRepository, quote::QuoteRepository,
            review::ReviewRepository,
        },
        error::AppError,
        model::stat::{Analytics, CreatePageViewParams, Dashboard, TOP_PATHS_LIMIT},
    },
};

/// Window used for the dashboard's view counter.
const DASHBOARD_VIEW_DAYS: i64 = 30;

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record_page_view(&self, params: CreatePageViewParams) -> Result<(), AppError> {
        Ok(PageViewRepository::new(self.db).create(params).await?)
    }

    /// Summarizes page views for the last `days` calendar days (UTC), today included
    ///
    /// Every day in the window is present in `daily`, with zero for days without traffic.
    /// Top paths are ordered by views descending, ties by path.
    pub async fn analytics(&self, days: u32, now: DateTime<Utc>) -> Result<Analytics, AppError> {
        let today = now.date_naive();
        let first_day = today - Duration::days(days as i64 - 1);
        let since = first_day.and_time(NaiveTime::MIN).and_utc();

        let page_views = PageViewRepository::new(self.db);

        let mut per_day: BTreeMap<NaiveDate, u64> = first_day
            .iter_days()
            .take(days as usize)
            .map(|day| (day, 0))
            .collect();
        for (day, views) in page_views.count_by_day_since(since).await? {
            let Ok(day) = NaiveDate::parse_from_str(&day, "%Y-%m-%d") else {
                continue;
            };
            if let Some(count) = per_day.get_mut(&day) {
                *count += views.max(0) as u64;
            }
        }

        let top_paths = page_views
            .count_by_path_since(since, TOP_PATHS_LIMIT as u64)
            .await?
            .into_iter()
            .map(|(path, views)| (path, views.max(0) as u64))
            .collect();

        Ok(Analytics {
            days,
            total_views: page_views.count_since(since).await?,
            top_paths,
            daily: per_day.into_iter().collect(),
        })
    }

    /// Collects the dashboard counters
    pub async fn dashboard(&self, now: DateTime<Utc>) -> Result<Dashboard, AppError> {
        let products = ProductRepository::new(self.db);

        Ok(Dashboard {
            active_products: products.count_active().await?,
            total_products: products.count_all().await?,
            pending_reviews: ReviewRepository::new(self.db).count_pending().await?,
            new_quotes: QuoteRepository::new(self.db)
                .count_by_status(QuoteStatus::New)
                .await?,
            views_last_30_days: PageViewRepository::new(self.db)
                .count_since(now - Duration::days(DASHBOARD_VIEW_DAYS))
                .await?,
        })
    }

    /// Deletes page views older than the retention window
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of page views removed
    /// - `Err(AppError)` - Database error during delete
    pub async fn prune_page_views(
        &self,
        retention_days: i64,
        now: DateTime<Utc>,
    ) -> Result<u64, AppError> {
        let cutoff = now - Duration::days(retention_days);

        Ok(PageViewRepository::new(self.db)
            .delete_older_than(cutoff)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn summarizes_views_by_path_and_day() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let now = Utc::now();
        factory::page_view::create_page_view_at(db, "/shop", now).await?;
        factory::page_view::create_page_view_at(db, "/shop", now).await?;
        factory::page_view::create_page_view_at(db, "/faq", now - Duration::days(1)).await?;
        factory::page_view::create_page_view_at(db, "/", now - Duration::days(10)).await?;

        let analytics = AnalyticsService::new(db).analytics(7, now).await?;

        assert_eq!(analytics.days, 7);
        assert_eq!(analytics.total_views, 3);
        assert_eq!(analytics.top_paths[0], ("/shop".to_string(), 2));
        assert_eq!(analytics.top_paths[1], ("/faq".to_string(), 1));
        assert_eq!(analytics.daily.len(), 7);
        assert_eq!(analytics.daily.last(), Some(&(now.date_naive(), 2)));
        assert_eq!(
            analytics.daily[5],
            ((now - Duration::days(1)).date_naive(), 1)
        );

        Ok(())
    }

    #[tokio::test]
    async fn limits_top_paths() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        for i in 0..12 {
            factory::page_view::create_page_view(db, &format!("/p/{}", i)).await?;
        }

        let analytics = AnalyticsService::new(db).analytics(30, Utc::now()).await?;

        assert_eq!(analytics.total_views, 12);
        assert_eq!(analytics.top_paths.len(), TOP_PATHS_LIMIT);

        Ok(())
    }

    #[tokio::test]
    async fn dashboard_counts() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let product = factory::product::create_product(db).await?;
        factory::product::ProductFactory::new(db)
            .active(false)
            .build()
            .await?;
        factory::review::create_review(db, product.id).await?;
        factory::quote::create_quote(db).await?;
        factory::quote::QuoteFactory::new(db)
            .status("closed")
            .build()
            .await?;
        factory::page_view::create_page_view(db, "/").await?;

        let dashboard = AnalyticsService::new(db).dashboard(Utc::now()).await?;

        assert_eq!(dashboard.active_products, 1);
        assert_eq!(dashboard.total_products, 2);
        assert_eq!(dashboard.pending_reviews, 1);
        assert_eq!(dashboard.new_quotes, 1);
        assert_eq!(dashboard.views_last_30_days, 1);

        Ok(())
    }
}
