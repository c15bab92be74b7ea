//! Page view log repository for database operations

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::stat::CreatePageViewParams;

pub struct PageViewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageViewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePageViewParams) -> Result<(), DbErr> {
        entity::page_view::ActiveModel {
            path: ActiveValue::Set(params.path),
            referrer: ActiveValue::Set(params.referrer),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Counts views per path at or after `since`, busiest first, ties by path
    pub async fn count_by_path_since(
        &self,
        since: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<(String, i64)>, DbErr> {
        let views = || Func::count(Expr::col(entity::page_view::Column::Id));

        entity::prelude::PageView::find()
            .select_only()
            .column(entity::page_view::Column::Path)
            .expr_as(views(), "views")
            .filter(entity::page_view::Column::CreatedAt.gte(since))
            .group_by(entity::page_view::Column::Path)
            .order_by_desc(views())
            .order_by_asc(entity::page_view::Column::Path)
            .limit(limit)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Counts views per calendar day at or after `since`
    ///
    /// Days are `YYYY-MM-DD` strings in the database session's time zone.
    pub async fn count_by_day_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<(String, i64)>, DbErr> {
        let day = || {
            Func::cast_as(
                Func::cust("DATE").arg(Expr::col(entity::page_view::Column::CreatedAt)),
                "TEXT",
            )
        };

        entity::prelude::PageView::find()
            .select_only()
            .expr_as(day(), "day")
            .expr_as(
                Func::count(Expr::col(entity::page_view::Column::Id)),
                "views",
            )
            .filter(entity::page_view::Column::CreatedAt.gte(since))
            .group_by(day())
            .order_by_asc(day())
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn count_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::PageView::find()
            .filter(entity::page_view::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }

    /// Deletes views recorded before `cutoff`
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::PageView::delete_many()
            .filter(entity::page_view::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
