//! Page view factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a page view for `path` recorded now.
pub async fn create_page_view(
    db: &DatabaseConnection,
    path: &str,
) -> Result<entity::page_view::Model, DbErr> {
    create_page_view_at(db, path, Utc::now()).await
}

/// Inserts a page view for `path` recorded at `created_at`.
pub async fn create_page_view_at(
    db: &DatabaseConnection,
    path: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::page_view::Model, DbErr> {
    entity::page_view::ActiveModel {
        path: ActiveValue::Set(path.to_string()),
        referrer: ActiveValue::Set(None),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
