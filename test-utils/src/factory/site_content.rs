//! Site content factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a site content entry.
pub async fn create_site_content(
    db: &DatabaseConnection,
    key: &str,
    value: &str,
) -> Result<entity::site_content::Model, DbErr> {
    entity::site_content::ActiveModel {
        key: ActiveValue::Set(key.to_string()),
        value: ActiveValue::Set(value.to_string()),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
