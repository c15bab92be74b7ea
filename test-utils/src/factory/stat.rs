//! Public stat factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_stat(db: &DatabaseConnection) -> Result<entity::stat::Model, DbErr> {
    create_stat_with(db, &format!("Stat {}", next_id()), "100+", 0).await
}

/// Creates a stat with explicit label, value and ordering.
pub async fn create_stat_with(
    db: &DatabaseConnection,
    label: &str,
    value: &str,
    sort_order: i32,
) -> Result<entity::stat::Model, DbErr> {
    entity::stat::ActiveModel {
        label: ActiveValue::Set(label.to_string()),
        value: ActiveValue::Set(value.to_string()),
        sort_order: ActiveValue::Set(sort_order),
        ..Default::default()
    }
    .insert(db)
    .await
}
