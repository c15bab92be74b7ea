//! Site content data repository for database operations
//!
//! Site content is a flat key/value table. Editable copy uses plain keys while persisted
//! SEO metadata lives under the `seo:` prefix.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::content::SiteContent;

pub struct SiteContentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SiteContentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every row ordered by key
    pub async fn get_all(&self) -> Result<Vec<SiteContent>, DbErr> {
        let rows = entity::prelude::SiteContent::find()
            .order_by_asc(entity::site_content::Column::Key)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(SiteContent::from_entity).collect())
    }

    /// Gets rows whose key starts with `prefix`
    pub async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<SiteContent>, DbErr> {
        let rows = entity::prelude::SiteContent::find()
            .filter(entity::site_content::Column::Key.starts_with(prefix))
            .order_by_asc(entity::site_content::Column::Key)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(SiteContent::from_entity).collect())
    }

    pub async fn find_by_key(&self, key: &str) -> Result<Option<SiteContent>, DbErr> {
        let row = entity::prelude::SiteContent::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(row.map(SiteContent::from_entity))
    }

    /// Inserts or replaces the value stored under `key`
    ///
    /// # Returns
    /// - `Ok(SiteContent)` - The stored row
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, key: &str, value: &str) -> Result<SiteContent, DbErr> {
        let row = entity::site_content::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
        };

        entity::prelude::SiteContent::insert(row)
            .on_conflict(
                OnConflict::column(entity::site_content::Column::Key)
                    .update_columns([
                        entity::site_content::Column::Value,
                        entity::site_content::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.find_by_key(key).await?.ok_or(DbErr::RecordNotFound(format!(
            "Site content '{}' not found after upsert",
            key
        )))
    }

    pub async fn delete(&self, key: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::SiteContent::delete_by_id(key.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
