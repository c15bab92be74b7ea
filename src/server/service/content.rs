use std::collections::BTreeMap;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::site_content::SiteContentRepository,
    error::AppError,
    model::content::{
        validate_content_key, SeoMetadata, SiteContent, UpsertContentParams, SEO_KEY_PREFIX,
    },
};

pub struct SiteContentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SiteContentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every editable key/value pair, excluding persisted SEO rows
    pub async fn get_map(&self) -> Result<BTreeMap<String, String>, AppError> {
        let rows = SiteContentRepository::new(self.db).get_all().await?;

        Ok(rows
            .into_iter()
            .filter(|row| !row.key.starts_with(SEO_KEY_PREFIX))
            .map(|row| (row.key, row.value))
            .collect())
    }

    /// Gets one editable value
    ///
    /// # Returns
    /// - `Ok(SiteContent)` - The stored value
    /// - `Err(AppError::NotFound)` - Key unknown or not an editable key
    pub async fn get(&self, key: &str) -> Result<SiteContent, AppError> {
        if validate_content_key(key).is_err() {
            return Err(AppError::NotFound(format!("Content '{}' not found", key)));
        }

        SiteContentRepository::new(self.db)
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Content '{}' not found", key)))
    }

    pub async fn upsert(&self, params: UpsertContentParams) -> Result<SiteContent, AppError> {
        let row = SiteContentRepository::new(self.db)
            .upsert(&params.key, &params.value)
            .await?;

        Ok(row)
    }

    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        validate_content_key(key)?;

        if !SiteContentRepository::new(self.db).delete(key).await? {
            return Err(AppError::NotFound(format!("Content '{}' not found", key)));
        }

        Ok(())
    }

    /// Writes SEO metadata as JSON under `seo:{path}`
    pub async fn save_seo(&self, metadata: &SeoMetadata) -> Result<(), AppError> {
        let value = serde_json::to_string(metadata)?;

        SiteContentRepository::new(self.db)
            .upsert(&metadata.storage_key(), &value)
            .await?;

        Ok(())
    }

    /// Reads every persisted SEO entry, skipping rows that fail to decode
    pub async fn load_seo_entries(&self) -> Result<Vec<SeoMetadata>, AppError> {
        let rows = SiteContentRepository::new(self.db)
            .get_by_prefix(SEO_KEY_PREFIX)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| match serde_json::from_str::<SeoMetadata>(&row.value) {
                Ok(metadata) => Some(metadata),
                Err(e) => {
                    tracing::warn!("Skipping unreadable SEO entry {}: {}", row.key, e);
                    None
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::SiteContent as SiteContentEntity;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn map_hides_seo_rows() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(SiteContentEntity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::site_content::create_site_content(db, "home.hero_title", "Hello").await?;
        factory::site_content::create_site_content(db, "seo:/shop", "{}").await?;

        let map = SiteContentService::new(db).get_map().await?;

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("home.hero_title").map(String::as_str), Some("Hello"));

        Ok(())
    }

    #[tokio::test]
    async fn missing_key_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(SiteContentEntity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = SiteContentService::new(db);

        assert!(matches!(service.get("about").await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete("about").await, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn skips_corrupt_seo_rows() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(SiteContentEntity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::site_content::create_site_content(db, "seo:/broken", "not json").await?;
        let service = SiteContentService::new(db);
        service
            .save_seo(&SeoMetadata::site_default("/faq"))
            .await?;

        let entries = service.load_seo_entries().await?;

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "/faq");

        Ok(())
    }
}
