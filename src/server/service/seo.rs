//! In-memory SEO metadata store.
//!
//! Metadata is read on every page render, so it is kept in a `HashMap` behind a
//! `tokio::sync::RwLock` and shared across handlers through `Arc`. Writes go to the
//! database first (`seo:{path}` site content rows) and then to the map, so a restart
//! reloads exactly what was acknowledged.

use std::{collections::HashMap, sync::Arc};

use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;

use crate::server::{
    error::AppError, model::content::SeoMetadata, service::content::SiteContentService,
};

#[derive(Clone, Default)]
pub struct SeoStore {
    entries: Arc<RwLock<HashMap<String, SeoMetadata>>>,
}

impl SeoStore {
    /// Creates an empty store. Every path resolves to the site defaults until populated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets metadata for a path, falling back to the site defaults.
    pub async fn get(&self, path: &str) -> SeoMetadata {
        self.entries
            .read()
            .await
            .get(path)
            .cloned()
            .unwrap_or_else(|| SeoMetadata::site_default(path))
    }

    /// Persists metadata to site content and then publishes it in memory.
    ///
    /// # Returns
    /// - `Ok(SeoMetadata)` - The stored metadata
    /// - `Err(AppError)` - Database or encoding error; the in-memory map is left unchanged
    pub async fn save(
        &self,
        db: &DatabaseConnection,
        metadata: SeoMetadata,
    ) -> Result<SeoMetadata, AppError> {
        SiteContentService::new(db).save_seo(&metadata).await?;

        self.entries
            .write()
            .await
            .insert(metadata.path.clone(), metadata.clone());

        Ok(metadata)
    }

    /// Replaces every entry, used when loading persisted metadata at startup.
    pub async fn replace_all(&self, entries: Vec<SeoMetadata>) {
        let map = entries
            .into_iter()
            .map(|entry| (entry.path.clone(), entry))
            .collect();

        *self.entries.write().await = map;
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::SiteContent;
    use test_utils::builder::TestBuilder;

    fn metadata(path: &str, title: &str) -> SeoMetadata {
        SeoMetadata {
            path: path.to_string(),
            title: title.to_string(),
            description: "Hand-picked stones".to_string(),
            og_image: None,
        }
    }

    #[tokio::test]
    async fn unknown_path_falls_back_to_defaults() {
        let store = SeoStore::new();

        let result = store.get("/nowhere").await;

        assert_eq!(result, SeoMetadata::site_default("/nowhere"));
    }

    #[tokio::test]
    async fn saved_metadata_survives_reload() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(SiteContent)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let store = SeoStore::new();
        store.save(db, metadata("/shop", "Shop")).await?;
        assert_eq!(store.get("/shop").await.title, "Shop");

        let reloaded = SeoStore::new();
        let persisted = SiteContentService::new(db).load_seo_entries().await?;
        reloaded.replace_all(persisted).await;

        assert_eq!(reloaded.len().await, 1);
        assert_eq!(reloaded.get("/shop").await.title, "Shop");

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_writers_all_land() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(SiteContent)
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();
        let store = SeoStore::new();

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..8 {
            let store = store.clone();
            let db = db.clone();
            tasks.spawn(async move {
                store
                    .save(&db, metadata(&format!("/page-{}", i), "Page"))
                    .await
            });
        }
        while let Some(result) = tasks.join_next().await {
            result.unwrap()?;
        }

        assert_eq!(store.len().await, 8);

        Ok(())
    }
}
