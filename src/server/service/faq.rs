use sea_orm::DatabaseConnection;

use crate::server::{
    data::faq::FaqRepository,
    error::AppError,
    model::faq::{Faq, UpsertFaqParams},
};

pub struct FaqService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets FAQ entries in display order; the public site passes `active_only`
    pub async fn list(&self, active_only: bool) -> Result<Vec<Faq>, AppError> {
        Ok(FaqRepository::new(self.db).get_all(active_only).await?)
    }

    pub async fn create(&self, params: UpsertFaqParams) -> Result<Faq, AppError> {
        Ok(FaqRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: UpsertFaqParams) -> Result<Faq, AppError> {
        FaqRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("FAQ entry not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !FaqRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("FAQ entry not found".to_string()));
        }

        Ok(())
    }
}
