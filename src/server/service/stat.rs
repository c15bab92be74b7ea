use sea_orm::DatabaseConnection;

use crate::server::{
    data::stat::StatRepository,
    error::AppError,
    model::stat::{Stat, UpsertStatParams},
};

pub struct StatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Stat>, AppError> {
        Ok(StatRepository::new(self.db).get_all().await?)
    }

    pub async fn create(&self, params: UpsertStatParams) -> Result<Stat, AppError> {
        Ok(StatRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: UpsertStatParams) -> Result<Stat, AppError> {
        StatRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Stat not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !StatRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Stat not found".to_string()));
        }

        Ok(())
    }
}
