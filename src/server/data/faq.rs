//! FAQ data repository for database operations

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::faq::{Faq, UpsertFaqParams};

pub struct FaqRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: UpsertFaqParams) -> Result<Faq, DbErr> {
        let faq = entity::faq::ActiveModel {
            question: ActiveValue::Set(params.question),
            answer: ActiveValue::Set(params.answer),
            sort_order: ActiveValue::Set(params.sort_order),
            active: ActiveValue::Set(params.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Faq::from_entity(faq))
    }

    /// Gets FAQ entries in display order, optionally only active ones
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<Faq>, DbErr> {
        let mut query = entity::prelude::Faq::find();

        if active_only {
            query = query.filter(entity::faq::Column::Active.eq(true));
        }

        let faqs = query
            .order_by_asc(entity::faq::Column::SortOrder)
            .order_by_asc(entity::faq::Column::Id)
            .all(self.db)
            .await?;

        Ok(faqs.into_iter().map(Faq::from_entity).collect())
    }

    /// Replaces an FAQ entry
    ///
    /// # Returns
    /// - `Ok(Some(Faq))` - The updated entry
    /// - `Ok(None)` - No entry with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpsertFaqParams) -> Result<Option<Faq>, DbErr> {
        let Some(existing) = entity::prelude::Faq::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut faq: entity::faq::ActiveModel = existing.into();
        faq.question = ActiveValue::Set(params.question);
        faq.answer = ActiveValue::Set(params.answer);
        faq.sort_order = ActiveValue::Set(params.sort_order);
        faq.active = ActiveValue::Set(params.active);
        let faq = faq.update(self.db).await?;

        Ok(Some(Faq::from_entity(faq)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Faq::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
