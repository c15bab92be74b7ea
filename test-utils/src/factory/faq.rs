//! FAQ factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct FaqFactory<'a> {
    db: &'a DatabaseConnection,
    question: String,
    answer: String,
    sort_order: i32,
    active: bool,
}

impl<'a> FaqFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            question: format!("Question {}?", id),
            answer: format!("Answer {}.", id),
            sort_order: 0,
            active: true,
        }
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::faq::Model, DbErr> {
        entity::faq::ActiveModel {
            question: ActiveValue::Set(self.question),
            answer: ActiveValue::Set(self.answer),
            sort_order: ActiveValue::Set(self.sort_order),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_faq(db: &DatabaseConnection) -> Result<entity::faq::Model, DbErr> {
    FaqFactory::new(db).build().await
}
