//! Quote request factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct QuoteFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    product_id: Option<i32>,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> QuoteFactory<'a> {
    /// Defaults: status `"new"`, no product, created now.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Customer {}", id),
            email: format!("customer{}@example.com", id),
            product_id: None,
            status: "new".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn product_id(mut self, product_id: i32) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::quote::Model, DbErr> {
        entity::quote::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            product_id: ActiveValue::Set(self.product_id),
            message: ActiveValue::Set("Looking for a custom setting.".to_string()),
            budget_cents: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_quote(db: &DatabaseConnection) -> Result<entity::quote::Model, DbErr> {
    QuoteFactory::new(db).build().await
}
