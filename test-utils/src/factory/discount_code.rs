//! Discount code factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for discount codes.
///
/// # Example
///
/// ```rust,ignore
/// let code = DiscountCodeFactory::new(&db)
///     .code("SPRING10")
///     .percent_off(10)
///     .max_uses(1)
///     .build()
///     .await?;
/// ```
pub struct DiscountCodeFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    percent_off: i16,
    active: bool,
    expires_at: Option<DateTime<Utc>>,
    max_uses: Option<i32>,
    times_used: i32,
}

impl<'a> DiscountCodeFactory<'a> {
    /// Defaults: code `"CODE{id}"`, 10% off, active, no expiry, unlimited uses.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            code: format!("CODE{}", next_id()),
            percent_off: 10,
            active: true,
            expires_at: None,
            max_uses: None,
            times_used: 0,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn percent_off(mut self, percent_off: i16) -> Self {
        self.percent_off = percent_off;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn max_uses(mut self, max_uses: i32) -> Self {
        self.max_uses = Some(max_uses);
        self
    }

    pub fn times_used(mut self, times_used: i32) -> Self {
        self.times_used = times_used;
        self
    }

    pub async fn build(self) -> Result<entity::discount_code::Model, DbErr> {
        entity::discount_code::ActiveModel {
            code: ActiveValue::Set(self.code),
            percent_off: ActiveValue::Set(self.percent_off),
            active: ActiveValue::Set(self.active),
            expires_at: ActiveValue::Set(self.expires_at),
            max_uses: ActiveValue::Set(self.max_uses),
            times_used: ActiveValue::Set(self.times_used),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_discount_code(
    db: &DatabaseConnection,
) -> Result<entity::discount_code::Model, DbErr> {
    DiscountCodeFactory::new(db).build().await
}
