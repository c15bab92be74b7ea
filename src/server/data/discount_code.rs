//! Discount code data repository for database operations

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::discount::{DiscountCode, UpdateDiscountCodeParams};

pub struct DiscountCodeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscountCodeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active, unused discount code
    ///
    /// # Arguments
    /// - `code` - Normalized upper-case code
    /// - `percent_off` - Percentage between 1 and 100
    /// - `expires_at` - Optional expiry instant
    /// - `max_uses` - Optional redemption limit
    ///
    /// # Returns
    /// - `Ok(DiscountCode)` - The created code
    /// - `Err(DbErr)` - Database error during insert, including unique code violations
    pub async fn create(
        &self,
        code: String,
        percent_off: i16,
        expires_at: Option<chrono::DateTime<Utc>>,
        max_uses: Option<i32>,
    ) -> Result<DiscountCode, DbErr> {
        let discount = entity::discount_code::ActiveModel {
            code: ActiveValue::Set(code),
            percent_off: ActiveValue::Set(percent_off),
            active: ActiveValue::Set(true),
            expires_at: ActiveValue::Set(expires_at),
            max_uses: ActiveValue::Set(max_uses),
            times_used: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DiscountCode::from_entity(discount))
    }

    /// Gets every code, newest first
    pub async fn get_all(&self) -> Result<Vec<DiscountCode>, DbErr> {
        let codes = entity::prelude::DiscountCode::find()
            .order_by_desc(entity::discount_code::Column::CreatedAt)
            .order_by_desc(entity::discount_code::Column::Id)
            .all(self.db)
            .await?;

        Ok(codes.into_iter().map(DiscountCode::from_entity).collect())
    }

    /// Finds a code by its normalized text
    pub async fn find_by_code(&self, code: &str) -> Result<Option<DiscountCode>, DbErr> {
        let discount = entity::prelude::DiscountCode::find()
            .filter(entity::discount_code::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(discount.map(DiscountCode::from_entity))
    }

    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::DiscountCode::find()
            .filter(entity::discount_code::Column::Code.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Updates the active flag, expiry and use limit of a code
    ///
    /// # Returns
    /// - `Ok(Some(DiscountCode))` - The updated code
    /// - `Ok(None)` - No code with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateDiscountCodeParams,
    ) -> Result<Option<DiscountCode>, DbErr> {
        let Some(existing) = entity::prelude::DiscountCode::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut discount: entity::discount_code::ActiveModel = existing.into();
        discount.active = ActiveValue::Set(params.active);
        discount.expires_at = ActiveValue::Set(params.expires_at);
        discount.max_uses = ActiveValue::Set(params.max_uses);
        let discount = discount.update(self.db).await?;

        Ok(Some(DiscountCode::from_entity(discount)))
    }

    /// Records one redemption of a code
    ///
    /// # Returns
    /// - `Ok(true)` - Counter incremented
    /// - `Ok(false)` - No code with that text
    /// - `Err(DbErr)` - Database error during update
    pub async fn increment_times_used(&self, code: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::DiscountCode::update_many()
            .col_expr(
                entity::discount_code::Column::TimesUsed,
                Expr::col(entity::discount_code::Column::TimesUsed).add(1),
            )
            .filter(entity::discount_code::Column::Code.eq(code))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::DiscountCode::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
