//! Review data repository for database operations

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::review::{CreateReviewParams, Review, ReviewStatusFilter};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a review awaiting moderation
    ///
    /// # Returns
    /// - `Ok(Review)` - The created, unapproved review
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let review = entity::review::ActiveModel {
            product_id: ActiveValue::Set(params.product_id),
            author_name: ActiveValue::Set(params.author_name),
            rating: ActiveValue::Set(params.rating),
            title: ActiveValue::Set(params.title),
            body: ActiveValue::Set(params.body),
            approved: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(review))
    }

    /// Gets approved reviews for a product, newest first
    pub async fn get_approved_by_product(&self, product_id: i32) -> Result<Vec<Review>, DbErr> {
        let reviews = entity::prelude::Review::find()
            .filter(entity::review::Column::ProductId.eq(product_id))
            .filter(entity::review::Column::Approved.eq(true))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        Ok(reviews.into_iter().map(Review::from_entity).collect())
    }

    /// Gets one page of reviews matching the moderation filter, newest first
    ///
    /// # Returns
    /// - `Ok((Vec<Review>, u64))` - Reviews on the page and the total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        status: ReviewStatusFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Review>, u64), DbErr> {
        let mut query = entity::prelude::Review::find();

        query = match status {
            ReviewStatusFilter::Pending => {
                query.filter(entity::review::Column::Approved.eq(false))
            }
            ReviewStatusFilter::Approved => {
                query.filter(entity::review::Column::Approved.eq(true))
            }
            ReviewStatusFilter::All => query,
        };

        let paginator = query
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let reviews = paginator.fetch_page(page).await?;

        Ok((reviews.into_iter().map(Review::from_entity).collect(), total))
    }

    /// Marks a review approved
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - The approved review
    /// - `Ok(None)` - No review with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn approve(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let Some(existing) = entity::prelude::Review::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut review: entity::review::ActiveModel = existing.into();
        review.approved = ActiveValue::Set(true);
        let review = review.update(self.db).await?;

        Ok(Some(Review::from_entity(review)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_pending(&self) -> Result<u64, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::Approved.eq(false))
            .count(self.db)
            .await
    }
}
