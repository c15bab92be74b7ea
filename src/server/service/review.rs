use sea_orm::DatabaseConnection;

use crate::server::{
    data::review::ReviewRepository,
    error::AppError,
    model::{
        pagination::Page,
        review::{CreateReviewParams, ProductReviews, Review, ReviewStatusFilter},
    },
    service::product::ProductService,
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets approved reviews and their summary for an active product
    ///
    /// # Returns
    /// - `Ok(ProductReviews)` - Reviews newest first with count and average
    /// - `Err(AppError::NotFound)` - Product missing or inactive
    pub async fn get_for_product(&self, product_id: i32) -> Result<ProductReviews, AppError> {
        ProductService::new(self.db)
            .get_active_by_id(product_id)
            .await?;

        let reviews = ReviewRepository::new(self.db)
            .get_approved_by_product(product_id)
            .await?;

        Ok(ProductReviews::from_reviews(reviews))
    }

    /// Submits a review for moderation
    ///
    /// # Returns
    /// - `Ok(Review)` - The stored, unapproved review
    /// - `Err(AppError::NotFound)` - Product missing or inactive
    pub async fn submit(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        ProductService::new(self.db)
            .get_active_by_id(params.product_id)
            .await?;

        Ok(ReviewRepository::new(self.db).create(params).await?)
    }

    pub async fn get_paginated(
        &self,
        status: ReviewStatusFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Review>, AppError> {
        let (reviews, total) = ReviewRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        Ok(Page::new(reviews, total, page, per_page))
    }

    pub async fn approve(&self, id: i32) -> Result<Review, AppError> {
        ReviewRepository::new(self.db)
            .approve(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ReviewRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Review not found".to_string()));
        }

        Ok(())
    }
}
