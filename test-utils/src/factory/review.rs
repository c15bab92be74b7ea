//! Review factory for creating test product reviews.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews attached to a product.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    product_id: i32,
    author_name: String,
    rating: i16,
    body: String,
    approved: bool,
    created_at: DateTime<Utc>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory for the given product.
    ///
    /// Defaults: 5 stars, unapproved, created now, author `"Customer {id}"`.
    pub fn new(db: &'a DatabaseConnection, product_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            product_id,
            author_name: format!("Customer {}", id),
            rating: 5,
            body: "Beautiful stone, exactly as described.".to_string(),
            approved: false,
            created_at: Utc::now(),
        }
    }

    pub fn author_name(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = author_name.into();
        self
    }

    pub fn rating(mut self, rating: i16) -> Self {
        self.rating = rating;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn approved(mut self, approved: bool) -> Self {
        self.approved = approved;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            product_id: ActiveValue::Set(self.product_id),
            author_name: ActiveValue::Set(self.author_name),
            rating: ActiveValue::Set(self.rating),
            title: ActiveValue::Set(None),
            body: ActiveValue::Set(self.body),
            approved: ActiveValue::Set(self.approved),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unapproved 5-star review for a product.
pub async fn create_review(
    db: &DatabaseConnection,
    product_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, product_id).build().await
}
