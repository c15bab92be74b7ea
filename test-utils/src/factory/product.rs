//! Product factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let ring = ProductFactory::new(&db)
///     .name("Sapphire Ring")
///     .price_cents(125_000)
///     .featured(true)
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    name: String,
    gemstone: String,
    category: String,
    price_cents: i64,
    featured: bool,
    active: bool,
    stock: i32,
    sort_order: i32,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"product-{id}"`
    /// - name: `"Product {id}"`
    /// - gemstone: `"Sapphire"`, category: `"rings"`
    /// - price_cents: `10_000`, stock: `5`
    /// - featured: `false`, active: `true`, sort_order: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("product-{}", id),
            name: format!("Product {}", id),
            gemstone: "Sapphire".to_string(),
            category: "rings".to_string(),
            price_cents: 10_000,
            featured: false,
            active: true,
            stock: 5,
            sort_order: 0,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn gemstone(mut self, gemstone: impl Into<String>) -> Self {
        self.gemstone = gemstone.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Builds and inserts the product into the database.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();
        entity::product::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("A hand-selected stone.".to_string()),
            gemstone: ActiveValue::Set(self.gemstone),
            carat_weight: ActiveValue::Set(Some(1.25)),
            origin: ActiveValue::Set(Some("Sri Lanka".to_string())),
            price_cents: ActiveValue::Set(self.price_cents),
            image_url: ActiveValue::Set(None),
            category: ActiveValue::Set(self.category),
            featured: ActiveValue::Set(self.featured),
            active: ActiveValue::Set(self.active),
            stock: ActiveValue::Set(self.stock),
            sort_order: ActiveValue::Set(self.sort_order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active product with default values.
///
/// Shorthand for `ProductFactory::new(db).build().await`.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_product_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Product).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let product = create_product(db).await?;

        assert!(product.slug.starts_with("product-"));
        assert!(product.active);
        assert_eq!(product.price_cents, 10_000);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_products() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Product).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_product(db).await?;
        let second = create_product(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.slug, second.slug);

        Ok(())
    }
}
