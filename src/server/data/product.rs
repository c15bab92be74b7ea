//! Product data repository for database operations
//!
//! Provides the `ProductRepository` for managing catalog products in the database and
//! converting entity models into `Product` domain models for services & controllers.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::product::{Product, ProductFilter, UpsertProductParams};

/// Repository providing database operations for catalog products.
pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    /// Creates a new ProductRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ProductRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new product
    ///
    /// # Arguments
    /// - `params` - Validated product fields including the final slug
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product as a domain model
    /// - `Err(DbErr)` - Database error during insert, including unique slug violations
    pub async fn create(&self, params: UpsertProductParams) -> Result<Product, DbErr> {
        let now = Utc::now();

        let product = entity::product::ActiveModel {
            slug: ActiveValue::Set(params.slug),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            gemstone: ActiveValue::Set(params.gemstone),
            carat_weight: ActiveValue::Set(params.carat_weight),
            origin: ActiveValue::Set(params.origin),
            price_cents: ActiveValue::Set(params.price_cents),
            image_url: ActiveValue::Set(params.image_url),
            category: ActiveValue::Set(params.category),
            featured: ActiveValue::Set(params.featured),
            active: ActiveValue::Set(params.active),
            stock: ActiveValue::Set(params.stock),
            sort_order: ActiveValue::Set(params.sort_order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(product))
    }

    /// Finds a product by ID regardless of its active flag
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - The product if found
    /// - `Ok(None)` - No product with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let product = entity::prelude::Product::find_by_id(id).one(self.db).await?;

        Ok(product.map(Product::from_entity))
    }

    /// Finds the products with the given IDs regardless of their active flag
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Product>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let products = entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(products.into_iter().map(Product::from_entity).collect())
    }

    /// Finds an active product by slug
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - Active product with that slug
    /// - `Ok(None)` - Slug unknown or product inactive
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Product>, DbErr> {
        let product = entity::prelude::Product::find()
            .filter(entity::product::Column::Slug.eq(slug))
            .filter(entity::product::Column::Active.eq(true))
            .one(self.db)
            .await?;

        Ok(product.map(Product::from_entity))
    }

    /// Gets active products matching the filter
    ///
    /// Sorted by `sort_order` ascending, then newest first.
    pub async fn get_active(&self, filter: ProductFilter) -> Result<Vec<Product>, DbErr> {
        let mut query = entity::prelude::Product::find()
            .filter(entity::product::Column::Active.eq(true));

        if let Some(category) = filter.category {
            query = query.filter(entity::product::Column::Category.eq(category));
        }
        if let Some(featured) = filter.featured {
            query = query.filter(entity::product::Column::Featured.eq(featured));
        }

        let products = query
            .order_by_asc(entity::product::Column::SortOrder)
            .order_by_desc(entity::product::Column::CreatedAt)
            .order_by_desc(entity::product::Column::Id)
            .all(self.db)
            .await?;

        Ok(products.into_iter().map(Product::from_entity).collect())
    }

    /// Gets one page of all products, active or not, in catalog order
    ///
    /// # Arguments
    /// - `page` - Zero-based page number
    /// - `per_page` - Number of products per page
    ///
    /// # Returns
    /// - `Ok((Vec<Product>, u64))` - Products on the page and the total product count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Product>, u64), DbErr> {
        let paginator = entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::SortOrder)
            .order_by_desc(entity::product::Column::CreatedAt)
            .order_by_desc(entity::product::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let products = paginator.fetch_page(page).await?;

        Ok((
            products.into_iter().map(Product::from_entity).collect(),
            total,
        ))
    }

    /// Checks whether a slug is taken by any product other than `exclude_id`
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Product::find().filter(entity::product::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::product::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Replaces every editable field of a product
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - The updated product
    /// - `Ok(None)` - No product with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpsertProductParams,
    ) -> Result<Option<Product>, DbErr> {
        let Some(existing) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut product: entity::product::ActiveModel = existing.into();
        product.slug = ActiveValue::Set(params.slug);
        product.name = ActiveValue::Set(params.name);
        product.description = ActiveValue::Set(params.description);
        product.gemstone = ActiveValue::Set(params.gemstone);
        product.carat_weight = ActiveValue::Set(params.carat_weight);
        product.origin = ActiveValue::Set(params.origin);
        product.price_cents = ActiveValue::Set(params.price_cents);
        product.image_url = ActiveValue::Set(params.image_url);
        product.category = ActiveValue::Set(params.category);
        product.featured = ActiveValue::Set(params.featured);
        product.active = ActiveValue::Set(params.active);
        product.stock = ActiveValue::Set(params.stock);
        product.sort_order = ActiveValue::Set(params.sort_order);
        product.updated_at = ActiveValue::Set(Utc::now());

        let product = product.update(self.db).await?;

        Ok(Some(Product::from_entity(product)))
    }

    /// Removes `quantity` units from stock, never going below zero
    ///
    /// Runs as a single `UPDATE`; concurrent decrements all apply.
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - Remaining stock
    /// - `Ok(None)` - No product with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn decrement_stock(&self, id: i32, quantity: u32) -> Result<Option<i32>, DbErr> {
        let quantity = i32::try_from(quantity).unwrap_or(i32::MAX);
        let stock = || Expr::col(entity::product::Column::Stock);
        let remaining: Expr = Expr::case(stock().gt(quantity), stock().sub(quantity))
            .finally(0)
            .into();

        let result = entity::prelude::Product::update_many()
            .col_expr(entity::product::Column::Stock, remaining)
            .col_expr(entity::product::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::product::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let stock = entity::prelude::Product::find_by_id(id)
            .one(self.db)
            .await?
            .map(|product| product.stock);

        Ok(stock)
    }

    /// Deletes a product along with its reviews
    ///
    /// # Returns
    /// - `Ok(true)` - Product deleted
    /// - `Ok(false)` - No product with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::Review::delete_many()
            .filter(entity::review::Column::ProductId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Product::find().count(self.db).await
    }

    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::Active.eq(true))
            .count(self.db)
            .await
    }
}
