use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::{
        pagination::Page,
        product::{Product, ProductFilter, UpsertProductParams},
    },
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the public catalog, optionally filtered
    pub async fn list_active(&self, filter: ProductFilter) -> Result<Vec<Product>, AppError> {
        let products = ProductRepository::new(self.db).get_active(filter).await?;

        Ok(products)
    }

    /// Gets an active product by slug
    ///
    /// # Returns
    /// - `Ok(Product)` - The product
    /// - `Err(AppError::NotFound)` - Slug unknown or product inactive
    pub async fn get_by_slug(&self, slug: &str) -> Result<Product, AppError> {
        ProductRepository::new(self.db)
            .find_active_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    /// Gets an active product by ID, used by public endpoints that reference products
    pub async fn get_active_by_id(&self, id: i32) -> Result<Product, AppError> {
        match ProductRepository::new(self.db).find_by_id(id).await? {
            Some(product) if product.active => Ok(product),
            _ => Err(AppError::NotFound("Product not found".to_string())),
        }
    }

    /// Gets one page of all products for the admin catalog
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Page<Product>, AppError> {
        let (products, total) = ProductRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(Page::new(products, total, page, per_page))
    }

    /// Creates a product
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product
    /// - `Err(AppError::BadRequest)` - Another product already uses the slug
    pub async fn create(&self, params: UpsertProductParams) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        if repo.slug_exists(&params.slug, None).await? {
            return Err(slug_conflict(&params.slug));
        }

        let slug = params.slug.clone();
        repo.create(params)
            .await
            .map_err(|err| AppError::on_unique_violation(err, || slug_conflict(&slug)))
    }

    /// Replaces a product
    ///
    /// # Returns
    /// - `Ok(Product)` - The updated product
    /// - `Err(AppError::NotFound)` - No product with that ID
    /// - `Err(AppError::BadRequest)` - Another product already uses the slug
    pub async fn update(&self, id: i32, params: UpsertProductParams) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        if repo.slug_exists(&params.slug, Some(id)).await? {
            return Err(slug_conflict(&params.slug));
        }

        let slug = params.slug.clone();
        repo.update(id, params)
            .await
            .map_err(|err| AppError::on_unique_violation(err, || slug_conflict(&slug)))?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ProductRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        Ok(())
    }
}

fn slug_conflict(slug: &str) -> AppError {
    AppError::BadRequest(format!("A product with slug '{}' already exists", slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn params(slug: &str) -> UpsertProductParams {
        UpsertProductParams {
            slug: slug.to_string(),
            name: "Tsavorite Pair".to_string(),
            description: String::new(),
            gemstone: "Garnet".to_string(),
            carat_weight: None,
            origin: None,
            price_cents: 90_000,
            image_url: None,
            category: "earrings".to_string(),
            featured: false,
            active: true,
            stock: 1,
            sort_order: 0,
        }
    }

    #[tokio::test]
    async fn rejects_slug_conflicts() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let existing = factory::product::ProductFactory::new(db)
            .slug("tsavorite-pair")
            .build()
            .await?;
        let service = ProductService::new(db);

        assert!(matches!(
            service.create(params("tsavorite-pair")).await,
            Err(AppError::BadRequest(_))
        ));

        // Keeping its own slug on update is fine
        let updated = service.update(existing.id, params("tsavorite-pair")).await?;
        assert_eq!(updated.name, "Tsavorite Pair");

        Ok(())
    }

    #[tokio::test]
    async fn maps_slug_violation_from_insert_to_bad_request() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::product::ProductFactory::new(db)
            .slug("twin")
            .build()
            .await?;

        // Insert directly so the slug pre-check is skipped, as when two requests race
        let err = ProductRepository::new(db)
            .create(params("twin"))
            .await
            .unwrap_err();
        let mapped = AppError::on_unique_violation(err, || slug_conflict("twin"));

        assert!(matches!(mapped, AppError::BadRequest(msg) if msg.contains("twin")));

        Ok(())
    }

    #[test]
    fn passes_other_database_errors_through() {
        let err = sea_orm::DbErr::Custom("connection reset".to_string());
        let mapped = AppError::on_unique_violation(err, || slug_conflict("twin"));

        assert!(matches!(mapped, AppError::DbErr(_)));
    }

    #[tokio::test]
    async fn inactive_product_is_not_found_by_slug() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::product::ProductFactory::new(db)
            .slug("retired")
            .active(false)
            .build()
            .await?;

        assert!(matches!(
            ProductService::new(db).get_by_slug("retired").await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_missing_product_are_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = ProductService::new(db);

        assert!(matches!(
            service.update(404, params("ghost")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(service.delete(404).await, Err(AppError::NotFound(_))));

        Ok(())
    }
}
