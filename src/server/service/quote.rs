use sea_orm::DatabaseConnection;

use crate::{
    model::quote::QuoteStatus,
    server::{
        data::{product::ProductRepository, quote::QuoteRepository},
        error::AppError,
        model::{
            pagination::Page,
            quote::{CreateQuoteParams, Quote},
        },
    },
};

pub struct QuoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a quote request
    ///
    /// # Returns
    /// - `Ok(Quote)` - The stored request with status `new`
    /// - `Err(AppError::BadRequest)` - The referenced product does not exist
    pub async fn submit(&self, params: CreateQuoteParams) -> Result<Quote, AppError> {
        if let Some(product_id) = params.product_id {
            if ProductRepository::new(self.db)
                .find_by_id(product_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Product {} does not exist",
                    product_id
                )));
            }
        }

        Ok(QuoteRepository::new(self.db).create(params).await?)
    }

    pub async fn get_paginated(
        &self,
        status: Option<QuoteStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Quote>, AppError> {
        let (quotes, total) = QuoteRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        Ok(Page::new(quotes, total, page, per_page))
    }

    pub async fn update_status(&self, id: i32, status: QuoteStatus) -> Result<Quote, AppError> {
        QuoteRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Quote not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn params(product_id: Option<i32>) -> CreateQuoteParams {
        CreateQuoteParams {
            name: "Lee".to_string(),
            email: "lee@example.com".to_string(),
            phone: None,
            product_id,
            message: "Can you reset my grandmother's opal?".to_string(),
            budget_cents: None,
        }
    }

    #[tokio::test]
    async fn product_reference_must_exist() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let product = factory::product::create_product(db).await?;
        let service = QuoteService::new(db);

        assert!(service.submit(params(Some(product.id))).await.is_ok());
        assert!(service.submit(params(None)).await.is_ok());
        assert!(matches!(
            service.submit(params(Some(product.id + 1_000))).await,
            Err(AppError::BadRequest(_))
        ));

        Ok(())
    }
}
