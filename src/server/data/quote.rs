//! Quote request data repository for database operations

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::quote::QuoteStatus,
    server::model::quote::{CreateQuoteParams, Quote},
};

pub struct QuoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuoteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new quote request with status `new`
    pub async fn create(&self, params: CreateQuoteParams) -> Result<Quote, DbErr> {
        let quote = entity::quote::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            product_id: ActiveValue::Set(params.product_id),
            message: ActiveValue::Set(params.message),
            budget_cents: ActiveValue::Set(params.budget_cents),
            status: ActiveValue::Set(QuoteStatus::New.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Quote::from_entity(quote))
    }

    /// Gets one page of quotes, optionally filtered by status, newest first
    ///
    /// # Returns
    /// - `Ok((Vec<Quote>, u64))` - Quotes on the page and the total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        status: Option<QuoteStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Quote>, u64), DbErr> {
        let mut query = entity::prelude::Quote::find();

        if let Some(status) = status {
            query = query.filter(entity::quote::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::quote::Column::CreatedAt)
            .order_by_desc(entity::quote::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let quotes = paginator.fetch_page(page).await?;

        Ok((quotes.into_iter().map(Quote::from_entity).collect(), total))
    }

    /// Sets the follow-up status of a quote
    ///
    /// # Returns
    /// - `Ok(Some(Quote))` - The updated quote
    /// - `Ok(None)` - No quote with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        status: QuoteStatus,
    ) -> Result<Option<Quote>, DbErr> {
        let Some(existing) = entity::prelude::Quote::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut quote: entity::quote::ActiveModel = existing.into();
        quote.status = ActiveValue::Set(status.as_str().to_string());
        let quote = quote.update(self.db).await?;

        Ok(Some(Quote::from_entity(quote)))
    }

    pub async fn count_by_status(&self, status: QuoteStatus) -> Result<u64, DbErr> {
        entity::prelude::Quote::find()
            .filter(entity::quote::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}
