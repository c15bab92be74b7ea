use crate::server::{
    data::product::ProductRepository,
    model::product::{ProductFilter, UpsertProductParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod decrement_stock;
mod delete;
mod get_active;
mod get_paginated;
mod slug_exists;

fn params(slug: &str, name: &str) -> UpsertProductParams {
    UpsertProductParams {
        slug: slug.to_string(),
        name: name.to_string(),
        description: "Unheated, eye clean.".to_string(),
        gemstone: "Sapphire".to_string(),
        carat_weight: Some(1.8),
        origin: Some("Madagascar".to_string()),
        price_cents: 240_000,
        image_url: None,
        category: "loose".to_string(),
        featured: false,
        active: true,
        stock: 2,
        sort_order: 0,
    }
}
