//! Domain models and operation parameters for the server layers.
//!
//! Repositories convert SeaORM entity models into these domain types with `from_entity`,
//! services operate on them, and controllers turn them into shared DTOs with `into_dto`.
//! Parameter types carry validated input from controllers into services.

pub mod checkout;
pub mod content;
pub mod discount;
pub mod faq;
pub mod pagination;
pub mod product;
pub mod quote;
pub mod review;
pub mod stat;
