//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod discount_code;
pub mod faq;
pub mod page_view;
pub mod product;
pub mod quote;
pub mod review;
pub mod site_content;
pub mod stat;

#[cfg(test)]
mod test;
