//! Storefront Test Utils
//!
//! Shared testing utilities for the storefront backend. Provides a builder for test contexts
//! backed by in-memory SQLite databases with tables generated from the SeaORM entities, plus
//! factories for inserting rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Row factories for every storefront table
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//! use entity::prelude::Product;
//!
//! #[tokio::test]
//! async fn lists_products() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_table(Product).build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let product = factory::product::create_product(db).await?;
//!     // Perform operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
