//! Factory methods for creating test data.
//!
//! Each table has a factory module with a `*Factory` builder for customization and a
//! `create_*` convenience function for quick default creation. Factories insert rows through
//! SeaORM active models and return the inserted entity model.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let product = factory::product::create_product(&db).await?;
//! let review = factory::review::ReviewFactory::new(&db, product.id)
//!     .rating(4)
//!     .approved(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `product` - Catalog products
//! - `review` - Product reviews
//! - `faq` - FAQ entries
//! - `quote` - Quote requests
//! - `stat` - Public stats
//! - `site_content` - Site content key/value pairs
//! - `discount_code` - Discount codes
//! - `page_view` - Page view log rows
//! - `helpers` - ID generation and multi-row helpers

pub mod discount_code;
pub mod faq;
pub mod helpers;
pub mod page_view;
pub mod product;
pub mod quote;
pub mod review;
pub mod site_content;
pub mod stat;

// Re-export commonly used factory functions for concise usage
pub use discount_code::create_discount_code;
pub use faq::create_faq;
pub use page_view::create_page_view;
pub use product::create_product;
pub use quote::create_quote;
pub use review::create_review;
pub use site_content::create_site_content;
pub use stat::create_stat;
