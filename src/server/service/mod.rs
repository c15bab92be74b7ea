//! Business logic between the controllers and the repositories.
//!
//! Services borrow the database connection (or the shared HTTP client) for the duration
//! of a request and return `AppError`, so controllers can use `?` directly.

pub mod analytics;
pub mod auth;
pub mod checkout;
pub mod content;
pub mod discount;
pub mod faq;
pub mod geocode;
pub mod payment;
pub mod price_feed;
pub mod product;
pub mod quote;
pub mod review;
pub mod seo;
pub mod stat;
