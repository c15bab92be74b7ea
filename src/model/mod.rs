//! Data transfer objects shared by the server API and the web client.

pub mod api;
pub mod auth;
pub mod checkout;
pub mod content;
pub mod discount;
pub mod external;
pub mod faq;
pub mod product;
pub mod quote;
pub mod review;
pub mod stat;
