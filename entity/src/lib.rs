//! SeaORM entities for the storefront database.
//!
//! One module per table. Relationships that matter to queries (reviews belong to products) are
//! declared here; everything else is plain rows.

pub mod prelude;

pub mod discount_code;
pub mod faq;
pub mod page_view;
pub mod product;
pub mod quote;
pub mod review;
pub mod site_content;
pub mod stat;
