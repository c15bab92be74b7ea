pub mod auth;
pub mod checkout;
pub mod content;
pub mod faq;
pub mod helper;
pub mod product;
pub mod quote;
pub mod review;
pub mod stat;
