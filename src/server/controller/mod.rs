//! HTTP handlers for the storefront API.
//!
//! Handlers extract request data, check admin access through `AuthGuard`, convert DTOs
//! into validated params, call a service and convert the result back into a DTO.

pub mod auth;
pub mod checkout;
pub mod content;
pub mod discount;
pub mod external;
pub mod faq;
pub mod param;
pub mod product;
pub mod quote;
pub mod review;
pub mod stat;
