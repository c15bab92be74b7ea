pub mod admin;
pub mod checkout;
pub mod faq;
pub mod home;
pub mod not_found;
pub mod product;
pub mod quote;
pub mod shop;

pub use admin::Admin;
pub use checkout::Checkout;
pub use faq::Faq;
pub use home::Home;
pub use not_found::NotFound;
pub use product::ProductDetail;
pub use quote::Quote;
pub use shop::Shop;
