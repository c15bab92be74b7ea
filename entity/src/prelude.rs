pub use super::discount_code::Entity as DiscountCode;
pub use super::faq::Entity as Faq;
pub use super::page_view::Entity as PageView;
pub use super::product::Entity as Product;
pub use super::quote::Entity as Quote;
pub use super::review::Entity as Review;
pub use super::site_content::Entity as SiteContent;
pub use super::stat::Entity as Stat;
