mod discount_code;
mod faq;
mod page_view;
mod product;
mod quote;
mod review;
mod site_content;
mod stat;
