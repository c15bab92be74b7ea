use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Admin, Checkout, Faq, Home, NotFound, ProductDetail, Quote, Shop};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/shop")]
    Shop {},

    #[route("/shop/:slug")]
    ProductDetail { slug: String },

    #[route("/faq")]
    Faq {},

    #[route("/quote")]
    Quote {},

    #[route("/checkout")]
    Checkout {},

    #[route("/admin")]
    Admin {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
