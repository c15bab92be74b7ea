use dioxus::prelude::*;

use crate::{
    client::{model::cart::format_cents, router::Route},
    model::product::ProductDto,
};

#[component]
pub fn ProductCard(product: ProductDto) -> Element {
    let price = format_cents(product.price_cents);

    rsx!(
        Link {
            to: Route::ProductDetail { slug: product.slug.clone() },
            class: "card bg-base-200 shadow hover:shadow-lg transition-shadow",
            if let Some(image_url) = &product.image_url {
                figure {
                    img {
                        src: "{image_url}",
                        alt: "{product.name}",
                        class: "h-56 w-full object-cover",
                    }
                }
            }
            div {
                class: "card-body",
                h2 { class: "card-title", "{product.name}" }
                p { class: "text-sm opacity-70", "{product.gemstone}" }
                div {
                    class: "flex justify-between items-center",
                    span { class: "font-semibold", "{price}" }
                    if product.stock <= 0 {
                        span { class: "badge badge-ghost", "Sold out" }
                    }
                }
            }
        }
    )
}
