use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::{
    client::{
        component::{Page, ProductCard},
        model::error::ApiError,
        router::Route,
    },
    model::{product::ProductDto, stat::StatDto},
};

#[cfg(feature = "web")]
use crate::client::api::{content::get_content, product::get_products, stat::get_stats};

const DEFAULT_HERO_TITLE: &str = "Fine gemstones, cut for you";
const DEFAULT_HERO_SUBTITLE: &str =
    "Hand-selected sapphires, emeralds and diamonds with certified provenance.";

#[component]
pub fn Home() -> Element {
    #[allow(unused_mut)]
    let mut content = use_signal(BTreeMap::<String, String>::new);
    #[allow(unused_mut)]
    let mut featured = use_signal(|| None::<Result<Vec<ProductDto>, ApiError>>);
    #[allow(unused_mut)]
    let mut stats = use_signal(Vec::<StatDto>::new);

    #[cfg(feature = "web")]
    use_resource(move || async move {
        // Missing content falls back to the built-in hero copy
        if let Ok(map) = get_content().await {
            content.set(map);
        }
        featured.set(Some(get_products(None, Some(true)).await));
        if let Ok(list) = get_stats().await {
            stats.set(list);
        }
    });

    let hero_title = content
        .read()
        .get("home.hero_title")
        .cloned()
        .unwrap_or_else(|| DEFAULT_HERO_TITLE.to_string());
    let hero_subtitle = content
        .read()
        .get("home.hero_subtitle")
        .cloned()
        .unwrap_or_else(|| DEFAULT_HERO_SUBTITLE.to_string());

    rsx!(
        Page {
            class: "flex flex-col items-center gap-12",
            section {
                class: "hero min-h-[40vh] bg-base-200 rounded-box w-full max-w-6xl",
                div {
                    class: "hero-content text-center flex-col",
                    h1 { class: "text-4xl md:text-5xl font-serif font-bold", "{hero_title}" }
                    p { class: "max-w-xl opacity-80", "{hero_subtitle}" }
                    div {
                        class: "flex gap-2",
                        Link { to: Route::Shop {}, class: "btn btn-primary", "Shop the collection" }
                        Link { to: Route::Quote {}, class: "btn btn-outline", "Request a custom piece" }
                    }
                }
            }

            if !stats.read().is_empty() {
                section {
                    class: "stats stats-vertical sm:stats-horizontal shadow",
                    for stat in stats.read().iter() {
                        div {
                            key: "{stat.id}",
                            class: "stat place-items-center",
                            div { class: "stat-value", "{stat.value}" }
                            div { class: "stat-desc", "{stat.label}" }
                        }
                    }
                }
            }

            section {
                class: "w-full max-w-6xl",
                h2 { class: "text-2xl font-serif mb-4", "Featured" }
                match &*featured.read() {
                    Some(Ok(products)) if products.is_empty() => rsx!(
                        p { class: "opacity-70", "New pieces are on their way." }
                    ),
                    Some(Ok(products)) => rsx!(
                        div {
                            class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                            for product in products.iter() {
                                ProductCard { key: "{product.id}", product: product.clone() }
                            }
                        }
                    ),
                    Some(Err(err)) => rsx!(
                        p { class: "text-error", "Failed to load products: {err}" }
                    ),
                    None => rsx!(
                        span { class: "loading loading-spinner" }
                    ),
                }
            }
        }
    )
}
