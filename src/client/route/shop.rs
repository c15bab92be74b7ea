use dioxus::prelude::*;

use crate::{
    client::{
        component::{Page, ProductCard},
        model::error::ApiError,
    },
    model::product::ProductDto,
};

#[cfg(feature = "web")]
use crate::client::api::product::get_products;

/// Distinct categories of an unfiltered product list, sorted
#[cfg_attr(not(feature = "web"), allow(dead_code))]
fn categories_of(products: &[ProductDto]) -> Vec<String> {
    let mut categories: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}

#[component]
pub fn Shop() -> Element {
    let mut category = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut products = use_signal(|| None::<Result<Vec<ProductDto>, ApiError>>);
    #[allow(unused_mut)]
    let mut categories = use_signal(Vec::<String>::new);

    #[cfg(feature = "web")]
    use_resource(move || async move {
        let category = category();
        let unfiltered = category.is_none();
        products.set(None);

        let result = get_products(category, None).await;
        if let (true, Ok(list)) = (unfiltered, &result) {
            categories.set(categories_of(list));
        }
        products.set(Some(result));
    });

    rsx!(
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-6xl",
                h1 { class: "text-3xl font-serif mb-4", "Shop" }
                div {
                    class: "flex flex-wrap gap-2 mb-6",
                    button {
                        class: if category().is_none() { "btn btn-sm btn-primary" } else { "btn btn-sm" },
                        onclick: move |_| category.set(None),
                        "All"
                    }
                    for value in categories() {
                        button {
                            key: "{value}",
                            class: if category().as_deref() == Some(value.as_str()) { "btn btn-sm btn-primary capitalize" } else { "btn btn-sm capitalize" },
                            onclick: {
                                let value = value.clone();
                                move |_| category.set(Some(value.clone()))
                            },
                            "{value}"
                        }
                    }
                }
                match &*products.read() {
                    Some(Ok(list)) if list.is_empty() => rsx!(
                        p { class: "opacity-70", "No products in this category yet." }
                    ),
                    Some(Ok(list)) => rsx!(
                        div {
                            class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                            for product in list.iter() {
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

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn product(id: i32, category: &str) -> ProductDto {
        ProductDto {
            id,
            slug: format!("product-{}", id),
            name: format!("Product {}", id),
            description: String::new(),
            gemstone: "sapphire".to_string(),
            carat_weight: None,
            origin: None,
            price_cents: 10_000,
            image_url: None,
            category: category.to_string(),
            featured: false,
            active: true,
            stock: 1,
            sort_order: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn lists_each_category_once() {
        let products = vec![product(1, "rings"), product(2, "loose"), product(3, "rings")];

        assert_eq!(categories_of(&products), vec!["loose", "rings"]);
    }
}
