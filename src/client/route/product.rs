use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::MAX_LINE_QUANTITY,
        model::{
            cart::{format_cents, Cart},
            error::ApiError,
        },
        router::Route,
    },
    model::{
        product::ProductDto,
        review::{CreateReviewDto, ProductReviewsDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    product::get_product,
    review::{get_product_reviews, submit_review},
};

#[cfg(feature = "web")]
const ADDED_NOTICE_MS: u32 = 4_000;

#[component]
pub fn ProductDetail(slug: String) -> Element {
    #[allow(unused_mut)]
    let mut product = use_signal(|| None::<Result<ProductDto, ApiError>>);

    #[cfg(feature = "web")]
    use_resource(use_reactive!(|(slug,)| async move {
        product.set(None);
        product.set(Some(get_product(&slug).await));
    }));

    let element = match &*product.read() {
        None => rsx!(LoadingPage {}),
        Some(Err(err)) => rsx!(ErrorPage { status: err.status, message: err.message.clone() }),
        Some(Ok(product)) => rsx!(
            Page {
                class: "flex flex-col items-center",
                div {
                    class: "w-full max-w-5xl flex flex-col gap-10",
                    ProductSummary { product: product.clone() }
                    ProductReviews { product_id: product.id }
                }
            }
        ),
    };
    element
}

#[component]
fn ProductSummary(product: ProductDto) -> Element {
    let mut cart = use_context::<Cart>();
    let mut quantity = use_signal(|| 1u32);
    let mut added = use_signal(|| false);

    let price = format_cents(product.price_cents);
    let in_stock = product.stock > 0;
    let max_quantity = (product.stock.max(0) as u32).min(MAX_LINE_QUANTITY);

    rsx!(
        div {
            class: "grid gap-8 md:grid-cols-2",
            if let Some(image_url) = &product.image_url {
                img {
                    src: "{image_url}",
                    alt: "{product.name}",
                    class: "rounded-box w-full object-cover",
                }
            }
            div {
                class: "flex flex-col gap-3",
                h1 { class: "text-3xl font-serif", "{product.name}" }
                p { class: "text-2xl font-semibold", "{price}" }
                ul {
                    class: "text-sm opacity-80",
                    li { "Gemstone: {product.gemstone}" }
                    if let Some(carat) = product.carat_weight {
                        li { "Carat weight: {carat:.2} ct" }
                    }
                    if let Some(origin) = &product.origin {
                        li { "Origin: {origin}" }
                    }
                }
                p { class: "whitespace-pre-line", "{product.description}" }
                if in_stock {
                    div {
                        class: "flex items-center gap-2",
                        input {
                            r#type: "number",
                            class: "input input-bordered w-24",
                            min: "1",
                            max: "{max_quantity}",
                            value: "{quantity}",
                            oninput: move |evt| {
                                if let Ok(value) = evt.value().parse::<u32>() {
                                    quantity.set(value.clamp(1, max_quantity));
                                }
                            },
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: {
                                let product = product.clone();
                                move |_| {
                                    cart.add(product.clone(), quantity());
                                    added.set(true);

                                    #[cfg(feature = "web")]
                                    spawn(async move {
                                        gloo_timers::future::TimeoutFuture::new(ADDED_NOTICE_MS).await;
                                        added.set(false);
                                    });
                                }
                            },
                            "Add to cart"
                        }
                    }
                    if added() {
                        div {
                            class: "alert alert-success",
                            span { "Added to your cart." }
                            Link { to: Route::Checkout {}, class: "btn btn-sm", "Checkout" }
                        }
                    }
                } else {
                    p { class: "badge badge-ghost", "Sold out" }
                }
            }
        }
    )
}

#[component]
fn ProductReviews(product_id: i32) -> Element {
    #[allow(unused_mut)]
    let mut reviews = use_signal(|| None::<Result<ProductReviewsDto, ApiError>>);

    #[cfg(feature = "web")]
    use_resource(use_reactive!(|(product_id,)| async move {
        reviews.set(Some(get_product_reviews(product_id).await));
    }));

    rsx!(
        section {
            class: "flex flex-col gap-4",
            h2 { class: "text-2xl font-serif", "Reviews" }
            match &*reviews.read() {
                None => rsx!(span { class: "loading loading-spinner" }),
                Some(Err(err)) => rsx!(p { class: "text-error", "Failed to load reviews: {err}" }),
                Some(Ok(summary)) => rsx!(
                    if let Some(average) = summary.average_rating {
                        p { class: "opacity-80", "{average:.1} out of 5 from {summary.count} reviews" }
                    } else {
                        p { class: "opacity-70", "No reviews yet." }
                    }
                    for review in summary.reviews.iter() {
                        div {
                            key: "{review.id}",
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                div {
                                    class: "flex justify-between",
                                    span { class: "font-semibold", "{review.author_name}" }
                                    span { "{stars(review.rating)}" }
                                }
                                if let Some(title) = &review.title {
                                    p { class: "font-medium", "{title}" }
                                }
                                p { "{review.body}" }
                            }
                        }
                    }
                ),
            }
            ReviewForm { product_id }
        }
    )
}

fn stars(rating: i16) -> String {
    let filled = rating.clamp(0, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
fn ReviewForm(product_id: i32) -> Element {
    let mut author_name = use_signal(String::new);
    let mut rating = use_signal(|| 5i16);
    let mut title = use_signal(String::new);
    let mut body = use_signal(String::new);
    #[allow(unused_mut)]
    let mut submitted = use_signal(|| false);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    if submitted() {
        return rsx!(
            div {
                class: "alert alert-info",
                "Thanks! Your review will appear once it has been approved."
            }
        );
    }

    rsx!(
        form {
            class: "flex flex-col gap-3 max-w-xl",
            onsubmit: move |evt| {
                evt.prevent_default();

                let title_value = title().trim().to_string();
                let payload = CreateReviewDto {
                    product_id,
                    author_name: author_name(),
                    rating: rating(),
                    title: (!title_value.is_empty()).then_some(title_value),
                    body: body(),
                };

                #[cfg(feature = "web")]
                spawn(async move {
                    match submit_review(payload).await {
                        Ok(_) => submitted.set(true),
                        Err(err) => error.set(Some(err.message)),
                    }
                });

                #[cfg(not(feature = "web"))]
                let _ = payload;
            },
            h3 { class: "text-lg font-medium", "Write a review" }
            input {
                class: "input input-bordered",
                placeholder: "Your name",
                required: true,
                value: "{author_name}",
                oninput: move |evt| author_name.set(evt.value()),
            }
            select {
                class: "select select-bordered",
                value: "{rating}",
                onchange: move |evt| {
                    if let Ok(value) = evt.value().parse::<i16>() {
                        rating.set(value);
                    }
                },
                for value in (1..=5).rev() {
                    option { key: "{value}", value: "{value}", "{stars(value)}" }
                }
            }
            input {
                class: "input input-bordered",
                placeholder: "Title (optional)",
                value: "{title}",
                oninput: move |evt| title.set(evt.value()),
            }
            textarea {
                class: "textarea textarea-bordered",
                placeholder: "What did you think?",
                required: true,
                value: "{body}",
                oninput: move |evt| body.set(evt.value()),
            }
            if let Some(message) = error() {
                p { class: "text-error", "{message}" }
            }
            button { r#type: "submit", class: "btn btn-primary w-fit", "Submit review" }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_star_ratings() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
