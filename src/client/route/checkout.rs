use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaTrash, Icon};

use crate::{
    client::{
        component::Page,
        constant::MAX_LINE_QUANTITY,
        model::{
            cart::{format_cents, Cart},
            error::ApiError,
        },
        router::Route,
    },
    model::checkout::{CreatePaymentIntentDto, OrderTotalsDto, PaymentIntentDto},
};

#[cfg(feature = "web")]
use crate::client::api::checkout::{create_payment_intent, get_summary, validate_discount};

#[component]
pub fn Checkout() -> Element {
    let mut cart = use_context::<Cart>();

    let mut discount_input = use_signal(String::new);
    #[allow(unused_mut)]
    let mut applied_discount = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut discount_error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut totals = use_signal(|| None::<Result<OrderTotalsDto, ApiError>>);
    let mut email = use_signal(String::new);
    #[allow(unused_mut)]
    let mut payment = use_signal(|| None::<Result<PaymentIntentDto, ApiError>>);
    #[allow(unused_mut)]
    let mut paying = use_signal(|| false);

    // Totals are re-priced by the server whenever the cart or discount changes
    #[cfg(feature = "web")]
    use_resource(move || async move {
        let items = cart.items();
        let discount = applied_discount();
        if items.is_empty() {
            totals.set(None);
            return;
        }
        totals.set(Some(get_summary(items, discount).await));
    });

    if let Some(Ok(intent)) = &*payment.read() {
        let total = format_cents(intent.totals.total_cents);
        return rsx!(
            Page {
                class: "flex flex-col items-center",
                div {
                    class: "w-full max-w-xl flex flex-col gap-4",
                    h1 { class: "text-3xl font-serif", "Order reserved" }
                    p { "A receipt for {total} will be sent to {email} once payment is confirmed." }
                    p { class: "text-sm opacity-70", "Payment reference: {intent.payment_intent_id}" }
                    Link { to: Route::Shop {}, class: "btn btn-outline w-fit", "Continue shopping" }
                }
            }
        );
    }

    if cart.is_empty() {
        return rsx!(
            Page {
                class: "flex flex-col items-center justify-center gap-4",
                h1 { class: "text-2xl font-serif", "Your cart is empty" }
                Link { to: Route::Shop {}, class: "btn btn-primary", "Browse gemstones" }
            }
        );
    }

    let entries = cart.entries();

    rsx!(
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-4xl grid gap-8 md:grid-cols-[2fr_1fr]",
                section {
                    class: "flex flex-col gap-3",
                    h1 { class: "text-3xl font-serif", "Your cart" }
                    for (product_id, entry) in entries.into_iter().map(|e| (e.product.id, e)) {
                        div {
                            key: "{product_id}",
                            class: "flex items-center justify-between gap-4 p-3 bg-base-200 rounded-box",
                            div {
                                p { class: "font-medium", "{entry.product.name}" }
                                p { class: "text-sm opacity-70", "{format_cents(entry.product.price_cents)} each" }
                            }
                            div {
                                class: "flex items-center gap-2",
                                select {
                                    class: "select select-bordered select-sm",
                                    value: "{entry.quantity}",
                                    onchange: move |evt| {
                                        if let Ok(value) = evt.value().parse::<u32>() {
                                            cart.set_quantity(product_id, value);
                                        }
                                    },
                                    for value in 1..=MAX_LINE_QUANTITY {
                                        option { key: "{value}", value: "{value}", "{value}" }
                                    }
                                }
                                button {
                                    class: "btn btn-ghost btn-sm",
                                    title: "Remove",
                                    onclick: move |_| cart.remove(product_id),
                                    Icon { width: 14, height: 14, icon: FaTrash }
                                }
                            }
                        }
                    }
                }
                section {
                    class: "flex flex-col gap-3",
                    h2 { class: "text-xl font-serif", "Summary" }
                    form {
                        class: "join",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            let code = discount_input().trim().to_string();
                            if code.is_empty() {
                                applied_discount.set(None);
                                discount_error.set(None);
                                return;
                            }

                            #[cfg(feature = "web")]
                            spawn(async move {
                                match validate_discount(code).await {
                                    Ok(valid) => {
                                        discount_error.set(None);
                                        applied_discount.set(Some(valid.code));
                                    }
                                    Err(err) => {
                                        applied_discount.set(None);
                                        discount_error.set(Some(err.message));
                                    }
                                }
                            });
                        },
                        input {
                            class: "input input-bordered input-sm join-item w-full",
                            placeholder: "Discount code",
                            value: "{discount_input}",
                            oninput: move |evt| discount_input.set(evt.value()),
                        }
                        button { r#type: "submit", class: "btn btn-sm join-item", "Apply" }
                    }
                    if let Some(message) = discount_error() {
                        p { class: "text-error text-sm", "{message}" }
                    }
                    match &*totals.read() {
                        None => rsx!(span { class: "loading loading-spinner" }),
                        Some(Err(err)) => rsx!(p { class: "text-error", "{err}" }),
                        Some(Ok(totals)) => rsx!(TotalsTable { totals: totals.clone() }),
                    }
                    form {
                        class: "flex flex-col gap-2",
                        onsubmit: move |evt| {
                            evt.prevent_default();

                            let payload = CreatePaymentIntentDto {
                                items: cart.items(),
                                discount_code: applied_discount(),
                                email: email().trim().to_string(),
                            };

                            #[cfg(feature = "web")]
                            spawn(async move {
                                paying.set(true);
                                let result = create_payment_intent(payload).await;
                                if result.is_ok() {
                                    cart.clear();
                                }
                                payment.set(Some(result));
                                paying.set(false);
                            });

                            #[cfg(not(feature = "web"))]
                            let _ = payload;
                        },
                        input {
                            r#type: "email",
                            class: "input input-bordered",
                            placeholder: "Email for your receipt",
                            required: true,
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        if let Some(Err(err)) = &*payment.read() {
                            p { class: "text-error text-sm", "{err}" }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: paying() || !matches!(&*totals.read(), Some(Ok(_))),
                            "Place order"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn TotalsTable(totals: OrderTotalsDto) -> Element {
    let discount_label = match &totals.discount_code {
        Some(code) => format!("Discount ({})", code),
        None => "Discount".to_string(),
    };
    let shipping = if totals.shipping_cents == 0 {
        "Free".to_string()
    } else {
        format_cents(totals.shipping_cents)
    };

    rsx!(
        table {
            class: "table table-sm",
            tbody {
                tr { td { "Subtotal" } td { class: "text-right", "{format_cents(totals.subtotal_cents)}" } }
                if totals.discount_cents > 0 {
                    tr { td { "{discount_label}" } td { class: "text-right", "-{format_cents(totals.discount_cents)}" } }
                }
                tr { td { "Shipping" } td { class: "text-right", "{shipping}" } }
                tr { td { "HST" } td { class: "text-right", "{format_cents(totals.tax_cents)}" } }
                tr {
                    class: "font-semibold",
                    td { "Total ({totals.currency})" }
                    td { class: "text-right", "{format_cents(totals.total_cents)}" }
                }
            }
        }
    )
}
