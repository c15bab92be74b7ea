use dioxus::prelude::*;

use crate::{
    client::{component::Page, model::cart::format_cents},
    model::quote::CreateQuoteDto,
};

#[cfg(feature = "web")]
use crate::client::api::quote::submit_quote;

/// Parses a budget typed in dollars, e.g. `2,500` or `2500.50`, into cents
fn parse_budget(input: &str) -> Option<i64> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let dollars: f64 = cleaned.parse().ok()?;
    (dollars.is_finite() && dollars >= 0.0).then(|| (dollars * 100.0).round() as i64)
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn Quote() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut budget = use_signal(String::new);
    let mut message = use_signal(String::new);
    #[allow(unused_mut)]
    let mut submitted = use_signal(|| false);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    let budget_preview = parse_budget(&budget()).map(format_cents);

    rsx!(
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-2xl flex flex-col gap-4",
                h1 { class: "text-3xl font-serif", "Request a custom piece" }
                p {
                    class: "opacity-80",
                    "Tell us about the stone or setting you have in mind and we will get back to you within two business days."
                }
                if submitted() {
                    div {
                        class: "alert alert-success",
                        "Thank you, your request has been received."
                    }
                } else {
                    form {
                        class: "flex flex-col gap-3",
                        onsubmit: move |evt| {
                            evt.prevent_default();

                            let payload = CreateQuoteDto {
                                name: name(),
                                email: email(),
                                phone: optional(phone()),
                                product_id: None,
                                message: message(),
                                budget_cents: parse_budget(&budget()),
                            };

                            #[cfg(feature = "web")]
                            spawn(async move {
                                submitting.set(true);
                                match submit_quote(payload).await {
                                    Ok(_) => submitted.set(true),
                                    Err(err) => error.set(Some(err.message)),
                                }
                                submitting.set(false);
                            });

                            #[cfg(not(feature = "web"))]
                            let _ = payload;
                        },
                        input {
                            class: "input input-bordered",
                            placeholder: "Name",
                            required: true,
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                        input {
                            r#type: "email",
                            class: "input input-bordered",
                            placeholder: "Email",
                            required: true,
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        input {
                            r#type: "tel",
                            class: "input input-bordered",
                            placeholder: "Phone (optional)",
                            value: "{phone}",
                            oninput: move |evt| phone.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered",
                            placeholder: "Budget in CAD (optional)",
                            value: "{budget}",
                            oninput: move |evt| budget.set(evt.value()),
                        }
                        if let Some(preview) = budget_preview {
                            p { class: "text-sm opacity-70", "Budget: {preview}" }
                        }
                        textarea {
                            class: "textarea textarea-bordered min-h-32",
                            placeholder: "Describe your piece",
                            required: true,
                            value: "{message}",
                            oninput: move |evt| message.set(evt.value()),
                        }
                        if let Some(message) = error() {
                            p { class: "text-error", "{message}" }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary w-fit",
                            disabled: submitting(),
                            "Send request"
                        }
                    }
                }
            }
        }
    )
}
