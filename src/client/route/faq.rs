use dioxus::prelude::*;
use pulldown_cmark::{html, Parser};

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        model::error::ApiError,
    },
    model::faq::FaqDto,
};

#[cfg(feature = "web")]
use crate::client::api::faq::get_faq;

/// Renders an FAQ answer written in markdown
fn answer_html(markdown: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(markdown));
    out
}

#[component]
pub fn Faq() -> Element {
    #[allow(unused_mut)]
    let mut entries = use_signal(|| None::<Result<Vec<FaqDto>, ApiError>>);

    #[cfg(feature = "web")]
    use_resource(move || async move {
        entries.set(Some(get_faq().await));
    });

    let element = match &*entries.read() {
        None => rsx!(LoadingPage {}),
        Some(Err(err)) => rsx!(ErrorPage { status: err.status, message: err.message.clone() }),
        Some(Ok(list)) => rsx!(
            Page {
                class: "flex flex-col items-center",
                div {
                    class: "w-full max-w-3xl flex flex-col gap-2",
                    h1 { class: "text-3xl font-serif mb-4", "Frequently asked questions" }
                    for entry in list.iter() {
                        div {
                            key: "{entry.id}",
                            class: "collapse collapse-arrow bg-base-200",
                            input { r#type: "checkbox" }
                            div { class: "collapse-title font-medium", "{entry.question}" }
                            div {
                                class: "collapse-content prose",
                                dangerous_inner_html: answer_html(&entry.answer),
                            }
                        }
                    }
                }
            }
        ),
    };
    element
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_markdown_answers() {
        let html = answer_html("We ship **insured** within Canada.");
        assert!(html.contains("<strong>insured</strong>"));
    }
}
