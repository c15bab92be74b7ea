use dioxus::prelude::*;

use crate::client::{component::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page {
            class: "flex flex-col items-center justify-center gap-4",
            h1 { class: "text-4xl font-bold", "404" }
            p { class: "opacity-70", "Nothing here at /{path}" }
            Link { to: Route::Shop {}, class: "btn btn-primary", "Browse gemstones" }
        }
    )
}
