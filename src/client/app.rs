use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME,
    model::{admin::AdminSession, cart::Cart},
    router::Route,
};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    use_context_provider(Cart::new);
    use_context_provider(AdminSession::new);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Meta {
            name: "og:site_name",
            content: SITE_NAME
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
