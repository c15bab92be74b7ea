use dioxus::prelude::*;

use crate::client::{
    component::Header,
    constant::SITE_NAME,
    router::Route,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::{content::get_seo, stat::record_page_view};

/// Shell for every public page.
///
/// Reports a page view and applies the stored SEO metadata each time the route changes.
#[component]
pub fn Layout() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();

    #[allow(unused_mut)]
    let mut title = use_signal(|| SITE_NAME.to_string());
    #[allow(unused_mut)]
    let mut description = use_signal(String::new);

    #[cfg(feature = "web")]
    use_effect(use_reactive!(|(path,)| {
        spawn(async move {
            if let Err(err) = record_page_view(path.clone(), None).await {
                tracing::debug!("Page view not recorded: {}", err);
            }

            match get_seo(&path).await {
                Ok(seo) => {
                    title.set(seo.title);
                    description.set(seo.description);
                }
                Err(err) => tracing::warn!("Failed to load SEO metadata for {}: {}", path, err),
            }
        });
    }));

    rsx!(div {
        Title { "{title}" }
        document::Meta { name: "description", content: "{description}" }
        Header {  }
        Outlet::<Route> {}
        footer {
            class: "footer footer-center p-6 bg-base-200 text-sm opacity-80",
            p { "© {SITE_NAME}. Ethically sourced gemstones, shipped across Canada." }
        }
    })
}
