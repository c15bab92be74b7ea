use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaGem, FaCartShopping},
    Icon,
};

use crate::client::{constant::SITE_NAME, model::cart::Cart, router::Route};

#[component]
pub fn Header() -> Element {
    let cart = use_context::<Cart>();
    let count = cart.count();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 28,
                        height: 28,
                        icon: FaGem
                    }
                    p {
                        class: "md:text-xl text-wrap font-serif",
                        {SITE_NAME}
                    }
                }
            }
        }
        nav {
            class: "flex items-center gap-2",
            Link { to: Route::Shop {}, class: "btn btn-ghost", "Shop" }
            Link { to: Route::Faq {}, class: "btn btn-ghost hidden sm:flex", "FAQ" }
            Link { to: Route::Quote {}, class: "btn btn-ghost hidden sm:flex", "Custom Quote" }
            Link {
                to: Route::Checkout {},
                class: "btn btn-outline flex gap-2 items-center",
                Icon {
                    width: 18,
                    height: 18,
                    icon: FaCartShopping
                }
                if count > 0 {
                    span { class: "badge badge-primary", "{count}" }
                }
            }
        }
    })
}
