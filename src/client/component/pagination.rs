use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub struct PaginationData {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

/// Previous/next pager for zero-based paginated admin lists
#[component]
pub fn Pagination(page: Signal<u64>, data: PaginationData) -> Element {
    if data.total == 0 {
        return rsx!();
    }

    let first = data.page * data.per_page + 1;
    let last = ((data.page + 1) * data.per_page).min(data.total);
    let last_page = data.total_pages.saturating_sub(1);

    rsx!(
        div {
            class: "flex justify-between items-center mt-4 gap-4",
            span {
                class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                "Showing {first} to {last} of {data.total}"
            }
            div {
                class: "join",
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    disabled: data.page == 0,
                    onclick: move |_| {
                        if page() > 0 {
                            page.set(page() - 1);
                        }
                    },
                    "«"
                }
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    "Page {data.page + 1} of {data.total_pages}"
                }
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    disabled: data.page >= last_page,
                    onclick: move |_| {
                        if page() < last_page {
                            page.set(page() + 1);
                        }
                    },
                    "»"
                }
            }
        }
    )
}
