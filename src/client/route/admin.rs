use dioxus::prelude::*;

use crate::{
    client::{
        component::{Page, Pagination, PaginationData},
        constant::ADMIN_PAGE_SIZE,
        model::{admin::AdminSession, cart::format_cents, error::ApiError},
    },
    model::{
        quote::{PaginatedQuotesDto, QuoteStatus},
        review::PaginatedReviewsDto,
        stat::DashboardDto,
    },
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::{
    auth::login,
    quote::{get_admin_quotes, update_quote_status},
    review::{approve_review, delete_review, get_admin_reviews},
    stat::get_dashboard,
};

/// Drops the session when the server no longer accepts the token
#[cfg_attr(not(feature = "web"), allow(dead_code))]
fn handle_auth_error(session: &mut AdminSession, err: &ApiError) {
    if err.status == 401 {
        session.clear();
    }
}

#[component]
pub fn Admin() -> Element {
    let mut session = use_context::<AdminSession>();

    rsx!(
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-6xl flex flex-col gap-8",
                div {
                    class: "flex justify-between items-center",
                    h1 { class: "text-3xl font-serif", "Admin" }
                    if session.is_logged_in() {
                        button {
                            class: "btn btn-outline btn-sm",
                            onclick: move |_| session.clear(),
                            "Log out"
                        }
                    }
                }
                if session.is_logged_in() {
                    Dashboard {}
                    ReviewModeration {}
                    QuoteInbox {}
                } else {
                    LoginForm {}
                }
            }
        }
    )
}

#[component]
fn LoginForm() -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut session = use_context::<AdminSession>();
    let mut password = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    rsx!(
        form {
            class: "flex flex-col gap-3 max-w-sm",
            onsubmit: move |evt| {
                evt.prevent_default();

                #[cfg(feature = "web")]
                spawn(async move {
                    match login(password()).await {
                        Ok(token) => {
                            password.set(String::new());
                            error.set(None);
                            session.set(token);
                        }
                        Err(err) => error.set(Some(err.message)),
                    }
                });
            },
            input {
                r#type: "password",
                class: "input input-bordered",
                placeholder: "Admin password",
                required: true,
                value: "{password}",
                oninput: move |evt| password.set(evt.value()),
            }
            if let Some(message) = error() {
                p { class: "text-error text-sm", "{message}" }
            }
            button { r#type: "submit", class: "btn btn-primary w-fit", "Log in" }
        }
    )
}

#[component]
fn Dashboard() -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut session = use_context::<AdminSession>();
    #[allow(unused_mut)]
    let mut dashboard = use_signal(|| None::<Result<DashboardDto, ApiError>>);

    #[cfg(feature = "web")]
    use_resource(move || async move {
        let Some(token) = session.token() else {
            return;
        };
        let result = get_dashboard(&token).await;
        if let Err(err) = &result {
            handle_auth_error(&mut session, err);
        }
        dashboard.set(Some(result));
    });

    rsx!(
        section {
            match &*dashboard.read() {
                None => rsx!(span { class: "loading loading-spinner" }),
                Some(Err(err)) => rsx!(p { class: "text-error", "Failed to load dashboard: {err}" }),
                Some(Ok(d)) => rsx!(
                    div {
                        class: "stats stats-vertical sm:stats-horizontal shadow w-full",
                        div {
                            class: "stat",
                            div { class: "stat-title", "Products" }
                            div { class: "stat-value", "{d.active_products}" }
                            div { class: "stat-desc", "{d.total_products} total" }
                        }
                        div {
                            class: "stat",
                            div { class: "stat-title", "Pending reviews" }
                            div { class: "stat-value", "{d.pending_reviews}" }
                        }
                        div {
                            class: "stat",
                            div { class: "stat-title", "New quotes" }
                            div { class: "stat-value", "{d.new_quotes}" }
                        }
                        div {
                            class: "stat",
                            div { class: "stat-title", "Views" }
                            div { class: "stat-value", "{d.views_last_30_days}" }
                            div { class: "stat-desc", "last 30 days" }
                        }
                    }
                ),
            }
        }
    )
}

#[component]
fn ReviewModeration() -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut session = use_context::<AdminSession>();
    let page = use_signal(|| 0u64);
    #[allow(unused_mut)]
    let mut refresh = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut reviews = use_signal(|| None::<Result<PaginatedReviewsDto, ApiError>>);

    #[cfg(feature = "web")]
    use_resource(move || async move {
        let _ = refresh();
        let page = page();
        let Some(token) = session.token() else {
            return;
        };
        let result = get_admin_reviews(&token, "pending", page, ADMIN_PAGE_SIZE).await;
        if let Err(err) = &result {
            handle_auth_error(&mut session, err);
        }
        reviews.set(Some(result));
    });

    #[allow(unused_variables)]
    let moderate = move |id: i32, approve: bool| {
        #[cfg(feature = "web")]
        spawn(async move {
            let Some(token) = session.token() else {
                return;
            };
            let result = if approve {
                approve_review(&token, id).await.map(|_| ())
            } else {
                delete_review(&token, id).await
            };
            match result {
                Ok(()) => refresh += 1,
                Err(err) => {
                    handle_auth_error(&mut session, &err);
                    tracing::error!("Review moderation failed: {}", err);
                }
            }
        });
    };

    rsx!(
        section {
            class: "flex flex-col gap-3",
            h2 { class: "text-2xl font-serif", "Pending reviews" }
            match &*reviews.read() {
                None => rsx!(span { class: "loading loading-spinner" }),
                Some(Err(err)) => rsx!(p { class: "text-error", "Failed to load reviews: {err}" }),
                Some(Ok(data)) if data.reviews.is_empty() => rsx!(
                    p { class: "opacity-70", "Nothing waiting for moderation." }
                ),
                Some(Ok(data)) => rsx!(
                    for review in data.reviews.iter().cloned() {
                        div {
                            key: "{review.id}",
                            class: "card bg-base-200",
                            div {
                                class: "card-body gap-2",
                                div {
                                    class: "flex justify-between",
                                    span { class: "font-semibold", "{review.author_name} · {review.rating}/5" }
                                    span { class: "text-sm opacity-70", "Product #{review.product_id}" }
                                }
                                if let Some(title) = &review.title {
                                    p { class: "font-medium", "{title}" }
                                }
                                p { "{review.body}" }
                                div {
                                    class: "card-actions justify-end",
                                    button {
                                        class: "btn btn-sm btn-success",
                                        onclick: move |_| moderate(review.id, true),
                                        "Approve"
                                    }
                                    button {
                                        class: "btn btn-sm btn-error btn-outline",
                                        onclick: move |_| moderate(review.id, false),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                    Pagination {
                        page,
                        data: PaginationData {
                            page: data.page,
                            per_page: data.per_page,
                            total: data.total,
                            total_pages: data.total_pages,
                        }
                    }
                ),
            }
        }
    )
}

const QUOTE_STATUSES: [QuoteStatus; 3] =
    [QuoteStatus::New, QuoteStatus::Contacted, QuoteStatus::Closed];

#[component]
fn QuoteInbox() -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut session = use_context::<AdminSession>();
    let mut page = use_signal(|| 0u64);
    let mut filter = use_signal(|| Some(QuoteStatus::New));
    #[allow(unused_mut)]
    let mut refresh = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut quotes = use_signal(|| None::<Result<PaginatedQuotesDto, ApiError>>);

    #[cfg(feature = "web")]
    use_resource(move || async move {
        let _ = refresh();
        let (status, page) = (filter(), page());
        let Some(token) = session.token() else {
            return;
        };
        let result = get_admin_quotes(&token, status, page, ADMIN_PAGE_SIZE).await;
        if let Err(err) = &result {
            handle_auth_error(&mut session, err);
        }
        quotes.set(Some(result));
    });

    #[allow(unused_variables)]
    let set_status = move |id: i32, status: QuoteStatus| {
        #[cfg(feature = "web")]
        spawn(async move {
            let Some(token) = session.token() else {
                return;
            };
            match update_quote_status(&token, id, status).await {
                Ok(_) => refresh += 1,
                Err(err) => {
                    handle_auth_error(&mut session, &err);
                    tracing::error!("Quote status update failed: {}", err);
                }
            }
        });
    };

    rsx!(
        section {
            class: "flex flex-col gap-3",
            div {
                class: "flex justify-between items-center",
                h2 { class: "text-2xl font-serif", "Quote requests" }
                select {
                    class: "select select-bordered select-sm",
                    onchange: move |evt| {
                        filter.set(QuoteStatus::parse(&evt.value()));
                        page.set(0);
                    },
                    option { value: "new", selected: filter() == Some(QuoteStatus::New), "New" }
                    option { value: "contacted", selected: filter() == Some(QuoteStatus::Contacted), "Contacted" }
                    option { value: "closed", selected: filter() == Some(QuoteStatus::Closed), "Closed" }
                    option { value: "", selected: filter().is_none(), "All" }
                }
            }
            match &*quotes.read() {
                None => rsx!(span { class: "loading loading-spinner" }),
                Some(Err(err)) => rsx!(p { class: "text-error", "Failed to load quotes: {err}" }),
                Some(Ok(data)) if data.quotes.is_empty() => rsx!(
                    p { class: "opacity-70", "No quote requests." }
                ),
                Some(Ok(data)) => rsx!(
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "Received" }
                                    th { "Contact" }
                                    th { "Budget" }
                                    th { "Message" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for quote in data.quotes.iter().cloned() {
                                    tr {
                                        key: "{quote.id}",
                                        td { class: "whitespace-nowrap", {quote.created_at.format("%Y-%m-%d").to_string()} }
                                        td {
                                            p { "{quote.name}" }
                                            a { class: "link text-sm", href: "mailto:{quote.email}", "{quote.email}" }
                                            if let Some(phone) = &quote.phone {
                                                p { class: "text-sm opacity-70", "{phone}" }
                                            }
                                        }
                                        td { {quote.budget_cents.map(format_cents).unwrap_or_else(|| "-".to_string())} }
                                        td { class: "max-w-md whitespace-pre-line", "{quote.message}" }
                                        td {
                                            select {
                                                class: "select select-bordered select-xs",
                                                onchange: move |evt| {
                                                    if let Some(status) = QuoteStatus::parse(&evt.value()) {
                                                        set_status(quote.id, status);
                                                    }
                                                },
                                                for status in QUOTE_STATUSES {
                                                    option {
                                                        key: "{status.as_str()}",
                                                        value: status.as_str(),
                                                        selected: status == quote.status,
                                                        "{status.as_str()}"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    Pagination {
                        page,
                        data: PaginationData {
                            page: data.page,
                            per_page: data.per_page,
                            total: data.total,
                            total_pages: data.total_pages,
                        }
                    }
                ),
            }
        }
    )
}
