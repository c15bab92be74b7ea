use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    model::{
        api::ErrorDto,
        checkout::{
            CheckoutSummaryRequestDto, CreatePaymentIntentDto, OrderTotalsDto, PaymentIntentDto,
        },
    },
    server::{error::AppError, service::checkout::CheckoutService, state::AppState},
};

/// Tag for grouping checkout endpoints in OpenAPI documentation
pub static CHECKOUT_TAG: &str = "checkout";

const STRIPE_SIGNATURE_HEADER: &str = "stripe-signature";

/// Price a cart.
///
/// Prices come from the catalog, never from the request. Duplicate lines are merged.
///
/// # Returns
/// - `200 OK` - Subtotal, discount, shipping, 13% tax and total in CAD cents
/// - `400 Bad Request` - Empty cart, quantity outside 1 to 10, unknown, inactive or
///   out-of-stock product
/// - `404 Not Found` - Discount code cannot be applied
#[utoipa::path(
    post,
    path = "/api/checkout/summary",
    tag = CHECKOUT_TAG,
    request_body = CheckoutSummaryRequestDto,
    responses(
        (status = 200, description = "Order totals", body = OrderTotalsDto),
        (status = 400, description = "Invalid cart", body = ErrorDto),
        (status = 404, description = "Invalid or expired discount code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutSummaryRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let totals = CheckoutService::new(&state.db)
        .summary(&payload.items, payload.discount_code.as_deref(), Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(totals.into_dto())))
}

/// Open a payment intent for the priced cart.
#[utoipa::path(
    post,
    path = "/api/checkout/payment-intent",
    tag = CHECKOUT_TAG,
    request_body = CreatePaymentIntentDto,
    responses(
        (status = 200, description = "Payment intent created", body = PaymentIntentDto),
        (status = 400, description = "Invalid cart or email", body = ErrorDto),
        (status = 404, description = "Invalid or expired discount code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentIntentDto>,
) -> Result<impl IntoResponse, AppError> {
    let (intent, totals) = CheckoutService::new(&state.db)
        .create_payment_intent(&state.payments, payload, Utc::now())
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaymentIntentDto {
            payment_intent_id: intent.id,
            client_secret: intent.client_secret,
            totals: totals.into_dto(),
        }),
    ))
}

/// Receive a Stripe webhook event.
///
/// The raw body is checked against the `Stripe-Signature` header before it is parsed.
/// A succeeded payment decrements stock and counts the discount code use; other events
/// are acknowledged.
#[utoipa::path(
    post,
    path = "/api/checkout/webhook",
    tag = CHECKOUT_TAG,
    request_body(content = String, description = "Raw Stripe event JSON", content_type = "application/json"),
    params(
        ("Stripe-Signature" = String, Header, description = "t=<timestamp>,v1=<hex signature>")
    ),
    responses(
        (status = 200, description = "Event processed"),
        (status = 400, description = "Invalid signature or webhooks not configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn handle_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let signature = headers
        .get(STRIPE_SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    let event = state
        .payments
        .verify_webhook(&body, signature, Utc::now())?;

    tracing::info!("Received webhook event {} ({})", event.id, event.event_type);

    CheckoutService::new(&state.db)
        .handle_webhook_event(event)
        .await?;

    Ok(StatusCode::OK)
}
