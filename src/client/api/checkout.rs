use crate::{
    client::model::error::ApiError,
    model::{
        checkout::{
            CartItemDto, CheckoutSummaryRequestDto, CreatePaymentIntentDto, OrderTotalsDto,
            PaymentIntentDto,
        },
        discount::{ValidDiscountDto, ValidateDiscountDto},
    },
};

use super::helper::{parse_response, post, send_request, serialize_json};

/// Prices the cart on the server
pub async fn get_summary(
    items: Vec<CartItemDto>,
    discount_code: Option<String>,
) -> Result<OrderTotalsDto, ApiError> {
    let body = serialize_json(&CheckoutSummaryRequestDto {
        items,
        discount_code,
    })?;

    let response = send_request(post("/api/checkout/summary").body(body)).await?;
    parse_response(response).await
}

pub async fn validate_discount(code: String) -> Result<ValidDiscountDto, ApiError> {
    let body = serialize_json(&ValidateDiscountDto { code })?;

    let response = send_request(post("/api/discounts/validate").body(body)).await?;
    parse_response(response).await
}

pub async fn create_payment_intent(
    payload: CreatePaymentIntentDto,
) -> Result<PaymentIntentDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/checkout/payment-intent").body(body)).await?;
    parse_response(response).await
}
