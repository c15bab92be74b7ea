use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CartItemDto {
    pub product_id: i32,
    pub quantity: u32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CheckoutSummaryRequestDto {
    pub items: Vec<CartItemDto>,
    #[serde(default)]
    pub discount_code: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct OrderLineDto {
    pub product_id: i32,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
    pub line_total_cents: i64,
}

/// Priced order breakdown. All amounts are CAD cents.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct OrderTotalsDto {
    pub lines: Vec<OrderLineDto>,
    pub subtotal_cents: i64,
    pub discount_code: Option<String>,
    pub discount_cents: i64,
    pub shipping_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub currency: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreatePaymentIntentDto {
    pub items: Vec<CartItemDto>,
    #[serde(default)]
    pub discount_code: Option<String>,
    pub email: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaymentIntentDto {
    pub payment_intent_id: String,
    pub client_secret: String,
    pub totals: OrderTotalsDto,
}
