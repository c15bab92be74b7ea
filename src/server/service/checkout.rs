//! Checkout pricing, payment intent creation and payment webhooks.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::checkout::{CartItemDto, CreatePaymentIntentDto},
    server::{
        data::product::ProductRepository,
        error::AppError,
        model::{
            checkout::{
                decode_cart_lines, encode_cart_lines, merge_cart_items, AppliedDiscount, CartLine,
                OrderLine, OrderTotals, CURRENCY,
            },
            product::Product,
        },
        service::{
            discount::DiscountService,
            payment::{
                CreatedPaymentIntent, PaymentIntentObject, PaymentIntentRequest, StripeClient,
                StripeEvent, PAYMENT_SUCCEEDED_EVENT,
            },
        },
        util::validate::is_valid_email,
    },
};

const ITEMS_METADATA_KEY: &str = "items";
const DISCOUNT_METADATA_KEY: &str = "discount_code";

pub struct CheckoutService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CheckoutService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Prices a cart from catalog data
    ///
    /// # Arguments
    /// - `items` - Requested product lines; duplicates are merged
    /// - `discount_code` - Optional customer-entered code, blank treated as absent
    /// - `now` - Instant used to check discount expiry
    ///
    /// # Returns
    /// - `Ok(OrderTotals)` - Priced lines with discount, shipping, tax and total
    /// - `Err(AppError::BadRequest)` - Empty cart, bad quantity, unknown or unavailable product
    /// - `Err(AppError::NotFound)` - Discount code not redeemable
    pub async fn summary(
        &self,
        items: &[CartItemDto],
        discount_code: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<OrderTotals, AppError> {
        let cart = merge_cart_items(items)?;

        let products: HashMap<i32, Product> = ProductRepository::new(self.db)
            .find_by_ids(cart.iter().map(|line| line.product_id).collect())
            .await?
            .into_iter()
            .map(|product| (product.id, product))
            .collect();

        let lines = cart
            .iter()
            .map(|line| {
                let product = products.get(&line.product_id).ok_or_else(|| {
                    AppError::BadRequest(format!("Product {} does not exist", line.product_id))
                })?;
                OrderLine::price(product, line.quantity)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let discount = match discount_code.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => {
                let discount = DiscountService::new(self.db).validate(code, now).await?;
                Some(AppliedDiscount {
                    code: discount.code,
                    percent_off: discount.percent_off,
                })
            }
            None => None,
        };

        OrderTotals::compute(lines, discount)
    }

    /// Prices the cart and opens a payment intent for its total
    ///
    /// # Returns
    /// - `Ok((CreatedPaymentIntent, OrderTotals))` - Intent created for `total_cents`
    /// - `Err(AppError::BadRequest)` - Invalid email or cart
    /// - `Err(AppError::PaymentErr)` - Gateway rejected the intent
    pub async fn create_payment_intent(
        &self,
        payments: &StripeClient,
        dto: CreatePaymentIntentDto,
        now: DateTime<Utc>,
    ) -> Result<(CreatedPaymentIntent, OrderTotals), AppError> {
        let email = dto.email.trim();
        if !is_valid_email(email) {
            return Err(AppError::BadRequest(
                "email must be a valid address".to_string(),
            ));
        }

        let totals = self
            .summary(&dto.items, dto.discount_code.as_deref(), now)
            .await?;

        let cart: Vec<CartLine> = totals
            .lines
            .iter()
            .map(|line| CartLine {
                product_id: line.product_id,
                quantity: line.quantity,
            })
            .collect();

        let request = PaymentIntentRequest {
            amount_cents: totals.total_cents,
            currency: CURRENCY.to_string(),
            receipt_email: email.to_string(),
            items: encode_cart_lines(&cart),
            discount_code: totals.discount_code.clone(),
        };

        let intent = payments.create_payment_intent(&request).await?;

        tracing::info!(
            "Created payment intent {} for {} cents",
            intent.id,
            totals.total_cents
        );

        Ok((intent, totals))
    }

    /// Applies a verified webhook event
    ///
    /// A succeeded payment decrements stock for each metadata line and counts one use of
    /// its discount code. Every other event type is acknowledged without changes.
    pub async fn handle_webhook_event(&self, event: StripeEvent) -> Result<(), AppError> {
        if event.event_type != PAYMENT_SUCCEEDED_EVENT {
            tracing::info!("Ignoring webhook event {} ({})", event.id, event.event_type);
            return Ok(());
        }

        let intent: PaymentIntentObject = serde_json::from_value(event.data.object)?;

        let products = ProductRepository::new(self.db);
        let lines = intent
            .metadata
            .get(ITEMS_METADATA_KEY)
            .map(|items| decode_cart_lines(items))
            .unwrap_or_default();

        for line in &lines {
            match products
                .decrement_stock(line.product_id, line.quantity)
                .await?
            {
                Some(remaining) => tracing::info!(
                    "Product {} stock now {} after payment {}",
                    line.product_id,
                    remaining,
                    intent.id
                ),
                None => tracing::warn!(
                    "Payment {} references unknown product {}",
                    intent.id,
                    line.product_id
                ),
            }
        }

        if let Some(code) = intent
            .metadata
            .get(DISCOUNT_METADATA_KEY)
            .filter(|code| !code.trim().is_empty())
        {
            if !DiscountService::new(self.db).redeem(code).await? {
                tracing::warn!(
                    "Payment {} references unknown discount code {}",
                    intent.id,
                    code
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::payment::StripeEventData;
    use test_utils::{
        builder::TestBuilder,
        factory::{discount_code::DiscountCodeFactory, product::ProductFactory},
    };

    fn item(product_id: i32, quantity: u32) -> CartItemDto {
        CartItemDto {
            product_id,
            quantity,
        }
    }

    fn succeeded_event(metadata: serde_json::Value) -> StripeEvent {
        StripeEvent {
            id: "evt_1".to_string(),
            event_type: PAYMENT_SUCCEEDED_EVENT.to_string(),
            data: StripeEventData {
                object: serde_json::json!({ "id": "pi_1", "metadata": metadata }),
            },
        }
    }

    #[tokio::test]
    async fn prices_cart_from_database() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let ruby = ProductFactory::new(db).price_cents(12_500).build().await?;
        let opal = ProductFactory::new(db).price_cents(4_000).build().await?;

        let totals = CheckoutService::new(db)
            .summary(&[item(ruby.id, 1), item(opal.id, 1), item(opal.id, 1)], None, Utc::now())
            .await?;

        assert_eq!(totals.subtotal_cents, 20_500);
        assert_eq!(totals.shipping_cents, 0);
        assert_eq!(totals.tax_cents, 2_665);
        assert_eq!(totals.total_cents, 23_165);
        assert_eq!(totals.lines.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn applies_discount_code() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let ruby = ProductFactory::new(db).price_cents(10_000).build().await?;
        DiscountCodeFactory::new(db)
            .code("SAVE10")
            .percent_off(10)
            .build()
            .await?;

        let totals = CheckoutService::new(db)
            .summary(&[item(ruby.id, 1)], Some("save10"), Utc::now())
            .await?;

        assert_eq!(totals.discount_cents, 1_000);
        assert_eq!(totals.discount_code.as_deref(), Some("SAVE10"));
        // 13% of (9_000 + 1_500)
        assert_eq!(totals.tax_cents, 1_365);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_unknown_inactive_and_short_stock() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let hidden = ProductFactory::new(db).active(false).build().await?;
        let scarce = ProductFactory::new(db).stock(1).build().await?;

        let service = CheckoutService::new(db);
        for items in [vec![item(999, 1)], vec![item(hidden.id, 1)], vec![item(scarce.id, 2)]] {
            let result = service.summary(&items, None, Utc::now()).await;
            assert!(matches!(result, Err(AppError::BadRequest(_))));
        }

        Ok(())
    }

    #[tokio::test]
    async fn rejects_order_whose_total_overflows() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        // Stored directly; the admin API caps prices well below this
        let priceless = ProductFactory::new(db)
            .price_cents(i64::MAX / 2)
            .stock(5)
            .build()
            .await?;

        let result = CheckoutService::new(db)
            .summary(&[item(priceless.id, 3)], None, Utc::now())
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_invalid_discount_code() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let ruby = ProductFactory::new(db).build().await?;

        let result = CheckoutService::new(db)
            .summary(&[item(ruby.id, 1)], Some("NOPE"), Utc::now())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn succeeded_payment_decrements_stock_and_redeems_code() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let ruby = ProductFactory::new(db).stock(3).build().await?;
        let opal = ProductFactory::new(db).stock(1).build().await?;
        DiscountCodeFactory::new(db).code("SAVE10").build().await?;

        let metadata = serde_json::json!({
            "items": format!("{}:2,{}:4", ruby.id, opal.id),
            "discount_code": "SAVE10",
        });
        CheckoutService::new(db)
            .handle_webhook_event(succeeded_event(metadata))
            .await?;

        let products = ProductRepository::new(db);
        assert_eq!(products.find_by_id(ruby.id).await?.unwrap().stock, 1);
        assert_eq!(products.find_by_id(opal.id).await?.unwrap().stock, 0);

        let code = crate::server::data::discount_code::DiscountCodeRepository::new(db)
            .find_by_code("SAVE10")
            .await?
            .unwrap();
        assert_eq!(code.times_used, 1);

        Ok(())
    }

    #[tokio::test]
    async fn ignores_other_events() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let ruby = ProductFactory::new(db).stock(3).build().await?;

        let mut event = succeeded_event(serde_json::json!({ "items": format!("{}:1", ruby.id) }));
        event.event_type = "payment_intent.created".to_string();
        CheckoutService::new(db).handle_webhook_event(event).await?;

        let product = ProductRepository::new(db).find_by_id(ruby.id).await?.unwrap();
        assert_eq!(product.stock, 3);

        Ok(())
    }
}
