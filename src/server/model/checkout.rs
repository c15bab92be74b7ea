//! Order pricing for checkout summaries and payment intents
//!
//! Totals are always computed from catalog prices read on the server. Amounts are CAD
//! cents and every percentage is applied with half-up rounding on integers.

use std::collections::BTreeMap;

use crate::{
    model::checkout::{CartItemDto, OrderLineDto, OrderTotalsDto},
    server::{error::AppError, model::product::Product},
};

pub const CURRENCY: &str = "cad";
pub const MAX_LINE_QUANTITY: u32 = 10;
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 20_000;
pub const FLAT_SHIPPING_CENTS: i64 = 1_500;
pub const TAX_PERCENT: i64 = 13;

/// One requested product and quantity after duplicates are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: i32,
    pub quantity: u32,
}

/// Validates cart items and merges duplicate product lines.
///
/// Lines are returned ordered by product id so metadata and totals are deterministic.
///
/// # Returns
/// - `Ok(Vec<CartLine>)` - Merged lines, each with quantity 1 to 10
/// - `Err(AppError::BadRequest)` - Empty cart or a quantity outside 1 to 10
pub fn merge_cart_items(items: &[CartItemDto]) -> Result<Vec<CartLine>, AppError> {
    if items.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".to_string()));
    }

    let mut merged: BTreeMap<i32, u32> = BTreeMap::new();
    for item in items {
        if item.quantity == 0 || item.quantity > MAX_LINE_QUANTITY {
            return Err(AppError::BadRequest(format!(
                "quantity must be between 1 and {}",
                MAX_LINE_QUANTITY
            )));
        }
        *merged.entry(item.product_id).or_default() += item.quantity;
    }

    merged
        .into_iter()
        .map(|(product_id, quantity)| {
            if quantity > MAX_LINE_QUANTITY {
                return Err(AppError::BadRequest(format!(
                    "quantity must be between 1 and {}",
                    MAX_LINE_QUANTITY
                )));
            }
            Ok(CartLine {
                product_id,
                quantity,
            })
        })
        .collect()
}

/// Encodes lines as `id:qty,id:qty` for payment metadata.
pub fn encode_cart_lines(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|line| format!("{}:{}", line.product_id, line.quantity))
        .collect::<Vec<_>>()
        .join(",")
}

/// Decodes `id:qty,id:qty` metadata, skipping malformed pairs.
pub fn decode_cart_lines(value: &str) -> Vec<CartLine> {
    value
        .split(',')
        .filter_map(|pair| {
            let (id, qty) = pair.trim().split_once(':')?;
            Some(CartLine {
                product_id: id.trim().parse().ok()?,
                quantity: qty.trim().parse().ok()?,
            })
        })
        .collect()
}

/// `value * percent / 100` rounded half-up, for non-negative values.
///
/// Returns `None` when the intermediate product overflows.
pub fn percent_of_half_up(value: i64, percent: i64) -> Option<i64> {
    value
        .checked_mul(percent)?
        .checked_add(50)
        .map(|v| v.div_euclid(100))
}

fn order_too_large() -> AppError {
    AppError::BadRequest("Order total is too large".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product_id: i32,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
    pub line_total_cents: i64,
}

impl OrderLine {
    /// Prices a cart line against its product, checking availability.
    ///
    /// # Returns
    /// - `Ok(OrderLine)` - Line priced at the current catalog price
    /// - `Err(AppError::BadRequest)` - Product inactive, not enough stock or the line
    ///   total overflows
    pub fn price(product: &Product, quantity: u32) -> Result<Self, AppError> {
        if !product.active {
            return Err(AppError::BadRequest(format!(
                "{} is no longer available",
                product.name
            )));
        }
        if (product.stock as i64) < quantity as i64 {
            return Err(AppError::BadRequest(format!(
                "Only {} of {} left in stock",
                product.stock.max(0),
                product.name
            )));
        }

        let line_total_cents = product
            .price_cents
            .checked_mul(quantity as i64)
            .ok_or_else(order_too_large)?;

        Ok(Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity,
            line_total_cents,
        })
    }
}

/// Applied discount code and its percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedDiscount {
    pub code: String,
    pub percent_off: i16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderTotals {
    pub lines: Vec<OrderLine>,
    pub subtotal_cents: i64,
    pub discount_code: Option<String>,
    pub discount_cents: i64,
    pub shipping_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

impl OrderTotals {
    /// Computes discount, shipping, tax and total for priced lines.
    ///
    /// Shipping is free once the discounted subtotal reaches the threshold and tax is
    /// charged on the discounted subtotal plus shipping.
    ///
    /// # Returns
    /// - `Ok(OrderTotals)` - Priced order
    /// - `Err(AppError::BadRequest)` - An amount does not fit in `i64` cents
    pub fn compute(
        lines: Vec<OrderLine>,
        discount: Option<AppliedDiscount>,
    ) -> Result<Self, AppError> {
        let subtotal_cents = lines
            .iter()
            .try_fold(0i64, |sum, l| sum.checked_add(l.line_total_cents))
            .ok_or_else(order_too_large)?;

        let discount_cents = match &discount {
            Some(d) => percent_of_half_up(subtotal_cents, d.percent_off as i64)
                .ok_or_else(order_too_large)?,
            None => 0,
        };
        let discounted = subtotal_cents - discount_cents;

        let shipping_cents = if discounted >= FREE_SHIPPING_THRESHOLD_CENTS {
            0
        } else {
            FLAT_SHIPPING_CENTS
        };

        let taxable = discounted
            .checked_add(shipping_cents)
            .ok_or_else(order_too_large)?;
        let tax_cents = percent_of_half_up(taxable, TAX_PERCENT).ok_or_else(order_too_large)?;
        let total_cents = taxable.checked_add(tax_cents).ok_or_else(order_too_large)?;

        Ok(Self {
            lines,
            subtotal_cents,
            discount_code: discount.map(|d| d.code),
            discount_cents,
            shipping_cents,
            tax_cents,
            total_cents,
        })
    }

    pub fn into_dto(self) -> OrderTotalsDto {
        OrderTotalsDto {
            lines: self
                .lines
                .into_iter()
                .map(|l| OrderLineDto {
                    product_id: l.product_id,
                    name: l.name,
                    unit_price_cents: l.unit_price_cents,
                    quantity: l.quantity,
                    line_total_cents: l.line_total_cents,
                })
                .collect(),
            subtotal_cents: self.subtotal_cents,
            discount_code: self.discount_code,
            discount_cents: self.discount_cents,
            shipping_cents: self.shipping_cents,
            tax_cents: self.tax_cents,
            total_cents: self.total_cents,
            currency: CURRENCY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price: i64, quantity: u32) -> OrderLine {
        OrderLine {
            product_id: 1,
            name: "Ruby".to_string(),
            unit_price_cents: price,
            quantity,
            line_total_cents: price * quantity as i64,
        }
    }

    fn item(product_id: i32, quantity: u32) -> CartItemDto {
        CartItemDto {
            product_id,
            quantity,
        }
    }

    #[test]
    fn small_order_pays_flat_shipping_and_tax() {
        let totals = OrderTotals::compute(vec![line(5_000, 2)], None).unwrap();
        assert_eq!(totals.subtotal_cents, 10_000);
        assert_eq!(totals.shipping_cents, 1_500);
        // 13% of 11_500
        assert_eq!(totals.tax_cents, 1_495);
        assert_eq!(totals.total_cents, 12_995);
    }

    #[test]
    fn ships_free_at_threshold() {
        let totals = OrderTotals::compute(vec![line(20_000, 1)], None).unwrap();
        assert_eq!(totals.shipping_cents, 0);
        assert_eq!(totals.tax_cents, 2_600);
        assert_eq!(totals.total_cents, 22_600);
    }

    #[test]
    fn discount_can_drop_below_free_shipping() {
        let totals = OrderTotals::compute(
            vec![line(21_000, 1)],
            Some(AppliedDiscount {
                code: "SAVE10".to_string(),
                percent_off: 10,
            }),
        )
        .unwrap();
        assert_eq!(totals.discount_cents, 2_100);
        assert_eq!(totals.shipping_cents, 1_500);
        // 13% of 20_400 = 2_652
        assert_eq!(totals.tax_cents, 2_652);
        assert_eq!(totals.total_cents, 18_900 + 1_500 + 2_652);
        assert_eq!(totals.discount_code.as_deref(), Some("SAVE10"));
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(percent_of_half_up(1_050, 5), Some(53));
        assert_eq!(percent_of_half_up(1_049, 5), Some(52));
        assert_eq!(percent_of_half_up(0, 13), Some(0));
        assert_eq!(percent_of_half_up(i64::MAX / 2, 13), None);
    }

    #[test]
    fn rejects_totals_that_overflow() {
        let result = OrderTotals::compute(
            vec![line(i64::MAX / 4, 1), line(i64::MAX / 4, 1), line(i64::MAX / 4, 1)],
            None,
        );
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let result = OrderTotals::compute(vec![line(i64::MAX / 8, 1)], None);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn merges_duplicate_lines() {
        let lines = merge_cart_items(&[item(2, 1), item(1, 3), item(2, 4)]).unwrap();
        assert_eq!(
            lines,
            vec![
                CartLine {
                    product_id: 1,
                    quantity: 3
                },
                CartLine {
                    product_id: 2,
                    quantity: 5
                },
            ]
        );
    }

    #[test]
    fn rejects_empty_cart_and_bad_quantities() {
        assert!(merge_cart_items(&[]).is_err());
        assert!(merge_cart_items(&[item(1, 0)]).is_err());
        assert!(merge_cart_items(&[item(1, 11)]).is_err());
        assert!(merge_cart_items(&[item(1, 6), item(1, 6)]).is_err());
    }

    #[test]
    fn metadata_encoding_round_trips_and_skips_garbage() {
        let lines = vec![
            CartLine {
                product_id: 4,
                quantity: 2,
            },
            CartLine {
                product_id: 9,
                quantity: 1,
            },
        ];
        assert_eq!(encode_cart_lines(&lines), "4:2,9:1");
        assert_eq!(decode_cart_lines("4:2, 9:1,bad,7:x"), lines);
    }
}
