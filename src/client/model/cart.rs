use dioxus::prelude::*;

use crate::{
    client::constant::MAX_LINE_QUANTITY,
    model::{checkout::CartItemDto, product::ProductDto},
};

#[derive(Clone, Debug, PartialEq)]
pub struct CartEntry {
    pub product: ProductDto,
    pub quantity: u32,
}

/// Client-side cart shared through context.
///
/// Prices shown here are for display only; totals always come from the checkout summary.
#[derive(Clone, Copy)]
pub struct Cart {
    inner: Signal<Vec<CartEntry>>,
}

impl Cart {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> Vec<CartEntry> {
        self.inner.read().clone()
    }

    pub fn count(&self) -> u32 {
        self.inner.read().iter().map(|e| e.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Adds a product, merging with an existing line and capping the quantity.
    pub fn add(&mut self, product: ProductDto, quantity: u32) {
        let mut entries = self.inner.write();
        match entries.iter_mut().find(|e| e.product.id == product.id) {
            Some(entry) => {
                entry.quantity = (entry.quantity + quantity).min(MAX_LINE_QUANTITY);
            }
            None => entries.push(CartEntry {
                product,
                quantity: quantity.clamp(1, MAX_LINE_QUANTITY),
            }),
        }
    }

    pub fn set_quantity(&mut self, product_id: i32, quantity: u32) {
        let mut entries = self.inner.write();
        if quantity == 0 {
            entries.retain(|e| e.product.id != product_id);
        } else if let Some(entry) = entries.iter_mut().find(|e| e.product.id == product_id) {
            entry.quantity = quantity.min(MAX_LINE_QUANTITY);
        }
    }

    pub fn remove(&mut self, product_id: i32) {
        self.inner.write().retain(|e| e.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.inner.write().clear();
    }

    pub fn items(&self) -> Vec<CartItemDto> {
        self.inner
            .read()
            .iter()
            .map(|e| CartItemDto {
                product_id: e.product.id,
                quantity: e.quantity,
            })
            .collect()
    }
}

/// Formats CAD cents as `$1,234.56`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = (cents / 100).to_string();

    let mut grouped = String::new();
    for (i, c) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cents() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(12_995), "$129.95");
        assert_eq!(format_cents(123_456_789), "$1,234,567.89");
        assert_eq!(format_cents(-1_500), "-$15.00");
    }
}
