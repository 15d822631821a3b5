//! Checkout totals.
//!
//! Shipping is free above [`FREE_SHIPPING_THRESHOLD`], otherwise a flat
//! [`FLAT_SHIPPING`] fee. Tax is [`TAX_RATE`] of the subtotal, rounded to cents.

use rust_decimal::Decimal;

use crate::types::Price;

/// Subtotals strictly above this ship free ($100.00).
pub const FREE_SHIPPING_THRESHOLD: Price = Price::new(Decimal::from_parts(10_000, 0, 0, false, 2));

/// Shipping fee below the threshold ($10.00).
pub const FLAT_SHIPPING: Price = Price::new(Decimal::from_parts(1_000, 0, 0, false, 2));

/// Sales tax rate (8%).
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Breakdown shown before an order is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl CheckoutSummary {
    #[must_use]
    pub fn for_subtotal(subtotal: Price) -> Self {
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Price::ZERO
        } else {
            FLAT_SHIPPING
        };
        let tax = subtotal.apply_rate(TAX_RATE);
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    #[must_use]
    pub fn has_free_shipping(&self) -> bool {
        self.shipping == Price::ZERO
    }

    /// How much more the subtotal needs before shipping is free.
    #[must_use]
    pub fn remaining_for_free_shipping(&self) -> Option<Price> {
        if self.has_free_shipping() {
            return None;
        }
        Some(Price::new(
            FREE_SHIPPING_THRESHOLD.amount() - self.subtotal.amount(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_order_pays_shipping() {
        let summary = CheckoutSummary::for_subtotal(Price::from_cents(4000));
        assert_eq!(summary.shipping, Price::from_cents(1000));
        assert_eq!(summary.tax, Price::from_cents(320));
        assert_eq!(summary.total, Price::from_cents(5320));
        assert_eq!(
            summary.remaining_for_free_shipping(),
            Some(Price::from_cents(6000))
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let at = CheckoutSummary::for_subtotal(Price::from_cents(10_000));
        assert!(!at.has_free_shipping());

        let above = CheckoutSummary::for_subtotal(Price::from_cents(10_001));
        assert!(above.has_free_shipping());
        assert_eq!(above.remaining_for_free_shipping(), None);
    }

    #[test]
    fn test_tax_rounds_to_cents() {
        let summary = CheckoutSummary::for_subtotal(Price::from_cents(14_999));
        // 8% of 149.99 = 11.9992
        assert_eq!(summary.tax, Price::from_cents(1200));
        assert_eq!(summary.total, Price::from_cents(14_999 + 1200));
    }
}
