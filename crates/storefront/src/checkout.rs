//! Simulated checkout.
//!
//! There is no payment step: a valid address and a non-empty cart are enough
//! to turn the cart into an order.

use stylehub_core::{CheckoutSummary, Order, ShippingAddress};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::storage::Storage;
use crate::store::AppStore;

/// A placed order together with the totals shown at checkout.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub order: Order,
    pub summary: CheckoutSummary,
}

/// Shipping and tax breakdown for the current cart.
pub fn summary<S: Storage>(store: &AppStore<S>) -> CheckoutSummary {
    CheckoutSummary::for_subtotal(store.cart_total())
}

/// Validate `address` and place an order for everything in the cart.
///
/// # Errors
///
/// Returns [`AppError::Address`] if a required address field is blank and
/// [`AppError::EmptyCart`] if there is nothing to order. The store is left
/// untouched in both cases.
#[instrument(skip_all)]
pub fn place_order<S: Storage>(store: &mut AppStore<S>, address: ShippingAddress) -> Result<Receipt> {
    store.hydrate();
    address.validate()?;
    if store.cart_items().is_empty() {
        return Err(AppError::EmptyCart);
    }

    let summary = summary(store);
    let items = store.cart_items().to_vec();
    let order = store.create_order(&items, address);
    Ok(Receipt { order, summary })
}
