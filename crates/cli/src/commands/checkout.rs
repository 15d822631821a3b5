//! Checkout and order history commands.

use std::io::Write;

use stylehub_core::ShippingAddress;
use stylehub_storefront::{AppError, AppState, Storage};

use super::write_line_item;

/// Place an order for the cart and print the receipt.
///
/// # Errors
///
/// Returns [`AppError::Address`] for an incomplete address and
/// [`AppError::EmptyCart`] when there is nothing to order.
pub fn place<S: Storage>(
    state: &mut AppState<S>,
    address: ShippingAddress,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let receipt = state.checkout(address)?;
    let order = &receipt.order;
    let summary = &receipt.summary;

    writeln!(out, "Order {} placed.", order.id)?;
    for item in &order.items {
        write_line_item(out, item)?;
    }
    writeln!(out, "Subtotal: {}", summary.subtotal)?;
    writeln!(out, "Shipping: {}", summary.shipping)?;
    writeln!(out, "Tax: {}", summary.tax)?;
    writeln!(out, "Charged: {}", summary.total)?;
    writeln!(
        out,
        "Ships to {}, {}, {} {}",
        order.shipping_address.name,
        order.shipping_address.address,
        order.shipping_address.city,
        order.shipping_address.zip_code
    )?;
    Ok(())
}

/// List orders, most recent first.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn list_orders<S: Storage>(state: &AppState<S>, out: &mut impl Write) -> Result<(), AppError> {
    let orders = state.store().orders();
    if orders.is_empty() {
        writeln!(out, "No orders yet.")?;
        return Ok(());
    }
    for order in orders {
        let status = order.status.to_string();
        writeln!(
            out,
            "{}  {}  {status:<10} {:>3} items  subtotal {}",
            order.placed_at.format("%Y-%m-%d %H:%M"),
            order.id,
            order.item_count(),
            order.total
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use stylehub_core::AddressError;

    use super::*;
    use crate::commands::test_support::{output, state};

    fn address() -> ShippingAddress {
        ShippingAddress {
            name: "Jane Doe".to_string(),
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            zip_code: "12345".to_string(),
            country: String::new(),
        }
    }

    #[test]
    fn test_place_prints_receipt() {
        let mut state = state();
        state.add_to_cart("3", 1).ok();

        let mut buf = Vec::new();
        place(&mut state, address(), &mut buf).ok();
        let text = output(buf);
        assert!(text.starts_with("Order "));
        assert!(text.contains("Shipping: $0.00"));
        assert!(text.contains("Tax: $12.00"));
        assert!(text.contains("Charged: $161.99"));
        assert!(state.store().cart_items().is_empty());
        assert_eq!(state.store().orders().len(), 1);
    }

    #[test]
    fn test_place_empty_cart() {
        let mut state = state();
        let mut buf = Vec::new();
        assert!(matches!(
            place(&mut state, address(), &mut buf),
            Err(AppError::EmptyCart)
        ));
    }

    #[test]
    fn test_place_missing_zip() {
        let mut state = state();
        state.add_to_cart("3", 1).ok();
        let mut buf = Vec::new();
        let address = ShippingAddress {
            zip_code: "  ".to_string(),
            ..address()
        };
        assert!(matches!(
            place(&mut state, address, &mut buf),
            Err(AppError::Address(AddressError::MissingZipCode))
        ));
        assert_eq!(state.store().cart_count(), 1);
    }

    #[test]
    fn test_list_orders() {
        let mut state = state();
        let mut buf = Vec::new();
        list_orders(&state, &mut buf).ok();
        assert_eq!(output(buf), "No orders yet.\n");

        state.add_to_cart("13", 2).ok();
        let mut sink = Vec::new();
        place(&mut state, address(), &mut sink).ok();

        let mut buf = Vec::new();
        list_orders(&state, &mut buf).ok();
        let text = output(buf);
        assert!(text.contains("completed"));
        assert!(text.contains("2 items"));
        assert!(text.contains("subtotal $39.98"));
    }
}
