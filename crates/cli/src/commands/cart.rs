//! Cart commands.

use std::io::Write;

use stylehub_storefront::{AppError, AppState, Storage, checkout};

use super::write_line_item;

/// Print the cart, its totals and the checkout breakdown.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn show<S: Storage>(state: &AppState<S>, out: &mut impl Write) -> Result<(), AppError> {
    let store = state.store();
    if store.cart_items().is_empty() {
        writeln!(out, "Your cart is empty.")?;
        return Ok(());
    }

    for item in store.cart_items() {
        write_line_item(out, item)?;
    }

    let summary = checkout::summary(store);
    writeln!(out)?;
    writeln!(out, "Subtotal ({} items): {}", store.cart_count(), summary.subtotal)?;
    if summary.has_free_shipping() {
        writeln!(out, "Shipping: FREE")?;
    } else {
        writeln!(out, "Shipping: {}", summary.shipping)?;
    }
    writeln!(out, "Tax: {}", summary.tax)?;
    writeln!(out, "Total: {}", summary.total)?;
    if let Some(remaining) = summary.remaining_for_free_shipping() {
        writeln!(out, "Add {remaining} more to get FREE shipping!")?;
    }
    Ok(())
}

/// Add a product to the cart.
///
/// # Errors
///
/// Returns [`AppError::ProductNotFound`] for unknown products.
pub fn add<S: Storage>(
    state: &mut AppState<S>,
    id_or_slug: &str,
    quantity: u32,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let line = state.add_to_cart(id_or_slug, quantity)?;
    let product = state.product(id_or_slug)?;
    let name = &product.name;

    if product.stock == 0 {
        writeln!(out, "{name} is out of stock.")?;
    } else if line.applied == 0 {
        writeln!(out, "{name} was not added.")?;
    } else if line.is_clamped() {
        writeln!(
            out,
            "{name}: quantity limited to {} (only {} in stock).",
            line.applied, product.stock
        )?;
    } else {
        writeln!(out, "{name}: {} in cart.", line.applied)?;
    }
    Ok(())
}

/// Remove a product's line from the cart.
///
/// # Errors
///
/// Returns [`AppError::ProductNotFound`] for unknown products.
pub fn remove<S: Storage>(
    state: &mut AppState<S>,
    id_or_slug: &str,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let product = state.product(id_or_slug)?;
    let (id, name) = (product.id.clone(), product.name.clone());
    state.store_mut().remove_from_cart(&id);
    writeln!(out, "Removed {name} from cart.")?;
    Ok(())
}

/// Set a line's quantity. Zero or negative removes the line.
///
/// # Errors
///
/// Returns [`AppError::ProductNotFound`] for unknown products.
pub fn update<S: Storage>(
    state: &mut AppState<S>,
    id_or_slug: &str,
    quantity: i64,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let product = state.product(id_or_slug)?;
    let (id, name) = (product.id.clone(), product.name.clone());
    let quantity = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);

    match state.store_mut().update_cart_quantity(&id, quantity) {
        Some(line) if line.is_clamped() => writeln!(
            out,
            "{name}: quantity limited to {} (stock).",
            line.applied
        )?,
        Some(line) => writeln!(out, "{name}: {} in cart.", line.applied)?,
        None if quantity == 0 => writeln!(out, "Removed {name} from cart.")?,
        None => writeln!(out, "{name} is not in the cart.")?,
    }
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn clear<S: Storage>(state: &mut AppState<S>, out: &mut impl Write) -> Result<(), AppError> {
    state.store_mut().clear_cart();
    writeln!(out, "Cart cleared.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output, state};

    #[test]
    fn test_add_reports_clamping() {
        // Wireless Gaming Headset has 15 in stock
        let mut state = state();
        let mut buf = Vec::new();
        add(&mut state, "4", 20, &mut buf).ok();
        assert!(output(buf).contains("quantity limited to 15"));
        assert_eq!(state.store().cart_count(), 15);
    }

    #[test]
    fn test_show_totals() {
        let mut state = state();
        let mut sink = Vec::new();
        // Organic Lip Balm Collection, $24.99
        add(&mut state, "8", 2, &mut sink).ok();

        let mut buf = Vec::new();
        show(&state, &mut buf).ok();
        let text = output(buf);
        assert!(text.contains("Subtotal (2 items): $49.98"));
        assert!(text.contains("Shipping: $10.00"));
        assert!(text.contains("Tax: $4.00"));
        assert!(text.contains("Total: $63.98"));
        assert!(text.contains("Add $50.02 more"));
    }

    #[test]
    fn test_update_negative_removes() {
        let mut state = state();
        let mut buf = Vec::new();
        add(&mut state, "1", 2, &mut buf).ok();
        update(&mut state, "1", -3, &mut buf).ok();
        assert!(state.store().cart_items().is_empty());
        assert!(output(buf).contains("Removed Urban Streetwear Hoodie from cart."));
    }

    #[test]
    fn test_show_empty() {
        let state = state();
        let mut buf = Vec::new();
        show(&state, &mut buf).ok();
        assert_eq!(output(buf), "Your cart is empty.\n");
    }
}
