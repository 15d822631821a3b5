//! Wishlist commands.

use std::io::Write;

use stylehub_storefront::{AppError, AppState, Storage, ToggleOutcome};

use super::write_product_row;

/// Print saved products.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn show<S: Storage>(state: &AppState<S>, out: &mut impl Write) -> Result<(), AppError> {
    let items = state.store().wishlist_items();
    if items.is_empty() {
        writeln!(out, "Your wishlist is empty.")?;
        return Ok(());
    }
    writeln!(out, "{} saved:", items.len())?;
    for product in items {
        write_product_row(out, product)?;
    }
    Ok(())
}

/// Save a product.
///
/// # Errors
///
/// Returns [`AppError::ProductNotFound`] for unknown products.
pub fn add<S: Storage>(
    state: &mut AppState<S>,
    id_or_slug: &str,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let added = state.add_to_wishlist(id_or_slug)?;
    let name = &state.product(id_or_slug)?.name;
    if added {
        writeln!(out, "Saved {name} to wishlist.")?;
    } else {
        writeln!(out, "{name} is already in your wishlist.")?;
    }
    Ok(())
}

/// Unsave a product.
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
    if state.store_mut().remove_from_wishlist(&id) {
        writeln!(out, "Removed {name} from wishlist.")?;
    } else {
        writeln!(out, "{name} was not in your wishlist.")?;
    }
    Ok(())
}

/// Save if absent, unsave if present.
///
/// # Errors
///
/// Returns [`AppError::ProductNotFound`] for unknown products.
pub fn toggle<S: Storage>(
    state: &mut AppState<S>,
    id_or_slug: &str,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let outcome = state.toggle_wishlist(id_or_slug)?;
    let name = &state.product(id_or_slug)?.name;
    match outcome {
        ToggleOutcome::Added => writeln!(out, "Saved {name} to wishlist.")?,
        ToggleOutcome::Removed => writeln!(out, "Removed {name} from wishlist.")?,
        ToggleOutcome::Suppressed => writeln!(out, "Still updating {name}, try again.")?,
    }
    Ok(())
}

/// Remove every saved product.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn clear<S: Storage>(state: &mut AppState<S>, out: &mut impl Write) -> Result<(), AppError> {
    state.store_mut().clear_wishlist();
    writeln!(out, "Wishlist cleared.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output, state};

    #[test]
    fn test_add_twice() {
        let mut state = state();
        let mut buf = Vec::new();
        add(&mut state, "2", &mut buf).ok();
        add(&mut state, "classic-denim-jacket", &mut buf).ok();
        assert_eq!(
            output(buf),
            "Saved Classic Denim Jacket to wishlist.\n\
             Classic Denim Jacket is already in your wishlist.\n"
        );
        assert_eq!(state.store().wishlist_count(), 1);
    }

    #[test]
    fn test_toggle_double_click() {
        let mut state = state();
        let mut buf = Vec::new();
        toggle(&mut state, "5", &mut buf).ok();
        toggle(&mut state, "5", &mut buf).ok();
        let text = output(buf);
        assert!(text.contains("Saved Smart Fitness Watch"));
        assert!(text.contains("Still updating Smart Fitness Watch"));
        assert_eq!(state.store().wishlist_count(), 1);
    }

    #[test]
    fn test_remove_and_show_empty() {
        let mut state = state();
        let mut buf = Vec::new();
        add(&mut state, "9", &mut buf).ok();
        remove(&mut state, "9", &mut buf).ok();

        let mut shown = Vec::new();
        show(&state, &mut shown).ok();
        assert_eq!(output(shown), "Your wishlist is empty.\n");
    }
}
