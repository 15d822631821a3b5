//! Integration tests for the wishlist toggle guard over file storage.

#![allow(clippy::unwrap_used)]

use std::thread::sleep;
use std::time::Duration;

use stylehub_core::ProductId;
use stylehub_integration_tests::TestContext;
use stylehub_storefront::ToggleOutcome;

#[test]
fn test_double_toggle_is_suppressed_then_allowed() {
    let ctx = TestContext::new();
    let mut state = ctx.open();

    assert_eq!(state.toggle_wishlist("7").unwrap(), ToggleOutcome::Added);
    assert_eq!(state.toggle_wishlist("7").unwrap(), ToggleOutcome::Suppressed);
    assert!(state.store().is_in_wishlist(&ProductId::new("7")));

    sleep(Duration::from_millis(200));
    assert_eq!(state.toggle_wishlist("7").unwrap(), ToggleOutcome::Removed);
    drop(state.close());

    assert_eq!(ctx.open().store().wishlist_count(), 0);
}

#[test]
fn test_different_products_toggle_independently() {
    let ctx = TestContext::new();
    let mut state = ctx.open();

    assert_eq!(state.toggle_wishlist("1").unwrap(), ToggleOutcome::Added);
    assert_eq!(state.toggle_wishlist("2").unwrap(), ToggleOutcome::Added);
    assert_eq!(state.store().wishlist_count(), 2);
}
