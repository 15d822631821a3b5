//! Debounce-by-identity guard for wishlist toggles.
//!
//! A toggle marks its product id as in flight. Further toggles for the same id
//! are ignored until the mark expires, which suppresses double clicks without
//! throttling toggles of other products. The in-flight set is a `moka` cache
//! whose time-to-live is the suppression window.

use std::time::Duration;

use moka::sync::Cache;
use stylehub_core::{Product, ProductId};
use tracing::debug;

use crate::storage::Storage;
use crate::store::AppStore;

/// Default suppression window.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(500);

/// Upper bound on simultaneously tracked ids.
const MAX_IN_FLIGHT: u64 = 1024;

/// What a call to [`WishlistToggle::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Another toggle for the same product is still in flight.
    Suppressed,
}

/// Tracks which product ids were toggled within the window.
#[derive(Clone)]
pub struct WishlistToggle {
    in_flight: Cache<ProductId, ()>,
    window: Duration,
}

impl WishlistToggle {
    /// Create a guard; a zero window is raised to one millisecond.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        let window = window.max(Duration::from_millis(1));
        let in_flight = Cache::builder()
            .max_capacity(MAX_IN_FLIGHT)
            .time_to_live(window)
            .build();
        Self { in_flight, window }
    }

    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Whether a toggle for `product_id` is still in flight.
    #[must_use]
    pub fn is_pending(&self, product_id: &ProductId) -> bool {
        self.in_flight.get(product_id).is_some()
    }

    /// Add `product` to the wishlist if absent, remove it if present.
    pub fn toggle<S: Storage>(&self, store: &mut AppStore<S>, product: &Product) -> ToggleOutcome {
        if self.is_pending(&product.id) {
            debug!(product_id = %product.id, "Wishlist toggle suppressed");
            return ToggleOutcome::Suppressed;
        }
        self.in_flight.insert(product.id.clone(), ());

        store.hydrate();
        if store.is_in_wishlist(&product.id) {
            store.remove_from_wishlist(&product.id);
            ToggleOutcome::Removed
        } else {
            store.add_to_wishlist(product);
            ToggleOutcome::Added
        }
    }
}

impl Default for WishlistToggle {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl std::fmt::Debug for WishlistToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistToggle")
            .field("window", &self.window)
            .field("in_flight", &self.in_flight.entry_count())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::thread::sleep;

    use stylehub_core::{CategoryId, Price};

    use super::*;
    use crate::storage::{MemoryStorage, StorageKeys};

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            slug: format!("product-{id}"),
            price: Price::from_cents(1000),
            original_price: None,
            rating: 0.0,
            review_count: 0,
            category_id: CategoryId::new("1"),
            description: String::new(),
            features: Vec::new(),
            image: String::new(),
            images: Vec::new(),
            stock: 5,
            is_new: false,
            is_trending: false,
            is_featured: false,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_overlapping_toggle_is_suppressed() {
        let guard = WishlistToggle::new(Duration::from_secs(60));
        let mut store = AppStore::open(MemoryStorage::new(), StorageKeys::default());
        let p = product("1");

        assert_eq!(guard.toggle(&mut store, &p), ToggleOutcome::Added);
        assert_eq!(guard.toggle(&mut store, &p), ToggleOutcome::Suppressed);
        assert!(store.is_in_wishlist(&p.id));
        assert!(guard.is_pending(&p.id));
    }

    #[test]
    fn test_other_ids_are_not_suppressed() {
        let guard = WishlistToggle::new(Duration::from_secs(60));
        let mut store = AppStore::open(MemoryStorage::new(), StorageKeys::default());

        assert_eq!(guard.toggle(&mut store, &product("1")), ToggleOutcome::Added);
        assert_eq!(guard.toggle(&mut store, &product("2")), ToggleOutcome::Added);
        assert_eq!(store.wishlist_count(), 2);
    }

    #[test]
    fn test_toggle_allowed_again_after_window() {
        let guard = WishlistToggle::new(Duration::from_millis(30));
        let mut store = AppStore::open(MemoryStorage::new(), StorageKeys::default());
        let p = product("1");

        assert_eq!(guard.toggle(&mut store, &p), ToggleOutcome::Added);
        sleep(Duration::from_millis(120));
        assert!(!guard.is_pending(&p.id));
        assert_eq!(guard.toggle(&mut store, &p), ToggleOutcome::Removed);
        assert!(!store.is_in_wishlist(&p.id));
    }

    #[test]
    fn test_toggle_reads_stored_membership_before_hydration() {
        let keys = StorageKeys::default();
        let mut storage = MemoryStorage::new();
        let saved = serde_json::to_string(&[product("1")]).unwrap();
        storage.set_item(&keys.wishlist, &saved).unwrap();

        let guard = WishlistToggle::default();
        let mut store = AppStore::new(storage, keys);
        assert!(store.is_loading());

        assert_eq!(guard.toggle(&mut store, &product("1")), ToggleOutcome::Removed);
        assert!(!store.is_in_wishlist(&ProductId::new("1")));
        assert_eq!(store.wishlist_count(), 0);
    }

    #[test]
    fn test_zero_window_is_raised() {
        let guard = WishlistToggle::new(Duration::ZERO);
        assert_eq!(guard.window(), Duration::from_millis(1));
    }
}
