//! The client store state manager.
//!
//! [`AppStore`] is the only owner of the cart, wishlist and order collections.
//! Every mutation updates the in-memory collection and then synchronously
//! writes the whole collection to its storage slot. Nothing here returns a
//! storage error to the caller: failed reads fall back to empty collections and
//! failed writes are logged, leaving memory authoritative.
//!
//! # Lifecycle
//!
//! 1. [`AppStore::new`] - empty collections, `is_loading() == true`
//! 2. [`AppStore::hydrate`] - read all three slots, `is_loading() == false`
//! 3. mutations and reads
//! 4. [`AppStore::close`] - flush every slot and hand the storage back
//!
//! [`AppStore::open`] combines steps 1 and 2. A mutation on a store that has
//! not hydrated yet hydrates first, so empty defaults never overwrite stored data.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use stylehub_core::{
    Cart, CartItem, LineQuantity, Order, OrderHistory, Price, Product, ProductId,
    ShippingAddress, Wishlist,
};
use tracing::{debug, instrument};

use crate::error::add_breadcrumb;
use crate::storage::{Storage, StorageError, StorageKeys};

/// Cart, wishlist and orders backed by a [`Storage`].
#[derive(Debug)]
pub struct AppStore<S: Storage> {
    storage: S,
    keys: StorageKeys,
    cart: Cart,
    wishlist: Wishlist,
    orders: OrderHistory,
    is_loading: bool,
}

impl<S: Storage> AppStore<S> {
    /// Create a store that has not read its storage yet.
    pub fn new(storage: S, keys: StorageKeys) -> Self {
        Self {
            storage,
            keys,
            cart: Cart::new(),
            wishlist: Wishlist::new(),
            orders: OrderHistory::new(),
            is_loading: true,
        }
    }

    /// Create a store and hydrate it from `storage`.
    pub fn open(storage: S, keys: StorageKeys) -> Self {
        let mut store = Self::new(storage, keys);
        store.hydrate();
        store
    }

    /// Load all three collections from storage.
    ///
    /// Missing or malformed slots become empty collections. Calling this again
    /// after the first hydration does nothing.
    #[instrument(skip_all)]
    pub fn hydrate(&mut self) {
        if !self.is_loading {
            return;
        }

        let cart: Option<Vec<CartItem>> = self.load_slot(&self.keys.cart);
        let wishlist: Option<Vec<Product>> = self.load_slot(&self.keys.wishlist);
        let orders: Option<Vec<Order>> = self.load_slot(&self.keys.orders);

        self.cart = Cart::from_items(cart.unwrap_or_default());
        self.wishlist = Wishlist::from_items(wishlist.unwrap_or_default());
        self.orders = OrderHistory::from_orders(orders.unwrap_or_default());
        self.is_loading = false;

        debug!(
            cart_lines = self.cart.len(),
            wishlist = self.wishlist.len(),
            orders = self.orders.len(),
            "Store hydrated"
        );
    }

    /// True until the first hydration has completed.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Write every collection and return the storage.
    ///
    /// A store that never hydrated writes nothing.
    pub fn close(mut self) -> S {
        if !self.is_loading {
            Self::persist(&mut self.storage, &self.keys.cart, &self.cart);
            Self::persist(&mut self.storage, &self.keys.wishlist, &self.wishlist);
            Self::persist(&mut self.storage, &self.keys.orders, &self.orders);
        }
        self.storage
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub const fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    // =========================================================================
    // Cart
    // =========================================================================

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn cart_items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Add `quantity` units of `product`, clamped to its stock.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) -> LineQuantity {
        let result = self.mutate_cart(|cart| cart.add(product, quantity));
        debug!(
            product_id = %product.id,
            requested = result.requested,
            applied = result.applied,
            "Added to cart"
        );
        add_breadcrumb("cart", "Added to cart", Some(&[("product_id", product.id.as_str())]));
        result
    }

    /// Remove a line. Absent ids are ignored.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        if self.mutate_cart(|cart| cart.remove(product_id)) {
            debug!(%product_id, "Removed from cart");
            add_breadcrumb("cart", "Removed from cart", Some(&[("product_id", product_id.as_str())]));
        }
    }

    /// Set a line's quantity; zero removes it.
    pub fn update_cart_quantity(&mut self, product_id: &ProductId, quantity: u32) -> Option<LineQuantity> {
        let result = self.mutate_cart(|cart| cart.set_quantity(product_id, quantity));
        debug!(%product_id, quantity, applied = ?result.map(|q| q.applied), "Updated cart quantity");
        result
    }

    pub fn clear_cart(&mut self) {
        self.mutate_cart(Cart::clear);
    }

    /// Sum of `unit_price * quantity` over the cart.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.cart.total()
    }

    /// Total units in the cart.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    #[must_use]
    pub fn wishlist_items(&self) -> &[Product] {
        self.wishlist.items()
    }

    /// Save `product`. Returns `false` if it was already saved.
    pub fn add_to_wishlist(&mut self, product: &Product) -> bool {
        let added = self.mutate_wishlist(|wishlist| wishlist.add(product));
        if added {
            debug!(product_id = %product.id, "Added to wishlist");
            add_breadcrumb("wishlist", "Added to wishlist", Some(&[("product_id", product.id.as_str())]));
        }
        added
    }

    /// Unsave `product_id`. Returns whether it was saved.
    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) -> bool {
        let removed = self.mutate_wishlist(|wishlist| wishlist.remove(product_id));
        if removed {
            debug!(%product_id, "Removed from wishlist");
            add_breadcrumb("wishlist", "Removed from wishlist", Some(&[("product_id", product_id.as_str())]));
        }
        removed
    }

    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    pub fn clear_wishlist(&mut self) {
        self.mutate_wishlist(Wishlist::clear);
    }

    #[must_use]
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Orders, most recent first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        self.orders.orders()
    }

    /// Place an order for `items`, then clear the cart.
    pub fn create_order(&mut self, items: &[CartItem], shipping_address: ShippingAddress) -> Order {
        self.create_order_at(items, shipping_address, Utc::now())
    }

    /// [`create_order`](Self::create_order) with an explicit timestamp.
    pub fn create_order_at(
        &mut self,
        items: &[CartItem],
        shipping_address: ShippingAddress,
        placed_at: DateTime<Utc>,
    ) -> Order {
        self.hydrate();
        let order = Order::place(items, shipping_address, placed_at);
        self.orders.prepend(order.clone());
        Self::persist(&mut self.storage, &self.keys.orders, &self.orders);
        self.clear_cart();

        tracing::info!(order_id = %order.id, total = %order.total, "Order created");
        add_breadcrumb("checkout", "Order created", Some(&[("order_id", order.id.as_str())]));
        order
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn mutate_cart<R>(&mut self, f: impl FnOnce(&mut Cart) -> R) -> R {
        self.hydrate();
        let before = self.cart.clone();
        let result = f(&mut self.cart);
        if self.cart != before {
            Self::persist(&mut self.storage, &self.keys.cart, &self.cart);
        }
        result
    }

    fn mutate_wishlist<R>(&mut self, f: impl FnOnce(&mut Wishlist) -> R) -> R {
        self.hydrate();
        let before = self.wishlist.len();
        let result = f(&mut self.wishlist);
        if self.wishlist.len() != before {
            Self::persist(&mut self.storage, &self.keys.wishlist, &self.wishlist);
        }
        result
    }

    /// Read and decode one slot, logging anything unusable.
    fn load_slot<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read stored collection");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding malformed stored collection");
                None
            }
        }
    }

    /// Encode `value` and overwrite its slot. Failures are logged and reported.
    fn persist<T: Serialize>(storage: &mut S, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|json| storage.set_item(key, &json));

        if let Err(e) = result {
            let event_id = sentry::capture_error(&e);
            tracing::error!(
                key,
                error = %e,
                sentry_event_id = %event_id,
                "Failed to persist collection"
            );
        }
    }
}
