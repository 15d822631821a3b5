//! Product wishlist with set semantics.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::ProductId;

/// Saved products, at most one entry per product id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    /// Create an empty wishlist.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a wishlist from persisted entries, keeping the first of any duplicates.
    #[must_use]
    pub fn from_items(items: Vec<Product>) -> Self {
        let mut wishlist = Self::new();
        for product in items {
            wishlist.insert(product);
        }
        wishlist
    }

    /// Add a snapshot of `product`. Returns `false` if it was already present.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.push(product.clone());
        true
    }

    /// Remove `product_id`. Returns whether an entry was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != product_id);
        self.items.len() != before
    }

    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|item| &item.id == product_id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn insert(&mut self, product: Product) {
        if !self.contains(&product.id) {
            self.items.push(product);
        }
    }
}
