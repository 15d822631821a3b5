//! Shopping cart line items.
//!
//! A [`Cart`] holds at most one [`CartItem`] per product and keeps every
//! quantity within `1..=stock`. Requests past the stock snapshot are clamped,
//! never rejected; the returned [`LineQuantity`] says whether that happened.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// A product snapshot paired with a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    #[serde(rename = "price")]
    pub unit_price: Price,
    pub quantity: u32,
    /// Stock at the time the product was last added.
    pub stock: u32,
    #[serde(default)]
    pub slug: String,
}

impl CartItem {
    /// Snapshot a product into a new line with the given quantity.
    fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            unit_price: product.price,
            quantity,
            stock: product.stock,
            slug: product.slug.clone(),
        }
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// The requested and applied quantity of a line after a cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineQuantity {
    pub requested: u32,
    pub applied: u32,
}

impl LineQuantity {
    /// Whether the request exceeded stock and was reduced.
    #[must_use]
    pub const fn is_clamped(&self) -> bool {
        self.applied < self.requested
    }
}

/// Cart line items in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from persisted lines.
    ///
    /// Duplicate product ids are merged and quantities are re-clamped to
    /// `1..=stock`; lines that end up empty are dropped.
    #[must_use]
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for mut item in items {
            if let Some(existing) = cart.find_mut(&item.product_id) {
                existing.quantity = existing.quantity.saturating_add(item.quantity).min(existing.stock);
                continue;
            }
            item.quantity = item.quantity.min(item.stock);
            if item.quantity > 0 {
                cart.items.push(item);
            }
        }
        cart
    }

    /// Add `quantity` units of `product`.
    ///
    /// An existing line grows to `min(existing + quantity, product.stock)` and
    /// takes the product's current stock as its new snapshot. Otherwise a line
    /// is inserted with `min(quantity, product.stock)`. Adding zero units, or a
    /// product with no stock, leaves the cart untouched and reports the
    /// line's current quantity as applied.
    pub fn add(&mut self, product: &Product, quantity: u32) -> LineQuantity {
        if quantity == 0 || product.stock == 0 {
            let applied = self.get(&product.id).map_or(0, |item| item.quantity);
            return LineQuantity {
                requested: applied.saturating_add(quantity),
                applied,
            };
        }

        if let Some(item) = self.find_mut(&product.id) {
            let requested = item.quantity.saturating_add(quantity);
            item.stock = product.stock;
            item.quantity = requested.min(product.stock);
            return LineQuantity {
                requested,
                applied: item.quantity,
            };
        }

        let applied = quantity.min(product.stock);
        if applied > 0 {
            self.items.push(CartItem::snapshot(product, applied));
        }
        LineQuantity {
            requested: quantity,
            applied,
        }
    }

    /// Remove the line for `product_id`. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.product_id != product_id);
        self.items.len() != before
    }

    /// Set the quantity of an existing line, clamped to its stock snapshot.
    ///
    /// A quantity of zero removes the line. Returns `None` when the line was
    /// removed or never existed.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) -> Option<LineQuantity> {
        if quantity == 0 {
            self.remove(product_id);
            return None;
        }
        let item = self.find_mut(product_id)?;
        item.quantity = quantity.min(item.stock);
        Some(LineQuantity {
            requested: quantity,
            applied: item.quantity,
        })
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |sum, item| sum.saturating_add(item.quantity))
    }

    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.product_id == product_id)
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    fn find_mut(&mut self, product_id: &ProductId) -> Option<&mut CartItem> {
        self.items
            .iter_mut()
            .find(|item| &item.product_id == product_id)
    }
}
