//! Placed orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::types::{OrderId, OrderStatus, Price, ShippingAddress};

/// An order snapshot taken at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartItem>,
    /// Sum of `unit_price * quantity` over `items` at placement time.
    pub total: Price,
    #[serde(rename = "date")]
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub shipping_address: ShippingAddress,
}

impl Order {
    /// Snapshot `items` into a new completed order with a fresh id.
    #[must_use]
    pub fn place(items: &[CartItem], shipping_address: ShippingAddress, placed_at: DateTime<Utc>) -> Self {
        Self {
            id: OrderId::generate(),
            items: items.to_vec(),
            total: items.iter().map(CartItem::line_total).sum(),
            placed_at,
            status: OrderStatus::Completed,
            shipping_address,
        }
    }

    /// Total number of units in the order.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |sum, item| sum.saturating_add(item.quantity))
    }
}

/// Orders, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self { orders: Vec::new() }
    }

    #[must_use]
    pub const fn from_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Insert `order` at the front.
    pub fn prepend(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    #[must_use]
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == id)
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Order> {
        self.orders.first()
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
