//! StyleHub Core - Shared types library.
//!
//! This crate provides the domain types and invariants used by every StyleHub
//! component:
//! - `storefront` - Client store state manager (storage, hydration, checkout)
//! - `cli` - Command-line driver over a file-backed store
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no storage
//! access, no logging. Every collection here is a plain value that the
//! storefront's `AppStore` owns and persists.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, statuses and addresses
//! - [`catalog`] - Read-only product and category records
//! - [`cart`] - Cart line items with stock clamping
//! - [`wishlist`] - Set-semantics product wishlist
//! - [`order`] - Placed orders, most recent first
//! - [`checkout`] - Shipping and tax summary for a cart subtotal

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod order;
pub mod types;
pub mod wishlist;

pub use cart::{Cart, CartItem, LineQuantity};
pub use catalog::{Category, Product};
pub use checkout::CheckoutSummary;
pub use order::{Order, OrderHistory};
pub use types::*;
pub use wishlist::Wishlist;
