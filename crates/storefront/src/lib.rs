//! StyleHub Storefront library.
//!
//! The client store state manager: it owns the cart, wishlist and order
//! collections, persists each one to a keyed storage slot on every change and
//! rehydrates them on startup.
//!
//! # Architecture
//!
//! - [`storage`] - Local-storage style key/value backends (memory, files)
//! - [`store`] - [`AppStore`], the single owner of all three collections
//! - [`wishlist_toggle`] - Debounce-by-identity guard for wishlist toggles
//! - [`catalog`] - Read-only product catalog
//! - [`checkout`] - Address validation and order placement
//! - [`state`] - [`AppState`], the bundle handed to UI collaborators
//! - [`config`], [`error`], [`telemetry`] - Ambient plumbing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
pub mod store;
pub mod telemetry;
pub mod wishlist_toggle;

pub use catalog::Catalog;
pub use config::StoreConfig;
pub use error::AppError;
pub use state::AppState;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageKeys};
pub use store::AppStore;
pub use wishlist_toggle::{ToggleOutcome, WishlistToggle};
