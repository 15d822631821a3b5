//! Core types for StyleHub.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod id;
pub mod price;
pub mod status;

pub use address::{AddressError, ShippingAddress};
pub use id::*;
pub use price::Price;
pub use status::*;
