//! Key/value storage backends.
//!
//! The store persists each collection as a JSON string under its own key,
//! the same contract as a browser's local storage: string keys, string values,
//! whole-value overwrites.
//!
//! # Backends
//!
//! - [`MemoryStorage`] - `HashMap`-backed, for tests and throwaway sessions
//! - [`FileStorage`] - one `<key>.json` file per slot under a data directory

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing a slot failed.
    #[error("storage I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The key contains characters the backend cannot store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// A collection could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A local-storage style key/value store.
pub trait Storage {
    /// Read the value stored under `key`, or `None` if the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Empty the slot under `key`. Removing an empty slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Default key prefix.
pub const DEFAULT_PREFIX: &str = "stylehub";

/// The three slot names the store writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub cart: String,
    pub wishlist: String,
    pub orders: String,
}

impl StorageKeys {
    /// Keys of the form `<prefix>_cart`, `<prefix>_wishlist`, `<prefix>_orders`.
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            cart: format!("{prefix}_cart"),
            wishlist: format!("{prefix}_wishlist"),
            orders: format!("{prefix}_orders"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }
}
