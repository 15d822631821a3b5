//! Application state handed to UI collaborators.
//!
//! [`AppState`] is the injectable service that replaces an ambient global
//! store: it owns the configuration, the catalog, the [`AppStore`] and the
//! wishlist toggle guard. Construct it on startup, pass it by reference to
//! whatever renders or mutates state, and [`close`](AppState::close) it at the
//! end of the session.

use stylehub_core::{LineQuantity, Product, ShippingAddress};

use crate::catalog::Catalog;
use crate::checkout::{self, Receipt};
use crate::config::StoreConfig;
use crate::error::{AppError, Result};
use crate::storage::{FileStorage, Storage};
use crate::store::AppStore;
use crate::wishlist_toggle::{ToggleOutcome, WishlistToggle};

/// Everything a storefront session needs.
#[derive(Debug)]
pub struct AppState<S: Storage = FileStorage> {
    config: StoreConfig,
    catalog: Catalog,
    store: AppStore<S>,
    wishlist_toggle: WishlistToggle,
}

impl AppState<FileStorage> {
    /// Open the configured catalog and file-backed store, then hydrate.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or the data directory
    /// cannot be created.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::embedded()?,
        };
        let storage = FileStorage::open(&config.data_dir)?;
        tracing::debug!(data_dir = %config.data_dir.display(), "Opened file storage");
        Ok(Self::with_storage(config, catalog, storage))
    }
}

impl<S: Storage> AppState<S> {
    /// Build state over an arbitrary storage backend and hydrate the store.
    pub fn with_storage(config: StoreConfig, catalog: Catalog, storage: S) -> Self {
        let store = AppStore::open(storage, config.storage_keys());
        let wishlist_toggle = WishlistToggle::new(config.wishlist_toggle_window);
        Self {
            config,
            catalog,
            store,
            wishlist_toggle,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn store(&self) -> &AppStore<S> {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut AppStore<S> {
        &mut self.store
    }

    /// Look up a catalog product by id or slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ProductNotFound`] if nothing matches.
    pub fn product(&self, id_or_slug: &str) -> Result<&Product> {
        self.catalog
            .find(id_or_slug)
            .ok_or_else(|| AppError::ProductNotFound(id_or_slug.to_string()))
    }

    /// Add a catalog product to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ProductNotFound`] for unknown products.
    pub fn add_to_cart(&mut self, id_or_slug: &str, quantity: u32) -> Result<LineQuantity> {
        let product = self
            .catalog
            .find(id_or_slug)
            .ok_or_else(|| AppError::ProductNotFound(id_or_slug.to_string()))?;
        Ok(self.store.add_to_cart(product, quantity))
    }

    /// Add a catalog product to the wishlist. Returns `false` if already saved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ProductNotFound`] for unknown products.
    pub fn add_to_wishlist(&mut self, id_or_slug: &str) -> Result<bool> {
        let product = self
            .catalog
            .find(id_or_slug)
            .ok_or_else(|| AppError::ProductNotFound(id_or_slug.to_string()))?;
        Ok(self.store.add_to_wishlist(product))
    }

    /// Toggle a catalog product's wishlist membership through the guard.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ProductNotFound`] for unknown products.
    pub fn toggle_wishlist(&mut self, id_or_slug: &str) -> Result<ToggleOutcome> {
        let product = self
            .catalog
            .find(id_or_slug)
            .ok_or_else(|| AppError::ProductNotFound(id_or_slug.to_string()))?;
        Ok(self.wishlist_toggle.toggle(&mut self.store, product))
    }

    /// Place an order for the current cart.
    ///
    /// # Errors
    ///
    /// See [`checkout::place_order`].
    pub fn checkout(&mut self, address: ShippingAddress) -> Result<Receipt> {
        checkout::place_order(&mut self.store, address)
    }

    /// End the session: flush the store and return its storage.
    pub fn close(self) -> S {
        self.store.close()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn state() -> AppState<MemoryStorage> {
        AppState::with_storage(
            StoreConfig::default(),
            Catalog::embedded().unwrap(),
            MemoryStorage::new(),
        )
    }

    #[test]
    fn test_add_by_slug_and_id() {
        let mut state = state();
        state.add_to_cart("1", 1).unwrap();
        state.add_to_cart("urban-streetwear-hoodie", 2).unwrap();
        assert_eq!(state.store().cart_count(), 3);
        assert_eq!(state.store().cart_items().len(), 1);
    }

    #[test]
    fn test_unknown_product() {
        let mut state = state();
        let err = state.add_to_cart("nope", 1).unwrap_err();
        assert!(matches!(err, AppError::ProductNotFound(_)));
        assert!(state.toggle_wishlist("nope").is_err());
    }

    #[test]
    fn test_toggle_through_state() {
        let mut state = state();
        assert_eq!(state.toggle_wishlist("2").unwrap(), ToggleOutcome::Added);
        assert_eq!(state.toggle_wishlist("2").unwrap(), ToggleOutcome::Suppressed);
        assert_eq!(state.store().wishlist_count(), 1);
    }

    #[test]
    fn test_open_with_file_storage() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig {
            data_dir: dir.path().to_path_buf(),
            ..StoreConfig::default()
        };

        let mut state = AppState::open(config.clone()).unwrap();
        state.add_to_wishlist("3").unwrap();
        drop(state.close());

        let reopened = AppState::open(config).unwrap();
        assert_eq!(reopened.store().wishlist_count(), 1);
        assert!(!reopened.store().is_loading());
    }
}
