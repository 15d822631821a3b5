//! Integration tests for StyleHub.
//!
//! These tests drive the store through real [`FileStorage`] in a temporary
//! directory, reopening it to check what survives a restart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stylehub-integration-tests
//! ```

use std::path::Path;
use std::time::Duration;

use stylehub_storefront::{AppState, Catalog, FileStorage, StoreConfig};
use tempfile::TempDir;

/// A data directory that lives as long as the context.
pub struct TestContext {
    dir: TempDir,
    pub config: StoreConfig,
}

impl TestContext {
    /// Fresh empty data directory with the default prefix.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = StoreConfig {
            data_dir: dir.path().to_path_buf(),
            wishlist_toggle_window: Duration::from_millis(50),
            ..StoreConfig::default()
        };
        Self { dir, config }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Open a session over the data directory.
    ///
    /// # Panics
    ///
    /// Panics if the state cannot be opened.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn open(&self) -> AppState<FileStorage> {
        AppState::open(self.config.clone()).expect("Failed to open state")
    }

    /// Raw contents of a storage slot, if written.
    #[must_use]
    pub fn slot(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path().join(format!("{key}.json"))).ok()
    }

    /// Write raw contents into a storage slot.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[allow(clippy::expect_used)]
    pub fn write_slot(&self, key: &str, contents: &str) {
        std::fs::write(self.path().join(format!("{key}.json")), contents)
            .expect("Failed to write slot");
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded demo catalog.
///
/// # Panics
///
/// Panics if the embedded catalog is malformed.
#[must_use]
#[allow(clippy::expect_used)]
pub fn catalog() -> Catalog {
    Catalog::embedded().expect("Embedded catalog should parse")
}
