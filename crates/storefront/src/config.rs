//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STYLEHUB_DATA_DIR` - Directory holding the storage slots (default: .stylehub)
//! - `STYLEHUB_STORAGE_PREFIX` - Storage key prefix (default: stylehub)
//! - `STYLEHUB_WISHLIST_TOGGLE_MS` - Wishlist toggle suppression window (default: 500)
//! - `STYLEHUB_CATALOG_PATH` - Catalog JSON file (default: embedded demo catalog)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::storage::{DEFAULT_PREFIX, StorageKeys};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory for `FileStorage`
    pub data_dir: PathBuf,
    /// Prefix for the cart, wishlist and orders keys
    pub storage_prefix: String,
    /// How long a wishlist toggle blocks another toggle of the same product
    pub wishlist_toggle_window: Duration,
    /// Catalog file; `None` uses the embedded catalog
    pub catalog_path: Option<PathBuf>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "development")
    pub sentry_environment: Option<String>,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("STYLEHUB_DATA_DIR", ".stylehub"));
        let storage_prefix = get_env_or_default("STYLEHUB_STORAGE_PREFIX", DEFAULT_PREFIX);
        validate_prefix(&storage_prefix)?;
        let toggle_ms = get_env_or_default("STYLEHUB_WISHLIST_TOGGLE_MS", "500")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STYLEHUB_WISHLIST_TOGGLE_MS".to_string(), e.to_string())
            })?;

        Ok(Self {
            data_dir,
            storage_prefix,
            wishlist_toggle_window: Duration::from_millis(toggle_ms),
            catalog_path: get_optional_env("STYLEHUB_CATALOG_PATH").map(PathBuf::from),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Storage keys derived from the configured prefix.
    #[must_use]
    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys::with_prefix(&self.storage_prefix)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".stylehub"),
            storage_prefix: DEFAULT_PREFIX.to_string(),
            wishlist_toggle_window: crate::wishlist_toggle::DEFAULT_WINDOW,
            catalog_path: None,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Storage prefixes end up in file names, so keep them to `[A-Za-z0-9_-]`.
fn validate_prefix(prefix: &str) -> Result<(), ConfigError> {
    let valid = prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(ConfigError::InvalidEnvVar(
            "STYLEHUB_STORAGE_PREFIX".to_string(),
            format!("'{prefix}' may only contain letters, digits, '_' and '-'"),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_prefix() {
        assert!(validate_prefix("stylehub").is_ok());
        assert!(validate_prefix("demo-store_2").is_ok());

        let err = validate_prefix("../etc").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
        assert!(validate_prefix("with space").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(".stylehub"));
        assert_eq!(config.wishlist_toggle_window, Duration::from_millis(500));
        assert_eq!(config.storage_keys(), StorageKeys::default());
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_storage_keys_use_prefix() {
        let config = StoreConfig {
            storage_prefix: "demo".to_string(),
            ..StoreConfig::default()
        };
        assert_eq!(config.storage_keys().cart, "demo_cart");
    }
}
