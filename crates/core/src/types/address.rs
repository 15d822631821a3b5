//! Shipping address type.

use serde::{Deserialize, Serialize};

/// Errors that can occur when validating a [`ShippingAddress`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The recipient name is empty.
    #[error("name is required")]
    MissingName,
    /// The street address is empty.
    #[error("address is required")]
    MissingAddress,
    /// The city is empty.
    #[error("city is required")]
    MissingCity,
    /// The ZIP / postal code is empty.
    #[error("ZIP code is required")]
    MissingZipCode,
}

/// Where an order ships to.
///
/// ## Constraints
///
/// - `name`, `address`, `city` and `zip_code` must be non-blank
/// - `country` is optional and may be empty
///
/// ## Examples
///
/// ```
/// use stylehub_core::ShippingAddress;
///
/// let address = ShippingAddress {
///     name: "Ada Lovelace".into(),
///     address: "12 St James's Square".into(),
///     city: "London".into(),
///     zip_code: "SW1Y 4JH".into(),
///     country: String::new(),
/// };
/// assert!(address.validate().is_ok());
///
/// let blank = ShippingAddress::default();
/// assert!(blank.validate().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub name: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
}

impl ShippingAddress {
    /// Check that every required field is filled in.
    ///
    /// # Errors
    ///
    /// Returns the first missing field, checked in form order
    /// (name, address, city, ZIP code).
    pub fn validate(&self) -> Result<(), AddressError> {
        if self.name.trim().is_empty() {
            return Err(AddressError::MissingName);
        }
        if self.address.trim().is_empty() {
            return Err(AddressError::MissingAddress);
        }
        if self.city.trim().is_empty() {
            return Err(AddressError::MissingCity);
        }
        if self.zip_code.trim().is_empty() {
            return Err(AddressError::MissingZipCode);
        }
        Ok(())
    }
}
