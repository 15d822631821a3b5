//! Command implementations.
//!
//! Each command writes human-readable output to the given writer so the
//! binary can pass stdout and tests can pass a buffer.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod wishlist;

use std::io::{self, Write};

use stylehub_core::{CartItem, Product};

/// One catalog row: id, name, price and stock.
fn write_product_row(out: &mut impl Write, product: &Product) -> io::Result<()> {
    let sale = product
        .original_price
        .filter(|_| product.is_on_sale())
        .map(|original| format!(" (was {original})"))
        .unwrap_or_default();
    let price = product.price.to_string();
    writeln!(
        out,
        "{:>3}  {:<32} {price:>9}{sale}  stock {}",
        product.id, product.name, product.stock
    )
}

/// One cart or order line: quantity, name, unit and line prices.
fn write_line_item(out: &mut impl Write, item: &CartItem) -> io::Result<()> {
    let unit = item.unit_price.to_string();
    let line = item.line_total().to_string();
    writeln!(
        out,
        "{:>3} x {:<32} @ {unit:>9} = {line:>10}",
        item.quantity, item.name
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use stylehub_storefront::{AppState, Catalog, MemoryStorage, StoreConfig};

    pub fn state() -> AppState<MemoryStorage> {
        AppState::with_storage(
            StoreConfig::default(),
            Catalog::embedded().unwrap(),
            MemoryStorage::new(),
        )
    }

    pub fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }
}
