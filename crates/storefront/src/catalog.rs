//! Static product catalog.
//!
//! The catalog is loaded once, either from the JSON fixture compiled into the
//! crate or from a file with the same shape:
//!
//! ```json
//! { "categories": [ { "id": "1", "name": "Fashion", ... } ],
//!   "products":   [ { "id": "1", "name": "Urban Streetwear Hoodie", ... } ] }
//! ```
//!
//! Nothing in the store writes to it.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use stylehub_core::{Category, CategoryId, Product, ProductId};
use thiserror::Error;

/// Demo catalog shipped with the crate.
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// Errors loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// Read-only products and categories. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

#[derive(Debug)]
struct CatalogInner {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// The catalog compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded fixture is invalid.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.products().len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or duplicate product ids.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        for (i, product) in file.products.iter().enumerate() {
            if file.products.iter().skip(i + 1).any(|p| p.id == product.id) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }
        Ok(Self {
            inner: Arc::new(CatalogInner {
                categories: file.categories,
                products: file.products,
            }),
        })
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.inner.products
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.inner.categories
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.inner.products.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.inner.products.iter().find(|p| p.slug == slug)
    }

    /// Look a product up by id, falling back to slug.
    #[must_use]
    pub fn find(&self, id_or_slug: &str) -> Option<&Product> {
        self.product(&ProductId::new(id_or_slug))
            .or_else(|| self.product_by_slug(id_or_slug))
    }

    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.inner.categories.iter().find(|c| &c.id == id)
    }

    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.inner.products.iter().filter(|p| p.is_featured)
    }

    pub fn trending(&self) -> impl Iterator<Item = &Product> {
        self.inner.products.iter().filter(|p| p.is_trending)
    }

    pub fn new_arrivals(&self) -> impl Iterator<Item = &Product> {
        self.inner.products.iter().filter(|p| p.is_new)
    }

    pub fn by_category<'a>(&'a self, category_id: &'a CategoryId) -> impl Iterator<Item = &'a Product> {
        self.inner
            .products
            .iter()
            .filter(move |p| &p.category_id == category_id)
    }

    /// Case-insensitive search over names, descriptions and tags.
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Product> {
        self.inner.products.iter().filter(move |p| p.matches(query))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.products().len(), 15);
        assert_eq!(catalog.categories().len(), 6);
        assert!(catalog.products().iter().all(|p| p.stock > 0));
    }

    #[test]
    fn test_lookup_by_id_and_slug() {
        let catalog = Catalog::embedded().unwrap();
        let hoodie = catalog.product(&ProductId::new("1")).unwrap();
        assert_eq!(hoodie.slug, "urban-streetwear-hoodie");
        assert_eq!(
            catalog.product_by_slug("urban-streetwear-hoodie").unwrap().id,
            hoodie.id
        );
        assert_eq!(catalog.find("urban-streetwear-hoodie").unwrap().id, hoodie.id);
        assert!(catalog.find("no-such-product").is_none());
    }

    #[test]
    fn test_flags_and_categories() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.featured().all(|p| p.is_featured));
        assert!(catalog.trending().count() > 0);
        assert!(catalog.new_arrivals().count() > 0);

        let books = CategoryId::new("6");
        assert_eq!(catalog.category(&books).unwrap().name, "Books");
        assert!(catalog.by_category(&books).all(|p| p.category_id == books));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::embedded().unwrap();
        let hits: Vec<_> = catalog.search("HOODIE").map(|p| p.id.as_str()).collect();
        assert_eq!(hits, vec!["1"]);
        assert!(catalog.search("fitness").count() >= 2);
        assert_eq!(catalog.search("zzz-nothing").count(), 0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = r#"{"products": [
            {"id": "1", "name": "A", "slug": "a", "price": "1.00", "categoryId": "1", "image": "", "stock": 1},
            {"id": "1", "name": "B", "slug": "b", "price": "2.00", "categoryId": "1", "image": "", "stock": 1}
        ]}"#;
        assert!(matches!(
            Catalog::from_json(raw),
            Err(CatalogError::DuplicateProduct(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
