//! Read-only catalog records.
//!
//! Products and categories are fixtures: the store snapshots them into cart
//! lines and wishlist entries but never mutates them.

use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, Price, ProductId};

/// A product as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub price: Price,
    /// Pre-discount price, shown struck through when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    pub category_id: CategoryId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// Units available. Cart quantities are clamped to this value.
    pub stock: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_trending: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// Whether the product matches a case-insensitive search term.
    ///
    /// Matches substrings of the name, the description, or any tag.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// Whether the product is currently discounted.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::fixtures::product;
    use super::*;

    #[test]
    fn test_matches_name_description_and_tags() {
        let mut p = product("1", 8999, 25);
        p.name = "Urban Streetwear Hoodie".to_string();
        p.tags = vec!["streetwear".to_string(), "Unisex".to_string()];

        assert!(p.matches("hoodie"));
        assert!(p.matches("STREET"));
        assert!(p.matches("unisex"));
        assert!(p.matches("test product"));
        assert!(!p.matches("sneakers"));
    }

    #[test]
    fn test_is_on_sale() {
        let mut p = product("1", 8999, 25);
        assert!(!p.is_on_sale());
        p.original_price = Some(Price::from_cents(12999));
        assert!(p.is_on_sale());
    }

    #[test]
    fn test_product_json_shape() {
        let json = r#"{
            "id": "3",
            "name": "Minimalist White Sneakers",
            "slug": "minimalist-white-sneakers",
            "price": "149.99",
            "originalPrice": "199.99",
            "categoryId": "1",
            "image": "https://img.example/3.jpg",
            "stock": 42,
            "isFeatured": true
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id.as_str(), "3");
        assert_eq!(p.stock, 42);
        assert!(p.is_featured);
        assert!(!p.is_new);
        assert!(p.tags.is_empty());
    }
}
