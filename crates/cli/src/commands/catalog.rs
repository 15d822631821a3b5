//! Catalog browsing commands.

use std::io::Write;

use stylehub_core::{CategoryId, Product};
use stylehub_storefront::{AppError, AppState, Storage};

use super::write_product_row;

/// Which products `catalog list` shows. Flags combine with AND.
#[derive(Debug, Default)]
pub struct ListFilter {
    pub featured: bool,
    pub trending: bool,
    pub new_arrivals: bool,
    pub category: Option<String>,
}

impl ListFilter {
    fn accepts(&self, product: &Product) -> bool {
        (!self.featured || product.is_featured)
            && (!self.trending || product.is_trending)
            && (!self.new_arrivals || product.is_new)
            && self
                .category
                .as_ref()
                .is_none_or(|c| product.category_id == CategoryId::new(c.as_str()))
    }
}

/// List catalog products.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn list<S: Storage>(
    state: &AppState<S>,
    filter: &ListFilter,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let mut shown = 0_usize;
    for product in state.catalog().products().iter().filter(|p| filter.accepts(p)) {
        write_product_row(out, product)?;
        shown += 1;
    }
    if shown == 0 {
        writeln!(out, "No products match.")?;
    }
    Ok(())
}

/// Show one product in detail.
///
/// # Errors
///
/// Returns [`AppError::ProductNotFound`] for unknown products.
pub fn show<S: Storage>(
    state: &AppState<S>,
    id_or_slug: &str,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let product = state.product(id_or_slug)?;
    let category = state
        .catalog()
        .category(&product.category_id)
        .map_or("uncategorized", |c| c.name.as_str());

    writeln!(out, "{} ({})", product.name, product.slug)?;
    writeln!(out, "  id:       {}", product.id)?;
    writeln!(out, "  price:    {}", product.price)?;
    if let Some(original) = product.original_price.filter(|_| product.is_on_sale()) {
        writeln!(out, "  was:      {original}")?;
    }
    writeln!(out, "  category: {category}")?;
    writeln!(
        out,
        "  rating:   {:.1} ({} reviews)",
        product.rating, product.review_count
    )?;
    writeln!(out, "  stock:    {}", product.stock)?;
    if !product.description.is_empty() {
        writeln!(out, "  {}", product.description)?;
    }
    for feature in &product.features {
        writeln!(out, "  - {feature}")?;
    }
    if !product.tags.is_empty() {
        writeln!(out, "  tags: {}", product.tags.join(", "))?;
    }
    let saved = state.store().is_in_wishlist(&product.id);
    writeln!(out, "  in wishlist: {}", if saved { "yes" } else { "no" })?;
    Ok(())
}

/// Search products by name, description or tag.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn search<S: Storage>(
    state: &AppState<S>,
    query: &str,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let hits: Vec<&Product> = state.catalog().search(query).collect();
    if hits.is_empty() {
        writeln!(out, "No products found for '{query}'.")?;
        return Ok(());
    }
    writeln!(out, "{} result(s) for '{query}':", hits.len())?;
    for product in hits {
        write_product_row(out, product)?;
    }
    Ok(())
}

/// List categories with their product counts.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn categories<S: Storage>(state: &AppState<S>, out: &mut impl Write) -> Result<(), AppError> {
    for category in state.catalog().categories() {
        let count = state.catalog().by_category(&category.id).count();
        writeln!(
            out,
            "{:>3}  {:<12} {:>2} products  {}",
            category.id, category.name, count, category.description
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output, state};

    #[test]
    fn test_list_featured_only() {
        let state = state();
        let mut buf = Vec::new();
        let filter = ListFilter {
            featured: true,
            ..ListFilter::default()
        };
        list(&state, &filter, &mut buf).ok();
        let text = output(buf);
        assert!(text.contains("Urban Streetwear Hoodie"));
        assert!(!text.contains("Classic Denim Jacket"));
    }

    #[test]
    fn test_list_no_match() {
        let state = state();
        let mut buf = Vec::new();
        let filter = ListFilter {
            category: Some("999".to_string()),
            ..ListFilter::default()
        };
        list(&state, &filter, &mut buf).ok();
        assert_eq!(output(buf), "No products match.\n");
    }

    #[test]
    fn test_show_by_slug() {
        let state = state();
        let mut buf = Vec::new();
        show(&state, "classic-denim-jacket", &mut buf).ok();
        let text = output(buf);
        assert!(text.starts_with("Classic Denim Jacket"));
        assert!(text.contains("category: Fashion"));
        assert!(text.contains("in wishlist: no"));
    }

    #[test]
    fn test_show_unknown() {
        let state = state();
        let mut buf = Vec::new();
        assert!(matches!(
            show(&state, "nope", &mut buf),
            Err(AppError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_search() {
        let state = state();
        let mut buf = Vec::new();
        search(&state, "hoodie", &mut buf).ok();
        assert!(output(buf).starts_with("1 result(s) for 'hoodie':"));
    }
}
