//! Case-insensitive substring search over the catalog.

use storefront_core::{DomainError, DomainResult};

use crate::catalog::Catalog;
use crate::product::Product;

/// A normalized search query: trimmed, lowercased and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    normalized: String,
}

impl SearchQuery {
    /// Normalize raw user input. Blank input is [`DomainError::EmptyQuery`].
    pub fn parse(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        Ok(Self {
            normalized: trimmed.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn matches(&self, product: &Product) -> bool {
        product.name().to_lowercase().contains(&self.normalized)
    }

    /// Matching products in catalog order.
    pub fn run(&self, catalog: &Catalog) -> Vec<Product> {
        catalog
            .products()
            .filter(|product| self.matches(product))
            .cloned()
            .collect()
    }
}

impl core::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// Search the whole catalog for products whose name contains `query`.
///
/// The query is validated before the catalog is touched. Zero matches is an
/// empty vector, not an error.
pub fn search(catalog: &Catalog, query: &str) -> DomainResult<Vec<Product>> {
    let query = SearchQuery::parse(query)?;
    let results = query.run(catalog);
    tracing::debug!(query = %query, matches = results.len(), "catalog searched");
    Ok(results)
}
