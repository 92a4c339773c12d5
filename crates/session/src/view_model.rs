use serde::{Deserialize, Serialize};

use storefront_cart::Receipt;
use storefront_catalog::{CategoryName, Product};

use crate::navigation::ViewKind;

/// Everything needed to render the active view, and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewModel {
    Home {
        store_name: String,
        /// Category buttons, in display order.
        categories: Vec<CategoryName>,
        /// Present right after a checkout, until the next intent.
        receipt: Option<Receipt>,
    },
    Category {
        category: CategoryName,
        products: Vec<Product>,
    },
    SearchResults {
        /// Normalized (trimmed, lowercased) query.
        query: String,
        results: Vec<Product>,
    },
    Cart {
        items: Vec<Product>,
    },
}

impl ViewModel {
    pub fn kind(&self) -> ViewKind {
        match self {
            ViewModel::Home { .. } => ViewKind::Home,
            ViewModel::Category { .. } => ViewKind::Category,
            ViewModel::SearchResults { .. } => ViewKind::SearchResults,
            ViewModel::Cart { .. } => ViewKind::Cart,
        }
    }

    /// Heading shown above the view.
    pub fn title(&self) -> String {
        match self {
            ViewModel::Home { store_name, .. } => store_name.clone(),
            ViewModel::Category { category, .. } => format!("Products in {category}"),
            ViewModel::SearchResults { query, .. } => format!("Search Results for \"{query}\""),
            ViewModel::Cart { .. } => "Your Cart".to_string(),
        }
    }

    /// Products listed by the view (empty for Home).
    pub fn products(&self) -> &[Product] {
        match self {
            ViewModel::Home { .. } => &[],
            ViewModel::Category { products, .. } => products,
            ViewModel::SearchResults { results, .. } => results,
            ViewModel::Cart { items } => items,
        }
    }

    /// Table rows as `(name, price)`.
    pub fn rows(&self) -> Vec<(&str, &str)> {
        self.products()
            .iter()
            .map(|p| (p.name(), p.price()))
            .collect()
    }

    /// Message to show instead of an empty table, if any.
    pub fn empty_message(&self) -> Option<String> {
        match self {
            ViewModel::SearchResults { query, results } if results.is_empty() => {
                Some(format!("No products found for: {query}"))
            }
            ViewModel::Category { category, products } if products.is_empty() => {
                Some(format!("No products in {category} yet"))
            }
            ViewModel::Cart { items } if items.is_empty() => Some("Your cart is empty".to_string()),
            _ => None,
        }
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        match self {
            ViewModel::Home { receipt, .. } => receipt.as_ref(),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
