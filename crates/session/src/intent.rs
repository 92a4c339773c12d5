use serde::{Deserialize, Serialize};

use storefront_catalog::{CategoryName, Product};

/// A user action submitted to a [`Session`](crate::Session).
///
/// `AddToCart` carries the product value itself; the presentation layer binds
/// it to the row that was rendered, so the session never looks rows up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    SelectCategory { category: CategoryName },
    RunSearch { query: String },
    AddToCart { product: Product },
    ViewCart,
    /// Also used for "Back to Shopping" from the cart.
    BackToHome,
    Checkout,
}

impl Intent {
    pub fn select_category(category: impl Into<CategoryName>) -> Self {
        Intent::SelectCategory {
            category: category.into(),
        }
    }

    pub fn run_search(query: impl Into<String>) -> Self {
        Intent::RunSearch {
            query: query.into(),
        }
    }

    pub fn add_to_cart(product: Product) -> Self {
        Intent::AddToCart { product }
    }

    /// Stable name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SelectCategory { .. } => "select_category",
            Intent::RunSearch { .. } => "run_search",
            Intent::AddToCart { .. } => "add_to_cart",
            Intent::ViewCart => "view_cart",
            Intent::BackToHome => "back_to_home",
            Intent::Checkout => "checkout",
        }
    }
}
