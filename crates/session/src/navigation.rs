//! View navigation state machine.
//!
//! Exactly one view is active. Every transition is unconditional, and leaving
//! any view "back" always lands on [`NavigationState::Home`]; there is no
//! history stack.

use serde::{Deserialize, Serialize};

use storefront_catalog::{CategoryName, Product};

/// The currently visible view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NavigationState {
    #[default]
    Home,
    CategoryView {
        category: CategoryName,
    },
    SearchResultsView {
        query: String,
        results: Vec<Product>,
    },
    CartView,
}

/// Tag of a [`NavigationState`], without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Home,
    Category,
    SearchResults,
    Cart,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Home => "home",
            ViewKind::Category => "category",
            ViewKind::SearchResults => "search_results",
            ViewKind::Cart => "cart",
        }
    }
}

impl core::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved navigation step. Searching is done before the transition is
/// built, so applying one never touches the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    SelectCategory(CategoryName),
    ShowSearchResults { query: String, results: Vec<Product> },
    ViewCart,
    BackToHome,
    /// Keep the current view (add-to-cart).
    Stay,
}

impl NavigationState {
    pub fn kind(&self) -> ViewKind {
        match self {
            NavigationState::Home => ViewKind::Home,
            NavigationState::CategoryView { .. } => ViewKind::Category,
            NavigationState::SearchResultsView { .. } => ViewKind::SearchResults,
            NavigationState::CartView => ViewKind::Cart,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, NavigationState::Home)
    }

    /// Apply `transition`, consuming the current state.
    pub fn next(self, transition: Transition) -> Self {
        match transition {
            Transition::SelectCategory(category) => NavigationState::CategoryView { category },
            Transition::ShowSearchResults { query, results } => {
                NavigationState::SearchResultsView { query, results }
            }
            Transition::ViewCart => NavigationState::CartView,
            Transition::BackToHome => NavigationState::Home,
            Transition::Stay => self,
        }
    }
}
