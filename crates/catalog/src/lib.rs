//! Catalog domain module.
//!
//! The catalog is loaded once and then only read: categories map to ordered
//! product lists, and search walks them in that same order. No IO, no storage.

pub mod catalog;
pub mod product;
pub mod search;

pub use catalog::{Catalog, CatalogBuilder};
pub use product::{CategoryName, Product};
pub use search::{SearchQuery, search};
