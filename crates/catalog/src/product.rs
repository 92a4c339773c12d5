use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ValueObject};

/// A product offered by the storefront.
///
/// `price` is an opaque, pre-formatted label (e.g. `"₹499"`); the storefront
/// never does arithmetic on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: String,
}

impl Product {
    /// Build a product from trusted data (seed catalog, tests).
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }

    /// Build a product from untrusted input, rejecting blank fields.
    pub fn try_new(name: impl Into<String>, price: impl Into<String>) -> DomainResult<Self> {
        let product = Self::new(name, price);
        if product.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if product.price.trim().is_empty() {
            return Err(DomainError::validation("product price cannot be empty"));
        }
        Ok(product)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }
}

impl ValueObject for Product {}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.name, self.price)
    }
}

/// Name of a catalog category (e.g. `"Home & Garden"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Build a category name from untrusted input, rejecting blank names.
    pub fn try_new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("category name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for CategoryName {}

impl core::fmt::Display for CategoryName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CategoryName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_are_equal_by_value() {
        assert_eq!(Product::new("T-Shirt", "₹499"), Product::new("T-Shirt", "₹499"));
        assert_ne!(Product::new("T-Shirt", "₹499"), Product::new("T-Shirt", "₹599"));
    }

    #[test]
    fn try_new_rejects_blank_name() {
        let err = Product::try_new("   ", "₹10").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn try_new_rejects_blank_price() {
        let err = Product::try_new("Mug", "").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn display_shows_name_and_price() {
        assert_eq!(Product::new("Football", "₹999").to_string(), "Football ₹999");
    }

    #[test]
    fn category_name_rejects_blank() {
        assert!(CategoryName::try_new(" ").is_err());
        assert_eq!(CategoryName::try_new("Sports").unwrap().as_str(), "Sports");
    }
}
