use crate::product::{CategoryName, Product};

/// Seed data: categories in insertion order, products in insertion order.
const SEED: &[(&str, &[(&str, &str)])] = &[
    ("Electronics", &[("Smartphone", "₹14999"), ("Headphones", "₹2999")]),
    ("Clothing", &[("T-Shirt", "₹499"), ("Jacket", "₹1999")]),
    ("Home & Garden", &[("Coffee Mug", "₹299"), ("Garden Tools", "₹899")]),
    ("Sports", &[("Football", "₹999"), ("Tennis Racket", "₹1599")]),
];

/// Read-only mapping from category to its ordered products.
///
/// Iteration order is insertion order, both across categories and within a
/// category. Search results depend on it, so it must stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<(CategoryName, Vec<Product>)>,
}

impl Catalog {
    /// Load the fixed storefront catalog.
    pub fn load() -> Self {
        let catalog = SEED
            .iter()
            .fold(Self::builder(), |builder, (category, products)| {
                builder.category(
                    *category,
                    products.iter().map(|(name, price)| Product::new(*name, *price)),
                )
            })
            .build();

        tracing::debug!(
            categories = catalog.category_count(),
            products = catalog.product_count(),
            "catalog loaded"
        );
        catalog
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Products of `category` in insertion order; empty for unknown categories.
    pub fn products_for(&self, category: &str) -> &[Product] {
        self.categories
            .iter()
            .find(|(name, _)| name.as_str() == category)
            .map(|(_, products)| products.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.iter().any(|(name, _)| name.as_str() == category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &CategoryName> {
        self.categories.iter().map(|(name, _)| name)
    }

    /// Every `(category, products)` pair in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryName, &[Product])> {
        self.categories
            .iter()
            .map(|(name, products)| (name, products.as_slice()))
    }

    /// Every product in catalog order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.categories.iter().flat_map(|(_, products)| products.iter())
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn product_count(&self) -> usize {
        self.categories.iter().map(|(_, products)| products.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Builds a [`Catalog`] with map-assignment semantics.
///
/// Seeding a category twice replaces its products; the category keeps the
/// position of its first insertion.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    categories: Vec<(CategoryName, Vec<Product>)>,
}

impl CatalogBuilder {
    pub fn category(
        mut self,
        name: impl Into<CategoryName>,
        products: impl IntoIterator<Item = Product>,
    ) -> Self {
        let name = name.into();
        let products: Vec<Product> = products.into_iter().collect();

        match self.categories.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => {
                tracing::debug!(category = %name, "category re-seeded; replacing products");
                *slot = products;
            }
            None => self.categories.push((name, products)),
        }
        self
    }

    pub fn build(self) -> Catalog {
        Catalog {
            categories: self.categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(Product::name).collect()
    }

    #[test]
    fn load_seeds_four_categories_in_order() {
        let catalog = Catalog::load();
        let categories: Vec<&str> = catalog.categories().map(CategoryName::as_str).collect();

        assert_eq!(categories, vec!["Electronics", "Clothing", "Home & Garden", "Sports"]);
        assert_eq!(catalog.product_count(), 8);
    }

    #[test]
    fn products_for_returns_seeded_sequence() {
        let catalog = Catalog::load();

        assert_eq!(
            catalog.products_for("Sports"),
            &[Product::new("Football", "₹999"), Product::new("Tennis Racket", "₹1599")]
        );
        assert_eq!(names(catalog.products_for("Electronics")), vec!["Smartphone", "Headphones"]);
        assert_eq!(names(catalog.products_for("Clothing")), vec!["T-Shirt", "Jacket"]);
        assert_eq!(
            names(catalog.products_for("Home & Garden")),
            vec!["Coffee Mug", "Garden Tools"]
        );
    }

    #[test]
    fn unknown_category_resolves_to_empty() {
        let catalog = Catalog::load();
        assert!(catalog.products_for("Toys").is_empty());
        assert!(catalog.products_for("sports").is_empty());
        assert!(!catalog.contains_category("Toys"));
    }

    #[test]
    fn load_is_deterministic() {
        assert_eq!(Catalog::load(), Catalog::load());
    }

    #[test]
    fn reseeding_overwrites_but_keeps_position() {
        let catalog = Catalog::builder()
            .category("A", [Product::new("a1", "1")])
            .category("B", [Product::new("b1", "2")])
            .category("A", [Product::new("a2", "3"), Product::new("a3", "4")])
            .build();

        let categories: Vec<&str> = catalog.categories().map(CategoryName::as_str).collect();
        assert_eq!(categories, vec!["A", "B"]);
        assert_eq!(names(catalog.products_for("A")), vec!["a2", "a3"]);
    }

    #[test]
    fn products_iterates_in_catalog_order() {
        let catalog = Catalog::load();
        let all: Vec<&str> = catalog.products().map(Product::name).collect();
        assert_eq!(
            all,
            vec![
                "Smartphone",
                "Headphones",
                "T-Shirt",
                "Jacket",
                "Coffee Mug",
                "Garden Tools",
                "Football",
                "Tennis Racket",
            ]
        );
    }

    #[test]
    fn catalog_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
