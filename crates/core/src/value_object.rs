//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two products with
/// the same name and price are the same product as far as the storefront is
/// concerned, and adding "the same" product twice yields two equal cart lines.
///
/// To "modify" a value object, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Label(String);
///
/// impl ValueObject for Label {}
///
/// assert_eq!(Label("a".into()), Label("a".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
