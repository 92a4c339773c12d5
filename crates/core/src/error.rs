//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure a storefront session can report to its caller. Unknown
/// categories are deliberately absent: they resolve to an empty product list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Search was invoked with blank or whitespace-only text.
    #[error("search query is empty")]
    EmptyQuery,

    /// An intent arrived before the catalog was loaded.
    #[error("session is not initialized (catalog not loaded)")]
    NotInitialized,

    /// A value failed validation (e.g. blank product name).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True for errors the caller can recover from by re-initializing the session.
    pub fn requires_initialization(&self) -> bool {
        matches!(self, Self::NotInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(DomainError::EmptyQuery.to_string(), "search query is empty");
        assert_eq!(
            DomainError::validation("name cannot be empty").to_string(),
            "validation failed: name cannot be empty"
        );
    }

    #[test]
    fn only_not_initialized_requires_initialization() {
        assert!(DomainError::NotInitialized.requires_initialization());
        assert!(!DomainError::EmptyQuery.requires_initialization());
        assert!(!DomainError::validation("x").requires_initialization());
    }
}
