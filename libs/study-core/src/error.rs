//! Error types for study-core.

use thiserror::Error;

/// Result type alias using ValidationError.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors that can occur while validating a study set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a study set needs at least {min} cards, found {found}", min = crate::types::MIN_CARDS)]
    TooFewCards { found: usize },

    #[error("duplicate card ID {id}")]
    DuplicateCardId { id: String },
}
