//! Error types for the form engine.
//!
//! Validation failures are values ([`crate::ValidationResult`]), never
//! errors; the only fallible operation is building a custom rule from a
//! user-supplied pattern.

use thiserror::Error;

/// Form engine errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A custom rule pattern failed to compile.
    #[error("invalid validation pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type alias for form engine operations.
pub type Result<T> = std::result::Result<T, FormError>;
