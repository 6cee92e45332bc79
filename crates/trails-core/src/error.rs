//! # Error Types
//!
//! Validation errors for trails-core.
//!
//! ## Why So Few?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The calculators are total functions: catalog lookups degrade to       │
//! │  defaults instead of failing, and the estimator/rounder/cost math      │
//! │  cannot fail on any in-range input. The only fallible surface is the   │
//! │  input boundary, where form strings become counts - that is what      │
//! │  ValidationError covers.                                                │
//! │                                                                         │
//! │  Flow: form field → validation.rs → ValidationError → UI message       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, bounds)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// Raised by the [`crate::validation`] helpers before a form value reaches
/// the calculators. Each variant maps to a user-facing message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "total boxes",
        };
        assert_eq!(err.to_string(), "total boxes cannot be negative");

        let err = ValidationError::OutOfRange {
            field: "case threshold",
            min: 0,
            max: 1000,
        };
        assert_eq!(
            err.to_string(),
            "case threshold must be between 0 and 1000"
        );
    }
}
