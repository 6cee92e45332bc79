//! # Validation Module
//!
//! Input validation for values arriving from the UI form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, non-numeric)                          │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Range checks on parsed integers                                   │
//! │  └── Converts the signed wire type into the unsigned domain type       │
//! │                                                                         │
//! │  Past this point the calculators never see a negative or absurd        │
//! │  value - their unsigned signatures make it unrepresentable.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use trails_core::validation::validate_total_boxes;
//!
//! let total = validate_total_boxes(120).unwrap();
//! assert_eq!(total, 120u32);
//! assert!(validate_total_boxes(-3).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::MAX_TOTAL_BOXES;

/// Validates an aggregate box total entered in the calculator form.
///
/// ## Rules
/// - Must be non-negative (zero is a legitimate empty booth)
/// - Must not exceed [`MAX_TOTAL_BOXES`]
pub fn validate_total_boxes(total: i64) -> ValidationResult<u32> {
    if total < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "total boxes",
        });
    }

    if total > MAX_TOTAL_BOXES as i64 {
        return Err(ValidationError::OutOfRange {
            field: "total boxes",
            min: 0,
            max: MAX_TOTAL_BOXES as i64,
        });
    }

    Ok(total as u32)
}

/// Validates a single per-variety count from the manual count sheet.
///
/// Same bounds as the aggregate total; one variety can never legitimately
/// hold more boxes than a whole booth may.
pub fn validate_box_count(count: i64) -> ValidationResult<u32> {
    if count < 0 {
        return Err(ValidationError::MustBeNonNegative { field: "box count" });
    }

    if count > MAX_TOTAL_BOXES as i64 {
        return Err(ValidationError::OutOfRange {
            field: "box count",
            min: 0,
            max: MAX_TOTAL_BOXES as i64,
        });
    }

    Ok(count as u32)
}

/// Validates a case-rounding threshold override.
///
/// ## Rules
/// - 0..=1000; zero means "round everything", anything past a thousand is
///   a typo
pub fn validate_case_threshold(threshold: i64) -> ValidationResult<u32> {
    if !(0..=1000).contains(&threshold) {
        return Err(ValidationError::OutOfRange {
            field: "case threshold",
            min: 0,
            max: 1000,
        });
    }

    Ok(threshold as u32)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_total_boxes() {
        assert_eq!(validate_total_boxes(0), Ok(0));
        assert_eq!(validate_total_boxes(120), Ok(120));
        assert_eq!(validate_total_boxes(MAX_TOTAL_BOXES as i64), Ok(MAX_TOTAL_BOXES));

        assert!(validate_total_boxes(-1).is_err());
        assert!(validate_total_boxes(MAX_TOTAL_BOXES as i64 + 1).is_err());
    }

    #[test]
    fn test_validate_box_count() {
        assert_eq!(validate_box_count(0), Ok(0));
        assert_eq!(validate_box_count(57), Ok(57));
        assert!(validate_box_count(-5).is_err());
    }

    #[test]
    fn test_validate_case_threshold() {
        assert_eq!(validate_case_threshold(0), Ok(0));
        assert_eq!(validate_case_threshold(5), Ok(5));
        assert_eq!(validate_case_threshold(1000), Ok(1000));

        assert!(validate_case_threshold(-1).is_err());
        assert!(validate_case_threshold(1001).is_err());
    }
}
