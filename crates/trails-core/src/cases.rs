//! # Bulk Case Rounder
//!
//! Rounds per-variety box counts up to shippable cases.
//!
//! ## The Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Per variety:                                                           │
//! │                                                                         │
//! │    boxes >= threshold  →  cases = ceil(boxes / 12)                     │
//! │    boxes <  threshold  →  cases = 0   (not worth a case)               │
//! │                                                                         │
//! │  Examples (threshold 5):  57 → 5   26 → 3   13 → 2   7 → 1   3 → 0    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The threshold keeps the suggestion from ordering a 12-box case to cover a
//! stray 2-box remainder; below it the operator sells from loose stock.

use crate::breakdown::{Breakdown, CaseSuggestion};
use crate::{BOXES_PER_CASE, CASE_THRESHOLD};

/// Suggests case counts for each variety in `boxes`.
///
/// One output entry per input entry. Pure function; any breakdown works,
/// whether it came from the estimator or a hand-entered count.
// CONSIDER: if the box count modulo 12 is beneath the threshold, do we want
// to round down instead of up? For now we always round up once above the
// threshold, i.e. 13 boxes => 2 cases, 17 boxes => 2 cases.
pub fn calculate_cases(boxes: &Breakdown, threshold: u32) -> CaseSuggestion {
    boxes
        .iter()
        .map(|(variety, count)| {
            let cases = if count >= threshold {
                count.div_ceil(BOXES_PER_CASE)
            } else {
                0
            };
            (variety, cases)
        })
        .collect()
}

/// [`calculate_cases`] with the default [`CASE_THRESHOLD`].
pub fn suggest_cases(boxes: &Breakdown) -> CaseSuggestion {
    calculate_cases(boxes, CASE_THRESHOLD)
}

// =============================================================================
// Unit Tests
// =============================================================================
