//! # Per-Variety Counts
//!
//! [`Breakdown`] maps varieties to box counts; [`CaseSuggestion`] maps them
//! to case counts. Both are transient values created per call and owned by
//! the caller - nothing here is shared or mutated across calls.
//!
//! ## Where Breakdowns Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Estimator ──► Breakdown ──┬──► total_cost()   ──► Money               │
//! │                            │                                            │
//! │  Count form ──► Breakdown ─┴──► calculate_cases() ──► CaseSuggestion   │
//! │                                                                         │
//! │  The two consumers are independent; either accepts any Breakdown.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing variety reads as a count of zero. Form submissions may carry
//! stale code tokens from a previous season; [`Breakdown::from_form_data`]
//! drops those rather than erroring, matching the catalog's degraded-lookup
//! policy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Variety;
use crate::money::Money;

// =============================================================================
// Breakdown
// =============================================================================

/// Per-variety box counts.
///
/// Backed by a `BTreeMap` so iteration order is deterministic (catalog
/// declaration order, via `Variety`'s derived `Ord`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Breakdown(BTreeMap<Variety, u32>);

impl Breakdown {
    /// Creates an empty breakdown (every variety reads as zero).
    pub fn new() -> Self {
        Breakdown(BTreeMap::new())
    }

    /// Builds a breakdown from `(variety, count)` pairs.
    pub fn from_counts(counts: impl IntoIterator<Item = (Variety, u32)>) -> Self {
        Breakdown(counts.into_iter().collect())
    }

    /// Builds a breakdown from string-keyed form fields.
    ///
    /// Unrecognized code tokens are dropped, so they contribute zero boxes
    /// and zero cost downstream.
    pub fn from_form_data<'a>(fields: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        Breakdown(
            fields
                .into_iter()
                .filter_map(|(code, count)| Variety::from_code(code).map(|v| (v, count)))
                .collect(),
        )
    }

    /// Box count for a variety; missing entries read as zero.
    #[inline]
    pub fn get(&self, variety: Variety) -> u32 {
        self.0.get(&variety).copied().unwrap_or(0)
    }

    /// Sets the box count for a variety.
    #[inline]
    pub fn set(&mut self, variety: Variety, count: u32) {
        self.0.insert(variety, count);
    }

    /// Iterates `(variety, count)` entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Variety, u32)> + '_ {
        self.0.iter().map(|(&variety, &count)| (variety, count))
    }

    /// Number of entries (not the number of boxes).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total boxes across all entries.
    pub fn total_boxes(&self) -> u32 {
        self.0.values().sum()
    }

    /// Total cost across all entries: Σ count × box price.
    ///
    /// Prices are exact cents and counts are integers, so the sum is exact
    /// to the cent with no rounding.
    pub fn total_cost(&self) -> Money {
        self.iter()
            .map(|(variety, count)| variety.unit_cost().multiply_count(count))
            .sum()
    }
}

impl FromIterator<(Variety, u32)> for Breakdown {
    fn from_iter<I: IntoIterator<Item = (Variety, u32)>>(iter: I) -> Self {
        Breakdown(iter.into_iter().collect())
    }
}

// =============================================================================
// Case Suggestion
// =============================================================================

/// Per-variety suggested case counts, derived from a [`Breakdown`] by the
/// bulk rounder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaseSuggestion(BTreeMap<Variety, u32>);

impl CaseSuggestion {
    /// Case count for a variety; missing entries read as zero.
    #[inline]
    pub fn get(&self, variety: Variety) -> u32 {
        self.0.get(&variety).copied().unwrap_or(0)
    }

    /// Iterates `(variety, cases)` entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Variety, u32)> + '_ {
        self.0.iter().map(|(&variety, &cases)| (variety, cases))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total cases across all entries.
    pub fn total_cases(&self) -> u32 {
        self.0.values().sum()
    }
}

impl FromIterator<(Variety, u32)> for CaseSuggestion {
    fn from_iter<I: IntoIterator<Item = (Variety, u32)>>(iter: I) -> Self {
        CaseSuggestion(iter.into_iter().collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
