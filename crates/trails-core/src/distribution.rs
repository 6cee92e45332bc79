//! # Distribution Estimator
//!
//! Turns a single aggregate box count into a plausible per-variety
//! breakdown, weighted by each variety's historical popularity.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Booth Calculator                                                       │
//! │                                                                         │
//! │  Operator enters one number: "we have 120 boxes"                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calculate_distribution(120) ← THIS MODULE                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  { TMint: 33, Sam: 25, Tags: 17, Exp: 12, ... }   Σ = 120 exactly      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Fed to the case rounder and/or cost calculator                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Exact-Sum Problem
//! Rounding each share independently almost never lands on the input total:
//! nine round-half-up operations can each drift by up to half a box. The
//! residual is repaid one box at a time by walking the popularity ranking
//! cyclically, so surplus and shortfall land on the most popular varieties
//! first and no count ever goes negative.

use crate::breakdown::Breakdown;
use crate::catalog::{Variety, VARIETY_COUNT};

/// Estimates a per-variety breakdown for `total_boxes`.
///
/// The result covers every catalog variety and its counts sum to
/// `total_boxes` exactly. Deterministic: equal inputs give equal outputs.
///
/// The input is unsigned, so a negative total is unrepresentable rather
/// than undefined.
///
/// ## Algorithm
/// 1. Provisional pass: `round(total × popularity)` per variety
///    (half-away-from-zero, like the ledger spreadsheets the weights came
///    from).
/// 2. Correction loop: walk [`Variety::BY_POPULARITY`] cyclically. A
///    positive residual adds one box per visit; a negative residual removes
///    one box per visit but only from a positive count, skipping zero-count
///    varieties without consuming a residual unit.
///
/// The loop terminates: a positive residual shrinks every visit, and while
/// the residual is negative the counts sum to more than `total_boxes`, so
/// some ranked variety always has a box to give back.
pub fn calculate_distribution(total_boxes: u32) -> Breakdown {
    let ranked = Variety::BY_POPULARITY;

    // Counts indexed by rank, not by variety, so the correction loop is a
    // plain cyclic walk over an array.
    let mut counts = [0u32; VARIETY_COUNT];
    for (slot, variety) in ranked.iter().enumerate() {
        counts[slot] = (total_boxes as f64 * variety.popularity()).round() as u32;
    }

    let provisional: i64 = counts.iter().map(|&c| c as i64).sum();
    let mut diff = total_boxes as i64 - provisional;

    let mut idx = 0usize;
    while diff != 0 {
        let slot = idx % VARIETY_COUNT;
        if diff > 0 {
            counts[slot] += 1;
            diff -= 1;
        } else if counts[slot] > 0 {
            counts[slot] -= 1;
            diff += 1;
        }
        idx += 1;
    }

    ranked.iter().copied().zip(counts).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Exact-sum reconstruction across the whole operating range.
    #[test]
    fn test_distribution_sums_to_input() {
        for total in 0..=1000 {
            let distribution = calculate_distribution(total);
            assert_eq!(
                distribution.total_boxes(),
                total,
                "distribution of {total} boxes must sum to {total}"
            );
        }
    }

    /// More popular varieties never end up with fewer boxes.
    #[test]
    fn test_distribution_respects_popularity_order() {
        for total in 0..=1000 {
            let distribution = calculate_distribution(total);
            for pair in Variety::BY_POPULARITY.windows(2) {
                assert!(
                    distribution.get(pair[0]) >= distribution.get(pair[1]),
                    "at {total} boxes, {:?} should have at least as many as {:?}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn test_distribution_covers_every_variety() {
        let distribution = calculate_distribution(120);
        for variety in Variety::ALL {
            // get() would mask a missing entry as zero, so check the keys.
            assert!(
                distribution.iter().any(|(v, _)| v == variety),
                "{variety:?} missing from distribution"
            );
        }
    }

    #[test]
    fn test_zero_boxes_yields_all_zeros() {
        let distribution = calculate_distribution(0);
        assert_eq!(distribution.len(), VARIETY_COUNT);
        for (variety, count) in distribution.iter() {
            assert_eq!(count, 0, "{variety:?} should be zero for an empty booth");
        }
    }

    #[test]
    fn test_distribution_is_deterministic() {
        for total in [1, 7, 120, 999] {
            assert_eq!(calculate_distribution(total), calculate_distribution(total));
        }
    }

    /// Tiny totals exercise the negative-residual skip path: most
    /// provisional counts are zero, so the loop must cycle past them
    /// without consuming a residual unit and still terminate.
    #[test]
    fn test_tiny_totals_terminate_with_exact_sums() {
        for total in 1..=(VARIETY_COUNT as u32) {
            let distribution = calculate_distribution(total);
            assert_eq!(distribution.total_boxes(), total);
        }
    }

    /// Single box goes to the most popular variety.
    #[test]
    fn test_one_box_goes_to_the_front_runner() {
        let distribution = calculate_distribution(1);
        assert_eq!(distribution.get(Variety::ThinMints), 1);
        assert_eq!(distribution.total_boxes(), 1);
    }

    /// Spot-check a booth-sized total end to end.
    #[test]
    fn test_typical_booth_total() {
        let distribution = calculate_distribution(100);
        assert_eq!(distribution.total_boxes(), 100);
        // Thin Mints holds a 27.8% share; its count must sit near 28.
        let thin_mints = distribution.get(Variety::ThinMints);
        assert!((27..=29).contains(&thin_mints), "got {thin_mints}");
    }
}
