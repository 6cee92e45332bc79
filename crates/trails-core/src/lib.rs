//! # trails-core: Pure Business Logic for Cookie Trails
//!
//! This crate is the **heart** of Cookie Trails, a booth inventory helper
//! for a troop's cookie season. It contains all business logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Cookie Trails Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Frontend (forms)                           │   │
//! │  │    Calculator form ──► Count sheet ──► Cases report            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ IPC (string codes, integer counts)     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ trails-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────┐ ┌────────────┐ ┌──────────────┐ ┌────────────┐  │   │
//! │  │  │ catalog  │ │ breakdown  │ │ distribution │ │   cases    │  │   │
//! │  │  │ Variety  │ │ Breakdown  │ │  estimator   │ │  rounder   │  │   │
//! │  │  │ weights  │ │ cost math  │ │  correction  │ │  ceil ÷ 12 │  │   │
//! │  │  └──────────┘ └────────────┘ └──────────────┘ └────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The fixed variety catalog (codes, labels, prices, colors,
//!   popularity weights) and its degraded string-keyed lookups
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`breakdown`] - Per-variety box counts and their cost total
//! - [`distribution`] - The popularity-weighted estimator with exact-sum
//!   correction
//! - [`cases`] - Bulk case rounding
//! - [`validation`] - Range checks at the form boundary
//! - [`error`] - Validation error type
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input =
//!    same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64), so cost
//!    totals are exact with no rounding
//! 4. **Catalog is Const**: The lineup is compile-time data; every call is
//!    safe from any thread with no locking
//!
//! ## Example Usage
//!
//! ```rust
//! use trails_core::cases::suggest_cases;
//! use trails_core::distribution::calculate_distribution;
//!
//! // One aggregate total in, a per-variety estimate out.
//! let breakdown = calculate_distribution(120);
//! assert_eq!(breakdown.total_boxes(), 120);
//!
//! // Round the estimate into shippable cases.
//! let cases = suggest_cases(&breakdown);
//!
//! // Or price it.
//! let total = breakdown.total_cost();
//! assert!(total.cents() > 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod breakdown;
pub mod cases;
pub mod catalog;
pub mod distribution;
pub mod error;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use trails_core::Variety` instead of
// `use trails_core::catalog::Variety`

pub use breakdown::{Breakdown, CaseSuggestion};
pub use cases::{calculate_cases, suggest_cases};
pub use catalog::Variety;
pub use distribution::calculate_distribution;
pub use error::{ValidationError, ValidationResult};
pub use money::Money;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Boxes in one shipping case.
///
/// ## Business Reason
/// The bakery ships cases of 12; the council does not split cases, so the
/// rounder always suggests whole cases.
pub const BOXES_PER_CASE: u32 = 12;

/// Default minimum box count before a case is worth ordering.
///
/// ## Business Reason
/// Below this, a variety is cheaper to cover from loose stock than to park
/// a mostly-empty case at the booth. Overridable per call.
pub const CASE_THRESHOLD: u32 = 5;

/// Maximum aggregate box total accepted from the calculator form.
///
/// ## Business Reason
/// Catches fat-fingered entries (e.g. a scanned barcode landing in the
/// total field). The largest troop order on record is two orders of
/// magnitude below this.
pub const MAX_TOTAL_BOXES: u32 = 100_000;
