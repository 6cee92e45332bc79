//! # Cookie Catalog
//!
//! The fixed catalog of cookie varieties: codes, labels, box prices, display
//! colors, and popularity weights.
//!
//! ## Why Compile-Time Data?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Lifecycle                                  │
//! │                                                                         │
//! │  The variety lineup changes once per season, with a code change and a  │
//! │  redeploy - never at runtime. Modeling it as const data means:        │
//! │                                                                         │
//! │  • No init/teardown lifecycle, no registry to populate                 │
//! │  • Lookups are plain match arms, free to call from any thread         │
//! │  • The popularity ranking is a pre-declared array, so tie-breaking    │
//! │    is deterministic (runtime sorting of f64 weights would not be)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Degraded Lookups
//! Code tokens arrive from the UI as strings. The string-keyed lookups
//! ([`label_for`], [`color_for`], [`unit_cost_for`]) never fail: an
//! unrecognized token degrades to the raw code, neutral gray, and zero cost.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Number of varieties in the current season's lineup.
pub const VARIETY_COUNT: usize = 9;

/// Swatch used when a code token has no catalog entry.
pub const FALLBACK_COLOR: &str = "#CCCCCC";

// =============================================================================
// Variety
// =============================================================================

/// A cookie variety in the current season's lineup.
///
/// Serialized as the short code token (`"TMint"`, `"Sam"`, ...) that the UI
/// form and report payloads use as map keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Variety {
    #[serde(rename = "Advf")]
    Adventurefuls,
    #[serde(rename = "Lmup")]
    LemonUps,
    #[serde(rename = "Tre")]
    Trefoils,
    #[serde(rename = "D-S-D")]
    DoSiDos,
    #[serde(rename = "Sam")]
    Samoas,
    #[serde(rename = "Tags")]
    Tagalongs,
    #[serde(rename = "TMint")]
    ThinMints,
    #[serde(rename = "Exp")]
    Exploremores,
    #[serde(rename = "Toff")]
    ToffeeTastics,
}

impl Variety {
    /// Every variety, in catalog-declaration order.
    pub const ALL: [Variety; VARIETY_COUNT] = [
        Variety::Adventurefuls,
        Variety::LemonUps,
        Variety::Trefoils,
        Variety::DoSiDos,
        Variety::Samoas,
        Variety::Tagalongs,
        Variety::ThinMints,
        Variety::Exploremores,
        Variety::ToffeeTastics,
    ];

    /// Every variety, ranked by descending popularity weight.
    ///
    /// This ranking is declared explicitly rather than derived by sorting
    /// [`Variety::popularity`] at runtime: sorting f64 weights would make
    /// tie-breaking an accident of the sort implementation, and the
    /// correction loop in the estimator depends on a stable order.
    /// Current as of Friday January 16, 2026.
    pub const BY_POPULARITY: [Variety; VARIETY_COUNT] = [
        Variety::ThinMints,
        Variety::Samoas,
        Variety::Tagalongs,
        Variety::Exploremores,
        Variety::Adventurefuls,
        Variety::Trefoils,
        Variety::LemonUps,
        Variety::DoSiDos,
        Variety::ToffeeTastics,
    ];

    /// The short code token used in form fields and IPC payloads.
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            Variety::Adventurefuls => "Advf",
            Variety::LemonUps => "Lmup",
            Variety::Trefoils => "Tre",
            Variety::DoSiDos => "D-S-D",
            Variety::Samoas => "Sam",
            Variety::Tagalongs => "Tags",
            Variety::ThinMints => "TMint",
            Variety::Exploremores => "Exp",
            Variety::ToffeeTastics => "Toff",
        }
    }

    /// Display label shown on count sheets and reports.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Variety::Adventurefuls => "Adventurefuls",
            Variety::LemonUps => "Lemon-ups",
            Variety::Trefoils => "Trefoils",
            Variety::DoSiDos => "Do-si-dos",
            Variety::Samoas => "Samoas",
            Variety::Tagalongs => "Tagalongs",
            Variety::ThinMints => "Thin Mints",
            Variety::Exploremores => "Exploremores",
            Variety::ToffeeTastics => "Toffee-tastics",
        }
    }

    /// Price of one box.
    #[inline]
    pub const fn unit_cost(self) -> Money {
        match self {
            Variety::ToffeeTastics => Money::from_cents(700),
            _ => Money::from_cents(600),
        }
    }

    /// Display swatch. These match eBudde's 2026 color scheme.
    #[inline]
    pub const fn color(self) -> &'static str {
        match self {
            Variety::Adventurefuls => "#D5CA9F",
            Variety::LemonUps => "#EDDF3E",
            Variety::Trefoils => "#005BAA",
            Variety::DoSiDos => "#FCC56A",
            Variety::Samoas => "#7D4199",
            Variety::Tagalongs => "#E51A40",
            Variety::ThinMints => "#00A654",
            Variety::Exploremores => "#EB9F94",
            Variety::ToffeeTastics => "#00CABE",
        }
    }

    /// Historical share of total sales attributed to this variety.
    ///
    /// The weights across all varieties sum to 1.0 exactly (verified by
    /// test). Current as of Friday January 16, 2026.
    #[inline]
    pub const fn popularity(self) -> f64 {
        match self {
            Variety::ThinMints => 0.278,
            Variety::Samoas => 0.208,
            Variety::Tagalongs => 0.142,
            Variety::Exploremores => 0.099,
            Variety::Adventurefuls => 0.069,
            Variety::Trefoils => 0.065,
            Variety::LemonUps => 0.061,
            Variety::DoSiDos => 0.047,
            Variety::ToffeeTastics => 0.031,
        }
    }

    /// Resolves a code token to a variety, if it names one.
    pub fn from_code(code: &str) -> Option<Variety> {
        Variety::ALL.iter().copied().find(|v| v.code() == code)
    }

    /// Whether dark text is readable on this variety's swatch.
    #[inline]
    pub fn dark_text(self) -> bool {
        dark_text_on(self.color())
    }
}

// =============================================================================
// Degraded String-Keyed Lookups
// =============================================================================

/// Display label for a code token; an unrecognized token is its own label.
pub fn label_for(code: &str) -> &str {
    match Variety::from_code(code) {
        Some(variety) => variety.label(),
        None => code,
    }
}

/// Display swatch for a code token, falling back to [`FALLBACK_COLOR`].
pub fn color_for(code: &str) -> &'static str {
    match Variety::from_code(code) {
        Some(variety) => variety.color(),
        None => FALLBACK_COLOR,
    }
}

/// Box price for a code token; an unrecognized token costs nothing.
pub fn unit_cost_for(code: &str) -> Money {
    match Variety::from_code(code) {
        Some(variety) => variety.unit_cost(),
        None => Money::zero(),
    }
}

// =============================================================================
// Swatch Contrast
// =============================================================================

/// Whether dark text is readable on the given `#RRGGBB` swatch.
///
/// Uses the ITU-R BT.601 luma weights the UI previously computed inline:
/// `(0.299 R + 0.587 G + 0.114 B) / 255 > 0.5`. An unparseable swatch is
/// treated like the light gray fallback, which takes dark text.
pub fn dark_text_on(color: &str) -> bool {
    match relative_luminance(color) {
        Some(luminance) => luminance > 0.5,
        None => true,
    }
}

fn relative_luminance(color: &str) -> Option<f64> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popularity_sums_to_one() {
        let sum: f64 = Variety::ALL.iter().map(|v| v.popularity()).sum();
        assert!(
            (sum - 1.0).abs() < 1e-9,
            "popularity weights must sum to 1.0, got {sum}"
        );
    }

    #[test]
    fn test_ranking_is_strictly_descending() {
        for pair in Variety::BY_POPULARITY.windows(2) {
            assert!(
                pair[0].popularity() > pair[1].popularity(),
                "{:?} must outrank {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_ranking_covers_every_variety() {
        for variety in Variety::ALL {
            assert!(Variety::BY_POPULARITY.contains(&variety));
        }
    }

    #[test]
    fn test_code_round_trip() {
        for variety in Variety::ALL {
            assert_eq!(Variety::from_code(variety.code()), Some(variety));
        }
        assert_eq!(Variety::from_code("Oreo"), None);
    }

    #[test]
    fn test_degraded_lookups() {
        assert_eq!(label_for("TMint"), "Thin Mints");
        assert_eq!(label_for("Oreo"), "Oreo");

        assert_eq!(color_for("Sam"), "#7D4199");
        assert_eq!(color_for("Oreo"), FALLBACK_COLOR);

        assert_eq!(unit_cost_for("Toff").cents(), 700);
        assert!(unit_cost_for("Oreo").is_zero());
    }

    #[test]
    fn test_serde_uses_code_tokens() {
        let json = serde_json::to_string(&Variety::DoSiDos).unwrap();
        assert_eq!(json, "\"D-S-D\"");
        let back: Variety = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Variety::DoSiDos);
    }

    #[test]
    fn test_swatch_contrast() {
        // Lemon-ups yellow is light, Trefoils blue is dark.
        assert!(Variety::LemonUps.dark_text());
        assert!(!Variety::Trefoils.dark_text());

        // Fallback gray and garbage both take dark text.
        assert!(dark_text_on(FALLBACK_COLOR));
        assert!(dark_text_on("not-a-color"));
    }
}
