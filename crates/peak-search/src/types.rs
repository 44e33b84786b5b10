//! Search mode selection

use crate::strategies::{BinarySearch, BruteForce, Hybrid, Strategy};
use peak_core::Error;
use std::fmt;
use std::str::FromStr;

/// Compressed length above which the hybrid strategy switches to binary search
pub const DEFAULT_HYBRID_THRESHOLD: usize = 64;

/// User-facing choice of 1D single-peak strategy
///
/// Only affects `find_any_peak`; enumerating all peaks always needs a full
/// scan. 2D searches ignore the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SearchMode {
    /// Pick the best strategy (binary search)
    #[default]
    Auto,
    /// Linear scan, returns the first peak
    Brute,
    /// O(log n) descent towards a peak
    Binary,
    /// Brute below a size threshold, binary above it
    Hybrid,
}

impl SearchMode {
    /// Resolve to a concrete strategy
    ///
    /// Called once when a detector is constructed, not on every query.
    pub fn resolve(self, hybrid_threshold: usize) -> Strategy {
        match self {
            SearchMode::Auto | SearchMode::Binary => Strategy::Binary(BinarySearch),
            SearchMode::Brute => Strategy::Brute(BruteForce),
            SearchMode::Hybrid => Strategy::Hybrid(Hybrid::new(hybrid_threshold)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchMode::Auto => "auto",
            SearchMode::Brute => "brute",
            SearchMode::Binary => "binary",
            SearchMode::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(SearchMode::Auto),
            "brute" => Ok(SearchMode::Brute),
            "binary" => Ok(SearchMode::Binary),
            "hybrid" => Ok(SearchMode::Hybrid),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}
