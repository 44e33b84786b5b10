//! Detector configuration

use peak_core::{Error, Result};
use peak_search::{SearchMode, DEFAULT_HYBRID_THRESHOLD};
use peak_structures::RangeMaxKind;

/// Parameters for a [`PeakDetector`](crate::PeakDetector)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetectorConfig {
    /// 1D single-peak strategy (ignored for grids)
    pub mode: SearchMode,
    /// Compressed length above which `hybrid` uses binary search
    pub hybrid_threshold: usize,
    /// Structure used for per-column maxima in 2D searches
    pub range_max: RangeMaxKind,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::Auto,
            hybrid_threshold: DEFAULT_HYBRID_THRESHOLD,
            range_max: RangeMaxKind::SparseTable,
        }
    }
}

impl DetectorConfig {
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_hybrid_threshold(mut self, threshold: usize) -> Self {
        self.hybrid_threshold = threshold;
        self
    }

    pub fn with_range_max(mut self, kind: RangeMaxKind) -> Self {
        self.range_max = kind;
        self
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if self.hybrid_threshold == 0 {
            return Err(Error::InvalidParameter(
                "hybrid threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
