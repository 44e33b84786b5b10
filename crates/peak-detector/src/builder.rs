use crate::config::DetectorConfig;
use crate::detector::PeakDetector;
use crate::input::Input;
use peak_core::{Error, Numeric, Result};
use peak_search::SearchMode;
use peak_structures::RangeMaxKind;

/// Builder for configuring and creating peak detectors.
///
/// Setters never fail; a bad mode string or threshold is remembered and
/// reported by [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct PeakDetectorBuilder {
    config: DetectorConfig,
    error: Option<Error>,
}

impl PeakDetectorBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the 1D single-peak strategy.
    pub fn mode(mut self, mode: SearchMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Sets the strategy from its name (`auto`, `brute`, `binary`, `hybrid`).
    pub fn mode_str(mut self, mode: &str) -> Self {
        match mode.parse() {
            Ok(mode) => self.config.mode = mode,
            Err(e) => self.record(e),
        }
        self
    }

    /// Sets the compressed length above which `hybrid` uses binary search.
    ///
    /// Must be at least 1.
    pub fn hybrid_threshold(mut self, threshold: usize) -> Self {
        self.config.hybrid_threshold = threshold;
        self
    }

    /// Sets the range-max structure used for column maxima.
    pub fn range_max(mut self, kind: RangeMaxKind) -> Self {
        self.config.range_max = kind;
        self
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: DetectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the input and builds the detector.
    pub fn build<T, I>(self, input: I) -> Result<PeakDetector<T>>
    where
        T: Numeric,
        I: Into<Input<T>>,
    {
        if let Some(e) = self.error {
            return Err(e);
        }
        self.config.validate()?;
        PeakDetector::with_config(input, self.config)
    }

    // First error wins
    fn record(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}
