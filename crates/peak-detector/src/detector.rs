//! The peak detector façade
//!
//! A [`PeakDetector`] owns one validated input, either a 1D sequence or a 2D
//! grid, and answers peak queries against it. The auxiliary structures each
//! query needs are built on first use and cached:
//!
//! - 1D queries share one [`Compressed`] view of the sequence, so plateaus
//!   collapse to a single element before any strategy runs.
//! - 2D queries share one [`ColumnIndex`], which in turn builds range-max
//!   structures only for the columns the search actually visits.
//!
//! The single-peak strategy is resolved from the configured [`SearchMode`]
//! once, at construction.

use crate::builder::PeakDetectorBuilder;
use crate::config::DetectorConfig;
use crate::input::Input;
use peak_core::{validate_sequence, Compressed, Dimension, Error, Grid, Numeric, Result};
use peak_search::{PeakStrategy, SearchMode, Strategy};
use peak_structures::ColumnIndex;
use std::sync::OnceLock;
use tracing::{debug, instrument};

#[derive(Debug)]
enum Data<T: Numeric> {
    Sequence(Vec<T>),
    Grid(Grid<T>),
}

/// Local maximum detector over a 1D sequence or a 2D grid
///
/// # Example
///
/// ```rust
/// use peak_detector::PeakDetector;
///
/// let detector = PeakDetector::new(vec![1.0, 3.0, 2.0, 5.0, 4.0]).unwrap();
/// assert_eq!(detector.find_all_peaks().unwrap(), vec![1, 3]);
/// assert_eq!(detector.count_peaks().unwrap(), 2);
///
/// let grid = PeakDetector::from_grid(&[[1, 2, 3], [4, 9, 5], [6, 7, 8]]).unwrap();
/// assert_eq!(grid.find_peak_2d().unwrap(), (1, 1));
/// ```
#[derive(Debug)]
pub struct PeakDetector<T: Numeric = f64> {
    data: Data<T>,
    config: DetectorConfig,
    strategy: Strategy,
    compressed: OnceLock<Compressed<T>>,
    columns: OnceLock<ColumnIndex<T>>,
}

impl PeakDetector {
    /// Builder for any value type; the type is fixed by `build`
    pub fn builder() -> PeakDetectorBuilder {
        PeakDetectorBuilder::new()
    }
}

impl<T: Numeric> PeakDetector<T> {
    /// Detector with the default configuration (`auto` mode)
    pub fn new<I: Into<Input<T>>>(input: I) -> Result<Self> {
        Self::with_config(input, DetectorConfig::default())
    }

    /// Detector using the named 1D strategy
    ///
    /// `mode` is one of `auto`, `brute`, `binary`, `hybrid`; anything else is
    /// a usage error.
    pub fn with_mode<I: Into<Input<T>>>(input: I, mode: &str) -> Result<Self> {
        let mode: SearchMode = mode.parse()?;
        Self::with_config(input, DetectorConfig::default().with_mode(mode))
    }

    /// Detector with an explicit configuration
    pub fn with_config<I: Into<Input<T>>>(input: I, config: DetectorConfig) -> Result<Self> {
        config.validate()?;

        let data = match input.into() {
            Input::Sequence(values) => {
                validate_sequence(&values)?;
                Data::Sequence(values)
            }
            Input::Grid(rows) => Data::Grid(Grid::from_rows(&rows)?),
        };
        Ok(Self::from_data(data, config))
    }

    /// Detector over a sequence, copying the caller's values
    pub fn from_sequence(values: &[T]) -> Result<Self> {
        Self::new(values)
    }

    /// Detector over a grid given as rows of any slice-like type
    pub fn from_grid<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let grid = Grid::from_rows(rows)?;
        Ok(Self::from_data(Data::Grid(grid), DetectorConfig::default()))
    }

    fn from_data(data: Data<T>, config: DetectorConfig) -> Self {
        let strategy = config.mode.resolve(config.hybrid_threshold);
        let detector = Self {
            data,
            config,
            strategy,
            compressed: OnceLock::new(),
            columns: OnceLock::new(),
        };
        debug!(
            dimension = %detector.dimension(),
            mode = %config.mode,
            strategy = detector.strategy_name(),
            range_max = %config.range_max,
            "constructed peak detector"
        );
        detector
    }

    pub fn dimension(&self) -> Dimension {
        match self.data {
            Data::Sequence(_) => Dimension::OneD,
            Data::Grid(_) => Dimension::TwoD,
        }
    }

    /// The configured mode (before resolution)
    pub fn mode(&self) -> SearchMode {
        self.config.mode
    }

    /// Name of the strategy the mode resolved to
    pub fn strategy_name(&self) -> &'static str {
        PeakStrategy::<T>::name(&self.strategy)
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// The owned sequence, or `None` for a grid detector
    pub fn values(&self) -> Option<&[T]> {
        match &self.data {
            Data::Sequence(values) => Some(values),
            Data::Grid(_) => None,
        }
    }

    /// The owned grid, or `None` for a sequence detector
    pub fn grid(&self) -> Option<&Grid<T>> {
        match &self.data {
            Data::Grid(grid) => Some(grid),
            Data::Sequence(_) => None,
        }
    }

    /// Value at a 1D index
    pub fn peak_value(&self, index: usize) -> Option<T> {
        self.values()?.get(index).copied()
    }

    /// Value at a 2D `(row, column)` position
    pub fn peak_value_2d(&self, (row, col): (usize, usize)) -> Option<T> {
        self.grid()?.get(row, col)
    }

    /// Index of one peak
    ///
    /// Which peak is returned depends on the strategy; for plateaus it is the
    /// last index of the run.
    #[instrument(skip(self), level = "debug")]
    pub fn find_any_peak(&self) -> Result<usize> {
        let compressed = self.compressed("find_any_peak")?;
        self.strategy
            .find_peak(compressed.values())
            .and_then(|k| compressed.original_index(k))
            .ok_or_else(|| Error::empty_input("sequence"))
    }

    /// Every peak, ascending, one index per plateau
    #[instrument(skip(self), level = "debug")]
    pub fn find_all_peaks(&self) -> Result<Vec<usize>> {
        let compressed = self.compressed("find_all_peaks")?;
        let peaks = self.strategy.find_all_peaks(compressed.values());
        Ok(compressed.expand(&peaks))
    }

    /// Number of peaks; always equals `find_all_peaks().len()`
    #[instrument(skip(self), level = "debug")]
    pub fn count_peaks(&self) -> Result<usize> {
        let compressed = self.compressed("count_peaks")?;
        Ok(self.strategy.count_peaks(compressed.values()))
    }

    /// `(row, column)` of one 2D peak
    #[instrument(skip(self), level = "debug")]
    pub fn find_peak_2d(&self) -> Result<(usize, usize)> {
        let grid = match &self.data {
            Data::Grid(grid) => grid,
            Data::Sequence(_) => {
                return Err(Error::wrong_dimension(
                    "find_peak_2d",
                    Dimension::TwoD,
                    Dimension::OneD,
                ))
            }
        };
        let columns = self
            .columns
            .get_or_init(|| ColumnIndex::new(grid, self.config.range_max));
        peak_search::find_peak_2d(grid, |col| columns.column_max(grid, col))
    }

    fn compressed(&self, operation: &'static str) -> Result<&Compressed<T>> {
        match &self.data {
            Data::Sequence(values) => Ok(self.compressed.get_or_init(|| Compressed::new(values))),
            Data::Grid(_) => Err(Error::wrong_dimension(
                operation,
                Dimension::OneD,
                Dimension::TwoD,
            )),
        }
    }
}
