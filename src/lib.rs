//! Local maximum (peak) detection for 1D sequences and 2D grids
//!
//! This crate re-exports the peakfinder workspace:
//!
//! - [`peak_core`]: errors, the `Numeric` value trait, `Grid`, validation and
//!   duplicate compression
//! - [`peak_structures`]: range-max query structures (segment tree, sparse table)
//! - [`peak_search`]: peak predicates, the 1D strategies and the 2D search
//! - [`peak_detector`]: the `PeakDetector` façade
//!
//! Most callers only need the [`prelude`].
//!
//! # Example
//!
//! ```rust
//! use peakfinder::prelude::*;
//!
//! let detector = PeakDetector::with_mode(vec![1.0, 3.0, 2.0, 5.0, 4.0], "brute")?;
//! assert_eq!(detector.find_any_peak()?, 1);
//! assert_eq!(detector.count_peaks()?, 2);
//! # Ok::<(), peakfinder::prelude::Error>(())
//! ```

pub use peak_core;
pub use peak_detector;
pub use peak_search;
pub use peak_structures;

/// Commonly used types
pub mod prelude {
    pub use peak_core::{Compressed, Dimension, Error, ErrorKind, Grid, Numeric, Result};
    pub use peak_detector::{DetectorConfig, Input, PeakDetector, PeakDetectorBuilder};
    pub use peak_search::{is_peak, is_peak_2d, PeakStrategy, SearchMode};
    pub use peak_structures::{RangeMaxKind, RangeMaxQuery, SegmentTree, SparseTable};
}
