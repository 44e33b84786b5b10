//! Peak detection over 1D sequences and 2D grids
//!
//! [`PeakDetector`] validates and owns its input, resolves a 1D strategy from
//! a [`SearchMode`] once, and builds the structures each query needs lazily:
//!
//! - `find_any_peak`, `find_all_peaks`, `count_peaks` for sequences
//! - `find_peak_2d` for grids
//!
//! Calling a sequence query on a grid detector (or the reverse) is a usage
//! error, as are unknown mode strings.
//!
//! # Example
//!
//! ```rust
//! use peak_detector::{PeakDetector, SearchMode};
//!
//! let detector = PeakDetector::builder()
//!     .mode(SearchMode::Hybrid)
//!     .hybrid_threshold(16)
//!     .build(vec![1, 2, 3, 4, 5, 4, 3, 2, 1])
//!     .unwrap();
//!
//! assert_eq!(detector.find_any_peak().unwrap(), 4);
//! assert_eq!(detector.find_all_peaks().unwrap(), vec![4]);
//! ```

pub mod builder;
pub mod config;
pub mod detector;
pub mod input;

pub use builder::PeakDetectorBuilder;
pub use config::DetectorConfig;
pub use detector::PeakDetector;
pub use input::Input;

pub use peak_core::{Dimension, Error, ErrorKind, Grid, Numeric, Result};
pub use peak_search::SearchMode;
pub use peak_structures::RangeMaxKind;
