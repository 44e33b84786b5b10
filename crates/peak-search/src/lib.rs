//! Local maximum search in 1D sequences and 2D grids
//!
//! # 1D
//!
//! An index is a peak when its value is >= both existing neighbors; missing
//! neighbors at the boundaries count as negative infinity, so every non-empty
//! sequence has at least one peak. Four modes pick how a single peak is
//! located:
//!
//! - **brute**: linear scan, first peak, O(n)
//! - **binary**: descend towards a larger neighbor, O(log n)
//! - **hybrid**: brute below a length threshold, binary above it
//! - **auto**: resolves to binary
//!
//! Enumerating or counting all peaks is always a full scan.
//!
//! # 2D
//!
//! A cell is a peak when its value is >= all existing 4-neighbors.
//! [`find_peak_2d`] halves the column window at each step using column maxima,
//! which callers supply through a range-max structure or a plain scan.
//!
//! # Example
//!
//! ```rust
//! use peak_search::{is_peak, PeakStrategy, SearchMode, DEFAULT_HYBRID_THRESHOLD};
//!
//! let values = [1.0, 3.0, 2.0, 5.0, 4.0];
//! let strategy = SearchMode::Auto.resolve(DEFAULT_HYBRID_THRESHOLD);
//!
//! let peak = strategy.find_peak(&values[..]).unwrap();
//! assert!(is_peak(&values, peak));
//! assert_eq!(strategy.find_all_peaks(&values[..]), vec![1, 3]);
//! ```

pub mod grid;
pub mod predicate;
pub mod strategies;
pub mod traits;
pub mod types;

pub use grid::{find_peak_2d, find_peak_2d_scan};
pub use predicate::{is_peak, is_peak_2d};
pub use strategies::{BinarySearch, BruteForce, Hybrid, Strategy};
pub use traits::PeakStrategy;
pub use types::{SearchMode, DEFAULT_HYBRID_THRESHOLD};

pub use peak_core::{Error, Result};
