//! Core traits for 1D peak search

use crate::strategies::brute;
use peak_core::Numeric;

/// Trait for 1D single-peak search strategies
///
/// Strategies are fed the duplicate-compressed sequence, so no two neighbors
/// are equal, although every implementation here also accepts raw sequences
/// and honors the non-strict peak predicate on them. Returned indices refer to
/// positions in the slice they were given.
pub trait PeakStrategy<T: Numeric = f64>: Send + Sync {
    /// Strategy name for logging and diagnostics
    fn name(&self) -> &'static str;

    /// Locate one peak, `None` only for an empty slice
    fn find_peak(&self, values: &[T]) -> Option<usize>;

    /// Every peak, ascending
    ///
    /// Enumerating all peaks is O(n) whatever the strategy, so the default
    /// is a full scan.
    fn find_all_peaks(&self, values: &[T]) -> Vec<usize> {
        brute::find_all_peaks(values)
    }

    /// Exact number of peaks
    fn count_peaks(&self, values: &[T]) -> usize {
        self.find_all_peaks(values).len()
    }
}
