//! Linear-scan peak search

use crate::predicate::is_peak;
use crate::traits::PeakStrategy;
use peak_core::Numeric;

/// First index satisfying the peak predicate
pub fn find_first_peak<T: Numeric>(values: &[T]) -> Option<usize> {
    (0..values.len()).find(|&i| is_peak(values, i))
}

/// Every index satisfying the peak predicate, ascending
pub fn find_all_peaks<T: Numeric>(values: &[T]) -> Vec<usize> {
    (0..values.len()).filter(|&i| is_peak(values, i)).collect()
}

/// O(n) scan returning the first peak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BruteForce;

impl<T: Numeric> PeakStrategy<T> for BruteForce {
    fn name(&self) -> &'static str {
        "brute"
    }

    fn find_peak(&self, values: &[T]) -> Option<usize> {
        find_first_peak(values)
    }
}
