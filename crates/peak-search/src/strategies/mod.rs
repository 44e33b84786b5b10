//! Concrete 1D peak search strategies
//!
//! Each strategy is available as a unit type implementing [`PeakStrategy`]
//! and as a variant of the closed [`Strategy`] enum that detectors store after
//! resolving a [`SearchMode`](crate::SearchMode).

pub mod binary;
pub mod brute;
pub mod hybrid;

pub use binary::BinarySearch;
pub use brute::BruteForce;
pub use hybrid::Hybrid;

use crate::traits::PeakStrategy;
use peak_core::Numeric;

/// A resolved 1D strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Brute(BruteForce),
    Binary(BinarySearch),
    Hybrid(Hybrid),
}

impl<T: Numeric> PeakStrategy<T> for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Brute(s) => PeakStrategy::<T>::name(s),
            Strategy::Binary(s) => PeakStrategy::<T>::name(s),
            Strategy::Hybrid(s) => PeakStrategy::<T>::name(s),
        }
    }

    fn find_peak(&self, values: &[T]) -> Option<usize> {
        match self {
            Strategy::Brute(s) => s.find_peak(values),
            Strategy::Binary(s) => s.find_peak(values),
            Strategy::Hybrid(s) => s.find_peak(values),
        }
    }
}
