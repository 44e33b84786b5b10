//! Binary-search peak finding
//!
//! If `values[mid] < values[mid + 1]` the sequence rises to the right, so some
//! peak lies in `(mid, hi]`; symmetrically on the left. Otherwise `mid` is a
//! peak. The window `[lo, hi]` keeps the invariant that `values[lo - 1] <
//! values[lo]` and `values[hi + 1] < values[hi]` (when those neighbors exist),
//! which guarantees the window never empties.

use crate::traits::PeakStrategy;
use peak_core::Numeric;

/// Locate one peak in O(log n) comparisons
pub fn find_peak<T: Numeric>(values: &[T]) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    let (mut lo, mut hi) = (0, values.len() - 1);
    loop {
        let mid = lo + (hi - lo) / 2;
        if mid < hi && values[mid] < values[mid + 1] {
            lo = mid + 1;
        } else if mid > lo && values[mid] < values[mid - 1] {
            hi = mid - 1;
        } else {
            return Some(mid);
        }
    }
}

/// O(log n) descent towards one peak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinarySearch;

impl<T: Numeric> PeakStrategy<T> for BinarySearch {
    fn name(&self) -> &'static str {
        "binary"
    }

    fn find_peak(&self, values: &[T]) -> Option<usize> {
        find_peak(values)
    }
}
