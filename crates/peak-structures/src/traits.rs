//! Core traits for range-maximum queries

use peak_core::{Error, Numeric, Result};

/// Maximum of a range together with the index attaining it
///
/// Ties are broken towards the lowest index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMax<T: Numeric = f64> {
    /// The maximum value in the range
    pub value: T,
    /// Lowest index holding `value`
    pub index: usize,
}

/// Trait for structures answering "maximum of `values[lo..=hi]`"
///
/// An implementation is bound to exactly one immutable sequence at
/// construction. For every `0 <= lo <= hi < len()`, `query(lo, hi)` must equal
/// the true maximum of that range and report the lowest index holding it.
pub trait RangeMaxQuery<T: Numeric = f64>: Send + Sync {
    /// Length of the bound sequence
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum of the inclusive range `[lo, hi]`
    fn query(&self, lo: usize, hi: usize) -> Result<RangeMax<T>>;

    /// Maximum of the whole sequence
    fn query_all(&self) -> Result<RangeMax<T>> {
        if self.is_empty() {
            return Err(Error::empty_input("range-max structure"));
        }
        self.query(0, self.len() - 1)
    }

    /// Structure name for logging and diagnostics
    fn name(&self) -> &'static str;
}

/// Reject ranges that are reversed or run past the sequence
pub(crate) fn check_range(lo: usize, hi: usize, len: usize) -> Result<()> {
    if lo > hi || hi >= len {
        return Err(Error::InvalidRange { lo, hi, len });
    }
    Ok(())
}

/// Pick the index holding the larger value, preferring `a` on ties
///
/// Callers pass `a` as the lower index so ties resolve to the lowest index.
#[inline]
pub(crate) fn prefer_left<T: Numeric>(values: &[T], a: usize, b: usize) -> usize {
    if values[b] > values[a] {
        b
    } else {
        a
    }
}
