//! Sparse table (RMQ) for constant-time range-maximum queries
//!
//! Level `k` stores the argmax of every window of length `2^k`. A query for
//! `[lo, hi]` combines the two, possibly overlapping, windows of the largest
//! power of two that fits; overlap is harmless because max is idempotent.
//!
//! Build is O(n log n) time and space, each query is O(1).

use crate::traits::{check_range, prefer_left, RangeMax, RangeMaxQuery};
use peak_core::{Numeric, Result};

/// Range-maximum sparse table
#[derive(Debug, Clone)]
pub struct SparseTable<T: Numeric = f64> {
    values: Vec<T>,
    /// `levels[k][i]` is the argmax of `values[i..i + 2^k]`
    levels: Vec<Vec<usize>>,
}

impl<T: Numeric> SparseTable<T> {
    /// Build a table over `values`
    pub fn new(values: Vec<T>) -> Self {
        let n = values.len();
        let mut levels: Vec<Vec<usize>> = Vec::new();
        if n > 0 {
            levels.push((0..n).collect());
        }

        let mut width = 2;
        while width <= n {
            let half = width / 2;
            let previous = &levels[levels.len() - 1];
            let level: Vec<usize> = (0..=n - width)
                .map(|i| prefer_left(&values, previous[i], previous[i + half]))
                .collect();
            levels.push(level);
            width *= 2;
        }

        Self { values, levels }
    }

    /// The bound sequence
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of precomputed levels (`floor(log2(n)) + 1`, or 0 when empty)
    pub fn depth(&self) -> usize {
        self.levels.len()
    }
}

/// `floor(log2(len))` for `len >= 1`
#[inline]
fn floor_log2(len: usize) -> usize {
    (usize::BITS - 1 - len.leading_zeros()) as usize
}

impl<T: Numeric> RangeMaxQuery<T> for SparseTable<T> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn query(&self, lo: usize, hi: usize) -> Result<RangeMax<T>> {
        check_range(lo, hi, self.values.len())?;
        let k = floor_log2(hi - lo + 1);
        let level = &self.levels[k];
        let index = prefer_left(&self.values, level[lo], level[hi + 1 - (1 << k)]);
        Ok(RangeMax {
            value: self.values[index],
            index,
        })
    }

    fn name(&self) -> &'static str {
        "sparse-table"
    }
}
