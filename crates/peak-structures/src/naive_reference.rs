//! Linear-scan reference implementation
//!
//! No preprocessing, O(n) per query. Used as the correctness oracle for the
//! segment tree and sparse table, and as the "plain column scan" backend for
//! the 2D search.

use crate::traits::{check_range, RangeMax, RangeMaxQuery};
use peak_core::{Error, Numeric, Result};

/// Argmax of a slice, lowest index on ties
pub fn argmax<T: Numeric>(values: &[T]) -> Option<RangeMax<T>> {
    let (&first, rest) = values.split_first()?;
    let mut best = RangeMax {
        value: first,
        index: 0,
    };
    for (i, &v) in rest.iter().enumerate() {
        if v > best.value {
            best = RangeMax {
                value: v,
                index: i + 1,
            };
        }
    }
    Some(best)
}

/// Range-max "structure" that rescans on every query
#[derive(Debug, Clone)]
pub struct LinearScan<T: Numeric = f64> {
    values: Vec<T>,
}

impl<T: Numeric> LinearScan<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: Numeric> RangeMaxQuery<T> for LinearScan<T> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn query(&self, lo: usize, hi: usize) -> Result<RangeMax<T>> {
        check_range(lo, hi, self.values.len())?;
        let best = argmax(&self.values[lo..=hi]).map(|m| RangeMax {
            value: m.value,
            index: m.index + lo,
        });
        best.ok_or(Error::InvalidRange {
            lo,
            hi,
            len: self.values.len(),
        })
    }

    fn name(&self) -> &'static str {
        "linear-scan"
    }
}
