//! Segment tree for range-maximum queries
//!
//! A binary tree over the sequence where every node stores the argmax of its
//! subtree range. Built bottom-up in O(n); each query combines at most
//! O(log n) disjoint covering nodes.

use crate::traits::{check_range, prefer_left, RangeMax, RangeMaxQuery};
use peak_core::{Error, Numeric, Result};

/// Range-maximum segment tree
#[derive(Debug, Clone)]
pub struct SegmentTree<T: Numeric = f64> {
    values: Vec<T>,
    /// Argmax per node, root at 1, children of `node` at `2 * node` and `2 * node + 1`
    tree: Vec<usize>,
}

impl<T: Numeric> SegmentTree<T> {
    /// Build a tree over `values`
    pub fn new(values: Vec<T>) -> Self {
        let n = values.len();
        let mut tree = Self {
            values,
            tree: vec![0; if n == 0 { 0 } else { 4 * n }],
        };
        if n > 0 {
            tree.build(1, 0, n - 1);
        }
        tree
    }

    /// The bound sequence
    pub fn values(&self) -> &[T] {
        &self.values
    }

    fn build(&mut self, node: usize, lo: usize, hi: usize) {
        if lo == hi {
            self.tree[node] = lo;
            return;
        }
        let mid = lo + (hi - lo) / 2;
        self.build(2 * node, lo, mid);
        self.build(2 * node + 1, mid + 1, hi);
        self.tree[node] = prefer_left(&self.values, self.tree[2 * node], self.tree[2 * node + 1]);
    }

    fn query_node(
        &self,
        node: usize,
        node_lo: usize,
        node_hi: usize,
        lo: usize,
        hi: usize,
    ) -> Option<usize> {
        if hi < node_lo || node_hi < lo {
            return None;
        }
        if lo <= node_lo && node_hi <= hi {
            return Some(self.tree[node]);
        }

        let mid = node_lo + (node_hi - node_lo) / 2;
        let left = self.query_node(2 * node, node_lo, mid, lo, hi);
        let right = self.query_node(2 * node + 1, mid + 1, node_hi, lo, hi);
        match (left, right) {
            (Some(a), Some(b)) => Some(prefer_left(&self.values, a, b)),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

impl<T: Numeric> RangeMaxQuery<T> for SegmentTree<T> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn query(&self, lo: usize, hi: usize) -> Result<RangeMax<T>> {
        check_range(lo, hi, self.values.len())?;
        let index = self
            .query_node(1, 0, self.values.len() - 1, lo, hi)
            .ok_or(Error::InvalidRange {
                lo,
                hi,
                len: self.values.len(),
            })?;
        Ok(RangeMax {
            value: self.values[index],
            index,
        })
    }

    fn name(&self) -> &'static str {
        "segment-tree"
    }
}
