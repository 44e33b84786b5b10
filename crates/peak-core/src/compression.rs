//! Duplicate compression for plateau handling
//!
//! Peak predicates compare a value against its neighbors. Collapsing each run of
//! equal consecutive values into one element makes every remaining neighbor
//! comparison strict, so the search strategies never need plateau-aware
//! branches. The index map translates compressed positions back to the
//! original sequence.
//!
//! Each compressed element maps to the **last** original index of its run.
//!
//! ```rust
//! use peak_core::compression::compress;
//!
//! let (values, index_map) = compress(&[1, 2, 2, 2, 3, 3, 4]);
//! assert_eq!(values, vec![1, 2, 3, 4]);
//! assert_eq!(index_map, vec![0, 3, 5, 6]);
//! ```

use crate::numeric::Numeric;
use tracing::debug;

/// Collapse runs of equal consecutive values
///
/// Returns the compressed values and, for each of them, the original index of
/// the last element in its run. Empty input yields empty outputs.
pub fn compress<T: PartialEq + Copy>(values: &[T]) -> (Vec<T>, Vec<usize>) {
    let mut compressed = Vec::new();
    let mut index_map: Vec<usize> = Vec::new();

    for (i, &value) in values.iter().enumerate() {
        match compressed.last() {
            Some(&previous) if previous == value => {
                if let Some(last) = index_map.last_mut() {
                    *last = i;
                }
            }
            _ => {
                compressed.push(value);
                index_map.push(i);
            }
        }
    }

    (compressed, index_map)
}

/// Map compressed indices back to original indices
///
/// Indices outside the map are dropped rather than reported; callers are
/// expected to pass indices obtained from a compression of the same sequence.
pub fn expand(compressed_indices: &[usize], index_map: &[usize]) -> Vec<usize> {
    compressed_indices
        .iter()
        .filter_map(|&k| index_map.get(k).copied())
        .collect()
}

/// A compressed sequence together with its index map
#[derive(Debug, Clone, PartialEq)]
pub struct Compressed<T: Numeric = f64> {
    values: Vec<T>,
    index_map: Vec<usize>,
}

impl<T: Numeric> Compressed<T> {
    /// Compress `values`
    pub fn new(values: &[T]) -> Self {
        let (compressed, index_map) = compress(values);
        debug!(
            original_len = values.len(),
            compressed_len = compressed.len(),
            "built compression map"
        );
        Self {
            values: compressed,
            index_map,
        }
    }

    /// The compressed values; no two neighbors are equal
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Original index of the last element of each run
    pub fn index_map(&self) -> &[usize] {
        &self.index_map
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Original index for a single compressed index
    pub fn original_index(&self, k: usize) -> Option<usize> {
        self.index_map.get(k).copied()
    }

    /// Map compressed indices back to original indices
    pub fn expand(&self, compressed_indices: &[usize]) -> Vec<usize> {
        expand(compressed_indices, &self.index_map)
    }

    /// Split into `(values, index_map)`
    pub fn into_parts(self) -> (Vec<T>, Vec<usize>) {
        (self.values, self.index_map)
    }
}
