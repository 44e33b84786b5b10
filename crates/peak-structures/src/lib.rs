//! Range-maximum query structures for peak detection
//!
//! Every structure here is bound to one immutable sequence at construction and
//! answers "maximum of `values[lo..=hi]`" together with the lowest index
//! attaining it. The 2D peak search uses them to find column maxima without
//! rescanning whole columns at every recursion step.
//!
//! | Structure | Build | Query |
//! |-----------|-------|-------|
//! | [`SegmentTree`] | O(n) | O(log n) |
//! | [`SparseTable`] | O(n log n) | O(1) |
//! | [`LinearScan`] | none | O(n) |
//!
//! # Example
//!
//! ```rust
//! use peak_structures::{RangeMaxQuery, SegmentTree, SparseTable};
//!
//! let data = vec![1.0, 3.0, 2.0, 5.0, 4.0];
//! let tree = SegmentTree::new(data.clone());
//! let table = SparseTable::new(data);
//!
//! assert_eq!(tree.query(0, 2).unwrap(), table.query(0, 2).unwrap());
//! assert_eq!(table.query(1, 4).unwrap().index, 3);
//! ```

pub mod columns;
pub mod kind;
pub mod naive_reference;
pub mod segment_tree;
pub mod sparse_table;
pub mod traits;

pub use columns::ColumnIndex;
pub use kind::RangeMaxKind;
pub use naive_reference::{argmax, LinearScan};
pub use segment_tree::SegmentTree;
pub use sparse_table::SparseTable;
pub use traits::{RangeMax, RangeMaxQuery};

pub use peak_core::{Error, Result};
