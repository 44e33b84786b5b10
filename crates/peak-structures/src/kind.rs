//! Range-max backend selection

use crate::naive_reference::LinearScan;
use crate::segment_tree::SegmentTree;
use crate::sparse_table::SparseTable;
use crate::traits::RangeMaxQuery;
use peak_core::{Error, Numeric};
use std::fmt;
use std::str::FromStr;

/// Which range-max implementation to build
///
/// The choice only affects performance; every backend returns the same
/// value and index for the same query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RangeMaxKind {
    /// O(n) build, O(log n) query
    SegmentTree,
    /// O(n log n) build, O(1) query
    #[default]
    SparseTable,
    /// No build, O(n) query
    LinearScan,
}

impl RangeMaxKind {
    /// Build a structure of this kind over `values`
    pub fn build<T: Numeric>(self, values: Vec<T>) -> Box<dyn RangeMaxQuery<T>> {
        match self {
            RangeMaxKind::SegmentTree => Box::new(SegmentTree::new(values)),
            RangeMaxKind::SparseTable => Box::new(SparseTable::new(values)),
            RangeMaxKind::LinearScan => Box::new(LinearScan::new(values)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RangeMaxKind::SegmentTree => "segment-tree",
            RangeMaxKind::SparseTable => "sparse-table",
            RangeMaxKind::LinearScan => "linear-scan",
        }
    }
}

impl fmt::Display for RangeMaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RangeMaxKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "segment-tree" | "segment" => Ok(RangeMaxKind::SegmentTree),
            "sparse-table" | "sparse" | "rmq" => Ok(RangeMaxKind::SparseTable),
            "linear-scan" | "linear" | "scan" => Ok(RangeMaxKind::LinearScan),
            _ => Err(Error::UnknownRangeMaxKind(s.to_string())),
        }
    }
}
