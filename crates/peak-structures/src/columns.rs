//! Lazily built per-column range-max structures for grids

use crate::kind::RangeMaxKind;
use crate::traits::{RangeMax, RangeMaxQuery};
use peak_core::{Error, Grid, Numeric, Result};
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// One range-max structure per grid column, each built on first use
///
/// The 2D search only visits O(log cols) columns, so structures are built
/// column by column rather than up front. `OnceLock` guarantees each column
/// is built at most once, including under concurrent access.
pub struct ColumnIndex<T: Numeric = f64> {
    kind: RangeMaxKind,
    rows: usize,
    columns: Vec<OnceLock<Box<dyn RangeMaxQuery<T>>>>,
}

impl<T: Numeric> ColumnIndex<T> {
    /// Prepare an (unbuilt) index for `grid`
    pub fn new(grid: &Grid<T>, kind: RangeMaxKind) -> Self {
        Self {
            kind,
            rows: grid.rows(),
            columns: (0..grid.cols()).map(|_| OnceLock::new()).collect(),
        }
    }

    pub fn kind(&self) -> RangeMaxKind {
        self.kind
    }

    /// Number of columns covered
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of columns whose structure has been built so far
    pub fn built_columns(&self) -> usize {
        self.columns.iter().filter(|c| c.get().is_some()).count()
    }

    /// Maximum of column `col` and the lowest row holding it
    ///
    /// `grid` must be the grid this index was created for.
    pub fn column_max(&self, grid: &Grid<T>, col: usize) -> Result<RangeMax<T>> {
        if grid.shape() != (self.rows, self.columns.len()) {
            return Err(Error::InvalidParameter(format!(
                "column index built for a {}x{} grid, queried with a {}x{} grid",
                self.rows,
                self.columns.len(),
                grid.rows(),
                grid.cols()
            )));
        }
        let slot = self.columns.get(col).ok_or(Error::InvalidRange {
            lo: col,
            hi: col,
            len: self.columns.len(),
        })?;

        let structure = slot.get_or_init(|| {
            debug!(col, rows = self.rows, kind = %self.kind, "building column range-max structure");
            self.kind.build(grid.column(col))
        });
        structure.query_all()
    }
}

impl<T: Numeric> fmt::Debug for ColumnIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnIndex")
            .field("kind", &self.kind)
            .field("rows", &self.rows)
            .field("cols", &self.columns.len())
            .field("built_columns", &self.built_columns())
            .finish()
    }
}
