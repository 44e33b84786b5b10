//! Divide-and-conquer 2D peak search
//!
//! Works over a window of columns `[lo, hi]`:
//!
//! 1. Take the middle column and the row `r*` holding its maximum.
//! 2. If the left neighbor `grid[r*][mid - 1]` is strictly greater, continue
//!    in `[lo, mid - 1]`; else if the right neighbor is strictly greater,
//!    continue in `[mid + 1, hi]`.
//! 3. Otherwise `(r*, mid)` is a peak: it is the column maximum, so it beats
//!    its vertical neighbors, and it beats both horizontal ones.
//!
//! A window of one column returns its column maximum directly. The column we
//! move towards always holds a value greater than everything in the column we
//! leave, so the window boundary can never be beaten from outside. Each step
//! halves the window, giving O(log cols) column-max lookups.

use peak_core::{Error, Grid, Numeric, Result};
use peak_structures::{argmax, RangeMax};
use tracing::trace;

/// Find one 2D peak using `column_max` to locate each column's maximum
///
/// `column_max(col)` must return the maximum of column `col` and the row
/// holding it, typically from a [`ColumnIndex`](peak_structures::ColumnIndex).
pub fn find_peak_2d<T, F>(grid: &Grid<T>, mut column_max: F) -> Result<(usize, usize)>
where
    T: Numeric,
    F: FnMut(usize) -> Result<RangeMax<T>>,
{
    if grid.cols() == 0 || grid.rows() == 0 {
        return Err(Error::empty_input("grid"));
    }

    let (mut lo, mut hi) = (0, grid.cols() - 1);
    loop {
        let mid = lo + (hi - lo) / 2;
        let RangeMax { value, index: row } = column_max(mid)?;
        trace!(lo, hi, mid, row, ?value, "2D search step");

        if lo == hi {
            return Ok((row, mid));
        }

        let left = mid.checked_sub(1).and_then(|c| grid.get(row, c));
        let right = grid.get(row, mid + 1);

        match (left, right) {
            (Some(l), _) if l > value && mid > lo => hi = mid - 1,
            (_, Some(r)) if r > value && mid < hi => lo = mid + 1,
            _ => return Ok((row, mid)),
        }
    }
}

/// Find one 2D peak, scanning each visited column directly
pub fn find_peak_2d_scan<T: Numeric>(grid: &Grid<T>) -> Result<(usize, usize)> {
    find_peak_2d(grid, |col| {
        argmax(&grid.column(col)).ok_or_else(|| Error::empty_input("grid column"))
    })
}
