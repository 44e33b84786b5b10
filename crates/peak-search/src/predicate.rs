//! Peak predicates
//!
//! Out-of-range neighbors count as negative infinity, so boundary elements only
//! have to beat the neighbors they actually have.

use peak_core::{Grid, Numeric};

/// Is `values[i]` >= both of its existing neighbors?
pub fn is_peak<T: Numeric>(values: &[T], i: usize) -> bool {
    let Some(&v) = values.get(i) else {
        return false;
    };
    let left_ok = i == 0 || v >= values[i - 1];
    let right_ok = i + 1 >= values.len() || v >= values[i + 1];
    left_ok && right_ok
}

/// Is `grid[row][col]` >= all of its existing 4-neighbors?
pub fn is_peak_2d<T: Numeric>(grid: &Grid<T>, row: usize, col: usize) -> bool {
    let Some(v) = grid.get(row, col) else {
        return false;
    };
    let neighbors = [
        row.checked_sub(1).and_then(|r| grid.get(r, col)),
        grid.get(row + 1, col),
        col.checked_sub(1).and_then(|c| grid.get(row, c)),
        grid.get(row, col + 1),
    ];
    neighbors.iter().flatten().all(|&n| v >= n)
}
