//! Core input types for peak detection

use crate::numeric::Numeric;
use crate::validation::validate_grid;
use crate::Result;
use std::fmt;

/// Shape of the input a detector holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// A single sequence
    OneD,
    /// A rectangular grid
    TwoD,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::OneD => write!(f, "1D"),
            Dimension::TwoD => write!(f, "2D"),
        }
    }
}

/// Rectangular, immutable grid stored in row-major order
///
/// A `Grid` can only be created through [`Grid::from_rows`], which runs the
/// validator, so every instance has at least one row, at least one column, equal
/// row lengths and only finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Numeric = f64> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Numeric> Grid<T> {
    /// Validate and flatten a sequence of rows
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        validate_grid(rows)?;

        let cols = rows[0].as_ref().len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }

        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Value at `(row, col)`, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterate over the values of one column, top to bottom
    pub fn column_iter(&self, col: usize) -> impl Iterator<Item = T> + '_ {
        let (step, len) = if col < self.cols {
            (self.cols, self.rows)
        } else {
            (1, 0)
        };
        self.data.iter().skip(col).step_by(step).take(len).copied()
    }

    /// Owned copy of one column (empty if `col` is out of range)
    pub fn column(&self, col: usize) -> Vec<T> {
        self.column_iter(col).collect()
    }

    /// Row-major backing storage
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}
