//! Detector input conversions

use peak_core::{Dimension, Numeric};

/// Raw, unvalidated detector input
///
/// Built through the `From` impls so callers can pass vectors, slices, arrays
/// or nested vectors directly to the detector constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<T: Numeric = f64> {
    /// A 1D sequence
    Sequence(Vec<T>),
    /// A 2D grid given as rows
    Grid(Vec<Vec<T>>),
}

impl<T: Numeric> Input<T> {
    pub fn dimension(&self) -> Dimension {
        match self {
            Input::Sequence(_) => Dimension::OneD,
            Input::Grid(_) => Dimension::TwoD,
        }
    }
}

impl<T: Numeric> From<Vec<T>> for Input<T> {
    fn from(values: Vec<T>) -> Self {
        Input::Sequence(values)
    }
}

impl<T: Numeric> From<&[T]> for Input<T> {
    fn from(values: &[T]) -> Self {
        Input::Sequence(values.to_vec())
    }
}

impl<T: Numeric, const N: usize> From<[T; N]> for Input<T> {
    fn from(values: [T; N]) -> Self {
        Input::Sequence(values.to_vec())
    }
}

impl<T: Numeric> From<Vec<Vec<T>>> for Input<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Input::Grid(rows)
    }
}

impl<T: Numeric> From<&[Vec<T>]> for Input<T> {
    fn from(rows: &[Vec<T>]) -> Self {
        Input::Grid(rows.to_vec())
    }
}

impl<T: Numeric, const C: usize, const R: usize> From<[[T; C]; R]> for Input<T> {
    fn from(rows: [[T; C]; R]) -> Self {
        Input::Grid(rows.iter().map(|row| row.to_vec()).collect())
    }
}
