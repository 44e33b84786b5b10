//! Input validation
//!
//! Runs before any structure is built or algorithm executes. Every check fails
//! fast with a validation-class [`Error`]; nothing here is recovered internally.

use crate::error::Error;
use crate::numeric::Numeric;
use crate::Result;

/// Check that a sequence is non-empty and contains only finite values
pub fn validate_sequence<T: Numeric>(values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::empty_input("sequence"));
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(Error::non_finite_at(index));
    }
    Ok(())
}

/// Check that a grid is non-empty, rectangular and contains only finite values
pub fn validate_grid<T: Numeric, R: AsRef<[T]>>(rows: &[R]) -> Result<()> {
    let first = match rows.first() {
        Some(row) => row.as_ref(),
        None => return Err(Error::empty_input("grid")),
    };
    let expected = first.len();
    if expected == 0 {
        return Err(Error::empty_input("grid row 0"));
    }

    for (r, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != expected {
            return Err(Error::RaggedRows {
                row: r,
                expected,
                actual: row.len(),
            });
        }
        if let Some(c) = row.iter().position(|v| !v.is_finite()) {
            return Err(Error::non_finite_cell(r, c));
        }
    }
    Ok(())
}
