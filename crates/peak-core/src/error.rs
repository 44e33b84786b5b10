//! Error types for peak detection
//!
//! Provides a unified error type for all peakfinder crates. Errors fall into
//! two groups: validation errors raised before any algorithm runs, and usage
//! errors raised when an operation is called the wrong way.

use crate::types::Dimension;
use thiserror::Error;

/// Core error type for peak detection operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input (or part of it) contains no values
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A grid row does not match the width of the first row
    #[error("Ragged grid: row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Input contains NaN or infinite values
    #[error("Non-finite value: {0}")]
    NonFinite(String),

    /// A 1D-only operation was called on a 2D detector, or vice versa
    #[error("{operation} requires {expected} input, detector holds {actual} input")]
    WrongDimension {
        operation: &'static str,
        expected: Dimension,
        actual: Dimension,
    },

    /// Unrecognized search mode string
    #[error("Unknown search mode '{0}', expected one of: auto, brute, binary, hybrid")]
    UnknownMode(String),

    /// Unrecognized range-max backend string
    #[error("Unknown range-max structure '{0}', expected one of: segment-tree, sparse-table, linear-scan")]
    UnknownRangeMaxKind(String),

    /// Range query outside the bound sequence
    #[error("Invalid range [{lo}, {hi}] for sequence of length {len}")]
    InvalidRange { lo: usize, hi: usize, len: usize },

    /// Invalid configuration parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input, rejected before any algorithm runs
    Validation,
    /// Operation invoked incorrectly (wrong shape, unknown mode, bad range)
    Usage,
}

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput(format!("{context} contains no values"))
    }

    /// Create an error for a NaN/Inf value in a sequence
    pub fn non_finite_at(index: usize) -> Self {
        Self::NonFinite(format!("sequence element {index} is NaN or infinite"))
    }

    /// Create an error for a NaN/Inf value in a grid
    pub fn non_finite_cell(row: usize, col: usize) -> Self {
        Self::NonFinite(format!("grid cell ({row}, {col}) is NaN or infinite"))
    }

    /// Create an error for calling an operation against the wrong shape
    pub fn wrong_dimension(operation: &'static str, expected: Dimension, actual: Dimension) -> Self {
        Self::WrongDimension {
            operation,
            expected,
            actual,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput(_) | Self::RaggedRows { .. } | Self::NonFinite(_) => {
                ErrorKind::Validation
            }
            Self::WrongDimension { .. }
            | Self::UnknownMode(_)
            | Self::UnknownRangeMaxKind(_)
            | Self::InvalidRange { .. }
            | Self::InvalidParameter(_) => ErrorKind::Usage,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    pub fn is_usage(&self) -> bool {
        self.kind() == ErrorKind::Usage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyInput("sequence contains no values".to_string());
        assert_eq!(err.to_string(), "Empty input: sequence contains no values");

        let err = Error::RaggedRows {
            row: 2,
            expected: 3,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Ragged grid: row 2 has 1 columns, expected 3"
        );

        let err = Error::UnknownMode("fast".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown search mode 'fast', expected one of: auto, brute, binary, hybrid"
        );

        let err = Error::InvalidRange { lo: 4, hi: 2, len: 10 };
        assert_eq!(
            err.to_string(),
            "Invalid range [4, 2] for sequence of length 10"
        );

        let err = Error::wrong_dimension("find_peak_2d", Dimension::TwoD, Dimension::OneD);
        assert_eq!(
            err.to_string(),
            "find_peak_2d requires 2D input, detector holds 1D input"
        );
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_input("grid row 0");
        assert_eq!(err.to_string(), "Empty input: grid row 0 contains no values");

        let err = Error::non_finite_at(7);
        assert_eq!(
            err.to_string(),
            "Non-finite value: sequence element 7 is NaN or infinite"
        );

        let err = Error::non_finite_cell(1, 2);
        assert_eq!(
            err.to_string(),
            "Non-finite value: grid cell (1, 2) is NaN or infinite"
        );
    }

    #[test]
    fn test_error_kind() {
        assert!(Error::empty_input("sequence").is_validation());
        assert!(Error::non_finite_at(0).is_validation());
        assert!(Error::RaggedRows {
            row: 1,
            expected: 2,
            actual: 3
        }
        .is_validation());

        assert!(Error::UnknownMode("x".into()).is_usage());
        assert!(Error::UnknownRangeMaxKind("x".into()).is_usage());
        assert!(Error::InvalidParameter("x".into()).is_usage());
        assert!(Error::InvalidRange { lo: 0, hi: 0, len: 0 }.is_usage());
        assert!(
            Error::wrong_dimension("find_any_peak", Dimension::OneD, Dimension::TwoD).is_usage()
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn check(succeed: bool) -> Result<usize> {
            if succeed {
                Ok(3)
            } else {
                Err(Error::InvalidParameter("threshold must be positive".to_string()))
            }
        }

        assert_eq!(check(true).unwrap(), 3);
        assert!(check(false).is_err());
    }
}
