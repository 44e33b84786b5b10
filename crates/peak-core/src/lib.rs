//! Core types for local-maximum (peak) detection
//!
//! This crate provides the foundation shared by the other peakfinder crates:
//!
//! - **Errors**: one [`Error`] enum split into validation and usage failures
//! - **Values**: the [`Numeric`] trait implemented for the common float and
//!   integer types
//! - **Inputs**: the validated, row-major [`Grid`] and the [`Dimension`] tag
//! - **Validation**: fail-fast checks run before any algorithm executes
//! - **Compression**: the duplicate-collapsing transform that turns plateaus
//!   into single elements so peak comparisons are always strict
//!
//! # Example
//!
//! ```rust
//! use peak_core::{validate_sequence, Compressed};
//!
//! let data = vec![1.0, 5.0, 5.0, 5.0, 2.0];
//! validate_sequence(&data).unwrap();
//!
//! let compressed = Compressed::new(&data);
//! assert_eq!(compressed.values(), &[1.0, 5.0, 2.0]);
//! assert_eq!(compressed.expand(&[1]), vec![3]);
//! ```

pub mod compression;
pub mod error;
pub mod numeric;
pub mod types;
pub mod validation;

// Re-export core types
pub use compression::{compress, expand, Compressed};
pub use error::{Error, ErrorKind, Result};
pub use numeric::Numeric;
pub use types::{Dimension, Grid};
pub use validation::{validate_grid, validate_sequence};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
