//! Numeric value trait for peak detection
//!
//! Peak logic only needs ordering and equality, but the validator also has to
//! reject NaN and infinities for floating-point inputs. `Numeric` bundles those
//! requirements so every algorithm can stay generic over the element type.

use num_traits::Num;
use std::fmt::Debug;

/// Base trait for values stored in sequences and grids
pub trait Numeric: Num + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;
}

// =============================================================================
// Numeric implementations for concrete types
// =============================================================================

impl Numeric for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Numeric for f32 {
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

macro_rules! impl_numeric_integer {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn is_finite(&self) -> bool {
                    true // Integers are always finite
                }
            }
        )*
    };
}

impl_numeric_integer!(i32, u32, i64, u64);
