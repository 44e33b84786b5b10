//! Size-switched peak search

use super::{binary, brute};
use crate::traits::PeakStrategy;
use crate::types::DEFAULT_HYBRID_THRESHOLD;
use peak_core::Numeric;

/// Linear scan for short sequences, binary search for long ones
///
/// Sequences longer than `threshold` use binary search; shorter ones are
/// scanned, where binary search's bookkeeping costs more than it saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hybrid {
    threshold: usize,
}

impl Hybrid {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Whether a sequence of length `len` goes to binary search
    pub fn uses_binary(&self, len: usize) -> bool {
        len > self.threshold
    }
}

impl Default for Hybrid {
    fn default() -> Self {
        Self::new(DEFAULT_HYBRID_THRESHOLD)
    }
}

impl<T: Numeric> PeakStrategy<T> for Hybrid {
    fn name(&self) -> &'static str {
        "hybrid"
    }

    fn find_peak(&self, values: &[T]) -> Option<usize> {
        if self.uses_binary(values.len()) {
            binary::find_peak(values)
        } else {
            brute::find_first_peak(values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hybrid_switches_on_threshold() {
        let hybrid = Hybrid::new(4);
        assert!(!hybrid.uses_binary(4));
        assert!(hybrid.uses_binary(5));
        assert_eq!(Hybrid::default().threshold(), DEFAULT_HYBRID_THRESHOLD);
    }

    #[test]
    fn test_hybrid_matches_delegate() {
        // Two peaks: brute finds the first, binary descends to the second
        let short = [1, 3, 2, 5, 4];
        assert_eq!(
            Hybrid::new(10).find_peak(&short[..]),
            brute::find_first_peak(&short)
        );
        assert_eq!(
            Hybrid::new(2).find_peak(&short[..]),
            binary::find_peak(&short)
        );
    }
}
