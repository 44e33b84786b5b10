//! Property tests: every strategy finds a valid peak, on raw and
//! compressed sequences, and the 2D search always lands on a 2D peak

use peak_core::{Compressed, Grid};
use peak_search::{
    find_peak_2d, find_peak_2d_scan, is_peak, is_peak_2d, BinarySearch, BruteForce, Hybrid,
    PeakStrategy, Strategy,
};
use peak_structures::{ColumnIndex, RangeMaxKind};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn all_strategies() -> Vec<Strategy> {
    vec![
        Strategy::Brute(BruteForce),
        Strategy::Binary(BinarySearch),
        Strategy::Hybrid(Hybrid::new(4)),
        Strategy::Hybrid(Hybrid::default()),
    ]
}

#[test]
fn test_large_random_sequences() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for len in [1usize, 2, 3, 63, 64, 65, 1000, 4097] {
        let values: Vec<f64> = (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect();
        for strategy in all_strategies() {
            let peak = strategy.find_peak(&values[..]).unwrap();
            assert!(
                is_peak(&values, peak),
                "{} returned non-peak {peak} for len {len}",
                PeakStrategy::<f64>::name(&strategy)
            );
        }
    }
}

#[test]
fn test_monotone_sequences() {
    let ascending: Vec<i32> = (0..500).collect();
    let descending: Vec<i32> = (0..500).rev().collect();
    for strategy in all_strategies() {
        assert_eq!(strategy.find_peak(&ascending[..]), Some(499));
        assert_eq!(strategy.find_peak(&descending[..]), Some(0));
    }
}

#[test]
fn test_2d_backends_agree_on_random_grids() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for (rows, cols) in [(1, 1), (1, 9), (9, 1), (5, 5), (17, 33), (64, 3)] {
        let data: Vec<Vec<i32>> = (0..rows)
            .map(|_| (0..cols).map(|_| rng.gen_range(0..10)).collect())
            .collect();
        let grid = Grid::from_rows(&data).unwrap();

        let expected = find_peak_2d_scan(&grid).unwrap();
        assert!(is_peak_2d(&grid, expected.0, expected.1));

        for kind in [
            RangeMaxKind::SegmentTree,
            RangeMaxKind::SparseTable,
            RangeMaxKind::LinearScan,
        ] {
            let index = ColumnIndex::new(&grid, kind);
            let found = find_peak_2d(&grid, |c| index.column_max(&grid, c)).unwrap();
            // Same column maxima (lowest row on ties), so the same path
            assert_eq!(found, expected, "{kind} on {rows}x{cols}");
        }
    }
}

proptest! {
    #[test]
    fn prop_strategies_find_valid_peak(values in prop::collection::vec(-20i32..20, 1..200)) {
        for strategy in all_strategies() {
            let raw = strategy.find_peak(&values[..]).unwrap();
            prop_assert!(is_peak(&values, raw));

            let compressed = Compressed::new(&values);
            let k = strategy.find_peak(compressed.values()).unwrap();
            let original = compressed.original_index(k).unwrap();
            prop_assert!(is_peak(&values, original));
        }
    }

    #[test]
    fn prop_all_peaks_ascending_and_valid(values in prop::collection::vec(0u32..5, 1..120)) {
        let compressed = Compressed::new(&values);
        let peaks = compressed.expand(&BruteForce.find_all_peaks(compressed.values()));
        prop_assert!(!peaks.is_empty());
        for w in peaks.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
        for &p in &peaks {
            prop_assert!(is_peak(&values, p));
        }
    }

    #[test]
    fn prop_2d_peak_is_valid(
        rows in 1usize..12,
        cols in 1usize..12,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let data: Vec<Vec<i64>> = (0..rows)
            .map(|_| (0..cols).map(|_| rng.gen_range(-3..3)).collect())
            .collect();
        let grid = Grid::from_rows(&data).unwrap();
        let (r, c) = find_peak_2d_scan(&grid).unwrap();
        prop_assert!(is_peak_2d(&grid, r, c));
    }
}
