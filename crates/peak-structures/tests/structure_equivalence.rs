//! Equivalence tests comparing the segment tree and sparse table
//! with the linear-scan reference implementation

use peak_structures::{LinearScan, RangeMaxKind, RangeMaxQuery, SegmentTree, SparseTable};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate test data with various characteristics
fn generate_test_datasets() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("single", vec![42.0]),
        ("pair", vec![1.0, 2.0]),
        ("ascending", (0..33).map(|x| x as f64).collect()),
        ("descending", (0..33).rev().map(|x| x as f64).collect()),
        ("constant", vec![5.0; 17]),
        ("duplicates", vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 2.0, 2.0]),
        ("random_64", generate_uniform(64, 42)),
        ("random_100", generate_uniform(100, 7)),
        ("random_coarse", generate_coarse(129, 3)),
    ]
}

/// Uniform values in [-100, 100)
fn generate_uniform(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-100.0..100.0)).collect()
}

/// Few distinct values so ties are common
fn generate_coarse(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..4) as f64).collect()
}

#[test]
fn test_all_ranges_match_reference() {
    for (name, data) in generate_test_datasets() {
        let reference = LinearScan::new(data.clone());
        let tree = SegmentTree::new(data.clone());
        let table = SparseTable::new(data.clone());

        for lo in 0..data.len() {
            for hi in lo..data.len() {
                let expected = reference.query(lo, hi).unwrap();
                assert_eq!(
                    tree.query(lo, hi).unwrap(),
                    expected,
                    "segment tree mismatch on {name} [{lo}, {hi}]"
                );
                assert_eq!(
                    table.query(lo, hi).unwrap(),
                    expected,
                    "sparse table mismatch on {name} [{lo}, {hi}]"
                );
            }
        }
    }
}

#[test]
fn test_factory_backends_agree_on_integers() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let data: Vec<i64> = (0..200).map(|_| rng.gen_range(-5..5)).collect();

    let structures: Vec<Box<dyn RangeMaxQuery<i64>>> = [
        RangeMaxKind::SegmentTree,
        RangeMaxKind::SparseTable,
        RangeMaxKind::LinearScan,
    ]
    .into_iter()
    .map(|kind| kind.build(data.clone()))
    .collect();

    for _ in 0..500 {
        let a = rng.gen_range(0..data.len());
        let b = rng.gen_range(0..data.len());
        let (lo, hi) = (a.min(b), a.max(b));
        let expected = structures[2].query(lo, hi).unwrap();
        for s in &structures[..2] {
            assert_eq!(s.query(lo, hi).unwrap(), expected, "{} [{lo}, {hi}]", s.name());
        }
    }
}

#[test]
fn test_invalid_ranges_rejected_by_every_backend() {
    let data = vec![1, 2, 3, 4];
    for kind in [
        RangeMaxKind::SegmentTree,
        RangeMaxKind::SparseTable,
        RangeMaxKind::LinearScan,
    ] {
        let s = kind.build(data.clone());
        let err = s.query(3, 1).unwrap_err();
        assert!(err.is_usage(), "{kind}: {err}");
        assert!(s.query(0, 4).is_err());
    }
}

proptest! {
    #[test]
    fn prop_query_matches_brute_force(
        data in prop::collection::vec(-1000i32..1000, 1..80),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let i = a.index(data.len());
        let j = b.index(data.len());
        let (lo, hi) = (i.min(j), i.max(j));

        let window = &data[lo..=hi];
        let max = *window.iter().max().unwrap();
        let argmax = lo + window.iter().position(|&v| v == max).unwrap();

        let tree = SegmentTree::new(data.clone());
        let table = SparseTable::new(data);
        let from_tree = tree.query(lo, hi).unwrap();
        let from_table = table.query(lo, hi).unwrap();

        prop_assert_eq!(from_tree.value, max);
        prop_assert_eq!(from_tree.index, argmax);
        prop_assert_eq!(from_table, from_tree);
    }
}
