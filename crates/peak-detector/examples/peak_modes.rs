//! Peak detection walkthrough
//!
//! Run with `RUST_LOG=debug` to see detector construction and lazy builds.

use anyhow::Result;
use peak_detector::{PeakDetector, RangeMaxKind, SearchMode};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Peak Detection Examples ===\n");

    // Example 1: 1D detection
    println!("1. One-dimensional sequence");
    let data = vec![1.0, 3.0, 2.0, 5.0, 4.0];
    let detector = PeakDetector::new(data.clone())?;
    let peak = detector.find_any_peak()?;
    println!("  Data: {data:?}");
    println!(
        "  Any peak ({}): index {peak}, value {:?}",
        detector.strategy_name(),
        detector.peak_value(peak)
    );
    println!("  All peaks: {:?}", detector.find_all_peaks()?);
    println!("  Peak count: {}", detector.count_peaks()?);

    // Example 2: plateaus collapse to one peak
    println!("\n2. Plateau");
    let plateau = vec![1, 5, 5, 5, 2];
    let detector = PeakDetector::new(plateau.clone())?;
    println!("  Data: {plateau:?}");
    println!("  All peaks: {:?}", detector.find_all_peaks()?);

    // Example 3: 2D detection
    println!("\n3. Two-dimensional grid");
    let grid = vec![vec![1, 2, 3], vec![4, 9, 5], vec![6, 7, 8]];
    let detector = PeakDetector::builder()
        .range_max(RangeMaxKind::SegmentTree)
        .build::<i32, _>(grid.clone())?;
    let position = detector.find_peak_2d()?;
    for row in &grid {
        println!("  {row:?}");
    }
    println!(
        "  Peak at {position:?}, value {:?}",
        detector.peak_value_2d(position)
    );

    // Example 4: every mode on a unimodal sequence
    println!("\n4. Search modes");
    let data = vec![1, 2, 3, 4, 5, 4, 3, 2, 1];
    println!("  Data: {data:?}");
    for mode in [
        SearchMode::Auto,
        SearchMode::Brute,
        SearchMode::Binary,
        SearchMode::Hybrid,
    ] {
        let detector = PeakDetector::builder().mode(mode).build(data.clone())?;
        println!(
            "  {:<6} -> peak at index {}",
            mode.to_string(),
            detector.find_any_peak()?
        );
    }

    // Example 5: errors
    println!("\n5. Errors");
    let empty: Vec<f64> = Vec::new();
    if let Err(e) = PeakDetector::new(empty) {
        println!("  Empty input: {e} ({:?})", e.kind());
    }
    if let Err(e) = PeakDetector::with_mode(vec![1.0, 2.0], "fastest") {
        println!("  Bad mode: {e} ({:?})", e.kind());
    }
    let sequence = PeakDetector::new(vec![1.0, 2.0])?;
    if let Err(e) = sequence.find_peak_2d() {
        println!("  Wrong shape: {e} ({:?})", e.kind());
    }

    Ok(())
}
