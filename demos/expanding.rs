//! Expanding and seasonal expanding statistics example.
//!
//! Run with: cargo run --example expanding

use window_ops::prelude::*;

fn fmt(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.2}")
    }
}

fn main() {
    println!("=== Expanding Window Statistics Example ===\n");

    let series: Vec<f64> = vec![
        10.0, 12.0, 15.0, 11.0, 13.0, 18.0, 14.0, 16.0, 20.0, 17.0, 19.0, 22.0,
    ];

    println!("Original series ({} observations):", series.len());
    println!("{:?}\n", series);

    // 1. Expanding statistics
    println!("--- Expanding Statistics ---");

    let e_mean = expanding_mean(&series).unwrap();
    let e_std = expanding_std(&series).unwrap();
    let e_min = expanding_min(&series).unwrap();
    let e_max = expanding_max(&series).unwrap();

    println!(
        "\n{:>5} {:>8} {:>10} {:>10} {:>10} {:>10}",
        "Index", "Value", "Cum Mean", "Cum Std", "Cum Min", "Cum Max"
    );
    println!("{:-<58}", "");

    for i in 0..series.len() {
        println!(
            "{:>5} {:>8.1} {:>10} {:>10} {:>10} {:>10}",
            i,
            series[i],
            fmt(e_mean[i]),
            fmt(e_std[i]),
            fmt(e_min[i]),
            fmt(e_max[i]),
        );
    }

    println!("\nNote: cumulative std is NaN at index 0 (sample std needs two values).");

    // 2. Seasonal expanding statistics
    println!("\n--- Seasonal Expanding Mean (season_length = 4) ---");
    println!("\nEach position accumulates only over the same phase of the cycle:");

    let season = 4;
    let s_mean = seasonal_expanding_mean(&series, season).unwrap();

    println!(
        "\n{:>5} {:>6} {:>8} {:>14}",
        "Index", "Phase", "Value", "Seasonal Mean"
    );
    println!("{:-<38}", "");

    for i in 0..series.len() {
        println!(
            "{:>5} {:>6} {:>8.1} {:>14}",
            i,
            i % season,
            series[i],
            fmt(s_mean[i]),
        );
    }

    // 3. Missing values
    println!("\n--- Missing Values (NaN) ---");

    let with_gaps = vec![10.0, f64::NAN, 14.0, f64::NAN, 18.0];
    let gap_mean = expanding_mean(&with_gaps).unwrap();

    println!("\nNaN marks a missing observation; it is skipped, not propagated:");
    println!(
        "{:>5} {:>8} {:>10}",
        "Index", "Value", "Cum Mean"
    );
    println!("{:-<26}", "");
    for i in 0..with_gaps.len() {
        println!(
            "{:>5} {:>8} {:>10}",
            i,
            fmt(with_gaps[i]),
            fmt(gap_mean[i]),
        );
    }

    // 4. Lagging a series
    println!("\n--- Shift (Lag) ---");

    let lag_2 = shift_array(&series, 2);
    println!("\nshift_array by 2 positions:");
    println!(
        "{:>5} {:>8} {:>10}",
        "Index", "Value", "Lag(2)"
    );
    println!("{:-<26}", "");
    for i in 0..6 {
        println!("{:>5} {:>8.1} {:>10}", i, series[i], fmt(lag_2[i]));
    }

    // 5. Reusing an output buffer
    println!("\n--- Buffer Reuse ---");

    let mut buffer = vec![f64::NAN; series.len()];
    window_ops::expanding::expanding_max_into(&series, &mut buffer).unwrap();
    println!(
        "\nexpanding_max_into wrote {} values into a caller-owned buffer.",
        buffer.len()
    );

    println!("\n=== Expanding Window Statistics Example Complete ===");
}
