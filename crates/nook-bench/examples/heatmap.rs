//! Convenience heat map for the reference profile.
//!
//! Demonstrates: config → grid with walls → select sources → aggregate →
//! colour the wall-adjacent cells. Set `RUST_LOG=nook=debug` to see each
//! source run being merged.

use nook_bench::{reference_profile, render_deciles};
use nook_field::{Aggregator, FieldConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nook=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== nook convenience heat map ===\n");

    let config = FieldConfig::default();
    let profile = reference_profile(42);
    let aggregator = Aggregator::with_config(&config).unwrap();

    let field = aggregator
        .aggregate(&profile.grid, profile.sources.as_slice())
        .unwrap();

    // --- Summary ---
    println!(
        "grid {}x{}, {} walls, {} sources",
        profile.grid.rows(),
        profile.grid.cols(),
        profile.grid.wall_count(),
        profile.sources.len()
    );
    for (i, s) in profile.sources.iter().enumerate() {
        println!("  source {i}: {s}");
    }
    println!(
        "{} wall-adjacent cells, max distance {}\n",
        field.len(),
        field.max_distance()
    );

    // --- Map ---
    // Digits are the normalised distance decile: 0 close, 9 far.
    print!("{}", render_deciles(&profile.grid, &field));

    // --- Colours ---
    println!("\nfirst 10 colours:");
    for (coord, rgb) in field.colors().take(10) {
        println!(
            "  {coord}: distance {} -> {}",
            field.get(coord).unwrap_or_default(),
            rgb.to_hex()
        );
    }
}
