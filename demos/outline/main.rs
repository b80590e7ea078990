//! Prints the cutting list of a surveyed outline.
//!
//! ```text
//! cargo run --example outline                                  # Corsica, 915 mm, 20 mm stock
//! cargo run --example outline -- points.json 600 15            # own survey
//! RUST_LOG=mitrecut=trace cargo run --example outline          # per-vertex log
//! ```
//!
//! The point file is a JSON list of `[x, y]` pairs in image coordinates
//! (y grows downward), as saved by a point editor.

use std::error::Error;
use std::path::PathBuf;

use mitrecut::operations::NormalizeConfig;
use mitrecut::{Point2, ProfileConfig, ProfileCut};

/// Blade allowance per cut, in mm.
const SAW_KERF: f64 = 2.0;

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for mitrecut.
    // Override with RUST_LOG env var (e.g. RUST_LOG=mitrecut=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("mitrecut=info".parse()?);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let path = args.next().map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/outline/corse.json"),
        PathBuf::from,
    );
    let width: f64 = args.next().map_or(Ok(915.0), |s| s.parse::<f64>())?;
    let thickness: f64 = args.next().map_or(Ok(20.0), |s| s.parse::<f64>())?;

    let pairs: Vec<(f64, f64)> = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    let raw: Vec<Point2> = pairs.into_iter().map(|(x, y)| Point2::new(x, y)).collect();

    let config = ProfileConfig::default()
        .normalize(NormalizeConfig::with_width(width).flip_vertical(true))
        .thickness(thickness)
        .saw_kerf(SAW_KERF);
    let report = ProfileCut::new(config).execute(&raw)?;

    println!(" # length angle   cut");
    for segment in &report.segments {
        println!("{segment}");
    }
    println!();
    println!(
        "dimensions:     {:.1} x {:.1} mm",
        report.extent.width(),
        report.extent.height()
    );
    println!("outline length: {:.0} mm", report.total_length);
    println!(
        "profile length: {:.0} mm (thickness: {thickness} mm)",
        report.profile_length
    );
    println!(
        "stock length:   {:.0} mm ({SAW_KERF} mm per cut)",
        report.stock_length()
    );
    Ok(())
}
