use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use shipscan_core::detection::stats::index_stats;
use shipscan_core::detection::threshold::threshold_water;
use shipscan_core::io::load_index_raster;

#[derive(Args)]
pub struct InfoArgs {
    /// Water-index raster
    pub file: PathBuf,

    /// Also report the water fraction at this threshold
    #[arg(long)]
    pub threshold: Option<f32>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let index = load_index_raster(&args.file)
        .with_context(|| format!("Failed to load water index {}", args.file.display()))?;
    let stats = index_stats(&index);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {} rows x {} columns", stats.rows, stats.columns);
    println!("Min:         {}", stats.min);
    println!("Max:         {}", stats.max);
    println!("Mean:        {:.3}", stats.mean);

    if let Some(threshold) = args.threshold {
        let mask = threshold_water(&index, threshold)?;
        let total = (stats.rows * stats.columns).max(1);
        println!(
            "Water:       {:.1}% above {}",
            mask.count_true() as f64 * 100.0 / total as f64,
            threshold
        );
    }

    Ok(())
}
