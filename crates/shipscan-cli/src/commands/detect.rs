use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use shipscan_core::detection::{detect_ships_with_progress, DetectionConfig, ShipDetection};
use shipscan_core::io::{
    check_rgb_dims, load_index_raster, load_rgb, result_path, save_mask_png, save_overlay_png,
    write_report,
};
use tracing::info;

use crate::summary::{print_detection_config, print_detection_result};

#[derive(Args)]
pub struct DetectArgs {
    /// Water-index raster (band 1 read as 0-255)
    pub index: PathBuf,

    /// True-color image to draw ship boxes on (same size as the index)
    #[arg(long)]
    pub rgb: Option<PathBuf>,

    /// Detection config file (TOML); cannot be combined with the threshold flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Index values above this are water
    #[arg(long, default_value = "140.0", conflicts_with = "config")]
    pub water_threshold: f32,

    /// Minimum directional response magnitude for a ship pixel
    #[arg(long, default_value = "25.0", conflicts_with = "config")]
    pub ship_threshold: f32,

    /// Number of 3x3 erosion passes applied to the water mask
    #[arg(long, default_value = "5", conflicts_with = "config")]
    pub erosion: usize,

    /// Bounding box side in pixels
    #[arg(long, default_value = "16", conflicts_with = "config")]
    pub box_side: usize,

    /// Directory for masks, overlay and report
    #[arg(short, long, default_value = "results")]
    pub output: PathBuf,

    /// Skip writing the intermediate mask images
    #[arg(long)]
    pub no_masks: bool,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid detection config")?
    } else {
        DetectionConfig {
            water_threshold: args.water_threshold,
            ship_threshold: args.ship_threshold,
            erosion_iterations: args.erosion,
            box_side: args.box_side,
        }
    };

    print_detection_config(&config, &args.index, &args.output);

    let index = load_index_raster(&args.index)
        .with_context(|| format!("Failed to load water index {}", args.index.display()))?;
    let rgb = match args.rgb {
        Some(ref path) => {
            let rgb = load_rgb(path)
                .with_context(|| format!("Failed to load RGB image {}", path.display()))?;
            check_rgb_dims(&index, &rgb).context("RGB image does not match the water index")?;
            Some(rgb)
        }
        None => None,
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let detection = detect_ships_with_progress(&index, &config, |stage| {
        pb.set_message(stage.to_string());
    })?;
    pb.finish_and_clear();

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    if !args.no_masks {
        save_masks(&detection, &config, args)?;
    }

    if let Some(ref rgb) = rgb {
        let path = result_path(&args.output, &config, "ships_in_rgb");
        save_overlay_png(rgb, &detection.boxes, &path)
            .with_context(|| format!("Failed to write overlay {}", path.display()))?;
    }

    let report_path = args.output.join("detections.toml");
    write_report(&detection, &config, &report_path)
        .with_context(|| format!("Failed to write report {}", report_path.display()))?;

    info!(output = %args.output.display(), boxes = detection.boxes.len(), "Results written");
    print_detection_result(&detection);
    println!("Results saved to {}", args.output.display());
    Ok(())
}

fn save_masks(detection: &ShipDetection, config: &DetectionConfig, args: &DetectArgs) -> Result<()> {
    let stages = [
        ("threshold_ndwi", &detection.water_mask),
        ("mode_threshold_ndwi", &detection.denoised_mask),
        ("eroded_mode_threshold_ndwi", &detection.eroded_mask),
        ("ships_in_ndwi", &detection.candidates),
    ];
    for (stage, mask) in stages {
        let path = result_path(&args.output, config, stage);
        save_mask_png(mask, &path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        detect: DetectArgs,
    }

    #[test]
    fn test_config_file_alone_is_accepted() {
        let cli = TestCli::try_parse_from(["detect", "ndwi.png", "--config", "run.toml"]).unwrap();
        assert_eq!(cli.detect.config, Some(PathBuf::from("run.toml")));
        assert_eq!(cli.detect.box_side, 16);
    }

    #[test]
    fn test_config_file_conflicts_with_threshold_flags() {
        for flag in [
            ["--box-side", "8"],
            ["--erosion", "2"],
            ["--water-threshold", "120"],
            ["--ship-threshold", "30"],
        ] {
            let args = ["detect", "ndwi.png", "--config", "run.toml", flag[0], flag[1]];
            let err = TestCli::try_parse_from(args).err().unwrap();
            assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        }
    }

    #[test]
    fn test_threshold_flags_without_config() {
        let cli = TestCli::try_parse_from(["detect", "ndwi.png", "--box-side", "8"]).unwrap();
        assert_eq!(cli.detect.box_side, 8);
        assert!(cli.detect.config.is_none());
    }
}
