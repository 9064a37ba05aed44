use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::detection::stats::IndexStats;
use crate::detection::{BoundingBox, DetectionConfig, ShipDetection};
use crate::error::Result;

/// Serializable record of a detection run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    pub config: DetectionConfig,
    pub stats: IndexStats,
    pub counts: PixelCounts,
    pub boxes: Vec<BoundingBox>,
}

/// Number of `true` pixels after each stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelCounts {
    pub water: usize,
    pub denoised: usize,
    pub eroded: usize,
    pub candidates: usize,
}

impl DetectionReport {
    pub fn new(detection: &ShipDetection, config: &DetectionConfig) -> Self {
        Self {
            config: config.clone(),
            stats: detection.stats.clone(),
            counts: PixelCounts {
                water: detection.water_mask.count_true(),
                denoised: detection.denoised_mask.count_true(),
                eroded: detection.eroded_mask.count_true(),
                candidates: detection.candidates.count_true(),
            },
            boxes: detection.boxes.clone(),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Write the detection report as TOML.
pub fn write_report(detection: &ShipDetection, config: &DetectionConfig, path: &Path) -> Result<()> {
    let report = DetectionReport::new(detection, config);
    std::fs::write(path, report.to_toml()?)?;
    Ok(())
}

/// File name prefix encoding the thresholds of a run, e.g. `tn1400_ts025_`.
///
/// Whole ship thresholds are zero-padded to three digits; fractional ones
/// keep their decimal point (`ts12.5`).
pub fn result_prefix(config: &DetectionConfig) -> String {
    let water = format!("{:?}", config.water_threshold).replace('.', "");
    let ship = if config.ship_threshold.fract() == 0.0 {
        format!("{:03}", config.ship_threshold as i64)
    } else {
        format!("{:0>3}", config.ship_threshold)
    };
    format!("tn{water}_ts{ship}_")
}

/// Path of one stage's output image inside `dir`.
pub fn result_path(dir: &Path, config: &DetectionConfig, stage: &str) -> PathBuf {
    dir.join(format!("{}{stage}.png", result_prefix(config)))
}
