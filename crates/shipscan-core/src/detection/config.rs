use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BOX_SIDE, DEFAULT_EROSION_ITERATIONS, DEFAULT_SHIP_THRESHOLD, DEFAULT_WATER_THRESHOLD,
};
use crate::error::{Result, ShipScanError};

/// Configuration for ship detection over one water-index raster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Index values strictly above this are water.
    #[serde(default = "default_water_threshold")]
    pub water_threshold: f32,
    /// Minimum magnitude of the most negative directional response.
    #[serde(default = "default_ship_threshold")]
    pub ship_threshold: f32,
    /// Number of 3x3 erosion passes applied to the denoised water mask.
    #[serde(default = "default_erosion_iterations")]
    pub erosion_iterations: usize,
    /// Side of each emitted bounding box, in pixels.
    #[serde(default = "default_box_side")]
    pub box_side: usize,
}

fn default_water_threshold() -> f32 {
    DEFAULT_WATER_THRESHOLD
}
fn default_ship_threshold() -> f32 {
    DEFAULT_SHIP_THRESHOLD
}
fn default_erosion_iterations() -> usize {
    DEFAULT_EROSION_ITERATIONS
}
fn default_box_side() -> usize {
    DEFAULT_BOX_SIDE
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            water_threshold: DEFAULT_WATER_THRESHOLD,
            ship_threshold: DEFAULT_SHIP_THRESHOLD,
            erosion_iterations: DEFAULT_EROSION_ITERATIONS,
            box_side: DEFAULT_BOX_SIDE,
        }
    }
}

impl DetectionConfig {
    /// Reject configurations no stage can run with.
    pub fn validate(&self) -> Result<()> {
        validate_water_threshold(self.water_threshold)?;
        validate_ship_threshold(self.ship_threshold)?;
        validate_box_side(self.box_side)?;
        Ok(())
    }
}

pub(crate) fn validate_water_threshold(threshold: f32) -> Result<()> {
    if !threshold.is_finite() {
        return Err(ShipScanError::InvalidConfiguration(format!(
            "water_threshold must be finite, got {threshold}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_ship_threshold(threshold: f32) -> Result<()> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(ShipScanError::InvalidConfiguration(format!(
            "ship_threshold must be a positive number, got {threshold}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_box_side(side: usize) -> Result<()> {
    if side == 0 {
        return Err(ShipScanError::InvalidConfiguration(
            "box_side must be at least 1 pixel".into(),
        ));
    }
    Ok(())
}
