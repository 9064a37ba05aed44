use tracing::{debug, info};

use crate::error::Result;
use crate::raster::{CandidateMap, Raster, WaterMask};

use super::boxes::{place_boxes, BoundingBox};
use super::config::DetectionConfig;
use super::denoise::mode_filter;
use super::directional::detect_candidates;
use super::morphology::erode;
use super::stats::{index_stats, IndexStats};
use super::threshold::threshold_water;

/// Every intermediate product of one detection run.
#[derive(Clone, Debug)]
pub struct ShipDetection {
    pub stats: IndexStats,
    /// Thresholded index.
    pub water_mask: WaterMask,
    /// Water mask after the 3x3 mode filter.
    pub denoised_mask: WaterMask,
    /// Denoised mask after erosion; the gate for candidate detection.
    pub eroded_mask: WaterMask,
    pub candidates: CandidateMap,
    /// Boxes in the order they were emitted.
    pub boxes: Vec<BoundingBox>,
}

/// Stage reported to progress callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectionStage {
    Threshold,
    Denoise,
    Erode,
    Detect,
    PlaceBoxes,
}

impl std::fmt::Display for DetectionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Threshold => write!(f, "Thresholding"),
            Self::Denoise => write!(f, "Denoising"),
            Self::Erode => write!(f, "Eroding"),
            Self::Detect => write!(f, "Detecting"),
            Self::PlaceBoxes => write!(f, "Placing boxes"),
        }
    }
}

/// Run the full pipeline:
/// threshold -> mode filter -> erosion -> directional detection -> box placement.
pub fn detect_ships(index: &Raster<f32>, config: &DetectionConfig) -> Result<ShipDetection> {
    detect_ships_with_progress(index, config, |_| {})
}

/// Same as [`detect_ships`], calling `on_stage` as each stage starts.
pub fn detect_ships_with_progress<F>(
    index: &Raster<f32>,
    config: &DetectionConfig,
    mut on_stage: F,
) -> Result<ShipDetection>
where
    F: FnMut(DetectionStage),
{
    config.validate()?;

    let stats = index_stats(index);
    info!(
        rows = stats.rows,
        columns = stats.columns,
        min = stats.min,
        max = stats.max,
        mean = stats.mean,
        "Water index loaded"
    );

    on_stage(DetectionStage::Threshold);
    let water_mask = threshold_water(index, config.water_threshold)?;
    debug!(
        threshold = config.water_threshold,
        water = water_mask.count_true(),
        "Water mask thresholded"
    );

    on_stage(DetectionStage::Denoise);
    let denoised_mask = mode_filter(&water_mask);
    debug!(water = denoised_mask.count_true(), "Mode filter applied");

    on_stage(DetectionStage::Erode);
    let eroded_mask = erode(&denoised_mask, config.erosion_iterations);
    debug!(
        iterations = config.erosion_iterations,
        water = eroded_mask.count_true(),
        "Water mask eroded"
    );

    on_stage(DetectionStage::Detect);
    let candidates = detect_candidates(index, &eroded_mask, config.ship_threshold)?;
    debug!(candidates = candidates.count_true(), "Candidate pixels flagged");

    on_stage(DetectionStage::PlaceBoxes);
    let boxes = place_boxes(&candidates, config.box_side)?;
    info!(
        candidates = candidates.count_true(),
        boxes = boxes.len(),
        "Ship detection complete"
    );

    Ok(ShipDetection {
        stats,
        water_mask,
        denoised_mask,
        eroded_mask,
        candidates,
        boxes,
    })
}
