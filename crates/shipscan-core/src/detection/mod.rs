pub mod boxes;
pub mod config;
pub mod denoise;
pub mod directional;
pub mod morphology;
pub mod pipeline;
pub mod stats;
pub mod threshold;

pub use boxes::{place_boxes, BoundingBox};
pub use config::DetectionConfig;
pub use pipeline::{detect_ships, detect_ships_with_progress, DetectionStage, ShipDetection};
