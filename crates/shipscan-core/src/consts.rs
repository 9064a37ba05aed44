/// Minimum pixel count (rows*columns) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Default water-index threshold, on the 0-255 scale of 8-bit index rasters.
pub const DEFAULT_WATER_THRESHOLD: f32 = 140.0;

/// Default magnitude of the directional response that marks a ship pixel.
pub const DEFAULT_SHIP_THRESHOLD: f32 = 25.0;

/// Default number of 3x3 erosion passes applied to the water mask.
pub const DEFAULT_EROSION_ITERATIONS: usize = 5;

/// Default side length of a ship bounding box, in pixels.
pub const DEFAULT_BOX_SIDE: usize = 16;

/// Number of `true` samples a 3x3 neighborhood needs for a `true` majority.
pub const MODE_MAJORITY: usize = 5;

/// Outline color for ship boxes in the RGB overlay.
pub const OVERLAY_BOX_COLOR: [u8; 3] = [255, 0, 0];
