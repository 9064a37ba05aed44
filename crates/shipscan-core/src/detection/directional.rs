use crate::error::Result;
use crate::raster::{map_pixels, CandidateMap, Raster, WaterMask};

use super::config::validate_ship_threshold;

/// Line-detection kernels. Each sums to zero, with weight 2 along the line
/// through the centre and -1 on the remaining six cells.
pub const LINE_KERNELS: [[[f32; 3]; 3]; 4] = [
    // horizontal
    [[-1.0, -1.0, -1.0], [2.0, 2.0, 2.0], [-1.0, -1.0, -1.0]],
    // +45 degrees
    [[-1.0, -1.0, 2.0], [-1.0, 2.0, -1.0], [2.0, -1.0, -1.0]],
    // vertical
    [[-1.0, 2.0, -1.0], [-1.0, 2.0, -1.0], [-1.0, 2.0, -1.0]],
    // -45 degrees
    [[2.0, -1.0, -1.0], [-1.0, 2.0, -1.0], [-1.0, -1.0, 2.0]],
];

/// Flag pixels whose strongest dark-line response reaches `ship_threshold`.
///
/// Only interior pixels inside the eroded water mask are evaluated. For each,
/// the 3x3 neighborhood of the index is correlated with the four line
/// kernels; dark objects on bright water drive at least one sum strongly
/// negative, so the pixel is a candidate iff `min(sums) <= -ship_threshold`.
pub fn detect_candidates(
    index: &Raster<f32>,
    eroded: &WaterMask,
    ship_threshold: f32,
) -> Result<CandidateMap> {
    validate_ship_threshold(ship_threshold)?;
    index.ensure_same_dims(eroded)?;

    let (rows, columns) = index.dim();
    let data = index.as_array();
    let gate = eroded.as_array();

    Ok(map_pixels(rows, columns, |row, col| {
        if row == 0 || col == 0 || row + 1 >= rows || col + 1 >= columns {
            return false;
        }
        if !gate[[row, col]] {
            return false;
        }

        let mut neighborhood = [[0.0f32; 3]; 3];
        for (dr, line) in neighborhood.iter_mut().enumerate() {
            for (dc, v) in line.iter_mut().enumerate() {
                *v = data[[row + dr - 1, col + dc - 1]];
            }
        }
        min_line_response(&neighborhood) <= -ship_threshold
    }))
}

/// Minimum of the four kernel responses over a 3x3 neighborhood.
pub fn min_line_response(neighborhood: &[[f32; 3]; 3]) -> f32 {
    LINE_KERNELS
        .iter()
        .map(|kernel| {
            kernel
                .iter()
                .flatten()
                .zip(neighborhood.iter().flatten())
                .map(|(k, v)| k * v)
                .sum::<f32>()
        })
        .fold(f32::INFINITY, f32::min)
}
