use tracing::debug;

use crate::raster::{map_pixels, WaterMask};

/// Binary erosion with a 3x3 square kernel, applied `iterations` times.
///
/// Each pass consumes the previous pass's output. Out-of-bounds neighbors
/// count as non-water, so the mask also shrinks away from the raster edges.
pub fn erode(mask: &WaterMask, iterations: usize) -> WaterMask {
    let mut current = mask.clone();
    for pass in 0..iterations {
        if current.count_true() == 0 {
            debug!(pass, "Erosion reached an empty mask");
            break;
        }
        current = erode_once(&current);
    }
    current
}

/// A pixel stays true only if ALL pixels in its 3x3 neighborhood are true.
fn erode_once(mask: &WaterMask) -> WaterMask {
    let (h, w) = mask.dim();
    let data = mask.as_array();

    map_pixels(h, w, |row, col| {
        if !data[[row, col]] {
            return false;
        }
        // Out-of-bounds treated as false.
        if row == 0 || col == 0 || row + 1 >= h || col + 1 >= w {
            return false;
        }
        for r in row - 1..=row + 1 {
            for c in col - 1..=col + 1 {
                if !data[[r, c]] {
                    return false;
                }
            }
        }
        true
    })
}
