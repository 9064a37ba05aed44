use crate::error::Result;
use crate::raster::{map_pixels, Raster, WaterMask};

use super::config::validate_water_threshold;

/// Binarize a water-index raster: a pixel is water iff its value is
/// strictly greater than `threshold`.
pub fn threshold_water(index: &Raster<f32>, threshold: f32) -> Result<WaterMask> {
    validate_water_threshold(threshold)?;
    let data = index.as_array();
    let (rows, columns) = index.dim();
    Ok(map_pixels(rows, columns, |row, col| {
        data[[row, col]] > threshold
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Raster<f32> {
        Raster::from_shape_vec(4, 4, (0..16).map(|v| v as f32 * 16.0).collect()).unwrap()
    }

    #[test]
    fn test_strict_inequality() {
        let index = Raster::new(2, 2, 140.0f32);
        let mask = threshold_water(&index, 140.0).unwrap();
        assert_eq!(mask.count_true(), 0);
    }

    #[test]
    fn test_threshold_splits_ramp() {
        let mask = threshold_water(&ramp(), 120.0).unwrap();
        // Values 128..=240 are above 120.
        assert_eq!(mask.count_true(), 8);
        assert!(!mask.get(1, 3).unwrap());
        assert!(mask.get(2, 0).unwrap());
    }

    #[test]
    fn test_monotonic_in_threshold() {
        let index = ramp();
        let mut previous = usize::MAX;
        for t in [-1.0, 0.0, 50.0, 100.0, 128.0, 200.0, 255.0] {
            let count = threshold_water(&index, t).unwrap().count_true();
            assert!(count <= previous, "threshold {t} increased water count");
            previous = count;
        }
    }

    #[test]
    fn test_nan_threshold_rejected() {
        assert!(threshold_water(&ramp(), f32::NAN).is_err());
    }
}
