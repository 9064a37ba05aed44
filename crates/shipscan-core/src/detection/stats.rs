use serde::{Deserialize, Serialize};

use crate::raster::Raster;

/// Summary of a water-index raster, logged before thresholding so that the
/// configured threshold can be checked against the value range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub rows: usize,
    pub columns: usize,
    pub min: f32,
    pub max: f32,
    pub mean: f64,
}

/// Compute min, max and mean of a raster. Empty rasters report zeros.
pub fn index_stats(index: &Raster<f32>) -> IndexStats {
    let (rows, columns) = index.dim();
    let data = index.as_array();
    if data.is_empty() {
        return IndexStats {
            rows,
            columns,
            min: 0.0,
            max: 0.0,
            mean: 0.0,
        };
    }

    let min = data.iter().copied().fold(f32::INFINITY, f32::min);
    let max = data.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let sum: f64 = data.iter().map(|&v| v as f64).sum();

    IndexStats {
        rows,
        columns,
        min,
        max,
        mean: sum / data.len() as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_stats() {
        let r = Raster::from_shape_vec(2, 2, vec![0.0, 50.0, 150.0, 200.0]).unwrap();
        let s = index_stats(&r);
        assert_eq!((s.rows, s.columns), (2, 2));
        assert_eq!(s.min, 0.0);
        assert_eq!(s.max, 200.0);
        assert_relative_eq!(s.mean, 100.0);
    }

    #[test]
    fn test_empty() {
        let r: Raster<f32> = Raster::zeros(0, 4);
        assert_eq!(index_stats(&r).mean, 0.0);
    }
}
