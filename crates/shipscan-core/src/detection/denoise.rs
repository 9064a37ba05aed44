use crate::consts::MODE_MAJORITY;
use crate::raster::{map_pixels, WaterMask};

/// 3x3 majority (mode) filter over a boolean mask.
///
/// Each interior pixel takes the value held by at least 5 of the 9 cells
/// in its neighborhood. The 1-pixel border ring is copied from the input.
pub fn mode_filter(mask: &WaterMask) -> WaterMask {
    let (rows, columns) = mask.dim();
    if rows < 3 || columns < 3 {
        return mask.clone();
    }

    let data = mask.as_array();
    map_pixels(rows, columns, |row, col| {
        if row == 0 || col == 0 || row == rows - 1 || col == columns - 1 {
            return data[[row, col]];
        }
        let mut votes = 0usize;
        for r in row - 1..=row + 1 {
            for c in col - 1..=col + 1 {
                if data[[r, c]] {
                    votes += 1;
                }
            }
        }
        votes >= MODE_MAJORITY
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Raster;

    #[test]
    fn test_removes_isolated_pixel() {
        let mut mask = Raster::new(5, 5, false);
        mask.set(2, 2, true).unwrap();
        let out = mode_filter(&mask);
        assert_eq!(out.count_true(), 0);
    }

    #[test]
    fn test_fills_isolated_hole() {
        let mut mask = Raster::new(5, 5, true);
        mask.set(2, 2, false).unwrap();
        let out = mode_filter(&mask);
        assert_eq!(out.count_true(), 25);
    }

    #[test]
    fn test_border_ring_copied() {
        let mut mask = Raster::new(4, 4, false);
        mask.set(0, 0, true).unwrap();
        mask.set(3, 1, true).unwrap();
        let out = mode_filter(&mask);
        assert!(out.get(0, 0).unwrap());
        assert!(out.get(3, 1).unwrap());
    }

    #[test]
    fn test_five_of_nine_is_majority() {
        // Top two rows and one cell of the third row of a 3x3 neighborhood.
        let mut mask = Raster::new(3, 3, false);
        for c in 0..3 {
            mask.set(0, c, true).unwrap();
        }
        mask.set(1, 0, true).unwrap();
        mask.set(1, 1, false).unwrap();
        mask.set(2, 2, true).unwrap();
        // 5 true cells around the centre.
        assert!(mode_filter(&mask).get(1, 1).unwrap());

        mask.set(2, 2, false).unwrap();
        assert!(!mode_filter(&mask).get(1, 1).unwrap());
    }

    #[test]
    fn test_tiny_raster_unchanged() {
        let mask = Raster::from_shape_vec(2, 3, vec![true, false, true, false, true, false]).unwrap();
        assert_eq!(mode_filter(&mask), mask);
    }
}
