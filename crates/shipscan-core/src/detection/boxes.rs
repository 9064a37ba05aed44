use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::raster::{CandidateMap, Raster};

use super::config::validate_box_side;

/// Axis-aligned square marking one detected ship.
///
/// `side` is the nominal size; `[row_start, row_end) x [col_start, col_end)`
/// is the window actually claimed, which is truncated at raster edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
    pub side: usize,
}

impl BoundingBox {
    /// Window of nominal side `side` around `(row, col)`, clamped to a
    /// `rows x columns` raster.
    ///
    /// The window spans `ceil(side/2)` pixels before the centre and
    /// `floor(side/2)` after it (exclusive end).
    pub fn centered(row: usize, col: usize, side: usize, rows: usize, columns: usize) -> Self {
        let before = side.div_ceil(2);
        let after = side / 2;
        Self {
            row_start: row.saturating_sub(before),
            row_end: (row + after).min(rows),
            col_start: col.saturating_sub(before),
            col_end: (col + after).min(columns),
            side,
        }
    }

    pub fn height(&self) -> usize {
        self.row_end - self.row_start
    }

    pub fn width(&self) -> usize {
        self.col_end - self.col_start
    }

    /// Whether the claimed windows share at least one cell.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.row_start < other.row_end
            && other.row_start < self.row_end
            && self.col_start < other.col_end
            && other.col_start < self.col_end
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.row_start..self.row_end).contains(&row) && (self.col_start..self.col_end).contains(&col)
    }
}

/// Collapse candidate pixels into non-overlapping boxes.
///
/// Candidates are visited in row-major order. A candidate emits a box only
/// if its whole window is still uncovered; the window is then marked
/// covered. Order matters: the first candidate of a cluster wins.
pub fn place_boxes(candidates: &CandidateMap, side: usize) -> Result<Vec<BoundingBox>> {
    validate_box_side(side)?;
    let (rows, columns) = candidates.dim();
    let coverage = Raster::new(rows, columns, false);

    let (boxes, _) = candidates.true_positions().try_fold(
        (Vec::new(), coverage),
        |(mut boxes, mut coverage), (row, col)| -> Result<_> {
            let bbox = BoundingBox::centered(row, col, side, rows, columns);
            if is_uncovered(&coverage, &bbox)? {
                mark_covered(&mut coverage, &bbox)?;
                boxes.push(bbox);
            }
            Ok((boxes, coverage))
        },
    )?;

    Ok(boxes)
}

fn is_uncovered(coverage: &Raster<bool>, bbox: &BoundingBox) -> Result<bool> {
    let window = coverage.window(bbox.row_start, bbox.row_end, bbox.col_start, bbox.col_end)?;
    Ok(window.iter().all(|&covered| !covered))
}

fn mark_covered(coverage: &mut Raster<bool>, bbox: &BoundingBox) -> Result<()> {
    for row in bbox.row_start..bbox.row_end {
        for col in bbox.col_start..bbox.col_end {
            coverage.set(row, col, true)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_even_side() {
        let b = BoundingBox::centered(20, 30, 16, 100, 100);
        assert_eq!((b.row_start, b.row_end, b.col_start, b.col_end), (12, 28, 22, 38));
        assert_eq!(b.height(), 16);
    }

    #[test]
    fn test_centered_odd_side() {
        // 10 - 2.5 truncates to 7, 10 + 2.5 truncates to 12.
        let b = BoundingBox::centered(10, 10, 5, 100, 100);
        assert_eq!((b.row_start, b.row_end), (7, 12));
        assert_eq!(b.width(), 5);
    }

    #[test]
    fn test_centered_clamps_at_edges() {
        let b = BoundingBox::centered(2, 98, 16, 100, 100);
        assert_eq!((b.row_start, b.row_end), (0, 10));
        assert_eq!((b.col_start, b.col_end), (90, 100));
        assert_eq!(b.side, 16);
    }

    #[test]
    fn test_overlaps() {
        let a = BoundingBox::centered(10, 10, 4, 50, 50);
        let b = BoundingBox::centered(12, 12, 4, 50, 50);
        let c = BoundingBox::centered(10, 14, 4, 50, 50);
        assert!(a.overlaps(&b));
        // a covers cols [8,12), c covers [12,16).
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_no_candidates_no_boxes() {
        let map = Raster::new(10, 10, false);
        assert!(place_boxes(&map, 4).unwrap().is_empty());
    }

    #[test]
    fn test_first_in_row_major_order_wins() {
        let mut map = Raster::new(20, 20, false);
        map.set(10, 12, true).unwrap();
        map.set(10, 10, true).unwrap();
        let boxes = place_boxes(&map, 6).unwrap();
        assert_eq!(boxes.len(), 1);
        assert!(boxes[0].contains(10, 10));
        assert_eq!(boxes[0].col_start, 7);
    }

    #[test]
    fn test_far_candidates_get_separate_boxes() {
        let mut map = Raster::new(40, 40, false);
        map.set(5, 5, true).unwrap();
        map.set(30, 30, true).unwrap();
        let boxes = place_boxes(&map, 8).unwrap();
        assert_eq!(boxes.len(), 2);
        assert!(!boxes[0].overlaps(&boxes[1]));
    }

    #[test]
    fn test_zero_side_rejected() {
        let map = Raster::new(3, 3, true);
        assert!(place_boxes(&map, 0).is_err());
    }
}
