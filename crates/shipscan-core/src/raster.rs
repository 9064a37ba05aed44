use ndarray::{s, Array2, ArrayView2};
use num_traits::Zero;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{Result, ShipScanError};

/// A dense 2D grid, row-major, indexed by `(row, column)`.
///
/// Element type is `f32` for water-index data and `bool` for masks.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster<T> {
    data: Array2<T>,
}

/// Boolean raster where `true` marks water.
pub type WaterMask = Raster<bool>;

/// Boolean raster where `true` marks a probable ship pixel.
pub type CandidateMap = Raster<bool>;

impl<T: Clone> Raster<T> {
    /// Create a `rows x columns` raster with every cell set to `fill`.
    pub fn new(rows: usize, columns: usize, fill: T) -> Self {
        Self {
            data: Array2::from_elem((rows, columns), fill),
        }
    }

    /// Build a raster from row-major values.
    pub fn from_shape_vec(rows: usize, columns: usize, values: Vec<T>) -> Result<Self> {
        let found = values.len();
        Array2::from_shape_vec((rows, columns), values)
            .map(Self::from_array)
            .map_err(|_| ShipScanError::DimensionMismatch {
                expected: (rows, columns),
                found: (found, 1),
            })
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_index(row, col)?;
        Ok(self.data[[row, col]].clone())
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_index(row, col)?;
        self.data[[row, col]] = value;
        Ok(())
    }
}

impl<T: Clone + Zero> Raster<T> {
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::new(rows, columns, T::zero())
    }
}

impl<T> Raster<T> {
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn columns(&self) -> usize {
        self.data.ncols()
    }

    /// `(rows, columns)`.
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_array(&self) -> &Array2<T> {
        &self.data
    }

    pub fn into_array(self) -> Array2<T> {
        self.data
    }

    /// Read-only view of rows `[r0, r1)` and columns `[c0, c1)`.
    ///
    /// Bounds are not clamped: callers clamp before asking for a window.
    pub fn window(&self, r0: usize, r1: usize, c0: usize, c1: usize) -> Result<ArrayView2<'_, T>> {
        let (rows, columns) = self.dim();
        if r0 > r1 || r1 > rows {
            return Err(ShipScanError::OutOfBounds {
                row: r0.max(r1),
                col: c0,
                rows,
                columns,
            });
        }
        if c0 > c1 || c1 > columns {
            return Err(ShipScanError::OutOfBounds {
                row: r0,
                col: c0.max(c1),
                rows,
                columns,
            });
        }
        Ok(self.data.slice(s![r0..r1, c0..c1]))
    }

    /// Fail with `DimensionMismatch` unless `other` has the same shape.
    pub fn ensure_same_dims<U>(&self, other: &Raster<U>) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(ShipScanError::DimensionMismatch {
                expected: self.dim(),
                found: other.dim(),
            });
        }
        Ok(())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        let (rows, columns) = self.dim();
        if row >= rows || col >= columns {
            return Err(ShipScanError::OutOfBounds {
                row,
                col,
                rows,
                columns,
            });
        }
        Ok(())
    }
}

impl Raster<bool> {
    /// Number of `true` cells.
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Coordinates of `true` cells in row-major order.
    pub fn true_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.data
            .indexed_iter()
            .filter_map(|((row, col), &v)| v.then_some((row, col)))
    }
}

/// Build a new raster by evaluating `f(row, col)` for every cell.
///
/// Rows are computed in parallel once the raster reaches
/// `PARALLEL_PIXEL_THRESHOLD` pixels; each worker owns one output row.
pub(crate) fn map_pixels<U, F>(rows: usize, columns: usize, f: F) -> Raster<U>
where
    U: Clone + Default + Send,
    F: Fn(usize, usize) -> U + Sync,
{
    let mut result = Array2::<U>::from_elem((rows, columns), U::default());

    if rows * columns >= PARALLEL_PIXEL_THRESHOLD {
        let computed: Vec<Vec<U>> = (0..rows)
            .into_par_iter()
            .map(|row| (0..columns).map(|col| f(row, col)).collect())
            .collect();

        for (row, row_data) in computed.into_iter().enumerate() {
            for (col, val) in row_data.into_iter().enumerate() {
                result[[row, col]] = val;
            }
        }
    } else {
        for row in 0..rows {
            for col in 0..columns {
                result[[row, col]] = f(row, col);
            }
        }
    }

    Raster::from_array(result)
}
