#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shipscan_core::raster::Raster;

/// Uniform water-index raster.
pub fn uniform_index(rows: usize, columns: usize, value: f32) -> Raster<f32> {
    Raster::new(rows, columns, value)
}

/// Water background with single-pixel dark anomalies at `ships`.
pub fn index_with_ships(
    rows: usize,
    columns: usize,
    water: f32,
    ship: f32,
    ships: &[(usize, usize)],
) -> Raster<f32> {
    let mut index = uniform_index(rows, columns, water);
    for &(r, c) in ships {
        index.set(r, c, ship).expect("ship inside raster");
    }
    index
}

/// Land on the left `land_columns` columns, water elsewhere.
pub fn coastline_index(rows: usize, columns: usize, land_columns: usize) -> Raster<f32> {
    let mut index = uniform_index(rows, columns, 200.0);
    for r in 0..rows {
        for c in 0..land_columns.min(columns) {
            index.set(r, c, 60.0).expect("in bounds");
        }
    }
    index
}

/// Straight coastline plus one land pixel jutting into the water at
/// `(rows / 2, land_columns)`. The mode filter folds the spur into the water
/// mask, so it looks like a dark object sitting on the shore.
pub fn jagged_coastline_index(rows: usize, columns: usize, land_columns: usize) -> Raster<f32> {
    let mut index = coastline_index(rows, columns, land_columns);
    index.set(rows / 2, land_columns, 60.0).expect("spur inside raster");
    index
}

/// Seeded random mask with roughly `density` true cells.
pub fn noisy_mask(rows: usize, columns: usize, density: f64, seed: u64) -> Raster<bool> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut mask = Raster::new(rows, columns, false);
    for r in 0..rows {
        for c in 0..columns {
            mask.set(r, c, rng.random_bool(density)).expect("in bounds");
        }
    }
    mask
}

/// Seeded random index in [120, 240): water-like and land-like values mixed.
pub fn noisy_index(rows: usize, columns: usize, seed: u64) -> Raster<f32> {
    let mask = noisy_mask(rows, columns, 0.5, seed);
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let mut index = Raster::zeros(rows, columns);
    for r in 0..rows {
        for c in 0..columns {
            let base = if mask.get(r, c).expect("in bounds") { 180.0 } else { 120.0 };
            let jitter = rng.random_range(0..60) as f32;
            index.set(r, c, base + jitter).expect("in bounds");
        }
    }
    index
}
