use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShipScanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dimension mismatch: expected {}x{}, found {}x{}", expected.0, expected.1, found.0, found.1)]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Index ({row}, {col}) out of bounds for {rows}x{columns} raster")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Report serialization error: {0}")]
    Report(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ShipScanError>;
