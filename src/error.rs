//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Wraps GDAL and I/O failures, and provides semantic variants for unopenable
//! files, unknown formats, and array/file shape disagreements.
use std::path::PathBuf;

use thiserror::Error;

use crate::io::GdalError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot access raster {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: GdalError,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Block has {layers} layers, but {files} output files were passed")]
    ShapeMismatch { layers: usize, files: usize },

    #[error("Window of {window_rows}x{window_cols} does not match block of {block_rows}x{block_cols}")]
    WindowMismatch {
        window_rows: usize,
        window_cols: usize,
        block_rows: usize,
        block_cols: usize,
    },

    #[error("Window rows {rows:?}, cols {cols:?} exceeds {} ({width}x{height})", path.display())]
    WindowOutOfBounds {
        path: PathBuf,
        rows: std::ops::Range<usize>,
        cols: std::ops::Range<usize>,
        width: usize,
        height: usize,
    },

    #[error("Band index {band} out of range (file has {count} bands)")]
    InvalidBand { band: usize, count: usize },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("GDAL error: {0}")]
    Gdal(#[from] GdalError),

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<gdal::errors::GdalError> for Error {
    fn from(e: gdal::errors::GdalError) -> Self {
        Error::Gdal(GdalError::Gdal(e))
    }
}

impl Error {
    pub(crate) fn file_access(path: impl Into<PathBuf>, e: impl Into<GdalError>) -> Self {
        Error::FileAccess {
            path: path.into(),
            source: e.into(),
        }
    }
}
