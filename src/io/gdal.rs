use gdal::errors::GdalError as GdalCrateError;
use gdal::{Dataset, DatasetOptions, GdalOpenFlags};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

use crate::error::{Error, Result};
use crate::types::RasterDataType;

/// Errors raised by the GDAL layer below the crate-level error type
#[derive(Debug, Error)]
pub enum GdalError {
    #[error("GDAL error: {0}")]
    Gdal(#[from] GdalCrateError),
    #[error("{method} failed: {msg}")]
    Native { method: &'static str, msg: String },
    #[error("Unsupported datatype code: {0}")]
    UnsupportedDataType(u32),
    #[error("Dimension mismatch: expected {0}x{1}, got {2} values")]
    DimensionMismatch(usize, usize, usize),
}

/// Identity geotransform GDAL reports for rasters with no georeferencing
pub const IDENTITY_GEOTRANSFORM: [f64; 6] = [0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

pub fn is_identity(gt: &[f64; 6]) -> bool {
    *gt == IDENTITY_GEOTRANSFORM
}

/// Open a raster read-only.
pub fn open_read(path: &Path) -> Result<Dataset> {
    Dataset::open(path).map_err(|e| Error::file_access(path, e))
}

/// Open a raster in update mode.
pub fn open_update(path: &Path) -> Result<Dataset> {
    let options = DatasetOptions {
        open_flags: GdalOpenFlags::GDAL_OF_UPDATE | GdalOpenFlags::GDAL_OF_RASTER,
        ..DatasetOptions::default()
    };
    Dataset::open_ex(path, options).map_err(|e| Error::file_access(path, e))
}

/// Geometry and georeferencing of a raster, without pixel data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RasterInfo {
    /// Width (pixels) of the raster
    pub width: usize,
    /// Height (lines) of the raster
    pub height: usize,
    /// Number of raster bands
    pub bands: usize,
    /// Datatype of band 1
    pub data_type: RasterDataType,
    /// Affine geotransform coefficients ([origin_x, pixel_width, rot_x, origin_y, rot_y, pixel_height])
    pub geotransform: Option<[f64; 6]>,
    /// Projection in WKT format; `None` when empty
    pub projection: Option<String>,
    /// No-data value of band 1
    pub nodata: Option<f64>,
    /// Short name of the driver that opened the file
    pub driver: String,
}

impl RasterInfo {
    /// Read the geometry of the raster at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let dataset = open_read(path.as_ref())?;
        Self::from_dataset(&dataset)
    }

    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        let (width, height) = dataset.raster_size();
        let bands = dataset.raster_count() as usize;
        if bands == 0 {
            return Err(Error::UnsupportedFormat("No raster bands found".into()));
        }
        let band = dataset.rasterband(1)?;
        Ok(RasterInfo {
            width,
            height,
            bands,
            data_type: super::element::band_data_type(&band)?,
            geotransform: dataset.geo_transform().ok(),
            projection: Some(dataset.projection()).filter(|p| !p.is_empty()),
            nodata: band.no_data_value(),
            driver: dataset.driver().short_name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_detection_is_exact() {
        assert!(is_identity(&[0.0, 1.0, 0.0, 0.0, 0.0, 1.0]));
        assert!(!is_identity(&[0.0, 1.0, 0.0, 0.0, 0.0, -1.0]));
        assert!(!is_identity(&[500000.0, 30.0, 0.0, 4100000.0, 0.0, -30.0]));
    }

    #[test]
    fn missing_file_is_file_access_error() {
        let err = RasterInfo::open("/nonexistent/path/to/raster.tif").unwrap_err();
        assert!(matches!(
            err,
            Error::FileAccess {
                source: GdalError::Gdal(_),
                ..
            }
        ));
        assert!(std::error::Error::source(&err).is_some());
    }
}
