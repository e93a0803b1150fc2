use ndarray::{Array2, Array3, Axis};
use std::path::Path;
use tracing::debug;

use super::element::{RasterElement, read_window};
use super::gdal::open_read;
use crate::error::{Error, Result};

/// Load a raster fully into memory as `(bands, rows, cols)`.
///
/// With `band = Some(i)` only that 1-based band is read and the result has a
/// single layer; with `None` every band is stacked. GDAL converts the stored
/// datatype to `T`, so a complex file read as `f32` yields the real part.
pub fn load_raster<T: RasterElement, P: AsRef<Path>>(
    path: P,
    band: Option<usize>,
) -> Result<Array3<T>> {
    let path = path.as_ref();
    let dataset = open_read(path)?;
    let (cols, rows) = dataset.raster_size();
    let count = dataset.raster_count() as usize;

    let indices: Vec<usize> = match band {
        Some(idx) if idx == 0 || idx > count => {
            return Err(Error::InvalidBand { band: idx, count });
        }
        Some(idx) => vec![idx],
        None => (1..=count).collect(),
    };

    let mut data = Vec::with_capacity(indices.len() * rows * cols);
    for &idx in &indices {
        let rasterband = dataset.rasterband(idx)?;
        data.extend(read_window::<T>(&rasterband, (0, 0), (cols, rows))?);
    }
    debug!("Loaded {} band(s) of {}x{} from {:?}", indices.len(), cols, rows, path);

    Ok(Array3::from_shape_vec((indices.len(), rows, cols), data)?)
}

/// Load a single 1-based band as `(rows, cols)`.
pub fn load_band<T: RasterElement, P: AsRef<Path>>(path: P, band: usize) -> Result<Array2<T>> {
    let stacked = load_raster::<T, _>(path, Some(band))?;
    Ok(stacked.index_axis_move(Axis(0), 0))
}
