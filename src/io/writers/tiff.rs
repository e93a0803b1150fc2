use gdal::{DriverManager, Metadata};
use gdal::cpl::CslStringList;
use ndarray::{ArrayView2, ArrayView3, Axis};
use std::path::Path;
use tracing::{debug, info};

use crate::core::params::CreateParams;
use crate::error::{Error, Result};
use crate::io::element::{RasterElement, band_data_type, create_dataset, write_window};
use crate::io::gdal::open_read;

/// Pixel content of a file created from a template
#[derive(Debug, Clone, Copy)]
pub enum OutputData<'a, T: RasterElement> {
    /// Allocate only; pixels are left to the driver's fill (zero for GTiff).
    Empty,
    /// `(bands, rows, cols)` data written band by band.
    Populated(ArrayView3<'a, T>),
}

impl<'a, T: RasterElement> From<ArrayView3<'a, T>> for OutputData<'a, T> {
    fn from(view: ArrayView3<'a, T>) -> Self {
        OutputData::Populated(view)
    }
}

impl<'a, T: RasterElement> From<ArrayView2<'a, T>> for OutputData<'a, T> {
    fn from(view: ArrayView2<'a, T>) -> Self {
        OutputData::Populated(view.insert_axis(Axis(0)))
    }
}

/// Create `output` with the geometry and projection of `like`.
///
/// With [`OutputData::Populated`] the size, band count and datatype come from
/// the array and `params.nbands`/`params.dtype` are ignored. With
/// [`OutputData::Empty`] they come from `params`, falling back to the template.
/// No-data and other metadata are not copied.
pub fn save_like<T: RasterElement>(
    data: OutputData<'_, T>,
    like: &Path,
    output: &Path,
    params: &CreateParams,
) -> Result<()> {
    let like_ds = open_read(like)?;

    let (size, nbands, data_type) = match &data {
        OutputData::Populated(arr) => {
            let (bands, rows, cols) = arr.dim();
            ((cols, rows), bands, T::DATA_TYPE)
        }
        OutputData::Empty => {
            let data_type = match params.dtype {
                Some(dt) => dt,
                None => band_data_type(&like_ds.rasterband(1)?)?,
            };
            let nbands = params.nbands.unwrap_or(like_ds.raster_count() as usize);
            (like_ds.raster_size(), nbands, data_type)
        }
    };

    let driver_name = match &params.driver {
        Some(name) => name.clone(),
        None => like_ds.driver().short_name(),
    };
    let driver = DriverManager::get_driver_by_name(&driver_name)
        .map_err(|_| Error::UnsupportedFormat(format!("no GDAL driver named '{}'", driver_name)))?;
    // CreateCopy-only drivers (PNG, JPEG) cannot allocate an empty dataset.
    if driver.metadata_item("DCAP_CREATE", "").as_deref() != Some("YES") {
        return Err(Error::UnsupportedFormat(format!(
            "GDAL driver '{}' cannot create new datasets",
            driver_name
        )));
    }

    let mut options = CslStringList::new();
    for opt in params.creation_options(&driver_name) {
        options.add_string(&opt)?;
    }

    let mut out_ds = create_dataset(&driver, output, size, nbands, data_type, &options)
        .map_err(|e| Error::file_access(output, e))?;

    if let Ok(gt) = like_ds.geo_transform() {
        out_ds.set_geo_transform(&gt)?;
    }
    let projection = like_ds.projection();
    if !projection.is_empty() {
        out_ds.set_projection(&projection)?;
    }

    if let OutputData::Populated(arr) = data {
        for (i, layer) in arr.axis_iter(Axis(0)).enumerate() {
            let mut band = out_ds.rasterband(i + 1)?;
            let buffer: Vec<T> = layer.iter().copied().collect();
            write_window(&mut band, (0, 0), size, &buffer)?;
            debug!("Wrote band {} of {:?}", i + 1, output);
        }
    }

    out_ds.close()?;
    info!(
        "Created {:?} ({}x{}, {} band(s), {}) like {:?}",
        output, size.0, size.1, nbands, data_type, like
    );
    Ok(())
}

/// Save an array to `output`, copying geometry from `like`.
///
/// A 2-D array is written as a single band.
pub fn save_arr_like<'a, T: RasterElement>(
    arr: impl Into<OutputData<'a, T>>,
    like: &Path,
    output: &Path,
    params: &CreateParams,
) -> Result<()> {
    save_like(arr.into(), like, output, params)
}

/// Create an empty raster shaped like `like`.
pub fn create_like(like: &Path, output: &Path, params: &CreateParams) -> Result<()> {
    // The element type is unused for empty output; the datatype comes from params or the template.
    save_like::<u8>(OutputData::Empty, like, output, params)
}
