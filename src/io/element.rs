//! Typed pixel access for every GDAL datatype, complex included.
//!
//! The safe `gdal` API only covers real-valued band types. SLC stacks are
//! complex64, so band reads/writes and dataset creation go through
//! `GDALRasterIO`/`GDALCreate` with the datatype taken from [`RasterElement`].
use std::ffi::{CStr, CString, c_int, c_void};
use std::path::Path;

use gdal::cpl::CslStringList;
use gdal::raster::RasterBand;
use gdal::{Dataset, Driver};
use gdal_sys::{CPLErr, GDALRWFlag};
use num_complex::Complex;

use super::gdal::GdalError;
use crate::types::RasterDataType;

/// Element types that can be moved between ndarray buffers and raster bands.
///
/// The in-memory layout of each implementor must match the GDAL datatype it
/// names; `Complex<T>` is `#[repr(C)]` `{re, im}`, which is what GDAL expects
/// for `CFloat32`/`CFloat64`.
pub trait RasterElement: Copy + Default + Send + Sync + 'static {
    const DATA_TYPE: RasterDataType;
}

macro_rules! raster_element {
    ($($ty:ty => $dt:ident),* $(,)?) => {
        $(impl RasterElement for $ty {
            const DATA_TYPE: RasterDataType = RasterDataType::$dt;
        })*
    };
}

raster_element! {
    u8 => UInt8,
    u16 => UInt16,
    i16 => Int16,
    u32 => UInt32,
    i32 => Int32,
    f32 => Float32,
    f64 => Float64,
    Complex<f32> => CFloat32,
    Complex<f64> => CFloat64,
}

fn last_cpl_error(method: &'static str) -> GdalError {
    let msg = unsafe { CStr::from_ptr(gdal_sys::CPLGetLastErrorMsg()) }
        .to_string_lossy()
        .into_owned();
    GdalError::Native { method, msg }
}

/// Datatype GDAL stores `band` as.
pub fn band_data_type(band: &RasterBand) -> Result<RasterDataType, GdalError> {
    let code = unsafe { gdal_sys::GDALGetRasterDataType(band.c_rasterband()) };
    RasterDataType::from_gdal_type(code).ok_or(GdalError::UnsupportedDataType(code as u32))
}

fn raster_io(
    band: &RasterBand,
    flag: GDALRWFlag::Type,
    offset: (usize, usize),
    size: (usize, usize),
    buffer: *mut c_void,
    data_type: RasterDataType,
) -> Result<(), GdalError> {
    let rv = unsafe {
        gdal_sys::GDALRasterIO(
            band.c_rasterband(),
            flag,
            offset.0 as c_int,
            offset.1 as c_int,
            size.0 as c_int,
            size.1 as c_int,
            buffer,
            size.0 as c_int,
            size.1 as c_int,
            data_type.gdal_type(),
            0,
            0,
        )
    };
    if rv != CPLErr::CE_None {
        return Err(last_cpl_error("GDALRasterIO"));
    }
    Ok(())
}

/// Read a `(cols, rows)` window at `(x, y)` offset, row-major.
pub fn read_window<T: RasterElement>(
    band: &RasterBand,
    offset: (usize, usize),
    size: (usize, usize),
) -> Result<Vec<T>, GdalError> {
    let mut data = vec![T::default(); size.0 * size.1];
    if data.is_empty() {
        return Ok(data);
    }
    raster_io(
        band,
        GDALRWFlag::GF_Read,
        offset,
        size,
        data.as_mut_ptr() as *mut c_void,
        T::DATA_TYPE,
    )?;
    Ok(data)
}

/// Write row-major `data` into a `(cols, rows)` window at `(x, y)` offset.
pub fn write_window<T: RasterElement>(
    band: &mut RasterBand,
    offset: (usize, usize),
    size: (usize, usize),
    data: &[T],
) -> Result<(), GdalError> {
    if data.len() != size.0 * size.1 {
        return Err(GdalError::DimensionMismatch(size.0, size.1, data.len()));
    }
    if data.is_empty() {
        return Ok(());
    }
    // GF_Write only reads from the buffer.
    raster_io(
        band,
        GDALRWFlag::GF_Write,
        offset,
        size,
        data.as_ptr() as *mut c_void,
        T::DATA_TYPE,
    )
}

/// Create a dataset whose band datatype is chosen at runtime.
pub fn create_dataset(
    driver: &Driver,
    path: &Path,
    size: (usize, usize),
    bands: usize,
    data_type: RasterDataType,
    options: &CslStringList,
) -> Result<Dataset, GdalError> {
    let c_path = CString::new(path.to_string_lossy().into_owned()).map_err(|e| {
        GdalError::Native {
            method: "GDALCreate",
            msg: e.to_string(),
        }
    })?;
    let c_dataset = unsafe {
        gdal_sys::GDALCreate(
            driver.c_driver(),
            c_path.as_ptr(),
            size.0 as c_int,
            size.1 as c_int,
            bands as c_int,
            data_type.gdal_type(),
            options.as_ptr(),
        )
    };
    if c_dataset.is_null() {
        return Err(last_cpl_error("GDALCreate"));
    }
    Ok(unsafe { Dataset::from_c_dataset(c_dataset) })
}
