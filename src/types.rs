//! Shared types used across the crate.
//! `RasterDataType` names the pixel datatypes GDAL can store and maps them to
//! GDAL datatype codes and to numpy-style names used by stack configs.
use std::ffi::CStr;
use std::str::FromStr;

use gdal_sys::GDALDataType;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Pixel datatypes available in every GDAL 3.x build.
///
/// The 64-bit and signed 8-bit integer types (GDAL >= 3.5 / 3.7) are left out
/// so the bindings compile against older installs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum RasterDataType {
    #[serde(alias = "uint8", alias = "Byte")]
    UInt8,
    #[serde(alias = "uint16")]
    UInt16,
    #[serde(alias = "int16")]
    Int16,
    #[serde(alias = "uint32")]
    UInt32,
    #[serde(alias = "int32")]
    Int32,
    #[serde(alias = "float32")]
    Float32,
    #[serde(alias = "float64")]
    Float64,
    CInt16,
    CInt32,
    #[serde(alias = "complex64")]
    CFloat32,
    #[serde(alias = "complex128")]
    CFloat64,
}

const ALL: [RasterDataType; 11] = [
    RasterDataType::UInt8,
    RasterDataType::UInt16,
    RasterDataType::Int16,
    RasterDataType::UInt32,
    RasterDataType::Int32,
    RasterDataType::Float32,
    RasterDataType::Float64,
    RasterDataType::CInt16,
    RasterDataType::CInt32,
    RasterDataType::CFloat32,
    RasterDataType::CFloat64,
];

impl RasterDataType {
    pub fn gdal_type(self) -> GDALDataType::Type {
        match self {
            RasterDataType::UInt8 => GDALDataType::GDT_Byte,
            RasterDataType::UInt16 => GDALDataType::GDT_UInt16,
            RasterDataType::Int16 => GDALDataType::GDT_Int16,
            RasterDataType::UInt32 => GDALDataType::GDT_UInt32,
            RasterDataType::Int32 => GDALDataType::GDT_Int32,
            RasterDataType::Float32 => GDALDataType::GDT_Float32,
            RasterDataType::Float64 => GDALDataType::GDT_Float64,
            RasterDataType::CInt16 => GDALDataType::GDT_CInt16,
            RasterDataType::CInt32 => GDALDataType::GDT_CInt32,
            RasterDataType::CFloat32 => GDALDataType::GDT_CFloat32,
            RasterDataType::CFloat64 => GDALDataType::GDT_CFloat64,
        }
    }

    pub fn from_gdal_type(code: GDALDataType::Type) -> Option<Self> {
        ALL.into_iter().find(|dt| dt.gdal_type() == code)
    }

    /// Name as GDAL reports it (`Byte`, `CFloat32`, ...).
    pub fn gdal_name(self) -> String {
        let name = unsafe { gdal_sys::GDALGetDataTypeName(self.gdal_type()) };
        if name.is_null() {
            return format!("{:?}", self);
        }
        unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned()
    }

    /// numpy dtype name; the complex integer types have none.
    pub fn numpy_name(self) -> Option<&'static str> {
        Some(match self {
            RasterDataType::UInt8 => "uint8",
            RasterDataType::UInt16 => "uint16",
            RasterDataType::Int16 => "int16",
            RasterDataType::UInt32 => "uint32",
            RasterDataType::Int32 => "int32",
            RasterDataType::Float32 => "float32",
            RasterDataType::Float64 => "float64",
            RasterDataType::CFloat32 => "complex64",
            RasterDataType::CFloat64 => "complex128",
            RasterDataType::CInt16 | RasterDataType::CInt32 => return None,
        })
    }
}

impl std::fmt::Display for RasterDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.gdal_name())
    }
}

impl FromStr for RasterDataType {
    type Err = Error;

    /// Accepts GDAL names (`CFloat32`, `Byte`) and numpy names (`complex64`, `uint8`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL.into_iter()
            .find(|dt| {
                dt.gdal_name().eq_ignore_ascii_case(wanted)
                    || format!("{:?}", dt).eq_ignore_ascii_case(wanted)
                    || dt
                        .numpy_name()
                        .is_some_and(|n| n.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| Error::UnsupportedFormat(format!("unknown datatype '{}'", s)))
    }
}
