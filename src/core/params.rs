use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::types::RasterDataType;

pub const DEFAULT_DRIVER: &str = "GTiff";

/// Tile size `[rows, cols]` used for default TIFF output
pub const DEFAULT_TILE_SIZE: [usize; 2] = [128, 128];

pub const DEFAULT_TIFF_OPTIONS: [&str; 5] = [
    "COMPRESS=DEFLATE",
    "ZLEVEL=5",
    "TILED=YES",
    "BLOCKXSIZE=128",
    "BLOCKYSIZE=128",
];

/// Suffix appended to an input's stem to name its output file
pub const SLC_SUFFIX: &str = ".slc.tif";

/// How to create a raster from a template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateParams {
    /// GDAL driver short name; `None` reuses the template's driver
    pub driver: Option<String>,
    /// Driver creation options (`KEY=VALUE`); `None` means driver defaults
    pub options: Option<Vec<String>>,
    /// Band count for empty files; `None` copies the template
    pub nbands: Option<usize>,
    /// Datatype for empty files; `None` copies the template band 1
    pub dtype: Option<RasterDataType>,
}

impl CreateParams {
    /// Creation options to pass to `driver`.
    ///
    /// GTiff without explicit options gets deflate-compressed 128x128 tiles.
    pub fn creation_options(&self, driver: &str) -> Vec<String> {
        match &self.options {
            Some(options) => options.clone(),
            None if driver == DEFAULT_DRIVER => {
                DEFAULT_TIFF_OPTIONS.iter().map(|s| s.to_string()).collect()
            }
            None => Vec::new(),
        }
    }
}

/// Parameters for preparing one empty output per stack input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputParams {
    pub driver: String,
    pub dtype: RasterDataType,
    /// Index of the first stack input that gets an output file
    pub start_idx: usize,
    pub creation_options: Option<Vec<String>>,
}

impl Default for OutputParams {
    fn default() -> Self {
        Self {
            driver: DEFAULT_DRIVER.to_string(),
            dtype: RasterDataType::CFloat32,
            start_idx: 0,
            creation_options: None,
        }
    }
}

impl OutputParams {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub(crate) fn create_params(&self) -> CreateParams {
        CreateParams {
            driver: Some(self.driver.clone()),
            options: self.creation_options.clone(),
            nbands: Some(1),
            dtype: Some(self.dtype),
        }
    }
}
