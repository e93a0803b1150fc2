//! Writers for GDAL rasters: template-based creation (`tiff`), georeferencing
//! copies (`metadata`), and windowed block writes into existing outputs (`block`).
pub mod block;
pub mod metadata;
pub mod tiff;

pub use block::{BlockWindow, OutputTarget, save_block, save_block_2d};
pub use metadata::copy_projection;
pub use tiff::{OutputData, create_like, save_arr_like, save_like};
