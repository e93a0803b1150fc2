//! I/O layer over GDAL: opening rasters (`gdal`), typed pixel access for
//! every datatype (`element`), full-raster loading (`load`), and `writers`
//! for creating outputs and writing blocks into them.
pub mod gdal;
pub use gdal::{GdalError, RasterInfo};

pub mod element;
pub use element::RasterElement;

pub mod load;
pub use load::{load_band, load_raster};

pub mod writers;
