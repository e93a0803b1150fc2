//! Configuration for raster creation: creation parameters, output-folder
//! parameters, and the default GTiff creation options.
pub mod params;
