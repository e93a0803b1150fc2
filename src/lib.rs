#![doc = r#"
sarstack-io — GDAL-backed raster I/O for block-wise SAR/InSAR stack processing.

Block-wise estimators read a stack of co-registered SLCs, work on one
row/column window at a time, and write each window's results into output
rasters that were allocated up front. This crate provides that I/O layer:
loading rasters into `ndarray` arrays, copying georeferencing between files,
creating outputs shaped like a template, and writing blocks into them.
All format work is delegated to GDAL.

Requirements
------------
- GDAL development headers and runtime available on your system.
- Rust 2024 edition toolchain.

Prepare outputs and write a block
---------------------------------
```rust,no_run
use std::path::PathBuf;
use ndarray::Array3;
use num_complex::Complex;
use sarstack_io::{setup_output_folder, save_block, BlockWindow, OutputParams, SlcStack};

fn main() -> sarstack_io::Result<()> {
    let stack = SlcStack::new(
        vec![PathBuf::from("/data/20220101.tif"), PathBuf::from("/data/20220113.tif")],
        "/work/slc_stack.vrt",
    );
    // One empty complex64 GTiff per input, next to the stack file.
    let outputs = setup_output_folder(&stack, &OutputParams::default())?;

    let block = Array3::<Complex<f32>>::zeros((2, 256, 256));
    save_block(block.view(), outputs.as_slice(), &BlockWindow::new(0..256, 512..768))
}
```

Create a raster from an array
-----------------------------
```rust,no_run
use std::path::Path;
use ndarray::Array2;
use sarstack_io::{load_band, save_arr_like, CreateParams};

fn main() -> sarstack_io::Result<()> {
    let coherence = Array2::<f32>::zeros((512, 512));
    save_arr_like(
        coherence.view(),
        Path::new("/work/slc_stack.vrt"),
        Path::new("/work/coherence.tif"),
        &CreateParams::default(), // GTiff, DEFLATE, 128x128 tiles
    )?;
    let back = load_band::<f32, _>("/work/coherence.tif", 1)?;
    assert_eq!(back.dim(), (512, 512));
    Ok(())
}
```

Error handling
--------------
All public functions return `sarstack_io::Result<T>`; match on `sarstack_io::Error`
to distinguish unopenable files (`FileAccess`), unknown drivers
(`UnsupportedFormat`) and block/file disagreements (`ShapeMismatch`).

Useful modules
--------------
- [`api`] — stack contract and output-folder setup.
- [`io`] — loaders, typed band access and writers.
- [`core`] — creation parameters and defaults.
- [`types`] — `RasterDataType`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use api::{RasterStack, SlcStack, output_path_for, setup_output_folder};
pub use core::params::{
    CreateParams, DEFAULT_DRIVER, DEFAULT_TIFF_OPTIONS, DEFAULT_TILE_SIZE, OutputParams,
    SLC_SUFFIX,
};
pub use error::{Error, Result};
pub use types::RasterDataType;

pub use io::gdal::{GdalError, RasterInfo};
pub use io::load::{load_band, load_raster};
pub use io::element::RasterElement;
pub use io::writers::{
    BlockWindow, OutputData, OutputTarget, copy_projection, create_like, save_arr_like,
    save_block, save_block_2d, save_like,
};
