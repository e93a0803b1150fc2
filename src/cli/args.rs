use clap::{Parser, Subcommand};
use std::ops::Range;
use std::path::PathBuf;

use sarstack_io::RasterDataType;

use super::errors::AppError;

#[derive(Parser)]
#[command(name = "sarstack-io", version, about = "Raster I/O helpers for SAR stack processing")]
pub struct CliArgs {
    /// Enable debug logging (otherwise RUST_LOG is honored)
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print geometry, projection and datatype of a raster as JSON
    Info {
        path: PathBuf,
    },

    /// Copy projection, geotransform and no-data from SRC to DST
    CopyProjection {
        src: PathBuf,
        dst: PathBuf,
    },

    /// Create an empty raster with the geometry of LIKE
    CreateLike {
        like: PathBuf,
        output: PathBuf,

        /// GDAL driver short name (defaults to the template's driver)
        #[arg(long)]
        driver: Option<String>,

        /// Datatype, GDAL or numpy name (e.g. CFloat32, complex64, float32)
        #[arg(long)]
        dtype: Option<RasterDataType>,

        /// Band count (defaults to the template's)
        #[arg(long)]
        nbands: Option<usize>,

        /// Creation option KEY=VALUE, repeatable
        #[arg(long = "co")]
        creation_options: Vec<String>,
    },

    /// Create one empty single-band output per input, next to OUTFILE
    SetupOutput {
        /// Reference raster of the stack used as geometry template
        #[arg(long)]
        outfile: PathBuf,

        /// JSON file with output parameters
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        driver: Option<String>,

        #[arg(long)]
        dtype: Option<RasterDataType>,

        /// Index of the first input that gets an output
        #[arg(long)]
        start_idx: Option<usize>,

        /// Creation option KEY=VALUE, repeatable
        #[arg(long = "co")]
        creation_options: Vec<String>,

        /// Stack inputs, in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Fill a window of band 1 of each output with a constant value
    FillBlock {
        /// Row range START:END
        #[arg(long, value_parser = parse_range)]
        rows: Range<usize>,

        /// Column range START:END
        #[arg(long, value_parser = parse_range)]
        cols: Range<usize>,

        #[arg(long, default_value_t = 0.0)]
        value: f64,

        #[arg(required = true)]
        outputs: Vec<PathBuf>,
    },
}

pub fn parse_range(s: &str) -> Result<Range<usize>, AppError> {
    let invalid = || AppError::InvalidRange {
        value: s.to_string(),
    };
    let (start, end) = s.split_once(':').ok_or_else(invalid)?;
    let start: usize = start.trim().parse().map_err(|_| invalid())?;
    let end: usize = end.trim().parse().map_err(|_| invalid())?;
    if start > end {
        return Err(invalid());
    }
    Ok(start..end)
}
