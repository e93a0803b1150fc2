use ndarray::Array3;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sarstack_io::{
    BlockWindow, CreateParams, OutputParams, RasterInfo, SlcStack, copy_projection, create_like,
    save_block, setup_output_folder,
};

use super::args::{CliArgs, Command};
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn non_empty(options: Vec<String>) -> Option<Vec<String>> {
    if options.is_empty() { None } else { Some(options) }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    match args.command {
        Command::Info { path } => {
            let raster_info = RasterInfo::open(&path).map_err(AppError::from)?;
            println!("{}", serde_json::to_string_pretty(&raster_info)?);
        }
        Command::CopyProjection { src, dst } => {
            copy_projection(&src, &dst).map_err(AppError::from)?;
            info!("Copied georeferencing from {:?} to {:?}", src, dst);
        }
        Command::CreateLike {
            like,
            output,
            driver,
            dtype,
            nbands,
            creation_options,
        } => {
            let params = CreateParams {
                driver,
                options: non_empty(creation_options),
                nbands,
                dtype,
            };
            create_like(&like, &output, &params).map_err(AppError::from)?;
            println!("{}", output.display());
        }
        Command::SetupOutput {
            outfile,
            config,
            driver,
            dtype,
            start_idx,
            creation_options,
            inputs,
        } => {
            let mut params = match config {
                Some(path) => OutputParams::from_json_file(&path).map_err(AppError::from)?,
                None => OutputParams::default(),
            };
            if let Some(driver) = driver {
                params.driver = driver;
            }
            if let Some(dtype) = dtype {
                params.dtype = dtype;
            }
            if let Some(start_idx) = start_idx {
                params.start_idx = start_idx;
            }
            if let Some(options) = non_empty(creation_options) {
                params.creation_options = Some(options);
            }

            let stack = SlcStack::new(inputs, outfile);
            let outputs = setup_output_folder(&stack, &params).map_err(AppError::from)?;
            for output in outputs {
                println!("{}", output.display());
            }
        }
        Command::FillBlock {
            rows,
            cols,
            value,
            outputs,
        } => {
            let window = BlockWindow::new(rows, cols);
            let block = Array3::from_elem((outputs.len(), window.n_rows(), window.n_cols()), value);
            save_block(block.view(), outputs.as_slice(), &window).map_err(AppError::from)?;
            info!(
                "Filled rows {:?} cols {:?} of {} file(s) with {}",
                window.rows,
                window.cols,
                outputs.len(),
                value
            );
        }
    }
    Ok(())
}
