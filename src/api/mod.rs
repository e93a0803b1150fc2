//! Stack-level entry points: the `RasterStack` contract a processing stack
//! must satisfy, and `setup_output_folder`, which pre-allocates one empty
//! output raster per stack input before block processing starts.
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::params::{OutputParams, SLC_SUFFIX};
use crate::error::{Error, Result};
use crate::io::writers::create_like;

/// An ordered stack of input rasters sharing one geometry
pub trait RasterStack {
    /// Input files, in acquisition order
    fn file_list(&self) -> &[PathBuf];
    /// Reference raster used as geometry template for outputs; outputs are
    /// created next to it
    fn outfile(&self) -> &Path;
}

/// Plain `RasterStack` over a list of SLC paths
#[derive(Debug, Clone, PartialEq)]
pub struct SlcStack {
    pub file_list: Vec<PathBuf>,
    pub outfile: PathBuf,
}

impl SlcStack {
    pub fn new(file_list: Vec<PathBuf>, outfile: impl Into<PathBuf>) -> Self {
        Self {
            file_list,
            outfile: outfile.into(),
        }
    }
}

impl RasterStack for SlcStack {
    fn file_list(&self) -> &[PathBuf] {
        &self.file_list
    }

    fn outfile(&self) -> &Path {
        &self.outfile
    }
}

/// Output path for `input` inside `folder`: its stem plus [`SLC_SUFFIX`].
pub fn output_path_for(folder: &Path, input: &Path) -> Result<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| Error::InvalidArgument {
        arg: "file_list",
        value: input.display().to_string(),
    })?;
    Ok(folder.join(format!("{}{}", stem.to_string_lossy(), SLC_SUFFIX)))
}

/// Create an empty single-band output for each stack input from `params.start_idx` on.
///
/// Starting past zero lets a later ministack skip outputs created by earlier
/// runs. Returns the created paths, aligned with `file_list()[start_idx..]`;
/// a `start_idx` past the end of the list yields an empty result.
pub fn setup_output_folder<S: RasterStack + ?Sized>(
    stack: &S,
    params: &OutputParams,
) -> Result<Vec<PathBuf>> {
    let file_list = stack.file_list();
    // An index at or past the end leaves nothing to create.
    let remaining = file_list.get(params.start_idx..).unwrap_or(&[]);

    let template = stack.outfile();
    let output_folder = template.parent().unwrap_or_else(|| Path::new(""));
    let create_params = params.create_params();

    let mut output_files = Vec::with_capacity(remaining.len());
    for filename in remaining {
        let output_path = output_path_for(output_folder, filename)?;
        create_like(template, &output_path, &create_params)?;
        output_files.push(output_path);
    }
    info!(
        "Prepared {} output file(s) in {:?} starting at index {}",
        output_files.len(),
        output_folder,
        params.start_idx
    );
    Ok(output_files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_replaces_last_extension() {
        let out = output_path_for(Path::new("/work"), Path::new("/data/20220101.slc.vrt")).unwrap();
        assert_eq!(out, PathBuf::from("/work/20220101.slc.slc.tif"));
        let out = output_path_for(Path::new("/work"), Path::new("/data/20220101.tif")).unwrap();
        assert_eq!(out, PathBuf::from("/work/20220101.slc.tif"));
    }

    #[test]
    fn start_idx_past_end_creates_nothing() {
        let stack = SlcStack::new(vec![PathBuf::from("a.tif")], "/nonexistent/stack.vrt");
        let params = OutputParams {
            start_idx: 5,
            ..OutputParams::default()
        };
        assert_eq!(setup_output_folder(&stack, &params).unwrap(), Vec::<PathBuf>::new());
    }

    #[test]
    fn start_idx_at_end_creates_nothing() {
        let stack = SlcStack::new(vec![PathBuf::from("a.tif")], "/nonexistent/stack.vrt");
        let params = OutputParams {
            start_idx: 1,
            ..OutputParams::default()
        };
        assert!(setup_output_folder(&stack, &params).unwrap().is_empty());
    }
}
