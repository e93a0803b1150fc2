use ndarray::{ArrayView2, ArrayView3, Axis};
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::io::element::{RasterElement, write_window};
use crate::io::gdal::{open_read, open_update};

/// Files a block is written to, one per block layer
#[derive(Debug, Clone, Copy)]
pub enum OutputTarget<'a> {
    Single(&'a Path),
    Multi(&'a [PathBuf]),
}

impl<'a> OutputTarget<'a> {
    pub(crate) fn len(&self) -> usize {
        match self {
            OutputTarget::Single(_) => 1,
            OutputTarget::Multi(paths) => paths.len(),
        }
    }

    pub fn paths(self) -> Vec<&'a Path> {
        match self {
            OutputTarget::Single(path) => vec![path],
            OutputTarget::Multi(paths) => paths.iter().map(PathBuf::as_path).collect(),
        }
    }
}

impl<'a> From<&'a Path> for OutputTarget<'a> {
    fn from(path: &'a Path) -> Self {
        OutputTarget::Single(path)
    }
}

impl<'a> From<&'a [PathBuf]> for OutputTarget<'a> {
    fn from(paths: &'a [PathBuf]) -> Self {
        OutputTarget::Multi(paths)
    }
}

/// Row/column window of a block inside the full raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockWindow {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl BlockWindow {
    pub fn new(rows: Range<usize>, cols: Range<usize>) -> Self {
        Self { rows, cols }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.end.saturating_sub(self.rows.start)
    }

    pub fn n_cols(&self) -> usize {
        self.cols.end.saturating_sub(self.cols.start)
    }

    /// Whether the window lies inside a `width` x `height` raster.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        self.rows.start <= self.rows.end
            && self.cols.start <= self.cols.end
            && self.rows.end <= height
            && self.cols.end <= width
    }
}

fn check_shape(layers: usize, rows: usize, cols: usize, files: usize, window: &BlockWindow) -> Result<()> {
    if layers != files {
        return Err(Error::ShapeMismatch { layers, files });
    }
    if window.n_rows() != rows || window.n_cols() != cols {
        return Err(Error::WindowMismatch {
            window_rows: window.n_rows(),
            window_cols: window.n_cols(),
            block_rows: rows,
            block_cols: cols,
        });
    }
    Ok(())
}

/// Write each layer of `block` into band 1 of the matching output file.
///
/// `block` is `(layers, block_rows, block_cols)` and must have one layer per
/// target file. Every target's extent is checked against the window before the
/// first write, so an out-of-bounds file leaves all targets untouched. Each file
/// is then opened, written at the window offset and closed before the next one.
pub fn save_block<'a, T: RasterElement>(
    block: ArrayView3<'_, T>,
    target: impl Into<OutputTarget<'a>>,
    window: &BlockWindow,
) -> Result<()> {
    let target = target.into();
    let (layers, rows, cols) = block.dim();
    check_shape(layers, rows, cols, target.len(), window)?;

    let paths = target.paths();
    for path in &paths {
        let (width, height) = open_read(path)?.raster_size();
        if !window.fits(width, height) {
            return Err(Error::WindowOutOfBounds {
                path: path.to_path_buf(),
                rows: window.rows.clone(),
                cols: window.cols.clone(),
                width,
                height,
            });
        }
    }

    for (layer, path) in block.axis_iter(Axis(0)).zip(paths) {
        let dataset = open_update(path)?;
        let buffer: Vec<T> = layer.iter().copied().collect();
        {
            let mut band = dataset.rasterband(1)?;
            write_window(
                &mut band,
                (window.cols.start, window.rows.start),
                (cols, rows),
                &buffer,
            )?;
        }
        dataset.close()?;
        debug!(
            "Wrote block rows {:?} cols {:?} to {:?}",
            window.rows, window.cols, path
        );
    }
    Ok(())
}

/// Write a single 2-D block into band 1 of `output`.
pub fn save_block_2d<T: RasterElement>(
    block: ArrayView2<'_, T>,
    output: &Path,
    window: &BlockWindow,
) -> Result<()> {
    save_block(block.insert_axis(Axis(0)), output, window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn window_bounds() {
        let window = BlockWindow::new(1..3, 1..3);
        assert_eq!(window.n_rows(), 2);
        assert_eq!(window.n_cols(), 2);
        assert!(window.fits(4, 4));
        assert!(window.fits(3, 3));
        assert!(!window.fits(2, 4));
        assert!(!window.fits(4, 2));
    }

    #[test]
    fn layer_count_must_match_file_count() {
        let block = Array3::<f32>::zeros((3, 2, 2));
        let files = vec![PathBuf::from("a.tif"), PathBuf::from("b.tif")];
        let err = save_block(block.view(), files.as_slice(), &BlockWindow::new(0..2, 0..2)).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { layers: 3, files: 2 }));
    }

    #[test]
    fn window_must_match_block_dims() {
        let block = Array3::<f32>::zeros((1, 2, 2));
        let err = save_block(block.view(), Path::new("a.tif"), &BlockWindow::new(0..3, 0..2)).unwrap_err();
        assert!(matches!(err, Error::WindowMismatch { window_rows: 3, block_rows: 2, .. }));
    }

    #[test]
    fn target_lengths() {
        let files = vec![PathBuf::from("a.tif"), PathBuf::from("b.tif")];
        assert_eq!(OutputTarget::from(files.as_slice()).len(), 2);
        assert_eq!(OutputTarget::from(Path::new("a.tif")).len(), 1);
        assert_eq!(
            OutputTarget::from(files.as_slice()).paths(),
            vec![Path::new("a.tif"), Path::new("b.tif")]
        );
    }
}
