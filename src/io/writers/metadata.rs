use std::path::Path;
use tracing::{debug, info};

use crate::error::Result;
use crate::io::gdal::{is_identity, open_read, open_update};

/// Copy projection, geotransform and band-1 no-data from `src` to `dst`.
///
/// Pixel data is not touched. When `src` has neither a projection nor a
/// geotransform, `dst` is left as is, even if `src` carries a no-data value.
pub fn copy_projection(src: &Path, dst: &Path) -> Result<()> {
    let src_ds = open_read(src)?;
    let mut dst_ds = open_update(dst)?;

    let projection = Some(src_ds.projection()).filter(|p| !p.is_empty());
    let geotransform = src_ds.geo_transform().ok();
    let nodata = src_ds.rasterband(1)?.no_data_value();

    if projection.is_none() && geotransform.is_none() {
        info!("No projection or geotransform found on file {:?}", src);
        return Ok(());
    }

    if let Some(gt) = geotransform.filter(|gt| !is_identity(gt)) {
        dst_ds.set_geo_transform(&gt)?;
        debug!("Copied geotransform {:?} to {:?}", gt, dst);
    }

    if let Some(projection) = &projection {
        dst_ds.set_projection(projection)?;
    }

    if let Some(value) = nodata {
        dst_ds.rasterband(1)?.set_no_data_value(Some(value))?;
    }

    dst_ds.close()?;
    Ok(())
}
