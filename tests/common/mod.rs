#![allow(dead_code)]

use std::path::{Path, PathBuf};

use gdal::DriverManager;
use gdal::raster::Buffer;

pub const GEOTRANSFORM: [f64; 6] = [-120.0, 0.001, 0.0, 35.0, 0.0, -0.001];

pub const WGS84_WKT: &str = r#"GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563,AUTHORITY["EPSG","7030"]],AUTHORITY["EPSG","6326"]],PRIMEM["Greenwich",0,AUTHORITY["EPSG","8901"]],UNIT["degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],AXIS["Latitude",NORTH],AXIS["Longitude",EAST],AUTHORITY["EPSG","4326"]]"#;

pub const NAD83_WKT: &str = r#"GEOGCS["NAD83",DATUM["North_American_Datum_1983",SPHEROID["GRS 1980",6378137,298.257222101,AUTHORITY["EPSG","7019"]],AUTHORITY["EPSG","6269"]],PRIMEM["Greenwich",0,AUTHORITY["EPSG","8901"]],UNIT["degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],AUTHORITY["EPSG","4269"]]"#;

pub const IDENTITY: [f64; 6] = [0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// Write a 4x4 single-band VRT carrying only the given SRS and geotransform.
///
/// GTiff drops an identity geotransform on write, so sources that need one
/// (or a projection with no geotransform) are described as VRT XML instead.
pub fn write_vrt(dir: &Path, name: &str, srs: Option<&str>, gt: Option<[f64; 6]>) -> PathBuf {
    let path = dir.join(name);
    let mut xml = String::from(r#"<VRTDataset rasterXSize="4" rasterYSize="4">"#);
    if let Some(srs) = srs {
        xml.push_str(&format!("<SRS>{}</SRS>", srs));
    }
    if let Some(gt) = gt {
        let values: Vec<String> = gt.iter().map(|v| v.to_string()).collect();
        xml.push_str(&format!("<GeoTransform>{}</GeoTransform>", values.join(", ")));
    }
    xml.push_str(r#"<VRTRasterBand dataType="Float32" band="1"/></VRTDataset>"#);
    std::fs::write(&path, xml).unwrap();
    path
}

/// Pixel value written at `(band, row, col)` of fixtures.
pub fn fixture_value(band: usize, row: usize, col: usize, cols: usize) -> f32 {
    (band * 1000 + row * cols + col) as f32
}

pub struct Fixture {
    pub bands: usize,
    pub rows: usize,
    pub cols: usize,
    pub georeferenced: bool,
    pub nodata: Option<f64>,
}

impl Default for Fixture {
    fn default() -> Self {
        Fixture {
            bands: 1,
            rows: 4,
            cols: 4,
            georeferenced: true,
            nodata: None,
        }
    }
}

impl Fixture {
    /// Write a Float32 GTiff with `fixture_value` pixels.
    pub fn write(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let driver = DriverManager::get_driver_by_name("GTiff").unwrap();
        let mut ds = driver
            .create_with_band_type::<f32, _>(&path, self.cols, self.rows, self.bands)
            .unwrap();
        if self.georeferenced {
            ds.set_geo_transform(&GEOTRANSFORM).unwrap();
            ds.set_projection(WGS84_WKT).unwrap();
        }
        for b in 1..=self.bands {
            let mut band = ds.rasterband(b).unwrap();
            let data: Vec<f32> = (0..self.rows)
                .flat_map(|r| (0..self.cols).map(move |c| (r, c)))
                .map(|(r, c)| fixture_value(b, r, c, self.cols))
                .collect();
            let mut buf = Buffer::new((self.cols, self.rows), data);
            band.write((0, 0), (self.cols, self.rows), &mut buf).unwrap();
            if let Some(nodata) = self.nodata {
                band.set_no_data_value(Some(nodata)).unwrap();
            }
        }
        path
    }
}
