//! `em_tomography`: tilt count and tilt range of the first tilt series.

use cets_mmcif::CifValue;
use cets_model::{Region, RegionId};

use crate::category::Category;
use crate::tilt::tilt_range;

/// Decimal places of the tilt-angle bounds.
const TILT_DECIMALS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct TomographyRow {
    pub id: RegionId,
    pub imaging_id: RegionId,
    /// Number of images, including images without a tilt angle.
    pub num_tilts: usize,
    /// Zero when no image carries an angle.
    pub tilt_angle_min: f64,
    pub tilt_angle_max: f64,
}

impl Category for TomographyRow {
    const NAME: &'static str = "em_tomography";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "imaging_id",
        "num_tilts",
        "tilt_angle_min",
        "tilt_angle_max",
    ];

    fn extract(region: &Region) -> Option<Self> {
        let images = region.acquisition_images()?;
        let range = tilt_range(images);
        let region_id = region.region_id();
        Some(Self {
            imaging_id: region_id.clone(),
            id: region_id,
            num_tilts: images.len(),
            tilt_angle_min: range.min.and_then(|angle| angle.as_f64()).unwrap_or(0.0),
            tilt_angle_max: range.max.and_then(|angle| angle.as_f64()).unwrap_or(0.0),
        })
    }

    fn values(&self) -> Vec<CifValue> {
        vec![
            CifValue::text(self.id.as_str()),
            CifValue::text(self.imaging_id.as_str()),
            CifValue::from(self.num_tilts),
            CifValue::fixed(self.tilt_angle_min, TILT_DECIMALS),
            CifValue::fixed(self.tilt_angle_max, TILT_DECIMALS),
        ]
    }
}
