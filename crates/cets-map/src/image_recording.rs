//! `em_image_recording`: movie stacks of the first movie-stack series.

use cets_mmcif::CifValue;
use cets_model::{Region, RegionId};

use crate::category::Category;

/// Grids per region; CETS describes one grid at a time.
pub const GRIDS_IMAGED: usize = 1;

pub const DETECTOR_MODE: &str = "COUNTING";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecordingRow {
    pub id: RegionId,
    pub imaging_id: RegionId,
    pub num_grids_imaged: usize,
    pub num_real_images: usize,
    pub detector_mode: &'static str,
}

impl Category for ImageRecordingRow {
    const NAME: &'static str = "em_image_recording";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "imaging_id",
        "num_grids_imaged",
        "num_real_images",
        "detector_mode",
    ];

    fn extract(region: &Region) -> Option<Self> {
        let series = region.first_movie_series()?;
        if series.stacks.is_empty() {
            return None;
        }
        let region_id = region.region_id();
        Some(Self {
            imaging_id: region_id.clone(),
            id: region_id,
            num_grids_imaged: GRIDS_IMAGED,
            num_real_images: series.stacks.len(),
            detector_mode: DETECTOR_MODE,
        })
    }

    fn values(&self) -> Vec<CifValue> {
        vec![
            CifValue::text(self.id.as_str()),
            CifValue::text(self.imaging_id.as_str()),
            CifValue::from(self.num_grids_imaged),
            CifValue::from(self.num_real_images),
            CifValue::text(self.detector_mode),
        ]
    }
}
