//! `em_image_processing`: one row per region.
//!
//! The row id is the anchor referenced by `em_3d_reconstruction` and
//! `em_software`.

use cets_mmcif::CifValue;
use cets_model::{Region, RegionId};

use crate::category::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageProcessingRow {
    pub id: String,
    pub image_recording_id: RegionId,
}

impl Category for ImageProcessingRow {
    const NAME: &'static str = "em_image_processing";
    const COLUMNS: &'static [&'static str] = &["id", "image_recording_id"];

    fn extract(region: &Region) -> Option<Self> {
        let region_id = region.region_id();
        Some(Self {
            id: region_id.processing_id(),
            image_recording_id: region_id,
        })
    }

    fn values(&self) -> Vec<CifValue> {
        vec![
            CifValue::text(self.id.as_str()),
            CifValue::text(self.image_recording_id.as_str()),
        ]
    }
}
