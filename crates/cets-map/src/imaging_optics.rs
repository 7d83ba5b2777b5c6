//! `em_imaging_optics`: one row per region, all optics unknown.

use cets_mmcif::CifValue;
use cets_model::{Region, RegionId};

use crate::category::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagingOpticsRow {
    pub id: String,
    pub imaging_id: RegionId,
    pub energyfilter_name: Option<String>,
    pub phase_plate: Option<String>,
}

impl Category for ImagingOpticsRow {
    const NAME: &'static str = "em_imaging_optics";
    const COLUMNS: &'static [&'static str] =
        &["id", "imaging_id", "energyfilter_name", "phase_plate"];

    fn extract(region: &Region) -> Option<Self> {
        let region_id = region.region_id();
        Some(Self {
            id: region_id.optics_id(),
            imaging_id: region_id,
            energyfilter_name: None,
            phase_plate: None,
        })
    }

    fn values(&self) -> Vec<CifValue> {
        vec![
            CifValue::text(self.id.as_str()),
            CifValue::text(self.imaging_id.as_str()),
            self.energyfilter_name.clone().map_or(CifValue::Unknown, CifValue::Text),
            self.phase_plate.clone().map_or(CifValue::Unknown, CifValue::Text),
        ]
    }
}
