//! `em_software`: one reconstruction-software row per region.

use cets_mmcif::CifValue;
use cets_model::Region;

use crate::category::Category;

pub const SOFTWARE_CATEGORY: &str = "RECONSTRUCTION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftwareRow {
    pub id: String,
    /// CETS does not record which software was used.
    pub name: Option<String>,
    pub category: &'static str,
    pub image_processing_id: String,
}

impl Category for SoftwareRow {
    const NAME: &'static str = "em_software";
    const COLUMNS: &'static [&'static str] = &["id", "name", "category", "image_processing_id"];

    fn extract(region: &Region) -> Option<Self> {
        let region_id = region.region_id();
        Some(Self {
            id: region_id.software_id(),
            name: None,
            category: SOFTWARE_CATEGORY,
            image_processing_id: region_id.processing_id(),
        })
    }

    fn values(&self) -> Vec<CifValue> {
        vec![
            CifValue::text(self.id.as_str()),
            self.name.clone().map_or(CifValue::Unknown, CifValue::Text),
            CifValue::quoted(self.category),
            CifValue::text(self.image_processing_id.as_str()),
        ]
    }
}
