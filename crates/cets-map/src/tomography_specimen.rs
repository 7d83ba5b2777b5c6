//! `em_tomography_specimen`: one row per region.

use cets_mmcif::CifValue;
use cets_model::Region;

use crate::category::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TomographySpecimenRow {
    pub id: String,
    pub fiducial_markers: Option<String>,
    pub high_pressure_freezing: Option<String>,
}

impl Category for TomographySpecimenRow {
    const NAME: &'static str = "em_tomography_specimen";
    const COLUMNS: &'static [&'static str] = &["id", "fiducial_markers", "high_pressure_freezing"];

    fn extract(region: &Region) -> Option<Self> {
        Some(Self {
            id: region.region_id().specimen_id(),
            fiducial_markers: None,
            high_pressure_freezing: None,
        })
    }

    fn values(&self) -> Vec<CifValue> {
        vec![
            CifValue::text(self.id.as_str()),
            self.fiducial_markers.clone().map_or(CifValue::Unknown, CifValue::Text),
            self.high_pressure_freezing.clone().map_or(CifValue::Unknown, CifValue::Text),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specimen_id_is_derived_from_region() {
        let row = TomographySpecimenRow::extract(&Region::default()).unwrap();
        assert_eq!(row.id, "1_specimen");
        assert_eq!(row.values().len(), TomographySpecimenRow::COLUMNS.len());
    }
}
