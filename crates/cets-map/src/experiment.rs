//! `em_experiment`: one row per region.

use cets_mmcif::CifValue;
use cets_model::{Region, RegionId};

use crate::category::Category;

/// Reconstruction method of every CETS region.
pub const RECONSTRUCTION_METHOD: &str = "TOMOGRAPHY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentRow {
    pub id: RegionId,
    pub reconstruction_method: &'static str,
    /// Not described by CETS.
    pub aggregation_state: Option<String>,
    /// Not described by CETS.
    pub specimen_type: Option<String>,
}

impl Category for ExperimentRow {
    const NAME: &'static str = "em_experiment";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "reconstruction_method",
        "aggregation_state",
        "specimen_type",
    ];

    fn extract(region: &Region) -> Option<Self> {
        Some(Self {
            id: region.region_id(),
            reconstruction_method: RECONSTRUCTION_METHOD,
            aggregation_state: None,
            specimen_type: None,
        })
    }

    fn values(&self) -> Vec<CifValue> {
        vec![
            CifValue::text(self.id.as_str()),
            CifValue::quoted(self.reconstruction_method),
            self.aggregation_state.clone().map_or(CifValue::Unknown, CifValue::Text),
            self.specimen_type.clone().map_or(CifValue::Unknown, CifValue::Text),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit;

    #[test]
    fn every_region_is_a_tomography_experiment() {
        let regions: Vec<Region> = serde_json::from_str(r#"[{"id": "r1"}, {}]"#).unwrap();
        let block = emit::<ExperimentRow>(&regions).unwrap();
        assert_eq!(
            block.lines()[6..8],
            ["r1 'TOMOGRAPHY' ? ?".to_string(), "1 'TOMOGRAPHY' ? ?".to_string()]
        );
    }
}
