//! `em_3d_reconstruction`: one tomographic reconstruction per tilt series.

use cets_mmcif::CifValue;
use cets_model::{Region, RegionId};

use crate::category::Category;
use crate::experiment::RECONSTRUCTION_METHOD;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructionRow {
    pub id: RegionId,
    pub image_processing_id: String,
    pub method: &'static str,
    /// Number of tilt images that went into the reconstruction.
    pub num_particles: usize,
}

impl Category for ReconstructionRow {
    const NAME: &'static str = "em_3d_reconstruction";
    const COLUMNS: &'static [&'static str] =
        &["id", "image_processing_id", "method", "num_particles"];

    fn extract(region: &Region) -> Option<Self> {
        let images = region.acquisition_images()?;
        let region_id = region.region_id();
        Some(Self {
            image_processing_id: region_id.processing_id(),
            id: region_id,
            method: RECONSTRUCTION_METHOD,
            num_particles: images.len(),
        })
    }

    fn values(&self) -> Vec<CifValue> {
        vec![
            CifValue::text(self.id.as_str()),
            CifValue::text(self.image_processing_id.as_str()),
            CifValue::quoted(self.method),
            CifValue::from(self.num_particles),
        ]
    }
}
