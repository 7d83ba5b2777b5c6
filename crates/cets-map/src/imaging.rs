//! `em_imaging`: acquisition conditions of the first tilt series.

use cets_mmcif::CifValue;
use cets_model::{Region, RegionId, Scalar};

use crate::category::Category;
use crate::tilt::tilt_range;

/// Imaging mode assumed for cryo-ET acquisitions.
pub const IMAGING_MODE: &str = "BRIGHT FIELD";

#[derive(Debug, Clone, PartialEq)]
pub struct ImagingRow {
    pub id: RegionId,
    pub microscope_model: Option<String>,
    pub mode: &'static str,
    /// Smallest nominal tilt angle, in its source representation.
    pub tilt_angle_min: Option<Scalar>,
    pub tilt_angle_max: Option<Scalar>,
    /// Accumulated dose of the last image in the series.
    pub electron_dose: Option<Scalar>,
    pub accelerating_voltage: Option<Scalar>,
    pub illumination_mode: Option<String>,
}

impl Category for ImagingRow {
    const NAME: &'static str = "em_imaging";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "microscope_model",
        "mode",
        "tilt_angle_min",
        "tilt_angle_max",
        "electron_dose",
        "accelerating_voltage",
        "illumination_mode",
    ];

    fn extract(region: &Region) -> Option<Self> {
        let images = region.acquisition_images()?;
        let range = tilt_range(images);
        let electron_dose = images
            .last()
            .and_then(|image| image.accumulated_dose.clone());
        Some(Self {
            id: region.region_id(),
            microscope_model: None,
            mode: IMAGING_MODE,
            tilt_angle_min: range.min.cloned(),
            tilt_angle_max: range.max.cloned(),
            electron_dose,
            accelerating_voltage: None,
            illumination_mode: None,
        })
    }

    fn values(&self) -> Vec<CifValue> {
        vec![
            CifValue::text(self.id.as_str()),
            self.microscope_model.clone().map_or(CifValue::Unknown, CifValue::Text),
            CifValue::quoted(self.mode),
            CifValue::from_scalar(self.tilt_angle_min.as_ref()),
            CifValue::from_scalar(self.tilt_angle_max.as_ref()),
            CifValue::from_scalar(self.electron_dose.as_ref()),
            CifValue::from_scalar(self.accelerating_voltage.as_ref()),
            self.illumination_mode.clone().map_or(CifValue::Unknown, CifValue::Text),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(json: &str) -> Option<Vec<String>> {
        let region: Region = serde_json::from_str(json).unwrap();
        ImagingRow::extract(&region)
            .map(|row| row.values().iter().map(ToString::to_string).collect())
    }

    #[test]
    fn bounds_and_last_dose() {
        let values = rendered(
            r#"{"id": "r1", "tilt_series": [{"images": [
                {"nominal_tilt_angle": 0, "accumulated_dose": 1.5},
                {"nominal_tilt_angle": -10, "accumulated_dose": 3.0},
                {"nominal_tilt_angle": 25, "accumulated_dose": 4.5}
            ]}]}"#,
        )
        .unwrap();
        assert_eq!(values, vec!["r1", "?", "'BRIGHT FIELD'", "-10", "25", "4.5", "?", "?"]);
    }

    #[test]
    fn missing_angles_and_dose_are_unknown() {
        let values = rendered(r#"{"tilt_series": [{"images": [{}, {}]}]}"#).unwrap();
        assert_eq!(values[3..6], ["?", "?", "?"]);
    }

    #[test]
    fn dose_comes_from_last_image_only() {
        let values = rendered(
            r#"{"tilt_series": [{"images": [{"accumulated_dose": 2}, {}]}]}"#,
        )
        .unwrap();
        assert_eq!(values[5], "?");
    }

    #[test]
    fn no_images_no_row() {
        assert!(rendered(r#"{"tilt_series": [{"images": []}]}"#).is_none());
        assert!(rendered(r#"{"tilt_series": []}"#).is_none());
        assert!(rendered("{}").is_none());
    }
}
