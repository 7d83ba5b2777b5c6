//! `em_map`: the first tomogram of a region.

use cets_mmcif::CifValue;
use cets_model::ids::DEFAULT_ID;
use cets_model::{Region, Scalar};

use crate::category::Category;

/// Map format recorded for MRC files.
pub const MRC_FORMAT: &str = "CCP4";

const MRC_EXTENSION: &str = ".mrc";

pub const MAP_TYPE: &str = "TOMOGRAM";

#[derive(Debug, Clone, PartialEq)]
pub struct MapRow {
    /// Tomogram id, `1` when absent.
    pub id: Scalar,
    pub file: Option<Scalar>,
    /// Only known for `.mrc` files.
    pub format: Option<&'static str>,
    pub num_columns: Option<Scalar>,
    pub num_rows: Option<Scalar>,
    pub num_sections: Option<Scalar>,
    /// Voxel spacing from the first three-component scale transformation.
    /// All `None` when the tomogram has none.
    pub pixel_spacing: [Option<Scalar>; 3],
    pub map_type: &'static str,
}

impl Category for MapRow {
    const NAME: &'static str = "em_map";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "file",
        "format",
        "num_columns",
        "num_rows",
        "num_sections",
        "pixel_spacing_x",
        "pixel_spacing_y",
        "pixel_spacing_z",
        "type",
    ];

    fn extract(region: &Region) -> Option<Self> {
        let tomogram = region.first_tomogram()?;
        let format = tomogram
            .path
            .as_ref()
            .and_then(Scalar::as_str)
            .filter(|path| path.ends_with(MRC_EXTENSION))
            .map(|_| MRC_FORMAT);
        let pixel_spacing = tomogram
            .pixel_spacing()
            .map_or([None, None, None], |spacing| spacing.map(Option::<&Scalar>::cloned));
        Some(Self {
            id: tomogram
                .id
                .clone()
                .unwrap_or_else(|| Scalar::from(DEFAULT_ID)),
            file: tomogram.path.clone(),
            format,
            num_columns: tomogram.width.clone(),
            num_rows: tomogram.height.clone(),
            num_sections: tomogram.depth.clone(),
            pixel_spacing,
            map_type: MAP_TYPE,
        })
    }

    fn values(&self) -> Vec<CifValue> {
        let [x, y, z] = self.pixel_spacing.each_ref().map(Option::as_ref);
        vec![
            CifValue::from(&self.id),
            CifValue::from_scalar(self.file.as_ref()),
            self.format.map_or(CifValue::Unknown, CifValue::quoted),
            CifValue::from_scalar(self.num_columns.as_ref()),
            CifValue::from_scalar(self.num_rows.as_ref()),
            CifValue::from_scalar(self.num_sections.as_ref()),
            CifValue::from_scalar(x),
            CifValue::from_scalar(y),
            CifValue::from_scalar(z),
            CifValue::quoted(self.map_type),
        ]
    }
}
