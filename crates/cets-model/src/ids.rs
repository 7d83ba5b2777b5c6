use std::fmt;

use crate::scalar::Scalar;

/// Identifier used when a region or tomogram has no `id`.
pub const DEFAULT_ID: &str = "1";

/// A region identifier and the ids derived from it.
///
/// Several mmCIF categories reference each other through ids built from
/// the region id. All suffixes live here so both sides of a link agree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Render an optional source id, falling back to [`DEFAULT_ID`].
    pub fn from_scalar(value: Option<&Scalar>) -> Self {
        match value {
            Some(scalar) => Self(scalar.to_string()),
            None => Self(DEFAULT_ID.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `em_image_processing.id`, referenced by reconstruction and software rows.
    pub fn processing_id(&self) -> String {
        format!("{}_processing", self.0)
    }

    /// `em_software.id`.
    pub fn software_id(&self) -> String {
        format!("{}_software_1", self.0)
    }

    /// `em_imaging_optics.id`.
    pub fn optics_id(&self) -> String {
        format!("{}_1", self.0)
    }

    /// `em_tomography_specimen.id`.
    pub fn specimen_id(&self) -> String {
        format!("{}_specimen", self.0)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
