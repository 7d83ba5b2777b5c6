//! CETS dataset, region and nested acquisition records.
//!
//! Only the keys consumed by the mmCIF mapping are modelled; everything else
//! in the source document is ignored on load.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::RegionId;
use crate::scalar::Scalar;

/// Dataset name used when the document has no `name`.
pub const DEFAULT_DATASET_NAME: &str = "unknown";

/// Transformation type that carries voxel spacing.
const SCALE_TRANSFORMATION: &str = "scale";

/// Top-level CETS document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Usually a string; numeric names are rendered as written.
    #[serde(default)]
    pub name: Option<Scalar>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub regions: Vec<Region>,
}

impl Dataset {
    /// Dataset name, or [`DEFAULT_DATASET_NAME`] when the document has none.
    pub fn name_or_default(&self) -> Cow<'_, str> {
        match &self.name {
            Some(Scalar::Text(text)) => Cow::Borrowed(text.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
            None => Cow::Borrowed(DEFAULT_DATASET_NAME),
        }
    }
}

/// One imaging/reconstruction unit of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    #[serde(default)]
    pub id: Option<Scalar>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tilt_series: Vec<TiltSeries>,
    #[serde(default)]
    pub movie_stack_collection: Option<MovieStackCollection>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tomograms: Vec<Tomogram>,
}

impl Region {
    pub fn region_id(&self) -> RegionId {
        RegionId::from_scalar(self.id.as_ref())
    }

    /// The tilt series used for extraction. Later series are ignored.
    pub fn first_tilt_series(&self) -> Option<&TiltSeries> {
        self.tilt_series.first()
    }

    /// Images of the first tilt series, if there is at least one.
    pub fn acquisition_images(&self) -> Option<&[TiltImage]> {
        let series = self.first_tilt_series()?;
        if series.images.is_empty() {
            None
        } else {
            Some(&series.images)
        }
    }

    /// The movie-stack series used for extraction. Later series are ignored.
    pub fn first_movie_series(&self) -> Option<&MovieStackSeries> {
        self.movie_stack_collection
            .as_ref()
            .and_then(|collection| collection.movie_stacks.first())
    }

    /// The tomogram used for extraction. Later tomograms are ignored.
    pub fn first_tomogram(&self) -> Option<&Tomogram> {
        self.tomograms.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TiltSeries {
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<TiltImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TiltImage {
    #[serde(default)]
    pub nominal_tilt_angle: Option<Scalar>,
    #[serde(default)]
    pub accumulated_dose: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieStackCollection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub movie_stacks: Vec<MovieStackSeries>,
}

/// A movie-stack series. Individual stacks are only counted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieStackSeries {
    #[serde(default, deserialize_with = "null_as_default")]
    pub stacks: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tomogram {
    #[serde(default)]
    pub id: Option<Scalar>,
    #[serde(default)]
    pub width: Option<Scalar>,
    #[serde(default)]
    pub height: Option<Scalar>,
    #[serde(default)]
    pub depth: Option<Scalar>,
    #[serde(default)]
    pub path: Option<Scalar>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coordinate_transformations: Vec<CoordinateTransformation>,
}

impl Tomogram {
    /// Voxel spacing from the first `scale` transformation with exactly
    /// three components. `null` components stay in place as `None`.
    pub fn pixel_spacing(&self) -> Option<[Option<&Scalar>; 3]> {
        self.coordinate_transformations
            .iter()
            .filter(|transform| transform.is_scale())
            .find_map(|transform| {
                let scale = <&[Option<Scalar>; 3]>::try_from(transform.scale.as_deref()?).ok()?;
                Some(scale.each_ref().map(Option::as_ref))
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinateTransformation {
    #[serde(default)]
    pub transformation_type: Option<Scalar>,
    #[serde(default)]
    pub scale: Option<Vec<Option<Scalar>>>,
}

impl CoordinateTransformation {
    pub fn is_scale(&self) -> bool {
        self.transformation_type
            .as_ref()
            .and_then(Scalar::as_str)
            .is_some_and(|kind| kind == SCALE_TRANSFORMATION)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
