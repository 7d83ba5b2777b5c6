//! CETS dataset model.
//!
//! A CETS document is a JSON object with a dataset `name` and a list of
//! imaging `regions`. Every nested collection is optional; the types here
//! deserialize missing or `null` collections as empty so that downstream
//! extraction only has to decide whether the data it needs is present.

pub mod error;
pub mod ids;
pub mod loader;
pub mod region;
pub mod scalar;

pub use error::{ModelError, Result};
pub use ids::RegionId;
pub use loader::{load_dataset, parse_dataset};
pub use region::{
    CoordinateTransformation, DEFAULT_DATASET_NAME, Dataset, MovieStackCollection,
    MovieStackSeries, Region, TiltImage, TiltSeries, Tomogram,
};
pub use scalar::Scalar;
