//! CETS to mmCIF category mapping.
//!
//! Each EM category has its own module with a typed row and an `extract`
//! function that returns `None` when a region lacks the data the category
//! needs. [`emit`] turns the rows of all regions into one `loop_` block, and
//! [`CategoryKind`] fixes the order in which categories appear in a document.
//!
//! When a region holds several tilt series, movie-stack series or
//! tomograms, only the first of each is mapped.

mod category;
pub mod experiment;
pub mod image_processing;
pub mod image_recording;
pub mod imaging;
pub mod imaging_optics;
pub mod map;
pub mod reconstruction;
pub mod software;
mod tilt;
pub mod tomography;
pub mod tomography_specimen;

pub use category::{Category, CategoryKind, emit};
pub use experiment::ExperimentRow;
pub use image_processing::ImageProcessingRow;
pub use image_recording::ImageRecordingRow;
pub use imaging::ImagingRow;
pub use imaging_optics::ImagingOpticsRow;
pub use map::MapRow;
pub use reconstruction::ReconstructionRow;
pub use software::SoftwareRow;
pub use tomography::TomographyRow;
pub use tomography_specimen::TomographySpecimenRow;
