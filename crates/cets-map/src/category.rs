use std::fmt;

use cets_mmcif::{CifValue, LoopBlock, Result};
use cets_model::Region;
use tracing::debug;

use crate::{
    ExperimentRow, ImageProcessingRow, ImageRecordingRow, ImagingOpticsRow, ImagingRow, MapRow,
    ReconstructionRow, SoftwareRow, TomographyRow, TomographySpecimenRow,
};

/// An mmCIF category filled from one CETS region at a time.
pub trait Category: Sized {
    /// Category name without the leading underscore, e.g. `em_imaging`.
    const NAME: &'static str;

    /// Column names in output order.
    const COLUMNS: &'static [&'static str];

    /// Build the row for `region`, or `None` when the region lacks the data
    /// this category needs.
    fn extract(region: &Region) -> Option<Self>;

    /// Row values in [`Self::COLUMNS`] order.
    fn values(&self) -> Vec<CifValue>;
}

/// Run a category over every region and collect the rows into a block.
///
/// Regions without a row are skipped; row order follows region order.
///
/// # Errors
///
/// Returns an error if a row's width does not match the category columns.
pub fn emit<C: Category>(regions: &[Region]) -> Result<LoopBlock> {
    let mut block = LoopBlock::new(C::NAME, C::COLUMNS);
    for row in regions.iter().filter_map(C::extract) {
        block.push_row(row.values())?;
    }
    debug!(
        category = C::NAME,
        rows = block.row_count(),
        skipped = regions.len() - block.row_count(),
        "category mapped"
    );
    Ok(block)
}

/// The EM categories written for a CETS dataset, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Experiment,
    Imaging,
    Tomography,
    ImagingOptics,
    TomographySpecimen,
    ImageRecording,
    ImageProcessing,
    Reconstruction,
    Software,
    Map,
}

impl CategoryKind {
    /// All categories in the order they appear in a document.
    pub const ALL: [CategoryKind; 10] = [
        CategoryKind::Experiment,
        CategoryKind::Imaging,
        CategoryKind::Tomography,
        CategoryKind::ImagingOptics,
        CategoryKind::TomographySpecimen,
        CategoryKind::ImageRecording,
        CategoryKind::ImageProcessing,
        CategoryKind::Reconstruction,
        CategoryKind::Software,
        CategoryKind::Map,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Experiment => ExperimentRow::NAME,
            Self::Imaging => ImagingRow::NAME,
            Self::Tomography => TomographyRow::NAME,
            Self::ImagingOptics => ImagingOpticsRow::NAME,
            Self::TomographySpecimen => TomographySpecimenRow::NAME,
            Self::ImageRecording => ImageRecordingRow::NAME,
            Self::ImageProcessing => ImageProcessingRow::NAME,
            Self::Reconstruction => ReconstructionRow::NAME,
            Self::Software => SoftwareRow::NAME,
            Self::Map => MapRow::NAME,
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Experiment => ExperimentRow::COLUMNS,
            Self::Imaging => ImagingRow::COLUMNS,
            Self::Tomography => TomographyRow::COLUMNS,
            Self::ImagingOptics => ImagingOpticsRow::COLUMNS,
            Self::TomographySpecimen => TomographySpecimenRow::COLUMNS,
            Self::ImageRecording => ImageRecordingRow::COLUMNS,
            Self::ImageProcessing => ImageProcessingRow::COLUMNS,
            Self::Reconstruction => ReconstructionRow::COLUMNS,
            Self::Software => SoftwareRow::COLUMNS,
            Self::Map => MapRow::COLUMNS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Experiment => "Experiment",
            Self::Imaging => "Imaging",
            Self::Tomography => "Tomography",
            Self::ImagingOptics => "Imaging optics",
            Self::TomographySpecimen => "Tomography specimen",
            Self::ImageRecording => "Image recording",
            Self::ImageProcessing => "Image processing",
            Self::Reconstruction => "3D reconstruction",
            Self::Software => "Software",
            Self::Map => "Map",
        }
    }

    /// Source data a region must carry for this category to produce a row.
    /// `None` means every region produces a row.
    pub fn required_data(self) -> Option<&'static str> {
        match self {
            Self::Imaging | Self::Tomography | Self::Reconstruction => {
                Some("tilt_series[0].images")
            }
            Self::ImageRecording => Some("movie_stack_collection.movie_stacks[0].stacks"),
            Self::Map => Some("tomograms[0]"),
            Self::Experiment
            | Self::ImagingOptics
            | Self::TomographySpecimen
            | Self::ImageProcessing
            | Self::Software => None,
        }
    }

    /// Whether every region yields a row, with placeholders where CETS has no data.
    pub fn always_present(self) -> bool {
        self.required_data().is_none()
    }

    /// Map all regions onto this category.
    ///
    /// # Errors
    ///
    /// Returns an error if a row's width does not match the category columns.
    pub fn block(self, regions: &[Region]) -> Result<LoopBlock> {
        match self {
            Self::Experiment => emit::<ExperimentRow>(regions),
            Self::Imaging => emit::<ImagingRow>(regions),
            Self::Tomography => emit::<TomographyRow>(regions),
            Self::ImagingOptics => emit::<ImagingOpticsRow>(regions),
            Self::TomographySpecimen => emit::<TomographySpecimenRow>(regions),
            Self::ImageRecording => emit::<ImageRecordingRow>(regions),
            Self::ImageProcessing => emit::<ImageProcessingRow>(regions),
            Self::Reconstruction => emit::<ReconstructionRow>(regions),
            Self::Software => emit::<SoftwareRow>(regions),
            Self::Map => emit::<MapRow>(regions),
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
