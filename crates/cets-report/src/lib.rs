//! CETS to mmCIF conversion.
//!
//! - [`build_document`] / [`generate_mmcif`]: map every region onto the EM
//!   categories and lay the blocks out in document order
//! - [`convert_cets_to_mmcif`]: load a CETS file and write `<name>.cif`

mod convert;
mod document;

pub use convert::{CategorySummary, ConversionSummary, convert_cets_to_mmcif, output_path};
pub use document::{build_document, generate_mmcif};
