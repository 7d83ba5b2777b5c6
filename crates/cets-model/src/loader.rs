//! Reading CETS documents from disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ModelError, Result};
use crate::region::Dataset;

/// Read and parse a CETS JSON document.
///
/// # Errors
///
/// Returns [`ModelError::Io`] when the file cannot be read and
/// [`ModelError::Json`] when it is not a valid CETS document.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let text = fs::read_to_string(path).map_err(|error| ModelError::io(path, error))?;
    let dataset: Dataset =
        serde_json::from_str(&text).map_err(|error| ModelError::json(path, error))?;
    debug!(
        path = %path.display(),
        dataset = %dataset.name_or_default(),
        region_count = dataset.regions.len(),
        "loaded CETS document"
    );
    Ok(dataset)
}

/// Parse a CETS document held in memory.
pub fn parse_dataset(text: &str) -> serde_json::Result<Dataset> {
    serde_json::from_str(text)
}
