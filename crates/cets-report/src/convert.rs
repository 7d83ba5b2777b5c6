//! Conversion driver: CETS file in, `<name>.cif` out.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use cets_model::load_dataset;

use crate::document::build_document;

/// Rows written for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: String,
    pub rows: usize,
}

/// Outcome of a conversion run.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub dataset_name: String,
    pub output_path: PathBuf,
    pub region_count: usize,
    /// Every category in document order, including those with no rows.
    pub categories: Vec<CategorySummary>,
}

impl ConversionSummary {
    pub fn written_categories(&self) -> usize {
        self.categories.iter().filter(|summary| summary.rows > 0).count()
    }
}

/// Location of the mmCIF file for a dataset.
pub fn output_path(output_dir: &Path, dataset_name: &str) -> PathBuf {
    output_dir.join(format!("{dataset_name}.cif"))
}

/// Convert a CETS JSON document to an mmCIF file in `output_dir`.
///
/// The document is fully assembled before anything is written, so a load
/// failure leaves no output behind. `output_dir` is created if missing.
///
/// # Errors
///
/// Fails when the input cannot be read or parsed, or the output cannot be
/// written.
pub fn convert_cets_to_mmcif(input: &Path, output_dir: &Path) -> Result<ConversionSummary> {
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let dataset = load_dataset(input).context("load CETS dataset")?;
    info!(dataset = %dataset.name_or_default(), "loaded CETS dataset");

    let document = build_document(&dataset)?;
    let categories = document
        .blocks()
        .iter()
        .map(|block| CategorySummary {
            category: block.category().to_string(),
            rows: block.row_count(),
        })
        .collect();

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let path = output_path(output_dir, document.name());
    std::fs::write(&path, document.render())
        .with_context(|| format!("write {}", path.display()))?;

    info!(
        output = %path.display(),
        duration_ms = start.elapsed().as_millis(),
        "written mmCIF file"
    );
    Ok(ConversionSummary {
        dataset_name: document.name().to_string(),
        output_path: path,
        region_count: dataset.regions.len(),
        categories,
    })
}
