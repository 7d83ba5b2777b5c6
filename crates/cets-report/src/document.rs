//! mmCIF document assembly.

use anyhow::{Context, Result};
use tracing::info;

use cets_map::CategoryKind;
use cets_mmcif::MmcifDocument;
use cets_model::Dataset;

/// Map every region of `dataset` onto the EM categories.
///
/// Blocks are kept in [`CategoryKind::ALL`] order, including empty ones,
/// which render to nothing.
pub fn build_document(dataset: &Dataset) -> Result<MmcifDocument> {
    let regions = &dataset.regions;
    info!(
        dataset = %dataset.name_or_default(),
        region_count = regions.len(),
        "processing regions"
    );
    let blocks = CategoryKind::ALL
        .into_iter()
        .map(|kind| {
            kind.block(regions)
                .with_context(|| format!("map category {kind}"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(MmcifDocument::new(dataset.name_or_default(), blocks))
}

/// Render `dataset` as mmCIF text.
pub fn generate_mmcif(dataset: &Dataset) -> Result<String> {
    Ok(build_document(dataset)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cets_model::parse_dataset;

    #[test]
    fn empty_dataset_is_header_only() {
        let dataset = parse_dataset(r#"{"regions": []}"#).unwrap();
        assert_eq!(generate_mmcif(&dataset).unwrap(), "data_unknown\n#\n");
    }

    #[test]
    fn blocks_follow_category_order() {
        let dataset = parse_dataset(r#"{"name": "t1", "regions": [{"id": "r1"}]}"#).unwrap();
        let document = build_document(&dataset).unwrap();
        let present: Vec<&str> = document
            .non_empty_blocks()
            .map(|block| block.category())
            .collect();
        assert_eq!(
            present,
            vec![
                "em_experiment",
                "em_imaging_optics",
                "em_tomography_specimen",
                "em_image_processing",
                "em_software",
            ]
        );
    }
}
