//! Integration tests for category extraction across region lists.

use cets_map::{
    Category, CategoryKind, ImageRecordingRow, ImagingRow, ReconstructionRow, TomographyRow,
    emit,
};
use cets_model::Region;

fn regions(json: &str) -> Vec<Region> {
    serde_json::from_str(json).unwrap()
}

fn data_rows<C: Category>(regions: &[Region]) -> Vec<String> {
    let lines = emit::<C>(regions).unwrap().lines();
    if lines.is_empty() {
        return Vec::new();
    }
    let first_row = 2 + C::COLUMNS.len();
    lines[first_row..lines.len() - 1].to_vec()
}

const MIXED_REGIONS: &str = r#"[
    {"id": "bare"},
    {"id": "tilted", "tilt_series": [{"images": [
        {"nominal_tilt_angle": -10, "accumulated_dose": 1.0},
        {"nominal_tilt_angle": 0, "accumulated_dose": 2.0},
        {"nominal_tilt_angle": 25, "accumulated_dose": 3.0}
    ]}]},
    {"id": "movies", "movie_stack_collection": {"movie_stacks": [{"stacks": [{}, {}]}]}},
    {"id": "tomo", "tomograms": [{"id": "m1", "path": "m1.mrc"}]}
]"#;

#[test]
fn regions_without_acquisition_data_only_feed_unconditional_categories() {
    let regions = regions(r#"[{"id": "r1"}]"#);
    for kind in CategoryKind::ALL {
        let block = kind.block(&regions).unwrap();
        let expected = usize::from(kind.always_present());
        assert_eq!(block.row_count(), expected, "{kind}");
    }
}

#[test]
fn row_count_matches_regions_with_data() {
    let regions = regions(MIXED_REGIONS);
    let counts: Vec<(CategoryKind, usize)> = CategoryKind::ALL
        .into_iter()
        .map(|kind| (kind, kind.block(&regions).unwrap().row_count()))
        .collect();
    assert_eq!(
        counts,
        vec![
            (CategoryKind::Experiment, 4),
            (CategoryKind::Imaging, 1),
            (CategoryKind::Tomography, 1),
            (CategoryKind::ImagingOptics, 4),
            (CategoryKind::TomographySpecimen, 4),
            (CategoryKind::ImageRecording, 1),
            (CategoryKind::ImageProcessing, 4),
            (CategoryKind::Reconstruction, 1),
            (CategoryKind::Software, 4),
            (CategoryKind::Map, 1),
        ]
    );
}

#[test]
fn rows_keep_region_order_without_deduplication() {
    let regions = regions(r#"[{"id": "b"}, {"id": "a"}, {"id": "b"}]"#);
    let rows = data_rows::<cets_map::ImageProcessingRow>(&regions);
    assert_eq!(rows, vec!["b_processing b", "a_processing a", "b_processing b"]);
}

#[test]
fn every_row_has_one_value_per_column() {
    let regions = regions(MIXED_REGIONS);
    for kind in CategoryKind::ALL {
        let block = kind.block(&regions).unwrap();
        for row in block.rows() {
            assert_eq!(row.len(), kind.columns().len(), "{kind}");
        }
    }
}

#[test]
fn imaging_and_tomography_differ_when_no_angles() {
    let regions = regions(r#"[{"id": "r1", "tilt_series": [{"images": [{}, {}]}]}]"#);

    let imaging = data_rows::<ImagingRow>(&regions);
    let tomography = data_rows::<TomographyRow>(&regions);

    assert_eq!(imaging, vec!["r1 ? 'BRIGHT FIELD' ? ? ? ? ?"]);
    assert_eq!(tomography, vec!["r1 r1 2 0.00 0.00"]);
}

#[test]
fn tilt_extremes_across_categories() {
    let regions = regions(MIXED_REGIONS);

    let imaging = data_rows::<ImagingRow>(&regions);
    let tomography = data_rows::<TomographyRow>(&regions);

    assert_eq!(imaging, vec!["tilted ? 'BRIGHT FIELD' -10 25 3.0 ? ?"]);
    assert_eq!(tomography, vec!["tilted tilted 3 -10.00 25.00"]);
}

#[test]
fn only_first_series_is_consulted() {
    let regions = regions(
        r#"[{"id": "r1",
            "tilt_series": [
                {"images": [{"nominal_tilt_angle": 5}]},
                {"images": [{"nominal_tilt_angle": -60}, {"nominal_tilt_angle": 60}]}
            ],
            "movie_stack_collection": {"movie_stacks": [{"stacks": [{}]}, {"stacks": [{}, {}]}]},
            "tomograms": [{"id": "first"}, {"id": "second"}]
        }]"#,
    );

    assert_eq!(data_rows::<TomographyRow>(&regions), vec!["r1 r1 1 5.00 5.00"]);
    assert_eq!(
        data_rows::<ReconstructionRow>(&regions),
        vec!["r1 r1_processing 'TOMOGRAPHY' 1"]
    );
    assert_eq!(
        data_rows::<ImageRecordingRow>(&regions),
        vec!["r1 r1 1 1 COUNTING"]
    );
    let map = CategoryKind::Map.block(&regions).unwrap();
    assert_eq!(map.row_count(), 1);
    assert_eq!(map.rows()[0][0].to_string(), "first");
}

#[test]
fn processing_links_agree_across_categories() {
    let regions = regions(MIXED_REGIONS);
    let processing = data_rows::<cets_map::ImageProcessingRow>(&regions);
    let software = data_rows::<cets_map::SoftwareRow>(&regions);
    let reconstruction = data_rows::<ReconstructionRow>(&regions);

    let processing_ids: Vec<&str> = processing
        .iter()
        .filter_map(|row| row.split(' ').next())
        .collect();
    for row in software.iter().chain(reconstruction.iter()) {
        assert!(
            processing_ids.iter().any(|id| row.contains(id)),
            "unlinked row: {row}"
        );
    }
}
