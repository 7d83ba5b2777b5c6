//! Tests for loading CETS documents.

use std::fs;
use std::path::PathBuf;

use cets_model::{ModelError, load_dataset, parse_dataset};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "cets-model-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn loads_document_from_disk() {
    let dir = unique_temp_dir("load");
    let path = dir.join("dataset.json");
    fs::write(
        &path,
        r#"{"name": "t1", "extra": {"ignored": true}, "regions": [{"id": "r1"}, {}]}"#,
    )
    .unwrap();

    let dataset = load_dataset(&path).unwrap();

    assert_eq!(dataset.name_or_default(), "t1");
    assert_eq!(dataset.regions.len(), 2);
    assert_eq!(dataset.regions[0].region_id().as_str(), "r1");
    assert_eq!(dataset.regions[1].region_id().as_str(), "1");
}

#[test]
fn missing_file_is_io_error() {
    let dir = unique_temp_dir("missing");
    let error = load_dataset(&dir.join("absent.json")).unwrap_err();
    assert!(matches!(error, ModelError::Io { .. }));
}

#[test]
fn invalid_json_is_parse_error() {
    let dir = unique_temp_dir("invalid");
    let path = dir.join("broken.json");
    fs::write(&path, "{\"name\": ").unwrap();

    let error = load_dataset(&path).unwrap_err();

    assert!(matches!(error, ModelError::Json { .. }));
    assert!(error.to_string().contains("broken.json"));
}

#[test]
fn missing_regions_is_empty_list() {
    let dataset = parse_dataset(r#"{"name": "empty"}"#).unwrap();
    assert!(dataset.regions.is_empty());
}
