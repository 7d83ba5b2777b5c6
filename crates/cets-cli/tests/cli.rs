//! End-to-end runs of the `cets-mmcif` binary.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "cets-cli-bin-{}-{}-{}",
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

fn cets_mmcif(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cets-mmcif"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn categories_ignores_unreadable_config() {
    let dir = unique_temp_dir("categories");
    let config = dir.join("absent.toml");

    let output = cets_mmcif(&["--config", config.to_str().unwrap(), "categories"]);

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("em_3d_reconstruction"), "{stdout}");
}

#[test]
fn convert_reports_unreadable_config() {
    let dir = unique_temp_dir("convert");
    let config = dir.join("absent.toml");
    let input = dir.join("t1.json");
    fs::write(&input, r#"{"name": "t1", "regions": []}"#).unwrap();

    let output = cets_mmcif(&[
        "--config",
        config.to_str().unwrap(),
        "convert",
        "-i",
        input.to_str().unwrap(),
        "-o",
        dir.join("out").to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.toml"));
    assert!(!dir.join("out").exists());
}

#[test]
fn convert_writes_named_file() {
    let dir = unique_temp_dir("convert-ok");
    let config = dir.join("settings.toml");
    fs::write(&config, "validator_timeout_secs = 30\n").unwrap();
    let input = dir.join("t1.json");
    fs::write(&input, r#"{"name": "t1", "regions": [{"id": "r1"}]}"#).unwrap();
    let out = dir.join("out");

    let output = cets_mmcif(&[
        "--config",
        config.to_str().unwrap(),
        "convert",
        "--cets-input",
        input.to_str().unwrap(),
        "--mmcif-output",
        out.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "{output:?}");
    let text = fs::read_to_string(out.join("t1.cif")).unwrap();
    assert!(text.starts_with("data_t1\n#\n"));
}
