//! Runtime settings: built-in defaults, an optional TOML file, then
//! environment overrides.
//!
//! The default settings file lives in the platform config folder:
//! - macOS: ~/Library/Application Support/org.cets.cets-mmcif/
//! - Windows: %APPDATA%/cets/cets-mmcif/config/
//! - Linux: ~/.config/cets-mmcif/

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use cets_validate::{DEFAULT_PROGRAM, DEFAULT_TIMEOUT, GemmiValidator};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "cets";
const APP_NAME: &str = "cets-mmcif";
const CONFIG_FILENAME: &str = "settings.toml";

const FALLBACK_OUTPUT_DIR: &str = ".cache/cets-mmcif";
const DEFAULT_DICTIONARY: &str = "resources/mmcif_pdbx_v50.dic";

pub const ENV_OUTPUT_DIR: &str = "CETS_MMCIF_OUTPUT_DIR";
pub const ENV_DICTIONARY: &str = "CETS_MMCIF_DICTIONARY";
pub const ENV_VALIDATOR: &str = "CETS_MMCIF_VALIDATOR";
pub const ENV_VALIDATOR_TIMEOUT_SECS: &str = "CETS_MMCIF_VALIDATOR_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where `convert` writes `<name>.cif` when no directory is given.
    pub output_mmcif_directory: PathBuf,
    /// PDBx/mmCIF dictionary used by `validate` when none is given.
    pub validation_dictionary_path: PathBuf,
    pub validator_program: PathBuf,
    pub validator_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        let output_mmcif_directory = project_dirs()
            .map(|dirs| dirs.cache_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(FALLBACK_OUTPUT_DIR));
        Self {
            output_mmcif_directory,
            validation_dictionary_path: PathBuf::from(DEFAULT_DICTIONARY),
            validator_program: PathBuf::from(DEFAULT_PROGRAM),
            validator_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Settings {
    /// Resolve settings for this process.
    ///
    /// A missing default settings file is not an error; an explicit `config`
    /// path must exist and parse.
    ///
    /// # Errors
    ///
    /// Fails when the settings file cannot be read or is not valid TOML.
    pub fn load(config: Option<&Path>) -> Result<Self> {
        let mut settings = match config {
            Some(path) => Self::from_file(path)?,
            None => match default_settings_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(path = %path.display(), "no settings file, using defaults");
                    Self::default()
                }
                None => {
                    warn!("could not determine settings path, using defaults");
                    Self::default()
                }
            },
        };
        settings.apply_overrides(|name| std::env::var(name).ok());
        Ok(settings)
    }

    /// Read a TOML settings file; keys it omits keep their defaults.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("parse settings file {}", path.display()))?;
        info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Apply environment-style overrides looked up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = non_empty(lookup(ENV_OUTPUT_DIR)) {
            self.output_mmcif_directory = PathBuf::from(dir);
        }
        if let Some(dict) = non_empty(lookup(ENV_DICTIONARY)) {
            self.validation_dictionary_path = PathBuf::from(dict);
        }
        if let Some(program) = non_empty(lookup(ENV_VALIDATOR)) {
            self.validator_program = PathBuf::from(program);
        }
        if let Some(raw) = non_empty(lookup(ENV_VALIDATOR_TIMEOUT_SECS)) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.validator_timeout_secs = secs,
                _ => warn!(
                    variable = ENV_VALIDATOR_TIMEOUT_SECS,
                    value = %raw,
                    "ignoring invalid validator timeout"
                ),
            }
        }
    }

    pub fn validator(&self) -> GemmiValidator {
        GemmiValidator::new(&self.validator_program)
            .with_timeout(Duration::from_secs(self.validator_timeout_secs))
    }
}

/// Location of the default settings file, if the platform has one.
pub fn default_settings_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_point_at_bundled_dictionary() {
        let settings = Settings::default();
        assert_eq!(
            settings.validation_dictionary_path,
            PathBuf::from("resources/mmcif_pdbx_v50.dic")
        );
        assert_eq!(settings.validator_program, PathBuf::from("gemmi"));
        assert_eq!(settings.validator_timeout_secs, 300);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn default_output_is_named_after_the_tool() {
        assert!(
            Settings::default()
                .output_mmcif_directory
                .ends_with("cets-mmcif")
        );
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str("output_mmcif_directory = \"/tmp/out\"\n").unwrap();
        assert_eq!(settings.output_mmcif_directory, PathBuf::from("/tmp/out"));
        assert_eq!(settings.validator_timeout_secs, 300);
    }

    #[test]
    fn environment_overrides_file_values() {
        let mut settings = Settings::default();
        settings.apply_overrides(lookup(&[
            (ENV_OUTPUT_DIR, "/data/cif"),
            (ENV_DICTIONARY, "/dicts/pdbx.dic"),
            (ENV_VALIDATOR, "/opt/gemmi"),
            (ENV_VALIDATOR_TIMEOUT_SECS, "60"),
        ]));
        assert_eq!(settings.output_mmcif_directory, PathBuf::from("/data/cif"));
        assert_eq!(
            settings.validation_dictionary_path,
            PathBuf::from("/dicts/pdbx.dic")
        );
        assert_eq!(settings.validator_program, PathBuf::from("/opt/gemmi"));
        assert_eq!(settings.validator_timeout_secs, 60);
    }

    #[test]
    fn invalid_or_empty_overrides_are_ignored() {
        let mut settings = Settings::default();
        settings.apply_overrides(lookup(&[
            (ENV_OUTPUT_DIR, "  "),
            (ENV_VALIDATOR_TIMEOUT_SECS, "soon"),
        ]));
        assert_eq!(settings, Settings::default());

        settings.apply_overrides(lookup(&[(ENV_VALIDATOR_TIMEOUT_SECS, "0")]));
        assert_eq!(settings.validator_timeout_secs, 300);
    }

    #[test]
    fn validator_uses_configured_timeout() {
        let settings = Settings {
            validator_timeout_secs: 12,
            ..Settings::default()
        };
        assert_eq!(settings.validator().timeout(), Duration::from_secs(12));
    }
}
