use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info, info_span};

use cets_cli::settings::Settings;
use cets_report::{ConversionSummary, convert_cets_to_mmcif};
use cets_validate::ValidationOutcome;

use crate::cli::{ConvertArgs, ValidateArgs};
use crate::summary::categories_table;

pub fn run_categories() -> Result<()> {
    println!("{}", categories_table());
    Ok(())
}

pub fn run_convert(args: &ConvertArgs, settings: &Settings) -> Result<ConversionSummary> {
    let output_dir = args
        .mmcif_output
        .as_deref()
        .unwrap_or(&settings.output_mmcif_directory);
    convert_cets_to_mmcif(&args.cets_input, output_dir)
        .with_context(|| format!("convert {}", args.cets_input.display()))
}

/// Validate and log the outcome; returns whether the file passed.
pub fn run_validate(args: &ValidateArgs, settings: &Settings) -> bool {
    let dict_file = args
        .dict_file
        .as_deref()
        .unwrap_or(&settings.validation_dictionary_path);
    let span = info_span!("validate", file = %args.mmcif_file.display());
    let _guard = span.enter();
    let outcome = settings.validator().validate(&args.mmcif_file, dict_file);
    report_outcome(&args.mmcif_file, &outcome);
    outcome.is_valid
}

fn report_outcome(file: &Path, outcome: &ValidationOutcome) {
    if outcome.is_valid {
        info!(file = %file.display(), "mmCIF file is valid");
        return;
    }
    error!(file = %file.display(), "mmCIF validation failed");
    for message in &outcome.messages {
        error!("{message}");
    }
}
