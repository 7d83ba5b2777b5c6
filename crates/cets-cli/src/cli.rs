//! CLI argument definitions for the CETS to mmCIF converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cets-mmcif",
    version,
    about = "Convert CETS cryo-ET metadata to PDBx/mmCIF",
    long_about = "Convert CETS cryo-electron tomography metadata (JSON) to PDBx/mmCIF.\n\n\
                  Writes the EM tomography categories and validates the result\n\
                  against the mmCIF dictionary with gemmi."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: settings.toml in the user config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a CETS JSON file to mmCIF.
    Convert(ConvertArgs),

    /// Validate an mmCIF file against the PDBx/mmCIF dictionary.
    Validate(ValidateArgs),

    /// List the mmCIF categories written by the converter.
    Categories,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// CETS JSON input file.
    #[arg(short = 'i', long = "cets-input", value_name = "PATH")]
    pub cets_input: PathBuf,

    /// Output directory (default: the configured output directory).
    #[arg(short = 'o', long = "mmcif-output", value_name = "DIR")]
    pub mmcif_output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// mmCIF file to validate.
    #[arg(short = 'f', long = "mmcif-file", value_name = "PATH")]
    pub mmcif_file: PathBuf,

    /// Dictionary file (default: the configured dictionary).
    #[arg(short = 'd', long = "dict-file", value_name = "PATH")]
    pub dict_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
