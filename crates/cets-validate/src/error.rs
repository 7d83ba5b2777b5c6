use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failures to run the validator, as opposed to validation findings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidatorError {
    #[error("{} command not found. Install with: pip install gemmi", .program.display())]
    ToolNotFound { program: PathBuf },

    #[error("Validation timed out after {} seconds", .timeout.as_secs_f64())]
    Timeout { timeout: Duration },

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] std::io::Error),
}
