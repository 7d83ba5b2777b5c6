//! `gemmi validate` adapter.

use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::ValidatorError;
use crate::outcome::ValidationOutcome;

/// Validator executable looked up on `PATH`.
pub const DEFAULT_PROGRAM: &str = "gemmi";

/// Longest a validation run may take before the process is killed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Runs `<program> [leading args] validate -v <cif> -d <dict>`.
#[derive(Debug, Clone)]
pub struct GemmiValidator {
    program: PathBuf,
    leading_args: Vec<String>,
    timeout: Duration,
}

impl Default for GemmiValidator {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            leading_args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Captured result of one validator run.
struct ProcessOutput {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

impl GemmiValidator {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// Arguments placed before `validate`, e.g. a script for an interpreter.
    #[must_use]
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validate `cif_file` against the dictionary `dict_file`.
    ///
    /// Missing inputs are reported without starting the tool. The outcome is
    /// valid only if the tool exits with status 0 and reports no errors or
    /// warnings.
    pub fn validate(&self, cif_file: &Path, dict_file: &Path) -> ValidationOutcome {
        if !cif_file.exists() {
            return ValidationOutcome::failure(format!(
                "CIF file not found: {}",
                cif_file.display()
            ));
        }
        if !dict_file.exists() {
            return ValidationOutcome::failure(format!(
                "Dictionary file not found: {}",
                dict_file.display()
            ));
        }

        let output = match self.run(cif_file, dict_file) {
            Ok(output) => output,
            Err(error) => {
                warn!(program = %self.program.display(), %error, "validator did not complete");
                return ValidationOutcome::failure(error.to_string());
            }
        };

        let mut messages = Vec::new();
        if !output.status.success() {
            messages.push(match output.status.code() {
                Some(code) => format!("Validation failed with exit code {code}"),
                None => "Validation failed: process terminated by signal".to_string(),
            });
        }
        messages.extend(
            output
                .stderr
                .trim()
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
        messages.extend(
            output
                .stdout
                .lines()
                .filter(|line| is_diagnostic(line))
                .map(|line| line.trim().to_string()),
        );

        let outcome = ValidationOutcome::from_messages(output.status.success(), messages);
        info!(
            cif = %cif_file.display(),
            valid = outcome.is_valid,
            message_count = outcome.messages.len(),
            "validation finished"
        );
        outcome
    }

    fn run(&self, cif_file: &Path, dict_file: &Path) -> Result<ProcessOutput, ValidatorError> {
        debug!(
            program = %self.program.display(),
            cif = %cif_file.display(),
            dict = %dict_file.display(),
            "starting validator"
        );
        let mut child = Command::new(&self.program)
            .args(&self.leading_args)
            .arg("validate")
            .arg("-v")
            .arg(cif_file)
            .arg("-d")
            .arg(dict_file)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| match error.kind() {
                ErrorKind::NotFound => ValidatorError::ToolNotFound {
                    program: self.program.clone(),
                },
                _ => ValidatorError::Unexpected(error),
            })?;

        // Drain both pipes while waiting so a chatty validator cannot block.
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let stdout_reader = thread::spawn(move || read_stream(stdout));
        let stderr_reader = thread::spawn(move || read_stream(stderr));

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    stop(&mut child);
                    return Err(ValidatorError::Timeout {
                        timeout: self.timeout,
                    });
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(error) => {
                    stop(&mut child);
                    return Err(ValidatorError::Unexpected(error));
                }
            }
        };

        Ok(ProcessOutput {
            status,
            stdout: stdout_reader.join().unwrap_or_default(),
            stderr: stderr_reader.join().unwrap_or_default(),
        })
    }
}

/// Validate with the default `gemmi` executable and timeout.
pub fn mmcif_validation(cif_file: &Path, dict_file: &Path) -> ValidationOutcome {
    GemmiValidator::default().validate(cif_file, dict_file)
}

/// Kill and reap a validator that will not be waited on normally.
fn stop(child: &mut Child) {
    if let Err(error) = child.kill() {
        debug!(%error, "validator already exited");
    }
    if let Err(error) = child.wait() {
        warn!(%error, "failed to reap validator process");
    }
}

fn is_diagnostic(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("error") || lower.contains("warning")
}

fn read_stream<R: Read>(stream: Option<R>) -> String {
    let Some(mut stream) = stream else {
        return String::new();
    };
    let mut bytes = Vec::new();
    if stream.read_to_end(&mut bytes).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
