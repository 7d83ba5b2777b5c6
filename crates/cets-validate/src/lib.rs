//! mmCIF validation against a PDBx/mmCIF dictionary.
//!
//! Validation is delegated to `gemmi validate`. The tool's exit status and
//! output are folded into a [`ValidationOutcome`]; problems running the tool
//! become messages in the outcome instead of errors.

mod error;
mod gemmi;
mod outcome;

pub use error::ValidatorError;
pub use gemmi::{DEFAULT_PROGRAM, DEFAULT_TIMEOUT, GemmiValidator, mmcif_validation};
pub use outcome::ValidationOutcome;
