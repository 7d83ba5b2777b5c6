use serde::{Deserialize, Serialize};

/// Result of validating one mmCIF file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    /// Errors and warnings, in the order they were reported.
    pub messages: Vec<String>,
}

impl ValidationOutcome {
    /// An invalid outcome with a single message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            messages: vec![message.into()],
        }
    }

    /// Valid only when the tool succeeded and reported nothing.
    pub fn from_messages(succeeded: bool, messages: Vec<String>) -> Self {
        Self {
            is_valid: succeeded && messages.is_empty(),
            messages,
        }
    }

    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.is_valid, self.messages)
    }
}
