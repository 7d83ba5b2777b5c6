use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A JSON leaf value as it appears in a CETS document.
///
/// Numbers keep their source representation so that `100` is written back
/// as `100` and `1.5` as `1.5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(Number),
    Text(String),
    Bool(bool),
}

impl Scalar {
    /// Numeric view of the value. Text and booleans are not coerced.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => number.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_keep_source_representation() {
        let values: Vec<Scalar> = serde_json::from_str("[100, 1.5, -10, -10.0]").unwrap();
        let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["100", "1.5", "-10", "-10.0"]);
    }

    #[test]
    fn text_is_not_coerced_to_number() {
        let value: Scalar = serde_json::from_str("\"25\"").unwrap();
        assert_eq!(value.as_f64(), None);
        assert_eq!(value.as_str(), Some("25"));
    }

    #[test]
    fn numeric_view() {
        let value: Scalar = serde_json::from_str("-42.5").unwrap();
        assert!(value.is_number());
        assert_eq!(value.as_f64(), Some(-42.5));
    }
}
