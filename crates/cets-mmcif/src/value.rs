//! Rendering of single mmCIF data values.

use std::fmt;

use cets_model::Scalar;
use serde_json::Number;

use crate::UNKNOWN;

/// One data value in a loop row.
#[derive(Debug, Clone, PartialEq)]
pub enum CifValue {
    /// Not available; rendered as `?`.
    Unknown,
    /// Free text. Quoted only when it contains a space.
    Text(String),
    /// A number in its source representation.
    Number(Number),
    /// A number rendered with a fixed count of decimal places.
    Fixed { value: f64, decimals: usize },
    /// A dictionary enumeration value, always single-quoted.
    Quoted(String),
}

impl CifValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn quoted(value: impl Into<String>) -> Self {
        Self::Quoted(value.into())
    }

    pub fn fixed(value: f64, decimals: usize) -> Self {
        Self::Fixed { value, decimals }
    }

    /// Convert an optional source value, mapping absence to [`CifValue::Unknown`].
    pub fn from_scalar(value: Option<&Scalar>) -> Self {
        match value {
            Some(Scalar::Number(number)) => Self::Number(number.clone()),
            Some(Scalar::Text(text)) => Self::Text(text.clone()),
            Some(Scalar::Bool(flag)) => Self::Text(flag.to_string()),
            None => Self::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CifValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str(UNKNOWN),
            // An empty token would shift every following column.
            Self::Text(text) if text.is_empty() => f.write_str(UNKNOWN),
            Self::Text(text) if text.contains(' ') => write!(f, "'{text}'"),
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Fixed { value, decimals } => write!(f, "{:.*}", *decimals, value),
            Self::Quoted(text) => write!(f, "'{text}'"),
        }
    }
}

impl From<&str> for CifValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CifValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<usize> for CifValue {
    fn from(value: usize) -> Self {
        Self::Number(Number::from(value as u64))
    }
}

impl From<&Scalar> for CifValue {
    fn from(value: &Scalar) -> Self {
        Self::from_scalar(Some(value))
    }
}

impl From<Option<&Scalar>> for CifValue {
    fn from(value: Option<&Scalar>) -> Self {
        Self::from_scalar(value)
    }
}

/// Render an optional source value as an mmCIF token.
pub fn format_value(value: Option<&Scalar>) -> String {
    CifValue::from_scalar(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_unknown_marker() {
        assert_eq!(format_value(None), "?");
    }

    #[test]
    fn text_with_space_is_quoted() {
        assert_eq!(CifValue::from("BRIGHT FIELD").to_string(), "'BRIGHT FIELD'");
    }

    #[test]
    fn bare_text_is_verbatim() {
        assert_eq!(CifValue::from("a.mrc").to_string(), "a.mrc");
        assert_eq!(CifValue::from("COUNTING").to_string(), "COUNTING");
    }

    #[test]
    fn empty_text_is_unknown() {
        assert_eq!(CifValue::from("").to_string(), "?");
    }

    #[test]
    fn numbers_pass_through() {
        let value: Scalar = serde_json::from_str("1.5").unwrap();
        assert_eq!(format_value(Some(&value)), "1.5");
        assert_eq!(CifValue::from(42_usize).to_string(), "42");
    }

    #[test]
    fn fixed_uses_requested_precision() {
        assert_eq!(CifValue::fixed(-10.0, 2).to_string(), "-10.00");
        assert_eq!(CifValue::fixed(25.0, 2).to_string(), "25.00");
        assert_eq!(CifValue::fixed(0.0, 2).to_string(), "0.00");
    }

    #[test]
    fn quoted_is_always_quoted() {
        assert_eq!(CifValue::quoted("CCP4").to_string(), "'CCP4'");
    }
}
