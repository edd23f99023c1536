//! Typed argument values
//!
//! Every comma-delimited field of a call resolves to exactly one [ArgValue]:
//!
//!     - `String`: a quoted literal, with `""` already collapsed to `"`.
//!     - `Number`: an unquoted decimal numeral.
//!     - `Raw`: any other unquoted field, trimmed (constant names, expressions).
//!
//! Values serialize untagged, so a `String` and a `Raw` both land in JSON as strings
//! and a `Number` lands as a JSON number.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Optional sign, digits with optional fraction (or a bare fraction), optional exponent.
static DECIMAL_NUMERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("numeral pattern is valid")
});

/// Marker the macro language uses to continue a statement on the next line.
const LINE_CONTINUATION: char = '_';

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    String(String),
    Number(f64),
    Raw(String),
}

impl ArgValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::String(s) | ArgValue::Raw(s) => Some(s.as_str()),
            ArgValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ArgValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Short kind name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ArgValue::String(_) => "string",
            ArgValue::Number(_) => "number",
            ArgValue::Raw(_) => "raw",
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::String(s) => write!(f, "{:?}", s),
            ArgValue::Number(n) => write!(f, "{}", n),
            ArgValue::Raw(s) => write!(f, "{}", s),
        }
    }
}

/// Classify an unquoted field.
///
/// Returns `None` for whitespace-only fields, which produce no value at all. A single
/// trailing line-continuation underscore is dropped before classification, so `120 _`
/// is the number 120 and a lone `_` is an empty raw value.
pub fn classify_bare(field: &str) -> Option<ArgValue> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }

    let token = match trimmed.strip_suffix(LINE_CONTINUATION) {
        Some(rest) => rest.trim_end(),
        None => trimmed,
    };

    if DECIMAL_NUMERAL.is_match(token) {
        if let Ok(number) = token.parse::<f64>() {
            if number.is_finite() {
                return Some(ArgValue::Number(number));
            }
        }
    }

    Some(ArgValue::Raw(token.to_string()))
}
