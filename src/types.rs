//! Core data types shared across the converter

use crate::error::{ConvertError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A style object: an insertion-ordered mapping from property names to values.
///
/// Insertion order is what makes the collision rule deterministic: when two
/// original keys rename to the same physical property, the later key in input
/// order wins.
pub type StyleObject = IndexMap<String, StyleValue>;

/// A single style value.
///
/// CSS in JS values are either numbers, strings, nulls, or nested blocks
/// (pseudo-selectors, media-query-like sections). The enum is matched
/// exhaustively in exactly one place per conversion pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Null,
    Number(f64),
    Text(String),
    Block(StyleObject),
}

impl StyleValue {
    pub fn is_null(&self) -> bool {
        matches!(self, StyleValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<StyleObject> for StyleValue {
    fn from(value: StyleObject) -> Self {
        StyleValue::Block(value)
    }
}

/// The text-flow direction context for a conversion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    Ltr,
    Rtl,
}

impl FlowDirection {
    /// Parse a caller-supplied direction string.
    ///
    /// Accepts `"ltr"` and `"rtl"` case-insensitively after trimming. This is
    /// the only input the converter ever rejects.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "ltr" => Ok(FlowDirection::Ltr),
            "rtl" => Ok(FlowDirection::Rtl),
            _ => Err(ConvertError::invalid_direction(raw)),
        }
    }

    pub fn is_rtl(self) -> bool {
        self == FlowDirection::Rtl
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FlowDirection::Ltr => "ltr",
            FlowDirection::Rtl => "rtl",
        }
    }
}
