//! bidi-style: flow-relative CSS in JS conversion
//!
//! Converts style objects authored with flow-relative ("logical") properties
//! and values (`paddingStart`, `float: start`, `logical 1px 2px 3px 4px`)
//! into their physical, direction-specific equivalents (`paddingLeft`,
//! `float: left`) for a given text-flow direction.
//!
//! # Features
//!
//! - Property-name doppelganger tables for the CSS logical properties subset
//! - Value keyword substitution (`start`/`end`, `ste`/`ets`, resize cursors)
//! - Shorthand mirroring behind an explicit `logical` value marker: quads,
//!   border radii, shadows, backgrounds, transforms
//! - `!important` preservation and recursive pseudo-selector blocks
//! - Pluggable tables and value-converter registry
//!
//! # Basic Usage
//!
//! ```rust
//! use bidi_style::{convert, StyleObject};
//!
//! let input: StyleObject =
//!     serde_json::from_str(r#"{"paddingStart": 23, "float": "start"}"#).unwrap();
//! let output = convert(&input, "rtl").unwrap();
//! assert_eq!(output.get("paddingRight"), input.get("paddingStart"));
//! ```
//!
//! # Conversion rules
//!
//! Per key, in precedence order: ignored keys (flex/grid, `content`) copy
//! verbatim; the key renames through the property table for the active
//! direction; null and numeric values pass through; nested objects recurse;
//! string values go through marker analysis and either the value-converter
//! registry (shorthand syntax) or a whole-value keyword lookup. Anything the
//! engine does not recognize passes through unchanged; the only error the
//! crate ever raises is an invalid flow direction at the entry point.

pub mod converter;
pub mod error;
pub mod tables;
pub mod types;
pub mod value_converters;

use std::sync::OnceLock;

pub use converter::{Converter, BG_IMG_DIRECTION_PATTERN, BG_POS_DIRECTION_PATTERN};
pub use error::{ConvertError, Result};
pub use tables::{ConversionTables, DirectionTable};
pub use types::{FlowDirection, StyleObject, StyleValue};
pub use value_converters::{ConverterArgs, ValueConverter, ValueConverterRegistry};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

fn default_converter() -> &'static Converter {
    static CONVERTER: OnceLock<Converter> = OnceLock::new();
    CONVERTER.get_or_init(Converter::new)
}

/// Convert a style object with the reference tables and default registry.
///
/// `flow_direction` must be `"ltr"` or `"rtl"` (case-insensitive, trimmed).
/// The shared default [`Converter`] is built on first use and reused for the
/// life of the process.
pub fn convert(object: &StyleObject, flow_direction: &str) -> Result<StyleObject> {
    default_converter().convert(object, flow_direction)
}
