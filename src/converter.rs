//! The recursive conversion engine.
//!
//! A [`Converter`] owns the lookup tables, the value-converter registry, and
//! the compiled scanning regexes. It is immutable after construction and can
//! be shared across threads; each `convert` call is purely functional over
//! the `(object, direction)` pair.

use crate::error::Result;
use crate::tables::ConversionTables;
use crate::types::{FlowDirection, StyleObject, StyleValue};
use crate::value_converters::{ConverterArgs, ValueConverterRegistry};
use regex::Regex;

/// Whole-word `ste|ets|start|end` scan for URL/gradient keyword substitution.
/// The boundary is a non-word character, `_`, or the string edge; a path like
/// `url('/start/end.png')` is knowingly converted, while `bright.png` and
/// `leftovers.png` are left alone.
pub const BG_IMG_DIRECTION_PATTERN: &str = r"(^|\W|_)(ste|ets|start|end)(\W|_|$)";

/// Bare `start|end` scan for background-position tokens; the converter
/// substitutes only the first occurrence.
pub const BG_POS_DIRECTION_PATTERN: &str = r"(start)|(end)";

/// Nested blocks beyond this depth are copied verbatim instead of recursed.
/// Ordinary CSS in JS nesting stays under ten levels.
const MAX_NESTING_DEPTH: usize = 64;

pub struct Converter {
    tables: ConversionTables,
    registry: ValueConverterRegistry,
    logical_marker: Regex,
    important: Regex,
    bg_img_direction: Regex,
    bg_pos_direction: Regex,
}

impl Converter {
    /// A converter with the reference tables and default registry.
    pub fn new() -> Self {
        Self::with_config(ConversionTables::reference(), ValueConverterRegistry::reference())
    }

    /// A converter over caller-supplied tables and registry.
    pub fn with_config(tables: ConversionTables, registry: ValueConverterRegistry) -> Self {
        Self {
            tables,
            registry,
            logical_marker: Regex::new(r"(?i)^\s*logical\s*").unwrap(),
            important: Regex::new(r"\s*!important.*$").unwrap(),
            bg_img_direction: Regex::new(BG_IMG_DIRECTION_PATTERN).unwrap(),
            bg_pos_direction: Regex::new(BG_POS_DIRECTION_PATTERN).unwrap(),
        }
    }

    pub fn tables(&self) -> &ConversionTables {
        &self.tables
    }

    /// Convert a style object for the given flow direction.
    ///
    /// `flow_direction` must be `"ltr"` or `"rtl"` (case-insensitive,
    /// trimmed); anything else fails with
    /// [`ConvertError::InvalidDirection`](crate::ConvertError::InvalidDirection).
    /// The direction is validated once here; recursion always passes the
    /// validated direction downward.
    pub fn convert(&self, object: &StyleObject, flow_direction: &str) -> Result<StyleObject> {
        let direction = FlowDirection::parse(flow_direction)?;
        Ok(self.convert_for(object, direction))
    }

    /// Convert with an already-validated direction. Infallible: every value
    /// the engine does not recognize passes through unchanged.
    pub fn convert_for(&self, object: &StyleObject, direction: FlowDirection) -> StyleObject {
        self.convert_object(object, direction, 0)
    }

    fn convert_object(
        &self,
        object: &StyleObject,
        direction: FlowDirection,
        depth: usize,
    ) -> StyleObject {
        let is_rtl = direction.is_rtl();
        let mut result = StyleObject::with_capacity(object.len());

        for (original_key, original_value) in object {
            // Strings are trimmed before any classification.
            let value = match original_value {
                StyleValue::Text(text) => StyleValue::Text(text.trim().to_string()),
                other => other.clone(),
            };

            // Ignored keys are copied verbatim, without recursion.
            if self.tables.ignored.contains(original_key) {
                result.insert(original_key.clone(), value);
                continue;
            }

            let key = self
                .tables
                .properties
                .lookup(original_key, is_rtl)
                .unwrap_or(original_key);
            let value = self.convert_value(key, value, direction, depth);

            // Renaming collisions resolve last-processed-wins, in input key
            // order.
            result.insert(key.to_string(), value);
        }

        result
    }

    fn convert_value(
        &self,
        key: &str,
        value: StyleValue,
        direction: FlowDirection,
        depth: usize,
    ) -> StyleValue {
        match value {
            StyleValue::Null => StyleValue::Null,
            StyleValue::Number(number) => StyleValue::Number(number),
            StyleValue::Block(block) => {
                if depth >= MAX_NESTING_DEPTH {
                    log::warn!(
                        "style object nesting exceeds {MAX_NESTING_DEPTH} levels at '{key}'; \
                         copying subtree unconverted"
                    );
                    StyleValue::Block(block)
                } else {
                    StyleValue::Block(self.convert_object(&block, direction, depth + 1))
                }
            }
            StyleValue::Text(text) => StyleValue::Text(self.convert_text(key, text, direction)),
        }
    }

    /// Scalar string conversion. `key` is the renamed (physical) property.
    fn convert_text(&self, key: &str, text: String, direction: FlowDirection) -> String {
        let is_rtl = direction.is_rtl();

        let logicalless = self.logical_marker.replace(&text, "");
        let is_logical = logicalless.len() != text.len();
        let importantless = self.important.replace(&logicalless, "");
        let is_important = importantless.len() != logicalless.len();

        // Shorthand properties only opt in to flow conversion through the
        // `logical` marker.
        if self.tables.logical_eligible.contains(key) && !is_logical {
            return text;
        }

        // ltr is the natural direction: stripping the marker is all that is
        // needed, except for background-family values whose start/end
        // keywords are not natively left/right.
        if is_logical && !is_rtl && !key.contains("background") {
            return logicalless.into_owned();
        }

        let converted = match self.registry.get(key) {
            Some(converter) => converter(&ConverterArgs {
                value: &importantless,
                values_to_convert: self.tables.values.side(is_rtl),
                is_rtl,
                bg_img_direction: &self.bg_img_direction,
                bg_pos_direction: &self.bg_pos_direction,
            }),
            None => self
                .tables
                .values
                .lookup(&importantless, is_rtl)
                .map(str::to_string)
                .unwrap_or_else(|| importantless.into_owned()),
        };

        if is_important {
            format!("{converted} !important")
        } else {
            converted
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
