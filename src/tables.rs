//! Static lookup tables mapping logical property and value names to their
//! physical, direction-specific doppelgangers.
//!
//! All tables are built once (a fold over an ordered triple list) and never
//! mutated afterwards, so a single instance can be shared freely across
//! threads.

use std::collections::{HashMap, HashSet};

/// A bidirectional lookup table built from `(logical, ltr, rtl)` triples.
///
/// Duplicate logical keys overwrite earlier entries; last-write-wins is the
/// defined tie-break of the construction fold, not an error.
#[derive(Debug, Clone, Default)]
pub struct DirectionTable {
    ltr: HashMap<String, String>,
    rtl: HashMap<String, String>,
}

impl DirectionTable {
    pub fn from_triples(triples: &[(&str, &str, &str)]) -> Self {
        let mut table = Self {
            ltr: HashMap::with_capacity(triples.len()),
            rtl: HashMap::with_capacity(triples.len()),
        };
        for &(logical, ltr, rtl) in triples {
            table.ltr.insert(logical.to_string(), ltr.to_string());
            table.rtl.insert(logical.to_string(), rtl.to_string());
        }
        table
    }

    /// Look up the physical doppelganger for `name` in the given direction.
    /// `None` means "pass through unchanged".
    pub fn lookup(&self, name: &str, is_rtl: bool) -> Option<&str> {
        self.side(is_rtl).get(name).map(String::as_str)
    }

    /// The flat map for one direction. Value converters receive this so they
    /// can substitute tokens without knowing which direction is active.
    pub fn side(&self, is_rtl: bool) -> &HashMap<String, String> {
        if is_rtl {
            &self.rtl
        } else {
            &self.ltr
        }
    }

    pub fn len(&self) -> usize {
        self.ltr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ltr.is_empty()
    }
}

/// The complete table configuration consumed by the converter engine.
#[derive(Debug, Clone)]
pub struct ConversionTables {
    /// Logical property name -> physical property name, per direction.
    pub properties: DirectionTable,
    /// Logical value token -> physical value token, per direction.
    pub values: DirectionTable,
    /// Property names that must never be touched, checked before any other
    /// rule. Flex/grid properties natively support flow-relative keywords,
    /// and `content` is literal text.
    pub ignored: HashSet<String>,
    /// Physical (output) property names whose string values may opt in to
    /// shorthand conversion with a leading `logical` marker token.
    pub logical_eligible: HashSet<String>,
}

impl ConversionTables {
    /// The reference table set covering the CSS logical-properties-and-values
    /// subset this crate understands out of the box.
    pub fn reference() -> Self {
        let properties = DirectionTable::from_triples(&[
            ("paddingStart", "paddingLeft", "paddingRight"),
            ("paddingEnd", "paddingRight", "paddingLeft"),
            ("marginStart", "marginLeft", "marginRight"),
            ("marginEnd", "marginRight", "marginLeft"),
            ("paddingInlineStart", "paddingLeft", "paddingRight"),
            ("paddingInlineEnd", "paddingRight", "paddingLeft"),
            ("marginInlineStart", "marginLeft", "marginRight"),
            ("marginInlineEnd", "marginRight", "marginLeft"),
            ("insetInlineStart", "left", "right"),
            ("insetInlineEnd", "right", "left"),
            ("start", "left", "right"),
            ("end", "right", "left"),
            ("borderStart", "borderLeft", "borderRight"),
            ("borderEnd", "borderRight", "borderLeft"),
            ("borderStartColor", "borderLeftColor", "borderRightColor"),
            ("borderEndColor", "borderRightColor", "borderLeftColor"),
            ("borderStartStyle", "borderLeftStyle", "borderRightStyle"),
            ("borderEndStyle", "borderRightStyle", "borderLeftStyle"),
            ("borderStartWidth", "borderLeftWidth", "borderRightWidth"),
            ("borderEndWidth", "borderRightWidth", "borderLeftWidth"),
            ("borderInlineStart", "borderLeft", "borderRight"),
            ("borderInlineEnd", "borderRight", "borderLeft"),
            ("borderInlineStartColor", "borderLeftColor", "borderRightColor"),
            ("borderInlineEndColor", "borderRightColor", "borderLeftColor"),
            ("borderInlineStartStyle", "borderLeftStyle", "borderRightStyle"),
            ("borderInlineEndStyle", "borderRightStyle", "borderLeftStyle"),
            ("borderInlineStartWidth", "borderLeftWidth", "borderRightWidth"),
            ("borderInlineEndWidth", "borderRightWidth", "borderLeftWidth"),
            (
                "borderTopStartRadius",
                "borderTopLeftRadius",
                "borderTopRightRadius",
            ),
            (
                "borderTopEndRadius",
                "borderTopRightRadius",
                "borderTopLeftRadius",
            ),
            (
                "borderBottomStartRadius",
                "borderBottomLeftRadius",
                "borderBottomRightRadius",
            ),
            (
                "borderBottomEndRadius",
                "borderBottomRightRadius",
                "borderBottomLeftRadius",
            ),
            (
                "borderStartStartRadius",
                "borderTopLeftRadius",
                "borderTopRightRadius",
            ),
            (
                "borderStartEndRadius",
                "borderTopRightRadius",
                "borderTopLeftRadius",
            ),
            (
                "borderEndStartRadius",
                "borderBottomLeftRadius",
                "borderBottomRightRadius",
            ),
            (
                "borderEndEndRadius",
                "borderBottomRightRadius",
                "borderBottomLeftRadius",
            ),
        ]);

        let values = DirectionTable::from_triples(&[
            ("ste", "ltr", "rtl"),
            ("ets", "rtl", "ltr"),
            ("start", "left", "right"),
            ("end", "right", "left"),
            ("inline-start", "left", "right"),
            ("inline-end", "right", "left"),
            ("start-resize", "w-resize", "e-resize"),
            ("end-resize", "e-resize", "w-resize"),
            ("bottomstart-resize", "sw-resize", "se-resize"),
            ("bottomend-resize", "se-resize", "sw-resize"),
            ("topstart-resize", "nw-resize", "ne-resize"),
            ("topend-resize", "ne-resize", "nw-resize"),
        ]);

        let ignored = [
            "justifyContent",
            "justifyItems",
            "justifySelf",
            "alignContent",
            "alignItems",
            "alignSelf",
            "grid",
            "gridColumnStart",
            "gridColumnEnd",
            "gridRowStart",
            "gridRowEnd",
            "gridColumn",
            "gridRow",
            "gridArea",
            "gridTemplateColumns",
            "gridTemplateRows",
            "gridTemplate",
            "gridTemplateAreas",
            "content",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        let logical_eligible = [
            "background",
            "backgroundImage",
            "backgroundPosition",
            "backgroundPositionX",
            "borderColor",
            "borderRadius",
            "borderStyle",
            "borderWidth",
            "boxShadow",
            "mozBoxShadow",
            "webkitBoxShadow",
            "margin",
            "padding",
            "textShadow",
            "transform",
            "mozTransform",
            "webkitTransform",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        let tables = Self {
            properties,
            values,
            ignored,
            logical_eligible,
        };
        log::trace!(
            "built reference conversion tables: {} properties, {} values",
            tables.properties.len(),
            tables.values.len()
        );
        tables
    }
}

impl Default for ConversionTables {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_direction_specific_names() {
        let tables = ConversionTables::reference();
        assert_eq!(
            tables.properties.lookup("paddingStart", false),
            Some("paddingLeft")
        );
        assert_eq!(
            tables.properties.lookup("paddingStart", true),
            Some("paddingRight")
        );
        assert_eq!(tables.values.lookup("start", false), Some("left"));
        assert_eq!(tables.values.lookup("start", true), Some("right"));
    }

    #[test]
    fn lookup_misses_return_none() {
        let tables = ConversionTables::reference();
        assert_eq!(tables.properties.lookup("color", false), None);
        assert_eq!(tables.values.lookup("red", true), None);
    }

    #[test]
    fn duplicate_triples_last_write_wins() {
        let table = DirectionTable::from_triples(&[
            ("start", "left", "right"),
            ("start", "inset-left", "inset-right"),
        ]);
        assert_eq!(table.lookup("start", false), Some("inset-left"));
        assert_eq!(table.lookup("start", true), Some("inset-right"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn ignore_set_covers_grid_and_content() {
        let tables = ConversionTables::reference();
        for key in ["justifyContent", "gridColumnStart", "grid", "content"] {
            assert!(tables.ignored.contains(key), "{key} should be ignored");
        }
        assert!(!tables.ignored.contains("padding"));
    }

    #[test]
    fn logical_eligible_names_are_output_names() {
        let tables = ConversionTables::reference();
        assert!(tables.logical_eligible.contains("borderRadius"));
        assert!(tables.logical_eligible.contains("webkitTransform"));
        assert!(!tables.logical_eligible.contains("float"));
    }
}
