//! Per-property value converters for shorthand CSS syntax.
//!
//! The converter engine renames properties and decides *whether* a value needs
//! flow conversion; the registry in this module knows *how* each shorthand
//! syntax mirrors. Every converter is a pure function over its arguments: the
//! marker- and importance-stripped value string, the value-token map for the
//! active direction, the rtl flag, and the two shared direction regexes.
//!
//! Whitespace contract: spacing is preserved verbatim when nothing is
//! reordered; once tokens are reordered, runs of whitespace collapse to
//! single spaces.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Arguments handed to every value converter.
pub struct ConverterArgs<'a> {
    /// The value string, already stripped of the `logical` marker and any
    /// trailing `!important`.
    pub value: &'a str,
    /// Logical value token -> physical token for the active direction.
    pub values_to_convert: &'a HashMap<String, String>,
    pub is_rtl: bool,
    /// Whole-word `ste|ets|start|end` scan used for URL and gradient keyword
    /// substitution. Word boundary here means a non-word character, `_`, or
    /// the string edge, so filenames like `leftovers.png` and `bright.png`
    /// stay intact.
    pub bg_img_direction: &'a Regex,
    /// Bare `start|end` scan for background-position tokens; only the first
    /// occurrence is substituted.
    pub bg_pos_direction: &'a Regex,
}

/// A pure, stateless converter for one physical property's shorthand syntax.
pub type ValueConverter = fn(&ConverterArgs<'_>) -> String;

/// Registry mapping physical (output) property names to converters.
#[derive(Clone, Default)]
pub struct ValueConverterRegistry {
    converters: HashMap<String, ValueConverter>,
}

impl ValueConverterRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The default registry covering the shorthand properties the reference
    /// tables mark as logical-eligible, plus the directional value keywords
    /// that hide inside background shorthands.
    pub fn reference() -> Self {
        let mut registry = Self::empty();
        for name in ["padding", "margin", "borderWidth", "borderStyle", "borderColor"] {
            registry.register(name, convert_quad);
        }
        registry.register("borderRadius", convert_border_radius);
        for name in ["boxShadow", "webkitBoxShadow", "mozBoxShadow", "textShadow"] {
            registry.register(name, convert_shadow);
        }
        registry.register("background", convert_background);
        registry.register("backgroundImage", convert_background_image);
        registry.register("backgroundPosition", convert_background_position);
        registry.register("backgroundPositionX", convert_background_position);
        for name in ["transform", "webkitTransform", "mozTransform"] {
            registry.register(name, convert_transform);
        }
        registry
    }

    pub fn register(&mut self, property: impl Into<String>, converter: ValueConverter) {
        self.converters.insert(property.into(), converter);
    }

    pub fn get(&self, property: &str) -> Option<ValueConverter> {
        self.converters.get(property).copied()
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl std::fmt::Debug for ValueConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueConverterRegistry")
            .field("properties", &self.converters.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Split a shorthand value into tokens, keeping parenthesized groups such as
/// `rgb(255, 0, 0)` or `calc(calc(2*2) * 3px)` attached to their head token.
/// Whitespace runs between tokens are collapsed.
pub fn split_shorthand(value: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut depth: i32 = 0;
    for piece in value.split_whitespace() {
        let opens = piece.matches('(').count() as i32;
        let closes = piece.matches(')').count() as i32;
        if depth > 0 {
            if let Some(last) = tokens.last_mut() {
                last.push(' ');
                last.push_str(piece);
            }
        } else {
            tokens.push(piece.to_string());
        }
        depth += opens - closes;
    }
    tokens
}

/// Split on a separator character, ignoring occurrences inside parentheses.
fn split_outside_parens(value: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;
    for ch in value.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            c if c == separator && depth == 0 => {
                parts.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }
    parts.push(current);
    parts
}

/// Negate a CSS length/percentage token, leaving zero values untouched.
fn flip_sign(token: &str) -> String {
    if numeric_prefix(token) == Some(0.0) {
        return token.to_string();
    }
    if let Some(rest) = token.strip_prefix('-') {
        rest.to_string()
    } else if let Some(rest) = token.strip_prefix('+') {
        format!("-{rest}")
    } else {
        format!("-{token}")
    }
}

/// The numeric value at the start of a token (`-6px` -> -6.0), if any.
fn numeric_prefix(token: &str) -> Option<f64> {
    let end = token
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    token[..end].parse().ok()
}

/// `100 - p` for a percentage string, preserving the input's decimal
/// precision (`2.3210` -> `97.6790`, `77` -> `23`).
fn complement_percentage(number: &str) -> Option<String> {
    let parsed: f64 = number.parse().ok()?;
    let flipped = 100.0 - parsed;
    match number.find('.') {
        Some(dot) => {
            let precision = number.len() - dot - 1;
            Some(format!("{flipped:.precision$}"))
        }
        None => Some(format!("{flipped}")),
    }
}

fn number_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(^|\s)([+-]?(?:\d+\.?\d*|\.\d+)[a-z%]*)").unwrap())
}

fn leading_percentage_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([-\d.]+)%").unwrap())
}

fn translate_x_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(translateX\s*\(\s*)([+-]?(?:\d+\.?\d*|\.\d+)[a-z%]*)(\s*\))").unwrap()
    })
}

fn translate_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(translate\s*\(\s*)([+-]?(?:\d+\.?\d*|\.\d+)[a-z%]*)((?:\s*,\s*[+-]?(?:\d+\.?\d*|\.\d+)[a-z%]*)?\s*\))",
        )
        .unwrap()
    })
}

fn translate_3d_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(translate3d\s*\(\s*)([+-]?(?:\d+\.?\d*|\.\d+)[a-z%]*)((?:\s*,\s*[+-]?(?:\d+\.?\d*|\.\d+)[a-z%]*){0,2}\s*\))",
        )
        .unwrap()
    })
}

/// Strips everything that cannot be a background-position coordinate:
/// `url(...)`, color functions, hex colors, and bare word runs. What survives
/// is the position fragment of a `background` shorthand.
fn non_position_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(url\(.*?\))|(rgba?\(.*?\))|(hsla?\(.*?\))|(#[a-fA-F0-9]+)|((^| )(\D)+( |$))")
            .unwrap()
    })
}

/// Four-value shorthand (`padding`, `margin`, `borderWidth`, `borderStyle`,
/// `borderColor`): `top right bottom left` mirrors to `top left bottom right`.
/// Anything that is not exactly four tokens passes through unchanged.
pub fn convert_quad(args: &ConverterArgs<'_>) -> String {
    let tokens = split_shorthand(args.value);
    match tokens.as_slice() {
        [top, right, bottom, left] => format!("{top} {left} {bottom} {right}"),
        _ => args.value.to_string(),
    }
}

/// `borderRadius` corner groups, optionally split by `/` into horizontal and
/// vertical radii. Two-value groups swap, four-value groups swap their
/// horizontal pairs, everything else passes through.
pub fn convert_border_radius(args: &ConverterArgs<'_>) -> String {
    let groups = split_outside_parens(args.value, '/');
    let mut changed = false;
    let converted: Vec<String> = groups
        .iter()
        .map(|group| {
            let tokens = split_shorthand(group);
            match tokens.as_slice() {
                [first, second] => {
                    changed = true;
                    format!("{second} {first}")
                }
                [top_left, top_right, bottom_right, bottom_left] => {
                    changed = true;
                    format!("{top_right} {top_left} {bottom_left} {bottom_right}")
                }
                _ => group.trim().to_string(),
            }
        })
        .collect();
    if changed {
        converted.join(" / ")
    } else {
        args.value.to_string()
    }
}

/// Shadow offset mirroring for `boxShadow`/`textShadow` and their prefixed
/// variants: per comma-separated shadow, the first length token (the
/// horizontal offset) flips sign. Zero offsets stay as written.
pub fn convert_shadow(args: &ConverterArgs<'_>) -> String {
    let shadows = split_outside_parens(args.value, ',');
    if shadows.len() == 1 {
        return flip_first_offset(args.value);
    }
    shadows
        .iter()
        .map(|shadow| flip_first_offset(shadow.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn flip_first_offset(shadow: &str) -> String {
    number_token_regex()
        .replace(shadow, |caps: &regex::Captures<'_>| {
            format!("{}{}", &caps[1], flip_sign(&caps[2]))
        })
        .into_owned()
}

/// Keyword substitution inside `url(...)` paths and gradient directions.
/// Every whole-word `ste|ets|start|end` is replaced via the direction map,
/// including path segments like `url('/start/end.png')`.
pub fn convert_background_image(args: &ConverterArgs<'_>) -> String {
    if !args.value.contains("url(") && !args.value.contains("linear-gradient(") {
        return args.value.to_string();
    }
    args.bg_img_direction
        .replace_all(args.value, |caps: &regex::Captures<'_>| {
            let word = &caps[2];
            let replacement = args
                .values_to_convert
                .get(word)
                .map(String::as_str)
                .unwrap_or(word);
            format!("{}{}{}", &caps[1], replacement, &caps[3])
        })
        .into_owned()
}

/// Background position coordinates: in rtl a leading percentage becomes its
/// complement (`77%` -> `23%`, decimal precision preserved), then the first
/// bare `start`/`end` token is substituted for the active direction.
pub fn convert_background_position(args: &ConverterArgs<'_>) -> String {
    let mut value = args.value.to_string();
    if args.is_rtl {
        value = leading_percentage_regex()
            .replace(&value, |caps: &regex::Captures<'_>| {
                match complement_percentage(&caps[1]) {
                    Some(flipped) => format!("{flipped}%"),
                    None => caps[0].to_string(),
                }
            })
            .into_owned();
    }
    args.bg_pos_direction
        .replace(&value, |caps: &regex::Captures<'_>| {
            let word = &caps[0];
            args.values_to_convert
                .get(word)
                .cloned()
                .unwrap_or_else(|| word.to_string())
        })
        .into_owned()
}

/// The `background` shorthand: locate the position fragment, convert it with
/// the background-position rules, splice it back, then run the image keyword
/// substitution over the whole value.
pub fn convert_background(args: &ConverterArgs<'_>) -> String {
    let position = non_position_regex()
        .replace_all(args.value, "")
        .trim()
        .to_string();
    let mut value = args.value.to_string();
    if !position.is_empty() {
        let converted = convert_background_position(&ConverterArgs {
            value: &position,
            ..*args
        });
        value = value.replacen(&position, &converted, 1);
    }
    convert_background_image(&ConverterArgs {
        value: &value,
        ..*args
    })
}

/// Transform chains: the horizontal (first) argument of `translate`,
/// `translateX`, and `translate3d` flips sign; all other functions pass
/// through untouched. Interior whitespace is preserved.
pub fn convert_transform(args: &ConverterArgs<'_>) -> String {
    let flip = |caps: &regex::Captures<'_>| {
        format!("{}{}{}", &caps[1], flip_sign(&caps[2]), &caps[3])
    };
    let value = translate_x_regex().replace_all(args.value, flip).into_owned();
    let value = translate_regex().replace_all(&value, flip).into_owned();
    translate_3d_regex().replace_all(&value, flip).into_owned()
}
