//! Parsers for the textual and keyed-object color notations.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::{Hsv, Rgb};
use crate::error::{ArgumentError, Error, Notation, ParseError};
use crate::hue::normalize_hue;
use crate::logging::targets;

static RGB_TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*$").expect("RGB pattern is valid")
});

static HSV_TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(-?\d+)\s*(?:°|(?i:deg))?\s*,\s*(\d+)\s*%?\s*,\s*(\d+)\s*%?\s*$")
        .expect("HSV pattern is valid")
});

/// What a keyed object describes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ObjectColor {
    Rgb(Rgb),
    Hsv(Hsv),
}

/// Whether `input` should be routed to the hex parser.
pub(crate) fn looks_like_hex(input: &str) -> bool {
    input.starts_with('#') || (!input.is_empty() && input.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Whether `input` opens with the `hsv` keyword (any case).
pub(crate) fn looks_like_hsv(input: &str) -> bool {
    input
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("hsv"))
}

/// Parse `#RGB`, `#RRGGBB`, `RGB` or `RRGGBB` (any case).
///
/// Shorthand digits expand by multiplying by 17, so `a` becomes `aa`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidHexDigit`] for a non-hex character and
/// [`ParseError::InvalidHexLength`] for any length other than 3 or 6.
pub fn parse_hex_string(input: &str) -> Result<Rgb, ParseError> {
    let offset = usize::from(input.starts_with('#'));
    let digits = &input[offset..];

    let mut values = Vec::with_capacity(6);
    for (i, ch) in digits.char_indices() {
        match ch.to_digit(16) {
            Some(d) => values.push(f64::from(d)),
            None => {
                return Err(ParseError::InvalidHexDigit {
                    input: input.to_string(),
                    index: offset + i,
                });
            }
        }
    }

    match values.as_slice() {
        [r, g, b] => Ok(Rgb::new(r * 17.0, g * 17.0, b * 17.0)),
        [r1, r2, g1, g2, b1, b2] => Ok(Rgb::new(
            r1 * 16.0 + r2,
            g1 * 16.0 + g2,
            b1 * 16.0 + b2,
        )),
        _ => Err(ParseError::InvalidHexLength {
            input: input.to_string(),
        }),
    }
}

/// Parse `rgb(r, g, b)` or a bare `r, g, b` triple.
///
/// The keyword is case-insensitive and whitespace is free around every token.
/// Each component must be an integer in `[0, 255]`.
///
/// # Errors
///
/// Returns [`ParseError::Malformed`] for a wrong keyword, unbalanced
/// parentheses or non-integer components, and [`ParseError::OutOfRange`] for
/// values above 255.
pub fn parse_rgb_string(input: &str) -> Result<Rgb, ParseError> {
    let inner = unwrap_notation(input, "rgb", Notation::Rgb)?;
    let caps = RGB_TRIPLE
        .captures(inner)
        .ok_or_else(|| ParseError::malformed(Notation::Rgb, input))?;

    let channel = |index: usize, name: &'static str| -> Result<f64, ParseError> {
        let digits = &caps[index];
        match digits.parse::<u32>() {
            Ok(n) if n <= 255 => Ok(f64::from(n)),
            _ => Err(ParseError::out_of_range(name, digits, 0, 255)),
        }
    };

    Ok(Rgb::new(
        channel(1, "red")?,
        channel(2, "green")?,
        channel(3, "blue")?,
    ))
}

/// Parse `hsv(h, s, v)` or a bare `h, s, v` triple.
///
/// The hue may be any integer, negative included, optionally suffixed with
/// `°` or `deg`, and is wrapped into `[0, 360)`. Saturation and value may be
/// suffixed with `%` and must lie in `[0, 100]`.
///
/// # Errors
///
/// Returns [`ParseError::Malformed`] for a wrong keyword or shape and
/// [`ParseError::OutOfRange`] for saturation or value above 100.
pub fn parse_hsv_string(input: &str) -> Result<Hsv, ParseError> {
    let inner = unwrap_notation(input, "hsv", Notation::Hsv)?;
    let caps = HSV_TRIPLE
        .captures(inner)
        .ok_or_else(|| ParseError::malformed(Notation::Hsv, input))?;

    let hue = caps[1]
        .parse::<i64>()
        .map_err(|_| ParseError::malformed(Notation::Hsv, input))?;

    let percent = |index: usize, name: &'static str| -> Result<f64, ParseError> {
        let digits = &caps[index];
        match digits.parse::<u32>() {
            Ok(n) if n <= 100 => Ok(f64::from(n)),
            _ => Err(ParseError::out_of_range(name, digits, 0, 100)),
        }
    };

    Ok(Hsv::new(
        normalize_hue(hue as f64),
        percent(2, "saturation")?,
        percent(3, "value")?,
    ))
}

/// Strip an optional `keyword(` ... `)` wrapper.
///
/// A wrapper must be closed; text without the keyword may not carry
/// parentheses at all.
fn unwrap_notation<'a>(
    input: &'a str,
    keyword: &str,
    notation: Notation,
) -> Result<&'a str, ParseError> {
    let trimmed = input.trim();
    let has_keyword = trimmed
        .get(..keyword.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(keyword))
        && trimmed[keyword.len()..].starts_with('(');

    let inner = if has_keyword {
        trimmed[keyword.len() + 1..]
            .strip_suffix(')')
            .ok_or_else(|| ParseError::malformed(notation, input))?
    } else {
        trimmed
    };

    if inner.contains(['(', ')']) {
        return Err(ParseError::malformed(notation, input));
    }
    Ok(inner)
}

/// Read a keyed object.
///
/// Lowercase `red`/`green`/`blue` win over uppercase `R`/`G`/`B`, which win
/// over `hue`/`saturation`/`value`. Other keys are ignored. RGB values are
/// taken verbatim, without range checks.
pub(crate) fn parse_object(object: &Map<String, Value>) -> Result<ObjectColor, Error> {
    if let Some([red, green, blue]) = numeric_triple(object, ["red", "green", "blue"])? {
        return Ok(ObjectColor::Rgb(Rgb::new(red, green, blue)));
    }
    if let Some([red, green, blue]) = numeric_triple(object, ["R", "G", "B"])? {
        return Ok(ObjectColor::Rgb(Rgb::new(red, green, blue)));
    }
    if let Some([hue, saturation, value]) = numeric_triple(object, ["hue", "saturation", "value"])? {
        return Ok(ObjectColor::Hsv(Hsv::new(hue, saturation, value)));
    }

    tracing::debug!(
        target: targets::PARSE,
        keys = ?object.keys().collect::<Vec<_>>(),
        "object has no complete color key triple"
    );
    Err(ParseError::UnknownObject.into())
}

fn numeric_triple(
    object: &Map<String, Value>,
    keys: [&str; 3],
) -> Result<Option<[f64; 3]>, ArgumentError> {
    if !keys.iter().all(|key| object.contains_key(*key)) {
        return Ok(None);
    }

    let mut out = [0.0; 3];
    for (slot, key) in out.iter_mut().zip(keys) {
        *slot = object
            .get(key)
            .and_then(Value::as_f64)
            .ok_or_else(|| ArgumentError::WrongType {
                key: key.to_string(),
                expected: "number",
            })?;
    }
    Ok(Some(out))
}
