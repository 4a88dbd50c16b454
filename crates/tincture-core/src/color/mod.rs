//! The [`Color`] value type.
//!
//! A `Color` is built once from exactly one description (hex text, decimal
//! RGB or HSV text, a keyed object, an HSV or RGB record, or another color)
//! and never changes afterwards. RGB is always stored. HSV is stored when it
//! was supplied, otherwise derived from RGB on first access and cached for the
//! lifetime of the value.
//!
//! # Example
//!
//! ```
//! use tincture_core::Color;
//!
//! let coffee: Color = "#c0ffee".parse()?;
//! assert_eq!(coffee.rgb_string(), "RGB(192, 255, 238)");
//! assert_eq!(coffee.hsv_string(), "HSV(164°, 25%, 100%)");
//!
//! let teal = Color::parse("hsv(180, 100%, 50%)")?;
//! assert_eq!(teal.hex_string(), "#008080");
//! # Ok::<(), tincture_core::Error>(())
//! ```

mod convert;
mod parse;

pub use convert::{hsv_to_rgb, rgb_to_hsv, rgb_to_hsv_exact};
pub use parse::{parse_hex_string, parse_hsv_string, parse_rgb_string};

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ArgumentError, Error, ParseError};
use crate::hue::{clamp, normalize_hue};
use crate::logging::targets;
use parse::ObjectColor;

/// Red, green and blue channels on the 8-bit scale `[0, 255]`.
///
/// Values built from keyed objects are kept verbatim and may fall outside
/// that range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    /// Create an RGB record.
    #[inline]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }
}

/// Hue in degrees `[0, 360)`, saturation and value in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    /// Create an HSV record.
    #[inline]
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

/// An immutable color.
///
/// The HSV cache is a write-once cell: concurrent first reads may both run the
/// conversion, but the conversion is pure, so every reader sees the same
/// result.
#[derive(Debug, Clone)]
pub struct Color {
    rgb: Rgb,
    hsv: OnceLock<Hsv>,
}

static_assertions::assert_impl_all!(Color: Send, Sync);

impl Color {
    /// Parse a color from text.
    ///
    /// Accepted notations:
    /// - hex: `#RGB`, `#RRGGBB`, with or without `#`, any case
    /// - decimal RGB: `rgb(r, g, b)` or `r, g, b`
    /// - decimal HSV: `hsv(h, s, v)` with optional `°`/`deg` and `%` suffixes
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Missing`] for empty text and a
    /// [`ParseError`] for anything that does not parse.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ArgumentError::Missing.into());
        }

        let parsed = if parse::looks_like_hex(trimmed) {
            parse::parse_hex_string(trimmed).map(Self::from_rgb)
        } else if parse::looks_like_hsv(trimmed) {
            parse::parse_hsv_string(trimmed).map(Self::from_hsv)
        } else {
            parse::parse_rgb_string(trimmed).map(Self::from_rgb)
        };

        parsed.map_err(|err| {
            tracing::debug!(target: targets::PARSE, input, error = %err, "color parse failed");
            err.into()
        })
    }

    /// Create a color from RGB channels, taken verbatim.
    #[inline]
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::from_rgb(Rgb::new(red, green, blue))
    }

    /// Create a color from an RGB record, taken verbatim.
    #[inline]
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            hsv: OnceLock::new(),
        }
    }

    /// Create a color from hue, saturation and value.
    #[inline]
    pub fn hsv(hue: f64, saturation: f64, value: f64) -> Self {
        Self::from_hsv(Hsv::new(hue, saturation, value))
    }

    /// Create a color from an HSV record.
    ///
    /// The hue is wrapped into `[0, 360)`; saturation and value are kept as
    /// given. RGB is computed immediately and the HSV record is retained.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let hsv = Hsv::new(normalize_hue(hsv.hue), hsv.saturation, hsv.value);
        Self {
            rgb: hsv_to_rgb(hsv),
            hsv: OnceLock::from(hsv),
        }
    }

    /// Copy another color's RGB channels.
    ///
    /// Only RGB is carried over. If `other` was built from HSV, the copy
    /// re-derives HSV from the rounded channels and may report slightly
    /// different hue, saturation or value. Use `clone()` to keep everything.
    pub fn from_color(other: &Color) -> Self {
        crate::tincture_trace!(source = %other, "copying color channels");
        Self::from_rgb(other.rgb)
    }

    /// Create a color from a keyed object.
    ///
    /// Recognized key triples, in order of preference: `red`/`green`/`blue`,
    /// `R`/`G`/`B`, `hue`/`saturation`/`value`. Unrelated keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownObject`] when no triple is complete and
    /// [`ArgumentError::WrongType`] when a recognized key is not a number.
    pub fn from_object(object: &Map<String, Value>) -> Result<Self, Error> {
        Ok(match parse::parse_object(object)? {
            ObjectColor::Rgb(rgb) => {
                let in_range = |c: f64| (0.0..=255.0).contains(&c);
                if !(in_range(rgb.red) && in_range(rgb.green) && in_range(rgb.blue)) {
                    crate::tincture_warn!(?rgb, "object channels outside [0, 255] kept verbatim");
                }
                Self::from_rgb(rgb)
            }
            ObjectColor::Hsv(hsv) => Self::from_hsv(hsv),
        })
    }

    /// Create a color from any JSON value: a string or an object.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Missing`] for `null` and
    /// [`ParseError::InvalidArgument`] for booleans, numbers and arrays.
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let found = match value {
            Value::Null => return Err(ArgumentError::Missing.into()),
            Value::String(text) => return Self::parse(text),
            Value::Object(object) => return Self::from_object(object),
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Array(_) => "array",
        };
        crate::tincture_debug!(found, "unsupported color argument");
        Err(ParseError::InvalidArgument { found }.into())
    }

    // RGB colorspace

    /// Red channel.
    #[inline]
    pub fn red(&self) -> f64 {
        self.rgb.red
    }

    /// Green channel.
    #[inline]
    pub fn green(&self) -> f64 {
        self.rgb.green
    }

    /// Blue channel.
    #[inline]
    pub fn blue(&self) -> f64 {
        self.rgb.blue
    }

    /// All three RGB channels.
    #[inline]
    pub fn to_rgb(&self) -> Rgb {
        self.rgb
    }

    // HSV colorspace

    /// Hue, saturation and value, computing and caching them if needed.
    ///
    /// Derived values are rounded to integers.
    #[inline]
    pub fn to_hsv(&self) -> Hsv {
        *self.hsv.get_or_init(|| rgb_to_hsv(self.rgb))
    }

    /// Hue in degrees `[0, 360)`.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.to_hsv().hue
    }

    /// Saturation in percent.
    #[inline]
    pub fn saturation(&self) -> f64 {
        self.to_hsv().saturation
    }

    /// Value in percent.
    #[inline]
    pub fn value(&self) -> f64 {
        self.to_hsv().value
    }

    // Y'CbCr colorspace, ITU-R BT.601

    /// Luma (Y'), in `[16, 235]` for in-range channels.
    pub fn luma(&self) -> f64 {
        let (r, g, b) = self.unit_channels();
        16.0 + 65.481 * r + 128.553 * g + 24.996 * b
    }

    /// Blue-difference chroma (Cb), in `[16, 240]` for in-range channels.
    pub fn chroma_blue(&self) -> f64 {
        let (r, g, b) = self.unit_channels();
        128.0 - 37.797 * r - 74.203 * g + 112.0 * b
    }

    /// Red-difference chroma (Cr), in `[16, 240]` for in-range channels.
    pub fn chroma_red(&self) -> f64 {
        let (r, g, b) = self.unit_channels();
        128.0 + 112.0 * r - 93.786 * g - 18.214 * b
    }

    // calculated values

    /// Relative luminance as defined by WCAG 2.0, in `[0, 1]`.
    ///
    /// See: <https://www.w3.org/TR/2008/REC-WCAG20-20081211/#relativeluminancedef>
    pub fn relative_luminance(&self) -> f64 {
        let (r, g, b) = self.unit_channels();
        0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
    }

    /// Perceived brightness, roughly `[0, 255]`.
    ///
    /// Weights the channels by the eye's sensitivity: green reads brightest,
    /// blue darkest.
    pub fn brightness(&self) -> f64 {
        let Rgb { red, green, blue } = self.rgb;
        (0.241 * red * red + 0.691 * green * green + 0.068 * blue * blue).sqrt()
    }

    #[inline]
    fn unit_channels(&self) -> (f64, f64, f64) {
        (self.rgb.red / 255.0, self.rgb.green / 255.0, self.rgb.blue / 255.0)
    }

    // adjustments

    /// A new color with the given hue, keeping saturation and value.
    pub fn with_hue(&self, hue: f64) -> Self {
        let hsv = self.to_hsv();
        Self::hsv(hue, hsv.saturation, hsv.value)
    }

    /// A new color with the given saturation, clamped to `[0, 100]`.
    pub fn with_saturation(&self, saturation: f64) -> Self {
        let hsv = self.to_hsv();
        Self::hsv(hsv.hue, clamp(saturation, 0.0, 100.0), hsv.value)
    }

    /// A new color with the given value, clamped to `[0, 100]`.
    pub fn with_value(&self, value: f64) -> Self {
        let hsv = self.to_hsv();
        Self::hsv(hsv.hue, hsv.saturation, clamp(value, 0.0, 100.0))
    }

    // output formatting

    /// `#RRGGBB` with uppercase digits, e.g. red is `#FF0000`.
    pub fn hex_string(&self) -> String {
        format!(
            "#{}{}{}",
            hex_pair(self.rgb.red),
            hex_pair(self.rgb.green),
            hex_pair(self.rgb.blue)
        )
    }

    /// `RGB(r, g, b)` with rounded integers, e.g. red is `RGB(255, 0, 0)`.
    pub fn rgb_string(&self) -> String {
        format!(
            "RGB({}, {}, {})",
            self.rgb.red.round() as i64,
            self.rgb.green.round() as i64,
            self.rgb.blue.round() as i64
        )
    }

    /// `HSV(h°, s%, v%)` with rounded integers, e.g. red is `HSV(0°, 100%, 100%)`.
    pub fn hsv_string(&self) -> String {
        let hsv = self.to_hsv();
        format!(
            "HSV({}°, {}%, {}%)",
            normalize_hue(hsv.hue.round()) as i64,
            hsv.saturation.round() as i64,
            hsv.value.round() as i64
        )
    }
}

/// sRGB component to linear light.
#[inline]
fn linearize(s: f64) -> f64 {
    if s <= 0.03928 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// Round a channel and render it as at least two uppercase hex digits.
fn hex_pair(channel: f64) -> String {
    let n = channel.round() as i64;
    if n < 0 {
        format!("-{:X}", n.unsigned_abs())
    } else {
        format!("{n:02X}")
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb && self.to_hsv() == other.to_hsv()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_string())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        Self::from_hsv(hsv)
    }
}

impl TryFrom<&Value> for Color {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn round_to(x: f64, places: i32) -> f64 {
        let factor = 10f64.powi(places);
        (x * factor).round() / factor
    }

    #[test]
    fn test_parse_routes_notations() {
        assert_eq!(Color::parse("#ac3").unwrap().to_rgb(), Rgb::new(170.0, 204.0, 51.0));
        assert_eq!(Color::parse("rgb(1, 2, 3)").unwrap().to_rgb(), Rgb::new(1.0, 2.0, 3.0));
        assert_eq!(Color::parse("1,2,3").unwrap().to_rgb(), Rgb::new(1.0, 2.0, 3.0));
        assert_eq!(
            Color::parse("hsv(0, 100%, 100%)").unwrap().to_rgb(),
            Rgb::new(255.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_parse_empty_is_missing_argument() {
        assert_eq!(Color::parse("   "), Err(Error::Argument(ArgumentError::Missing)));
    }

    #[test]
    fn test_parse_garbage_is_parse_error() {
        assert!(matches!(Color::parse("hello"), Err(Error::Parse(_))));
        assert!(matches!(Color::parse("#abcd"), Err(Error::Parse(ParseError::InvalidHexLength { .. }))));
        assert!(matches!(Color::parse("rgb(0,0,256)"), Err(Error::Parse(ParseError::OutOfRange { .. }))));
    }

    #[test]
    fn test_hsv_input_is_retained() {
        let c = Color::parse("hsv(-20, 50, 50)").unwrap();
        assert_eq!(c.to_hsv(), Hsv::new(340.0, 50.0, 50.0));

        let c = Color::hsv(5.4, 50.0, 50.0);
        assert_eq!(c.hue(), 5.4);
    }

    #[test]
    fn test_copy_keeps_rgb_only() {
        let original = Color::hsv(5.4, 50.0, 50.0);
        let copy = Color::from_color(&original);
        assert_eq!(copy.to_rgb(), original.to_rgb());
        assert_eq!(copy.hue(), 5.0);

        let cloned = original.clone();
        assert_eq!(cloned.hue(), 5.4);
    }

    #[test]
    fn test_from_value_shapes() {
        assert_eq!(
            Color::from_value(&json!({"red": 20, "green": 230, "blue": 180})).unwrap().rgb_string(),
            "RGB(20, 230, 180)"
        );
        assert_eq!(Color::from_value(&json!("#fff")).unwrap().hex_string(), "#FFFFFF");
        assert_eq!(Color::from_value(&Value::Null), Err(Error::Argument(ArgumentError::Missing)));
        assert_eq!(
            Color::from_value(&json!(42)),
            Err(Error::Parse(ParseError::InvalidArgument { found: "number" }))
        );
        assert_eq!(
            Color::from_value(&json!([1, 2, 3])),
            Err(Error::Parse(ParseError::InvalidArgument { found: "array" }))
        );
    }

    #[test]
    fn test_relative_luminance() {
        assert_eq!(Color::rgb(255.0, 255.0, 255.0).relative_luminance(), 1.0);
        assert_eq!(Color::rgb(0.0, 0.0, 0.0).relative_luminance(), 0.0);

        let orange = Color::parse("#FA7014").unwrap();
        assert_eq!(round_to(orange.relative_luminance() * 100.0, 2), 31.96);

        let bad = Color::parse("bad").unwrap();
        assert_eq!(round_to(bad.relative_luminance() * 100.0, 2), 44.53);
    }

    #[test]
    fn test_ycbcr_extremes() {
        let white = Color::rgb(255.0, 255.0, 255.0);
        assert!((white.luma() - 235.03).abs() < 1e-9);
        assert!((white.chroma_blue() - 128.0).abs() < 1e-9);
        assert!((white.chroma_red() - 128.0).abs() < 1e-9);

        let black = Color::rgb(0.0, 0.0, 0.0);
        assert_eq!(black.luma(), 16.0);
        assert_eq!(black.chroma_blue(), 128.0);
        assert_eq!(black.chroma_red(), 128.0);
    }

    #[test]
    fn test_brightness() {
        assert!((Color::rgb(255.0, 255.0, 255.0).brightness() - 255.0).abs() < 1e-9);
        assert_eq!(Color::rgb(0.0, 0.0, 0.0).brightness(), 0.0);
        assert!(Color::rgb(0.0, 255.0, 0.0).brightness() > Color::rgb(0.0, 0.0, 255.0).brightness());
    }

    #[test]
    fn test_hex_string() {
        assert_eq!(Color::parse("FFF").unwrap().hex_string(), "#FFFFFF");
        assert_eq!(Color::parse("#c0ffee").unwrap().hex_string(), "#C0FFEE");
        assert_eq!(Color::rgb(160.0, 79.0, 230.0).hex_string(), "#A04FE6");
        assert_eq!(Color::rgb(0.4, 9.6, 15.0).hex_string(), "#000A0F");
    }

    #[test]
    fn test_rgb_and_hsv_strings() {
        let brownish = Color::from_value(&json!({
            "blue": 16, "red": 100, "foobar": "LOL", "green": 27, "GREEN": 255
        }))
        .unwrap();
        assert_eq!(brownish.rgb_string(), "RGB(100, 27, 16)");
        assert_eq!(brownish.hsv_string(), "HSV(8°, 84%, 39%)");

        assert_eq!(Color::parse("000").unwrap().hsv_string(), "HSV(0°, 0%, 0%)");
        assert_eq!(Color::parse("#fff").unwrap().hsv_string(), "HSV(0°, 0%, 100%)");
        assert_eq!(Color::parse("#c0ffee").unwrap().hsv_string(), "HSV(164°, 25%, 100%)");
    }

    #[test]
    fn test_adjustments() {
        let base = Color::hsv(200.0, 60.0, 40.0);
        assert_eq!(base.with_hue(-10.0).hue(), 350.0);
        assert_eq!(base.with_saturation(130.0).saturation(), 100.0);
        assert_eq!(base.with_value(-5.0).value(), 0.0);
        assert_eq!(base.with_value(70.0).hue(), 200.0);
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(Color::rgb(255.0, 0.0, 0.0).to_string(), "#FF0000");
    }
}
