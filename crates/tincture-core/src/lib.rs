//! Core color types for Tincture.
//!
//! This crate provides the foundation the palette generators build on:
//!
//! - **Color**: an immutable color value with lazy, cached HSV derivation
//! - **Parsing**: hex, decimal RGB, decimal HSV and keyed-object input
//! - **Conversion**: RGB <-> HSV, Y'CbCr components, relative luminance
//! - **Formatting**: `#RRGGBB`, `RGB(r, g, b)` and `HSV(h°, s%, v%)`
//! - **Hue arithmetic**: floor-modulo normalization onto `[0, 360)`
//! - **Randomness**: an injectable uniform integer source and shuffle
//!
//! # Example
//!
//! ```
//! use tincture_core::{Color, normalize_hue};
//!
//! let navy = Color::parse("#1A2D86")?;
//! assert_eq!(navy.hue(), 229.0);
//! assert_eq!(navy.saturation(), 81.0);
//! assert_eq!(navy.value(), 53.0);
//!
//! let wrapped = Color::hsv(normalize_hue(-20.0), 50.0, 50.0);
//! assert_eq!(wrapped.hsv_string(), "HSV(340°, 50%, 50%)");
//! # Ok::<(), tincture_core::Error>(())
//! ```

pub mod color;
mod error;
pub mod hue;
pub mod logging;
pub mod random;

pub use color::{
    Color, Hsv, Rgb, hsv_to_rgb, parse_hex_string, parse_hsv_string, parse_rgb_string,
    rgb_to_hsv, rgb_to_hsv_exact,
};
pub use error::{ArgumentError, DomainError, Error, Notation, ParseError, Result};
pub use hue::{clamp, normalize_hue};
pub use logging::PerfSpan;
pub use random::{RandomSource, SeededRandom, SequenceRandom, ThreadRandom, shuffle};
