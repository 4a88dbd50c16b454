//! Error types for Tincture.

use std::fmt;

/// Result type alias for color operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The textual notation a parser was attempting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// `#RGB` / `#RRGGBB`.
    Hex,
    /// `rgb(r, g, b)` or a bare `r, g, b` triple.
    Rgb,
    /// `hsv(h, s, v)` or a bare `h, s, v` triple.
    Hsv,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex => write!(f, "hex"),
            Self::Rgb => write!(f, "RGB"),
            Self::Hsv => write!(f, "HSV"),
        }
    }
}

/// Malformed or unrecognized color input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Hex text that is neither 3 nor 6 digits long.
    #[error("Could not parse hex string '{input}': expected 3 or 6 hexadecimal digits")]
    InvalidHexLength { input: String },

    /// Hex text containing a non-hexadecimal character.
    #[error("Could not parse hex string '{input}': invalid digit at byte index {index}")]
    InvalidHexDigit { input: String, index: usize },

    /// Text that does not match the expected notation (bad keyword, unbalanced
    /// parentheses, missing components, extra text).
    #[error("Invalid {notation} string format: '{input}'")]
    Malformed { notation: Notation, input: String },

    /// A numeric component outside its legal range.
    #[error("Value {value} out of {channel} range [{min}, {max}]")]
    OutOfRange {
        channel: &'static str,
        value: String,
        min: i64,
        max: i64,
    },

    /// A keyed object without a complete red/green/blue, R/G/B or
    /// hue/saturation/value triple.
    #[error("Cannot determine color object type")]
    UnknownObject,

    /// Input that is neither text nor a keyed object.
    #[error("Invalid argument passed to constructor: expected a string or object, found {found}")]
    InvalidArgument { found: &'static str },
}

impl ParseError {
    /// Create a malformed-notation error.
    pub fn malformed(notation: Notation, input: impl Into<String>) -> Self {
        Self::Malformed {
            notation,
            input: input.into(),
        }
    }

    /// Create an out-of-range error.
    pub fn out_of_range(channel: &'static str, value: impl fmt::Display, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            channel,
            value: value.to_string(),
            min,
            max,
        }
    }
}

/// Missing or wrong-typed constructor argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// Nothing (null or empty text) was supplied.
    #[error("Color requires an argument to its constructor")]
    Missing,

    /// A recognized key holds a value of the wrong type.
    #[error("Key '{key}' must hold a {expected}")]
    WrongType { key: String, expected: &'static str },
}

/// Statistics requested over data that cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// The cluster holds no samples.
    #[error("Expected a non-empty cluster to evaluate")]
    EmptyCluster,

    /// A sample is not a number.
    #[error("Expected a number at cluster index {index}")]
    NonNumeric { index: usize },
}

/// The main error type for Tincture operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Parsing failed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// The constructor argument was missing or mistyped.
    #[error("Argument error: {0}")]
    Argument(#[from] ArgumentError),

    /// A statistical evaluation was impossible.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParseError::out_of_range("blue", 256, 0, 255);
        assert_eq!(err.to_string(), "Value 256 out of blue range [0, 255]");

        let err = ParseError::malformed(Notation::Rgb, "rbg(5,10,15)");
        assert_eq!(err.to_string(), "Invalid RGB string format: 'rbg(5,10,15)'");
    }

    #[test]
    fn test_error_conversions() {
        let err: Error = DomainError::EmptyCluster.into();
        assert!(matches!(err, Error::Domain(DomainError::EmptyCluster)));

        let err: Error = ArgumentError::Missing.into();
        assert!(err.to_string().starts_with("Argument error"));
    }
}
