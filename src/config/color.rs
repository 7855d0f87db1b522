//! Color token values
//!
//! A color token is either a `#RRGGBB` hex code or one of the two reserved
//! symbolic values understood by the class generator: `transparent` and
//! `current` (the current text color).

use std::fmt;
use std::str::FromStr;

/// Keyword for the fully transparent color
pub const TRANSPARENT: &str = "transparent";

/// Keyword for the current text color
pub const CURRENT: &str = "current";

/// CSS spelling of the current text color
pub const CURRENT_COLOR: &str = "currentColor";

/// Color parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("color value cannot be empty")]
    Empty,

    #[error("invalid hex color '{0}': expected '#RRGGBB'")]
    MissingHash(String),

    #[error("invalid hex color '{0}': expected 6 hex digits after '#'")]
    BadLength(String),

    #[error("invalid hex color '{0}': '{1}' is not a hex digit")]
    BadDigit(String, char),

    #[error("invalid hex color '{0}': {1}")]
    Unparseable(String, String),
}

/// A `#RRGGBB` color, kept exactly as written
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    literal: String,
    rgb: [u8; 3],
}

impl HexColor {
    /// Parse a strict six-digit hex color
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        if input.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let Some(digits) = input.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(input.to_string()));
        };

        if digits.chars().count() != 6 {
            return Err(ColorParseError::BadLength(input.to_string()));
        }

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(input.to_string(), bad));
        }

        let parsed = csscolorparser::parse(input)
            .map_err(|e| ColorParseError::Unparseable(input.to_string(), e.to_string()))?;
        let [r, g, b, _] = parsed.to_rgba8();

        Ok(Self {
            literal: input.to_string(),
            rgb: [r, g, b],
        })
    }

    /// The color as declared, e.g. `#a07253`
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    /// Red, green and blue components
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

/// Value of a color token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorValue {
    Hex(HexColor),
    Transparent,
    Current,
}

impl ColorValue {
    /// Whether this is one of the reserved symbolic values
    pub fn is_reserved(&self) -> bool {
        !matches!(self, ColorValue::Hex(_))
    }

    pub fn as_hex(&self) -> Option<&HexColor> {
        match self {
            ColorValue::Hex(hex) => Some(hex),
            _ => None,
        }
    }

    /// CSS value emitted for this token
    pub fn as_css(&self) -> &str {
        match self {
            ColorValue::Hex(hex) => hex.as_str(),
            ColorValue::Transparent => TRANSPARENT,
            ColorValue::Current => CURRENT_COLOR,
        }
    }
}

impl FromStr for ColorValue {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TRANSPARENT => Ok(ColorValue::Transparent),
            CURRENT | CURRENT_COLOR => Ok(ColorValue::Current),
            other => HexColor::parse(other).map(ColorValue::Hex),
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}
