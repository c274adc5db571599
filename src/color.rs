//! Color values with an automatic (defer-to-parent) sentinel.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A color as used by plot elements.
///
/// Besides concrete RGBA values, a color can be [`Color::Automatic`],
/// meaning "no opinion, inherit from the parent model". Resolution of
/// automatic colors happens in [`StyledElement::resolved_text_color`],
/// never here.
///
/// [`StyledElement::resolved_text_color`]: crate::StyledElement::resolved_text_color
///
/// # Example
///
/// ```rust
/// use underplot::Color;
///
/// let c = Color::parse("#1e90ff").unwrap();
/// assert_eq!(c, Color::rgb(0x1e, 0x90, 0xff));
/// assert!(!c.is_automatic());
/// assert!(Color::AUTOMATIC.is_automatic());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Defer to the parent context's resolved color.
    Automatic,
    /// A concrete color with alpha.
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl Color {
    pub const AUTOMATIC: Color = Color::Automatic;
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Creates a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::Rgba { r, g, b, a: 255 }
    }

    /// Creates a color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color::Rgba { r, g, b, a }
    }

    /// Returns `true` for the defer-to-parent sentinel.
    pub const fn is_automatic(&self) -> bool {
        matches!(self, Color::Automatic)
    }

    /// Returns `self` unless it is automatic, in which case `fallback`.
    ///
    /// The callers' building block for override-then-fallback chains.
    ///
    /// # Example
    ///
    /// ```rust
    /// use underplot::Color;
    ///
    /// assert_eq!(Color::RED.or(Color::BLACK), Color::RED);
    /// assert_eq!(Color::AUTOMATIC.or(Color::BLACK), Color::BLACK);
    /// ```
    pub fn or(self, fallback: Color) -> Color {
        if self.is_automatic() {
            fallback
        } else {
            self
        }
    }

    /// Parses a `#rrggbb` or `#rrggbbaa` hex string.
    ///
    /// The leading `#` is required; case is ignored.
    pub fn parse(s: &str) -> Result<Color, ColorParseError> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError::BadLength(s.to_string()));
        }
        // Byte length alone says nothing about the characters; reject
        // non-ASCII before slicing into digit pairs.
        if !hex.is_ascii() {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }
        let byte = |i: usize| -> Result<u8, ColorParseError> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorParseError::BadDigit(s.to_string()))
        };
        let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Color::Rgba { r, g, b, a })
    }
}

impl Default for Color {
    /// Elements start with no color opinion of their own.
    fn default() -> Self {
        Color::Automatic
    }
}

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color '{0}' does not start with '#'")]
    MissingHash(String),
    #[error("color '{0}' must be 6 or 8 hex digits")]
    BadLength(String),
    #[error("color '{0}' contains a non-hex digit")]
    BadDigit(String),
}
