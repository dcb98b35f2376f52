//! Hex color type and the per-tool palette constants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A validated `#RRGGBB` color, stored uppercase.
///
/// Accepts the short `#RGB` form on input and expands it.
///
/// # Examples
///
/// ```
/// use mapscriber::draw::HexColor;
/// let teal: HexColor = "#0ea5e9".parse().unwrap();
/// assert_eq!(teal.as_str(), "#0EA5E9");
/// let white: HexColor = "#fff".parse().unwrap();
/// assert_eq!(white.as_str(), "#FFFFFF");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

/// Errors produced while parsing a color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),

    #[error("color '{0}' must have 3 or 6 hex digits")]
    BadLength(String),

    #[error("color '{0}' contains non-hex characters")]
    NotHex(String),
}

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(value.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::NotHex(value.to_string()));
        }
        let expanded = match digits.len() {
            6 => digits.to_ascii_uppercase(),
            3 => digits
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
                .to_ascii_uppercase(),
            _ => return Err(ColorError::BadLength(value.to_string())),
        };
        Ok(Self(format!("#{expanded}")))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compile-time palette entry; converted to [`HexColor`] on use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticHex(&'static str);

impl From<StaticHex> for HexColor {
    fn from(value: StaticHex) -> Self {
        HexColor(value.0.to_string())
    }
}

// ============================================================================
// Tool Palette
// ============================================================================

/// Line tool color (emerald)
pub const GREEN: StaticHex = StaticHex("#10B981");

/// Polygon tool color (violet)
pub const PURPLE: StaticHex = StaticHex("#8B5CF6");

/// Circle and rectangle tool color (sky blue)
pub const BLUE: StaticHex = StaticHex("#0EA5E9");

/// Measure tool color
pub const RED: StaticHex = StaticHex("#EF4444");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_colors() {
        assert!(matches!(
            "10B981".parse::<HexColor>(),
            Err(ColorError::MissingHash(_))
        ));
        assert!(matches!(
            "#10B98".parse::<HexColor>(),
            Err(ColorError::BadLength(_))
        ));
        assert!(matches!(
            "#10B98G".parse::<HexColor>(),
            Err(ColorError::NotHex(_))
        ));
    }

    #[test]
    fn palette_constants_are_valid() {
        for entry in [GREEN, PURPLE, BLUE, RED] {
            let color = HexColor::from(entry);
            assert_eq!(color.as_str().parse::<HexColor>().unwrap(), color);
        }
    }

    #[test]
    fn deserialize_validates() {
        assert!(serde_json::from_str::<HexColor>("\"#abc\"").is_ok());
        assert!(serde_json::from_str::<HexColor>("\"blue\"").is_err());
    }
}
