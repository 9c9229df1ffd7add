use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// RGBA colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Why a colour string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("colour string is empty")]
    Empty,
    #[error("expected 3, 4, 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

impl Color {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK:       Self = Self::new(0, 0, 0, 0xFF);
    pub const WHITE:       Self = Self::new(0xFF, 0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex colour string.
    ///
    /// Accepts an optional leading `#` followed by `RGB`, `RGBA`, `RRGGBB` or
    /// `RRGGBBAA`. Short forms repeat each digit; a missing alpha is opaque.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let digits = hex
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ColorParseError::InvalidDigit(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        let short = |d: u8| d << 4 | d;
        let long = |hi: u8, lo: u8| hi << 4 | lo;

        match *digits.as_slice() {
            [r, g, b] => Ok(Self::new(short(r), short(g), short(b), 0xFF)),
            [r, g, b, a] => Ok(Self::new(short(r), short(g), short(b), short(a))),
            [r1, r2, g1, g2, b1, b2] => {
                Ok(Self::new(long(r1, r2), long(g1, g2), long(b1, b2), 0xFF))
            }
            [r1, r2, g1, g2, b1, b2, a1, a2] => Ok(Self::new(
                long(r1, r2),
                long(g1, g2),
                long(b1, b2),
                long(a1, a2),
            )),
            _ => Err(ColorParseError::InvalidLength(digits.len())),
        }
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.a = alpha;
        self
    }
}

/// Canonical form: `#RRGGBBAA`, uppercase.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#1e1e2e", Color::new(0x1E, 0x1E, 0x2E, 0xFF))]
    #[case("#CBA6F780", Color::new(0xCB, 0xA6, 0xF7, 0x80))]
    #[case("fff", Color::WHITE)]
    #[case("#0008", Color::new(0, 0, 0, 0x88))]
    #[case("  #00000000 ", Color::TRANSPARENT)]
    fn parses_supported_forms(#[case] input: &str, #[case] expected: Color) {
        assert_eq!(input.parse::<Color>(), Ok(expected));
    }

    #[rstest]
    #[case("", ColorParseError::Empty)]
    #[case("#", ColorParseError::Empty)]
    #[case("#12345", ColorParseError::InvalidLength(5))]
    #[case("not-a-color", ColorParseError::InvalidDigit('n'))]
    #[case("#ééé", ColorParseError::InvalidDigit('é'))]
    fn rejects_malformed(#[case] input: &str, #[case] expected: ColorParseError) {
        assert_eq!(Color::from_hex(input), Err(expected));
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(Color::new(0xAB, 0x01, 0x00, 0xFF).to_string(), "#AB0100FF");
        assert_eq!(Color::default().to_string(), "#00000000");
    }

    #[test]
    fn display_parses_back() {
        let color = Color::new(12, 34, 56, 78);
        assert_eq!(color.to_string().parse::<Color>(), Ok(color));
    }

    #[test]
    fn with_alpha_replaces_alpha_only() {
        assert_eq!(Color::BLACK.with_alpha(0x40), Color::new(0, 0, 0, 0x40));
    }
}
