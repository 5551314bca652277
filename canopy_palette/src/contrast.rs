// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Luma-based foreground selection plus `#rrggbb` parsing and formatting.

use alloc::format;
use alloc::string::String;
use core::fmt;
use peniko::Color;

/// A legible foreground (text) color for some background.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextColor {
    /// Black text, for light backgrounds.
    Black,
    /// White text, for dark backgrounds.
    White,
}

impl TextColor {
    /// Picks the foreground for the given background color.
    ///
    /// Backgrounds with [`luma`] of at least 128 get black text, darker ones
    /// get white.
    pub fn for_background(background: Color) -> Self {
        if luma(background) >= 128.0 {
            Self::Black
        } else {
            Self::White
        }
    }

    /// This foreground as a CSS color keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// This foreground as a [`Color`].
    pub fn color(self) -> Color {
        match self {
            Self::Black => Color::from_rgba8(0, 0, 0, 255),
            Self::White => Color::from_rgba8(255, 255, 255, 255),
        }
    }
}

/// Perceived brightness of a color in the 0–255 range.
///
/// The classic YIQ weighting over 8-bit sRGB channels:
/// `0.299 * R + 0.587 * G + 0.114 * B`, evaluated in integer arithmetic
/// (`(299 R + 587 G + 114 B) / 1000`) so mid-gray lands on 128 exactly.
/// Alpha is ignored.
pub fn luma(color: Color) -> f64 {
    let rgba = color.to_rgba8();
    let weighted =
        299 * u32::from(rgba.r) + 587 * u32::from(rgba.g) + 114 * u32::from(rgba.b);
    f64::from(weighted) / 1000.0
}

/// Errors from [`parse_hex_color`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HexColorError {
    /// The input does not start with `#`.
    MissingHash,
    /// The input is not exactly `#` plus six hex digits.
    BadLength {
        /// Number of characters after the `#`.
        digits: usize,
    },
    /// A character is not a hexadecimal digit.
    BadDigit {
        /// Byte offset of the offending character within the input.
        index: usize,
    },
}

impl fmt::Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash => write!(f, "hex color must start with '#'"),
            Self::BadLength { digits } => {
                write!(f, "hex color must have exactly 6 digits, found {digits}")
            }
            Self::BadDigit { index } => {
                write!(f, "invalid hex digit at byte {index}")
            }
        }
    }
}

impl core::error::Error for HexColorError {}

/// Parses a `#rrggbb` string into an opaque [`Color`].
///
/// Total over all six-hex-digit inputs (either letter case); anything else
/// is rejected with a descriptive error, never mapped to a fallback color.
pub fn parse_hex_color(s: &str) -> Result<Color, HexColorError> {
    let digits = s.strip_prefix('#').ok_or(HexColorError::MissingHash)?;
    if digits.len() != 6 {
        return Err(HexColorError::BadLength {
            digits: digits.len(),
        });
    }
    let mut channels = [0_u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        let hi = hex_digit(digits.as_bytes()[i * 2], 1 + i * 2)?;
        let lo = hex_digit(digits.as_bytes()[i * 2 + 1], 2 + i * 2)?;
        *channel = hi * 16 + lo;
    }
    Ok(Color::from_rgba8(channels[0], channels[1], channels[2], 255))
}

fn hex_digit(byte: u8, index: usize) -> Result<u8, HexColorError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(HexColorError::BadDigit { index }),
    }
}

/// Formats a color as lowercase `#rrggbb`. Alpha is dropped.
pub fn to_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_background_gets_white_text() {
        let bg = parse_hex_color("#000000").unwrap();
        assert_eq!(luma(bg), 0.0);
        assert_eq!(TextColor::for_background(bg), TextColor::White);
    }

    #[test]
    fn white_background_gets_black_text() {
        let bg = parse_hex_color("#ffffff").unwrap();
        assert_eq!(TextColor::for_background(bg), TextColor::Black);
    }

    #[test]
    fn pure_red_gets_white_text() {
        // Y = 0.299 * 255 = 76.2, well under the 128 threshold.
        let bg = parse_hex_color("#ff0000").unwrap();
        assert_eq!(TextColor::for_background(bg), TextColor::White);
    }

    #[test]
    fn threshold_boundary() {
        // 128/255 gray on every channel: Y = 128 exactly, the black side.
        let bg = Color::from_rgba8(128, 128, 128, 255);
        assert_eq!(TextColor::for_background(bg), TextColor::Black);
        let bg = Color::from_rgba8(127, 127, 127, 255);
        assert_eq!(TextColor::for_background(bg), TextColor::White);
    }

    #[test]
    fn parse_accepts_both_letter_cases() {
        let lower = parse_hex_color("#d73027").unwrap();
        let upper = parse_hex_color("#D73027").unwrap();
        assert_eq!(lower.to_rgba8(), upper.to_rgba8());
        let rgba = lower.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b), (0xd7, 0x30, 0x27));
    }

    #[test]
    fn parse_rejects_missing_hash() {
        assert_eq!(parse_hex_color("d73027"), Err(HexColorError::MissingHash));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            parse_hex_color("#fff"),
            Err(HexColorError::BadLength { digits: 3 })
        );
        assert_eq!(
            parse_hex_color("#ffffffff"),
            Err(HexColorError::BadLength { digits: 8 })
        );
    }

    #[test]
    fn parse_rejects_non_hex_digits() {
        assert_eq!(
            parse_hex_color("#zz0000"),
            Err(HexColorError::BadDigit { index: 1 })
        );
        assert_eq!(
            parse_hex_color("#00zz00"),
            Err(HexColorError::BadDigit { index: 3 })
        );
    }

    #[test]
    fn hex_round_trips() {
        for s in ["#000000", "#ffffff", "#d73027", "#4575b4", "#00441b"] {
            let color = parse_hex_color(s).unwrap();
            assert_eq!(to_hex(color), s);
        }
    }

    #[test]
    fn text_color_css_and_color_agree() {
        assert_eq!(TextColor::Black.as_css(), "black");
        assert_eq!(TextColor::White.as_css(), "white");
        assert_eq!(TextColor::Black.color().to_rgba8().r, 0);
        assert_eq!(TextColor::White.color().to_rgba8().r, 255);
    }
}
