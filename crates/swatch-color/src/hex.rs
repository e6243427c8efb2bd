// SPDX-License-Identifier: MIT
//
// Hex notation: `#RGB` shorthand and `#RRGGBB`, case-insensitive on input,
// always six uppercase digits on output.

use crate::color::Rgb;
use crate::error::{ColorError, Result};

const HEX_NOTATION: &str = "'#' followed by 3 or 6 hexadecimal digits";

/// Parse `#RGB` or `#RRGGBB` into an RGB triple.
///
/// Shorthand digits are duplicated (`#abc` is `#aabbcc`). The leading `#`
/// is required.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] for anything else, including a
/// missing `#`, a wrong digit count, or a non-hex digit.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let invalid = || ColorError::invalid(hex, HEX_NOTATION);
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?.as_bytes();

    match digits.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(digits[0]).ok_or_else(invalid)?;
            let g = parse_hex_digit(digits[1]).ok_or_else(invalid)?;
            let b = parse_hex_digit(digits[2]).ok_or_else(invalid)?;
            Ok(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&digits[0..2]).ok_or_else(invalid)?;
            let g = parse_hex_byte(&digits[2..4]).ok_or_else(invalid)?;
            let b = parse_hex_byte(&digits[4..6]).ok_or_else(invalid)?;
            Ok(Rgb::new(r, g, b))
        }
        _ => Err(invalid()),
    }
}

/// Encode channels as `#RRGGBB`.
///
/// Each channel is clamped to 0–255 first, so `rgb_to_hex(300, -4, 16)` is
/// `"#FF0010"`.
#[must_use]
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    Rgb::clamped(r, g, b).to_hex()
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Parsing ──────────────────────────────────────────────────────────

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(hex_to_rgb("#ff8000").unwrap(), Rgb::new(255, 128, 0));
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(hex_to_rgb("#AbCdEf").unwrap(), hex_to_rgb("#abcdef").unwrap());
    }

    #[test]
    fn shorthand_duplicates_each_digit() {
        assert_eq!(hex_to_rgb("#abc").unwrap(), Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(hex_to_rgb("#fff").unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn missing_hash_is_rejected() {
        assert!(matches!(
            hex_to_rgb("ff8000"),
            Err(ColorError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn wrong_lengths_are_rejected() {
        for input in ["#", "#f", "#ff", "#ffff", "#fffff", "#fffffff", "#ffffffff"] {
            assert!(hex_to_rgb(input).is_err(), "{input} should not parse");
        }
    }

    #[test]
    fn non_hex_digits_are_rejected() {
        assert!(hex_to_rgb("#ggg").is_err());
        assert!(hex_to_rgb("#12345z").is_err());
        assert!(hex_to_rgb("#+12345").is_err());
    }

    #[test]
    fn partial_input_reports_the_text() {
        let err = hex_to_rgb("#12").unwrap_err();
        assert!(err.to_string().contains("#12"), "{err}");
    }

    // ── Encoding ─────────────────────────────────────────────────────────

    #[test]
    fn encodes_uppercase_six_digits() {
        assert_eq!(rgb_to_hex(255, 128, 0), "#FF8000");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(10, 11, 12), "#0A0B0C");
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        assert_eq!(rgb_to_hex(300, -4, 16), "#FF0010");
        assert_eq!(rgb_to_hex(i32::MAX, i32::MIN, 256), "#FF00FF");
    }

    #[test]
    fn six_digit_hex_roundtrips() {
        for hex in ["#000000", "#FFFFFF", "#0057B7", "#4338CA", "#7F7F80", "#C0FFEE"] {
            let rgb = hex_to_rgb(hex).unwrap();
            assert_eq!(rgb_to_hex(rgb.r.into(), rgb.g.into(), rgb.b.into()), hex);
        }
    }

    #[test]
    fn strided_sweep_of_the_24_bit_space_roundtrips() {
        // 4099 is prime, so the stride lands on varied values in every channel.
        for value in (0u32..=0xFF_FFFF).step_by(4099).chain([0xFF_FFFF]) {
            let hex = format!("#{value:06X}");
            let rgb = hex_to_rgb(&hex).unwrap();
            let packed = (u32::from(rgb.r) << 16) | (u32::from(rgb.g) << 8) | u32::from(rgb.b);
            assert_eq!(packed, value, "{hex}");
            assert_eq!(rgb_to_hex(rgb.r.into(), rgb.g.into(), rgb.b.into()), hex);
        }
    }

    #[test]
    fn lowercase_input_roundtrips_to_uppercase() {
        let rgb = hex_to_rgb("#c0ffee").unwrap();
        assert_eq!(rgb.to_hex(), "#C0FFEE");
    }
}
