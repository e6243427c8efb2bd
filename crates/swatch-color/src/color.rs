// SPDX-License-Identifier: MIT
//
// The `Color` value and its 8-bit RGB triple.
//
// A `Color` is immutable. Operations that "change" a color return a new one.
// Equality is exact on the 8-bit channels, which is the same as comparing
// canonical hex strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};
use crate::hex::hex_to_rgb;
use crate::hsl::{Hsl, parse_hsl};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a triple from wide integers, clamping each channel to 0–255.
    #[must_use]
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// `#RRGGBB`, uppercase.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Normalized channels in [0.0, 1.0].
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[inline]
fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color.
///
/// Constructed from any of its three spellings and readable in any of them:
///
/// ```
/// use swatch_color::Color;
///
/// let teal = Color::from_hex("#0aa").unwrap();
/// assert_eq!(teal.to_hex(), "#00AAAA");
///
/// let same = Color::from_hsl(180.0, 100.0, 33.33);
/// assert_eq!(same, teal);
/// ```
///
/// Serializes as its canonical hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    rgb: Rgb,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: Rgb::new(r, g, b) }
    }

    /// Create a color from wide integer channels, clamping to 0–255.
    #[must_use]
    pub fn rgb_clamped(r: i32, g: i32, b: i32) -> Self {
        Self { rgb: Rgb::clamped(r, g, b) }
    }

    /// Parse `#RGB` or `#RRGGBB`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] on malformed hex text.
    pub fn from_hex(hex: &str) -> Result<Self> {
        hex_to_rgb(hex).map(Self::from)
    }

    /// Create a color from HSL components (hue wrapped, S/L clamped).
    #[must_use]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        Self::from(Hsl::new(h, s, l))
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    // ─── Accessors ───────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn to_rgb(self) -> Rgb {
        self.rgb
    }

    /// Canonical `#RRGGBB`, uppercase.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.rgb.to_hex()
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from(self.rgb)
    }

    /// Per-channel inversion (`255 - channel`).
    #[must_use]
    pub const fn inverted(self) -> Self {
        Self::rgb(255 - self.rgb.r, 255 - self.rgb.g, 255 - self.rgb.b)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self { rgb }
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self { rgb: hsl.to_rgb() }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self> {
        parse_color(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Parse color text in either hex (`#RGB`, `#RRGGBB`) or `hsl(H, S%, L%)`
/// notation. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if the text is neither. Malformed
/// text is never corrected.
pub fn parse_color(text: &str) -> Result<Color> {
    let trimmed = text.trim();
    if trimmed.starts_with('#') {
        Color::from_hex(trimmed)
    } else if trimmed.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("hsl")) {
        parse_hsl(trimmed).map(Color::from)
    } else {
        Err(ColorError::invalid(text, "hex (#RRGGBB) or hsl(H, S%, L%) color"))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Construction ─────────────────────────────────────────────────────

    #[test]
    fn constants_are_extremes() {
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color::WHITE.to_hex(), "#FFFFFF");
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn clamped_constructor_saturates() {
        assert_eq!(Color::rgb_clamped(-5, 128, 999), Color::rgb(0, 128, 255));
    }

    #[test]
    fn hsl_and_hex_agree() {
        let from_hsl = Color::from_hsl(0.0, 100.0, 50.0);
        assert_eq!(from_hsl, Color::from_hex("#F00").unwrap());
    }

    #[test]
    fn inversion_flips_every_channel() {
        assert_eq!(Color::rgb(0, 100, 255).inverted(), Color::rgb(255, 155, 0));
        assert_eq!(Color::BLACK.inverted(), Color::WHITE);
    }

    // ── Representations ──────────────────────────────────────────────────

    #[test]
    fn all_spellings_reencode_to_the_same_hex() {
        for hex in ["#0057B7", "#FFEB3B", "#333333", "#4338CA", "#C0FFEE"] {
            let color = Color::from_hex(hex).unwrap();
            let via_hsl = Color::from(color.to_hsl());
            let (a, b) = (color.to_rgb(), via_hsl.to_rgb());
            assert!(
                a.r.abs_diff(b.r) <= 1 && a.g.abs_diff(b.g) <= 1 && a.b.abs_diff(b.b) <= 1,
                "{hex}: {a:?} vs {b:?}"
            );
        }
    }

    #[test]
    fn display_and_debug() {
        let c = Color::rgb(1, 2, 3);
        assert_eq!(c.to_string(), "#010203");
        assert_eq!(format!("{c:?}"), "Color(#010203)");
        assert_eq!(c.to_rgb().to_string(), "rgb(1, 2, 3)");
    }

    // ── Parsing ──────────────────────────────────────────────────────────

    #[test]
    fn parse_color_accepts_both_notations() {
        assert_eq!(parse_color("#000000").unwrap(), Color::BLACK);
        assert_eq!(parse_color(" #fff ").unwrap(), Color::WHITE);
        assert_eq!(parse_color("hsl(0, 0%, 100%)").unwrap(), Color::WHITE);
        assert_eq!("HSL(0, 100%, 50%)".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn parse_color_rejects_other_text() {
        for input in ["", "red", "000000", "rgb(0, 0, 0)", "#12", "hs"] {
            assert!(
                matches!(parse_color(input), Err(ColorError::InvalidFormat { .. })),
                "{input:?} should not parse"
            );
        }
    }

    // ── Serde ────────────────────────────────────────────────────────────

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(0, 87, 183)).unwrap();
        assert_eq!(json, "\"#0057B7\"");
    }

    #[test]
    fn deserializes_from_hex_string() {
        let color: Color = serde_json::from_str("\"#0057b7\"").unwrap();
        assert_eq!(color, Color::rgb(0, 87, 183));
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }
}
