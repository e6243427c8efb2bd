// SPDX-License-Identifier: MIT
//
// HSL: the cylindrical form the palette generator draws from.
//
// Hue is in degrees [0, 360), saturation and lightness are percentages
// [0, 100]. Components are kept as f64 so that RGB → HSL → RGB is exact up
// to the final rounding into 8-bit channels.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::Rgb;
use crate::error::{ColorError, Result};

const HSL_NOTATION: &str = "hsl(H, S%, L%)";

/// Canonical `hsl(H, S%, L%)` text. Components may carry a fraction and a
/// sign; [`Hsl::new`] wraps the hue and clamps S and L afterwards.
static HSL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^\s*hsl\(",
        r"\s*(-?\d+(?:\.\d+)?)\s*,",
        r"\s*(-?\d+(?:\.\d+)?)\s*%\s*,",
        r"\s*(-?\d+(?:\.\d+)?)\s*%\s*",
        r"\)\s*$",
    ))
    .expect("HSL pattern is a valid regex")
});

/// A color in HSL form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, [0, 360).
    pub h: f64,
    /// Saturation in percent, [0, 100].
    pub s: f64,
    /// Lightness in percent, [0, 100].
    pub l: f64,
}

impl Hsl {
    /// Build an HSL triple, wrapping the hue modulo 360 and clamping
    /// saturation and lightness to [0, 100].
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    /// Convert to an 8-bit RGB triple.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb.r.into(), rgb.g.into(), rgb.b.into())
    }
}

impl fmt::Display for Hsl {
    /// `hsl(H, S%, L%)` with whole-number components.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = (self.h.round() as i64).rem_euclid(360);
        write!(f, "hsl({h}, {:.0}%, {:.0}%)", self.s, self.l)
    }
}

/// Convert RGB channels to HSL.
///
/// Channels outside 0–255 are clamped first. Achromatic colors (all three
/// channels equal) get hue 0 and saturation 0.
#[must_use]
pub fn rgb_to_hsl(r: i32, g: i32, b: i32) -> Hsl {
    let rgb = Rgb::clamped(r, g, b);
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);

    let (rf, gf, bf) = (unit(rgb.r), unit(rgb.g), unit(rgb.b));
    let (maxf, minf) = (unit(max), unit(min));
    let l = (maxf + minf) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = maxf - minf;
    let s = if l > 0.5 {
        d / (2.0 - maxf - minf)
    } else {
        d / (maxf + minf)
    };

    let sector = if max == rgb.r {
        (gf - bf) / d + if rgb.g < rgb.b { 6.0 } else { 0.0 }
    } else if max == rgb.g {
        (bf - rf) / d + 2.0
    } else {
        (rf - gf) / d + 4.0
    };

    Hsl::new(sector * 60.0, s * 100.0, l * 100.0)
}

/// Convert HSL to RGB.
///
/// The hue is taken modulo 360; saturation and lightness are clamped to
/// [0, 100].
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let Hsl { h, s, l } = Hsl::new(h, s, l);
    let s = s / 100.0;
    let l = l / 100.0;

    let chroma = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
    let hp = h / 60.0;
    let x = chroma * (1.0 - (hp % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match hp as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = l - chroma / 2.0;
    Rgb::new(to_u8(r1 + m), to_u8(g1 + m), to_u8(b1 + m))
}

/// Parse the canonical `hsl(H, S%, L%)` notation (case-insensitive,
/// whitespace-tolerant).
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if the text does not match.
pub fn parse_hsl(text: &str) -> Result<Hsl> {
    let invalid = || ColorError::invalid(text, HSL_NOTATION);
    let caps = HSL_PATTERN.captures(text).ok_or_else(invalid)?;

    let component = |i: usize| -> Result<f64> {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .ok_or_else(invalid)
    };

    Ok(Hsl::new(component(1)?, component(2)?, component(3)?))
}

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

#[inline]
fn clamp_percent(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}

#[inline]
fn unit(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}

/// Convert a 0.0–1.0 channel to 0–255 with rounding.
#[inline]
fn to_u8(v: f64) -> u8 {
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
