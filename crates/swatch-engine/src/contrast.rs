//! WCAG 2.x contrast computation and compliance checks.
//!
//! - Relative luminance from linearized sRGB channels.
//! - Contrast ratio between an ordered (foreground, background) pair,
//!   always in [1.0, 21.0] and symmetric in its arguments.
//! - Classification against the AA-large (3:1), AA (4.5:1) and AAA (7:1)
//!   thresholds. Boundary values pass.
//!
//! [`suggest_improvement`] is the "fix contrast" button: a single coarse
//! snap of the foreground to black or white. It does not guarantee
//! compliance. Callers re-check the returned pair.

use std::fmt;

use log::debug;
use swatch_color::Color;

/// Minimum ratio for large text at level AA.
pub const AA_LARGE: f64 = 3.0;

/// Minimum ratio for normal text at level AA.
pub const AA_NORMAL: f64 = 4.5;

/// Minimum ratio for normal text at level AAA.
pub const AAA: f64 = 7.0;

/// Linearization knee used by WCAG 2.x.
const LINEAR_KNEE: f64 = 0.039_28;

/// Linearize one normalized sRGB channel.
#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c <= LINEAR_KNEE {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.x.
///
/// `L = 0.2126 * R_lin + 0.7152 * G_lin + 0.0722 * B_lin`, in [0.0, 1.0]
/// where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_rgb().to_unit();
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f64
        .mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
        .clamp(0.0, 1.0)
}

/// Compute the WCAG contrast ratio between two colors.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`, in [1.0, 21.0] regardless of
/// argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    ((lighter + 0.05) / (darker + 0.05)).clamp(1.0, 21.0)
}

// ---------------------------------------------------------------------------
// Compliance
// ---------------------------------------------------------------------------

/// Which WCAG levels a contrast ratio satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Compliance {
    /// Ratio >= 3.0 (large text, AA).
    pub aa_large: bool,
    /// Ratio >= 4.5 (normal text, AA).
    pub aa_normal: bool,
    /// Ratio >= 7.0 (normal text, AAA).
    pub aaa: bool,
}

/// Classify a ratio against the WCAG thresholds (inclusive).
#[must_use]
pub fn classify(ratio: f64) -> Compliance {
    Compliance {
        aa_large: ratio >= AA_LARGE,
        aa_normal: ratio >= AA_NORMAL,
        aaa: ratio >= AAA,
    }
}

/// A contrast ratio together with the compliance it implies.
///
/// `ratio` is exact. `compliance` is classified on the ratio as displayed
/// (two decimals), so the printed ratio and the printed verdict agree.
/// Derived on demand for the current pair; not meant to be stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastResult {
    pub ratio: f64,
    pub compliance: Compliance,
}

impl ContrastResult {
    /// Measure `fg` against `bg`.
    #[must_use]
    pub fn between(fg: Color, bg: Color) -> Self {
        let ratio = contrast_ratio(fg, bg);
        Self {
            ratio,
            compliance: classify(round_to_hundredths(ratio)),
        }
    }

    /// The ratio rounded to two decimals, as displayed.
    #[must_use]
    pub fn displayed_ratio(&self) -> f64 {
        round_to_hundredths(self.ratio)
    }
}

fn round_to_hundredths(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl fmt::Display for ContrastResult {
    /// Two decimals, e.g. `21.00:1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}:1", self.ratio)
    }
}

// ---------------------------------------------------------------------------
// Pairs and adjustments
// ---------------------------------------------------------------------------

/// An ordered foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Color,
}

impl ColorPair {
    #[must_use]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    /// The same pair with foreground and background exchanged.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            fg: self.bg,
            bg: self.fg,
        }
    }

    /// Contrast of this pair.
    #[must_use]
    pub fn contrast(self) -> ContrastResult {
        ContrastResult::between(self.fg, self.bg)
    }

    /// The pair with its foreground passed through [`suggest_improvement`].
    #[must_use]
    pub fn improved(self) -> Self {
        Self {
            fg: suggest_improvement(self.fg, self.bg),
            bg: self.bg,
        }
    }
}

/// One-step "fix contrast" heuristic.
///
/// Returns `fg` unchanged if the pair already reaches 4.5:1. Otherwise the
/// foreground snaps to black if it is the brighter of the two, or to white
/// if it is not. Against mid-tone backgrounds the result can still fail;
/// re-check it.
#[must_use]
pub fn suggest_improvement(fg: Color, bg: Color) -> Color {
    if contrast_ratio(fg, bg) >= AA_NORMAL {
        return fg;
    }
    let snapped = if relative_luminance(fg) > relative_luminance(bg) {
        Color::BLACK
    } else {
        Color::WHITE
    };
    debug!("contrast fix: {fg} on {bg} -> {snapped}");
    snapped
}

/// Per-channel inversion of a color.
#[must_use]
pub const fn complement(color: Color) -> Color {
    color.inverted()
}

/// Black or white, whichever reads better on `background`.
///
/// Ties go to black.
#[must_use]
pub fn text_color_for(background: Color) -> Color {
    if contrast_ratio(Color::BLACK, background) >= contrast_ratio(Color::WHITE, background) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
