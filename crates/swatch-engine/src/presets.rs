//! Named foreground/background presets for the contrast checker.
//!
//! Each preset is a known pair worth comparing against: the two extremes,
//! plus a few common brand-ish combinations.

use swatch_color::Color;

use crate::contrast::ColorPair;

/// A named color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub pair: ColorPair,
}

const fn preset(name: &'static str, fg: Color, bg: Color) -> Preset {
    Preset {
        name,
        pair: ColorPair::new(fg, bg),
    }
}

const PRESETS: &[Preset] = &[
    preset("Black on White", Color::BLACK, Color::WHITE),
    preset("White on Black", Color::WHITE, Color::BLACK),
    preset("White on Blue", Color::WHITE, Color::rgb(0x00, 0x57, 0xB7)),
    preset("Dark Gray on Light Gray", Color::rgb(0x33, 0x33, 0x33), Color::rgb(0xF5, 0xF5, 0xF5)),
    preset("Light Gray on Indigo", Color::rgb(0xF7, 0xF7, 0xF7), Color::rgb(0x43, 0x38, 0xCA)),
    preset("Dark Gray on Yellow", Color::rgb(0x21, 0x21, 0x21), Color::rgb(0xFF, 0xEB, 0x3B)),
];

/// All presets, in display order.
#[must_use]
pub const fn presets() -> &'static [Preset] {
    PRESETS
}

/// Look up a preset by name (case-insensitive).
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn preset_pair(name: &str) -> Option<ColorPair> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .map(|p| p.pair)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
