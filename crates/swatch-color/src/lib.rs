// SPDX-License-Identifier: MIT
//
// swatch-color: the color codec underneath the swatch engine.
//
// A `Color` has three interchangeable spellings: `#RRGGBB` hex text, an
// 8-bit RGB triple, and an HSL triple (hue in degrees, saturation and
// lightness in percent). The hex string is canonical: every other form
// re-encodes to it within one unit per channel.
//
// Conversion pipeline:
//
//   "#abc" / "#AABBCC" ─┐
//                       ├─► Rgb ◄──► Hsl ◄── "hsl(H, S%, L%)"
//   (r, g, b) clamped ──┘
//
// Everything here is pure. Parsing text can fail with
// `ColorError::InvalidFormat`; numeric input is clamped instead.

// Single-char variable names (r, g, b, h, s, l) are standard in color math.
#![allow(clippy::many_single_char_names)]
// Channel math rounds f64 results into u8 after clamping.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod color;
pub mod error;
pub mod hex;
pub mod hsl;

pub use color::{Color, Rgb, parse_color};
pub use error::{ColorError, Result};
pub use hex::{hex_to_rgb, rgb_to_hex};
pub use hsl::{Hsl, hsl_to_rgb, parse_hsl, rgb_to_hsl};
