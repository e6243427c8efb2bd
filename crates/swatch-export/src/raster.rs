//! PNG swatch rasters.
//!
//! One solid block per color, laid out as a horizontal strip or a vertical
//! stack, each labeled with its hex code in a small built-in bitmap font.
//! The label color is whichever of black or white reads better on the block.
//!
//! ```text
//! Horizontal                       Vertical
//! ┌───────┬───────┬───────┐        ┌───────┐
//! │#1F4E79│#FFEB3B│#F5F5F5│        │#1F4E79│
//! └───────┴───────┴───────┘        ├───────┤
//!                                  │#FFEB3B│
//!                                  └───────┘
//! ```

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use log::debug;
use swatch_color::Color;
use swatch_engine::text_color_for;

use crate::error::{ExportError, Result};

// ─── Layout ──────────────────────────────────────────────────────────────────

/// Direction blocks are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Block geometry for [`render_png`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterLayout {
    pub orientation: Orientation,
    pub block_width: u32,
    pub block_height: u32,
}

impl Default for RasterLayout {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            block_width: 200,
            block_height: 200,
        }
    }
}

impl RasterLayout {
    /// Total image size for `blocks` colors, or `None` if it would overflow.
    fn canvas(self, blocks: u32) -> Option<(u32, u32)> {
        match self.orientation {
            Orientation::Horizontal => {
                Some((self.block_width.checked_mul(blocks)?, self.block_height))
            }
            Orientation::Vertical => {
                Some((self.block_width, self.block_height.checked_mul(blocks)?))
            }
        }
    }

    /// Top-left corner of block `i`.
    const fn origin(self, i: u32) -> (u32, u32) {
        match self.orientation {
            Orientation::Horizontal => (i * self.block_width, 0),
            Orientation::Vertical => (0, i * self.block_height),
        }
    }
}

// ─── Rendering ───────────────────────────────────────────────────────────────

/// Render `colors` as a PNG and return the encoded bytes.
///
/// # Errors
///
/// - [`ExportError::EmptyPalette`] if `colors` is empty.
/// - [`ExportError::InvalidLayout`] for a zero block dimension or an image
///   too large to address.
/// - [`ExportError::Encode`] if PNG encoding fails.
pub fn render_png(colors: &[Color], layout: RasterLayout) -> Result<Vec<u8>> {
    if colors.is_empty() {
        return Err(ExportError::EmptyPalette);
    }
    let invalid = || ExportError::InvalidLayout {
        blocks: colors.len(),
        width: layout.block_width,
        height: layout.block_height,
    };
    if layout.block_width == 0 || layout.block_height == 0 {
        return Err(invalid());
    }
    let blocks = u32::try_from(colors.len()).map_err(|_| invalid())?;
    let (width, height) = layout.canvas(blocks).ok_or_else(invalid)?;

    let mut img = RgbImage::new(width, height);
    for (i, &color) in (0..blocks).zip(colors) {
        let (x0, y0) = layout.origin(i);
        fill_block(&mut img, x0, y0, layout, color);
        draw_label(&mut img, x0, y0, layout, color);
    }

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    debug!("rendered {blocks} swatches as {width}x{height} png ({} bytes)", bytes.len());
    Ok(bytes)
}

fn pixel(color: Color) -> Rgb<u8> {
    let rgb = color.to_rgb();
    Rgb([rgb.r, rgb.g, rgb.b])
}

fn fill_block(img: &mut RgbImage, x0: u32, y0: u32, layout: RasterLayout, color: Color) {
    let px = pixel(color);
    for y in y0..y0 + layout.block_height {
        for x in x0..x0 + layout.block_width {
            img.put_pixel(x, y, px);
        }
    }
}

/// Center the block's hex code inside it, scaled to roughly 80% of the
/// block width. Labels that cannot fit even at scale 1 are skipped.
fn draw_label(img: &mut RgbImage, x0: u32, y0: u32, layout: RasterLayout, color: Color) {
    let text = color.to_hex();
    let cols = text_width(&text);
    let scale = (layout.block_width * 4 / 5 / cols).min(layout.block_height / 2 / GLYPH_H);
    if scale == 0 {
        return;
    }
    let ink = pixel(text_color_for(color));
    let left = x0 + (layout.block_width - cols * scale) / 2;
    let top = y0 + (layout.block_height - GLYPH_H * scale) / 2;

    let mut pen = left;
    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            for (gy, bits) in (0..GLYPH_H).zip(rows) {
                for gx in 0..GLYPH_W {
                    if bits & (1 << (GLYPH_W - 1 - gx)) != 0 {
                        fill_cell(img, pen + gx * scale, top + gy * scale, scale, ink);
                    }
                }
            }
        }
        pen += ADVANCE * scale;
    }
}

fn fill_cell(img: &mut RgbImage, x: u32, y: u32, scale: u32, ink: Rgb<u8>) {
    for dy in 0..scale {
        for dx in 0..scale {
            img.put_pixel(x + dx, y + dy, ink);
        }
    }
}

// ─── Bitmap font ─────────────────────────────────────────────────────────────

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;
/// Glyph width plus one column of spacing.
const ADVANCE: u32 = GLYPH_W + 1;

/// Width in font pixels of `text` (no trailing gap).
fn text_width(text: &str) -> u32 {
    let n = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    (n * ADVANCE).saturating_sub(1).max(1)
}

/// 5×7 rows, most significant of the low five bits on the left.
/// Only the characters of a hex code are defined.
const fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch {
        '#' => [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        _ => return None,
    };
    Some(rows)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
