//! Palette synthesis with per-slot locks.
//!
//! A [`Palette`] is an immutable, fixed-length run of colors plus the mode it
//! was drawn with, its creation time and its [`LockMask`]. Regeneration never
//! edits a palette in place: [`generate`] takes the previous palette (if any)
//! and a lock mask and returns a new one.
//!
//! ```text
//! previous: Some(p) ──┐
//! lock mask ──────────┼─► generate ─► slot i locked  → p.colors[i]
//! mode + rng ─────────┘               slot i free    → mode.draw(rng)
//! ```
//!
//! With no previous palette there is nothing to preserve, so every slot is
//! drawn fresh and the mask is ignored.

use chrono::{DateTime, Utc};
use log::debug;
use swatch_color::Color;

use crate::error::{EngineError, Result};
use crate::mode::GenerationMode;
use crate::random::RandomSource;

/// Palette length used when the caller has no preference.
pub const DEFAULT_LENGTH: usize = 5;

// ---------------------------------------------------------------------------
// LockMask
// ---------------------------------------------------------------------------

/// Per-slot "keep this color" flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LockMask {
    slots: Vec<bool>,
}

impl LockMask {
    /// A mask of `len` unlocked slots.
    #[must_use]
    pub fn unlocked(len: usize) -> Self {
        Self {
            slots: vec![false; len],
        }
    }

    #[must_use]
    pub fn from_slice(slots: &[bool]) -> Self {
        Self {
            slots: slots.to_vec(),
        }
    }

    /// A copy of this mask with slot `index` flipped.
    ///
    /// # Errors
    ///
    /// [`EngineError::IndexOutOfRange`] if `index` is past the end.
    pub fn toggled(&self, index: usize) -> Result<Self> {
        let mut slots = self.slots.clone();
        let len = slots.len();
        let slot = slots
            .get_mut(index)
            .ok_or(EngineError::IndexOutOfRange { index, len })?;
        *slot = !*slot;
        Ok(Self { slots })
    }

    /// Whether slot `index` is locked. Out-of-range slots are unlocked.
    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        self.slots.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.slots.iter().filter(|&&l| l).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.slots
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// An immutable, ordered set of colors.
///
/// Invariant: `locks.len() == colors.len()`, and neither is empty.
///
/// Monochrome palettes also remember the hue they were drawn around, so
/// regenerating one keeps that exact hue instead of re-deriving it from
/// 8-bit channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
    mode: GenerationMode,
    created_at: DateTime<Utc>,
    locks: LockMask,
    seed_hue: Option<u16>,
}

impl Palette {
    /// Build a palette from existing colors (all slots unlocked).
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptyPalette`] if `colors` is empty.
    pub fn new(
        colors: Vec<Color>,
        mode: GenerationMode,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        if colors.is_empty() {
            return Err(EngineError::EmptyPalette);
        }
        let locks = LockMask::unlocked(colors.len());
        Ok(Self {
            colors,
            mode,
            created_at,
            locks,
            seed_hue: None,
        })
    }

    /// Adopt an external list of hex colors (for example the dominant colors
    /// an image extractor returns) as an ordinary palette.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidFormat`] on the first malformed entry, or
    /// [`EngineError::EmptyPalette`] if the list is empty.
    pub fn from_hex_list<I, S>(hexes: I, mode: GenerationMode) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = hexes
            .into_iter()
            .map(|h| Color::from_hex(h.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Self::new(colors, mode, Utc::now())
    }

    /// The same colors under a different lock mask.
    ///
    /// # Errors
    ///
    /// [`EngineError::LengthMismatch`] if the mask length differs.
    pub fn with_locks(&self, locks: LockMask) -> Result<Self> {
        check_length(self.len(), locks.len())?;
        Ok(Self {
            locks,
            ..self.clone()
        })
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub const fn mode(&self) -> GenerationMode {
        self.mode
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn locks(&self) -> &LockMask {
        &self.locks
    }

    /// The shared hue of a generated monochrome palette, in degrees.
    #[must_use]
    pub fn seed_hue(&self) -> Option<f64> {
        self.seed_hue.map(f64::from)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Canonical hex strings of every slot.
    #[must_use]
    pub fn hex_codes(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

/// Generate a palette of `length` colors, stamped with the current time.
///
/// See [`generate_at`].
///
/// # Errors
///
/// Same as [`generate_at`].
pub fn generate(
    previous: Option<&Palette>,
    locks: &LockMask,
    mode: GenerationMode,
    length: usize,
    rng: &mut impl RandomSource,
) -> Result<Palette> {
    generate_at(previous, locks, mode, length, rng, Utc::now())
}

/// Generate a palette of `length` colors stamped with `created_at`.
///
/// - With `previous`: slot `i` keeps `previous.colors()[i]` when
///   `locks.is_locked(i)`, otherwise it is drawn from `mode`.
/// - Without `previous`: every slot is drawn; the mask is ignored.
///
/// Monochrome palettes share one hue. It is carried over from a previous
/// monochrome palette, else taken from the previous palette's first slot
/// when that slot has a hue, else drawn once at random.
///
/// # Errors
///
/// - [`EngineError::EmptyPalette`] if `length` is zero.
/// - [`EngineError::LengthMismatch`] if `previous` exists and either it or
///   `locks` has a length other than `length`.
pub fn generate_at(
    previous: Option<&Palette>,
    locks: &LockMask,
    mode: GenerationMode,
    length: usize,
    rng: &mut impl RandomSource,
    created_at: DateTime<Utc>,
) -> Result<Palette> {
    if length == 0 {
        return Err(EngineError::EmptyPalette);
    }

    let seed_hue = match mode {
        GenerationMode::Monochrome => Some(monochrome_hue(previous, rng)),
        _ => None,
    };
    let fixed_hue = seed_hue.map(f64::from);

    let (colors, locks) = match previous {
        Some(prev) => {
            check_length(length, prev.len())?;
            check_length(length, locks.len())?;
            let colors = (0..length)
                .map(|i| {
                    if locks.is_locked(i) {
                        prev.colors[i]
                    } else {
                        mode.draw(rng, fixed_hue)
                    }
                })
                .collect();
            (colors, locks.clone())
        }
        None => {
            let colors = (0..length).map(|_| mode.draw(rng, fixed_hue)).collect();
            let locks = if locks.len() == length {
                locks.clone()
            } else {
                LockMask::unlocked(length)
            };
            (colors, locks)
        }
    };

    debug!(
        "generated {mode} palette: {length} slots, {} locked, previous={}",
        if previous.is_some() { locks.locked_count() } else { 0 },
        previous.is_some()
    );

    Ok(Palette {
        colors,
        mode,
        created_at,
        locks,
        seed_hue,
    })
}

/// Hue a monochrome palette is drawn around.
fn monochrome_hue(previous: Option<&Palette>, rng: &mut impl RandomSource) -> u16 {
    if let Some(hue) = previous.and_then(|p| p.seed_hue) {
        return hue;
    }
    previous
        .and_then(|p| p.colors.first())
        .map(|c| c.to_hsl())
        .filter(|hsl| hsl.s > 0.0)
        .map_or_else(
            || rng.range_inclusive(0, 359) as u16,
            |hsl| (hsl.h.round() as u16) % 360,
        )
}

const fn check_length(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(EngineError::LengthMismatch { expected, actual })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
