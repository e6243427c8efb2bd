//! # swatch-engine: Color science engine
//!
//! Pure, synchronous color math for the palette tools: contrast checks,
//! palette generation with locked slots, and a bounded palette history.
//!
//! # Architecture
//!
//! ```text
//! swatch-color: Color ⇄ hex / RGB / HSL
//!     │
//!     ├──► contrast.rs: luminance, ratio, AA/AAA classification, "fix contrast"
//!     │
//!     └──► mode.rs:     HSL envelope per generation mode (vibrant, pastel, …)
//!              │
//!              ▼
//!          palette.rs:  generate(previous, locks, mode, length, rng) -> Palette
//!              │
//!              ▼
//!          history.rs:  most-recent-first, capped, restore by index
//! ```
//!
//! # State
//!
//! The engine owns no mutable state. Palettes, lock masks and histories are
//! values owned by the caller and threaded through each call, and every
//! source of randomness is injected through [`RandomSource`]. Two calls with
//! distinct arguments never interact.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Integer draws and ratios move between u32/usize/f64 on small values.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

pub mod contrast;
pub mod error;
pub mod history;
pub mod mode;
pub mod naming;
pub mod palette;
pub mod presets;
pub mod random;

pub use contrast::{
    ColorPair, Compliance, ContrastResult, classify, complement, contrast_ratio,
    relative_luminance, suggest_improvement, text_color_for,
};
pub use error::{EngineError, Result};
pub use history::PaletteHistory;
pub use mode::GenerationMode;
pub use naming::suggest_name;
pub use palette::{LockMask, Palette, generate, generate_at};
pub use presets::{Preset, preset_pair, presets};
pub use random::{EntropySource, RandomSource, Xorshift32};
