//! # swatch-export: Palette export payloads
//!
//! Turns engine palettes into the bytes a front end hands to the clipboard
//! or writes to disk. Nothing here performs I/O; every function returns the
//! payload and the caller decides where it goes.
//!
//! - [`join_hex`]: hex codes joined by newline or comma.
//! - [`PaletteRecord`]: the saved-palette JSON shape, plus [`time_ago`] labels.
//! - [`render_png`]: a labeled swatch strip encoded as PNG.

pub mod error;
pub mod raster;
pub mod record;
pub mod text;

pub use error::{ExportError, Result};
pub use raster::{Orientation, RasterLayout, render_png};
pub use record::{PaletteRecord, time_ago};
pub use text::{Separator, join_hex};
