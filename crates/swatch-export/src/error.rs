//! Export error type.

use swatch_color::ColorError;
use swatch_engine::EngineError;
use thiserror::Error;

/// Errors produced while building an export payload.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Malformed color text in an imported record or hex list.
    #[error(transparent)]
    InvalidFormat(#[from] ColorError),

    /// Nothing to export.
    #[error("cannot export an empty palette")]
    EmptyPalette,

    /// A block size of zero, or an image too large to address.
    #[error("invalid raster layout: {blocks} blocks of {width}x{height} px")]
    InvalidLayout { blocks: usize, width: u32, height: u32 },

    /// Record (de)serialization failed.
    #[error("palette record: {0}")]
    Json(#[from] serde_json::Error),

    /// PNG encoding failed.
    #[error("png encoding: {0}")]
    Encode(#[from] image::ImageError),

    /// The engine rejected a rebuilt palette.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
