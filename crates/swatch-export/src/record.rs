//! Persisted palette records.
//!
//! The on-disk shape is a small JSON object:
//!
//! ```json
//! {
//!   "name": "Bold Ocean (winter)",
//!   "colors": ["#1F4E79", "..."],
//!   "createdAt": "2024-05-01T12:00:00Z"
//! }
//! ```
//!
//! Colors travel as canonical hex strings; the timestamp is RFC 3339.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use swatch_color::Color;
use swatch_engine::{GenerationMode, Palette};

use crate::error::{ExportError, Result};

/// A saved palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteRecord {
    pub name: String,
    pub colors: Vec<Color>,
    pub created_at: DateTime<Utc>,
}

impl PaletteRecord {
    /// Snapshot a palette under `name`.
    #[must_use]
    pub fn from_palette(name: impl Into<String>, palette: &Palette) -> Self {
        Self {
            name: name.into(),
            colors: palette.colors().to_vec(),
            created_at: palette.created_at(),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`ExportError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a record. Every color must be valid hex.
    ///
    /// # Errors
    ///
    /// [`ExportError::Json`] on malformed JSON, a missing field, or a bad
    /// color string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rebuild an engine palette (all slots unlocked) from this record.
    ///
    /// # Errors
    ///
    /// [`ExportError::EmptyPalette`] if the record holds no colors.
    pub fn into_palette(self, mode: GenerationMode) -> Result<Palette> {
        if self.colors.is_empty() {
            return Err(ExportError::EmptyPalette);
        }
        Ok(Palette::new(self.colors, mode, self.created_at)?)
    }
}

/// Coarse age label for a saved palette: `"3d ago"`, `"5h ago"`, `"12m ago"`.
///
/// Anything under two minutes old, including timestamps in the future,
/// reads `"1m ago"`.
#[must_use]
pub fn time_ago(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(created);
    let days = age.num_days();
    if days > 0 {
        return format!("{days}d ago");
    }
    let hours = age.num_hours();
    if hours > 0 {
        return format!("{hours}h ago");
    }
    format!("{}m ago", age.num_minutes().max(1))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
