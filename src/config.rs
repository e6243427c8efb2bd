// SPDX-License-Identifier: MIT
//
// Shell configuration, read from TOML.
//
// Lookup order:
//
//   --config <path>                      explicit, must exist
//   $HOME/.config/swatch/config.toml     if present
//   built-in defaults
//
// Every key is optional. A file containing only
//
//   [palette]
//   mode = "pastel"
//
// keeps every other default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use swatch_engine::GenerationMode;
use swatch_engine::history::DEFAULT_CAPACITY;
use swatch_engine::palette::DEFAULT_LENGTH;
use swatch_export::{Orientation, RasterLayout, Separator};
use thiserror::Error;

const APP_NAME: &str = "swatch";
const CONFIG_FILE_NAME: &str = "config.toml";

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

// ─── Sections ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: PaletteConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// `[palette]`: generation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub length: usize,
    pub mode: String,
    pub history_capacity: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            mode: GenerationMode::default().name().to_string(),
            history_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// `[export]`: PNG block size and clipboard separator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub swatch_width: u32,
    pub swatch_height: u32,
    pub separator: Separator,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let layout = RasterLayout::default();
        Self {
            swatch_width: layout.block_width,
            swatch_height: layout.block_height,
            separator: Separator::default(),
        }
    }
}

/// `[logging]`: default `env_logger` filter, overridden by `RUST_LOG`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ─── Loading ────────────────────────────────────────────────────────────────

/// `$HOME/.config/swatch/config.toml`, if `HOME` is set.
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join(APP_NAME)
            .join(CONFIG_FILE_NAME)
    })
}

impl Config {
    /// Read and validate the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// The per-user file if it exists, otherwise defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Explicit path first, then the per-user file, then defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        explicit.map_or_else(Self::load_default, Self::load)
    }

    /// Parse TOML text; `origin` only labels errors.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));
        if self.palette.length == 0 {
            return invalid("palette.length must be at least 1".into());
        }
        if self.palette.history_capacity == 0 {
            return invalid("palette.history_capacity must be at least 1".into());
        }
        if GenerationMode::from_name(&self.palette.mode).is_none() {
            return invalid(format!("unknown palette.mode {:?}", self.palette.mode));
        }
        if self.export.swatch_width == 0 || self.export.swatch_height == 0 {
            return invalid(format!(
                "export swatch size {}x{} must be non-zero",
                self.export.swatch_width, self.export.swatch_height
            ));
        }
        Ok(())
    }

    /// Configured mode. Unknown names (only possible before `validate`)
    /// fall back to the default mode.
    pub fn mode(&self) -> GenerationMode {
        GenerationMode::from_name(&self.palette.mode).unwrap_or_default()
    }

    pub const fn raster_layout(&self, orientation: Orientation) -> RasterLayout {
        RasterLayout {
            orientation,
            block_width: self.export.swatch_width,
            block_height: self.export.swatch_height,
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Result<Config, ConfigError> {
        Config::parse(text, Path::new("test.toml"))
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.palette.length, 5);
        assert_eq!(config.palette.history_capacity, 10);
        assert_eq!(config.mode(), GenerationMode::Vibrant);
        assert_eq!(config.export.swatch_width, 200);
        assert_eq!(config.export.separator, Separator::Newline);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = parse(
            r#"
            [palette]
            mode = "Pastel"

            [export]
            separator = "comma"
            "#,
        )
        .unwrap();
        assert_eq!(config.mode(), GenerationMode::Pastel);
        assert_eq!(config.palette.length, 5);
        assert_eq!(config.export.separator, Separator::Comma);
        assert_eq!(config.export.swatch_height, 200);
    }

    #[test]
    fn raster_layout_uses_swatch_size() {
        let config = parse("[export]\nswatch_width = 64\nswatch_height = 32\n").unwrap();
        let layout = config.raster_layout(Orientation::Vertical);
        assert_eq!((layout.block_width, layout.block_height), (64, 32));
        assert_eq!(layout.orientation, Orientation::Vertical);
    }

    #[test]
    fn invalid_values_are_rejected() {
        for text in [
            "[palette]\nlength = 0",
            "[palette]\nhistory_capacity = 0",
            "[palette]\nmode = \"neon\"",
            "[export]\nswatch_width = 0",
        ] {
            assert!(matches!(parse(text), Err(ConfigError::Invalid(_))), "{text}");
        }
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        assert!(matches!(parse("[palette"), Err(ConfigError::Parse { .. })));
        assert!(matches!(
            parse("[export]\nseparator = \"tab\""),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_explicit_file_is_a_read_error() {
        let path = Path::new("/nonexistent/swatch/config.toml");
        assert!(matches!(Config::resolve(Some(path)), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[palette]\nlength = 8\n").unwrap();
        assert_eq!(Config::load(&path).unwrap().palette.length, 8);
        assert_eq!(Config::resolve(Some(&path)).unwrap().palette.length, 8);
    }

    #[test]
    fn unreadable_toml_on_disk_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[palette]\nlength = \"many\"\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME), "{err}");
    }
}
