//! Plain-text payloads: hex codes joined for the clipboard.

use serde::Deserialize;
use swatch_color::Color;

/// How multiple hex codes are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// One code per line.
    #[default]
    Newline,
    /// `#AAAAAA, #BBBBBB`.
    Comma,
}

impl Separator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newline => "\n",
            Self::Comma => ", ",
        }
    }
}

/// Canonical hex codes of `colors`, joined by `sep`. No trailing separator.
#[must_use]
pub fn join_hex(colors: &[Color], sep: Separator) -> String {
    colors
        .iter()
        .map(|c| c.to_hex())
        .collect::<Vec<_>>()
        .join(sep.as_str())
}
