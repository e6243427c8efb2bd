//! Generation modes: the hue/saturation/lightness envelope each palette
//! slot is drawn from.
//!
//! Every mode is a pure function of a [`RandomSource`]: it draws a hue,
//! saturation and lightness from fixed integer ranges and converts the
//! result to a [`Color`]. Monochrome is the one mode with an extra input, the
//! hue shared by every slot.

use swatch_color::{Color, Hsl};

use crate::random::RandomSource;

/// Inclusive integer range for one HSL component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub min: u32,
    pub max: u32,
}

impl Span {
    const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `v` lies inside the span.
    #[must_use]
    pub fn contains(self, v: f64) -> bool {
        (f64::from(self.min)..=f64::from(self.max)).contains(&v)
    }

    fn draw(self, rng: &mut impl RandomSource) -> f64 {
        f64::from(rng.range_inclusive(self.min, self.max))
    }
}

/// The ranges a mode draws from. `hue` is `None` for monochrome, whose hue
/// is fixed per palette rather than drawn per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope {
    pub hue: Option<Span>,
    pub saturation: Span,
    pub lightness: Span,
}

/// The kind of palette to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenerationMode {
    /// Any hue, saturated, mid lightness.
    #[default]
    Vibrant,
    /// Any hue, soft saturation, high lightness.
    Pastel,
    /// One hue for the whole palette, low saturation, wide lightness.
    Monochrome,
    /// Reds through yellows.
    Autumn,
    /// Cyans through blue-purples.
    Winter,
    /// Yellows through greens, light.
    Spring,
    /// Purples through pinks.
    Summer,
}

impl GenerationMode {
    /// The HSL envelope this mode draws from.
    #[must_use]
    pub const fn envelope(self) -> Envelope {
        let (hue, saturation, lightness) = match self {
            Self::Vibrant => (Some(Span::new(0, 359)), Span::new(70, 100), Span::new(45, 75)),
            Self::Pastel => (Some(Span::new(0, 359)), Span::new(40, 60), Span::new(75, 90)),
            Self::Monochrome => (None, Span::new(15, 35), Span::new(15, 85)),
            Self::Autumn => (Some(Span::new(0, 60)), Span::new(40, 80), Span::new(30, 60)),
            Self::Winter => (Some(Span::new(180, 270)), Span::new(20, 60), Span::new(40, 80)),
            Self::Spring => (Some(Span::new(60, 150)), Span::new(40, 80), Span::new(60, 85)),
            Self::Summer => (Some(Span::new(270, 330)), Span::new(50, 90), Span::new(50, 75)),
        };
        Envelope {
            hue,
            saturation,
            lightness,
        }
    }

    /// Draw one color from this mode.
    ///
    /// `fixed_hue` is only consulted by [`Monochrome`](Self::Monochrome);
    /// when it is `None` a hue is drawn for this color alone.
    pub fn draw(self, rng: &mut impl RandomSource, fixed_hue: Option<f64>) -> Color {
        let env = self.envelope();
        let hue = match (env.hue, fixed_hue) {
            (Some(span), _) => span.draw(rng),
            (None, Some(h)) => h,
            (None, None) => random_hue(rng),
        };
        let saturation = env.saturation.draw(rng);
        let lightness = env.lightness.draw(rng);
        Color::from(Hsl::new(hue, saturation, lightness))
    }

    /// Human-readable name of this mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vibrant => "vibrant",
            Self::Pastel => "pastel",
            Self::Monochrome => "monochrome",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
        }
    }

    /// Parse a mode from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(name.trim()))
            .copied()
    }

    /// All generation modes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Vibrant,
            Self::Pastel,
            Self::Monochrome,
            Self::Autumn,
            Self::Winter,
            Self::Spring,
            Self::Summer,
        ]
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A hue in [0, 360) for palettes that have no seed hue yet.
pub fn random_hue(rng: &mut impl RandomSource) -> f64 {
    f64::from(rng.range_inclusive(0, 359))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
