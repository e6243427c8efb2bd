//! Palette name suggestions: `"<Adjective> <Noun> (<mode>)"`.

use crate::mode::GenerationMode;
use crate::random::RandomSource;

const ADJECTIVES: &[&str] = &["Elegant", "Serene", "Bold", "Dreamy", "Vibrant", "Soft", "Dynamic"];

const NOUNS: &[&str] = &["Horizon", "Sunset", "Garden", "Ocean", "Mountain", "Forest", "Breeze"];

/// Suggest a display name for a palette generated under `mode`.
pub fn suggest_name(mode: GenerationMode, rng: &mut impl RandomSource) -> String {
    let adjective = rng.pick(ADJECTIVES);
    let noun = rng.pick(NOUNS);
    format!("{adjective} {noun} ({mode})")
}
