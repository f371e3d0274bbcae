use once_cell::sync::Lazy;

use crate::normalize::normalize;

/// Intensity when no intensifier is present.
pub const DEFAULT_INTENSITY: f32 = 0.6;

/// Intensifier tiers, strongest first, with their fixed values.
pub const TIERS: &[(f32, &[&str])] = &[
    (
        1.0,
        &[
            "extremamente", "absurdamente", "completamente", "totalmente", "demais",
            "pra caralho", "pra caramba", "muito muito", "super", "mega", "ultra",
            "insuportável", "insuportavelmente", "terrivelmente",
        ],
    ),
    (
        0.8,
        &[
            "muito", "bastante", "bem", "realmente", "verdadeiramente", "profundamente",
            "intensamente", "fortemente", "seriamente",
        ],
    ),
    (0.5, &["um tanto", "meio", "mais ou menos", "relativamente", "razoavelmente"]),
    (
        0.3,
        &[
            "um pouco", "levemente", "ligeiramente", "suavemente", "de leve",
            "pouquinho", "só um pouco",
        ],
    ),
];

static NORMALIZED_TIERS: Lazy<Vec<(f32, Vec<String>)>> = Lazy::new(|| {
    TIERS
        .iter()
        .map(|(value, phrases)| (*value, phrases.iter().map(|p| normalize(p)).collect()))
        .collect()
});

/// Estimates how strongly an emotion is expressed, in `0.0..=1.0`.
///
/// Tiers are tested strongest first and the first hit wins.
pub fn intensity(text: &str) -> f32 {
    let normalized = normalize(text);
    NORMALIZED_TIERS
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|p| normalized.contains(p.as_str())))
        .map_or(DEFAULT_INTENSITY, |(value, _)| *value)
}
