//! Negation and contrast handling.
//!
//! Marker phrases are stored in their written form and compared after
//! normalization, the same way lexicon keywords are.

use once_cell::sync::Lazy;

use crate::normalize::normalize;

/// Direct negators. These are the only markers `is_negated` consults.
pub const DIRECT_NEGATORS: &[&str] = &[
    "não", "nem", "nunca", "jamais", "nada", "nenhum", "nenhuma", "de jeito nenhum",
];

/// Contrast conjunctions: only the clause after the last one is scored.
pub const INVERTERS: &[&str] = &[
    "mas", "porém", "entretanto", "contudo", "só que", "no entanto", "todavia",
];

/// Partial negators. Declared for completeness; the detector does not read them.
pub const PARTIAL_NEGATORS: &[&str] = &["quase não", "mal", "dificilmente", "raramente"];

/// How many tokens before a keyword are searched for a negator.
const NEGATION_WINDOW: usize = 3;

static NORMALIZED_NEGATORS: Lazy<Vec<String>> =
    Lazy::new(|| DIRECT_NEGATORS.iter().map(|n| normalize(n)).collect());

static NORMALIZED_INVERTERS: Lazy<Vec<String>> =
    Lazy::new(|| INVERTERS.iter().map(|i| normalize(i)).collect());

/// Checks whether the first mention of `keyword` is preceded by a direct negator.
///
/// Both arguments must already be normalized. Only the first token containing
/// the keyword is inspected, so a multi-word keyword is never reported as
/// negated.
pub fn is_negated(normalized_text: &str, keyword: &str) -> bool {
    let tokens: Vec<&str> = normalized_text.split_whitespace().collect();
    let Some(position) = tokens.iter().position(|t| t.contains(keyword)) else {
        return false;
    };

    let start = position.saturating_sub(NEGATION_WINDOW);
    tokens[start..position].iter().any(|token| {
        NORMALIZED_NEGATORS
            .iter()
            .any(|negator| token.contains(negator.as_str()))
    })
}

/// Keeps only the clause after the last contrast conjunction.
///
/// The result is normalized. Text without any inverter comes back whole.
pub fn apply_inversion(text: &str) -> String {
    let normalized = normalize(text);

    let cut = NORMALIZED_INVERTERS
        .iter()
        .filter_map(|inverter| {
            normalized
                .rfind(inverter.as_str())
                .map(|start| (start, start + inverter.len()))
        })
        .max();

    match cut {
        Some((_, end)) => normalized[end..].trim().to_string(),
        None => normalized,
    }
}
