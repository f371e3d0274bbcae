//! Lexicon scoring.
//!
//! Matching is plain substring containment on normalized text, so short
//! keywords also hit inside longer words ("mal" in "normal").

use once_cell::sync::Lazy;

use crate::lexicon::Category;
use crate::negation::is_negated;
use crate::normalize::normalize;

/// Normalized keywords with their weights, indexed like `Category::ALL`.
static NORMALIZED_LEXICON: Lazy<Vec<Vec<(f32, String)>>> = Lazy::new(|| {
    Category::ALL
        .iter()
        .map(|category| {
            category
                .keywords()
                .iter()
                .flat_map(|(sub, words)| {
                    let weight = f32::from(sub.weight());
                    words.iter().map(move |w| (weight, normalize(w)))
                })
                .collect()
        })
        .collect()
});

/// Signed score of `text` for one category.
///
/// Every contained keyword adds its subcategory weight, or subtracts half of
/// it when the keyword is negated.
pub fn score_category(text: &str, category: Category) -> f32 {
    let normalized = normalize(text);
    score_normalized(&normalized, category)
}

fn score_normalized(normalized: &str, category: Category) -> f32 {
    NORMALIZED_LEXICON[category as usize]
        .iter()
        .filter(|(_, keyword)| normalized.contains(keyword.as_str()))
        .map(|(weight, keyword)| {
            if is_negated(normalized, keyword) {
                -weight * 0.5
            } else {
                *weight
            }
        })
        .sum()
}

/// Scores every category, in `Category::ALL` order.
pub fn score_all(text: &str) -> Vec<(Category, f32)> {
    let normalized = normalize(text);
    Category::ALL
        .iter()
        .map(|category| (*category, score_normalized(&normalized, *category)))
        .collect()
}

/// Highest-scoring category. Ties keep the earlier one; nothing above zero
/// yields `None`.
pub fn dominant(scores: &[(Category, f32)]) -> (Option<Category>, f32) {
    let mut best = None;
    let mut max_score = 0.0;
    for (category, score) in scores {
        if *score > max_score {
            max_score = *score;
            best = Some(*category);
        }
    }
    (best, max_score)
}
