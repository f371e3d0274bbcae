//! Emotion resolution: patterns first, then lexicon scores.

use serde::{Serialize, Serializer};

use crate::lexicon::Category;
use crate::negation::apply_inversion;
use crate::patterns::{match_patterns, PatternMatches, PatternRule};
use crate::scorer::{dominant, score_all};
use crate::settings::EngineConfig;

/// What the resolver decided the user is expressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Crisis,
    Greeting,
    Farewell,
    Gratitude,
    AboutAssistant,
    Conversational,
    Undetermined,
    Category(Category),
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Crisis => "crisis",
            Emotion::Greeting => "greeting",
            Emotion::Farewell => "farewell",
            Emotion::Gratitude => "gratitude",
            Emotion::AboutAssistant => "about-assistant",
            Emotion::Conversational => "conversational",
            Emotion::Undetermined => "undetermined",
            Emotion::Category(category) => category.id(),
        }
    }
}

impl Serialize for Emotion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub emotion: Emotion,
    pub intensity: f32,
    pub urgent: bool,
    /// Winning lexicon score; only set when a category was selected by score.
    pub score: Option<f32>,
    pub patterns: PatternMatches,
}

impl Classification {
    fn fixed(emotion: Emotion, intensity: f32, urgent: bool, patterns: PatternMatches) -> Self {
        Self {
            emotion,
            intensity,
            urgent,
            score: None,
            patterns,
        }
    }
}

/// Classifies one raw input.
///
/// Pattern overrides are checked in priority order before any scoring:
/// crisis, greeting, farewell, gratitude, questions about the assistant.
/// Otherwise the clause after the last contrast conjunction is scored against
/// every category, and weak results fall back to the conversational,
/// reflective or undetermined intents.
pub fn identify_emotion(raw_text: &str, config: &EngineConfig) -> Classification {
    let patterns = match_patterns(raw_text);

    let overrides = [
        (PatternRule::CrisisSevere, Emotion::Crisis, 1.0, true),
        (PatternRule::Greeting, Emotion::Greeting, 0.5, false),
        (PatternRule::Farewell, Emotion::Farewell, 0.5, false),
        (PatternRule::Gratitude, Emotion::Gratitude, 0.7, false),
        (PatternRule::AboutAssistant, Emotion::AboutAssistant, 0.5, false),
    ];
    for (rule, emotion, intensity, urgent) in overrides {
        if patterns.get(rule) {
            return Classification::fixed(emotion, intensity, urgent, patterns);
        }
    }

    let processed = apply_inversion(raw_text);
    let scores = score_all(&processed);
    let (best, max_score) = dominant(&scores);
    log::debug!("category scores: {:?}", scores);

    let urgent = patterns.get(PatternRule::HelpSeeking)
        || patterns.get(PatternRule::CrisisSevere)
        || max_score >= config.urgent_score_threshold;
    let intensity = crate::intensity::intensity(raw_text);

    let category = match best {
        Some(category) if max_score >= config.weak_signal_threshold => category,
        _ => {
            let fallback = if patterns.get(PatternRule::WantsToTalk) {
                Classification::fixed(Emotion::Conversational, 0.6, false, patterns)
            } else if patterns.get(PatternRule::Reflective) {
                Classification::fixed(Emotion::Category(Category::Confusion), 0.5, false, patterns)
            } else {
                Classification::fixed(Emotion::Undetermined, 0.5, false, patterns)
            };
            return fallback;
        }
    };

    Classification {
        emotion: Emotion::Category(category),
        intensity,
        urgent,
        score: Some(max_score),
        patterns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Classification {
        identify_emotion(text, &EngineConfig::default())
    }

    #[test]
    fn crisis_overrides_everything() {
        let result = classify("estou muito feliz e grato, mas quero morrer");
        assert_eq!(result.emotion, Emotion::Crisis);
        assert_eq!(result.intensity, 1.0);
        assert!(result.urgent);
        assert_eq!(result.score, None);
    }

    #[test]
    fn greeting_beats_farewell() {
        let result = classify("boa noite");
        assert_eq!(result.emotion, Emotion::Greeting);
        assert_eq!(result.intensity, 0.5);
        assert!(!result.urgent);
    }

    #[test]
    fn farewell_and_gratitude() {
        assert_eq!(classify("até logo, vou dormir").emotion, Emotion::Farewell);
        let thanks = classify("valeu pela conversa");
        assert_eq!(thanks.emotion, Emotion::Gratitude);
        assert_eq!(thanks.intensity, 0.7);
    }

    #[test]
    fn questions_about_the_assistant() {
        assert_eq!(classify("você é humano?").emotion, Emotion::AboutAssistant);
    }

    #[test]
    fn inversion_scores_the_trailing_clause() {
        let result = classify("estava tranquilo e em paz, mas agora estou ansioso");
        assert_eq!(result.emotion, Emotion::Category(Category::Anxiety));
        assert_eq!(result.score, Some(3.0));
    }

    #[test]
    fn help_seeking_marks_scored_turn_urgent() {
        let result = classify("estou nervoso, me ajuda");
        assert_eq!(result.emotion, Emotion::Category(Category::Anxiety));
        assert!(result.urgent);
    }

    #[test]
    fn high_score_marks_turn_urgent() {
        // primary 3 + somatic 4 + crisis 5
        let result = classify("ansioso, com taquicardia, em pânico");
        assert_eq!(result.emotion, Emotion::Category(Category::Anxiety));
        assert_eq!(result.score, Some(12.0));
        assert!(result.urgent);
    }

    #[test]
    fn intensity_comes_from_raw_text() {
        let result = classify("estou extremamente triste");
        assert_eq!(result.emotion, Emotion::Category(Category::Sadness));
        assert_eq!(result.intensity, 1.0);
        assert!(!result.urgent);
    }

    #[test]
    fn weak_signal_fallbacks() {
        assert_eq!(classify("preciso desabafar").emotion, Emotion::Conversational);
        assert_eq!(classify("preciso desabafar").intensity, 0.6);

        let unknown = classify("vou ao mercado comprar pão");
        assert_eq!(unknown.emotion, Emotion::Undetermined);
        assert_eq!(unknown.intensity, 0.5);
        assert!(!unknown.urgent);
    }

    #[test]
    fn reflective_phrasing() {
        // "nao sei" is itself a confusion keyword, so the lexicon usually wins
        let scored = classify("não sei o que sinto");
        assert_eq!(scored.emotion, Emotion::Category(Category::Confusion));
        assert_eq!(scored.score, Some(3.0));

        let strict = EngineConfig {
            weak_signal_threshold: 5.0,
            ..EngineConfig::default()
        };
        let reflective = identify_emotion("não sei o que sinto", &strict);
        assert_eq!(reflective.emotion, Emotion::Category(Category::Confusion));
        assert_eq!(reflective.intensity, 0.5);
        assert_eq!(reflective.score, None);
    }

    #[test]
    fn empty_input_is_undetermined() {
        let result = classify("");
        assert_eq!(result.emotion, Emotion::Undetermined);
        assert!(!result.urgent);
    }

    #[test]
    fn thresholds_come_from_config() {
        let strict = EngineConfig {
            weak_signal_threshold: 5.0,
            ..EngineConfig::default()
        };
        assert_eq!(
            identify_emotion("estou ansioso", &strict).emotion,
            Emotion::Undetermined
        );

        let eager = EngineConfig {
            urgent_score_threshold: 3.0,
            ..EngineConfig::default()
        };
        assert!(identify_emotion("estou ansioso", &eager).urgent);
    }

    #[test]
    fn labels() {
        assert_eq!(Emotion::AboutAssistant.as_str(), "about-assistant");
        assert_eq!(Emotion::Category(Category::Anxiety).as_str(), "ansiedade");
    }
}
