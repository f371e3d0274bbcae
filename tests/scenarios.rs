use calm_mind::clock::FixedClock;
use calm_mind::greeting::DayPeriod;
use calm_mind::patterns::PatternRule;
use calm_mind::scorer::score_category;
use calm_mind::{
    identify_emotion, normalize, Category, EmotionalEngine, EngineConfig, Emotion, Exercise,
    VisualState,
};
use chrono::{Local, TimeZone};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn at_hour(hour: u32) -> FixedClock {
    FixedClock(
        Local
            .with_ymd_and_hms(2024, 6, 1, hour, 30, 0)
            .earliest()
            .unwrap(),
    )
}

fn engine(hour: u32) -> EmotionalEngine<StdRng, FixedClock> {
    EmotionalEngine::with_parts(
        EngineConfig::default(),
        StdRng::seed_from_u64(42),
        at_hour(hour),
    )
}

#[test]
fn normalization_is_idempotent_and_accent_blind() {
    assert_eq!(normalize("ANSIOSO"), normalize("ansioso"));
    assert_eq!(normalize("ansióso"), normalize("ansioso"));
    for s in ["Não consigo respirar!!", "  já   é  tarde ", "…", "Ação & reação"] {
        assert_eq!(normalize(&normalize(s)), normalize(s));
    }
}

#[test]
fn crisis_language_always_wins() {
    let config = EngineConfig::default();
    for text in [
        "quero morrer",
        "estou feliz, obrigado, mas quero morrer",
        "oi, quero morrer",
        "tchau, vou me matar",
    ] {
        let result = identify_emotion(text, &config);
        assert_eq!(result.emotion, Emotion::Crisis, "{text}");
        assert!(result.urgent, "{text}");
    }
}

#[test]
fn negation_dampens_score() {
    let plain = score_category("estou ansioso", Category::Anxiety);
    let negated = score_category("não estou ansioso", Category::Anxiety);
    assert!(negated < plain);
}

#[test]
fn inversion_selects_trailing_clause() {
    let result = identify_emotion(
        "estava calmo mas agora estou muito ansioso",
        &EngineConfig::default(),
    );
    assert_eq!(result.emotion, Emotion::Category(Category::Anxiety));
    assert_eq!(result.intensity, 0.8);
}

#[test]
fn weak_signal_resolves_undetermined() {
    let result = identify_emotion("vou ao mercado comprar pão", &EngineConfig::default());
    assert_eq!(result.emotion, Emotion::Undetermined);
    assert!(!result.urgent);
}

#[test]
fn inverter_inside_a_word_discards_the_sentence() {
    let result = identify_emotion(
        "estou muito triste com meus problemas",
        &EngineConfig::default(),
    );
    assert_eq!(result.emotion, Emotion::Undetermined);
    assert_eq!(result.score, None);
}

#[test]
fn classification_structure_is_deterministic() {
    let config = EngineConfig::default();
    let text = "estou exausto, com pesadelos e insônia";
    let first = identify_emotion(text, &config);
    for _ in 0..10 {
        let again = identify_emotion(text, &config);
        assert_eq!(again.emotion, first.emotion);
        assert_eq!(again.urgent, first.urgent);
        assert_eq!(again.score, first.score);
    }
    assert_eq!(first.emotion, Emotion::Category(Category::Sleep));
}

#[test]
fn greeting_bucketing() {
    for _ in 0..20 {
        assert!(DayPeriod::Morning.openers().contains(&engine(9).get_greeting().as_str()));
        assert!(DayPeriod::LateNight.openers().contains(&engine(23).get_greeting().as_str()));
        assert!(DayPeriod::LateNight.openers().contains(&engine(2).get_greeting().as_str()));
    }
}

#[test]
fn racing_heart_and_help_is_urgent_anxiety() {
    let text = "estou com o coração disparado e não consigo respirar, socorro";
    let classification = identify_emotion(text, &EngineConfig::default());
    assert!(classification.patterns.get(PatternRule::HelpSeeking));
    assert!(!classification.patterns.get(PatternRule::CrisisSevere));
    assert_eq!(classification.emotion, Emotion::Category(Category::Anxiety));
    assert!(classification.urgent);

    let result = engine(14).process(text);
    assert_eq!(result.original_emotion, Emotion::Category(Category::Anxiety));
    assert!(result.urgent);
    assert_eq!(result.suggested_exercise, Some(Exercise::Grounding));
    assert_eq!(result.emotion, VisualState::Anxious);
}

#[test]
fn greeting_reply_matches_hour() {
    let mut morning = engine(8);
    let result = morning.process("oi, bom dia");
    assert_eq!(result.original_emotion, Emotion::Greeting);
    assert!(DayPeriod::Morning.replies().contains(&result.message.as_str()));

    let mut evening = engine(20);
    let result = evening.process("oi, bom dia");
    assert!(DayPeriod::Evening.replies().contains(&result.message.as_str()));
}

#[test]
fn empty_input_never_fails() {
    let mut engine = EmotionalEngine::with_parts(
        EngineConfig::default(),
        StepRng::new(0, 0),
        at_hour(12),
    );
    for text in ["", "   ", "?!?!", "🙂🙂🙂", "\u{0301}\u{0301}", "12345"] {
        let result = engine.process(text);
        assert_eq!(result.original_emotion, Emotion::Undetermined, "{text:?}");
        assert!(!result.urgent);
        assert!(!result.message.is_empty());
    }
    assert_eq!(calm_mind::intensity::intensity(""), 0.6);
}
