//! Turns a classification into a reply, an exercise and a visual state.

use rand::Rng;
use serde::Serialize;

use crate::classifier::{Classification, Emotion};
use crate::greeting::{greeting_reply, pick};
use crate::lexicon::Category;
use crate::patterns::PatternRule;
use crate::responses::{self, Slot};
use crate::settings::EngineConfig;

/// Theme the UI should switch to.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VisualState {
    #[default]
    Neutral,
    Anxious,
    Sad,
    Sleep,
    Calm,
    Happy,
}

impl VisualState {
    pub fn as_str(self) -> &'static str {
        match self {
            VisualState::Neutral => "neutral",
            VisualState::Anxious => "anxious",
            VisualState::Sad => "sad",
            VisualState::Sleep => "sleep",
            VisualState::Calm => "calm",
            VisualState::Happy => "happy",
        }
    }
}

/// Identifier of a guided exercise script owned by the caller.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Exercise {
    #[serde(rename = "breathing-478")]
    Breathing478,
    BreathingBox,
    Meditation,
    Grounding,
    Journal,
    DeepSleep,
}

impl Exercise {
    pub fn as_str(self) -> &'static str {
        match self {
            Exercise::Breathing478 => "breathing-478",
            Exercise::BreathingBox => "breathing-box",
            Exercise::Meditation => "meditation",
            Exercise::Grounding => "grounding",
            Exercise::Journal => "journal",
            Exercise::DeepSleep => "deep-sleep",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub response: String,
    pub suggested_exercise: Option<Exercise>,
    pub emotion_state: VisualState,
}

impl Category {
    pub fn visual_state(self) -> VisualState {
        match self {
            Category::Anxiety | Category::Fear | Category::Stress | Category::Anger => {
                VisualState::Anxious
            }
            Category::Sadness | Category::Guilt => VisualState::Sad,
            Category::Sleep => VisualState::Sleep,
            Category::Calm => VisualState::Calm,
            Category::Joy => VisualState::Happy,
            Category::Confusion => VisualState::Neutral,
        }
    }

    pub fn exercise(self, high_intensity: bool) -> Option<Exercise> {
        match self {
            Category::Anxiety if high_intensity => Some(Exercise::Breathing478),
            Category::Anxiety => Some(Exercise::Meditation),
            Category::Fear => Some(Exercise::Grounding),
            Category::Stress => Some(Exercise::BreathingBox),
            Category::Sadness | Category::Guilt | Category::Confusion => Some(Exercise::Journal),
            Category::Anger => Some(Exercise::Breathing478),
            Category::Sleep => Some(Exercise::DeepSleep),
            Category::Calm => Some(Exercise::Meditation),
            Category::Joy => None,
        }
    }

    /// Slots concatenated into this category's reply.
    pub fn recipe(self, high_intensity: bool) -> &'static [Slot] {
        use Slot::*;
        match self {
            Category::Anxiety if high_intensity => &[Validation, UrgentAction],
            Category::Anxiety
            | Category::Sadness
            | Category::Anger
            | Category::Sleep
            | Category::Stress => &[Validation, Comfort, LightAction],
            Category::Fear => &[Validation, Safety, LightAction],
            Category::Calm | Category::Joy => &[Validation, Encouragement],
            Category::Confusion => &[Validation, Comfort, Exploration],
            Category::Guilt => &[Validation, Comfort],
        }
    }
}

fn compose<R: Rng + ?Sized>(banks: &[&[&'static str]], rng: &mut R) -> String {
    banks
        .iter()
        .map(|bank| pick(bank, rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the reply for one classification.
///
/// `hour` selects the greeting bank; `rng` picks one template per slot.
pub fn generate_response<R: Rng + ?Sized>(
    classification: &Classification,
    hour: u32,
    config: &EngineConfig,
    rng: &mut R,
) -> Response {
    if classification.emotion == Emotion::Crisis || classification.urgent {
        let closing = if classification.patterns.get(PatternRule::CrisisSevere) {
            responses::CRISIS_RESOURCES
        } else {
            responses::CRISIS_ACTION
        };
        return Response {
            response: compose(&[responses::CRISIS_COMFORT, responses::CRISIS_SAFETY, closing], rng),
            suggested_exercise: Some(Exercise::Grounding),
            emotion_state: VisualState::Anxious,
        };
    }

    let (response, suggested_exercise, emotion_state) = match classification.emotion {
        Emotion::Category(category) => {
            let high = classification.intensity > config.high_intensity_threshold;
            let banks: Vec<_> = category
                .recipe(high)
                .iter()
                .map(|slot| responses::category_bank(category, *slot))
                .collect();
            (compose(&banks, rng), category.exercise(high), category.visual_state())
        }
        Emotion::Greeting => (greeting_reply(hour, rng).to_string(), None, VisualState::Neutral),
        Emotion::Farewell => (pick(responses::FAREWELL, rng).to_string(), None, VisualState::Neutral),
        Emotion::Gratitude => (pick(responses::GRATITUDE, rng).to_string(), None, VisualState::Neutral),
        Emotion::AboutAssistant => (
            pick(responses::ABOUT_ASSISTANT, rng).to_string(),
            None,
            VisualState::Neutral,
        ),
        Emotion::Conversational => (responses::CONVERSATIONAL.to_string(), None, VisualState::Neutral),
        Emotion::Crisis | Emotion::Undetermined => (
            pick(responses::NOT_UNDERSTOOD, rng).to_string(),
            None,
            VisualState::Neutral,
        ),
    };

    Response {
        response,
        suggested_exercise,
        emotion_state,
    }
}
