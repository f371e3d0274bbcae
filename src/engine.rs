//! The conversational engine: classification, reply and a per-instance transcript.

use chrono::{DateTime, Local, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::classifier::{identify_emotion, Classification, Emotion};
use crate::clock::{Clock, SystemClock};
use crate::generator::{generate_response, Exercise, VisualState};
use crate::greeting::greeting;
use crate::settings::EngineConfig;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

/// Outcome of one `process` call.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    pub message: String,
    /// Visual state derived from the classification.
    pub emotion: VisualState,
    pub intensity: f32,
    pub suggested_exercise: Option<Exercise>,
    pub original_emotion: Emotion,
    pub urgent: bool,
}

/// One conversation's engine. Create one instance per conversation.
pub struct EmotionalEngine<R = StdRng, C = SystemClock> {
    config: EngineConfig,
    rng: R,
    clock: C,
    current_emotion: VisualState,
    emotion_intensity: f32,
    history: Vec<ConversationTurn>,
}

impl EmotionalEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_parts(config, StdRng::from_entropy(), SystemClock)
    }
}

impl Default for EmotionalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng, C: Clock> EmotionalEngine<R, C> {
    /// Builds an engine with an explicit random source and clock.
    pub fn with_parts(config: EngineConfig, rng: R, clock: C) -> Self {
        Self {
            config,
            rng,
            clock,
            current_emotion: VisualState::Neutral,
            emotion_intensity: 0.0,
            history: Vec::new(),
        }
    }

    /// Classifies `text` without touching the engine state.
    pub fn classify(&self, text: &str) -> Classification {
        identify_emotion(text, &self.config)
    }

    /// Handles one user message and records both sides of the exchange.
    pub fn process(&mut self, user_input: &str) -> ProcessResult {
        self.record(Role::User, user_input.to_string());

        let classification = identify_emotion(user_input, &self.config);
        let hour = self.clock.now().hour();
        let reply = generate_response(&classification, hour, &self.config, &mut self.rng);

        log::debug!(
            "classified turn as {} (intensity {:.1}, score {:?})",
            classification.emotion.as_str(),
            classification.intensity,
            classification.score
        );
        if classification.urgent {
            log::warn!(
                "urgent turn detected ({}), replying with grounding",
                classification.emotion.as_str()
            );
        }

        self.current_emotion = reply.emotion_state;
        self.emotion_intensity = classification.intensity;
        self.record(Role::Assistant, reply.response.clone());

        ProcessResult {
            message: reply.response,
            emotion: reply.emotion_state,
            intensity: classification.intensity,
            suggested_exercise: reply.suggested_exercise,
            original_emotion: classification.emotion,
            urgent: classification.urgent,
        }
    }

    /// Proactive greeting for the current hour.
    pub fn get_greeting(&mut self) -> String {
        let hour = self.clock.now().hour();
        greeting(hour, &mut self.rng).to_string()
    }

    /// Empties the transcript and resets the emotion state.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.current_emotion = VisualState::Neutral;
        self.emotion_intensity = 0.0;
    }

    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    pub fn current_emotion(&self) -> VisualState {
        self.current_emotion
    }

    pub fn emotion_intensity(&self) -> f32 {
        self.emotion_intensity
    }

    fn record(&mut self, role: Role, content: String) {
        self.history.push(ConversationTurn {
            role,
            content,
            timestamp: self.clock.now(),
        });
    }
}
