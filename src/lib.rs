//! Rule-based emotional response engine.
//!
//! Free text goes through normalization, lexicon scoring and intent
//! patterns, is resolved to one emotion with an intensity and an urgency
//! flag, and comes back as a templated empathetic reply with a suggested
//! exercise.

pub mod classifier;
pub mod clock;
pub mod engine;
pub mod generator;
pub mod greeting;
pub mod intensity;
pub mod lexicon;
pub mod negation;
pub mod normalize;
pub mod patterns;
pub mod responses;
pub mod scorer;
pub mod server;
pub mod session;
pub mod settings;

pub use classifier::{identify_emotion, Classification, Emotion};
pub use engine::{ConversationTurn, EmotionalEngine, ProcessResult, Role};
pub use generator::{generate_response, Exercise, Response, VisualState};
pub use lexicon::Category;
pub use normalize::normalize;
pub use session::SessionStore;
pub use settings::{EngineConfig, Settings};
