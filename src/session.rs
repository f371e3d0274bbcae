//! One engine per conversation, keyed by session id.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Local};
use parking_lot::Mutex;
use uuid::Uuid;

use crate::engine::{ConversationTurn, EmotionalEngine, ProcessResult};
use crate::settings::EngineConfig;

/// Idle time after which a conversation is dropped.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

struct Session {
    engine: EmotionalEngine,
    last_active: DateTime<Local>,
}

impl Session {
    fn touch(&mut self) -> &mut EmotionalEngine {
        self.last_active = Local::now();
        &mut self.engine
    }
}

pub struct SessionStore {
    config: EngineConfig,
    ttl: Duration,
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_ttl(config, DEFAULT_SESSION_TTL)
    }

    pub fn with_ttl(config: EngineConfig, ttl: Duration) -> Self {
        Self {
            config,
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Starts a conversation and returns its id with the opening greeting.
    ///
    /// Idle sessions are swept first.
    pub fn open(&self) -> (Uuid, String) {
        self.evict_idle(Local::now());

        let id = Uuid::new_v4();
        let mut engine = EmotionalEngine::with_config(self.config.clone());
        let greeting = engine.get_greeting();
        let mut sessions = self.sessions.lock();
        sessions.insert(
            id,
            Session {
                engine,
                last_active: Local::now(),
            },
        );
        log::info!("Opened session {} ({} active)", id, sessions.len());
        (id, greeting)
    }

    pub fn process(&self, id: Uuid, user_input: &str) -> Option<ProcessResult> {
        let mut sessions = self.sessions.lock();
        sessions
            .get_mut(&id)
            .map(|session| session.touch().process(user_input))
    }

    pub fn history(&self, id: Uuid) -> Option<Vec<ConversationTurn>> {
        let mut sessions = self.sessions.lock();
        sessions
            .get_mut(&id)
            .map(|session| session.touch().history().to_vec())
    }

    /// Clears one conversation's transcript. Returns `false` for unknown ids.
    pub fn reset(&self, id: Uuid) -> bool {
        let mut sessions = self.sessions.lock();
        match sessions.get_mut(&id) {
            Some(session) => {
                session.touch().clear_history();
                true
            }
            None => false,
        }
    }

    pub fn close(&self, id: Uuid) -> bool {
        let removed = self.sessions.lock().remove(&id).is_some();
        if removed {
            log::info!("Closed session {}", id);
        }
        removed
    }

    /// Drops every session idle for longer than the TTL as of `now`.
    /// Returns how many were dropped.
    pub fn evict_idle(&self, now: DateTime<Local>) -> usize {
        let ttl = self.ttl;
        let mut sessions = self.sessions.lock();
        let before = sessions.len();
        sessions.retain(|_, session| {
            now.signed_duration_since(session.last_active)
                .to_std()
                .map_or(true, |idle| idle <= ttl)
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            log::info!("Evicted {} idle sessions ({} active)", evicted, sessions.len());
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
