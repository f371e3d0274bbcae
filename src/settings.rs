use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable naming an alternative settings file.
pub const CONFIG_PATH_ENV: &str = "CALM_MIND_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "Config";

/// Thresholds of the classification and response stages.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// A winning score at or above this marks the turn urgent.
    pub urgent_score_threshold: f32,
    /// Winning scores below this fall back to the weak-signal intents.
    pub weak_signal_threshold: f32,
    /// Intensity above which anxiety gets the urgent-action recipe.
    pub high_intensity_threshold: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            urgent_score_threshold: 10.0,
            weak_signal_threshold: 2.0,
            high_intensity_threshold: 0.7,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds a session may stay idle before it is dropped.
    pub session_ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            session_ttl_secs: 30 * 60,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineConfig,
    pub server: ServerConfig,
}

impl Settings {
    /// Loads `Config.toml` (or the file named by `CALM_MIND_CONFIG`) plus
    /// `CALM_MIND__SECTION__KEY` overrides. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    pub fn load_from(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("CALM_MIND").separator("__"))
            .build()
            .with_context(|| format!("Failed to read settings from '{}'", path))?
            .try_deserialize::<Settings>()
            .context("Invalid settings")?;
        Ok(settings)
    }
}
