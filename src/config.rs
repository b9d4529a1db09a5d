//! Game configuration
//!
//! Defaults reproduce the classic game. A page may override them with a JSON
//! block; nothing is ever written back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::PlayField;

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: PlayField,
    /// First player to reach this many points wins
    pub win_score: u32,
    /// Length of each of the Ready/Set/GO phases
    pub countdown_phase_ms: u32,
    /// How long "Game Over" is shown before returning to the title
    pub game_over_ms: u32,
    /// Simulated milliseconds between computer paddle nudges
    pub ai_step_ms: u32,
    /// Period of the driving timer
    pub tick_period_ms: u32,
    /// How long the easter-egg banner stays up
    pub cheat_display_ms: u32,
    /// Fixed RNG seed (random per page load when absent)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: PlayField::default(),
            win_score: WIN_SCORE,
            countdown_phase_ms: COUNTDOWN_PHASE_MS,
            game_over_ms: GAME_OVER_MS,
            ai_step_ms: AI_STEP_MS,
            tick_period_ms: TICK_PERIOD_MS,
            cheat_display_ms: CHEAT_DISPLAY_MS,
            seed: None,
        }
    }
}

/// Why a configuration was rejected
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "invalid config JSON: {}", e),
            Self::Invalid(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl GameConfig {
    /// Element holding optional JSON overrides
    pub const CONFIG_ELEMENT_ID: &'static str = "pong-config";

    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.field;
        if !(f.width > 0.0 && f.height > 0.0 && f.line_width > 0.0) {
            return Err(ConfigError::Invalid("field dimensions must be positive"));
        }
        if !(f.paddle_length > 0.0 && f.paddle_length <= f.height) {
            return Err(ConfigError::Invalid("paddle must fit the field height"));
        }
        if f.width <= f.line_width * 4.0 {
            return Err(ConfigError::Invalid("field too narrow for two paddles"));
        }
        if self.win_score == 0 {
            return Err(ConfigError::Invalid("win_score must be at least 1"));
        }
        if self.ai_step_ms == 0 || self.tick_period_ms == 0 {
            return Err(ConfigError::Invalid("step periods must be non-zero"));
        }
        Ok(())
    }

    /// Read overrides from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = text {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config overrides from #{}", Self::CONFIG_ELEMENT_ID);
                    return config;
                }
                Err(e) => log::warn!("Ignoring config overrides: {}", e),
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
