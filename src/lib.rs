//! Classic Pong - paddle and ball in the browser
//!
//! Core modules:
//! - `sim`: Millisecond-stepped simulation (entities, collisions, game state)
//! - `renderer`: WebGPU rectangle renderer
//! - `audio`: Best-effort sound cues
//! - `input`: Pointer/touch to paddle mapping
//! - `konami`: Easter-egg key sequence
//! - `config`: Game configuration

pub mod audio;
pub mod config;
pub mod input;
pub mod konami;
pub mod renderer;
pub mod sim;

pub use audio::{AudioError, Cue, CuePlayer};
pub use config::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (distance units, one unit = one CSS pixel)
    pub const PLAY_WIDTH: f32 = 800.0;
    pub const PLAY_HEIGHT: f32 = 400.0;
    /// Thickness of paddles, ball and net
    pub const LINE_WIDTH: f32 = 10.0;
    pub const PADDLE_LENGTH: f32 = 100.0;

    /// Where the ball waits while out of play
    pub const BALL_PARK_X: f32 = -1000.0;

    /// Slowest launch speed (units per ms)
    pub const BALL_MIN_SPEED: f32 = 0.2;
    /// Speed added across the full combined-score range
    pub const BALL_SPEED_RANGE: f32 = 0.3;
    /// Highest combined score before game over (4 to 4)
    pub const BALL_SPEED_SCORE_SPAN: f32 = 8.0;

    /// Horizontal speed multiplier on a paddle hit (sign flips)
    pub const PADDLE_BOOST: f32 = 1.1;
    /// Divisor turning center offset into "english"
    pub const ENGLISH_DIVISOR: f32 = 333.0;

    /// Points needed to win
    pub const WIN_SCORE: u32 = 5;
    /// Length of each countdown phase
    pub const COUNTDOWN_PHASE_MS: u32 = 1000;
    /// How long "Game Over" stays up
    pub const GAME_OVER_MS: u32 = 3000;
    /// Simulated ms between heuristic paddle updates
    pub const AI_STEP_MS: u32 = 5;
    /// Timer period (roughly 30 FPS)
    pub const TICK_PERIOD_MS: u32 = 33;
    /// How long the easter-egg banner stays visible
    pub const CHEAT_DISPLAY_MS: u32 = 4000;
}
