//! Game session and phases
//!
//! Everything one page load needs to play lives in [`GameSession`]; there is
//! no module-level state.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, Direction};
use super::paddle::{Paddle, Side};
use crate::audio::{Cue, CuePlayer, play_best_effort};
use crate::config::GameConfig;
use crate::input::paddle_top_for;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start button
    Title,
    /// Ready/Set/GO countdown before a point
    PrePlay,
    /// Ball in play
    Live,
    /// Showing "Game Over" before returning to the title
    GameOver,
}

/// Status box contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub visible: bool,
    pub text: &'static str,
}

/// One game session: both paddles, the ball and the phase machine
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Human player, left side
    pub p1: Paddle,
    /// Computer player, right side
    pub p2: Paddle,
    pub ball: Ball,
    /// Timestamp of the last tick whose elapsed time was consumed
    pub last_tick_ms: u64,
    pub status: StatusDisplay,
    pub start_visible: bool,
    pub splash_visible: bool,
    /// Whether the periodic timer should be firing
    pub timer_running: bool,
    pub(crate) rng: Pcg32,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let field = config.field;
        Self {
            phase: GamePhase::Title,
            p1: Paddle::new(Side::Left, field),
            p2: Paddle::new(Side::Right, field),
            ball: Ball::new(field),
            last_tick_ms: 0,
            status: StatusDisplay {
                visible: false,
                text: "",
            },
            start_visible: true,
            splash_visible: true,
            timer_running: false,
            rng: Pcg32::seed_from_u64(seed),
            config,
        }
    }

    /// Sum of both players' scores
    pub fn combined_score(&self) -> u32 {
        self.p1.score + self.p2.score
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.p1,
            Side::Right => &self.p2,
        }
    }

    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Re-drop the ball with speed keyed to `combo_score`
    pub(crate) fn drop_ball(&mut self, direction: Direction, combo_score: u32) {
        self.ball.drop(direction, combo_score, &mut self.rng);
    }

    /// Start button pressed: hide it, show the countdown, launch toward the
    /// right and start the timer. Ignored unless on the title screen.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.phase != GamePhase::Title {
            log::debug!("Start ignored in {:?}", self.phase);
            return false;
        }

        self.start_visible = false;
        self.status.visible = true;
        self.last_tick_ms = now_ms;
        self.drop_ball(Direction::Right, 0);
        self.set_phase(GamePhase::PrePlay);
        self.timer_running = true;
        true
    }

    /// Timer fired at `now_ms`: run the active phase with the time since the
    /// last accepted tick.
    pub fn timer_tick(&mut self, now_ms: u64, cues: &mut dyn CuePlayer) {
        let elapsed = now_ms.saturating_sub(self.last_tick_ms);
        let elapsed = u32::try_from(elapsed).unwrap_or(u32::MAX);
        if super::tick::tick(self, elapsed, cues) {
            self.last_tick_ms = now_ms;
        }
    }

    /// Pointer moved to field height `y`: center the human paddle there
    pub fn move_player(&mut self, y: f32) {
        let top = paddle_top_for(y, self.config.field.paddle_length);
        self.p1.move_to(top);
    }

    /// Splash screen clicked away
    pub fn dismiss_splash(&mut self, cues: &mut dyn CuePlayer) {
        self.splash_visible = false;
        play_best_effort(cues, Cue::Ambient);
    }
}
