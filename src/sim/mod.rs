//! Simulation module
//!
//! All gameplay logic lives here. No rendering, DOM or audio backend
//! dependencies:
//! - Millisecond steps only
//! - Seeded RNG only
//! - Presentation reads projections, never drives the simulation

pub mod ball;
pub mod paddle;
pub mod rect;
pub mod state;
pub mod tick;

pub use ball::{Ball, Direction, launch_speed};
pub use paddle::{Paddle, Side};
pub use rect::{PlayField, Rect};
pub use state::{GamePhase, GameSession, StatusDisplay};
pub use tick::{STATUS_GAME_OVER, STATUS_GO, STATUS_READY, STATUS_SET, countdown_text, tick};
