//! The ball: launch, integration and bounce detection

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::paddle::Paddle;
use super::rect::{PlayField, Rect};
use crate::consts::*;

/// Horizontal launch direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Toward the left paddle (-x)
    Left,
    /// Toward the right paddle (+x)
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Launch speed for a combined score, in units per ms.
///
/// 0.2 at 0-0 up to 0.5 at 4-4, the highest tie before someone reaches five.
pub fn launch_speed(combo_score: u32) -> f32 {
    BALL_MIN_SPEED + BALL_SPEED_RANGE * combo_score as f32 / BALL_SPEED_SCORE_SPAN
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Units per simulated millisecond
    pub vel: Vec2,
    /// Last position pushed to the render surface
    pub display: Rect,
    field: PlayField,
}

impl Ball {
    /// A ball parked off the field until the first drop
    pub fn new(field: PlayField) -> Self {
        let rect = Rect::new(
            Vec2::new(BALL_PARK_X, 0.0),
            Vec2::splat(field.line_width),
        );
        Self {
            rect,
            vel: Vec2::ZERO,
            display: rect.projected(),
            field,
        }
    }

    /// Put the ball in play from the center spot with a random launch angle
    /// inside a 90 degree wedge pointed `direction`.
    pub fn drop<R: Rng>(&mut self, direction: Direction, combo_score: u32, rng: &mut R) {
        // Park it so the old position doesn't linger on screen
        self.rect.pos = Vec2::new(BALL_PARK_X, 0.0);
        self.project();

        self.rect.pos = self.field.center_spot();

        let speed = launch_speed(combo_score);
        let angle = (rng.random::<f32>() * 2.0 - 1.0) * std::f32::consts::FRAC_PI_4;
        self.vel = Vec2::new(direction.sign() * angle.cos() * speed, angle.sin() * speed);
    }

    /// One millisecond of Euler integration
    #[inline]
    pub fn advance(&mut self) {
        self.rect.pos += self.vel;
    }

    /// Bounce off the top/bottom walls and either paddle.
    ///
    /// Returns true only for a paddle hit. `a` is tested before `b`.
    pub fn bounced(&mut self, a: &Paddle, b: &Paddle, max_y: f32) -> bool {
        let y = self.rect.pos.y;
        if y < 0.0 || y >= max_y {
            self.vel.y = -self.vel.y;
        }

        a.bounce(self) || b.bounce(self)
    }

    /// Sync the render projection with the simulated position
    pub fn project(&mut self) {
        self.display = self.rect.projected();
    }

    /// Current speed in units per ms
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}
