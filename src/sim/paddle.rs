//! Paddles: movement, scoring, collision response and the computer opponent

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::rect::{PlayField, Rect};
use crate::consts::{ENGLISH_DIVISOR, PADDLE_BOOST};

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Is a ball with horizontal velocity `dx` heading toward this side?
    pub fn is_approached_by(self, dx: f32) -> bool {
        match self {
            Side::Left => dx < 0.0,
            Side::Right => dx > 0.0,
        }
    }
}

/// A player's paddle and score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
    pub start_y: f32,
    pub score: u32,
    /// Last position pushed to the render surface
    pub display: Rect,
    field: PlayField,
}

impl Paddle {
    /// Create a vertically centered paddle with a ball's width of space
    /// behind it
    pub fn new(side: Side, field: PlayField) -> Self {
        let x = match side {
            Side::Left => field.line_width,
            Side::Right => field.width - field.line_width * 2.0,
        };
        let start_y = field.paddle_start_y();
        let rect = Rect::new(
            Vec2::new(x, start_y),
            Vec2::new(field.line_width, field.paddle_length),
        );
        Self {
            side,
            rect,
            start_y,
            score: 0,
            display: rect.projected(),
            field,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.rect.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.rect.pos.y
    }

    /// Move the paddle's top edge to `y`, clamped inside the field.
    /// A NaN `y` leaves the paddle where it is.
    pub fn move_to(&mut self, y: f32) {
        if y.is_nan() {
            return;
        }
        let max_y = self.field.paddle_max_y();
        self.rect.pos.y = if y > max_y {
            max_y
        } else if y < 0.0 {
            0.0
        } else {
            y
        };
        self.display = self.rect.projected();
    }

    pub fn scored(&mut self) {
        self.score += 1;
    }

    /// Back to the starting position with no points
    pub fn reset(&mut self) {
        self.move_to(self.start_y);
        self.score = 0;
    }

    pub fn intersect(&self, ball: &Ball) -> bool {
        self.rect.touches(&ball.rect)
    }

    /// Reflect the ball if it hit this paddle, speeding it up and adding
    /// english proportional to the distance from the paddle's center.
    /// Returns whether a hit happened.
    pub fn bounce(&self, ball: &mut Ball) -> bool {
        if !self.intersect(ball) {
            return false;
        }

        ball.vel.x *= -PADDLE_BOOST;
        let center_delta = self.rect.center_y() - ball.rect.center_y();
        ball.vel.y -= center_delta / ENGLISH_DIVISOR;
        true
    }

    /// Computer opponent: one-unit nudges toward the ball, only while the
    /// ball is coming this way. Easy to beat on purpose.
    pub fn ai(&mut self, ball: &Ball) {
        if !self.side.is_approached_by(ball.vel.x) {
            return;
        }

        let ball_y = ball.rect.pos.y;
        if ball_y > self.rect.bottom() - self.field.line_width {
            self.move_to(self.y() + 1.0);
        } else if ball_y < self.y() {
            self.move_to(self.y() - 1.0);
        }
    }
}
