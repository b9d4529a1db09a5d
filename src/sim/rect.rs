//! Axis-aligned rectangles and the play field they live in

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Fixed-size play area bounding ball and paddle motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
    /// Thickness of ball, paddles and net
    pub line_width: f32,
    pub paddle_length: f32,
}

impl Default for PlayField {
    fn default() -> Self {
        Self {
            width: PLAY_WIDTH,
            height: PLAY_HEIGHT,
            line_width: LINE_WIDTH,
            paddle_length: PADDLE_LENGTH,
        }
    }
}

impl PlayField {
    /// Largest `y` a paddle's top edge may take
    pub fn paddle_max_y(&self) -> f32 {
        self.height - self.paddle_length
    }

    /// Vertical position of a centered paddle
    pub fn paddle_start_y(&self) -> f32 {
        (self.height - self.paddle_length) / 2.0
    }

    /// Ball spawn point (top-left corner of the ball)
    pub fn center_spot(&self) -> Vec2 {
        Vec2::new(
            (self.width - self.line_width) / 2.0,
            (self.height - self.line_width) / 2.0,
        )
    }

    /// Ball `y` at or beyond which it bounces off the bottom wall
    pub fn ball_max_y(&self) -> f32 {
        self.height - self.line_width
    }
}

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Whether `other` touches this rectangle.
    ///
    /// Edges count as touching except `other.top() == self.bottom()`:
    /// contact along our bottom edge is not a hit.
    pub fn touches(&self, other: &Rect) -> bool {
        other.right() >= self.left()
            && other.left() <= self.right()
            && other.bottom() >= self.top()
            && other.top() < self.bottom()
    }

    /// Screen-space projection: position floored to whole units
    pub fn projected(&self) -> Rect {
        Rect::new(self.pos.floor(), self.size)
    }
}
