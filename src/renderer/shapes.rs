//! Vertex generation for the play field, in field coordinates

use super::vertex::{Vertex, colors};
use crate::sim::{GameSession, PlayField, Rect};

/// Filled rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    Vertex::quad(
        [r.left(), r.top()],
        [r.right(), r.bottom()],
        color,
    )
}

/// Dashed center line, one line-width wide, dashes two line-widths long
pub fn center_net(field: &PlayField, color: [f32; 4]) -> Vec<Vertex> {
    let w = field.line_width;
    let x = (field.width - w) / 2.0;
    let dash = w * 2.0;

    let mut vertices = Vec::new();
    let mut y = 0.0;
    while y < field.height {
        let bottom = (y + dash).min(field.height);
        vertices.extend_from_slice(&Vertex::quad([x, y], [x + w, bottom], color));
        y += dash * 2.0;
    }
    vertices
}

/// Everything visible on the field this frame.
///
/// Paddles and ball are drawn at their last projected positions, so a
/// parked ball stays off screen until live play projects it again.
pub fn frame(session: &GameSession) -> Vec<Vertex> {
    let field = &session.config.field;
    let mut vertices = Vec::with_capacity(64);

    let background = Rect::new(
        glam::Vec2::ZERO,
        glam::Vec2::new(field.width, field.height),
    );
    vertices.extend_from_slice(&rect(&background, colors::FIELD));
    vertices.extend(center_net(field, colors::NET));
    vertices.extend_from_slice(&rect(&session.p1.display, colors::PADDLE_LEFT));
    vertices.extend_from_slice(&rect(&session.p2.display, colors::PADDLE_RIGHT));

    // Skip the ball entirely while it is parked outside the field
    if session.ball.display.right() > 0.0 {
        vertices.extend_from_slice(&rect(&session.ball.display, colors::BALL));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::GamePhase;

    #[test]
    fn test_rect_covers_corners() {
        let r = Rect::new(glam::Vec2::new(10.0, 20.0), glam::Vec2::new(5.0, 8.0));
        let v = rect(&r, colors::BALL);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 15.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 28.0);
    }

    #[test]
    fn test_net_stays_in_field() {
        let field = PlayField::default();
        let net = center_net(&field, colors::NET);
        assert_eq!(net.len() % 6, 0);
        // 400 high, dash 20, period 40
        assert_eq!(net.len() / 6, 10);
        assert!(net.iter().all(|v| v.position[1] <= field.height));
    }

    #[test]
    fn test_parked_ball_not_drawn() {
        let mut session = GameSession::new(GameConfig::default(), 3);
        let without_ball = frame(&session).len();

        session.start(0);
        session.phase = GamePhase::Live;
        session.ball.project();
        assert_eq!(frame(&session).len(), without_ball + 6);
    }
}
