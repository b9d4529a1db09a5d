//! Phase transitions and the millisecond-stepped game loop
//!
//! Each timer tick hands the active phase the real time elapsed since the
//! last accepted tick. Live play then replays that time one simulated
//! millisecond at a time, so collisions are checked at the same granularity
//! no matter how irregular the timer is.

use super::ball::Direction;
use super::paddle::Side;
use super::state::{GamePhase, GameSession};
use crate::audio::{Cue, CuePlayer, play_best_effort};

pub const STATUS_READY: &str = "Ready...";
pub const STATUS_SET: &str = "Set...";
pub const STATUS_GO: &str = "GO!";
pub const STATUS_GAME_OVER: &str = "Game Over";

/// Countdown text for `elapsed_ms` into the pre-play phase, or `None` once
/// the countdown is over
pub fn countdown_text(elapsed_ms: u32, phase_ms: u32) -> Option<&'static str> {
    if elapsed_ms < phase_ms {
        Some(STATUS_READY)
    } else if elapsed_ms < phase_ms.saturating_mul(2) {
        Some(STATUS_SET)
    } else if elapsed_ms < phase_ms.saturating_mul(3) {
        Some(STATUS_GO)
    } else {
        None
    }
}

/// Run the active phase for `elapsed_ms`.
///
/// Returns whether the caller should move its reference clock forward.
/// Countdown and game-over screens return false until they finish so that
/// `elapsed_ms` keeps measuring time since the phase began.
pub fn tick(session: &mut GameSession, elapsed_ms: u32, cues: &mut dyn CuePlayer) -> bool {
    match session.phase {
        GamePhase::Title => false,
        GamePhase::PrePlay => pre_play(session, elapsed_ms),
        GamePhase::Live => live(session, elapsed_ms, cues),
        GamePhase::GameOver => game_over(session, elapsed_ms),
    }
}

fn pre_play(session: &mut GameSession, elapsed_ms: u32) -> bool {
    match countdown_text(elapsed_ms, session.config.countdown_phase_ms) {
        Some(text) => {
            session.status.text = text;
            false
        }
        None => {
            session.status.visible = false;
            session.set_phase(GamePhase::Live);
            true
        }
    }
}

fn live(session: &mut GameSession, delta_ms: u32, cues: &mut dyn CuePlayer) -> bool {
    let max_y = session.config.field.ball_max_y();

    for _ in 0..delta_ms {
        if session.phase != GamePhase::Live {
            break;
        }

        session.ball.advance();

        if session.ball.bounced(&session.p1, &session.p2, max_y) {
            play_best_effort(cues, Cue::Bounce);
            continue;
        }

        // Slipping past a paddle is a point for the other side
        let x = session.ball.rect.pos.x;
        if x < session.p1.x() {
            point_scored(session, Side::Right);
        } else if x > session.p2.x() {
            point_scored(session, Side::Left);
        }
    }

    if session.phase == GamePhase::Live {
        let steps = delta_ms.div_ceil(session.config.ai_step_ms);
        for _ in 0..steps {
            session.p2.ai(&session.ball);
        }
        session.ball.project();
    }

    true
}

fn point_scored(session: &mut GameSession, side: Side) {
    let (scorer, direction) = match side {
        Side::Left => (&mut session.p1, Direction::Right),
        Side::Right => (&mut session.p2, Direction::Left),
    };
    scorer.scored();
    let score = scorer.score;

    log::info!(
        "{:?} scores: {} - {}",
        side,
        session.p1.score,
        session.p2.score
    );

    let combo = session.combined_score();
    session.drop_ball(direction, combo);
    session.status.visible = true;

    if score < session.config.win_score {
        session.set_phase(GamePhase::PrePlay);
    } else {
        session.set_phase(GamePhase::GameOver);
    }
}

fn game_over(session: &mut GameSession, elapsed_ms: u32) -> bool {
    if elapsed_ms < session.config.game_over_ms {
        session.status.text = STATUS_GAME_OVER;
        return false;
    }

    session.timer_running = false;
    session.status.visible = false;
    session.start_visible = true;
    session.p1.reset();
    session.p2.reset();
    session.set_phase(GamePhase::Title);
    true
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::audio::{NullCues, RecordingCues};
    use crate::config::GameConfig;

    fn live_session() -> GameSession {
        let mut session = GameSession::new(GameConfig::default(), 12345);
        session.start(0);
        session.phase = GamePhase::Live;
        session.status.visible = false;
        session
    }

    fn place_ball(session: &mut GameSession, x: f32, y: f32, vel: Vec2) {
        session.ball.rect.pos = Vec2::new(x, y);
        session.ball.vel = vel;
    }

    #[test]
    fn test_countdown_text() {
        assert_eq!(countdown_text(0, 1000), Some("Ready..."));
        assert_eq!(countdown_text(999, 1000), Some("Ready..."));
        assert_eq!(countdown_text(1000, 1000), Some("Set..."));
        assert_eq!(countdown_text(2999, 1000), Some("GO!"));
        assert_eq!(countdown_text(3000, 1000), None);
    }

    #[test]
    fn test_pre_play_holds_clock_until_done() {
        let mut session = GameSession::new(GameConfig::default(), 1);
        session.start(0);

        assert!(!tick(&mut session, 500, &mut NullCues));
        assert_eq!(session.status.text, STATUS_READY);
        assert!(!tick(&mut session, 1500, &mut NullCues));
        assert_eq!(session.status.text, STATUS_SET);
        assert!(!tick(&mut session, 2500, &mut NullCues));
        assert_eq!(session.status.text, STATUS_GO);
        assert_eq!(session.phase, GamePhase::PrePlay);

        assert!(tick(&mut session, 3000, &mut NullCues));
        assert_eq!(session.phase, GamePhase::Live);
        assert!(!session.status.visible);
    }

    #[test]
    fn test_timer_tick_drives_countdown() {
        let mut session = GameSession::new(GameConfig::default(), 1);
        session.start(1000);

        session.timer_tick(1033, &mut NullCues);
        assert_eq!(session.last_tick_ms, 1000);
        session.timer_tick(3500, &mut NullCues);
        assert_eq!(session.last_tick_ms, 1000);
        assert_eq!(session.status.text, STATUS_GO);

        session.timer_tick(4000, &mut NullCues);
        assert_eq!(session.phase, GamePhase::Live);
        assert_eq!(session.last_tick_ms, 4000);

        session.timer_tick(4033, &mut NullCues);
        assert_eq!(session.last_tick_ms, 4033);
    }

    #[test]
    fn test_ball_past_right_paddle_scores_for_left() {
        let mut session = live_session();
        // Well above the right paddle, about to cross its x
        place_ball(&mut session, 779.9, 50.0, Vec2::new(0.3, 0.0));

        assert!(tick(&mut session, 33, &mut NullCues));
        assert_eq!(session.p1.score, 1);
        assert_eq!(session.p2.score, 0);
        assert_eq!(session.phase, GamePhase::PrePlay);
        assert!(session.status.visible);
        // Re-dropped from the center toward the right at combined score 1
        assert_eq!(session.ball.rect.pos, Vec2::new(395.0, 195.0));
        assert!(session.ball.vel.x > 0.0);
        assert!((session.ball.speed() - (0.2 + 0.3 / 8.0)).abs() < 1e-5);
    }

    #[test]
    fn test_ball_past_left_paddle_scores_for_right() {
        let mut session = live_session();
        place_ball(&mut session, 10.1, 350.0, Vec2::new(-0.3, 0.0));

        tick(&mut session, 33, &mut NullCues);
        assert_eq!(session.p2.score, 1);
        assert_eq!(session.phase, GamePhase::PrePlay);
        assert!(session.ball.vel.x < 0.0);
    }

    #[test]
    fn test_score_ends_tick_early() {
        let mut session = live_session();
        place_ball(&mut session, 779.9, 50.0, Vec2::new(0.3, 0.0));
        let p2_y = session.p2.y();

        tick(&mut session, 500, &mut NullCues);
        // Nothing simulated after the point: ball still on the center spot,
        // display parked, no heuristic moves
        assert_eq!(session.ball.rect.pos, Vec2::new(395.0, 195.0));
        assert_eq!(session.ball.display.pos.x, crate::consts::BALL_PARK_X);
        assert_eq!(session.p2.y(), p2_y);
    }

    #[test]
    fn test_fifth_point_ends_game() {
        let mut session = live_session();
        session.p1.score = 4;
        session.p2.score = 3;
        place_ball(&mut session, 779.9, 50.0, Vec2::new(0.3, 0.0));

        tick(&mut session, 33, &mut NullCues);
        assert_eq!(session.p1.score, 5);
        assert_eq!(session.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_four_points_keeps_playing() {
        let mut session = live_session();
        session.p2.score = 3;
        place_ball(&mut session, 10.1, 350.0, Vec2::new(-0.3, 0.0));

        tick(&mut session, 33, &mut NullCues);
        assert_eq!(session.p2.score, 4);
        assert_eq!(session.phase, GamePhase::PrePlay);
    }

    #[test]
    fn test_game_over_resets_to_title() {
        let mut session = live_session();
        session.phase = GamePhase::GameOver;
        session.status.visible = true;
        session.p1.score = 5;
        session.p2.score = 2;
        session.p1.move_to(0.0);
        session.p2.move_to(300.0);

        assert!(!tick(&mut session, 2999, &mut NullCues));
        assert_eq!(session.status.text, STATUS_GAME_OVER);
        assert_eq!(session.phase, GamePhase::GameOver);

        assert!(tick(&mut session, 3000, &mut NullCues));
        assert_eq!(session.phase, GamePhase::Title);
        assert_eq!(session.p1.score, 0);
        assert_eq!(session.p2.score, 0);
        assert_eq!(session.p1.y(), session.p1.start_y);
        assert_eq!(session.p2.y(), session.p2.start_y);
        assert!(!session.timer_running);
        assert!(!session.status.visible);
        assert!(session.start_visible);
    }

    #[test]
    fn test_paddle_bounce_plays_cue() {
        let mut session = live_session();
        // Heading into the left paddle's face
        place_ball(&mut session, 22.0, 190.0, Vec2::new(-0.3, 0.0));
        let mut cues = RecordingCues::default();

        tick(&mut session, 33, &mut cues);
        assert!(cues.count(Cue::Bounce) >= 1);
        assert!(session.ball.vel.x > 0.0);
        assert_eq!(session.phase, GamePhase::Live);
    }

    #[test]
    fn test_audio_failure_does_not_change_simulation() {
        let mut ok = live_session();
        let mut failing = live_session();
        for s in [&mut ok, &mut failing] {
            place_ball(s, 22.0, 170.0, Vec2::new(-0.3, 0.05));
        }

        tick(&mut ok, 100, &mut RecordingCues::default());
        tick(&mut failing, 100, &mut RecordingCues::failing());
        assert_eq!(ok.ball.rect, failing.ball.rect);
        assert_eq!(ok.ball.vel, failing.ball.vel);
        assert_eq!(ok.p2.y(), failing.p2.y());
    }

    #[test]
    fn test_heuristic_runs_once_per_started_step() {
        let mut session = live_session();
        // Approaching the right paddle from far below its reach
        place_ball(&mut session, 400.0, 380.0, Vec2::new(0.01, 0.0));
        let start = session.p2.y();

        tick(&mut session, 33, &mut NullCues);
        assert_eq!(session.p2.y(), start + 7.0);
        assert_eq!(session.ball.display.pos, session.ball.rect.pos.floor());
    }

    #[test]
    fn test_heuristic_ignores_receding_ball() {
        let mut session = live_session();
        place_ball(&mut session, 400.0, 380.0, Vec2::new(-0.01, 0.0));
        let start = session.p2.y();

        tick(&mut session, 330, &mut NullCues);
        assert_eq!(session.p2.y(), start);
    }

    #[test]
    fn test_heuristic_leaves_player_paddle_alone() {
        let mut session = live_session();
        session.move_player(200.0);
        place_ball(&mut session, 400.0, 380.0, Vec2::new(-0.01, 0.0));

        tick(&mut session, 33, &mut NullCues);
        assert_eq!(session.p1.y(), 150.0);
    }

    #[test]
    fn test_wall_bounce_keeps_ball_in_field() {
        let mut session = live_session();
        place_ball(&mut session, 400.0, 5.0, Vec2::new(0.0, -0.3));

        tick(&mut session, 100, &mut NullCues);
        assert!(session.ball.vel.y > 0.0);
        assert!(session.ball.rect.pos.y > 0.0);
    }

    #[test]
    fn test_title_ignores_ticks() {
        let mut session = GameSession::new(GameConfig::default(), 1);
        assert!(!tick(&mut session, 10_000, &mut NullCues));
        assert_eq!(session.phase, GamePhase::Title);
    }

    #[test]
    fn test_full_match_returns_to_title() {
        let mut session = GameSession::new(GameConfig::default(), 777);
        session.start(0);

        let mut now = 0;
        let mut cues = RecordingCues::default();
        // Half an hour of simulated play is far more than a match needs
        while session.timer_running && now < 30 * 60 * 1000 {
            // Stand-in for the human: same nudges the computer gets
            if session.phase == GamePhase::Live {
                for _ in 0..33u32.div_ceil(5) {
                    session.p1.ai(&session.ball);
                }
            }
            now += 33;
            session.timer_tick(now, &mut cues);
        }

        assert_eq!(session.phase, GamePhase::Title);
        assert!(session.start_visible);
    }
}
