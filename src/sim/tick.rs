//! Fixed timestep simulation tick
//!
//! Advances the match one step from the current control intents.

use super::collision::ball_paddle_contact;
use super::state::{Direction, GameEvent, MatchPhase, MatchState, Paddle};

/// Control intents for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    /// Start a new match (only honoured once the match is over)
    pub restart: bool,
    /// End the session (handled by the session, in any phase)
    pub quit: bool,
}

/// Apply held intents one after the other, each clamped on its own
fn steer(paddle: &mut Paddle, up: bool, down: bool) {
    if up {
        paddle.slide(Direction::Up);
    }
    if down {
        paddle.slide(Direction::Down);
    }
}

/// Advance the match by one tick and return the resulting phase
pub fn tick(state: &mut MatchState, input: &TickInput) -> MatchPhase {
    state.events.clear();

    match state.phase {
        MatchPhase::MatchOver { winner } => {
            // Frozen until restart
            if input.restart {
                log::info!(
                    "Restarting after {} won {}-{}",
                    winner.player_label(),
                    state.left_score,
                    state.right_score
                );
                state.restart();
                state.events.push(GameEvent::MatchRestarted);
            }
            return state.phase;
        }
        MatchPhase::RoundOver { .. } => {
            state.phase = MatchPhase::Playing;
        }
        MatchPhase::Playing => {}
    }

    state.time_ticks += 1;

    steer(&mut state.left_paddle, input.left_up, input.left_down);
    steer(&mut state.right_paddle, input.right_up, input.right_down);

    let vy_before = state.ball.vel.y;
    let exit = state.ball.advance();
    if state.ball.vel.y != vy_before {
        state.events.push(GameEvent::WallBounce);
    }

    if let Some(label) = exit {
        let scorer = label.opponent();
        state.award_point(scorer);
        state.ball.reset();
        state.events.push(GameEvent::PointScored(scorer));
        state.phase = MatchPhase::RoundOver { winner: scorer };
        log::debug!(
            "Point to {} ({}-{}) at tick {}",
            scorer.player_label(),
            state.left_score,
            state.right_score,
            state.time_ticks
        );
    }

    if let Some(side) = ball_paddle_contact(
        &state.ball.rect,
        &state.left_paddle.rect,
        &state.right_paddle.rect,
    ) {
        state.ball.bounce();
        state.events.push(GameEvent::PaddleHit(side));
    }

    if let Some(winner) = state.leader_at_target() {
        state.phase = MatchPhase::MatchOver { winner };
        state.events.push(GameEvent::MatchWon(winner));
        log::info!(
            "{} Wins! Final score {}-{}",
            winner.player_label(),
            state.left_score,
            state.right_score
        );
    }

    state.phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::Side;
    use glam::Vec2;
    use proptest::prelude::*;

    fn new_match() -> MatchState {
        MatchState::new(GameConfig::default()).unwrap()
    }

    /// Ball placed so the next tick carries its right edge past the field
    fn about_to_exit_right_edge(state: &mut MatchState) {
        state.ball.rect.pos = Vec2::new(877.0, 100.0);
        state.ball.vel = Vec2::new(6.0, 6.0);
    }

    /// Ball placed so the next tick carries its left edge past the field
    fn about_to_exit_left_edge(state: &mut MatchState) {
        state.ball.rect.pos = Vec2::new(3.0, 100.0);
        state.ball.vel = Vec2::new(-6.0, 6.0);
    }

    #[test]
    fn test_tick_moves_ball_from_center() {
        let mut state = new_match();
        let phase = tick(&mut state, &TickInput::default());
        assert_eq!(phase, MatchPhase::Playing);
        assert_eq!(state.ball.rect.pos, Vec2::new(446.0, 296.0));
        assert_eq!(state.time_ticks, 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_tick_steers_both_paddles() {
        let mut state = new_match();
        let input = TickInput {
            left_up: true,
            right_down: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.left_paddle.rect.y(), 243.0);
        assert_eq!(state.right_paddle.rect.y(), 257.0);
    }

    #[test]
    fn test_both_keys_held_at_top_edge() {
        let mut state = new_match();
        state.left_paddle.rect.pos.y = 0.0;
        let input = TickInput {
            left_up: true,
            left_down: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        // Up clamps at 0, then Down moves a full step
        assert_eq!(state.left_paddle.rect.y(), 7.0);

        state.left_paddle.rect.pos.y = 200.0;
        tick(&mut state, &input);
        assert_eq!(state.left_paddle.rect.y(), 200.0);
    }

    #[test]
    fn test_point_resets_ball_and_enters_round_over() {
        let mut state = new_match();
        about_to_exit_right_edge(&mut state);

        let phase = tick(&mut state, &TickInput::default());
        assert_eq!(phase, MatchPhase::RoundOver { winner: Side::Right });
        assert_eq!(state.ball.rect.center(), Vec2::new(450.0, 300.0));
        assert_eq!(state.ball.vel.x, -6.0);
        assert!(state.events.contains(&GameEvent::PointScored(Side::Right)));

        // Play resumes on the next tick without losing a step
        let phase = tick(&mut state, &TickInput::default());
        assert_eq!(phase, MatchPhase::Playing);
        assert_eq!(state.ball.rect.pos, Vec2::new(434.0, 296.0));
    }

    #[test]
    fn test_right_edge_exit_scores_right() {
        let mut state = new_match();
        about_to_exit_right_edge(&mut state);

        tick(&mut state, &TickInput::default());
        assert_eq!((state.left_score, state.right_score), (0, 1));
        // Serve heads back toward the left side
        assert!(state.ball.vel.x < 0.0);
    }

    #[test]
    fn test_left_edge_exit_scores_left() {
        let mut state = new_match();
        about_to_exit_left_edge(&mut state);

        let phase = tick(&mut state, &TickInput::default());
        assert_eq!(phase, MatchPhase::RoundOver { winner: Side::Left });
        assert_eq!((state.left_score, state.right_score), (1, 0));
        // Serve heads back toward the right side
        assert!(state.ball.vel.x > 0.0);
        assert_eq!(state.events, vec![GameEvent::PointScored(Side::Left)]);
    }

    #[test]
    fn test_fifth_point_ends_match() {
        let mut state = new_match();
        state.left_score = 4;
        state.right_score = 3;
        about_to_exit_left_edge(&mut state);

        let phase = tick(&mut state, &TickInput::default());
        assert_eq!(state.left_score, 5);
        assert_eq!(phase, MatchPhase::MatchOver { winner: Side::Left });
        assert!(state.events.contains(&GameEvent::MatchWon(Side::Left)));
    }

    #[test]
    fn test_match_over_is_frozen() {
        let mut state = new_match();
        state.left_score = 4;
        about_to_exit_left_edge(&mut state);
        tick(&mut state, &TickInput::default());

        let ball = state.ball.rect;
        let paddle_y = state.left_paddle.rect.y();
        let ticks = state.time_ticks;
        let input = TickInput {
            left_down: true,
            right_up: true,
            ..Default::default()
        };
        for _ in 0..10 {
            let phase = tick(&mut state, &input);
            assert_eq!(phase, MatchPhase::MatchOver { winner: Side::Left });
        }
        assert_eq!(state.ball.rect, ball);
        assert_eq!(state.left_paddle.rect.y(), paddle_y);
        assert_eq!(state.time_ticks, ticks);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_restart_from_match_over() {
        let mut state = new_match();
        state.right_score = 4;
        about_to_exit_right_edge(&mut state);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, MatchPhase::MatchOver { winner: Side::Right });

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        let phase = tick(&mut state, &restart);
        assert_eq!(phase, MatchPhase::Playing);
        assert_eq!((state.left_score, state.right_score), (0, 0));
        assert_eq!(state.events, vec![GameEvent::MatchRestarted]);
        assert_eq!(state.ball.vel, Vec2::new(6.0, 6.0));
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = new_match();
        state.left_score = 3;
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart);
        assert_eq!(state.left_score, 3);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_paddle_hit_reverses_ball() {
        let mut state = new_match();
        // Right paddle spans x 860..870, y 250..350
        state.ball.rect.pos = Vec2::new(836.0, 280.0);
        state.ball.vel = Vec2::new(6.0, 6.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.x, -6.0);
        assert_eq!(state.events, vec![GameEvent::PaddleHit(Side::Right)]);
    }

    #[test]
    fn test_wall_bounce_event() {
        let mut state = new_match();
        state.ball.rect.pos = Vec2::new(400.0, 2.0);
        state.ball.vel = Vec2::new(6.0, -6.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.y, 6.0);
        assert_eq!(state.events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_single_bounce_when_touching_both_paddles() {
        // Narrow field: paddles at x 30..40 and 60..70, ball wide enough to span both
        let config = GameConfig {
            field_width: 100.0,
            ball_size: 30.0,
            ..Default::default()
        };
        let mut state = MatchState::new(config).unwrap();
        state.ball.rect.pos = Vec2::new(34.0, 280.0);
        state.ball.vel = Vec2::new(1.0, 0.0);

        tick(&mut state, &TickInput::default());
        assert!(state.ball.rect.intersects(&state.left_paddle.rect));
        assert!(state.ball.rect.intersects(&state.right_paddle.rect));
        assert_eq!(state.ball.vel.x, -1.0);
        assert_eq!(state.events, vec![GameEvent::PaddleHit(Side::Left)]);
    }

    #[test]
    fn test_idle_match_eventually_ends() {
        let mut state = new_match();
        let mut phase = MatchPhase::Playing;
        for _ in 0..100_000 {
            phase = tick(&mut state, &TickInput::default());
            if phase.is_terminal() {
                break;
            }
        }
        assert!(phase.is_terminal());
        assert_eq!(state.score(phase.winner().unwrap()), 5);
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            TickInput {
                left_up: true,
                ..Default::default()
            },
            TickInput {
                right_down: true,
                left_down: true,
                ..Default::default()
            },
            TickInput::default(),
        ];
        let mut a = new_match();
        let mut b = new_match();
        for i in 0..3000 {
            let input = &inputs[i % inputs.len()];
            assert_eq!(tick(&mut a, input), tick(&mut b, input));
        }
        assert_eq!(a.ball.rect, b.ball.rect);
        assert_eq!(a.left_score, b.left_score);
        assert_eq!(a.right_score, b.right_score);
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(left_up, left_down, right_up, right_down)| TickInput {
                left_up,
                left_down,
                right_up,
                right_down,
                ..Default::default()
            },
        )
    }

    proptest! {
        #[test]
        fn prop_scores_monotonic_and_match_over_at_target(
            inputs in proptest::collection::vec(arb_input(), 1..2000),
        ) {
            let mut state = new_match();
            let (mut left, mut right) = (0, 0);
            for input in &inputs {
                let phase = tick(&mut state, input);
                prop_assert!(state.left_score >= left);
                prop_assert!(state.right_score >= right);
                prop_assert!(state.left_score <= 5 && state.right_score <= 5);
                left = state.left_score;
                right = state.right_score;

                let at_target = left == 5 || right == 5;
                prop_assert_eq!(phase.is_terminal(), at_target);
                for paddle in [&state.left_paddle, &state.right_paddle] {
                    prop_assert!((0.0..=500.0).contains(&paddle.rect.y()));
                }
            }
        }
    }
}
