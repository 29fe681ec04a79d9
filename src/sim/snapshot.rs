//! Read-only view of a match for renderers
//!
//! Logical coordinates only. Colors, glow, fonts and layout are up to the renderer.

use serde::Serialize;

use super::rect::Rect;
use super::state::{GameEvent, MatchPhase, MatchState};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Rect,
    /// Ghost positions behind the ball, newest first
    pub ball_trail: Vec<Rect>,
    pub left_score: u32,
    pub right_score: u32,
    pub phase: MatchPhase,
    /// Physics ticks since match start (drives time-based effects)
    pub time_ticks: u64,
    pub events: Vec<GameEvent>,
}

impl MatchState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            left_paddle: self.left_paddle.rect,
            right_paddle: self.right_paddle.rect,
            ball: self.ball.rect,
            ball_trail: self.ball.trail(self.config.trail_length),
            left_score: self.left_score,
            right_score: self.right_score,
            phase: self.phase,
            time_ticks: self.time_ticks,
            events: self.events.clone(),
        }
    }
}
