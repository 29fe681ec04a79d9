//! Match state and core simulation types
//!
//! Everything a tick reads or writes lives here. The match owns both paddles,
//! the ball and the scores; nothing points back at it.

use glam::Vec2;
use serde::Serialize;

use super::rect::Rect;
use crate::config::{ConfigError, GameConfig};

/// One half of the field, and the player defending it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other half of the field
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Name shown on the scoreboard and the game over banner
    pub fn player_label(self) -> &'static str {
        match self {
            Side::Left => "Player 1",
            Side::Right => "Player 2",
        }
    }
}

/// Vertical paddle intent for a single move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    #[default]
    None,
    Down,
}

impl Direction {
    /// Map a raw axis value; anything other than -1 or +1 means no movement
    pub fn from_axis(axis: i32) -> Self {
        match axis {
            -1 => Direction::Up,
            1 => Direction::Down,
            _ => Direction::None,
        }
    }

    /// Signed multiplier applied to paddle speed (screen y grows downward)
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::None => 0.0,
            Direction::Down => 1.0,
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
    /// Units per tick
    pub speed: f32,
    /// Largest allowed top edge (field height minus paddle height)
    max_y: f32,
}

impl Paddle {
    /// Spawn a paddle for `side`, vertically centered
    pub fn new(side: Side, config: &GameConfig) -> Self {
        let x = match side {
            Side::Left => config.left_paddle_x(),
            Side::Right => config.right_paddle_x(),
        };
        let y = config.field_height / 2.0 - config.paddle_height / 2.0;
        Self {
            rect: Rect::new(x, y, config.paddle_width, config.paddle_height),
            speed: config.paddle_speed,
            max_y: config.paddle_max_y(),
        }
    }

    /// Move one step in `direction`, clamped to the field's vertical bounds
    pub fn slide(&mut self, direction: Direction) {
        let y = self.rect.pos.y + self.speed * direction.sign();
        self.rect.pos.y = y.clamp(0.0, self.max_y);
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    /// Units per tick
    pub vel: Vec2,
    field: Vec2,
}

impl Ball {
    /// Spawn at the field center with the configured starting velocity
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rect: Rect::centered(
                config.field_center(),
                Vec2::splat(config.ball_size),
            ),
            vel: config.ball_velocity,
            field: Vec2::new(config.field_width, config.field_height),
        }
    }

    /// Translate by one tick of velocity, bounce off the top/bottom walls and
    /// report the exit label if the ball reached a side edge: `Right` for the
    /// left edge, `Left` for the right edge. The point goes to the label's
    /// opponent.
    ///
    /// The bounce only flips `vel.y`; the ball is not pushed back inside, so it
    /// can sit past a wall for up to one tick.
    pub fn advance(&mut self) -> Option<Side> {
        self.rect.translate(self.vel);

        if self.touches_wall() {
            self.vel.y = -self.vel.y;
        }

        if self.rect.left() <= 0.0 {
            Some(Side::Right)
        } else if self.rect.right() >= self.field.x {
            Some(Side::Left)
        } else {
            None
        }
    }

    /// True if the ball is at or past the top or bottom wall
    pub fn touches_wall(&self) -> bool {
        self.rect.top() <= 0.0 || self.rect.bottom() >= self.field.y
    }

    /// Reflect horizontally after a paddle hit (no position correction)
    pub fn bounce(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Re-serve from the center: horizontal direction flips, vertical drift is kept
    pub fn reset(&mut self) {
        self.rect.set_center(self.field / 2.0);
        self.vel.x = -self.vel.x;
    }

    /// Where the ball was over the last `len` ticks at its current velocity,
    /// newest first
    pub fn trail(&self, len: usize) -> Vec<Rect> {
        (1..=len)
            .map(|i| self.rect.offset(-self.vel * i as f32))
            .collect()
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchPhase {
    /// Ball in play
    Playing,
    /// A point was scored this tick; play resumes on the next tick
    RoundOver { winner: Side },
    /// A side reached the target score; frozen until restart
    MatchOver { winner: Side },
}

impl MatchPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchPhase::MatchOver { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match *self {
            MatchPhase::Playing => None,
            MatchPhase::RoundOver { winner } | MatchPhase::MatchOver { winner } => Some(winner),
        }
    }
}

/// Things that happened during a tick, for renderers and sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    WallBounce,
    PaddleHit(Side),
    PointScored(Side),
    MatchWon(Side),
    MatchRestarted,
}

/// Complete match state (deterministic)
#[derive(Debug, Clone)]
pub struct MatchState {
    pub config: GameConfig,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub left_score: u32,
    pub right_score: u32,
    pub phase: MatchPhase,
    /// Ticks that ran physics since the match started
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl MatchState {
    /// Start a fresh match. The config is validated first.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    fn fresh(config: GameConfig) -> Self {
        Self {
            left_paddle: Paddle::new(Side::Left, &config),
            right_paddle: Paddle::new(Side::Right, &config),
            ball: Ball::new(&config),
            left_score: 0,
            right_score: 0,
            phase: MatchPhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
            config,
        }
    }

    /// Replace paddles and ball and zero both scores
    pub fn restart(&mut self) {
        let config = self.config.clone();
        *self = Self::fresh(config);
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    pub(crate) fn award_point(&mut self, side: Side) {
        match side {
            Side::Left => self.left_score += 1,
            Side::Right => self.right_score += 1,
        }
    }

    /// The side that has reached the target score, left first
    pub fn leader_at_target(&self) -> Option<Side> {
        if self.left_score >= self.config.max_score {
            Some(Side::Left)
        } else if self.right_score >= self.config.max_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}
