//! Game configuration
//!
//! Field geometry, pacing and match rules, passed explicitly into the
//! simulation and the session. Defaults mirror [`crate::consts`].

use std::time::Duration;

use glam::Vec2;

use crate::consts::*;

/// Reasons a [`GameConfig`] cannot drive a match
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,

    #[error("target score must be at least 1")]
    ZeroTargetScore,

    #[error("{name} ({size}) does not fit in the field ({field})")]
    DoesNotFit {
        name: &'static str,
        size: f32,
        field: f32,
    },

    #[error("paddles overlap: left paddle ends at {left_edge}, right paddle starts at {right_edge}")]
    PaddlesOverlap { left_edge: f32, right_edge: f32 },
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    /// Ticks per second
    pub tick_rate: u32,
    /// First side to reach this score wins the match
    pub max_score: u32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Units moved per tick while an intent is held
    pub paddle_speed: f32,
    /// Distance from a paddle's outer face to its side of the field
    pub paddle_inset: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Initial velocity (units per tick)
    pub ball_velocity: Vec2,
    /// Trail ghosts reported to renderers
    pub trail_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            tick_rate: TICK_RATE,
            max_score: MAX_SCORE,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,

            ball_size: BALL_SIZE,
            ball_velocity: Vec2::new(BALL_START_VX, BALL_START_VY),
            trail_length: TRAIL_LENGTH,
        }
    }
}

impl GameConfig {
    /// Check that every dimension is usable and the two paddles fit side by side
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("field width", self.field_width),
            ("field height", self.field_height),
            ("paddle width", self.paddle_width),
            ("paddle height", self.paddle_height),
            ("ball size", self.ball_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if !self.paddle_speed.is_finite() || self.paddle_speed < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "paddle speed",
                value: self.paddle_speed,
            });
        }
        if !self.paddle_inset.is_finite() || self.paddle_inset < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "paddle inset",
                value: self.paddle_inset,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.max_score == 0 {
            return Err(ConfigError::ZeroTargetScore);
        }
        if self.paddle_height > self.field_height {
            return Err(ConfigError::DoesNotFit {
                name: "paddle height",
                size: self.paddle_height,
                field: self.field_height,
            });
        }
        if self.ball_size >= self.field_height.min(self.field_width) {
            return Err(ConfigError::DoesNotFit {
                name: "ball size",
                size: self.ball_size,
                field: self.field_height.min(self.field_width),
            });
        }

        let left_edge = self.left_paddle_x() + self.paddle_width;
        let right_edge = self.right_paddle_x();
        if left_edge >= right_edge {
            return Err(ConfigError::PaddlesOverlap {
                left_edge,
                right_edge,
            });
        }

        Ok(())
    }

    /// Wall-clock duration of one tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// X coordinate of the left paddle's left edge
    pub fn left_paddle_x(&self) -> f32 {
        self.paddle_inset
    }

    /// X coordinate of the right paddle's left edge
    pub fn right_paddle_x(&self) -> f32 {
        self.field_width - self.paddle_inset - self.paddle_width
    }

    /// Lowest allowed paddle top (paddles clamp to [0, this])
    pub fn paddle_max_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }
}
