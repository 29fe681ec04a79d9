//! Neon Pong - A two-player paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, match state)
//! - `config`: Field dimensions, tick rate and match rules passed to the simulation
//! - `input`: Key names to control intents
//! - `session`: Fixed-rate driver loop between input, simulation and renderer
//! - `render`: Renderer seam plus headless renderers (log, JSON lines)

pub mod config;
pub mod input;
pub mod render;
pub mod session;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use input::{InputSource, Key, KeyState};
pub use render::{JsonLinesRenderer, LogRenderer, Renderer};
pub use session::{Control, FramePacer, Pacing, Session, SessionError, SessionSummary};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical units, y grows downward)
    pub const FIELD_WIDTH: f32 = 900.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Fixed simulation rate (one tick per rendered frame)
    pub const TICK_RATE: u32 = 60;

    /// Points needed to win a match
    pub const MAX_SCORE: u32 = 5;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Units per tick
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Gap between a paddle and its side of the field
    pub const PADDLE_INSET: f32 = 30.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    /// Units per tick on each axis
    pub const BALL_START_VX: f32 = 6.0;
    pub const BALL_START_VY: f32 = 6.0;

    /// Number of trail ghosts drawn behind the ball
    pub const TRAIL_LENGTH: usize = 4;
}
