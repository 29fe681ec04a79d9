//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::ball_paddle_contact;
pub use rect::Rect;
pub use snapshot::Snapshot;
pub use state::{Ball, Direction, GameEvent, MatchPhase, MatchState, Paddle, Side};
pub use tick::{TickInput, tick};
