//! Renderer seam
//!
//! The session hands each frame's [`Snapshot`] to a [`Renderer`]. Drawing
//! pixels is left to the host; the renderers here are headless.

use std::io::Write;

use crate::sim::{GameEvent, MatchPhase, Side, Snapshot};

/// Prompt shown under the game over banner
pub const RESTART_PROMPT: &str = "Press R to Restart or Q to Quit";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Consumes one snapshot per tick
pub trait Renderer {
    fn render(&mut self, frame: &Snapshot) -> Result<(), RenderError>;
}

/// Scoreboard text for the left and right corners
pub fn score_labels(frame: &Snapshot) -> (String, String) {
    (
        format!("{}: {}", Side::Left.player_label(), frame.left_score),
        format!("{}: {}", Side::Right.player_label(), frame.right_score),
    )
}

/// Banner text for a finished match
pub fn winner_banner(winner: Side) -> String {
    format!("{} Wins!", winner.player_label())
}

/// Logs scoring and match results instead of drawing
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Snapshot) -> Result<(), RenderError> {
        self.frames += 1;

        for event in &frame.events {
            match event {
                GameEvent::PointScored(_) => {
                    let (left, right) = score_labels(frame);
                    log::info!("{}  |  {}", left, right);
                }
                GameEvent::MatchWon(winner) => {
                    log::info!("{}", winner_banner(*winner));
                    log::info!("{}", RESTART_PROMPT);
                }
                GameEvent::MatchRestarted => log::info!("New match"),
                GameEvent::WallBounce | GameEvent::PaddleHit(_) => {
                    log::trace!("{:?} at tick {}", event, frame.time_ticks);
                }
            }
        }

        if let MatchPhase::MatchOver { .. } = frame.phase {
            log::trace!("Frame {} frozen on game over", self.frames);
        }

        Ok(())
    }
}

/// Writes each snapshot as one JSON object per line
pub struct JsonLinesRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, frame: &Snapshot) -> Result<(), RenderError> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}
