//! Session driver
//!
//! Polls input, advances the match one tick, hands the snapshot to the
//! renderer and waits for the next tick deadline. Quit ends the loop in any
//! phase; everything else is the match state machine's business.

use std::time::{Duration, Instant};

use crate::config::{ConfigError, GameConfig};
use crate::input::InputSource;
use crate::render::{RenderError, Renderer};
use crate::sim::{GameEvent, MatchPhase, MatchState, TickInput, tick};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid game config: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Whether the loop keeps going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// How ticks are spaced in wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep so ticks start one interval apart
    Fixed(Duration),
    /// Run ticks back to back (headless runs and tests)
    Unthrottled,
}

/// Sleeps between ticks to hold a fixed rate.
///
/// If the loop falls more than one tick behind, the schedule restarts from
/// now rather than bursting through the missed ticks.
#[derive(Debug)]
pub struct FramePacer {
    pacing: Pacing,
    next_deadline: Option<Instant>,
    slips: u64,
}

impl FramePacer {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            next_deadline: None,
            slips: 0,
        }
    }

    /// Number of times the schedule had to be reset
    pub fn slips(&self) -> u64 {
        self.slips
    }

    /// Block until the next tick is due
    pub fn wait(&mut self) {
        let Pacing::Fixed(interval) = self.pacing else {
            return;
        };

        let now = Instant::now();
        let deadline = *self.next_deadline.get_or_insert(now + interval);

        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + interval);
        } else if now - deadline > interval {
            self.slips += 1;
            log::debug!(
                "Frame pacing slipped by {:?}, resynchronising",
                now - deadline
            );
            self.next_deadline = Some(now + interval);
        } else {
            self.next_deadline = Some(deadline + interval);
        }
    }
}

/// Totals reported when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Steps taken, including frozen game over ticks
    pub ticks: u64,
    /// Matches that reached the target score
    pub matches_completed: u32,
    pub final_phase: MatchPhase,
}

/// Ties an input source, the match and a renderer together
pub struct Session<I, R> {
    state: MatchState,
    input: I,
    renderer: R,
    pacer: FramePacer,
    ticks: u64,
    matches_completed: u32,
}

impl<I: InputSource, R: Renderer> Session<I, R> {
    /// Build a session paced at the config's tick rate
    pub fn new(config: GameConfig, input: I, renderer: R) -> Result<Self, SessionError> {
        let pacing = Pacing::Fixed(config.tick_duration());
        let state = MatchState::new(config)?;
        log::info!(
            "Session ready: {}x{} field, first to {}",
            state.config.field_width,
            state.config.field_height,
            state.config.max_score
        );
        Ok(Self {
            state,
            input,
            renderer,
            pacer: FramePacer::new(pacing),
            ticks: 0,
            matches_completed: 0,
        })
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacer = FramePacer::new(pacing);
        self
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Apply one tick of input. Quit wins over everything else.
    pub fn step(&mut self, input: &TickInput) -> Control {
        if input.quit {
            log::info!("Quit requested after {} ticks", self.ticks);
            return Control::Quit;
        }

        tick(&mut self.state, input);
        self.ticks += 1;
        if self
            .state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::MatchWon(_)))
        {
            self.matches_completed += 1;
        }

        Control::Continue
    }

    /// Run until the input source asks to quit
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        loop {
            let input = self.input.poll();
            if self.step(&input) == Control::Quit {
                break;
            }
            self.renderer.render(&self.state.snapshot())?;
            self.pacer.wait();
        }

        if self.pacer.slips() > 0 {
            log::debug!("Frame pacing slipped {} times", self.pacer.slips());
        }

        Ok(self.summary())
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            ticks: self.ticks,
            matches_completed: self.matches_completed,
            final_phase: self.state.phase,
        }
    }
}
