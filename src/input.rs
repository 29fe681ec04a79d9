//! Input mapping
//!
//! Device polling belongs to whatever hosts the game. This module only turns
//! key names into per-tick control intents:
//! - W / S move the left paddle
//! - Up / Down move the right paddle
//! - R restarts after a match, Q quits

use std::collections::{HashSet, VecDeque};
use std::io::BufRead;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    R,
    Q,
}

impl Key {
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::W => "w",
            Key::S => "s",
            Key::Up => "up",
            Key::Down => "down",
            Key::R => "r",
            Key::Q => "q",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "w" => Some(Key::W),
            "s" => Some(Key::S),
            "up" | "arrowup" => Some(Key::Up),
            "down" | "arrowdown" => Some(Key::Down),
            "r" => Some(Key::R),
            "q" => Some(Key::Q),
            _ => None,
        }
    }
}

/// Keys held during one tick
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse whitespace-separated key names; unknown names are skipped
    pub fn parse(line: &str) -> Self {
        let mut state = Self::new();
        for name in line.split_whitespace() {
            match Key::from_name(name) {
                Some(key) => state.press(key),
                None => log::debug!("Ignoring unknown key {:?}", name),
            }
        }
        state
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Control intents for the current set of held keys
    pub fn to_input(&self) -> TickInput {
        TickInput {
            left_up: self.is_held(Key::W),
            left_down: self.is_held(Key::S),
            right_up: self.is_held(Key::Up),
            right_down: self.is_held(Key::Down),
            restart: self.is_held(Key::R),
            quit: self.is_held(Key::Q),
        }
    }
}

/// Supplies the control intents for each tick
pub trait InputSource {
    /// Intents for the next tick. Sources with nothing to report return
    /// `TickInput::default()`.
    fn poll(&mut self) -> TickInput;
}

/// Replays a fixed list of intents, then asks to quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
        }
    }

    /// `ticks` ticks with no keys held
    pub fn idle(ticks: usize) -> Self {
        Self::new(std::iter::repeat_n(TickInput::default(), ticks))
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        self.queue.pop_front().unwrap_or(TickInput {
            quit: true,
            ..Default::default()
        })
    }
}

/// Reads one line of held key names per tick; end of input quits
pub struct LineInput<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn poll(&mut self) -> TickInput {
        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => {
                log::info!("Input exhausted, quitting");
                TickInput {
                    quit: true,
                    ..Default::default()
                }
            }
            Ok(_) => KeyState::parse(&self.line).to_input(),
            Err(e) => {
                log::warn!("Input read failed ({}), quitting", e);
                TickInput {
                    quit: true,
                    ..Default::default()
                }
            }
        }
    }
}
