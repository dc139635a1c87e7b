//! Keyboard state: which direction keys are held, and discrete commands.
//!
//! Input model: a `last_seen` map records when each key last produced a
//! press or repeat event.  A key counts as held while that timestamp is
//! fresher than `HOLD_WINDOW`.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol and friends): proper
//!   `Press` / `Repeat` / `Release` events, so keys drop out on release.
//! * **Classic terminals**: only `Press` events, with OS key-repeat showing
//!   up as repeated presses.  Keys expire after `HOLD_WINDOW` of silence.

use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Steering;

/// Covers the OS key-repeat interval (≥ 15 Hz) with some slack.
pub const HOLD_WINDOW: Duration = Duration::from_millis(135);

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Fire,
    Quit,
}

#[derive(Debug, Default)]
pub struct InputState {
    last_seen: HashMap<KeyCode, Duration>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event arriving at `now`; returns the one-shot command it
    /// triggers, if any.  Fire only triggers on a fresh press, not a repeat.
    pub fn handle_key(&mut self, key: KeyEvent, now: Duration) -> Option<Command> {
        match key.kind {
            KeyEventKind::Press => {
                self.last_seen.insert(key.code, now);
                match key.code {
                    KeyCode::Char(' ') => Some(Command::Fire),
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(Command::Quit)
                    }
                    _ => None,
                }
            }
            KeyEventKind::Repeat => {
                self.last_seen.insert(key.code, now);
                None
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&key.code);
                None
            }
        }
    }

    pub fn is_held(&self, key: &KeyCode, now: Duration) -> bool {
        self.last_seen
            .get(key)
            .map(|&last| now.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn steering(&self, now: Duration) -> Steering {
        Steering {
            left: LEFT_KEYS.iter().any(|k| self.is_held(k, now)),
            right: RIGHT_KEYS.iter().any(|k| self.is_held(k, now)),
        }
    }
}
