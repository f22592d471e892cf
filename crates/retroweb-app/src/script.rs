//! Scripted input read from TOML.
//!
//! ```toml
//! [[tick]]
//! pointer = [100, 5]
//! keys = [{ Char = "n" }]
//! buttons = 1
//! ```
//!
//! `buttons` is the held-button mask for the tick. Pressing the left
//! button (up on the previous tick, down on this one) queues a
//! `MouseLeft` click ahead of the tick's keys.

use std::collections::VecDeque;
use std::path::Path;

use retroweb_shell::InputBackend;
use retroweb_types::error::{Result, RetrowebError};
use retroweb_types::input::{KeyCode, MouseCursor, PointerState};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
struct Script {
    #[serde(default)]
    tick: Vec<Tick>,
}

/// One engine tick: optional pointer move, then queued keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tick {
    #[serde(default)]
    pub pointer: Option<[i32; 2]>,
    #[serde(default)]
    pub keys: Vec<KeyCode>,
    /// Held-button mask; omitted means unchanged.
    #[serde(default)]
    pub buttons: Option<u8>,
}

/// An input device that replays a script one tick at a time.
pub struct ScriptedInput {
    ticks: VecDeque<Tick>,
    pointer: PointerState,
    keys: VecDeque<KeyCode>,
    cursor: MouseCursor,
    pointer_visible: bool,
}

impl ScriptedInput {
    pub fn from_ticks(ticks: Vec<Tick>) -> Self {
        Self {
            ticks: ticks.into(),
            pointer: PointerState::default(),
            keys: VecDeque::new(),
            cursor: MouseCursor::default(),
            pointer_visible: true,
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let script: Script =
            toml::from_str(source).map_err(|e| RetrowebError::Script(e.to_string()))?;
        if script.tick.is_empty() {
            return Err(RetrowebError::Script("script has no ticks".into()));
        }
        Ok(Self::from_ticks(script.tick))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let input = Self::from_toml_str(&source)
            .map_err(|e| RetrowebError::Script(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded {} ticks from {}", input.remaining(), path.display());
        Ok(input)
    }

    /// Load the next tick. Returns `false` once the script is exhausted.
    ///
    /// Keys left over from the previous tick are dropped.
    pub fn advance(&mut self) -> bool {
        let Some(tick) = self.ticks.pop_front() else {
            return false;
        };
        if let Some([x, y]) = tick.pointer {
            self.pointer.x = x;
            self.pointer.y = y;
        }
        self.keys = tick.keys.into();
        if let Some(buttons) = tick.buttons {
            let was_down = self.pointer.left_down();
            self.pointer.buttons = buttons;
            if !was_down && self.pointer.left_down() {
                self.keys.push_front(KeyCode::MouseLeft);
            }
        }
        true
    }

    pub fn remaining(&self) -> usize {
        self.ticks.len()
    }

    pub fn cursor(&self) -> MouseCursor {
        self.cursor
    }

    pub fn pointer_visible(&self) -> bool {
        self.pointer_visible
    }
}

impl InputBackend for ScriptedInput {
    fn pointer(&mut self) -> PointerState {
        self.pointer
    }

    fn next_key(&mut self) -> Option<KeyCode> {
        self.keys.pop_front()
    }

    fn set_cursor(&mut self, cursor: MouseCursor) {
        log::trace!("cursor -> {cursor:?}");
        self.cursor = cursor;
    }

    fn hide_pointer(&mut self) {
        self.pointer_visible = false;
    }

    fn show_pointer(&mut self) {
        self.pointer_visible = true;
    }
}
