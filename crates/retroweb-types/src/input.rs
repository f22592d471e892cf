//! Platform-agnostic input types.
//!
//! Every host maps its native keyboard and mouse events to these types.
//! The interaction engine never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A discrete key press taken from the host's key queue.
///
/// Pointer button clicks arrive through the same queue as keys so that
/// a click is ordered correctly against surrounding key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Left pointer button pressed.
    MouseLeft,
    Escape,
    Enter,
    Backspace,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
    /// Ctrl+I: invert the screen.
    CtrlI,
    /// Ctrl+L: focus the address bar.
    CtrlL,
    /// A character key.
    Char(char),
}

impl KeyCode {
    /// The character to insert into a text field, if this key is in the
    /// printable ASCII range (32..128).
    pub fn printable(self) -> Option<char> {
        match self {
            KeyCode::Char(ch) if (32..128).contains(&(ch as u32)) => Some(ch),
            _ => None,
        }
    }
}

/// Pointer button bit for the left button in [`PointerState::buttons`].
pub const BUTTON_LEFT: u8 = 1;

/// A sample of the pointer position and button state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    pub x: i32,
    pub y: i32,
    /// Bitmask of held buttons (`BUTTON_LEFT`).
    pub buttons: u8,
}

impl PointerState {
    pub const fn at(x: i32, y: i32) -> Self {
        Self { x, y, buttons: 0 }
    }

    pub fn left_down(&self) -> bool {
        self.buttons & BUTTON_LEFT != 0
    }
}

/// Mouse cursor shapes the host can display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseCursor {
    #[default]
    Pointer,
    Hand,
    TextSelect,
}
