//! Text-field editing: append at end, delete last, confirm.

use retroweb_types::input::KeyCode;

use crate::text_buffer::TextBuffer;

/// An edit a focused text field understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    DeleteLast,
    Confirm,
}

impl Edit {
    /// Map a key to an edit. Keys with no edit meaning return `None` and
    /// fall through to the command table.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        if let Some(ch) = key.printable() {
            return Some(Edit::Insert(ch));
        }
        match key {
            KeyCode::Backspace => Some(Edit::DeleteLast),
            KeyCode::Enter => Some(Edit::Confirm),
            _ => None,
        }
    }

    /// Whether applying this edit would change the buffer.
    pub fn changes(self, buffer: &TextBuffer) -> bool {
        match self {
            Edit::Insert(ch) => buffer.len() + ch.len_utf8() <= buffer.max_len(),
            Edit::DeleteLast => !buffer.is_empty(),
            Edit::Confirm => false,
        }
    }

    /// Apply a buffer-changing edit. `Confirm` leaves the buffer alone.
    pub fn apply(self, buffer: &mut TextBuffer) {
        match self {
            Edit::Insert(ch) => {
                buffer.push(ch);
            },
            Edit::DeleteLast => {
                buffer.delete_last();
            },
            Edit::Confirm => {},
        }
    }

    /// Whether the key is swallowed by the field. Insert and delete are
    /// swallowed even when they change nothing; confirm is not.
    pub fn consumes_key(self) -> bool {
        !matches!(self, Edit::Confirm)
    }
}
