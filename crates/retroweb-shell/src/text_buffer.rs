//! Fixed-capacity text buffer backing a text field.

/// An owned string with a hard capacity.
///
/// `capacity` is the declared buffer size and includes one slot reserved
/// for a terminator, so the content never exceeds `capacity - 1` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    capacity: usize,
}

impl TextBuffer {
    /// Create an empty buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            capacity,
        }
    }

    /// Create a buffer holding `initial`, truncated to fit.
    pub fn with_text(capacity: usize, initial: &str) -> Self {
        let mut buf = Self::with_capacity(capacity);
        buf.set(initial);
        buf
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Declared capacity, terminator slot included.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Longest content the buffer can hold.
    pub fn max_len(&self) -> usize {
        self.capacity.saturating_sub(1)
    }

    /// Append a character at the end. Returns `false` and leaves the
    /// buffer untouched if it would not fit.
    pub fn push(&mut self, ch: char) -> bool {
        if self.text.len() + ch.len_utf8() > self.max_len() {
            return false;
        }
        self.text.push(ch);
        true
    }

    /// Remove the last character, if any.
    pub fn delete_last(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Replace the content, truncating at a character boundary so the
    /// capacity invariant holds.
    pub fn set(&mut self, text: &str) {
        let mut end = self.max_len().min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        self.text.clear();
        self.text.push_str(&text[..end]);
    }
}
