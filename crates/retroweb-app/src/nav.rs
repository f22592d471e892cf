//! Navigation history: back stack, forward stack, current entry.

/// Back/forward history of visited URLs.
#[derive(Debug, Default)]
pub struct History {
    back_stack: Vec<String>,
    forward_stack: Vec<String>,
    current: Option<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh visit. Pushes the current entry to the back stack
    /// and clears the forward stack.
    pub fn navigate(&mut self, url: &str) {
        if let Some(entry) = self.current.take() {
            self.back_stack.push(entry);
        }
        self.forward_stack.clear();
        self.current = Some(url.to_string());
    }

    /// Step back. Returns the URL to load, or `None` at the start.
    pub fn go_back(&mut self) -> Option<&str> {
        let prev = self.back_stack.pop()?;
        if let Some(current) = self.current.replace(prev) {
            self.forward_stack.push(current);
        }
        self.current.as_deref()
    }

    /// Step forward. Returns the URL to load, or `None` at the end.
    pub fn go_forward(&mut self) -> Option<&str> {
        let next = self.forward_stack.pop()?;
        if let Some(current) = self.current.replace(next) {
            self.back_stack.push(current);
        }
        self.current.as_deref()
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }
}
