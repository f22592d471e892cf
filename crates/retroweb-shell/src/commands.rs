//! Fixed key-to-command table for keys not consumed by a focused field.

use retroweb_types::config::ShellConfig;
use retroweb_types::input::KeyCode;

/// Scroll steps that are coalesced into one scroll per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStep {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
}

impl ScrollStep {
    /// Signed pixel delta for this step.
    pub fn delta(self, config: &ShellConfig, window_height: i32) -> i32 {
        match self {
            ScrollStep::LineUp => -config.line_scroll,
            ScrollStep::LineDown => config.line_scroll,
            ScrollStep::PageUp => -config.page_scroll(window_height),
            ScrollStep::PageDown => config.page_scroll(window_height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Click,
    Close,
    Scroll(ScrollStep),
    /// Scroll by minus the full page height, applied immediately.
    ScrollToTop,
    /// Scroll by the full page height, applied immediately.
    ScrollToBottom,
    OpenBookmark,
    HistoryBack,
    InvertScreen,
    FocusAddressBar,
}

/// Look up the command bound to a key. Unbound keys return `None`.
pub fn command_for(key: KeyCode) -> Option<Command> {
    let command = match key {
        KeyCode::MouseLeft => Command::Click,
        KeyCode::Escape => Command::Close,
        KeyCode::ArrowUp => Command::Scroll(ScrollStep::LineUp),
        KeyCode::ArrowDown => Command::Scroll(ScrollStep::LineDown),
        KeyCode::PageUp => Command::Scroll(ScrollStep::PageUp),
        KeyCode::PageDown => Command::Scroll(ScrollStep::PageDown),
        KeyCode::Home => Command::ScrollToTop,
        KeyCode::End => Command::ScrollToBottom,
        KeyCode::Char('n') => Command::OpenBookmark,
        KeyCode::Backspace => Command::HistoryBack,
        KeyCode::CtrlI => Command::InvertScreen,
        KeyCode::CtrlL => Command::FocusAddressBar,
        KeyCode::Enter | KeyCode::Char(_) => return None,
    };
    Some(command)
}
