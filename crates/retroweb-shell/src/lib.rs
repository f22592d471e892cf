//! RetroWeb interaction engine.
//!
//! Owns the browser chrome (address bar, scroll bar, back and forward
//! buttons) and turns pointer samples and key presses into hover
//! feedback, focus changes, text edits, form submissions, scrolling and
//! navigation requests. Rendering, layout and networking stay with the
//! host, which implements the traits in [`backend`] and drives
//! [`Interface::update`] once per tick.

pub mod backend;
pub mod chrome;
pub mod commands;
pub mod editor;
pub mod form;
pub mod hover;
pub mod interface;
pub mod page;
pub mod text_buffer;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;

// -----------------------------------------------------------------------
// Public re-exports
// -----------------------------------------------------------------------

pub use backend::{Application, InputBackend, PageRenderer, VideoBackend};
pub use chrome::{ChromeSlot, ChromeWidgets};
pub use interface::Interface;
pub use page::Page;
pub use text_buffer::TextBuffer;
pub use widget::{FormData, FormId, FormMethod, Widget, WidgetKind, WidgetRef};
