//! Pointer hover tracking.
//!
//! The hover widget is re-resolved lazily: only when the pointer has left
//! the current hover widget, or when there is no hover widget and the
//! pointer has moved. A stationary pointer costs no hit-test.

use retroweb_types::input::MouseCursor;

use crate::widget::{Widget, WidgetRef};

/// A change in hover identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverChange {
    pub from: Option<WidgetRef>,
    pub to: Option<WidgetRef>,
}

/// Hover state carried between ticks.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    hover: Option<WidgetRef>,
    last_pointer: Option<(i32, i32)>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<WidgetRef> {
        self.hover
    }

    /// Feed one pointer sample.
    ///
    /// `is_over` re-tests the current hover widget; `pick` runs a full
    /// hit-test and is only called when needed. Returns a change only if
    /// the hover widget's identity differs from before.
    pub fn update(
        &mut self,
        x: i32,
        y: i32,
        is_over: impl FnOnce(WidgetRef) -> bool,
        pick: impl FnOnce() -> Option<WidgetRef>,
    ) -> Option<HoverChange> {
        let previous = self.hover;
        let moved = self.last_pointer != Some((x, y));

        match self.hover {
            Some(widget) if !is_over(widget) => self.hover = pick(),
            None if moved => self.hover = pick(),
            _ => {},
        }
        self.last_pointer = Some((x, y));

        (self.hover != previous).then_some(HoverChange {
            from: previous,
            to: self.hover,
        })
    }

    /// Drop the hover reference if it points into the page.
    ///
    /// The pointer position is forgotten too, so the next sample runs a
    /// fresh hit-test against the new page.
    pub fn forget_page(&mut self) {
        if matches!(self.hover, Some(WidgetRef::Page(_))) {
            self.hover = None;
            self.last_pointer = None;
        }
    }
}

/// Status line and cursor feedback for a newly hovered widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverFeedback {
    /// Show the link target and a hand cursor.
    Link(String),
    /// Text-select cursor; the status line is left alone.
    TextField,
    /// Clear the status line and show the plain pointer.
    Plain,
}

impl HoverFeedback {
    pub fn for_widget(widget: Option<&Widget>) -> Self {
        match widget {
            Some(w) => match w.link_url() {
                Some(url) => HoverFeedback::Link(url.to_string()),
                None if w.is_text_field() => HoverFeedback::TextField,
                None => HoverFeedback::Plain,
            },
            None => HoverFeedback::Plain,
        }
    }

    pub fn cursor(&self) -> MouseCursor {
        match self {
            HoverFeedback::Link(_) => MouseCursor::Hand,
            HoverFeedback::TextField => MouseCursor::TextSelect,
            HoverFeedback::Plain => MouseCursor::Pointer,
        }
    }
}
