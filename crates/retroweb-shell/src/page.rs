//! The current document's widget set, as seen by the interaction engine.
//!
//! The page is owned by the application. The engine reads it, and mutates
//! only the buffer of the text field that has keyboard focus.

use crate::widget::{FormData, FormId, Widget};

/// A laid-out page: its URL, widgets in document order, and forms.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub url: String,
    pub widgets: Vec<Widget>,
    pub forms: Vec<FormData>,
    /// Total content height in pixels.
    pub height: i32,
}

impl Page {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Self::default()
        }
    }

    /// Add a form and return its handle.
    pub fn add_form(&mut self, form: FormData) -> FormId {
        self.forms.push(form);
        FormId(self.forms.len() - 1)
    }

    /// Add a widget and return its index.
    pub fn add_widget(&mut self, widget: Widget) -> usize {
        self.height = self.height.max(widget.rect.bottom());
        self.widgets.push(widget);
        self.widgets.len() - 1
    }

    pub fn widget(&self, index: usize) -> Option<&Widget> {
        self.widgets.get(index)
    }

    pub fn widget_mut(&mut self, index: usize) -> Option<&mut Widget> {
        self.widgets.get_mut(index)
    }

    pub fn form(&self, id: FormId) -> Option<&FormData> {
        self.forms.get(id.0)
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Topmost widget containing the point, in page coordinates.
    ///
    /// Later widgets paint over earlier ones, so the search runs back to
    /// front.
    pub fn widget_at(&self, x: i32, y: i32) -> Option<usize> {
        self.widgets.iter().rposition(|w| w.contains(x, y))
    }
}
