//! Widget model: passive data describing chrome and page widgets.

use retroweb_types::geometry::Rect;

use crate::chrome::ChromeSlot;
use crate::text_buffer::TextBuffer;

/// Handle to a form in the current page's form list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(pub usize);

/// A reference to a widget that does not borrow it.
///
/// Chrome widgets are named by slot; page widgets by their index in the
/// page's widget list, which must be re-validated against the live page
/// before each use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetRef {
    Chrome(ChromeSlot),
    Page(usize),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    Underline,
}

/// Presentation hints passed through to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetStyle {
    pub font: FontStyle,
}

impl WidgetStyle {
    pub const fn new(font: FontStyle) -> Self {
        Self { font }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMethod {
    #[default]
    Get,
    Post,
}

/// Submission target of an HTML form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub method: FormMethod,
    /// Absolute or relative URL the form submits to.
    pub action: String,
}

impl FormData {
    pub fn get(action: &str) -> Self {
        Self {
            method: FormMethod::Get,
            action: action.to_string(),
        }
    }
}

/// Payload of an editable text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldData {
    pub buffer: TextBuffer,
    /// Parameter name used when the owning form is submitted.
    pub name: Option<String>,
    pub form: Option<FormId>,
}

impl TextFieldData {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: TextBuffer::with_capacity(capacity),
            name: None,
            form: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonData {
    pub label: String,
    pub form: Option<FormId>,
}

/// Type tag plus type-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    TextField(TextFieldData),
    Button(ButtonData),
    ScrollBar,
    /// A run of page text.
    Text(String),
    Image,
}

/// A rectangle on screen with a kind and a style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub rect: Rect,
    pub style: WidgetStyle,
    pub kind: WidgetKind,
    /// Link target (page widgets only), possibly relative.
    pub link_url: Option<String>,
}

impl Widget {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            rect: Rect::default(),
            style: WidgetStyle::default(),
            kind,
            link_url: None,
        }
    }

    pub fn text_field(capacity: usize) -> Self {
        Self::new(WidgetKind::TextField(TextFieldData::new(capacity)))
    }

    pub fn button(label: &str) -> Self {
        Self::new(WidgetKind::Button(ButtonData {
            label: label.to_string(),
            form: None,
        }))
    }

    pub fn text(text: &str) -> Self {
        Self::new(WidgetKind::Text(text.to_string()))
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn with_style(mut self, style: WidgetStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_link(mut self, url: &str) -> Self {
        self.link_url = Some(url.to_string());
        self
    }

    /// Bind a text field or button to a form. No-op for other kinds.
    pub fn with_form(mut self, form: FormId) -> Self {
        match &mut self.kind {
            WidgetKind::TextField(field) => field.form = Some(form),
            WidgetKind::Button(button) => button.form = Some(form),
            _ => {},
        }
        self
    }

    /// Name a text field for form encoding. No-op for other kinds.
    pub fn with_name(mut self, name: &str) -> Self {
        if let WidgetKind::TextField(field) = &mut self.kind {
            field.name = Some(name.to_string());
        }
        self
    }

    /// Seed a text field's buffer. No-op for other kinds.
    pub fn with_value(mut self, value: &str) -> Self {
        if let WidgetKind::TextField(field) = &mut self.kind {
            field.buffer.set(value);
        }
        self
    }

    pub fn link_url(&self) -> Option<&str> {
        self.link_url.as_deref()
    }

    pub fn is_text_field(&self) -> bool {
        matches!(self.kind, WidgetKind::TextField(_))
    }

    pub fn text_field_data(&self) -> Option<&TextFieldData> {
        match &self.kind {
            WidgetKind::TextField(field) => Some(field),
            _ => None,
        }
    }

    pub fn text_field_data_mut(&mut self) -> Option<&mut TextFieldData> {
        match &mut self.kind {
            WidgetKind::TextField(field) => Some(field),
            _ => None,
        }
    }

    pub fn button_data(&self) -> Option<&ButtonData> {
        match &self.kind {
            WidgetKind::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains(x, y)
    }
}
