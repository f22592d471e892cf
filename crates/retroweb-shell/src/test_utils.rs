//! Shared test utilities for the interaction engine.
//!
//! Provides recording mocks for every collaborator trait so tests can
//! assert on the exact sequence of calls the engine makes.

use std::collections::VecDeque;

use retroweb_types::geometry::Rect;
use retroweb_types::input::{KeyCode, MouseCursor, PointerState};
use url::Url;

use crate::backend::{Application, InputBackend, PageRenderer, VideoBackend};
use crate::chrome::{ChromeSlot, ChromeWidgets};
use crate::page::Page;
use crate::widget::{Widget, WidgetKind};

pub const SCREEN_WIDTH: i32 = 640;
pub const WINDOW_TOP: i32 = 24;
pub const WINDOW_HEIGHT: i32 = 456;

/// Lay the chrome out along the top edge with the scroll bar on the right.
pub fn arrange(chrome: &mut ChromeWidgets) {
    chrome.set_rect(ChromeSlot::BackButton, Rect::new(0, 0, 20, 20));
    chrome.set_rect(ChromeSlot::ForwardButton, Rect::new(20, 0, 20, 20));
    chrome.set_rect(ChromeSlot::AddressBar, Rect::new(40, 0, 580, 20));
    chrome.set_rect(
        ChromeSlot::ScrollBar,
        Rect::new(SCREEN_WIDTH - 20, WINDOW_TOP, 20, WINDOW_HEIGHT),
    );
}

pub fn arranged_chrome() -> ChromeWidgets {
    let mut chrome = ChromeWidgets::new(64);
    arrange(&mut chrome);
    chrome
}

/// A short text description of a widget's visible content.
fn describe(widget: &Widget) -> String {
    match &widget.kind {
        WidgetKind::TextField(field) => field.buffer.as_str().to_string(),
        WidgetKind::Button(button) => button.label.clone(),
        WidgetKind::ScrollBar => "scrollbar".to_string(),
        WidgetKind::Text(text) => text.clone(),
        WidgetKind::Image => "image".to_string(),
    }
}

// -------------------------------------------------------------------
// Input
// -------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCall {
    SetCursor(MouseCursor),
    HidePointer,
    ShowPointer,
}

#[derive(Default)]
pub struct MockInput {
    pub pointer: PointerState,
    pub keys: VecDeque<KeyCode>,
    pub calls: Vec<InputCall>,
    pub pointer_samples: usize,
}

impl MockInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.pointer.x = x;
        self.pointer.y = y;
    }

    pub fn press(&mut self, key: KeyCode) {
        self.keys.push_back(key);
    }

    pub fn type_text(&mut self, text: &str) {
        self.keys.extend(text.chars().map(KeyCode::Char));
    }

    pub fn cursors(&self) -> Vec<MouseCursor> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                InputCall::SetCursor(cursor) => Some(*cursor),
                _ => None,
            })
            .collect()
    }
}

impl InputBackend for MockInput {
    fn pointer(&mut self) -> PointerState {
        self.pointer_samples += 1;
        self.pointer
    }

    fn next_key(&mut self) -> Option<KeyCode> {
        self.keys.pop_front()
    }

    fn set_cursor(&mut self, cursor: MouseCursor) {
        self.calls.push(InputCall::SetCursor(cursor));
    }

    fn hide_pointer(&mut self) {
        self.calls.push(InputCall::HidePointer);
    }

    fn show_pointer(&mut self) {
        self.calls.push(InputCall::ShowPointer);
    }
}

// -------------------------------------------------------------------
// Video
// -------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoCall {
    HLine { x: i32, y: i32, len: i32 },
    ClearRect(Rect),
    InvertScreen,
    ArrangeChrome,
}

#[derive(Default)]
pub struct MockVideo {
    pub calls: Vec<VideoCall>,
}

impl MockVideo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VideoBackend for MockVideo {
    fn screen_width(&self) -> i32 {
        SCREEN_WIDTH
    }

    fn window_top(&self) -> i32 {
        WINDOW_TOP
    }

    fn window_height(&self) -> i32 {
        WINDOW_HEIGHT
    }

    fn hline(&mut self, x: i32, y: i32, len: i32) {
        self.calls.push(VideoCall::HLine { x, y, len });
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.calls.push(VideoCall::ClearRect(rect));
    }

    fn invert_screen(&mut self) {
        self.calls.push(VideoCall::InvertScreen);
    }

    fn arrange_chrome(&mut self, chrome: &mut ChromeWidgets) {
        self.calls.push(VideoCall::ArrangeChrome);
        arrange(chrome);
    }
}

// -------------------------------------------------------------------
// Application
// -------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCall {
    /// Chrome widget rendered, with its visible content at that moment.
    RenderWidget(String),
    /// Page widget rendered, with its visible content at that moment.
    RenderPageWidget(usize, String),
    SetStatus(String),
    Scroll(i32),
    OpenUrl(String),
    PreviousPage,
    NextPage,
    Close,
}

/// An application whose page is laid out below the chrome and scrolled
/// by `scroll_offset`.
pub struct MockApp {
    pub page: Page,
    pub scroll_offset: i32,
    pub calls: Vec<AppCall>,
}

impl MockApp {
    pub fn new(url: &str) -> Self {
        Self {
            page: Page::new(url),
            scroll_offset: 0,
            calls: Vec::new(),
        }
    }

    pub fn navigations(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                AppCall::OpenUrl(url) => Some(url.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn scrolls(&self) -> Vec<i32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                AppCall::Scroll(delta) => Some(*delta),
                _ => None,
            })
            .collect()
    }

    pub fn statuses(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                AppCall::SetStatus(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl PageRenderer for MockApp {
    fn render_widget(&mut self, widget: &Widget) {
        self.calls.push(AppCall::RenderWidget(describe(widget)));
    }

    fn render_page_widget(&mut self, index: usize) {
        if let Some(widget) = self.page.widget(index) {
            let seen = describe(widget);
            self.calls.push(AppCall::RenderPageWidget(index, seen));
        }
    }

    fn set_status(&mut self, text: &str) {
        self.calls.push(AppCall::SetStatus(text.to_string()));
    }

    fn pick_page_widget(&self, x: i32, y: i32) -> Option<usize> {
        self.page.widget_at(x, y + self.scroll_offset)
    }

    fn is_over_page_widget(&self, index: usize, x: i32, y: i32) -> bool {
        self.page
            .widget(index)
            .is_some_and(|w| w.contains(x, y + self.scroll_offset))
    }

    fn scroll(&mut self, delta: i32) {
        self.calls.push(AppCall::Scroll(delta));
    }
}

impl Application for MockApp {
    fn page(&self) -> &Page {
        &self.page
    }

    fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    fn resolve_url(&self, href: &str) -> String {
        Url::parse(&self.page.url)
            .and_then(|base| base.join(href))
            .map(|u| u.to_string())
            .unwrap_or_else(|_| href.to_string())
    }

    fn open_url(&mut self, url: &str) {
        self.calls.push(AppCall::OpenUrl(url.to_string()));
    }

    fn previous_page(&mut self) {
        self.calls.push(AppCall::PreviousPage);
    }

    fn next_page(&mut self) {
        self.calls.push(AppCall::NextPage);
    }

    fn close(&mut self) {
        self.calls.push(AppCall::Close);
    }
}
