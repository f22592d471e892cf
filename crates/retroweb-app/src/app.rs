//! Demo application: serves the built-in site, keeps history, scroll
//! offset and status line, and answers the engine's hit-tests.

use std::collections::HashMap;

use retroweb_shell::{Application, Page, PageRenderer, Widget};
use url::Url;

use crate::nav::History;
use crate::site;

pub struct DemoApp {
    pages: HashMap<String, Page>,
    page: Page,
    history: History,
    status: String,
    scroll_y: i32,
    window_top: i32,
    viewport_height: i32,
    closed: bool,
    /// URL of a page loaded since the host last checked.
    loaded: Option<String>,
    renders: usize,
}

impl DemoApp {
    pub fn new(pages: HashMap<String, Page>, window_top: i32, viewport_height: i32) -> Self {
        Self {
            pages,
            page: Page::default(),
            history: History::new(),
            status: String::new(),
            scroll_y: 0,
            window_top,
            viewport_height,
            closed: false,
            loaded: None,
            renders: 0,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Take the URL of the page loaded since the last call, if any. The
    /// host must then drop the engine's page references.
    pub fn take_loaded(&mut self) -> Option<String> {
        self.loaded.take()
    }

    fn max_scroll(&self) -> i32 {
        (self.page.height - self.viewport_height).max(0)
    }

    /// Convert a screen y to page coordinates, or `None` above the
    /// viewport.
    fn page_y(&self, y: i32) -> Option<i32> {
        (y >= self.window_top).then(|| y - self.window_top + self.scroll_y)
    }

    fn fetch(&self, url: &str) -> Page {
        if let Some(page) = self.pages.get(url) {
            return page.clone();
        }
        match Url::parse(url) {
            Ok(parsed) if parsed.path() == "/search" => site::search_results(&parsed),
            _ => site::not_found(url),
        }
    }

    /// Replace the current page without touching history.
    fn load(&mut self, url: &str) {
        log::debug!("loading {url}");
        self.page = self.fetch(url);
        self.scroll_y = 0;
        self.status.clear();
        self.loaded = Some(url.to_string());
    }
}

/// Addresses typed without a scheme are taken as http.
fn canonical_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.to_string(),
        Err(url::ParseError::RelativeUrlWithoutBase) => site::normalize(&format!("http://{url}")),
        Err(_) => url.to_string(),
    }
}

impl PageRenderer for DemoApp {
    fn render_widget(&mut self, widget: &Widget) {
        log::trace!("render chrome widget at {:?}", widget.rect);
        self.renders += 1;
    }

    fn render_page_widget(&mut self, index: usize) {
        log::trace!("render page widget {index}");
        self.renders += 1;
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn pick_page_widget(&self, x: i32, y: i32) -> Option<usize> {
        self.page.widget_at(x, self.page_y(y)?)
    }

    fn is_over_page_widget(&self, index: usize, x: i32, y: i32) -> bool {
        let Some(page_y) = self.page_y(y) else {
            return false;
        };
        self.page.widget(index).is_some_and(|w| w.contains(x, page_y))
    }

    fn scroll(&mut self, delta: i32) {
        self.scroll_y = (self.scroll_y + delta).clamp(0, self.max_scroll());
    }
}

impl Application for DemoApp {
    fn page(&self) -> &Page {
        &self.page
    }

    fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    fn resolve_url(&self, href: &str) -> String {
        Url::parse(&self.page.url)
            .and_then(|base| base.join(href))
            .map_or_else(|_| href.to_string(), |u| u.to_string())
    }

    fn open_url(&mut self, url: &str) {
        let url = canonical_url(url);
        log::info!("open {url}");
        self.history.navigate(&url);
        self.load(&url);
    }

    fn previous_page(&mut self) {
        let Some(url) = self.history.go_back().map(str::to_string) else {
            log::debug!("no previous page");
            return;
        };
        self.load(&url);
    }

    fn next_page(&mut self) {
        let Some(url) = self.history.go_forward().map(str::to_string) else {
            log::debug!("no next page");
            return;
        };
        self.load(&url);
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
