//! Collaborator traits.
//!
//! The interaction engine owns no devices, pages or network. Hosts
//! implement these traits and hand them to [`Interface`](crate::Interface)
//! on each call. All methods are synchronous; navigation requests are
//! fire-and-forget hand-offs.

use retroweb_types::geometry::Rect;
use retroweb_types::input::{KeyCode, MouseCursor, PointerState};

use crate::chrome::ChromeWidgets;
use crate::page::Page;
use crate::widget::Widget;

/// Pointer sampling, key queue, and cursor control.
pub trait InputBackend {
    /// Sample the current pointer position and buttons.
    fn pointer(&mut self) -> PointerState;

    /// Take the next queued key press. `None` means the queue is empty.
    fn next_key(&mut self) -> Option<KeyCode>;

    fn set_cursor(&mut self, cursor: MouseCursor);

    fn hide_pointer(&mut self);

    fn show_pointer(&mut self);
}

/// Screen geometry and the few drawing primitives the engine needs
/// directly.
pub trait VideoBackend {
    fn screen_width(&self) -> i32;

    /// Y coordinate where page content starts (below the chrome).
    fn window_top(&self) -> i32;

    /// Height of the page viewport.
    fn window_height(&self) -> i32;

    fn hline(&mut self, x: i32, y: i32, len: i32);

    fn clear_rect(&mut self, rect: Rect);

    /// Toggle full-screen color inversion.
    fn invert_screen(&mut self);

    /// Assign rectangles to the chrome widgets. Called once at start-up.
    fn arrange_chrome(&mut self, chrome: &mut ChromeWidgets);
}

/// Rendering and page-local geometry.
///
/// Page widgets are addressed by index into [`Application::page`]. The
/// renderer knows the scroll offset and clipping, so page hit-testing is
/// delegated here.
pub trait PageRenderer {
    /// Draw a chrome widget.
    fn render_widget(&mut self, widget: &Widget);

    /// Draw a page widget. Out-of-range indices are ignored.
    fn render_page_widget(&mut self, index: usize);

    /// Set the status line. An empty string clears it.
    fn set_status(&mut self, text: &str);

    /// Topmost page widget at a screen point.
    fn pick_page_widget(&self, x: i32, y: i32) -> Option<usize>;

    /// Whether a screen point is over the given page widget as laid out
    /// right now. Out-of-range indices return `false`.
    fn is_over_page_widget(&self, index: usize, x: i32, y: i32) -> bool;

    /// Scroll the page viewport by `delta` pixels (negative is up).
    fn scroll(&mut self, delta: i32);
}

/// The browser application: current page plus navigation.
pub trait Application: PageRenderer {
    fn page(&self) -> &Page;

    fn page_mut(&mut self) -> &mut Page;

    /// Resolve a possibly relative URL against the current page URL.
    fn resolve_url(&self, href: &str) -> String;

    fn open_url(&mut self, url: &str);

    fn previous_page(&mut self);

    fn next_page(&mut self);

    /// Request application shutdown.
    fn close(&mut self);
}
