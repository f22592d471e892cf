//! Headless video device with fixed geometry.

use retroweb_shell::{ChromeSlot, ChromeWidgets, VideoBackend};
use retroweb_types::geometry::Rect;

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const WINDOW_TOP: i32 = 24;

const BUTTON_WIDTH: i32 = 20;
const CHROME_HEIGHT: i32 = 20;
const SCROLL_BAR_WIDTH: i32 = 16;

/// Records drawing instead of performing it.
#[derive(Debug, Default)]
pub struct HeadlessVideo {
    inverted: bool,
    lines_drawn: usize,
    rects_cleared: usize,
}

impl HeadlessVideo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn lines_drawn(&self) -> usize {
        self.lines_drawn
    }

    pub fn rects_cleared(&self) -> usize {
        self.rects_cleared
    }
}

impl VideoBackend for HeadlessVideo {
    fn screen_width(&self) -> i32 {
        SCREEN_WIDTH
    }

    fn window_top(&self) -> i32 {
        WINDOW_TOP
    }

    fn window_height(&self) -> i32 {
        SCREEN_HEIGHT - WINDOW_TOP
    }

    fn hline(&mut self, x: i32, y: i32, len: i32) {
        log::trace!("hline ({x}, {y}) len {len}");
        self.lines_drawn += 1;
    }

    fn clear_rect(&mut self, rect: Rect) {
        log::trace!("clear {rect:?}");
        self.rects_cleared += 1;
    }

    fn invert_screen(&mut self) {
        self.inverted = !self.inverted;
        log::debug!("screen inverted: {}", self.inverted);
    }

    /// Back and forward buttons at the top left, the address bar filling
    /// the rest of the top row, and the scroll bar down the right edge of
    /// the page window.
    fn arrange_chrome(&mut self, chrome: &mut ChromeWidgets) {
        chrome.set_rect(ChromeSlot::BackButton, Rect::new(0, 0, BUTTON_WIDTH, CHROME_HEIGHT));
        chrome.set_rect(
            ChromeSlot::ForwardButton,
            Rect::new(BUTTON_WIDTH, 0, BUTTON_WIDTH, CHROME_HEIGHT),
        );
        chrome.set_rect(
            ChromeSlot::AddressBar,
            Rect::new(2 * BUTTON_WIDTH, 0, SCREEN_WIDTH - 2 * BUTTON_WIDTH, CHROME_HEIGHT),
        );
        chrome.set_rect(
            ChromeSlot::ScrollBar,
            Rect::new(
                SCREEN_WIDTH - SCROLL_BAR_WIDTH,
                WINDOW_TOP,
                SCROLL_BAR_WIDTH,
                SCREEN_HEIGHT - WINDOW_TOP,
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry() {
        let video = HeadlessVideo::new();
        assert_eq!(video.screen_width(), 640);
        assert_eq!(video.window_top(), 24);
        assert_eq!(video.window_height(), 456);
    }

    #[test]
    fn chrome_layout_does_not_overlap() {
        let mut video = HeadlessVideo::new();
        let mut chrome = ChromeWidgets::new(16);
        video.arrange_chrome(&mut chrome);
        assert_eq!(chrome.pick(5, 5), Some(ChromeSlot::BackButton));
        assert_eq!(chrome.pick(25, 5), Some(ChromeSlot::ForwardButton));
        assert_eq!(chrome.pick(300, 5), Some(ChromeSlot::AddressBar));
        assert_eq!(chrome.pick(630, 200), Some(ChromeSlot::ScrollBar));
        assert_eq!(chrome.pick(300, 200), None);
        assert_eq!(chrome.pick(300, 22), None);
    }

    #[test]
    fn invert_toggles() {
        let mut video = HeadlessVideo::new();
        video.invert_screen();
        assert!(video.is_inverted());
        video.invert_screen();
        assert!(!video.is_inverted());
    }
}
