//! The four persistent chrome widgets.

use retroweb_types::geometry::Rect;

use crate::widget::{FontStyle, Widget, WidgetKind, WidgetStyle};

/// Identifies one of the fixed chrome widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromeSlot {
    AddressBar,
    ScrollBar,
    BackButton,
    ForwardButton,
}

/// What clicking a chrome widget does, beyond the generic rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeAction {
    HistoryBack,
    HistoryForward,
}

impl ChromeSlot {
    /// Hit-test priority order.
    pub const ALL: [ChromeSlot; 4] = [
        ChromeSlot::AddressBar,
        ChromeSlot::ScrollBar,
        ChromeSlot::BackButton,
        ChromeSlot::ForwardButton,
    ];

    fn index(self) -> usize {
        match self {
            ChromeSlot::AddressBar => 0,
            ChromeSlot::ScrollBar => 1,
            ChromeSlot::BackButton => 2,
            ChromeSlot::ForwardButton => 3,
        }
    }

    pub fn click_action(self) -> Option<ChromeAction> {
        match self {
            ChromeSlot::BackButton => Some(ChromeAction::HistoryBack),
            ChromeSlot::ForwardButton => Some(ChromeAction::HistoryForward),
            ChromeSlot::AddressBar | ChromeSlot::ScrollBar => None,
        }
    }
}

/// Storage for the chrome widgets, allocated once and never resized.
#[derive(Debug, Clone)]
pub struct ChromeWidgets {
    slots: [Widget; 4],
}

impl ChromeWidgets {
    /// Build the chrome with an empty address bar of the given capacity.
    ///
    /// Rectangles are left empty; the video device assigns them.
    pub fn new(address_capacity: usize) -> Self {
        let bold = WidgetStyle::new(FontStyle::Bold);
        Self {
            slots: [
                Widget::text_field(address_capacity)
                    .with_style(WidgetStyle::new(FontStyle::Regular)),
                Widget::new(WidgetKind::ScrollBar),
                Widget::button("<").with_style(bold),
                Widget::button(">").with_style(bold),
            ],
        }
    }

    pub fn get(&self, slot: ChromeSlot) -> &Widget {
        &self.slots[slot.index()]
    }

    pub fn get_mut(&mut self, slot: ChromeSlot) -> &mut Widget {
        &mut self.slots[slot.index()]
    }

    pub fn set_rect(&mut self, slot: ChromeSlot, rect: Rect) {
        self.get_mut(slot).rect = rect;
    }

    /// First chrome widget in priority order whose rectangle contains
    /// the point.
    pub fn pick(&self, x: i32, y: i32) -> Option<ChromeSlot> {
        ChromeSlot::ALL
            .into_iter()
            .find(|slot| self.get(*slot).contains(x, y))
    }

    /// Widgets in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (ChromeSlot, &Widget)> {
        ChromeSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }

    /// Current address-bar text.
    pub fn address_text(&self) -> &str {
        self.get(ChromeSlot::AddressBar)
            .text_field_data()
            .map_or("", |field| field.buffer.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arranged() -> ChromeWidgets {
        let mut chrome = ChromeWidgets::new(64);
        chrome.set_rect(ChromeSlot::BackButton, Rect::new(0, 0, 20, 20));
        chrome.set_rect(ChromeSlot::ForwardButton, Rect::new(20, 0, 20, 20));
        chrome.set_rect(ChromeSlot::AddressBar, Rect::new(40, 0, 580, 20));
        chrome.set_rect(ChromeSlot::ScrollBar, Rect::new(620, 24, 20, 456));
        chrome
    }

    #[test]
    fn slots_have_expected_kinds() {
        let chrome = ChromeWidgets::new(64);
        assert!(chrome.get(ChromeSlot::AddressBar).is_text_field());
        assert_eq!(chrome.get(ChromeSlot::ScrollBar).kind, WidgetKind::ScrollBar);
        assert_eq!(chrome.get(ChromeSlot::BackButton).button_data().unwrap().label, "<");
        assert_eq!(chrome.get(ChromeSlot::ForwardButton).button_data().unwrap().label, ">");
        assert_eq!(chrome.get(ChromeSlot::ForwardButton).style.font, FontStyle::Bold);
    }

    #[test]
    fn address_bar_capacity() {
        let chrome = ChromeWidgets::new(64);
        let field = chrome.get(ChromeSlot::AddressBar).text_field_data().unwrap();
        assert_eq!(field.buffer.capacity(), 64);
        assert!(field.form.is_none());
    }

    #[test]
    fn pick_each_slot() {
        let chrome = arranged();
        assert_eq!(chrome.pick(5, 5), Some(ChromeSlot::BackButton));
        assert_eq!(chrome.pick(25, 5), Some(ChromeSlot::ForwardButton));
        assert_eq!(chrome.pick(100, 5), Some(ChromeSlot::AddressBar));
        assert_eq!(chrome.pick(630, 100), Some(ChromeSlot::ScrollBar));
        assert_eq!(chrome.pick(300, 300), None);
    }

    #[test]
    fn overlap_resolved_by_priority() {
        let mut chrome = arranged();
        chrome.set_rect(ChromeSlot::ScrollBar, Rect::new(0, 0, 640, 480));
        assert_eq!(chrome.pick(100, 5), Some(ChromeSlot::AddressBar));
        assert_eq!(chrome.pick(5, 5), Some(ChromeSlot::ScrollBar));
    }

    #[test]
    fn click_actions() {
        assert_eq!(ChromeSlot::BackButton.click_action(), Some(ChromeAction::HistoryBack));
        assert_eq!(ChromeSlot::ForwardButton.click_action(), Some(ChromeAction::HistoryForward));
        assert_eq!(ChromeSlot::AddressBar.click_action(), None);
        assert_eq!(ChromeSlot::ScrollBar.click_action(), None);
    }

    #[test]
    fn iter_in_priority_order() {
        let chrome = ChromeWidgets::new(8);
        let order: Vec<_> = chrome.iter().map(|(slot, _)| slot).collect();
        assert_eq!(order, ChromeSlot::ALL.to_vec());
    }
}
