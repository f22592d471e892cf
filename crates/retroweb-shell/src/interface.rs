//! The interaction engine: chrome, hover, focus, key dispatch, editing
//! and form submission, driven one tick at a time.

use retroweb_types::config::ShellConfig;

use crate::backend::{Application, InputBackend, VideoBackend};
use crate::chrome::{ChromeAction, ChromeSlot, ChromeWidgets};
use crate::commands::{Command, command_for};
use crate::editor::Edit;
use crate::form::build_get_target;
use crate::hit_test;
use crate::hover::{HoverFeedback, HoverTracker};
use crate::widget::{FormId, FormMethod, TextFieldData, Widget, WidgetKind, WidgetRef};

const ADDRESS_BAR: WidgetRef = WidgetRef::Chrome(ChromeSlot::AddressBar);

/// A navigation request handed to the application.
enum Navigation<'a> {
    Open(&'a str),
    Back,
    Forward,
}

/// What a click on the hovered widget does. Exactly one applies.
enum ClickTarget {
    Link(String),
    Chrome(ChromeAction),
    Focus,
    Submit(FormId),
    Nothing,
}

impl ClickTarget {
    fn for_widget(widget_ref: WidgetRef, widget: &Widget) -> Self {
        if let Some(href) = widget.link_url() {
            return ClickTarget::Link(href.to_string());
        }
        if let WidgetRef::Chrome(slot) = widget_ref
            && let Some(action) = slot.click_action()
        {
            return ClickTarget::Chrome(action);
        }
        match &widget.kind {
            WidgetKind::TextField(_) => ClickTarget::Focus,
            WidgetKind::Button(button) => button
                .form
                .map_or(ClickTarget::Nothing, ClickTarget::Submit),
            _ => ClickTarget::Nothing,
        }
    }
}

/// Long-lived interaction state for one browser window.
///
/// Owns the chrome widgets and the hover/focus references. Every
/// collaborator is borrowed per call, so the object holds no device or
/// page handles between ticks.
pub struct Interface {
    config: ShellConfig,
    chrome: ChromeWidgets,
    hover: HoverTracker,
    active: Option<WidgetRef>,
}

impl Interface {
    /// Build the chrome, let the video device lay it out, and focus the
    /// address bar.
    pub fn new(config: ShellConfig, video: &mut dyn VideoBackend) -> Self {
        let mut chrome = ChromeWidgets::new(config.address_capacity);
        video.arrange_chrome(&mut chrome);
        Self {
            config,
            chrome,
            hover: HoverTracker::new(),
            active: Some(ADDRESS_BAR),
        }
    }

    // ---------------------------------------------------------------
    // Exposed surface
    // ---------------------------------------------------------------

    /// Render every chrome widget plus the divider above the page.
    pub fn draw_interface_widgets(&self, video: &mut dyn VideoBackend, app: &mut dyn Application) {
        for (_, widget) in self.chrome.iter() {
            app.render_widget(widget);
        }
        let divider_y = video.window_top() - 1;
        let width = video.screen_width();
        video.hline(0, divider_y, width);
    }

    /// Run one input tick: sample the pointer, update hover, drain the
    /// key queue, then apply the accumulated scroll.
    pub fn update(
        &mut self,
        input: &mut dyn InputBackend,
        video: &mut dyn VideoBackend,
        app: &mut dyn Application,
    ) {
        let pointer = input.pointer();
        self.update_hover(pointer.x, pointer.y, input, app);

        let mut scroll_delta = 0;
        while let Some(key) = input.next_key() {
            log::trace!("key {key:?}");

            if let Some(active) = self.active
                && self.handle_active_widget(active, Edit::from_key(key), app)
            {
                continue;
            }

            if let Some(command) = command_for(key) {
                self.run_command(command, &mut scroll_delta, input, video, app);
            }
        }

        if scroll_delta != 0 {
            app.scroll(scroll_delta);
        }
    }

    /// Replace the address-bar text and repaint it.
    pub fn update_address_bar(
        &mut self,
        url: &str,
        video: &mut dyn VideoBackend,
        app: &mut dyn Application,
    ) {
        let bar = self.chrome.get_mut(ChromeSlot::AddressBar);
        if let Some(field) = bar.text_field_data_mut() {
            field.buffer.set(url);
        }
        video.clear_rect(bar.rect.inset(1));
        app.render_widget(bar);
    }

    /// Topmost widget at a screen point. Chrome wins over the page.
    pub fn pick_widget(&self, app: &dyn Application, x: i32, y: i32) -> Option<WidgetRef> {
        hit_test::pick_widget(&self.chrome, app, x, y)
    }

    pub fn is_over_widget(&self, app: &dyn Application, widget: WidgetRef, x: i32, y: i32) -> bool {
        hit_test::is_over_widget(&self.chrome, app, widget, x, y)
    }

    /// Drop hover and focus references into the page. Call whenever the
    /// application replaces its page.
    pub fn forget_page_widgets(&mut self) {
        self.hover.forget_page();
        if matches!(self.active, Some(WidgetRef::Page(_))) {
            log::debug!("page replaced, dropping focus");
            self.active = None;
        }
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    pub fn hover_widget(&self) -> Option<WidgetRef> {
        self.hover.current()
    }

    pub fn active_widget(&self) -> Option<WidgetRef> {
        self.active
    }

    pub fn address_text(&self) -> &str {
        self.chrome.address_text()
    }

    pub fn chrome(&self) -> &ChromeWidgets {
        &self.chrome
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    // ---------------------------------------------------------------
    // Hover
    // ---------------------------------------------------------------

    fn update_hover(
        &mut self,
        x: i32,
        y: i32,
        input: &mut dyn InputBackend,
        app: &mut dyn Application,
    ) {
        let chrome = &self.chrome;
        let view: &dyn Application = &*app;
        let change = self.hover.update(
            x,
            y,
            |widget| hit_test::is_over_widget(chrome, view, widget, x, y),
            || hit_test::pick_widget(chrome, view, x, y),
        );

        let Some(change) = change else {
            return;
        };
        log::debug!("hover {:?} -> {:?}", change.from, change.to);

        let widget = change
            .to
            .and_then(|to| hit_test::resolve(&self.chrome, &*app, to));
        let feedback = HoverFeedback::for_widget(widget);
        match &feedback {
            HoverFeedback::Link(href) => {
                let url = app.resolve_url(href);
                app.set_status(&url);
            },
            HoverFeedback::TextField => {},
            HoverFeedback::Plain => app.set_status(""),
        }
        input.set_cursor(feedback.cursor());
    }

    // ---------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------

    fn run_command(
        &mut self,
        command: Command,
        scroll_delta: &mut i32,
        input: &mut dyn InputBackend,
        video: &mut dyn VideoBackend,
        app: &mut dyn Application,
    ) {
        match command {
            Command::Click => self.handle_click(app),
            Command::Close => {
                log::info!("close requested");
                app.close();
            },
            Command::Scroll(step) => {
                *scroll_delta += step.delta(&self.config, video.window_height());
            },
            Command::ScrollToTop => {
                let height = app.page().height;
                app.scroll(-height);
            },
            Command::ScrollToBottom => {
                let height = app.page().height;
                app.scroll(height);
            },
            Command::OpenBookmark => {
                let bookmark = self.config.bookmark_url.clone();
                log::debug!("opening bookmark {bookmark}");
                self.navigate(Navigation::Open(&bookmark), app);
            },
            Command::HistoryBack => self.navigate(Navigation::Back, app),
            Command::InvertScreen => {
                input.hide_pointer();
                video.invert_screen();
                input.show_pointer();
            },
            Command::FocusAddressBar => {
                log::debug!("focus -> address bar");
                self.active = Some(ADDRESS_BAR);
            },
        }
    }

    /// Clicking always defocuses first; refocus only happens if the
    /// click lands on a text field.
    fn handle_click(&mut self, app: &mut dyn Application) {
        if let Some(previous) = self.active.take() {
            log::debug!("focus {previous:?} -> none");
        }

        let Some(hovered) = self.hover.current() else {
            return;
        };
        let target = match hit_test::resolve(&self.chrome, &*app, hovered) {
            Some(widget) => ClickTarget::for_widget(hovered, widget),
            None => {
                log::warn!("click on stale widget {hovered:?}");
                ClickTarget::Nothing
            },
        };

        match target {
            ClickTarget::Link(href) => {
                let url = app.resolve_url(&href);
                log::debug!("following link {url}");
                self.navigate(Navigation::Open(&url), app);
            },
            ClickTarget::Chrome(ChromeAction::HistoryBack) => {
                self.navigate(Navigation::Back, app);
            },
            ClickTarget::Chrome(ChromeAction::HistoryForward) => {
                self.navigate(Navigation::Forward, app);
            },
            ClickTarget::Focus => {
                log::debug!("focus none -> {hovered:?}");
                self.active = Some(hovered);
            },
            ClickTarget::Submit(form) => self.submit_form(form, app),
            ClickTarget::Nothing => {},
        }
    }

    // ---------------------------------------------------------------
    // Text editing
    // ---------------------------------------------------------------

    /// Offer a key to the focused widget. Returns `true` if the key was
    /// consumed and must not reach the command table.
    fn handle_active_widget(
        &mut self,
        active: WidgetRef,
        edit: Option<Edit>,
        app: &mut dyn Application,
    ) -> bool {
        let (changes, form) = match self.text_field(active, &*app) {
            Some(field) => (edit.is_some_and(|e| e.changes(&field.buffer)), field.form),
            None => return false,
        };
        let Some(edit) = edit else {
            return false;
        };

        if edit == Edit::Confirm {
            if active == ADDRESS_BAR {
                let url = self.chrome.address_text().to_string();
                log::debug!("address bar confirmed: {url}");
                self.navigate(Navigation::Open(&url), app);
            } else if let Some(form) = form {
                self.submit_form(form, app);
            }
            return false;
        }

        if changes {
            self.render(active, app);
            self.apply_edit(active, edit, app);
            self.render(active, app);
        }
        edit.consumes_key()
    }

    fn text_field<'a>(
        &'a self,
        widget: WidgetRef,
        app: &'a dyn Application,
    ) -> Option<&'a TextFieldData> {
        hit_test::resolve(&self.chrome, app, widget)?.text_field_data()
    }

    fn apply_edit(&mut self, widget: WidgetRef, edit: Edit, app: &mut dyn Application) {
        let field = match widget {
            WidgetRef::Chrome(slot) => self.chrome.get_mut(slot).text_field_data_mut(),
            WidgetRef::Page(index) => app
                .page_mut()
                .widget_mut(index)
                .and_then(Widget::text_field_data_mut),
        };
        if let Some(field) = field {
            edit.apply(&mut field.buffer);
        }
    }

    fn render(&self, widget: WidgetRef, app: &mut dyn Application) {
        match widget {
            WidgetRef::Chrome(slot) => app.render_widget(self.chrome.get(slot)),
            WidgetRef::Page(index) => app.render_page_widget(index),
        }
    }

    // ---------------------------------------------------------------
    // Forms
    // ---------------------------------------------------------------

    /// Submit a page form. Only GET is supported; other methods are
    /// ignored.
    fn submit_form(&mut self, id: FormId, app: &mut dyn Application) {
        let page = app.page();
        let Some(form) = page.form(id) else {
            log::warn!("submit of stale form {id:?}");
            return;
        };
        if form.method != FormMethod::Get {
            log::debug!("ignoring {:?} submission to {}", form.method, form.action);
            return;
        }

        let target = build_get_target(form, id, page);
        log::debug!("submitting form {id:?} as {target}");

        // The address bar doubles as the scratch buffer, so it shows the
        // submitted target (truncated to its capacity).
        if let Some(field) = self.chrome.get_mut(ChromeSlot::AddressBar).text_field_data_mut() {
            field.buffer.set(&target);
        }
        let url = app.resolve_url(self.chrome.address_text());
        self.navigate(Navigation::Open(&url), app);
    }

    // ---------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------

    /// Hand a navigation to the application. Page handles taken before
    /// the hand-off no longer name the same widgets, so they are dropped
    /// at once rather than left for the host to clear after the tick.
    fn navigate(&mut self, navigation: Navigation<'_>, app: &mut dyn Application) {
        match navigation {
            Navigation::Open(url) => app.open_url(url),
            Navigation::Back => app.previous_page(),
            Navigation::Forward => app.next_page(),
        }
        self.forget_page_widgets();
    }
}
