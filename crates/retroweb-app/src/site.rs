//! Built-in demo site served by the headless host.
//!
//! Page widget rectangles are in page coordinates: y = 0 is the top of
//! the document, not the top of the screen.

use std::collections::HashMap;

use retroweb_shell::widget::{FontStyle, WidgetStyle};
use retroweb_shell::{FormData, Page, Widget};
use retroweb_types::geometry::Rect;
use url::Url;

pub const HOME_URL: &str = "http://68k.news/";

const LINE_HEIGHT: i32 = 16;

const HEADLINES: [(&str, &str); 3] = [
    ("Cats are back on the front page", "/article/1"),
    ("Modems still work, survey finds", "/article/2"),
    ("About this site", "about"),
];

/// Canonical form of a URL, used as the registry key.
pub fn normalize(url: &str) -> String {
    Url::parse(url).map_or_else(|_| url.to_string(), |u| u.to_string())
}

/// All static pages, keyed by normalized URL.
pub fn demo_site() -> HashMap<String, Page> {
    let mut pages = HashMap::new();
    for page in [front_page(), article(1), article(2), about_page()] {
        pages.insert(normalize(&page.url), page);
    }
    pages
}

fn heading(text: &str, y: i32) -> Widget {
    Widget::text(text)
        .with_rect(Rect::new(0, y, 400, 14))
        .with_style(WidgetStyle::new(FontStyle::Bold))
}

fn front_page() -> Page {
    let mut page = Page::new(HOME_URL);
    page.add_widget(heading("68k.news: Headlines from the Future", 0));

    let mut y = 20;
    for (title, href) in HEADLINES {
        page.add_widget(
            Widget::text(title)
                .with_rect(Rect::new(8, y, 300, 12))
                .with_style(WidgetStyle::new(FontStyle::Underline))
                .with_link(href),
        );
        y += LINE_HEIGHT;
    }

    let search = page.add_form(FormData::get("/search"));
    page.add_widget(Widget::text("Search:").with_rect(Rect::new(8, 80, 60, 14)));
    page.add_widget(
        Widget::text_field(64)
            .with_rect(Rect::new(70, 80, 200, 16))
            .with_name("q")
            .with_form(search),
    );
    page.add_widget(
        Widget::button("Go")
            .with_rect(Rect::new(280, 80, 40, 16))
            .with_form(search),
    );

    // Filler so the page is taller than the viewport.
    for i in 0..40 {
        let y = 120 + i * LINE_HEIGHT;
        page.add_widget(
            Widget::text(&format!("Archive entry {i}")).with_rect(Rect::new(8, y, 300, 12)),
        );
    }
    page
}

fn article(n: usize) -> Page {
    let mut page = Page::new(&format!("http://68k.news/article/{n}"));
    page.add_widget(heading(&format!("Article {n}"), 0));
    page.add_widget(
        Widget::text("Lorem ipsum on a 512x342 screen.").with_rect(Rect::new(8, 20, 400, 12)),
    );
    page.add_widget(
        Widget::text("Back to headlines")
            .with_rect(Rect::new(8, 40, 200, 12))
            .with_link("/"),
    );
    page
}

fn about_page() -> Page {
    let mut page = Page::new("http://68k.news/about");
    page.add_widget(heading("About", 0));
    page.add_widget(
        Widget::text("Text-only news for vintage machines.")
            .with_rect(Rect::new(8, 20, 400, 12)),
    );
    page
}

/// Results page for a `/search?q=...` URL.
pub fn search_results(url: &Url) -> Page {
    let query = url
        .query_pairs()
        .find(|(k, _)| k == "q")
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default();

    let mut page = Page::new(url.as_str());
    page.add_widget(heading(&format!("Results for \"{query}\""), 0));
    page.add_widget(
        Widget::text("No results. Try the front page.")
            .with_rect(Rect::new(8, 20, 300, 12))
            .with_link("/"),
    );
    page
}

/// Placeholder for URLs the site does not know.
pub fn not_found(url: &str) -> Page {
    let mut page = Page::new(url);
    page.add_widget(heading("Not found", 0));
    page.add_widget(Widget::text(url).with_rect(Rect::new(8, 20, 400, 12)));
    page
}
