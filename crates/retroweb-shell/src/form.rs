//! GET form encoding.
//!
//! Encoding is deliberately minimal: `?name=value&name=value`, then every
//! space becomes `+`. Nothing is percent-encoded.

use crate::page::Page;
use crate::widget::{FormData, FormId, WidgetKind};

/// Build the unresolved target for submitting `form` with GET.
///
/// Fields are collected from the live page in document order: text
/// fields bound to `form` that have a name.
pub fn build_get_target(form: &FormData, id: FormId, page: &Page) -> String {
    let mut target = form.action.clone();
    let mut params = 0;

    for widget in &page.widgets {
        let WidgetKind::TextField(field) = &widget.kind else {
            continue;
        };
        if field.form != Some(id) {
            continue;
        }
        let Some(name) = field.name.as_deref() else {
            continue;
        };
        target.push(if params == 0 { '?' } else { '&' });
        target.push_str(name);
        target.push('=');
        target.push_str(field.buffer.as_str());
        params += 1;
    }

    target.replace(' ', "+")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Widget;

    fn search_page(query: &str) -> (Page, FormId) {
        let mut page = Page::new("http://a.test/index.html");
        let form = page.add_form(FormData::get("/search"));
        page.add_widget(Widget::text_field(64).with_name("q").with_value(query).with_form(form));
        page.add_widget(Widget::button("Search").with_form(form));
        (page, form)
    }

    #[test]
    fn single_field_with_space() {
        let (page, form) = search_page("old days");
        let target = build_get_target(page.form(form).unwrap(), form, &page);
        assert_eq!(target, "/search?q=old+days");
    }

    #[test]
    fn multiple_fields_in_document_order() {
        let mut page = Page::new("http://a.test/");
        let form = page.add_form(FormData::get("/find"));
        page.add_widget(Widget::text_field(16).with_name("a").with_value("1").with_form(form));
        page.add_widget(Widget::text("label"));
        page.add_widget(Widget::text_field(16).with_name("b").with_value("2").with_form(form));
        let target = build_get_target(page.form(form).unwrap(), form, &page);
        assert_eq!(target, "/find?a=1&b=2");
    }

    #[test]
    fn fields_of_other_forms_are_skipped() {
        let mut page = Page::new("http://a.test/");
        let login = page.add_form(FormData::get("/login"));
        let search = page.add_form(FormData::get("/search"));
        page.add_widget(Widget::text_field(16).with_name("user").with_value("me").with_form(login));
        page.add_widget(Widget::text_field(16).with_name("q").with_value("x").with_form(search));
        let target = build_get_target(page.form(search).unwrap(), search, &page);
        assert_eq!(target, "/search?q=x");
    }

    #[test]
    fn unnamed_and_unbound_fields_are_skipped() {
        let mut page = Page::new("http://a.test/");
        let form = page.add_form(FormData::get("/go"));
        page.add_widget(Widget::text_field(16).with_value("anon").with_form(form));
        page.add_widget(Widget::text_field(16).with_name("free").with_value("x"));
        let target = build_get_target(page.form(form).unwrap(), form, &page);
        assert_eq!(target, "/go");
    }

    #[test]
    fn empty_value_still_encoded() {
        let (page, form) = search_page("");
        let target = build_get_target(page.form(form).unwrap(), form, &page);
        assert_eq!(target, "/search?q=");
    }

    #[test]
    fn spaces_in_action_are_replaced_too() {
        let mut page = Page::new("http://a.test/");
        let form = page.add_form(FormData::get("/my search"));
        page.add_widget(Widget::text_field(16).with_name("q").with_value("a b").with_form(form));
        let target = build_get_target(page.form(form).unwrap(), form, &page);
        assert_eq!(target, "/my+search?q=a+b");
    }

    #[test]
    fn no_percent_encoding() {
        let (page, form) = search_page("a&b=c");
        let target = build_get_target(page.form(form).unwrap(), form, &page);
        assert_eq!(target, "/search?q=a&b=c");
    }
}
