//! Shared helpers for the integration suite.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use folio::config::Config;
use folio::content::Content;
use folio::document::{Document, Element, ElementId, ElementKind};
use folio::{Command, Message, PageController};

/// Terminal rows used by the test viewport (3 rows are chrome, so the page
/// sees 30 rows = 300 layout units).
pub const TEST_ROWS: u16 = 33;

/// A controller over the built-in sample portfolio, sized for tests.
pub fn page() -> PageController {
    let mut page = PageController::new(&Content::default(), Config::default());
    page.viewport_cols = 80;
    page.viewport_rows = TEST_ROWS;
    page
}

pub fn key(code: KeyCode) -> Message {
    Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn type_str(page: &mut PageController, text: &str) {
    for c in text.chars() {
        folio::update(page, key(KeyCode::Char(c)));
    }
}

/// Jump the viewport to an exact offset and rerun the scroll pipeline.
/// A resize re-clamps and recomputes everything, which makes it the
/// cleanest deterministic way to land on a precise scroll position.
pub fn scroll_to(page: &mut PageController, y: i64) -> Vec<Command> {
    page.set_scroll(y);
    folio::update(page, Message::Resize(page.viewport_cols, page.viewport_rows))
}

/// A page whose document is hand-laid-out: one nav link and one section per
/// `(id, top, height)` triple. Watchers are torn down so only the effects
/// under test run.
pub fn synthetic_page(sections: &[(&str, i64, i64)]) -> PageController {
    let mut page = page();
    page.teardown();

    let mut elements = Vec::new();
    let mut push = |kind, fragment: Option<String>, top: i64, height: i64| {
        let id = ElementId(elements.len() as u32);
        elements.push(Element {
            id,
            kind,
            classes: Vec::new(),
            text: String::new(),
            detail: String::new(),
            fragment,
            top,
            height,
            translate_y: 0.0,
        });
    };

    push(ElementKind::Body, None, 0, 0);
    for (id, _, _) in sections {
        push(ElementKind::NavLink, Some(format!("#{}", id)), 0, 0);
    }
    for (id, top, height) in sections {
        push(ElementKind::Section, Some(id.to_string()), *top, *height);
    }

    page.doc = Document::from_elements(elements);
    page
}
