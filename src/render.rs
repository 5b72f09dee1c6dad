use std::sync::atomic::{AtomicU64, Ordering};

use crate::document::Document;
use crate::form::ContactForm;
use crate::notify::Toast;
use crate::page::Mode;

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Immutable view of the page for the render thread. Snapshots flow over a
/// bounded(1) channel with latest-wins semantics; the version lets the
/// renderer skip frames whose state it has already drawn.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub version: u64,
    pub doc: Document,
    pub scroll_y: i64,
    pub viewport_cols: u16,
    pub viewport_rows: u16,
    pub mode: Mode,
    pub nav_selected: usize,
    pub active_section: Option<String>,
    /// Scroll progress, 0..=100.
    pub progress: f64,
    pub form: ContactForm,
    pub toasts: Vec<Toast>,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            version: 0,
            doc: Document::default(),
            scroll_y: 0,
            viewport_cols: 80,
            viewport_rows: 24,
            mode: Mode::Browse,
            nav_selected: 0,
            active_section: None,
            progress: 0.0,
            form: ContactForm::default(),
            toasts: Vec::new(),
        }
    }
}
