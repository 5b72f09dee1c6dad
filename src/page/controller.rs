//! PageController for the TEA (The Elm Architecture) pattern.
//!
//! The controller is pure page state - the document, the form, the live
//! toasts, and every watcher and animation the page owns. It is constructed
//! once at startup and torn down explicitly; tests build isolated instances
//! instead of relying on ambient globals.

use crate::animate::{CounterAnimation, SmoothScroll};
use crate::config::Config;
use crate::content::Content;
use crate::document::{Document, ElementKind, UNITS_PER_ROW};
use crate::form::ContactForm;
use crate::notify::{ToastKind, Toasts, TOAST_VISIBLE};
use crate::observe::{ObserverPolicy, Watcher};
use crate::render::{next_version, RenderState};

use super::command::Command;

/// Rows of UI chrome around the page viewport: progress bar, nav bar,
/// status line.
pub const CHROME_ROWS: u16 = 3;

/// Page interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Scrolling and navigating the page.
    #[default]
    Browse,
    /// Typing into the contact form.
    Form,
}

/// Pure page state - the single source of truth.
pub struct PageController {
    pub doc: Document,
    pub form: ContactForm,
    pub toasts: Toasts,

    // Viewport state
    pub scroll_y: i64,
    pub viewport_cols: u16,
    pub viewport_rows: u16,

    // Interaction state
    pub mode: Mode,
    /// Nav link highlighted for keyboard activation.
    pub nav_selected: usize,

    // Derived per scroll event
    pub active_section: Option<String>,
    pub progress: f64,

    // Watchers - one per observer instance of the page
    pub reveal: Watcher,
    pub grids: Vec<Watcher>,
    pub stats: Watcher,

    // Running animations
    pub counters: Vec<CounterAnimation>,
    pub glide: Option<SmoothScroll>,

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,

    // Config (immutable after init)
    pub config: Config,
}

impl PageController {
    pub fn new(content: &Content, config: Config) -> Self {
        let doc = Document::build(content);

        let reveal = Watcher::observe_all(ObserverPolicy::REVEAL, doc.reveal_targets());
        let grids = [
            ElementKind::SkillCard,
            ElementKind::ProjectCard,
            ElementKind::EducationCard,
        ]
        .into_iter()
        .map(|kind| Watcher::observe_all(ObserverPolicy::REVEAL, doc.query_kind(kind)))
        .collect();
        let stats = Watcher::observe_all(ObserverPolicy::COUNTER, doc.stat_numbers());

        Self {
            doc,
            form: ContactForm::default(),
            toasts: Toasts::default(),
            scroll_y: 0,
            viewport_cols: 80,
            viewport_rows: 24,
            mode: Mode::default(),
            nav_selected: 0,
            active_section: None,
            progress: 0.0,
            reveal,
            grids,
            stats,
            counters: Vec::new(),
            glide: None,
            dirty: true,
            config,
        }
    }

    /// Page viewport height in layout units (terminal rows minus chrome).
    pub fn page_height(&self) -> i64 {
        self.viewport_rows.saturating_sub(CHROME_ROWS) as i64 * UNITS_PER_ROW
    }

    /// Scroll offset ceiling; zero when the page fits the viewport.
    pub fn max_scroll(&self) -> i64 {
        self.doc.scrollable_height(self.page_height()).max(0)
    }

    /// Clamp and apply a scroll offset; true when it actually moved.
    pub fn set_scroll(&mut self, y: i64) -> bool {
        let clamped = y.clamp(0, self.max_scroll());
        if clamped != self.scroll_y {
            self.scroll_y = clamped;
            true
        } else {
            false
        }
    }

    /// Raise a toast and schedule its dismissal. Each call gets its own
    /// element and its own timers.
    pub fn notify(&mut self, message: &str, kind: ToastKind, cmds: &mut Vec<Command>) {
        let id = self.toasts.push(message, kind);
        cmds.push(Command::ScheduleToastExit {
            id,
            delay: TOAST_VISIBLE,
        });
        self.dirty = true;
    }

    /// Drop every watcher, animation, and toast. The runtime cancels the
    /// corresponding tickers; after this the controller is inert.
    pub fn teardown(&mut self) {
        self.reveal = Watcher::new(ObserverPolicy::REVEAL);
        self.grids.clear();
        self.stats = Watcher::new(ObserverPolicy::COUNTER);
        self.counters.clear();
        self.glide = None;
        self.toasts = Toasts::default();
    }

    /// Create an immutable snapshot for the render thread.
    ///
    /// Called after state updates to send the current view over a lock-free
    /// channel. Each snapshot gets a monotonically increasing version
    /// number so the render thread can skip redundant draws.
    pub fn snapshot(&self) -> RenderState {
        RenderState {
            version: next_version(),
            doc: self.doc.clone(),
            scroll_y: self.scroll_y,
            viewport_cols: self.viewport_cols,
            viewport_rows: self.viewport_rows,
            mode: self.mode,
            nav_selected: self.nav_selected,
            active_section: self.active_section.clone(),
            progress: self.progress,
            form: self.form.clone(),
            toasts: self.toasts.items().to_vec(),
        }
    }
}
