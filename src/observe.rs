//! Viewport-visibility triggering: act once when an element scrolls into view.
//!
//! A [`Watcher`] pairs a set of observed elements with a policy (visibility
//! threshold plus a bottom root margin) and reports each element exactly once,
//! the first time its intersection ratio meets the threshold. Fired elements
//! are dropped from the watch set, so re-entering the viewport never
//! re-triggers. The sweep is a pure function of scroll offset, viewport
//! height, and document geometry, which is what makes the trigger testable
//! without a terminal.

use crate::document::{Document, ElementId};

/// When and how eagerly a watcher fires.
#[derive(Debug, Clone, Copy)]
pub struct ObserverPolicy {
    /// Fraction of the element's height that must be visible (0.0 ..= 1.0).
    pub threshold: f64,
    /// Adjustment to the viewport's bottom edge in layout units. Negative
    /// values shrink the trigger box so elements fire only once they are
    /// well inside the visible region.
    pub root_margin_bottom: i64,
}

impl ObserverPolicy {
    /// Reveal animations: 10% visible, bottom edge pulled up 50 units.
    pub const REVEAL: Self = Self {
        threshold: 0.1,
        root_margin_bottom: -50,
    };

    /// Counter animations: at least half the element must be visible.
    pub const COUNTER: Self = Self {
        threshold: 0.5,
        root_margin_bottom: 0,
    };
}

/// A single trigger: which element fired and its position in the
/// originally observed set (the stagger index).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub target: ElementId,
    pub index: usize,
}

#[derive(Debug, Clone)]
struct Entry {
    target: ElementId,
    index: usize,
}

/// Once-only visibility trigger over a set of elements.
#[derive(Debug, Clone)]
pub struct Watcher {
    policy: ObserverPolicy,
    entries: Vec<Entry>,
    registered: usize,
}

impl Watcher {
    pub fn new(policy: ObserverPolicy) -> Self {
        Self {
            policy,
            entries: Vec::new(),
            registered: 0,
        }
    }

    /// Observe a batch in iteration order; indices follow registration order.
    pub fn observe_all(policy: ObserverPolicy, targets: impl IntoIterator<Item = ElementId>) -> Self {
        let mut watcher = Self::new(policy);
        for target in targets {
            watcher.observe(target);
        }
        watcher
    }

    pub fn observe(&mut self, target: ElementId) {
        self.entries.push(Entry {
            target,
            index: self.registered,
        });
        self.registered += 1;
    }

    pub fn unobserve(&mut self, target: ElementId) {
        self.entries.retain(|e| e.target != target);
    }

    pub fn is_observing(&self, target: ElementId) -> bool {
        self.entries.iter().any(|e| e.target == target)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every observed element against the current viewport. Elements
    /// whose intersection ratio meets the threshold are reported and
    /// permanently unobserved. Elements missing from the document are
    /// skipped and simply never fire.
    pub fn sweep(&mut self, scroll_y: i64, viewport_height: i64, doc: &Document) -> Vec<Observation> {
        if self.entries.is_empty() {
            return Vec::new();
        }

        let mut fired = Vec::new();
        self.entries.retain(|entry| {
            let Some(el) = doc.get(entry.target) else {
                return true;
            };
            let ratio = intersection_ratio(
                el.top,
                el.height,
                scroll_y,
                viewport_height,
                self.policy.root_margin_bottom,
            );
            if ratio >= self.policy.threshold {
                fired.push(Observation {
                    target: entry.target,
                    index: entry.index,
                });
                false
            } else {
                true
            }
        });
        fired
    }
}

/// Fraction of the element's box inside the (margin-adjusted) viewport.
fn intersection_ratio(
    top: i64,
    height: i64,
    scroll_y: i64,
    viewport_height: i64,
    root_margin_bottom: i64,
) -> f64 {
    let view_top = scroll_y;
    let view_bottom = scroll_y + viewport_height + root_margin_bottom;
    if height <= 0 {
        // Degenerate box: intersecting iff its line is inside the view.
        return if top >= view_top && top <= view_bottom {
            1.0
        } else {
            0.0
        };
    }
    let visible = (top + height).min(view_bottom) - top.max(view_top);
    if visible <= 0 {
        0.0
    } else {
        visible as f64 / height as f64
    }
}
