//! Pure update function for the TEA (The Elm Architecture) pattern.
//!
//! The update function takes the page controller and a message, mutates the
//! controller, and returns timer commands for the runtime to execute. All
//! scroll-linked effects (progress, parallax, section tracking, visibility
//! sweeps) recompute here, on every scroll event.

use crossterm::event::{KeyCode, KeyEvent};

use crate::animate::{stagger_delay, CounterAnimation, SmoothScroll, REVEAL_CLASSES};
use crate::document::{ElementId, UNITS_PER_ROW};
use crate::form::{Submission, MSG_INVALID_EMAIL, MSG_MISSING_FIELDS, MSG_SENT};
use crate::notify::{ToastKind, TOAST_EXIT};
use crate::{flog, flog_debug, flog_trace, flog_warn};

use super::command::Command;
use super::controller::{Mode, PageController};
use super::message::Message;

/// How far above a section's top the tracker switches to it, in units.
const SECTION_TRACK_MARGIN: i64 = 200;

/// Rows moved by a single line-scroll key.
const LINE_SCROLL_ROWS: i64 = 3;

/// One-time page setup: hero entry fade and the initial visibility pass.
/// With reduced motion everything renders settled and no watcher survives.
pub fn startup(page: &mut PageController) -> Vec<Command> {
    let mut cmds = Vec::new();

    if let Some(hero) = page.doc.hero_content() {
        page.doc.add_class(hero, "fade-in");
    }

    if page.config.reduced_motion {
        flog_debug!("startup: reduced motion, revealing everything");
        for target in page.doc.reveal_targets() {
            apply_reveal(page, target);
        }
        // Stat numbers already hold their final text; just drop the watchers.
        page.teardown();
        refresh_viewport(page, &mut cmds);
    } else {
        refresh_viewport(page, &mut cmds);
    }

    page.dirty = true;
    cmds
}

/// Pure update function: PageController + Message → Commands
///
/// This function:
/// 1. Takes the current controller and an input message
/// 2. Mutates the page state (and sets the dirty flag)
/// 3. Returns a list of commands (timers to schedule) to execute
pub fn update(page: &mut PageController, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            page.dirty = true;
            match page.mode {
                Mode::Browse => update_browse_mode(page, key, &mut cmds),
                Mode::Form => update_form_mode(page, key, &mut cmds),
            }
        }

        Message::MouseDown => {
            // Pointer use drops the keyboard focus affordance.
            let body = page.doc.body();
            page.doc.remove_class(body, "keyboard-nav");
            page.dirty = true;
        }

        Message::Wheel(rows) => {
            scroll_by(page, rows as i64 * UNITS_PER_ROW, &mut cmds);
        }

        Message::Resize(cols, rows) => {
            flog_debug!("Message::Resize {}x{}", cols, rows);
            page.viewport_cols = cols;
            page.viewport_rows = rows;
            // Geometry changed: re-clamp and rerun the scroll pipeline.
            page.set_scroll(page.scroll_y);
            refresh_viewport(page, &mut cmds);
        }

        Message::RevealDue(target) => {
            flog_trace!("Message::RevealDue {:?}", target);
            apply_reveal(page, target);
        }

        Message::CounterTick(element) => {
            advance_counter(page, element, &mut cmds);
        }

        Message::ToastExpired(id) => {
            // Display window over: reverse the entry animation, then remove
            // 300 ms later. Each toast runs its own pair of timers.
            if page.toasts.begin_exit(id) {
                cmds.push(Command::ScheduleToastRemoval {
                    id,
                    delay: TOAST_EXIT,
                });
            }
            page.dirty = true;
        }

        Message::ToastRemoved(id) => {
            page.toasts.remove(id);
            page.dirty = true;
        }

        Message::ScrollFrame => {
            advance_glide(page, &mut cmds);
        }
    }

    cmds
}

fn update_browse_mode(page: &mut PageController, key: KeyEvent, cmds: &mut Vec<Command>) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            cmds.push(Command::Quit);
        }

        KeyCode::Char('j') | KeyCode::Down => {
            scroll_by(page, LINE_SCROLL_ROWS * UNITS_PER_ROW, cmds);
        }

        KeyCode::Char('k') | KeyCode::Up => {
            scroll_by(page, -LINE_SCROLL_ROWS * UNITS_PER_ROW, cmds);
        }

        KeyCode::PageDown | KeyCode::Char(' ') => {
            scroll_by(page, page.page_height(), cmds);
        }

        KeyCode::PageUp => {
            scroll_by(page, -page.page_height(), cmds);
        }

        KeyCode::Home => {
            glide_to(page, 0, cmds);
        }

        KeyCode::End => {
            glide_to(page, page.max_scroll(), cmds);
        }

        KeyCode::Tab => {
            // Keyboard navigation affordance plus nav-link cycling.
            let body = page.doc.body();
            page.doc.add_class(body, "keyboard-nav");
            let links = page.doc.nav_links().len();
            if links > 0 {
                page.nav_selected = (page.nav_selected + 1) % links;
            }
        }

        KeyCode::BackTab => {
            let body = page.doc.body();
            page.doc.add_class(body, "keyboard-nav");
            let links = page.doc.nav_links().len();
            if links > 0 {
                page.nav_selected = page.nav_selected.checked_sub(1).unwrap_or(links - 1);
            }
        }

        KeyCode::Enter => {
            activate_nav_link(page, page.nav_selected, cmds);
        }

        KeyCode::Char('f') => {
            // Jump to the contact section and focus the form.
            if let Some(idx) = nav_index_for(page, "contact") {
                activate_nav_link(page, idx, cmds);
            }
            page.mode = Mode::Form;
        }

        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(idx) = c.to_digit(10).map(|d| d as usize).filter(|d| *d >= 1) {
                activate_nav_link(page, idx - 1, cmds);
            }
        }

        _ => {}
    }
}

fn update_form_mode(page: &mut PageController, key: KeyEvent, cmds: &mut Vec<Command>) {
    match key.code {
        KeyCode::Esc => {
            page.mode = Mode::Browse;
        }

        KeyCode::Tab => {
            let body = page.doc.body();
            page.doc.add_class(body, "keyboard-nav");
            page.form.focus_next();
        }

        KeyCode::Enter => {
            submit_form(page, cmds);
        }

        KeyCode::Backspace => {
            page.form.backspace();
        }

        KeyCode::Char(c) => {
            page.form.push_char(c);
        }

        _ => {}
    }
}

/// Suppresses any default handling, reads the fields, and walks the
/// Idle → Validating → {Rejected, Accepted} machine.
fn submit_form(page: &mut PageController, cmds: &mut Vec<Command>) {
    match page.form.submit() {
        Submission::MissingFields => {
            flog_warn!("Form rejected: missing fields");
            page.notify(MSG_MISSING_FIELDS, ToastKind::Error, cmds);
        }
        Submission::InvalidEmail => {
            flog_warn!("Form rejected: invalid email");
            page.notify(MSG_INVALID_EMAIL, ToastKind::Error, cmds);
        }
        Submission::Accepted(draft) => {
            // Diagnostic only; the draft is discarded after this line.
            flog!(
                "Form submitted: {}",
                serde_json::to_string(&draft).unwrap_or_default()
            );
            page.notify(MSG_SENT, ToastKind::Success, cmds);
            page.mode = Mode::Browse;
        }
    }
}

fn nav_index_for(page: &PageController, section_id: &str) -> Option<usize> {
    page.doc.nav_links().iter().position(|&link| {
        page.doc
            .get(link)
            .and_then(|e| e.target_id())
            .is_some_and(|t| t == section_id)
    })
}

/// Smooth-scroll to the section a nav link targets. Links without a live
/// target are ignored, as on the page.
fn activate_nav_link(page: &mut PageController, index: usize, cmds: &mut Vec<Command>) {
    let links = page.doc.nav_links();
    let Some(&link) = links.get(index) else {
        return;
    };
    page.nav_selected = index;
    let Some(top) = page
        .doc
        .get(link)
        .and_then(|e| e.target_id())
        .and_then(|t| page.doc.section_top(t))
    else {
        return;
    };
    flog_debug!("nav: gliding to unit {}", top);
    glide_to(page, top, cmds);
}

/// Instant scroll (line keys, wheel). Cancels any glide in flight.
fn scroll_by(page: &mut PageController, delta: i64, cmds: &mut Vec<Command>) {
    if page.glide.take().is_some() {
        cmds.push(Command::StopScrollGlide);
    }
    if page.set_scroll(page.scroll_y + delta) {
        refresh_viewport(page, cmds);
    }
    page.dirty = true;
}

/// Eased scroll toward a target offset. Reduced motion jumps instead.
fn glide_to(page: &mut PageController, target: i64, cmds: &mut Vec<Command>) {
    if page.config.reduced_motion {
        if page.set_scroll(target) {
            refresh_viewport(page, cmds);
        }
        return;
    }
    match page.glide.as_mut() {
        Some(glide) => glide.retarget(target),
        None => {
            let glide = SmoothScroll::new(page.scroll_y, target);
            if glide.is_settled() {
                return;
            }
            page.glide = Some(glide);
            cmds.push(Command::StartScrollGlide);
        }
    }
}

fn advance_glide(page: &mut PageController, cmds: &mut Vec<Command>) {
    let Some(glide) = page.glide.as_mut() else {
        // Ticker outlived the animation; shut it down.
        cmds.push(Command::StopScrollGlide);
        return;
    };
    let y = glide.tick();
    let settled = glide.is_settled();
    if page.set_scroll(y) {
        refresh_viewport(page, cmds);
    }
    if settled {
        page.glide = None;
        cmds.push(Command::StopScrollGlide);
    }
    page.dirty = true;
}

/// The scroll pipeline, rerun in full on every scroll and resize event:
/// progress bar, parallax transforms, active-section tracking, and the
/// visibility sweeps for reveals, grids, and counters.
pub(crate) fn refresh_viewport(page: &mut PageController, cmds: &mut Vec<Command>) {
    let viewport = page.page_height();
    flog_trace!("refresh_viewport scroll_y={} viewport={}", page.scroll_y, viewport);

    // Progress. A page that fits the viewport reads 0%, not NaN.
    let scrollable = page.doc.scrollable_height(viewport);
    page.progress = if scrollable > 0 {
        page.scroll_y as f64 / scrollable as f64 * 100.0
    } else {
        0.0
    };

    // Parallax: each blob drifts at its own multiple of the scroll offset.
    let blobs = page.doc.query_class_contains("blob");
    for (index, id) in blobs.into_iter().enumerate() {
        let speed = 0.5 + 0.1 * index as f64;
        if let Some(el) = page.doc.get_mut(id) {
            el.translate_y = page.scroll_y as f64 * speed;
        }
    }

    // Active section: the last one whose top (less the margin) has been
    // scrolled past; its nav link carries the `active` class.
    let mut current = None;
    for id in page.doc.sections_with_id() {
        let Some(section) = page.doc.get(id) else {
            continue;
        };
        if page.scroll_y >= section.top - SECTION_TRACK_MARGIN {
            current = section.fragment.clone();
        }
    }
    for link in page.doc.nav_links() {
        let is_current = page
            .doc
            .get(link)
            .and_then(|e| e.target_id())
            .is_some_and(|t| Some(t) == current.as_deref());
        if is_current {
            page.doc.add_class(link, "active");
        } else {
            page.doc.remove_class(link, "active");
        }
    }
    page.active_section = current;

    // Visibility sweeps. Plain reveals apply immediately; grid batches are
    // staggered by their index in the observed set; stat numbers start
    // their counters.
    for obs in page.reveal.sweep(page.scroll_y, viewport, &page.doc) {
        apply_reveal(page, obs.target);
    }

    let scroll_y = page.scroll_y;
    for watcher in &mut page.grids {
        for obs in watcher.sweep(scroll_y, viewport, &page.doc) {
            cmds.push(Command::ScheduleReveal {
                target: obs.target,
                delay: stagger_delay(obs.index),
            });
        }
    }

    let stat_hits = page.stats.sweep(page.scroll_y, viewport, &page.doc);
    for obs in stat_hits {
        start_counter(page, obs.target, cmds);
    }

    page.dirty = true;
}

fn apply_reveal(page: &mut PageController, target: ElementId) {
    for class in REVEAL_CLASSES {
        page.doc.add_class(target, class);
    }
    page.dirty = true;
}

/// Begin a counter for a stat number. Non-numeric text is left untouched;
/// targets ≤ 0 render their final text with no ticker.
fn start_counter(page: &mut PageController, element: ElementId, cmds: &mut Vec<Command>) {
    let Some(text) = page.doc.get(element).map(|e| e.text.clone()) else {
        return;
    };
    let Some(anim) = CounterAnimation::parse(element, &text) else {
        flog_debug!("counter: non-numeric stat {:?} left as-is", element);
        return;
    };

    let display = anim.initial_display();
    if let Some(el) = page.doc.get_mut(element) {
        el.text = display;
    }
    if !anim.is_done() {
        cmds.push(Command::StartCounter { element });
        page.counters.push(anim);
    }
    page.dirty = true;
}

fn advance_counter(page: &mut PageController, element: ElementId, cmds: &mut Vec<Command>) {
    let Some(pos) = page.counters.iter().position(|c| c.element() == element) else {
        // Tick from a counter that already finished; cancel its ticker.
        cmds.push(Command::StopCounter { element });
        return;
    };

    let display = page.counters[pos].tick();
    let done = page.counters[pos].is_done();
    if let Some(el) = page.doc.get_mut(element) {
        el.text = display;
    }
    if done {
        page.counters.remove(pos);
        cmds.push(Command::StopCounter { element });
    }
    page.dirty = true;
}
