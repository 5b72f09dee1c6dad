//! Terminal UI rendering for the folio page.
//!
//! Design philosophy mirrors the page this came from:
//! - One accent color, grayscale everywhere else
//! - Unrevealed elements render muted until their animation class lands
//! - Toasts overlay the top-right corner, color-coded by kind
//!
//! This module renders from RenderState (immutable snapshot) - it never
//! mutates page state. This enables the decoupled logic/render loop.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Clear, Gauge, Paragraph},
    Frame,
};

use crate::document::{Element, ElementKind, UNITS_PER_ROW};
use crate::form::Field;
use crate::notify::{Toast, ToastKind, ToastPhase};
use crate::page::Mode;
use crate::render::RenderState;

// Color tokens
const COLOR_ACCENT: Color = Color::Cyan;
const COLOR_TEXT: Color = Color::White;
const COLOR_TEXT_DIMMED: Color = Color::Gray;
const COLOR_TEXT_MUTED: Color = Color::DarkGray;

// Toast colors by kind (success green, error red, info blue)
const COLOR_TOAST_SUCCESS: Color = Color::Green;
const COLOR_TOAST_ERROR: Color = Color::Red;
const COLOR_TOAST_INFO: Color = Color::Blue;

// Layout constants
const PROGRESS_HEIGHT: u16 = 1;
const NAV_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const PAGE_INDENT: &str = "  ";

/// Main render function - entry point for all UI drawing.
/// Takes an immutable RenderState snapshot.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    if area.height < 4 {
        render_page(frame, state, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(PROGRESS_HEIGHT),
        Constraint::Length(NAV_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    render_progress(frame, state, chunks[0]);
    render_nav(frame, state, chunks[1]);
    render_page(frame, state, chunks[2]);
    render_statusbar(frame, state, chunks[3]);

    for (index, toast) in state.toasts.iter().enumerate() {
        render_toast(frame, toast, index, area);
    }
}

/// Scroll progress across the top edge.
fn render_progress(frame: &mut Frame, state: &RenderState, area: Rect) {
    let ratio = (state.progress / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .ratio(ratio)
        .label("")
        .gauge_style(Style::default().fg(COLOR_ACCENT).bg(Color::Black));
    frame.render_widget(gauge, area);
}

/// Navigation bar: one entry per link; the link whose section is active
/// carries the highlight, the keyboard-selected one is reversed.
fn render_nav(frame: &mut Frame, state: &RenderState, area: Rect) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (index, &link) in state.doc.nav_links().iter().enumerate() {
        let Some(el) = state.doc.get(link) else {
            continue;
        };
        let mut style = if el.has_class("active") {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_TEXT_DIMMED)
        };
        if index == state.nav_selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {} ", el.text), style));
        spans.push(Span::raw(" "));
    }
    if state.doc.has_class(state.doc.body(), "keyboard-nav") {
        spans.push(Span::styled("⌨", Style::default().fg(COLOR_TEXT_MUTED)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// The page viewport: document rows sliced at the scroll offset.
fn render_page(frame: &mut Frame, state: &RenderState, area: Rect) {
    let lines = page_lines(state, area.width);
    let scroll_row = (state.scroll_y / UNITS_PER_ROW).max(0) as usize;
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(scroll_row)
        .take(area.height as usize)
        .collect();
    frame.render_widget(Paragraph::new(Text::from(visible)), area);
}

/// Lay the whole document out as rows; the caller slices the viewport.
fn page_lines(state: &RenderState, width: u16) -> Vec<Line<'static>> {
    let total_rows = (state.doc.height() / UNITS_PER_ROW).max(0) as usize;
    let mut lines: Vec<Line<'static>> = vec![Line::default(); total_rows];
    let width = width.max(20) as usize;

    let mut stat_row: Option<i64> = None;
    let mut stat_spans: Vec<Span> = vec![Span::raw(PAGE_INDENT)];

    for el in state.doc.elements() {
        let row = el.top / UNITS_PER_ROW;
        match el.kind {
            ElementKind::Section => {
                let title = el.fragment.clone().unwrap_or_default().to_uppercase();
                let style = if revealed(el) {
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(COLOR_TEXT_MUTED)
                };
                let rule = "─".repeat(width.saturating_sub(title.len() + 6));
                put(
                    &mut lines,
                    row,
                    Line::from(vec![
                        Span::styled(format!("── {} ", title), style),
                        Span::styled(rule, Style::default().fg(COLOR_TEXT_MUTED)),
                    ]),
                );
                if el.fragment.as_deref() == Some("contact") {
                    place_form(&mut lines, state, row + 5);
                }
            }

            ElementKind::HeroContent => {
                let style = if revealed(el) {
                    Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(COLOR_TEXT_MUTED)
                };
                put(
                    &mut lines,
                    row,
                    Line::from(Span::styled(format!("{}{}", PAGE_INDENT, el.text), style)),
                );
                put(
                    &mut lines,
                    row + 1,
                    Line::from(Span::styled(
                        format!("{}{}", PAGE_INDENT, el.detail),
                        Style::default().fg(COLOR_TEXT_DIMMED),
                    )),
                );
            }

            ElementKind::Blob => {
                // Parallax: the blob's translated position, drifting past
                // the content as the page scrolls.
                let translated = el.top + el.translate_y.round() as i64;
                let slot = blob_slot(el);
                let pad = width.saturating_sub(14 + slot * 8);
                put(
                    &mut lines,
                    translated / UNITS_PER_ROW,
                    Line::from(vec![
                        Span::raw(" ".repeat(pad)),
                        Span::styled("∘ ○ ∘", Style::default().fg(COLOR_TEXT_MUTED)),
                    ]),
                );
            }

            ElementKind::Paragraph => {
                for (offset, text_line) in wrap(&el.text, width.saturating_sub(4)).into_iter().enumerate()
                {
                    put(
                        &mut lines,
                        row + offset as i64,
                        Line::from(Span::styled(
                            format!("{}{}", PAGE_INDENT, text_line),
                            Style::default().fg(COLOR_TEXT_DIMMED),
                        )),
                    );
                }
            }

            ElementKind::SkillCard | ElementKind::ProjectCard | ElementKind::EducationCard => {
                let (title_style, detail_style) = if revealed(el) {
                    (
                        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
                        Style::default().fg(COLOR_TEXT_DIMMED),
                    )
                } else {
                    (
                        Style::default().fg(COLOR_TEXT_MUTED),
                        Style::default().fg(COLOR_TEXT_MUTED),
                    )
                };
                put(
                    &mut lines,
                    row,
                    Line::from(vec![
                        Span::styled(format!("{}▸ ", PAGE_INDENT), Style::default().fg(COLOR_ACCENT)),
                        Span::styled(el.text.clone(), title_style),
                    ]),
                );
                put(
                    &mut lines,
                    row + 1,
                    Line::from(Span::styled(
                        format!("{}  {}", PAGE_INDENT, el.detail),
                        detail_style,
                    )),
                );
            }

            ElementKind::TimelineContent => {
                let style = if revealed(el) {
                    Style::default().fg(COLOR_TEXT)
                } else {
                    Style::default().fg(COLOR_TEXT_MUTED)
                };
                put(
                    &mut lines,
                    row,
                    Line::from(Span::styled(format!("{}{}", PAGE_INDENT, el.text), style)),
                );
                put(
                    &mut lines,
                    row + 1,
                    Line::from(Span::styled(
                        format!("{}  {}", PAGE_INDENT, el.detail),
                        Style::default().fg(COLOR_TEXT_DIMMED),
                    )),
                );
            }

            ElementKind::StatNumber => {
                // Stat numbers share a row; collect and place them together.
                stat_row = Some(row);
                stat_spans.push(Span::styled(
                    el.text.clone(),
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                ));
                stat_spans.push(Span::styled(
                    format!(" {}    ", el.detail),
                    Style::default().fg(COLOR_TEXT_DIMMED),
                ));
            }

            // Stat blocks are reveal targets, not visuals; Body and NavLink
            // render in the chrome.
            ElementKind::Stat | ElementKind::Body | ElementKind::NavLink => {}
        }
    }

    if let Some(row) = stat_row {
        put(&mut lines, row, Line::from(stat_spans));
    }

    lines
}

fn place_form(lines: &mut [Line<'static>], state: &RenderState, row: i64) {
    let fields = [
        (Field::Name, state.form.name.as_str()),
        (Field::Email, state.form.email.as_str()),
        (Field::Message, state.form.message.as_str()),
    ];
    for (offset, (field, value)) in fields.into_iter().enumerate() {
        let focused = state.mode == Mode::Form && state.form.focus == field;
        let label_style = if focused {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_TEXT_DIMMED)
        };
        let cursor = if focused { "█" } else { "" };
        put(
            lines,
            row + offset as i64 * 2,
            Line::from(vec![
                Span::styled(format!("{}{:<8}", PAGE_INDENT, field.label()), label_style),
                Span::styled(
                    format!("{}{}", value, cursor),
                    Style::default().fg(COLOR_TEXT),
                ),
            ]),
        );
    }
    let hint = if state.mode == Mode::Form {
        "Enter sends · Tab switches fields · Esc leaves the form"
    } else {
        "press f to write a message"
    };
    put(
        lines,
        row + 6,
        Line::from(Span::styled(
            format!("{}{}", PAGE_INDENT, hint),
            Style::default().fg(COLOR_TEXT_MUTED),
        )),
    );
}

/// Transient toast overlay, top-right, newest below older ones.
fn render_toast(frame: &mut Frame, toast: &Toast, index: usize, area: Rect) {
    let color = match toast.kind {
        ToastKind::Success => COLOR_TOAST_SUCCESS,
        ToastKind::Error => COLOR_TOAST_ERROR,
        ToastKind::Info => COLOR_TOAST_INFO,
    };
    // The exit phase plays the entry animation in reverse: the toast fades
    // back out of its corner before removal.
    let style = match toast.phase {
        ToastPhase::Entering => Style::default().bg(color).fg(COLOR_TEXT),
        ToastPhase::Exiting => Style::default().fg(COLOR_TEXT_MUTED),
    };

    let text = format!(" {} ", toast.message);
    let w = (text.len() as u16).min(area.width.saturating_sub(2));
    let y = 1 + index as u16 * 2;
    if y + 1 >= area.height || w == 0 {
        return;
    }
    let rect = Rect {
        x: area.width.saturating_sub(w + 1),
        y,
        width: w,
        height: 1,
    };
    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(Span::styled(text, style)), rect);
}

/// Context-sensitive keymap plus the active section and progress readout.
fn render_statusbar(frame: &mut Frame, state: &RenderState, area: Rect) {
    let keymap = match state.mode {
        Mode::Browse => "j/k scroll │ 1-7 jump │ Tab links │ f contact │ q quit",
        Mode::Form => "Tab field │ Enter submit │ Esc back",
    };
    let left = Span::styled(
        format!(" {}", keymap),
        Style::default().fg(COLOR_TEXT_MUTED),
    );

    let position = format!(
        "{} · {:.0}% ",
        state.active_section.as_deref().unwrap_or("—"),
        state.progress.clamp(0.0, 100.0)
    );
    let pad = area
        .width
        .saturating_sub((keymap.len() + 1 + position.len()) as u16);
    let line = Line::from(vec![
        left,
        Span::raw(" ".repeat(pad as usize)),
        Span::styled(position, Style::default().fg(COLOR_TEXT_DIMMED)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn revealed(el: &Element) -> bool {
    el.has_class("fade-in")
}

fn blob_slot(el: &Element) -> usize {
    for n in 1..=3 {
        if el.has_class(&format!("blob-{}", n)) {
            return n - 1;
        }
    }
    0
}

fn put(lines: &mut [Line<'static>], row: i64, line: Line<'static>) {
    if row >= 0 {
        if let Some(slot) = lines.get_mut(row as usize) {
            *slot = line;
        }
    }
}

/// Greedy word wrap; enough for short portfolio paragraphs.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(8);
    let mut out = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + word.len() + 1 > width {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}
