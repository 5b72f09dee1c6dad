//! The laid-out page: an element tree with geometry and class state.
//!
//! This is the document the behavior layer mutates. Elements carry the
//! attributes the effects consume: kind, class list, text, target fragment,
//! vertical offset and height. All coordinates are in layout units;
//! one terminal row is [`UNITS_PER_ROW`] units, which keeps the behavior
//! constants (50-unit reveal margin, 200-unit tracking margin) at the same
//! scale as the page they came from.

use crate::content::Content;

/// Layout units per terminal row.
pub const UNITS_PER_ROW: i64 = 10;

/// Index into the document's element store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl ElementId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Root element; carries page-wide classes like `keyboard-nav`.
    Body,
    /// Navigation link with a `#fragment` target.
    NavLink,
    /// Page section; an `id` makes it a scroll-tracking target.
    Section,
    /// The hero headline block (one-time entry fade).
    HeroContent,
    /// Decorative parallax shape inside the hero.
    Blob,
    Paragraph,
    SkillCard,
    ProjectCard,
    EducationCard,
    TimelineContent,
    /// Stat block (reveal target) wrapping a StatNumber.
    Stat,
    /// The numeric text a counter animates.
    StatNumber,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    pub classes: Vec<String>,
    pub text: String,
    /// Secondary line (card detail, stat label, timeline role).
    pub detail: String,
    /// For sections: the identifier; for nav links: the `#target`.
    pub fragment: Option<String>,
    /// Top offset in layout units, document coordinates.
    pub top: i64,
    /// Height in layout units.
    pub height: i64,
    /// Vertical translation applied by the parallax effect, in units.
    pub translate_y: f64,
}

impl Element {
    /// Idempotent class insertion: adding a class twice is a no-op.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Any class containing `needle` as a substring, the `[class*=..]` query.
    pub fn class_contains(&self, needle: &str) -> bool {
        self.classes.iter().any(|c| c.contains(needle))
    }

    /// Nav link target with the leading `#` stripped.
    pub fn target_id(&self) -> Option<&str> {
        self.fragment.as_deref().map(|f| f.strip_prefix('#').unwrap_or(f))
    }
}

/// The page: element store in document order plus total height.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    height: i64,
}

// Row heights for layout, in rows (not units).
const HERO_ROWS: i64 = 14;
const SECTION_HEADER_ROWS: i64 = 3;
const SECTION_PAD_ROWS: i64 = 2;
const PARAGRAPH_ROWS: i64 = 3;
const CARD_ROWS: i64 = 4;
const STAT_ROWS: i64 = 3;
const TIMELINE_ROWS: i64 = 4;
const FORM_ROWS: i64 = 12;

impl Document {
    /// Lay out the content into an element tree. Element order is document
    /// order; query helpers preserve it.
    pub fn build(content: &Content) -> Self {
        let mut doc = Builder::default();

        doc.push(ElementKind::Body, "", "", None, 0, 0);

        // Navigation bar: one link per section, in page order.
        let nav: &[(&str, &str)] = &[
            ("Home", "#home"),
            ("About", "#about"),
            ("Skills", "#skills"),
            ("Projects", "#projects"),
            ("Experience", "#experience"),
            ("Education", "#education"),
            ("Contact", "#contact"),
        ];
        for (label, href) in nav {
            doc.push(ElementKind::NavLink, label, "", Some(href.to_string()), 0, 0);
        }

        // Hero: headline content plus decorative parallax blobs.
        let mut y = 0;
        let hero_h = HERO_ROWS * UNITS_PER_ROW;
        doc.push_section("home", y, hero_h);
        doc.push(
            ElementKind::HeroContent,
            &content.identity.name,
            &content.identity.tagline,
            None,
            y + 2 * UNITS_PER_ROW,
            4 * UNITS_PER_ROW,
        );
        for i in 0..3 {
            let id = doc.push(
                ElementKind::Blob,
                "",
                "",
                None,
                y + (2 + 3 * i) * UNITS_PER_ROW,
                2 * UNITS_PER_ROW,
            );
            doc.add_class(id, &format!("blob-{}", i + 1));
        }
        y += hero_h;

        // About: paragraphs, then the stat row.
        let about_h = (SECTION_HEADER_ROWS
            + content.about.len() as i64 * PARAGRAPH_ROWS
            + if content.stats.is_empty() { 0 } else { STAT_ROWS + 1 }
            + SECTION_PAD_ROWS)
            * UNITS_PER_ROW;
        doc.push_section("about", y, about_h);
        let mut inner = y + SECTION_HEADER_ROWS * UNITS_PER_ROW;
        for para in &content.about {
            doc.push(
                ElementKind::Paragraph,
                para,
                "",
                None,
                inner,
                PARAGRAPH_ROWS * UNITS_PER_ROW,
            );
            inner += PARAGRAPH_ROWS * UNITS_PER_ROW;
        }
        for stat in &content.stats {
            doc.push(
                ElementKind::Stat,
                &stat.label,
                "",
                None,
                inner,
                STAT_ROWS * UNITS_PER_ROW,
            );
            doc.push(
                ElementKind::StatNumber,
                &stat.value,
                &stat.label,
                None,
                inner,
                STAT_ROWS * UNITS_PER_ROW,
            );
        }
        y += about_h;

        // Card grids: skills, projects, education.
        y = doc.push_grid("skills", ElementKind::SkillCard, &content.skills, y);
        y = doc.push_grid("projects", ElementKind::ProjectCard, &content.projects, y);

        // Experience timeline sits between the grids, as on the page.
        let exp_h = (SECTION_HEADER_ROWS
            + content.experience.len() as i64 * TIMELINE_ROWS
            + SECTION_PAD_ROWS)
            * UNITS_PER_ROW;
        doc.push_section("experience", y, exp_h);
        let mut inner = y + SECTION_HEADER_ROWS * UNITS_PER_ROW;
        for entry in &content.experience {
            doc.push(
                ElementKind::TimelineContent,
                &format!("{} · {}", entry.period, entry.role),
                &entry.summary,
                None,
                inner,
                TIMELINE_ROWS * UNITS_PER_ROW,
            );
            inner += TIMELINE_ROWS * UNITS_PER_ROW;
        }
        y += exp_h;

        y = doc.push_grid("education", ElementKind::EducationCard, &content.education, y);

        // Contact: the form itself lives in `form`, the section anchors nav.
        let contact_h = (SECTION_HEADER_ROWS + FORM_ROWS + SECTION_PAD_ROWS) * UNITS_PER_ROW;
        doc.push_section("contact", y, contact_h);
        if !content.contact.blurb.is_empty() {
            doc.push(
                ElementKind::Paragraph,
                &content.contact.blurb,
                "",
                None,
                y + SECTION_HEADER_ROWS * UNITS_PER_ROW,
                PARAGRAPH_ROWS * UNITS_PER_ROW,
            );
        }
        y += contact_h;

        Document {
            elements: doc.elements,
            height: y,
        }
    }

    /// Assemble a document from pre-laid-out elements, for callers that
    /// need exact geometry. Ids must match element positions; height is
    /// the lowest element edge.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        let height = elements.iter().map(|e| e.top + e.height).max().unwrap_or(0);
        Self { elements, height }
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.index())
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Total document height in layout units.
    pub fn height(&self) -> i64 {
        self.height
    }

    /// Height beyond the viewport; ≤ 0 means the page does not scroll.
    pub fn scrollable_height(&self, viewport_height: i64) -> i64 {
        self.height - viewport_height
    }

    pub fn body(&self) -> ElementId {
        // Body is always the first element pushed.
        ElementId(0)
    }

    fn query(&self, pred: impl Fn(&Element) -> bool) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| pred(e))
            .map(|e| e.id)
            .collect()
    }

    pub fn query_kind(&self, kind: ElementKind) -> Vec<ElementId> {
        self.query(|e| e.kind == kind)
    }

    /// Elements whose class list contains `needle` as a substring.
    pub fn query_class_contains(&self, needle: &str) -> Vec<ElementId> {
        self.query(|e| e.class_contains(needle))
    }

    /// Sections carrying an identifier, in document order.
    pub fn sections_with_id(&self) -> Vec<ElementId> {
        self.query(|e| e.kind == ElementKind::Section && e.fragment.is_some())
    }

    pub fn nav_links(&self) -> Vec<ElementId> {
        self.query_kind(ElementKind::NavLink)
    }

    /// Everything the reveal observer watches: sections, the three card
    /// kinds, timeline content, and stat blocks.
    pub fn reveal_targets(&self) -> Vec<ElementId> {
        self.query(|e| {
            matches!(
                e.kind,
                ElementKind::Section
                    | ElementKind::SkillCard
                    | ElementKind::ProjectCard
                    | ElementKind::EducationCard
                    | ElementKind::TimelineContent
                    | ElementKind::Stat
            )
        })
    }

    pub fn stat_numbers(&self) -> Vec<ElementId> {
        self.query_kind(ElementKind::StatNumber)
    }

    pub fn hero_content(&self) -> Option<ElementId> {
        self.query_kind(ElementKind::HeroContent).into_iter().next()
    }

    /// Section top for a nav fragment, if the section exists.
    pub fn section_top(&self, section_id: &str) -> Option<i64> {
        self.elements.iter().find_map(|e| {
            (e.kind == ElementKind::Section && e.fragment.as_deref() == Some(section_id))
                .then_some(e.top)
        })
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.get_mut(id) {
            el.add_class(class);
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.get_mut(id) {
            el.remove_class(class);
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).is_some_and(|e| e.has_class(class))
    }
}

#[derive(Default)]
struct Builder {
    elements: Vec<Element>,
}

impl Builder {
    fn push(
        &mut self,
        kind: ElementKind,
        text: &str,
        detail: &str,
        fragment: Option<String>,
        top: i64,
        height: i64,
    ) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(Element {
            id,
            kind,
            classes: Vec::new(),
            text: text.to_string(),
            detail: detail.to_string(),
            fragment,
            top,
            height,
            translate_y: 0.0,
        });
        id
    }

    fn push_section(&mut self, id: &str, top: i64, height: i64) -> ElementId {
        self.push(
            ElementKind::Section,
            id,
            "",
            Some(id.to_string()),
            top,
            height,
        )
    }

    fn push_grid(
        &mut self,
        section_id: &str,
        kind: ElementKind,
        cards: &[crate::content::Card],
        y: i64,
    ) -> i64 {
        let height = (SECTION_HEADER_ROWS
            + cards.len() as i64 * CARD_ROWS
            + SECTION_PAD_ROWS)
            * UNITS_PER_ROW;
        self.push_section(section_id, y, height);
        let mut inner = y + SECTION_HEADER_ROWS * UNITS_PER_ROW;
        for card in cards {
            self.push(kind, &card.title, &card.detail, None, inner, CARD_ROWS * UNITS_PER_ROW);
            inner += CARD_ROWS * UNITS_PER_ROW;
        }
        y + height
    }

    fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.elements.get_mut(id.index()) {
            el.add_class(class);
        }
    }
}
