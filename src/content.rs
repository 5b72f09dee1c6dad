//! Portfolio content: what the page says, as opposed to how it behaves.
//!
//! Content is loaded from a TOML file and laid out by [`crate::document`].
//! A built-in sample portfolio keeps the binary runnable with no arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{flog_debug, Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub identity: Identity,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<Card>,
    #[serde(default)]
    pub projects: Vec<Card>,
    #[serde(default)]
    pub education: Vec<Card>,
    #[serde(default)]
    pub experience: Vec<TimelineEntry>,
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub tagline: String,
}

/// A headline figure shown in the about section. The value keeps its
/// literal suffix (`25+`, `98%`) so the counter animation can restore it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub role: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Contact {
    #[serde(default)]
    pub blurb: String,
}

impl Content {
    pub fn load(path: &Path) -> Result<Self> {
        flog_debug!("Content::load path={}", path.display());
        let content: Self = toml::from_str(&fs::read_to_string(path)?)?;
        content.validate()?;
        Ok(content)
    }

    /// Structural checks beyond what serde enforces. Used by `folio check`
    /// and on every load so a broken file fails before the TUI starts.
    pub fn validate(&self) -> Result<()> {
        if self.identity.name.trim().is_empty() {
            return Err(Error::Content("identity.name is empty".to_string()));
        }
        for (i, stat) in self.stats.iter().enumerate() {
            if stat.value.trim().is_empty() {
                return Err(Error::Content(format!("stats[{}].value is empty", i)));
            }
        }
        for (i, card) in self
            .skills
            .iter()
            .chain(&self.projects)
            .chain(&self.education)
            .enumerate()
        {
            if card.title.trim().is_empty() {
                return Err(Error::Content(format!("card[{}].title is empty", i)));
            }
        }
        Ok(())
    }
}

impl Default for Content {
    fn default() -> Self {
        Self {
            identity: Identity {
                name: "Jordan Reyes".to_string(),
                tagline: "Systems engineer who ships small, sharp tools".to_string(),
            },
            about: vec![
                "I build infrastructure and developer tooling, with a bias \
                 toward software that stays understandable a year later."
                    .to_string(),
                "Currently focused on terminal interfaces and event-driven \
                 services."
                    .to_string(),
            ],
            stats: vec![
                Stat {
                    value: "25+".to_string(),
                    label: "Projects shipped".to_string(),
                },
                Stat {
                    value: "8".to_string(),
                    label: "Years writing software".to_string(),
                },
                Stat {
                    value: "98%".to_string(),
                    label: "Uptime on my watch".to_string(),
                },
            ],
            skills: vec![
                Card {
                    title: "Rust".to_string(),
                    detail: "Servers, CLIs, and the occasional proc macro".to_string(),
                },
                Card {
                    title: "Distributed systems".to_string(),
                    detail: "Consensus-adjacent plumbing and observability".to_string(),
                },
                Card {
                    title: "Terminal UIs".to_string(),
                    detail: "Keyboard-first interfaces people actually use".to_string(),
                },
            ],
            projects: vec![
                Card {
                    title: "driftwatch".to_string(),
                    detail: "Config-drift detector for fleets of build agents".to_string(),
                },
                Card {
                    title: "quilllog".to_string(),
                    detail: "Append-only structured log with tail-friendly framing".to_string(),
                },
                Card {
                    title: "folio".to_string(),
                    detail: "This page, rendered where I live: the terminal".to_string(),
                },
            ],
            education: vec![Card {
                title: "B.Sc. Computer Science".to_string(),
                detail: "Graduated 2018, systems track".to_string(),
            }],
            experience: vec![
                TimelineEntry {
                    period: "2022 — now".to_string(),
                    role: "Senior engineer, platform team".to_string(),
                    summary: "Own the build and release pipeline".to_string(),
                },
                TimelineEntry {
                    period: "2018 — 2022".to_string(),
                    role: "Backend engineer".to_string(),
                    summary: "APIs, queues, and the dashboards that watch them".to_string(),
                },
            ],
            contact: Contact {
                blurb: "Have a project in mind? Send a note.".to_string(),
            },
        }
    }
}
