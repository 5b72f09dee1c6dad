//! Rate-limiting utilities for bursty event sources.
//!
//! `Debouncer` fires once a quiet period has elapsed after the last trigger
//! (trailing edge); `Throttler` admits at most one action per window
//! (leading edge). The runtime throttles resize bursts; scroll handling is
//! deliberately left unthrottled so effects recompute on every event.

use std::time::{Duration, Instant};

/// Trailing-edge debouncer: `poll` reports readiness once `wait` has
/// elapsed since the most recent `trigger`.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the debouncer. Repeated triggers push the deadline out.
    pub fn trigger(&mut self) {
        self.trigger_at(Instant::now());
    }

    pub fn trigger_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// True exactly once per armed cycle, after the quiet period has passed.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Leading-edge throttler: `allow` admits the first call, then rejects
/// everything until `limit` has elapsed.
#[derive(Debug)]
pub struct Throttler {
    limit: Duration,
    last: Option<Instant>,
}

impl Throttler {
    pub fn new(limit: Duration) -> Self {
        Self { limit, last: None }
    }

    pub fn allow(&mut self) -> bool {
        self.allow_at(Instant::now())
    }

    pub fn allow_at(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.limit => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}
