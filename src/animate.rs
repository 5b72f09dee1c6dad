//! Animation state machines driven by timer ticks.
//!
//! Nothing here sleeps: the runtime owns the tickers and calls `tick()` on
//! each message, so every animation is deterministic under test.

use std::time::Duration;

use crate::document::ElementId;

/// Per-element delay step for staggered grid reveals.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Counter tick period.
pub const COUNTER_TICK: Duration = Duration::from_millis(30);

/// A counter always finishes in this many ticks, whatever the target.
pub const COUNTER_STEPS: f64 = 50.0;

/// Smooth-scroll frame period (~60fps).
pub const SCROLL_TICK: Duration = Duration::from_millis(16);

/// Classes applied when an element is revealed.
pub const REVEAL_CLASSES: [&str; 2] = ["fade-in", "slide-up"];

/// Delay before a staggered batch member reveals, by batch index.
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP * index as u32
}

/// Animates a stat's displayed number from 0 toward its target.
///
/// `increment = target / 50`, accumulated every tick; while running the
/// display is the floored accumulator plus the source suffix (`+` or `%`),
/// and on completion it snaps to the exact original text.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    element: ElementId,
    original: String,
    suffix: &'static str,
    target: f64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    /// Parse the element's text and build an animation. Returns `None` when
    /// the text has no integer prefix, in which case the text is left
    /// untouched. Targets ≤ 0 produce an already-finished animation so the
    /// final text renders immediately and no ticker ever starts.
    pub fn parse(element: ElementId, text: &str) -> Option<Self> {
        let digits: String = text
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '-')
            .collect();
        let target: i64 = digits.parse().ok()?;

        let suffix = if text.contains('+') {
            "+"
        } else if text.contains('%') {
            "%"
        } else {
            ""
        };

        let done = target <= 0;
        Some(Self {
            element,
            original: text.to_string(),
            suffix,
            target: target as f64,
            increment: target as f64 / COUNTER_STEPS,
            current: 0.0,
            done,
        })
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one tick and return the text to display.
    pub fn tick(&mut self) -> String {
        if self.done {
            return self.original.clone();
        }
        self.current += self.increment;
        if self.current >= self.target {
            self.done = true;
            self.original.clone()
        } else {
            format!("{}{}", self.current.floor() as i64, self.suffix)
        }
    }

    /// The text to show before the first tick (or immediately for targets ≤ 0).
    pub fn initial_display(&self) -> String {
        if self.done {
            self.original.clone()
        } else {
            format!("0{}", self.suffix)
        }
    }
}

/// Eased in-page scrolling: each frame closes a fixed fraction of the
/// remaining distance, then snaps once the residue is under one unit.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    current: f64,
    target: f64,
    /// Fraction of the remaining distance covered per frame.
    speed: f64,
    settled: bool,
}

impl SmoothScroll {
    const DEFAULT_SPEED: f64 = 0.25;
    const SNAP_DISTANCE: f64 = 1.0;

    pub fn new(current: i64, target: i64) -> Self {
        Self {
            current: current as f64,
            target: target as f64,
            speed: Self::DEFAULT_SPEED,
            settled: current == target,
        }
    }

    pub fn retarget(&mut self, target: i64) {
        self.target = target as f64;
        self.settled = (self.target - self.current).abs() < Self::SNAP_DISTANCE;
    }

    /// Advance one frame; returns the new scroll offset.
    pub fn tick(&mut self) -> i64 {
        if !self.settled {
            self.current += (self.target - self.current) * self.speed;
            if (self.target - self.current).abs() < Self::SNAP_DISTANCE {
                self.current = self.target;
                self.settled = true;
            }
        }
        self.current.round() as i64
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_scales_with_index() {
        assert_eq!(stagger_delay(0), Duration::ZERO);
        assert_eq!(stagger_delay(1), Duration::from_millis(100));
        assert_eq!(stagger_delay(4), Duration::from_millis(400));
    }

    #[test]
    fn test_counter_runs_fifty_ticks_and_snaps() {
        let mut counter = CounterAnimation::parse(ElementId(1), "25+").unwrap();
        assert_eq!(counter.initial_display(), "0+");

        let mut ticks = 0;
        let mut last_value = -1i64;
        loop {
            let display = counter.tick();
            ticks += 1;
            if counter.is_done() {
                assert_eq!(display, "25+");
                break;
            }
            // Non-decreasing while running, suffix preserved
            let value: i64 = display.trim_end_matches('+').parse().unwrap();
            assert!(value >= last_value);
            assert!(display.ends_with('+'));
            last_value = value;
        }
        assert_eq!(ticks, 50);
    }

    #[test]
    fn test_counter_percent_suffix() {
        let mut counter = CounterAnimation::parse(ElementId(1), "98%").unwrap();
        let first = counter.tick();
        assert!(first.ends_with('%'), "got {}", first);
        while !counter.is_done() {
            counter.tick();
        }
        assert_eq!(counter.tick(), "98%");
    }

    #[test]
    fn test_counter_plain_number() {
        let mut counter = CounterAnimation::parse(ElementId(1), "8").unwrap();
        while !counter.is_done() {
            let display = counter.tick();
            assert!(!display.contains('+') || counter.is_done());
        }
    }

    #[test]
    fn test_counter_rejects_non_numeric() {
        assert!(CounterAnimation::parse(ElementId(1), "lots").is_none());
        assert!(CounterAnimation::parse(ElementId(1), "").is_none());
    }

    #[test]
    fn test_counter_zero_target_finishes_immediately() {
        let counter = CounterAnimation::parse(ElementId(1), "0").unwrap();
        assert!(counter.is_done());
        assert_eq!(counter.initial_display(), "0");
    }

    #[test]
    fn test_counter_negative_target_finishes_immediately() {
        let counter = CounterAnimation::parse(ElementId(1), "-3").unwrap();
        assert!(counter.is_done());
        assert_eq!(counter.initial_display(), "-3");
    }

    #[test]
    fn test_smooth_scroll_converges_and_settles() {
        let mut scroll = SmoothScroll::new(0, 1000);
        let mut last = 0;
        let mut frames = 0;
        while !scroll.is_settled() {
            let y = scroll.tick();
            assert!(y >= last, "monotonic approach: {} then {}", last, y);
            last = y;
            frames += 1;
            assert!(frames < 200, "failed to settle");
        }
        assert_eq!(last, 1000);
    }

    #[test]
    fn test_smooth_scroll_retarget_mid_flight() {
        let mut scroll = SmoothScroll::new(0, 1000);
        for _ in 0..3 {
            scroll.tick();
        }
        scroll.retarget(0);
        while !scroll.is_settled() {
            scroll.tick();
        }
        assert_eq!(scroll.tick(), 0);
    }

    #[test]
    fn test_smooth_scroll_same_target_starts_settled() {
        let scroll = SmoothScroll::new(500, 500);
        assert!(scroll.is_settled());
    }
}
