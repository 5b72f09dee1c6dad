//! Integration test suite for folio.
//!
//! These tests exercise the page behavior end-to-end through the update
//! function: visibility-triggered reveals, staggered grids, counters,
//! scroll-linked effects, section tracking, the contact form, and toast
//! lifecycles. Timer side effects are asserted as commands and their
//! callback messages are fed back in by hand, so every test is
//! deterministic - no terminal, no sleeps.

mod fixtures;

mod contact_form;
mod counters;
mod notifications;
mod scroll_tracking;
mod visibility;
