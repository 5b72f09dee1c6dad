//! Messages for the TEA (The Elm Architecture) pattern.
//!
//! Messages are inputs to the update function - they come from terminal
//! events or from the timer tasks the runtime spawned on our behalf.

use crossterm::event::KeyEvent;

use crate::document::ElementId;
use crate::notify::ToastId;

/// Input messages to the update function.
#[derive(Debug)]
pub enum Message {
    // Keyboard/terminal events
    Key(KeyEvent),
    /// Any mouse button press (clears the keyboard-nav affordance).
    MouseDown,
    /// Mouse wheel movement in rows, positive = down.
    Wheel(i32),
    Resize(u16, u16),

    // Timer callbacks
    /// A staggered reveal delay elapsed for this element.
    RevealDue(ElementId),
    /// 30 ms counter ticker fired for this stat number.
    CounterTick(ElementId),
    /// A toast's 3000 ms display window ended; start its exit animation.
    ToastExpired(ToastId),
    /// A toast's 300 ms exit animation ended; drop it from the document.
    ToastRemoved(ToastId),
    /// Smooth-scroll frame tick.
    ScrollFrame,
}
