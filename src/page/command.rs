//! Commands for the TEA (The Elm Architecture) pattern.
//!
//! Commands are outputs from the update function - they represent side
//! effects to be executed by the runtime. All of them are timers: the
//! update function never sleeps, it schedules.

use std::time::Duration;

use crate::document::ElementId;
use crate::notify::ToastId;

/// Output commands from the update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // One-shot timers (independent task per invocation)
    /// Fire `Message::RevealDue(target)` after `delay`.
    ScheduleReveal { target: ElementId, delay: Duration },
    /// Fire `Message::ToastExpired(id)` after `delay`.
    ScheduleToastExit { id: ToastId, delay: Duration },
    /// Fire `Message::ToastRemoved(id)` after `delay`.
    ScheduleToastRemoval { id: ToastId, delay: Duration },

    // Repeating tickers (cancellable, one token each)
    /// Start a 30 ms ticker firing `Message::CounterTick(element)`.
    StartCounter { element: ElementId },
    /// Cancel the ticker for a finished counter.
    StopCounter { element: ElementId },
    /// Start the ~60fps ticker firing `Message::ScrollFrame`.
    StartScrollGlide,
    /// Cancel the smooth-scroll ticker once settled.
    StopScrollGlide,

    // App lifecycle
    Quit,
}
