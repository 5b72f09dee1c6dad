//! The Elm Architecture (TEA) implementation for the page behavior layer.
//!
//! This module provides a clean separation of concerns:
//! - `PageController`: Pure page state, owning every watcher and animation
//! - `Message`: Inputs to the update function
//! - `Command`: Outputs (side effects, mostly timers) from the update function
//! - `update`: Pure function that transforms state

pub mod command;
pub mod controller;
pub mod message;
pub mod update;

pub use command::Command;
pub use controller::{Mode, PageController};
pub use message::Message;
pub use update::{startup, update};
