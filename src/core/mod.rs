//! Core game module - states, events and the simulation driver.
//!
//! This module provides the foundation that all other plugins build upon.

mod events;
mod plugin;
mod states;

pub use events::*;
pub use plugin::{CorePlugin, CurrentStatus, StartupFailure};
pub use states::*;
