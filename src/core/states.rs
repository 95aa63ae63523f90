//! Game state definitions that control the overall flow of the demo.
//!
//! States determine which systems run at any given time. The simulation
//! systems only run in `InGame`; `Unsupported` is terminal.

use bevy::prelude::*;

/// Main game states.
///
/// - Start in `Loading` while the environment is checked and the world generated
/// - Move to `InGame` once the simulation has started
/// - `Unsupported` when the environment cannot render the scene
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Checking capabilities and generating the world
    #[default]
    Loading,
    /// Active gameplay
    InGame,
    /// The environment lacks a required capability; nothing runs
    Unsupported,
}

/// Ordering of the per-frame simulation pipeline.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Translate window/device input into simulation input events
    Input,
    /// Advance the simulation by one tick
    Tick,
    /// Copy simulation state onto transforms, lights and the HUD
    Present,
}
