//! Submarine Explorer - pilot a submarine through a procedurally populated
//! reef, collect pearls and open a sunken treasure chest.
//!
//! # Architecture
//!
//! The scene is driven by a plain-Rust simulation core wrapped in plugins:
//!
//! - **Sim**: Input state, movement, interactions, procedural animation and
//!   the `Simulation::tick` entry point. No ECS access.
//! - **Core**: Game states, simulation events, the ordered `SimSet` pipeline
//! - **Player**: Input adapter, chase camera, submarine spotlight
//! - **World**: Entity factory, sea floor, mesh prefabs and transform sync
//! - **Rendering**: Underwater fog, clear colour and light levels
//! - **UI**: Status panel, hints, unsupported-environment screen

pub mod core;
pub mod player;
pub mod rendering;
pub mod sim;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct SubmarinePlugin;

impl Plugin for SubmarinePlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Rendering config is read by the spawn systems
            .add_plugins(rendering::RenderingPlugin)

            // Input and camera
            .add_plugins(player::PlayerPlugin)

            // Scene models
            .add_plugins(world::WorldPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
