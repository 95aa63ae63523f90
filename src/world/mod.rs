//! World module - entity factory, sea floor and scene models.

mod builder;
mod components;
pub mod factory;
mod materials;
mod plugin;
mod prefabs;
mod spawning;
pub mod terrain;

use bevy::prelude::*;

pub use components::{AmbientLink, ChestLid, PearlLink, SwaySegment, TreasureChestModel, WorldEntity};
pub use factory::{Appearance, SceneBlueprint};
pub use plugin::{setup_world, WorldPlugin};

/// Visual parameters for the running simulation's ambient entities.
#[derive(Resource, Debug, Clone)]
pub struct SceneAppearances {
    /// Seed the scene was generated from.
    pub seed: u64,
    /// One entry per ambient entity, same order as the simulation.
    pub appearances: Vec<Appearance>,
}
