//! Scene construction from the simulation's initial state.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::factory::Appearance;
use super::materials::MaterialRegistry;
use super::prefabs::{spawn_ambient, spawn_pearl, spawn_submarine, spawn_treasure_chest};
use super::spawning::{spawn_sea_floor, spawn_sunlight};
use crate::rendering::VisualConfig;
use crate::sim::SimulationState;

/// Spawn a model for everything in `state`.
///
/// `appearances` must line up with `state.ambient`; extra entries on either
/// side are skipped with a warning.
pub fn build_scene(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    state: &SimulationState,
    appearances: &[Appearance],
    seed: u64,
    floor_y: f32,
    visual_config: &VisualConfig,
) {
    let registry = MaterialRegistry::new(materials);
    // Separate stream from the factory draws
    let mut floor_rng = StdRng::seed_from_u64(seed.wrapping_add(1));

    spawn_sunlight(commands, visual_config);
    spawn_sea_floor(commands, meshes, materials, visual_config, floor_y, &mut floor_rng);

    spawn_submarine(commands, meshes, &registry, state.player.position);
    spawn_treasure_chest(
        commands,
        meshes,
        &registry,
        state.treasure.position,
        state.treasure.lid(),
    );

    if appearances.len() != state.ambient.len() {
        warn!(
            "Scene has {} ambient entities but {} appearances",
            state.ambient.len(),
            appearances.len()
        );
    }
    for (index, (entity, appearance)) in state.ambient.iter().zip(appearances).enumerate() {
        spawn_ambient(commands, meshes, materials, &registry, index, entity, appearance);
    }

    for (id, pearl) in state.pearls.iter() {
        spawn_pearl(commands, meshes, &registry, id, pearl.position, pearl.state());
    }

    info!(
        "Built scene: {} ambient entities, {} pearls",
        state.ambient.len(),
        state.pearls.len()
    );
}
