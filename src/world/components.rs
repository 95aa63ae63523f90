//! Components linking spawned meshes back to simulation state.

use bevy::prelude::*;

use crate::sim::PearlId;

/// Marker for every entity spawned for the scene, cleaned up on exit.
#[derive(Component)]
pub struct WorldEntity;

/// Index into `SimulationState::ambient`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbientLink(pub usize);

/// Pearl rendered by this entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PearlLink(pub PearlId);

/// Segment `n` of a seaweed stalk; bends with the stalk's sway.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwaySegment(pub usize);

/// Root of the treasure chest model.
#[derive(Component)]
pub struct TreasureChestModel;

/// Hinged lid of the treasure chest.
#[derive(Component)]
pub struct ChestLid;
