//! World plugin - builds the scene and mirrors simulation state onto it.

use bevy::prelude::*;

use crate::core::{GameState, SimSet};
use crate::rendering::VisualConfig;
use crate::sim::{AmbientKind, Simulation, WorldConfig};

use super::builder::build_scene;
use super::components::{AmbientLink, ChestLid, PearlLink, SwaySegment, WorldEntity};
use super::prefabs::{fish_rotation, lid_transform, pearl_visibility};
use super::SceneAppearances;

/// World plugin - handles scene setup and per-frame transform sync.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InGame), setup_world)
            .add_systems(OnExit(GameState::InGame), cleanup_world)
            .add_systems(
                Update,
                (sync_ambient, sync_seaweed, sync_pearls, sync_chest_lid).in_set(SimSet::Present),
            );
    }
}

/// Spawn models for the freshly started simulation.
pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    simulation: Res<Simulation>,
    scene: Res<SceneAppearances>,
    world_config: Res<WorldConfig>,
    visual_config: Res<VisualConfig>,
) {
    build_scene(
        &mut commands,
        &mut meshes,
        &mut materials,
        simulation.state(),
        &scene.appearances,
        scene.seed,
        world_config.population.floor_y,
        &visual_config,
    );
}

/// Clean up scene entities when leaving InGame state.
fn cleanup_world(mut commands: Commands, query: Query<Entity, With<WorldEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Move fish, seaweed, coral and rocks to their simulated poses.
fn sync_ambient(simulation: Res<Simulation>, mut query: Query<(&AmbientLink, &mut Transform)>) {
    let ambient = &simulation.state().ambient;
    for (link, mut transform) in query.iter_mut() {
        let Some(entity) = ambient.get(link.0) else {
            continue;
        };
        transform.translation = entity.position;
        if let AmbientKind::Fish(_) = entity.kind {
            transform.rotation = fish_rotation(entity.yaw);
        }
    }
}

/// Bend each seaweed segment by its stalk's current sway.
fn sync_seaweed(
    simulation: Res<Simulation>,
    stalks: Query<&AmbientLink>,
    mut segments: Query<(&SwaySegment, &Parent, &mut Transform)>,
) {
    let ambient = &simulation.state().ambient;
    for (segment, parent, mut transform) in segments.iter_mut() {
        let Ok(link) = stalks.get(parent.get()) else {
            continue;
        };
        if let Some(AmbientKind::Seaweed(sway)) = ambient.get(link.0).map(|e| e.kind) {
            transform.rotation = Quat::from_rotation_z(sway.segment_angle(segment.0));
        }
    }
}

/// Place and spin pearls; the carried one is hidden.
fn sync_pearls(
    simulation: Res<Simulation>,
    mut query: Query<(&PearlLink, &mut Transform, &mut Visibility)>,
) {
    let pearls = &simulation.state().pearls;
    for (link, mut transform, mut visibility) in query.iter_mut() {
        if let Some(pearl) = pearls.get(link.0) {
            transform.translation = pearl.position;
            transform.rotation = Quat::from_rotation_y(pearl.yaw);
            visibility.set_if_neq(pearl_visibility(pearl.state()));
        }
    }
}

/// Swing the chest lid once the chest is opened.
fn sync_chest_lid(simulation: Res<Simulation>, mut query: Query<&mut Transform, With<ChestLid>>) {
    if !simulation.is_changed() {
        return;
    }
    let pose = lid_transform(simulation.state().treasure.lid());
    for mut transform in query.iter_mut() {
        transform.set_if_neq(pose);
    }
}
