//! Lights and the sea floor.

use bevy::prelude::*;
use rand::Rng;

use super::components::WorldEntity;
use super::terrain::build_floor_mesh;
use crate::rendering::visual_config::{rgb, VisualConfig};

/// Spawn the faint daylight filtering down from the surface.
pub fn spawn_sunlight(commands: &mut Commands, visual_config: &VisualConfig) {
    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: visual_config.sun_illuminance,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        WorldEntity,
    ));
}

/// Spawn the rolling sea floor.
pub fn spawn_sea_floor(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    visual_config: &VisualConfig,
    floor_y: f32,
    rng: &mut impl Rng,
) {
    let material = materials.add(StandardMaterial {
        base_color: rgb(visual_config.floor_color).with_alpha(0.9),
        perceptual_roughness: 1.0,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(build_floor_mesh(rng))),
        MeshMaterial3d(material),
        floor_transform(floor_y),
        WorldEntity,
    ));
}

/// Floor plane placement; coral and seaweed are rooted at the same `floor_y`.
pub fn floor_transform(floor_y: f32) -> Transform {
    Transform::from_xyz(0.0, floor_y, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{AmbientKind, WorldConfig};
    use crate::world::SceneBlueprint;

    #[test]
    fn floor_follows_configured_floor_level() {
        let mut config = WorldConfig::default();
        config.population.floor_y = -14.0;
        let blueprint = SceneBlueprint::generate(&config, 9);

        let floor = floor_transform(config.population.floor_y);
        for entity in &blueprint.state.ambient {
            if matches!(entity.kind, AmbientKind::Coral | AmbientKind::Seaweed(_)) {
                assert_eq!(entity.position.y, floor.translation.y);
            }
        }
    }
}
