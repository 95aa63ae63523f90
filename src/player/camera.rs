//! Chase camera and the submarine's spotlight.

use bevy::prelude::*;

use super::components::{FollowCamera, Submarine, SubmarineSpotlight};
use crate::rendering::VisualConfig;
use crate::sim::Simulation;
use crate::world::WorldEntity;

/// Spawn the chase camera and the spotlight at their initial poses.
pub fn spawn_camera_and_spotlight(
    mut commands: Commands,
    simulation: Res<Simulation>,
    visual_config: Res<VisualConfig>,
) {
    let state = simulation.state();

    let mut camera = commands.spawn((
        FollowCamera,
        WorldEntity,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 75_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_translation(state.camera.position)
            .looking_at(state.camera.target, Vec3::Y),
    ));
    if let Some(fog) = visual_config.fog() {
        camera.insert(fog);
    }

    commands.spawn((
        SubmarineSpotlight,
        WorldEntity,
        SpotLight {
            color: Color::WHITE,
            intensity: visual_config.spotlight_intensity_at(state.lighting.intensity()),
            range: visual_config.spotlight_range,
            outer_angle: visual_config.spotlight_angle,
            inner_angle: visual_config.spotlight_angle * 0.5,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(state.spotlight.position)
            .looking_at(state.spotlight.target, Vec3::Y),
    ));
}

/// Place the submarine model at the craft's pose.
pub fn sync_submarine(
    simulation: Res<Simulation>,
    mut query: Query<&mut Transform, With<Submarine>>,
) {
    let craft = &simulation.state().player;
    for mut transform in query.iter_mut() {
        transform.translation = craft.position;
        transform.rotation = craft.rotation();
    }
}

/// Follow the craft with the camera.
pub fn sync_camera(
    simulation: Res<Simulation>,
    mut query: Query<&mut Transform, With<FollowCamera>>,
) {
    let rig = simulation.state().camera;
    for mut transform in query.iter_mut() {
        *transform = Transform::from_translation(rig.position).looking_at(rig.target, Vec3::Y);
    }
}

/// Aim the spotlight and apply the current light level.
pub fn sync_spotlight(
    simulation: Res<Simulation>,
    visual_config: Res<VisualConfig>,
    mut query: Query<(&mut Transform, &mut SpotLight), With<SubmarineSpotlight>>,
) {
    let state = simulation.state();
    let intensity = visual_config.spotlight_intensity_at(state.lighting.intensity());
    for (mut transform, mut light) in query.iter_mut() {
        *transform = Transform::from_translation(state.spotlight.position)
            .looking_at(state.spotlight.target, Vec3::Y);
        if light.intensity != intensity {
            light.intensity = intensity;
        }
    }
}
