//! Mesh assemblies for the submarine, the chest, pearls and scenery.
//!
//! Each prefab spawns a root entity carrying the simulation link and a set of
//! child meshes. The submarine faces +Z, fish face +X.

use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI};

use super::components::{AmbientLink, ChestLid, PearlLink, SwaySegment, TreasureChestModel, WorldEntity};
use super::factory::{Appearance, CoralSegment, FishVariant, SeaweedSegment};
use super::materials::{solid, tinted_blend, MaterialRegistry};
use crate::player::Submarine;
use crate::sim::{AmbientEntity, LidPose, PearlId, PearlState};

/// Spawn the player submarine at `position`.
pub fn spawn_submarine(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    mats: &MaterialRegistry,
    position: Vec3,
) -> Entity {
    let along_z = Quat::from_rotation_x(FRAC_PI_2);

    commands
        .spawn((
            Submarine,
            WorldEntity,
            Transform::from_translation(position),
            Visibility::default(),
        ))
        .with_children(|parent| {
            // Hull
            parent.spawn((
                Mesh3d(meshes.add(Capsule3d::new(0.6, 4.0))),
                MeshMaterial3d(mats.hull.clone()),
                Transform::from_rotation(along_z),
            ));
            // Ballast tank
            parent.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.4, 3.5))),
                MeshMaterial3d(mats.ballast.clone()),
                Transform::from_xyz(0.0, -0.3, 0.0).with_rotation(along_z),
            ));
            // Conning tower
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.8, 0.8, 1.0))),
                MeshMaterial3d(mats.hull.clone()),
                Transform::from_xyz(0.0, 0.8, 0.0),
            ));
            // Propeller hub and blades
            parent.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.15, 0.3))),
                MeshMaterial3d(mats.propeller.clone()),
                Transform::from_xyz(0.0, 0.0, -2.2).with_rotation(along_z),
            ));
            let blade = meshes.add(Cuboid::new(0.2, 0.8, 0.05));
            for i in 0..4 {
                parent.spawn((
                    Mesh3d(blade.clone()),
                    MeshMaterial3d(mats.propeller.clone()),
                    Transform::from_xyz(0.0, 0.0, -2.2)
                        .with_rotation(Quat::from_rotation_z(i as f32 * FRAC_PI_2)),
                ));
            }
            // Viewport
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(0.4).mesh().uv(16, 12))),
                MeshMaterial3d(mats.viewport.clone()),
                Transform::from_xyz(0.0, 0.0, 1.5),
            ));
            // Headlights
            let lamp = meshes.add(ConicalFrustum {
                radius_top: 0.2,
                radius_bottom: 0.15,
                height: 0.3,
            });
            for side in [-0.4, 0.4] {
                parent.spawn((
                    Mesh3d(lamp.clone()),
                    MeshMaterial3d(mats.headlight.clone()),
                    Transform::from_xyz(side, 0.3, 1.8).with_rotation(along_z),
                ));
            }
            // Rudder
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.1, 1.0, 0.6))),
                MeshMaterial3d(mats.hull.clone()),
                Transform::from_xyz(0.0, -0.2, -2.0),
            ));
        })
        .id()
}

/// Spawn the treasure chest with its lid in `lid` pose.
pub fn spawn_treasure_chest(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    mats: &MaterialRegistry,
    position: Vec3,
    lid: LidPose,
) -> Entity {
    commands
        .spawn((
            TreasureChestModel,
            WorldEntity,
            Transform::from_translation(position),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(2.5, 1.2, 1.8))),
                MeshMaterial3d(mats.wood.clone()),
                Transform::default(),
            ));
            parent.spawn((
                ChestLid,
                Mesh3d(meshes.add(Cuboid::new(2.5, 0.6, 1.8))),
                MeshMaterial3d(mats.wood.clone()),
                lid_transform(lid),
            ));

            let band = meshes.add(Cuboid::new(2.6, 0.15, 0.1));
            for i in 0..5 {
                parent.spawn((
                    Mesh3d(band.clone()),
                    MeshMaterial3d(mats.band.clone()),
                    Transform::from_xyz(0.0, 0.0, -0.8 + i as f32 * 0.4),
                ));
            }

            let corner = meshes.add(Cuboid::new(0.2, 1.8, 0.2));
            for x in [-1.2, 1.2] {
                for z in [-0.8, 0.8] {
                    parent.spawn((
                        Mesh3d(corner.clone()),
                        MeshMaterial3d(mats.corner.clone()),
                        Transform::from_xyz(x, 0.3, z),
                    ));
                }
            }

            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.3, 0.3, 0.2))),
                MeshMaterial3d(mats.lock.clone()),
                Transform::from_xyz(1.3, 0.6, 0.0),
            ));
        })
        .id()
}

/// Local transform of the chest lid for `pose`.
pub fn lid_transform(pose: LidPose) -> Transform {
    Transform::from_translation(pose.offset).with_rotation(Quat::from_rotation_x(pose.tilt))
}

/// Spawn a pearl linked to `id`.
pub fn spawn_pearl(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    mats: &MaterialRegistry,
    id: PearlId,
    position: Vec3,
    state: PearlState,
) -> Entity {
    commands
        .spawn((
            PearlLink(id),
            WorldEntity,
            Transform::from_translation(position),
            pearl_visibility(state),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(0.25).mesh().uv(16, 12))),
                MeshMaterial3d(mats.pearl.clone()),
            ));
            // Inner glow
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(0.15).mesh().uv(12, 8))),
                MeshMaterial3d(mats.pearl_glow.clone()),
            ));
        })
        .id()
}

/// Pearls are drawn while lying in the world and hidden while carried.
pub fn pearl_visibility(state: PearlState) -> Visibility {
    if state.is_present() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// Spawn the model for ambient entity `index`.
pub fn spawn_ambient(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    mats: &MaterialRegistry,
    index: usize,
    entity: &AmbientEntity,
    appearance: &Appearance,
) -> Entity {
    let root = commands
        .spawn((
            AmbientLink(index),
            WorldEntity,
            Transform::from_translation(entity.position),
            Visibility::default(),
        ))
        .id();

    match appearance {
        Appearance::Fish { variant, color } => {
            build_fish(commands, meshes, materials, mats, root, *variant, *color);
        }
        Appearance::Coral { segments } => build_coral(commands, meshes, materials, root, segments),
        Appearance::Seaweed { segments } => {
            build_seaweed(commands, meshes, materials, root, segments);
        }
        Appearance::Rock { radius, y_scale, color } => {
            let mesh = meshes.add(Sphere::new(*radius).mesh().uv(8, 6));
            let material = solid(materials, *color);
            commands.entity(root).with_children(|parent| {
                parent.spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(material),
                    Transform::from_scale(Vec3::new(1.0, *y_scale, 1.0)),
                ));
            });
        }
    }

    root
}

fn build_fish(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    mats: &MaterialRegistry,
    root: Entity,
    variant: FishVariant,
    color: Color,
) {
    let (radius, stretch) = match variant {
        FishVariant::Tropical => (0.4, Vec3::new(1.8, 1.2, 1.0)),
        FishVariant::Large => (0.7, Vec3::new(2.0, 1.0, 1.0)),
        FishVariant::Small => (0.3, Vec3::new(1.5, 1.0, 1.0)),
    };
    let body_material = solid(materials, color);
    let fin_material = tinted_blend(materials, color, 0.8);
    let body = meshes.add(Sphere::new(radius).mesh().uv(12, 8));
    let tail = meshes.add(Cone { radius: 0.4, height: 1.0 });
    let fin = meshes.add(Cone { radius: 0.2, height: 0.4 });
    let eye = meshes.add(Sphere::new(0.1));
    let stripes: Vec<Handle<Mesh>> = if variant == FishVariant::Tropical {
        (0..3)
            .map(|i| {
                let inner = 0.2 + i as f32 * 0.1;
                meshes.add(Annulus::new(inner, inner + 0.05))
            })
            .collect()
    } else {
        Vec::new()
    };

    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Mesh3d(body),
            MeshMaterial3d(body_material.clone()),
            Transform::from_scale(stretch),
        ));
        for (i, stripe) in stripes.into_iter().enumerate() {
            parent.spawn((
                Mesh3d(stripe),
                MeshMaterial3d(mats.stripe.clone()),
                Transform::from_xyz(-0.3 + i as f32 * 0.3, 0.0, 0.0)
                    .with_rotation(Quat::from_rotation_y(FRAC_PI_2)),
            ));
        }
        // Tail points backwards
        parent.spawn((
            Mesh3d(tail),
            MeshMaterial3d(body_material),
            Transform::from_xyz(-1.2, 0.0, 0.0).with_rotation(Quat::from_rotation_z(FRAC_PI_2)),
        ));
        parent.spawn((
            Mesh3d(fin.clone()),
            MeshMaterial3d(fin_material.clone()),
            Transform::from_xyz(0.0, 0.4, 0.0).with_rotation(Quat::from_rotation_x(PI)),
        ));
        parent.spawn((
            Mesh3d(fin),
            MeshMaterial3d(fin_material),
            Transform::from_xyz(0.0, -0.4, 0.0),
        ));
        for side in [-0.2, 0.2] {
            parent.spawn((
                Mesh3d(eye.clone()),
                MeshMaterial3d(mats.eye.clone()),
                Transform::from_xyz(0.6, 0.2, side),
            ));
        }
    });
}

fn build_coral(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    root: Entity,
    segments: &[CoralSegment],
) {
    let mut base = 0.0;
    let parts: Vec<_> = segments
        .iter()
        .map(|segment| {
            let mesh = meshes.add(
                ConicalFrustum {
                    radius_top: segment.radius_top,
                    radius_bottom: segment.radius_bottom,
                    height: segment.height,
                }
                .mesh()
                .resolution(6),
            );
            let material = solid(materials, segment.color);
            let y = base + segment.height / 2.0;
            base += segment.height;
            (mesh, material, y)
        })
        .collect();

    commands.entity(root).with_children(|parent| {
        for (mesh, material, y) in parts {
            parent.spawn((Mesh3d(mesh), MeshMaterial3d(material), Transform::from_xyz(0.0, y, 0.0)));
        }
    });
}

fn build_seaweed(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    root: Entity,
    segments: &[SeaweedSegment],
) {
    let mut base = 0.0;
    let parts: Vec<_> = segments
        .iter()
        .map(|segment| {
            let mesh = meshes.add(
                ConicalFrustum {
                    radius_top: segment.radius,
                    radius_bottom: segment.radius * 0.8,
                    height: segment.height,
                }
                .mesh()
                .resolution(6),
            );
            let material = solid(materials, segment.color);
            let y = base + segment.height / 2.0;
            base += segment.height;
            (mesh, material, y)
        })
        .collect();

    commands.entity(root).with_children(|parent| {
        for (index, (mesh, material, y)) in parts.into_iter().enumerate() {
            parent.spawn((
                SwaySegment(index),
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::from_xyz(0.0, y, 0.0),
            ));
        }
    });
}

/// Rotation of a fish model for heading `yaw`.
pub fn fish_rotation(yaw: f32) -> Quat {
    Quat::from_rotation_y(-yaw)
}
