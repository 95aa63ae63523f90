//! Procedural animation for ambient entities and loose pearls.

use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

use super::interaction::PearlCollection;

pub const FISH_BOB_SPEED: f32 = 0.02;
pub const FISH_BOB_AMPLITUDE: f32 = 0.01;
pub const PEARL_BOB_SPEED: f32 = 0.03;
pub const PEARL_BOB_AMPLITUDE: f32 = 0.02;
pub const SWAY_AMPLITUDE: f32 = 0.1;
/// Phase lag between neighbouring seaweed segments.
pub const SWAY_SEGMENT_LAG: f32 = 0.2;

/// Wandering state of a fish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishMotion {
    /// Distance per reference tick.
    pub speed: f32,
    /// Heading in the XZ plane, radians from +X towards +Z.
    pub direction: f32,
    pub bob_phase: f32,
}

impl FishMotion {
    /// Unit vector of travel.
    pub fn heading(&self) -> Vec3 {
        Vec3::new(self.direction.cos(), 0.0, self.direction.sin())
    }
}

/// Sway oscillator for a seaweed stalk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeaweedSway {
    pub phase: f32,
    /// Phase advance per reference tick.
    pub speed: f32,
    pub segments: usize,
}

impl SeaweedSway {
    /// Bend of segment `index` about Z. Later segments lag behind, which
    /// gives the stalk a travelling-wave look.
    pub fn segment_angle(&self, index: usize) -> f32 {
        (self.phase + index as f32 * SWAY_SEGMENT_LAG).sin() * SWAY_AMPLITUDE
    }
}

/// What an ambient entity is, with the parameters its animation needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmbientKind {
    Fish(FishMotion),
    Seaweed(SeaweedSway),
    Coral,
    Rock,
}

/// Scenery that never interacts with the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientEntity {
    pub position: Vec3,
    /// Rotation about the vertical axis.
    pub yaw: f32,
    pub kind: AmbientKind,
}

impl AmbientEntity {
    pub fn new(position: Vec3, kind: AmbientKind) -> Self {
        let yaw = match kind {
            AmbientKind::Fish(fish) => fish.direction,
            _ => 0.0,
        };
        Self { position, yaw, kind }
    }
}

/// Advance every ambient entity by `frame_scale` reference ticks.
pub fn animate_ambient(entities: &mut [AmbientEntity], fish_bound: f32, frame_scale: f32) {
    for entity in entities.iter_mut() {
        match &mut entity.kind {
            AmbientKind::Fish(fish) => {
                swim(&mut entity.position, fish, fish_bound, frame_scale);
                entity.yaw = fish.direction;
            }
            AmbientKind::Seaweed(sway) => {
                sway.phase += sway.speed * frame_scale;
            }
            AmbientKind::Coral | AmbientKind::Rock => {}
        }
    }
}

fn swim(position: &mut Vec3, fish: &mut FishMotion, bound: f32, frame_scale: f32) {
    fish.bob_phase += FISH_BOB_SPEED * frame_scale;
    position.y += fish.bob_phase.sin() * FISH_BOB_AMPLITUDE * frame_scale;
    *position += fish.heading() * fish.speed * frame_scale;

    // Turn only while the net motion across the exceeded axes still points
    // outward; a fish that has just turned must not flip back next tick.
    let heading = fish.heading();
    let outward: f32 = [(position.x, heading.x), (position.z, heading.z)]
        .into_iter()
        .filter(|(p, _)| p.abs() > bound)
        .map(|(p, h)| p.signum() * h)
        .sum();
    if outward > 0.0 {
        fish.direction = (fish.direction + PI).rem_euclid(TAU);
    }
}

/// Bob and spin every pearl lying in the world.
pub fn animate_pearls(pearls: &mut PearlCollection, frame_scale: f32) {
    for pearl in pearls.iter_mut() {
        if !pearl.state().is_present() {
            continue;
        }
        pearl.bob_phase += PEARL_BOB_SPEED * frame_scale;
        pearl.position.y += pearl.bob_phase.sin() * PEARL_BOB_AMPLITUDE * frame_scale;
        pearl.yaw += pearl.spin_speed * frame_scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::config::InteractionConfig;
    use crate::sim::interaction::{interact, Pearl, PearlId};

    fn fish(position: Vec3, direction: f32) -> AmbientEntity {
        AmbientEntity::new(
            position,
            AmbientKind::Fish(FishMotion {
                speed: 0.05,
                direction,
                bob_phase: 0.0,
            }),
        )
    }

    fn motion(entity: &AmbientEntity) -> FishMotion {
        match entity.kind {
            AmbientKind::Fish(fish) => fish,
            other => panic!("Expected fish, got {other:?}"),
        }
    }

    #[test]
    fn fish_past_bound_turns_around_and_heads_back() {
        let mut entities = [fish(Vec3::new(61.0, 0.0, 0.0), 0.0)];

        animate_ambient(&mut entities, 60.0, 1.0);
        let turned = motion(&entities[0]);
        assert!((turned.direction - PI).abs() < 1e-6, "direction={}", turned.direction);

        let mut last_x = entities[0].position.x;
        for _ in 0..50 {
            animate_ambient(&mut entities, 60.0, 1.0);
            let x = entities[0].position.x;
            assert!(x < last_x, "fish moved from {last_x} to {x}");
            last_x = x;
        }
        assert!((motion(&entities[0]).direction - PI).abs() < 1e-6);
    }

    #[test]
    fn fish_inside_bounds_keeps_heading() {
        let mut entities = [fish(Vec3::new(10.0, 0.0, -20.0), 1.0)];
        for _ in 0..100 {
            animate_ambient(&mut entities, 60.0, 1.0);
        }
        assert_eq!(motion(&entities[0]).direction, 1.0);
        assert_eq!(entities[0].yaw, 1.0);
    }

    #[test]
    fn fish_stays_near_bounds_over_long_runs() {
        let mut entities = [
            fish(Vec3::new(0.0, 0.0, 0.0), 0.3),
            fish(Vec3::new(-59.0, 0.0, 40.0), 2.5),
            fish(Vec3::new(20.0, 0.0, 59.9), 1.6),
        ];
        for _ in 0..20_000 {
            animate_ambient(&mut entities, 60.0, 1.0);
            for entity in &entities {
                assert!(entity.position.x.abs() < 61.0 && entity.position.z.abs() < 61.0);
            }
        }
    }

    #[test]
    fn seaweed_sway_travels_along_segments() {
        let mut entities = [AmbientEntity::new(
            Vec3::ZERO,
            AmbientKind::Seaweed(SeaweedSway {
                phase: 0.0,
                speed: 0.015,
                segments: 10,
            }),
        )];
        animate_ambient(&mut entities, 60.0, 2.0);

        let AmbientKind::Seaweed(sway) = entities[0].kind else {
            panic!("seaweed changed kind");
        };
        assert!((sway.phase - 0.03).abs() < 1e-6);
        assert!((sway.segment_angle(0) - 0.03_f32.sin() * 0.1).abs() < 1e-6);
        assert!((sway.segment_angle(3) - 0.63_f32.sin() * 0.1).abs() < 1e-6);
        for i in 0..sway.segments {
            assert!(sway.segment_angle(i).abs() <= SWAY_AMPLITUDE);
        }
    }

    #[test]
    fn static_scenery_never_moves() {
        let mut entities = [
            AmbientEntity::new(Vec3::new(1.0, -10.0, 2.0), AmbientKind::Coral),
            AmbientEntity::new(Vec3::new(3.0, -9.0, 4.0), AmbientKind::Rock),
        ];
        let before = entities;
        animate_ambient(&mut entities, 60.0, 1.0);
        assert_eq!(entities, before);
    }

    #[test]
    fn only_loose_pearls_bob() {
        let mut pearls = PearlCollection::new(vec![
            Pearl::new(Vec3::ZERO, 1.0, 0.01),
            Pearl::new(Vec3::new(50.0, 0.0, 0.0), 1.0, 0.01),
        ]);
        interact(&mut pearls, Vec3::ZERO, &InteractionConfig::default());

        animate_pearls(&mut pearls, 1.0);

        let held = pearls.get(PearlId(0)).unwrap();
        assert_eq!(held.bob_phase, 1.0);
        assert_eq!(held.yaw, 0.0);

        let loose = pearls.get(PearlId(1)).unwrap();
        assert!((loose.bob_phase - 1.03).abs() < 1e-6);
        assert!((loose.position.y - 1.03_f32.sin() * 0.02).abs() < 1e-6);
        assert!((loose.yaw - 0.01).abs() < 1e-6);
    }
}
