//! Entity factory - scatters fish, coral, seaweed, rocks and pearls.
//!
//! Produces the initial [`SimulationState`] together with an [`Appearance`]
//! for every ambient entity. Appearances only matter to the mesh builders in
//! `prefabs`; the simulation never reads them.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use std::ops::Range;

use crate::sim::{AmbientEntity, AmbientKind, FishMotion, Pearl, SeaweedSway, SimulationState, WorldConfig};

const TROPICAL_PALETTE: [u32; 5] = [0xff6b35, 0x4ecdc4, 0xffe66d, 0xff6b6b, 0xa8e6cf];
const CORAL_PALETTE: [u32; 5] = [0xff6b6b, 0x4ecdc4, 0x45b7d1, 0x96ceb4, 0xffeaa7];
const LARGE_FISH_COLOR: u32 = 0x4a90e2;

/// Body style of a fish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FishVariant {
    /// Palette-coloured with dark stripes.
    Tropical,
    /// Big blue fish.
    Large,
    /// Small fish in a random colour.
    Small,
}

/// One stacked segment of a coral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoralSegment {
    pub height: f32,
    pub radius_bottom: f32,
    pub radius_top: f32,
    pub color: Color,
}

/// One stacked segment of a seaweed stalk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeaweedSegment {
    pub height: f32,
    pub radius: f32,
    pub color: Color,
}

/// Randomized visual parameters of an ambient entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Appearance {
    Fish { variant: FishVariant, color: Color },
    Coral { segments: Vec<CoralSegment> },
    Seaweed { segments: Vec<SeaweedSegment> },
    Rock { radius: f32, y_scale: f32, color: Color },
}

/// Initial world contents.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneBlueprint {
    pub seed: u64,
    pub state: SimulationState,
    /// One entry per `state.ambient` entity, same order.
    pub appearances: Vec<Appearance>,
}

impl SceneBlueprint {
    /// Generate with the configured seed, or a random one.
    pub fn from_config(config: &WorldConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!("Generating world with seed {}", seed);
        Self::generate(config, seed)
    }

    /// Generate deterministically from `seed`.
    pub fn generate(config: &WorldConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let population = &config.population;

        let mut ambient = Vec::new();
        let mut appearances = Vec::new();

        for _ in 0..population.fish {
            let position = Vec3::new(
                spread(&mut rng, population.fish_spread),
                rng.gen_range(-5.0..10.0),
                spread(&mut rng, population.fish_spread),
            );
            let (entity, appearance) = create_fish(&mut rng, position);
            ambient.push(entity);
            appearances.push(appearance);
        }

        for _ in 0..population.coral {
            let position = Vec3::new(
                spread(&mut rng, population.coral_spread),
                population.floor_y,
                spread(&mut rng, population.coral_spread),
            );
            ambient.push(AmbientEntity::new(position, AmbientKind::Coral));
            appearances.push(create_coral(&mut rng));
        }

        for _ in 0..population.seaweed {
            let position = Vec3::new(
                spread(&mut rng, population.seaweed_spread),
                population.floor_y,
                spread(&mut rng, population.seaweed_spread),
            );
            let (entity, appearance) = create_seaweed(&mut rng, position);
            ambient.push(entity);
            appearances.push(appearance);
        }

        for _ in 0..population.rocks {
            let position = Vec3::new(
                spread(&mut rng, population.rock_spread),
                population.floor_y + rng.gen_range(1.0..3.0),
                spread(&mut rng, population.rock_spread),
            );
            ambient.push(AmbientEntity::new(position, AmbientKind::Rock));
            appearances.push(create_rock(&mut rng));
        }

        let pearls = (0..population.pearls)
            .map(|_| {
                let position = Vec3::new(
                    spread(&mut rng, population.pearl_spread),
                    rng.gen_range(-8.0..-5.0),
                    spread(&mut rng, population.pearl_spread),
                );
                Pearl::new(position, rng.gen_range(0.0..TAU), rng.gen_range(-0.01..0.01))
            })
            .collect();

        Self {
            seed,
            state: SimulationState::new(config, pearls, ambient),
            appearances,
        }
    }
}

/// Uniform sample in [-half_extent, half_extent).
fn spread(rng: &mut impl Rng, half_extent: f32) -> f32 {
    if half_extent <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-half_extent..half_extent)
}

fn pick(rng: &mut impl Rng, palette: &[u32]) -> Color {
    hex(palette[rng.gen_range(0..palette.len())])
}

fn hex(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

fn create_fish(rng: &mut impl Rng, position: Vec3) -> (AmbientEntity, Appearance) {
    let (variant, color) = match rng.gen_range(0..3) {
        0 => (FishVariant::Tropical, pick(rng, &TROPICAL_PALETTE)),
        1 => (FishVariant::Large, hex(LARGE_FISH_COLOR)),
        _ => (
            FishVariant::Small,
            Color::srgb(rng.gen(), rng.gen(), rng.gen()),
        ),
    };
    let motion = FishMotion {
        speed: rng.gen_range(0.015..0.055),
        direction: rng.gen_range(0.0..TAU),
        bob_phase: rng.gen_range(0.0..TAU),
    };
    (
        AmbientEntity::new(position, AmbientKind::Fish(motion)),
        Appearance::Fish { variant, color },
    )
}

fn create_coral(rng: &mut impl Rng) -> Appearance {
    let height: f32 = rng.gen_range(1.0..4.0);
    let count = rng.gen_range(3..8);
    let segment_height = height / count as f32;

    let segments = (0..count)
        .map(|i| {
            let radius: f32 = rng.gen_range(0.2..0.5);
            CoralSegment {
                height: segment_height,
                radius_bottom: radius * taper(i, count),
                radius_top: radius * taper(i + 1, count),
                color: pick(rng, &CORAL_PALETTE),
            }
        })
        .collect();

    Appearance::Coral { segments }
}

/// Coral narrows to half its base radius at the tip.
fn taper(index: usize, count: usize) -> f32 {
    1.0 - index as f32 / count as f32 * 0.5
}

fn create_seaweed(rng: &mut impl Rng, position: Vec3) -> (AmbientEntity, Appearance) {
    let height: f32 = rng.gen_range(2.0..6.0);
    let count = rng.gen_range(8..16);
    let segment_height = height / count as f32;

    let segments = (0..count)
        .map(|_| {
            let hue: f32 = rng.gen_range(0.25..0.35);
            SeaweedSegment {
                height: segment_height,
                radius: rng.gen_range(0.1..0.15),
                color: Color::hsl(hue * 360.0, 0.7, 0.3),
            }
        })
        .collect();

    let sway = SeaweedSway {
        phase: rng.gen_range(0.0..TAU),
        speed: rng.gen_range(0.01..0.02),
        segments: count,
    };

    (
        AmbientEntity::new(position, AmbientKind::Seaweed(sway)),
        Appearance::Seaweed { segments },
    )
}

fn create_rock(rng: &mut impl Rng) -> Appearance {
    Appearance::Rock {
        radius: rng.gen_range(1.0..2.5),
        y_scale: rng.gen_range(0.6..1.0),
        color: Color::hsl(36.0, 0.3, rng.gen_range(0.2..0.4)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PearlState;

    #[test]
    fn same_seed_same_world() {
        let config = WorldConfig::default();
        let a = SceneBlueprint::generate(&config, 42);
        let b = SceneBlueprint::generate(&config, 42);
        assert_eq!(a, b);

        let c = SceneBlueprint::generate(&config, 43);
        assert_ne!(a.state.ambient, c.state.ambient);
    }

    #[test]
    fn population_matches_config() {
        let config = WorldConfig::default();
        let blueprint = SceneBlueprint::generate(&config, 7);
        let population = &config.population;

        let count = |f: fn(&AmbientKind) -> bool| {
            blueprint.state.ambient.iter().filter(|e| f(&e.kind)).count()
        };
        assert_eq!(count(|k| matches!(k, AmbientKind::Fish(_))), population.fish);
        assert_eq!(count(|k| matches!(k, AmbientKind::Coral)), population.coral);
        assert_eq!(count(|k| matches!(k, AmbientKind::Seaweed(_))), population.seaweed);
        assert_eq!(count(|k| matches!(k, AmbientKind::Rock)), population.rocks);
        assert_eq!(blueprint.state.pearls.len(), population.pearls);
        assert_eq!(blueprint.appearances.len(), blueprint.state.ambient.len());
    }

    #[test]
    fn appearances_line_up_with_kinds() {
        let blueprint = SceneBlueprint::generate(&WorldConfig::default(), 99);
        for (entity, appearance) in blueprint.state.ambient.iter().zip(&blueprint.appearances) {
            match (&entity.kind, appearance) {
                (AmbientKind::Fish(_), Appearance::Fish { .. })
                | (AmbientKind::Coral, Appearance::Coral { .. })
                | (AmbientKind::Rock, Appearance::Rock { .. }) => {}
                (AmbientKind::Seaweed(sway), Appearance::Seaweed { segments }) => {
                    assert_eq!(sway.segments, segments.len());
                    assert!((8..16).contains(&segments.len()));
                }
                (kind, appearance) => panic!("{kind:?} paired with {appearance:?}"),
            }
        }
    }

    #[test]
    fn parameters_fall_in_reference_ranges() {
        let config = WorldConfig::default();
        let blueprint = SceneBlueprint::generate(&config, 1234);

        for entity in &blueprint.state.ambient {
            match entity.kind {
                AmbientKind::Fish(fish) => {
                    assert!(entity.position.x.abs() <= 60.0 && entity.position.z.abs() <= 60.0);
                    assert!((-5.0..10.0).contains(&entity.position.y));
                    assert!((0.015..0.055).contains(&fish.speed));
                    assert!((0.0..TAU).contains(&fish.direction));
                }
                AmbientKind::Seaweed(sway) => {
                    assert_eq!(entity.position.y, -10.0);
                    assert!((0.01..0.02).contains(&sway.speed));
                }
                AmbientKind::Coral => assert_eq!(entity.position.y, -10.0),
                AmbientKind::Rock => assert!((-9.0..-7.0).contains(&entity.position.y)),
            }
        }

        for (_, pearl) in blueprint.state.pearls.iter() {
            assert_eq!(pearl.state(), PearlState::InWorld);
            assert!(pearl.position.x.abs() <= 40.0 && pearl.position.z.abs() <= 40.0);
            assert!((-8.0..-5.0).contains(&pearl.position.y));
            assert!(pearl.spin_speed.abs() <= 0.01);
        }
    }

    #[test]
    fn coral_tapers_towards_tip() {
        let blueprint = SceneBlueprint::generate(&WorldConfig::default(), 5);
        let coral = blueprint
            .appearances
            .iter()
            .find_map(|a| match a {
                Appearance::Coral { segments } => Some(segments),
                _ => None,
            })
            .unwrap();
        assert!((3..8).contains(&coral.len()));
        for segment in coral {
            assert!(segment.radius_top < segment.radius_bottom);
        }
    }

    #[test]
    fn empty_population_still_builds_state() {
        let mut config = WorldConfig::default();
        config.population.fish = 0;
        config.population.coral = 0;
        config.population.seaweed = 0;
        config.population.rocks = 0;
        config.population.pearls = 0;

        let blueprint = SceneBlueprint::generate(&config, 0);
        assert!(blueprint.state.ambient.is_empty());
        assert!(blueprint.state.pearls.is_empty());
        assert_eq!(blueprint.state.player.position, Vec3::new(0.0, 5.0, 0.0));
    }
}
