//! World configuration loaded from an external RON file.
//!
//! Every tunable constant of the simulation lives here: craft speed and
//! altitude limits, interaction radii, the fish containment bound and the
//! population used by the entity factory. Missing fields fall back to the
//! reference environment values.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::error::ConfigError;

/// Default location of the world configuration file.
pub const WORLD_CONFIG_PATH: &str = "assets/data/world.ron";

/// Player craft movement settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CraftConfig {
    /// Spawn position of the submarine.
    pub spawn: (f32, f32, f32),
    /// Distance travelled per reference tick while a movement key is held.
    pub speed: f32,
    /// Lowest altitude the craft may reach (sea floor plus hull radius).
    pub floor_level: f32,
    /// Highest altitude the craft may reach.
    pub surface_level: f32,
    /// Ticks per second the per-tick constants are calibrated for.
    pub reference_tick_rate: f32,
    /// Longest frame the integrator will account for, in seconds.
    pub max_frame_time: f32,
    /// Distance of the chase camera behind the craft.
    pub camera_distance: f32,
    /// Height of the chase camera above the craft.
    pub camera_height: f32,
    /// Distance ahead of the craft the spotlight aims at.
    pub spotlight_reach: f32,
}

impl Default for CraftConfig {
    fn default() -> Self {
        Self {
            spawn: (0.0, 5.0, 0.0),
            speed: 0.2,
            floor_level: -8.0,
            surface_level: 20.0,
            reference_tick_rate: 60.0,
            max_frame_time: 0.1,
            camera_distance: 10.0,
            camera_height: 3.0,
            spotlight_reach: 10.0,
        }
    }
}

/// Pearl and treasure interaction settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// A pearl strictly closer than this can be picked up.
    pub pickup_radius: f32,
    /// The chest can be opened from strictly closer than this.
    pub treasure_radius: f32,
    /// Pearls strictly closer than this trigger the "nearby" hint.
    pub hint_radius: f32,
    /// Offset from the craft where a held pearl is carried.
    pub carry_offset: (f32, f32, f32),
    /// Offset from the craft where a held pearl is put down.
    pub place_offset: (f32, f32, f32),
    /// Fixed chest position.
    pub treasure_position: (f32, f32, f32),
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            pickup_radius: 3.0,
            treasure_radius: 5.0,
            hint_radius: 10.0,
            carry_offset: (2.0, -1.0, 0.0),
            place_offset: (0.0, -2.0, 0.0),
            treasure_position: (15.0, -8.0, 10.0),
        }
    }
}

/// Ambient animation settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FaunaConfig {
    /// Fish turn around once |x| or |z| exceeds this.
    pub fish_bound: f32,
}

impl Default for FaunaConfig {
    fn default() -> Self {
        Self { fish_bound: 60.0 }
    }
}

/// How many of each entity kind the factory scatters, and where.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub fish: usize,
    pub coral: usize,
    pub seaweed: usize,
    pub rocks: usize,
    pub pearls: usize,
    /// Half-extent of the square each kind is scattered over.
    pub fish_spread: f32,
    pub coral_spread: f32,
    pub seaweed_spread: f32,
    pub rock_spread: f32,
    pub pearl_spread: f32,
    /// Altitude of the sea floor that coral and seaweed are rooted on.
    pub floor_y: f32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            fish: 25,
            coral: 40,
            seaweed: 30,
            rocks: 20,
            pearls: 12,
            fish_spread: 60.0,
            coral_spread: 75.0,
            seaweed_spread: 70.0,
            rock_spread: 65.0,
            pearl_spread: 40.0,
            floor_y: -10.0,
        }
    }
}

/// World configuration loaded from assets/data/world.ron.
#[derive(Resource, Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub craft: CraftConfig,
    pub interaction: InteractionConfig,
    pub fauna: FaunaConfig,
    pub population: PopulationConfig,
    /// Fixed RNG seed for the entity factory (None = random each run).
    pub seed: Option<u64>,
}

impl WorldConfig {
    /// Parse and validate a config from RON text. `path` is only used for
    /// error reporting.
    pub fn from_ron(contents: &str, path: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.validate().map_err(|details| ConfigError::Invalid {
            path: path.to_string(),
            details,
        })?;
        Ok(config)
    }

    /// Check the values every tick relies on: finite numbers, ordered
    /// altitude limits and non-negative times, radii and extents.
    pub fn validate(&self) -> Result<(), String> {
        let craft = &self.craft;
        let interaction = &self.interaction;
        let population = &self.population;

        let finite = [
            ("craft.spawn.x", craft.spawn.0),
            ("craft.spawn.y", craft.spawn.1),
            ("craft.spawn.z", craft.spawn.2),
            ("craft.speed", craft.speed),
            ("craft.floor_level", craft.floor_level),
            ("craft.surface_level", craft.surface_level),
            ("interaction.carry_offset.x", interaction.carry_offset.0),
            ("interaction.carry_offset.y", interaction.carry_offset.1),
            ("interaction.carry_offset.z", interaction.carry_offset.2),
            ("interaction.place_offset.x", interaction.place_offset.0),
            ("interaction.place_offset.y", interaction.place_offset.1),
            ("interaction.place_offset.z", interaction.place_offset.2),
            ("interaction.treasure_position.x", interaction.treasure_position.0),
            ("interaction.treasure_position.y", interaction.treasure_position.1),
            ("interaction.treasure_position.z", interaction.treasure_position.2),
            ("population.floor_y", population.floor_y),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{name} must be finite, got {value}"));
        }

        let non_negative = [
            ("craft.reference_tick_rate", craft.reference_tick_rate),
            ("craft.max_frame_time", craft.max_frame_time),
            ("craft.camera_distance", craft.camera_distance),
            ("craft.camera_height", craft.camera_height),
            ("craft.spotlight_reach", craft.spotlight_reach),
            ("interaction.pickup_radius", interaction.pickup_radius),
            ("interaction.treasure_radius", interaction.treasure_radius),
            ("interaction.hint_radius", interaction.hint_radius),
            ("fauna.fish_bound", self.fauna.fish_bound),
            ("population.fish_spread", population.fish_spread),
            ("population.coral_spread", population.coral_spread),
            ("population.seaweed_spread", population.seaweed_spread),
            ("population.rock_spread", population.rock_spread),
            ("population.pearl_spread", population.pearl_spread),
        ];
        if let Some((name, value)) = non_negative
            .iter()
            .find(|(_, v)| !(v.is_finite() && *v >= 0.0))
        {
            return Err(format!("{name} must be a non-negative number, got {value}"));
        }

        if craft.floor_level > craft.surface_level {
            return Err(format!(
                "craft.floor_level ({}) is above craft.surface_level ({})",
                craft.floor_level, craft.surface_level
            ));
        }
        Ok(())
    }

    /// Read and parse a config file.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron(&contents, path)
    }

    /// Load the default config file, falling back to built-in values.
    pub fn load_or_default() -> Self {
        match Self::load(WORLD_CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded world config from {}", WORLD_CONFIG_PATH);
                config
            }
            Err(e @ ConfigError::Read { .. }) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let config = WorldConfig::from_ron(
            "(craft: (speed: 0.5), seed: Some(7))",
            "inline",
        )
        .unwrap();

        assert_eq!(config.craft.speed, 0.5);
        assert_eq!(config.craft.floor_level, -8.0);
        assert_eq!(config.interaction, InteractionConfig::default());
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let err = WorldConfig::from_ron("(craft: (speed: \"fast\"))", "bad.ron").unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert_eq!(path, "bad.ron"),
            other => panic!("Expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn inverted_altitude_limits_are_rejected() {
        let err = WorldConfig::from_ron(
            "(craft: (floor_level: 30.0, surface_level: 20.0))",
            "inverted.ron",
        )
        .unwrap_err();
        match err {
            ConfigError::Invalid { path, details } => {
                assert_eq!(path, "inverted.ron");
                assert!(details.contains("floor_level"), "details: {details}");
            }
            other => panic!("Expected invalid error, got {other:?}"),
        }
    }

    #[test]
    fn negative_frame_time_and_radii_are_rejected() {
        for contents in [
            "(craft: (max_frame_time: -0.1))",
            "(interaction: (pickup_radius: -1.0))",
            "(population: (coral_spread: -5.0))",
            "(craft: (camera_distance: -10.0))",
        ] {
            let err = WorldConfig::from_ron(contents, "inline").unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { .. }), "{contents}: {err:?}");
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert_eq!(WorldConfig::default().validate(), Ok(()));
    }

    #[test]
    fn nan_bounds_are_rejected() {
        let mut config = WorldConfig::default();
        config.craft.surface_level = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = WorldConfig::default();
        config.fauna.fish_bound = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_reports_read_error() {
        let err = WorldConfig::load("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn shipped_world_file_parses() {
        let contents = include_str!("../../assets/data/world.ron");
        let config = WorldConfig::from_ron(contents, WORLD_CONFIG_PATH).unwrap();
        assert_eq!(config.population.pearls, 12);
        assert_eq!(config.interaction.pickup_radius, 3.0);
    }
}
