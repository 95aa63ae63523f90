//! Visual configuration loaded from external RON file.
//!
//! Allows tweaking the underwater look without recompilation.

use bevy::pbr::FogFalloff;
use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use crate::sim::ConfigError;

/// Location of the shipped visual config.
pub const VISUAL_CONFIG_PATH: &str = "assets/data/rendering/visual_config.ron";

/// Visual configuration loaded from assets/data/rendering/visual_config.ron.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    // Atmosphere
    pub fog_enabled: bool,
    pub fog_color: (f32, f32, f32),
    pub fog_start: f32,
    pub fog_end: f32,
    pub clear_color: (f32, f32, f32),
    // Lights
    pub ambient_color: (f32, f32, f32),
    pub ambient_brightness: f32,
    pub sun_illuminance: f32,
    /// Spotlight intensity at light level 1.0
    pub spotlight_intensity: f32,
    pub spotlight_range: f32,
    /// Outer cone angle in radians
    pub spotlight_angle: f32,
    // Surfaces
    pub floor_color: (f32, f32, f32),
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            fog_enabled: true,
            fog_color: (0.0, 0.27, 0.4),
            fog_start: 20.0,
            fog_end: 100.0,
            clear_color: (0.0, 0.07, 0.2),
            ambient_color: (0.25, 0.25, 0.25),
            ambient_brightness: 300.0,
            sun_illuminance: 1500.0,
            spotlight_intensity: 4_000_000.0,
            spotlight_range: 30.0,
            spotlight_angle: std::f32::consts::FRAC_PI_6,
            floor_color: (0.545, 0.451, 0.333),
        }
    }
}

impl VisualConfig {
    /// Parse a config from RON text. `path` is only used for error reporting.
    pub fn from_ron(contents: &str, path: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            details: e.to_string(),
        })
    }

    /// Load visual config from RON file, falling back to defaults.
    pub fn load() -> Self {
        let contents = match fs::read_to_string(VISUAL_CONFIG_PATH) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", VISUAL_CONFIG_PATH, e);
                return Self::default();
            }
        };
        match Self::from_ron(&contents, VISUAL_CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded visual config from {}", VISUAL_CONFIG_PATH);
                config
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Camera fog for the murky water, if enabled.
    pub fn fog(&self) -> Option<DistanceFog> {
        if !self.fog_enabled {
            return None;
        }
        Some(DistanceFog {
            color: rgb(self.fog_color),
            falloff: FogFalloff::Linear { start: self.fog_start, end: self.fog_end },
            directional_light_color: Color::NONE,
            directional_light_exponent: 8.0,
        })
    }

    /// Spotlight intensity for a light level multiplier.
    pub fn spotlight_intensity_at(&self, level: f32) -> f32 {
        self.spotlight_intensity * level
    }
}

/// Convert a config colour triple.
pub fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::srgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_visual_file_parses() {
        let config = VisualConfig::from_ron(
            include_str!("../../assets/data/rendering/visual_config.ron"),
            VISUAL_CONFIG_PATH,
        )
        .unwrap();
        assert!(config.fog_enabled);
        assert_eq!(config.fog_start, 20.0);
        assert_eq!(config.fog_end, 100.0);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = VisualConfig::from_ron("(fog_enabled: false)", "inline").unwrap();
        assert!(!config.fog_enabled);
        assert!(config.fog().is_none());
        assert_eq!(config.spotlight_range, VisualConfig::default().spotlight_range);
    }

    #[test]
    fn spotlight_scales_with_light_level() {
        let config = VisualConfig::default();
        assert_eq!(config.spotlight_intensity_at(1.0), config.spotlight_intensity);
        assert_eq!(config.spotlight_intensity_at(0.2), config.spotlight_intensity * 0.2);
    }
}
