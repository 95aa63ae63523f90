//! Rendering plugin - underwater atmosphere and scene-wide lighting.

use bevy::prelude::*;

use super::visual_config::{rgb, VisualConfig};

/// Rendering plugin - loads the visual config and sets up the water colour.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        // Loaded eagerly so spawn systems can read it during Startup
        let config = VisualConfig::load();

        app.insert_resource(ClearColor(rgb(config.clear_color)))
            .insert_resource(AmbientLight {
                color: rgb(config.ambient_color),
                brightness: config.ambient_brightness,
            })
            .insert_resource(config);
    }
}
