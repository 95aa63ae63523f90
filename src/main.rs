//! Submarine Explorer - Entry Point
//!
//! Controls:
//! - Click: Capture the mouse, then collect or place a pearl
//! - WASD: Move, Q/E: Rise/Dive
//! - Mouse: Steer
//! - Space: Open the treasure chest
//! - 1/2: Dim/brighten the spotlight, 3/4: Look sensitivity
//! - Escape: Release the mouse

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Submarine Explorer".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Our game plugin
        .add_plugins(submarine_explorer::SubmarinePlugin)

        .run();
}
