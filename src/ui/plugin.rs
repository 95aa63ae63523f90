//! UI plugin - HUD and the unsupported-environment screen.

use bevy::prelude::*;

use super::hud;
use crate::core::{GameState, StartupFailure};

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app.add_systems(OnEnter(GameState::Unsupported), setup_unsupported_screen);
    }
}

/// Marker for the unsupported-environment screen.
#[derive(Component)]
struct UnsupportedUi;

/// Explain why the scene cannot be shown.
fn setup_unsupported_screen(mut commands: Commands, failure: Option<Res<StartupFailure>>) {
    let reason = failure
        .map(|failure| failure.0.clone())
        .unwrap_or_else(|| "Environment unsupported".to_string());

    // Spawn a camera for UI rendering, there is no scene camera
    commands.spawn((Camera2d, UnsupportedUi));

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.0, 0.07, 0.2)),
            UnsupportedUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Submarine Explorer cannot start"),
                TextFont {
                    font_size: 40.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.95, 1.0)),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(reason),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.7, 0.8)),
            ));
        });
}
