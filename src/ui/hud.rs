//! In-game HUD - status panel, proximity hint and event notices.

use bevy::prelude::*;

use crate::core::{
    CurrentStatus, GameState, PearlCollectedEvent, PearlPlacedEvent, SimSet, TreasureOpenedEvent,
};
use crate::sim::StatusSnapshot;

/// Seconds a notice stays on screen.
const NOTICE_DURATION: f32 = 3.0;

const CONTROLS_HELP: &str = "WASD: move | Q/E: up/down | Mouse: look | Click: collect/place pearl\n\
     Space: open chest | 1/2: light -/+ | 3/4: look sensitivity -/+ | Esc: release mouse";

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// One line of the status panel.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Depth,
    Light,
    Pearls,
    Treasure,
}

impl StatusLine {
    /// Text of this line for `status`.
    pub fn text(self, status: &StatusSnapshot) -> String {
        match self {
            StatusLine::Depth => format!("Depth: {}m", status.depth),
            StatusLine::Light => format!("Light: {}%", status.light_percent),
            StatusLine::Pearls => format!("Pearls: {}", status.pearls_collected),
            StatusLine::Treasure => format!("Treasure: {}", status.treasure_label()),
        }
    }
}

/// Container of the proximity hint.
#[derive(Component)]
pub struct HintBox;

/// Text of the proximity hint.
#[derive(Component)]
pub struct HintText;

/// Short-lived notice for the latest interaction.
#[derive(Component, Default)]
pub struct Notice {
    remaining: f32,
}

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (update_status_lines, update_hint, show_notices, fade_notice).in_set(SimSet::Present),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands, status: Res<CurrentStatus>) {
    let panel_background = BackgroundColor(Color::srgba(0.0, 0.1, 0.2, 0.6));

    // Status panel (top-left corner)
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(20.0),
                left: Val::Px(20.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(4.0),
                ..default()
            },
            panel_background,
            HudRoot,
        ))
        .with_children(|parent| {
            for line in [StatusLine::Depth, StatusLine::Light, StatusLine::Pearls, StatusLine::Treasure] {
                parent.spawn((
                    Text::new(line.text(&status.0)),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.85, 0.95, 1.0)),
                    line,
                ));
            }
        });

    // Hint and notice (bottom-centre)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::End,
                align_items: AlignItems::Center,
                padding: UiRect::bottom(Val::Px(80.0)),
                row_gap: Val::Px(8.0),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.9, 0.5)),
                Notice::default(),
            ));

            parent
                .spawn((
                    Node {
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                        ..default()
                    },
                    panel_background,
                    if status.0.show_hint() { Visibility::Inherited } else { Visibility::Hidden },
                    HintBox,
                ))
                .with_children(|hint| {
                    hint.spawn((
                        Text::new(status.0.hint_text()),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                        HintText,
                    ));
                });
        });

    // Controls help (bottom-left corner)
    commands.spawn((
        Text::new(CONTROLS_HELP),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgba(0.8, 0.9, 1.0, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            left: Val::Px(20.0),
            ..default()
        },
        HudRoot,
    ));
}

/// Rewrite status lines when the snapshot changed.
fn update_status_lines(status: Res<CurrentStatus>, mut query: Query<(&StatusLine, &mut Text)>) {
    if !status.is_changed() {
        return;
    }
    for (line, mut text) in query.iter_mut() {
        let updated = line.text(&status.0);
        if text.0 != updated {
            text.0 = updated;
        }
    }
}

/// Show or hide the proximity hint.
fn update_hint(
    status: Res<CurrentStatus>,
    mut box_query: Query<&mut Visibility, With<HintBox>>,
    mut text_query: Query<&mut Text, With<HintText>>,
) {
    if !status.is_changed() {
        return;
    }
    let Ok(mut visibility) = box_query.get_single_mut() else {
        return;
    };
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };

    if status.0.show_hint() {
        text.0 = status.0.hint_text().to_string();
        visibility.set_if_neq(Visibility::Inherited);
    } else {
        visibility.set_if_neq(Visibility::Hidden);
    }
}

/// Put the latest interaction in the notice line.
fn show_notices(
    mut collected: EventReader<PearlCollectedEvent>,
    mut placed: EventReader<PearlPlacedEvent>,
    mut opened: EventReader<TreasureOpenedEvent>,
    mut query: Query<(&mut Text, &mut Notice)>,
) {
    let mut message = None;
    for event in collected.read() {
        message = Some(format!("Pearl collected! ({} total)", event.total));
    }
    for _ in placed.read() {
        message = Some("Pearl placed".to_string());
    }
    for _ in opened.read() {
        message = Some("The treasure chest creaks open!".to_string());
    }

    let Some(message) = message else {
        return;
    };
    for (mut text, mut notice) in query.iter_mut() {
        text.0 = message.clone();
        notice.remaining = NOTICE_DURATION;
    }
}

/// Clear the notice once it has been up long enough.
fn fade_notice(time: Res<Time>, mut query: Query<(&mut Text, &mut Notice)>) {
    for (mut text, mut notice) in query.iter_mut() {
        if notice.remaining <= 0.0 {
            continue;
        }
        notice.remaining -= time.delta_secs();
        if notice.remaining <= 0.0 {
            text.0.clear();
        }
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Hint;

    #[test]
    fn status_lines_render_snapshot() {
        let status = StatusSnapshot {
            depth: 10,
            light_percent: 50,
            pearls_collected: 3,
            treasure_opened: true,
            hint: Hint::None,
        };
        assert_eq!(StatusLine::Depth.text(&status), "Depth: 10m");
        assert_eq!(StatusLine::Light.text(&status), "Light: 50%");
        assert_eq!(StatusLine::Pearls.text(&status), "Pearls: 3");
        assert_eq!(StatusLine::Treasure.text(&status), "Treasure: Opened!");
    }
}
