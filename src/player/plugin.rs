//! Player plugin - input adapter, chase camera and spotlight.

use bevy::prelude::*;

use super::camera::{spawn_camera_and_spotlight, sync_camera, sync_spotlight, sync_submarine};
use super::components::KeyBindings;
use super::input::{
    observe_pointer_lock, read_keyboard, read_mouse, release_cursor_on_exit, release_pointer,
};
use crate::core::{GameState, SimSet};

/// Player plugin - feeds input into the simulation and follows the craft.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .add_systems(OnEnter(GameState::InGame), spawn_camera_and_spotlight)
            .add_systems(OnExit(GameState::InGame), release_cursor_on_exit)
            .add_systems(
                Update,
                (observe_pointer_lock, read_keyboard, release_pointer, read_mouse)
                    .chain()
                    .in_set(SimSet::Input),
            )
            .add_systems(
                Update,
                (sync_submarine, sync_camera, sync_spotlight).in_set(SimSet::Present),
            );
    }
}
