//! Input adapter - turns window and device input into simulation input events.
//!
//! The simulation never polls hardware. These systems read Bevy's keyboard,
//! mouse and window state and feed [`InputEvent`]s into the [`InputState`]
//! resource ahead of the tick.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use super::components::KeyBindings;
use crate::sim::input::normalize_cursor;
use crate::sim::{InputCode, InputEvent, InputState};

/// Report pointer capture changes once the window has applied them.
///
/// Capture requests are only honoured when the windowing backend applies the
/// new grab mode, so the state is observed here rather than assumed at the
/// time of the request.
pub fn observe_pointer_lock(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut input: ResMut<InputState>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };

    let locked = window.cursor_options.grab_mode != CursorGrabMode::None;
    if locked != input.pointer_locked() {
        info!("Pointer {}", if locked { "captured" } else { "released" });
        input.apply(InputEvent::PointerLockChanged(locked));
    }
}

/// Forward bound key presses and releases.
pub fn read_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<InputState>,
) {
    for key in keyboard.get_just_pressed() {
        if let Some(code) = bindings.lookup(*key) {
            input.apply(InputEvent::KeyDown(code));
        }
    }
    for key in keyboard.get_just_released() {
        if let Some(code) = bindings.lookup(*key) {
            input.apply(InputEvent::KeyUp(code));
        }
    }
}

/// Forward pointer movement and clicks.
///
/// A click while the pointer is free requests capture instead of interacting.
pub fn read_mouse(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut window_query: Query<&mut Window, With<PrimaryWindow>>,
    mut input: ResMut<InputState>,
) {
    // Accumulate mouse movement
    let mut delta = Vec2::ZERO;
    for event in mouse_motion.read() {
        delta += event.delta;
    }
    if input.pointer_locked() && delta != Vec2::ZERO {
        input.apply(InputEvent::PointerMoved { dx: delta.x, dy: delta.y });
    }

    let Ok(mut window) = window_query.get_single_mut() else {
        return;
    };

    if let Some(moved) = cursor_moved.read().last() {
        let normalized = normalize_cursor(moved.position, Vec2::new(window.width(), window.height()));
        input.apply(InputEvent::PointerPosition { x: normalized.x, y: normalized.y });
    }

    if mouse_buttons.just_pressed(MouseButton::Left) {
        if input.pointer_locked() {
            input.apply(InputEvent::KeyDown(InputCode::Interact));
        } else {
            grab_cursor(&mut window);
        }
    }
    if mouse_buttons.just_released(MouseButton::Left) {
        input.apply(InputEvent::KeyUp(InputCode::Interact));
    }
}

/// Give the pointer back on the release key.
pub fn release_pointer(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut window_query: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !keyboard.just_pressed(bindings.release_pointer) {
        return;
    }
    if let Ok(mut window) = window_query.get_single_mut() {
        release_cursor(&mut window);
    }
}

/// Grab and hide the cursor.
fn grab_cursor(window: &mut Window) {
    window.cursor_options.grab_mode = CursorGrabMode::Locked;
    window.cursor_options.visible = false;
}

/// Release and show the cursor.
fn release_cursor(window: &mut Window) {
    window.cursor_options.grab_mode = CursorGrabMode::None;
    window.cursor_options.visible = true;
}

/// Release the cursor when leaving gameplay.
pub fn release_cursor_on_exit(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        release_cursor(&mut window);
    }
}
