//! Player-related components and resources.

use bevy::prelude::*;

use crate::sim::InputCode;

/// Marker component for the submarine's root entity.
#[derive(Component)]
pub struct Submarine;

/// Marker for the chase camera.
#[derive(Component)]
pub struct FollowCamera;

/// Marker for the spotlight mounted on the submarine.
#[derive(Component)]
pub struct SubmarineSpotlight;

/// Keyboard layout for the recognized input codes.
///
/// Keys without a binding are ignored. Interact is additionally bound to the
/// left mouse button while the pointer is captured.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub bindings: Vec<(KeyCode, InputCode)>,
    /// Releases pointer capture
    pub release_pointer: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (KeyCode::KeyW, InputCode::MoveForward),
                (KeyCode::KeyS, InputCode::MoveBackward),
                (KeyCode::KeyA, InputCode::StrafeLeft),
                (KeyCode::KeyD, InputCode::StrafeRight),
                (KeyCode::KeyQ, InputCode::Ascend),
                (KeyCode::KeyE, InputCode::Descend),
                (KeyCode::Digit1, InputCode::DecreaseLight),
                (KeyCode::Digit2, InputCode::IncreaseLight),
                (KeyCode::Digit3, InputCode::DecreaseLookSensitivity),
                (KeyCode::Digit4, InputCode::IncreaseLookSensitivity),
                (KeyCode::Space, InputCode::ActivateNearbyObject),
            ],
            release_pointer: KeyCode::Escape,
        }
    }
}

impl KeyBindings {
    /// Input code bound to `key`, if any.
    pub fn lookup(&self, key: KeyCode) -> Option<InputCode> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, code)| *code)
    }
}
