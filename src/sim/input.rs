//! Input state - held keys, pointer capture and accumulated look angles.
//!
//! The presentation layer translates hardware input into [`InputEvent`]s and
//! feeds them through [`InputState::apply`]. Nothing here polls hardware.

use bevy::prelude::*;
use std::collections::{HashSet, VecDeque};
use std::f32::consts::FRAC_PI_3;

/// Pitch limit in either direction (60 degrees).
pub const MAX_PITCH: f32 = FRAC_PI_3;

/// Look sensitivity in radians per pixel of pointer movement.
pub const DEFAULT_SENSITIVITY: f32 = 0.003;
pub const MIN_SENSITIVITY: f32 = 0.001;
pub const MAX_SENSITIVITY: f32 = 0.01;
pub const SENSITIVITY_STEP: f32 = 0.001;

/// Cursor-to-angle factors used while the pointer is not captured.
const CURSOR_YAW_FACTOR: f32 = 0.5;
const CURSOR_PITCH_FACTOR: f32 = 0.3;

/// Semantic input codes understood by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCode {
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,
    Ascend,
    Descend,
    DecreaseLight,
    IncreaseLight,
    DecreaseLookSensitivity,
    IncreaseLookSensitivity,
    Interact,
    ActivateNearbyObject,
}

impl InputCode {
    /// The one-shot trigger this code fires on key-down, if any.
    pub fn trigger(self) -> Option<Trigger> {
        match self {
            InputCode::Interact => Some(Trigger::Interact),
            InputCode::ActivateNearbyObject => Some(Trigger::Activate),
            InputCode::DecreaseLight => Some(Trigger::DecreaseLight),
            InputCode::IncreaseLight => Some(Trigger::IncreaseLight),
            _ => None,
        }
    }
}

/// Discrete actions queued by key-down and consumed by the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Pick up a nearby pearl, or put down the held one.
    Interact,
    /// Open the treasure chest if close enough.
    Activate,
    DecreaseLight,
    IncreaseLight,
}

/// Events delivered by the presentation/OS layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(InputCode),
    KeyUp(InputCode),
    /// Raw pointer delta in pixels (meaningful while captured).
    PointerMoved { dx: f32, dy: f32 },
    /// Cursor position normalized to [-1, 1], +y up (meaningful while free).
    PointerPosition { x: f32, y: f32 },
    /// The pointer capture request was granted (true) or lost (false).
    PointerLockChanged(bool),
}

/// Yaw and pitch in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LookAngles {
    pub yaw: f32,
    pub pitch: f32,
}

/// Everything the simulation needs to know about the player's input.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    held: HashSet<InputCode>,
    pointer_locked: bool,
    captured: LookAngles,
    cursor: Vec2,
    sensitivity: f32,
    pending: VecDeque<Trigger>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            held: HashSet::new(),
            pointer_locked: false,
            captured: LookAngles::default(),
            cursor: Vec2::ZERO,
            sensitivity: DEFAULT_SENSITIVITY,
            pending: VecDeque::new(),
        }
    }
}

impl InputState {
    /// Record one input event.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(code) => self.key_down(code),
            InputEvent::KeyUp(code) => {
                self.held.remove(&code);
            }
            InputEvent::PointerMoved { dx, dy } => self.pointer_moved(dx, dy),
            InputEvent::PointerPosition { x, y } => {
                self.cursor = Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
            }
            InputEvent::PointerLockChanged(locked) => {
                if locked != self.pointer_locked {
                    debug!("Pointer lock {}", if locked { "granted" } else { "released" });
                }
                self.pointer_locked = locked;
            }
        }
    }

    fn key_down(&mut self, code: InputCode) {
        // Auto-repeat of a held key does nothing.
        if !self.held.insert(code) {
            return;
        }

        match code {
            InputCode::DecreaseLookSensitivity => {
                self.sensitivity =
                    (self.sensitivity - SENSITIVITY_STEP).clamp(MIN_SENSITIVITY, MAX_SENSITIVITY);
            }
            InputCode::IncreaseLookSensitivity => {
                self.sensitivity =
                    (self.sensitivity + SENSITIVITY_STEP).clamp(MIN_SENSITIVITY, MAX_SENSITIVITY);
            }
            _ => {
                if let Some(trigger) = code.trigger() {
                    self.pending.push_back(trigger);
                }
            }
        }
    }

    fn pointer_moved(&mut self, dx: f32, dy: f32) {
        if !self.pointer_locked {
            return;
        }
        self.captured.yaw -= dx * self.sensitivity;
        self.captured.pitch = (self.captured.pitch - dy * self.sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Whether the key bound to `code` is currently down.
    pub fn is_held(&self, code: InputCode) -> bool {
        self.held.contains(&code)
    }

    pub fn pointer_locked(&self) -> bool {
        self.pointer_locked
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Current look direction: accumulated angles while captured, the cursor
    /// proxy otherwise.
    pub fn look_angles(&self) -> LookAngles {
        if self.pointer_locked {
            self.captured
        } else {
            LookAngles {
                yaw: -self.cursor.x * CURSOR_YAW_FACTOR,
                pitch: self.cursor.y * CURSOR_PITCH_FACTOR,
            }
        }
    }

    /// Remove and return all queued triggers in arrival order.
    pub fn take_triggers(&mut self) -> Vec<Trigger> {
        self.pending.drain(..).collect()
    }
}

/// Convert a window cursor position (pixels, origin top-left) into the
/// normalized [-1, 1] range with +y up.
pub fn normalize_cursor(position: Vec2, window_size: Vec2) -> Vec2 {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        position.x / window_size.x * 2.0 - 1.0,
        -(position.y / window_size.y) * 2.0 + 1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked() -> InputState {
        let mut input = InputState::default();
        input.apply(InputEvent::PointerLockChanged(true));
        input
    }

    #[test]
    fn pitch_stays_within_limits_under_any_motion() {
        let mut input = locked();
        for step in 0..500 {
            let dy = if step % 7 < 4 { 250.0 } else { -180.0 };
            input.apply(InputEvent::PointerMoved { dx: 13.0, dy });
            let pitch = input.look_angles().pitch;
            assert!((-MAX_PITCH..=MAX_PITCH).contains(&pitch), "pitch={pitch}");
        }

        input.apply(InputEvent::PointerMoved { dx: 0.0, dy: -1.0e6 });
        assert_eq!(input.look_angles().pitch, MAX_PITCH);
        input.apply(InputEvent::PointerMoved { dx: 0.0, dy: 1.0e6 });
        assert_eq!(input.look_angles().pitch, -MAX_PITCH);
    }

    #[test]
    fn pointer_deltas_accumulate_only_while_locked() {
        let mut input = InputState::default();
        input.apply(InputEvent::PointerMoved { dx: 100.0, dy: 0.0 });
        assert_eq!(input.look_angles(), LookAngles::default());

        input.apply(InputEvent::PointerLockChanged(true));
        input.apply(InputEvent::PointerMoved { dx: 100.0, dy: -50.0 });
        let look = input.look_angles();
        assert!((look.yaw + 0.3).abs() < 1e-6, "yaw={}", look.yaw);
        assert!((look.pitch - 0.15).abs() < 1e-6, "pitch={}", look.pitch);
    }

    #[test]
    fn unlocked_look_follows_cursor() {
        let mut input = InputState::default();
        input.apply(InputEvent::PointerPosition { x: 1.0, y: -1.0 });
        let look = input.look_angles();
        assert!((look.yaw + 0.5).abs() < 1e-6);
        assert!((look.pitch + 0.3).abs() < 1e-6);

        // Losing the lock falls back to the cursor, keeping captured angles aside.
        let mut input = locked();
        input.apply(InputEvent::PointerMoved { dx: 10.0, dy: 0.0 });
        input.apply(InputEvent::PointerPosition { x: 0.0, y: 0.0 });
        input.apply(InputEvent::PointerLockChanged(false));
        assert_eq!(input.look_angles(), LookAngles::default());
    }

    #[test]
    fn key_up_releases_and_repeat_does_not_retrigger() {
        let mut input = InputState::default();
        input.apply(InputEvent::KeyDown(InputCode::MoveForward));
        assert!(input.is_held(InputCode::MoveForward));
        input.apply(InputEvent::KeyUp(InputCode::MoveForward));
        assert!(!input.is_held(InputCode::MoveForward));

        input.apply(InputEvent::KeyDown(InputCode::Interact));
        input.apply(InputEvent::KeyDown(InputCode::Interact));
        assert_eq!(input.take_triggers(), vec![Trigger::Interact]);
        assert!(input.take_triggers().is_empty());
    }

    #[test]
    fn triggers_keep_arrival_order() {
        let mut input = InputState::default();
        for code in [
            InputCode::IncreaseLight,
            InputCode::ActivateNearbyObject,
            InputCode::Interact,
            InputCode::MoveForward,
        ] {
            input.apply(InputEvent::KeyDown(code));
        }
        assert_eq!(
            input.take_triggers(),
            vec![Trigger::IncreaseLight, Trigger::Activate, Trigger::Interact]
        );
    }

    #[test]
    fn sensitivity_is_bounded() {
        let mut input = InputState::default();
        for _ in 0..20 {
            input.apply(InputEvent::KeyDown(InputCode::IncreaseLookSensitivity));
            input.apply(InputEvent::KeyUp(InputCode::IncreaseLookSensitivity));
        }
        assert_eq!(input.sensitivity(), MAX_SENSITIVITY);

        for _ in 0..20 {
            input.apply(InputEvent::KeyDown(InputCode::DecreaseLookSensitivity));
            input.apply(InputEvent::KeyUp(InputCode::DecreaseLookSensitivity));
        }
        assert_eq!(input.sensitivity(), MIN_SENSITIVITY);
    }

    #[test]
    fn cursor_normalization_matches_window_corners() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(normalize_cursor(Vec2::ZERO, size), Vec2::new(-1.0, 1.0));
        assert_eq!(normalize_cursor(size, size), Vec2::new(1.0, -1.0));
        assert_eq!(normalize_cursor(Vec2::new(400.0, 300.0), size), Vec2::ZERO);
        assert_eq!(normalize_cursor(Vec2::ONE, Vec2::ZERO), Vec2::ZERO);
    }
}
