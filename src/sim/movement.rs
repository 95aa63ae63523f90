//! Movement integrator for the player craft.

use bevy::prelude::*;

use super::config::CraftConfig;
use super::input::{InputCode, InputState, LookAngles};

/// The player-controlled submarine.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCraft {
    pub position: Vec3,
    /// Orientation, copied from the input look angles every tick.
    pub look: LookAngles,
    /// Distance per reference tick.
    pub speed: f32,
}

impl PlayerCraft {
    pub fn new(position: Vec3, speed: f32) -> Self {
        Self {
            position,
            look: LookAngles::default(),
            speed,
        }
    }

    /// Unit vector the craft is facing, including pitch.
    pub fn forward(&self) -> Vec3 {
        forward_vector(self.look)
    }

    /// Unit strafe vector. Yaw only, so strafing never changes altitude.
    pub fn right(&self) -> Vec3 {
        right_vector(self.look.yaw)
    }

    /// Rotation that turns a +Z-forward model to face [`Self::forward`].
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.look.yaw, -self.look.pitch, 0.0)
    }
}

pub fn forward_vector(look: LookAngles) -> Vec3 {
    let (sin_yaw, cos_yaw) = look.yaw.sin_cos();
    let (sin_pitch, cos_pitch) = look.pitch.sin_cos();
    Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch)
}

pub fn right_vector(yaw: f32) -> Vec3 {
    Vec3::new(-yaw.cos(), 0.0, yaw.sin())
}

/// Chase camera placement derived from the craft.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
}

/// Spotlight placement derived from the craft.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpotlightPose {
    pub position: Vec3,
    pub target: Vec3,
}

/// Advance the craft by one tick.
///
/// Keys are applied in a fixed order so opposing keys always cancel.
pub fn integrate(craft: &mut PlayerCraft, input: &InputState, config: &CraftConfig, frame_scale: f32) {
    craft.look = input.look_angles();

    let step = craft.speed * frame_scale;
    let forward = craft.forward();
    let right = craft.right();

    let mut delta = Vec3::ZERO;
    if input.is_held(InputCode::MoveForward) {
        delta += forward * step;
    }
    if input.is_held(InputCode::MoveBackward) {
        delta -= forward * step;
    }
    if input.is_held(InputCode::StrafeLeft) {
        delta -= right * step;
    }
    if input.is_held(InputCode::StrafeRight) {
        delta += right * step;
    }
    if input.is_held(InputCode::Ascend) {
        delta.y += step;
    }
    if input.is_held(InputCode::Descend) {
        delta.y -= step;
    }

    craft.position += delta;
    craft.position.y = craft.position.y.clamp(config.floor_level, config.surface_level);
}

/// Camera behind and above the craft, looking at it.
pub fn camera_rig(craft: &PlayerCraft, config: &CraftConfig) -> CameraRig {
    CameraRig {
        position: craft.position - craft.forward() * config.camera_distance
            + Vec3::Y * config.camera_height,
        target: craft.position,
    }
}

/// Spotlight just above the craft, aimed along its heading.
pub fn spotlight_pose(craft: &PlayerCraft, config: &CraftConfig) -> SpotlightPose {
    let position = craft.position + Vec3::Y;
    SpotlightPose {
        position,
        target: craft.position + craft.forward() * config.spotlight_reach,
    }
}
