//! Shared materials for scene models.

use bevy::prelude::*;

/// Handles for materials reused across many models.
pub struct MaterialRegistry {
    pub hull: Handle<StandardMaterial>,
    pub ballast: Handle<StandardMaterial>,
    pub propeller: Handle<StandardMaterial>,
    pub viewport: Handle<StandardMaterial>,
    pub headlight: Handle<StandardMaterial>,
    pub wood: Handle<StandardMaterial>,
    pub band: Handle<StandardMaterial>,
    pub corner: Handle<StandardMaterial>,
    pub lock: Handle<StandardMaterial>,
    pub pearl: Handle<StandardMaterial>,
    pub pearl_glow: Handle<StandardMaterial>,
    pub eye: Handle<StandardMaterial>,
    pub stripe: Handle<StandardMaterial>,
}

impl MaterialRegistry {
    pub fn new(materials: &mut Assets<StandardMaterial>) -> Self {
        Self {
            // Submarine - dark grey steel
            hull: materials.add(StandardMaterial {
                base_color: Color::srgb_u8(0x44, 0x44, 0x44),
                perceptual_roughness: 0.35,
                metallic: 0.6,
                ..default()
            }),
            ballast: solid(materials, Color::srgb_u8(0x33, 0x33, 0x33)),
            propeller: solid(materials, Color::srgb_u8(0x11, 0x11, 0x11)),
            viewport: materials.add(StandardMaterial {
                base_color: Color::srgba_u8(0x88, 0xcc, 0xff, 178),
                perceptual_roughness: 0.1,
                alpha_mode: AlphaMode::Blend,
                ..default()
            }),
            headlight: materials.add(StandardMaterial {
                base_color: Color::srgb_u8(0xff, 0xff, 0xaa),
                emissive: LinearRgba::new(0.27, 0.27, 0.0, 1.0),
                ..default()
            }),

            // Treasure chest - weathered wood with metal fittings
            wood: materials.add(StandardMaterial {
                base_color: Color::srgb_u8(0x8b, 0x45, 0x13),
                perceptual_roughness: 0.8,
                ..default()
            }),
            band: materials.add(StandardMaterial {
                base_color: Color::srgb_u8(0x33, 0x33, 0x33),
                perceptual_roughness: 0.2,
                metallic: 0.8,
                ..default()
            }),
            corner: solid(materials, Color::srgb_u8(0x22, 0x22, 0x22)),
            lock: materials.add(StandardMaterial {
                base_color: Color::srgb_u8(0x88, 0x88, 0x88),
                perceptual_roughness: 0.3,
                metallic: 0.7,
                ..default()
            }),

            // Pearls - glossy off-white with a faint core
            pearl: materials.add(StandardMaterial {
                base_color: Color::srgba_u8(0xff, 0xf8, 0xdc, 242),
                perceptual_roughness: 0.05,
                reflectance: 0.8,
                alpha_mode: AlphaMode::Blend,
                ..default()
            }),
            pearl_glow: translucent(materials, Color::srgba(1.0, 1.0, 1.0, 0.3)),

            // Fish details
            eye: materials.add(StandardMaterial {
                base_color: Color::BLACK,
                unlit: true,
                ..default()
            }),
            stripe: translucent(materials, Color::srgba(0.0, 0.0, 0.0, 0.3)),
        }
    }
}

/// Opaque lit material in `color`.
pub fn solid(materials: &mut Assets<StandardMaterial>, color: Color) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: color,
        perceptual_roughness: 0.6,
        ..default()
    })
}

/// Unlit blended material in `color`, alpha taken from the colour.
pub fn translucent(materials: &mut Assets<StandardMaterial>, color: Color) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: color,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    })
}

/// Lit blended material, used for fins.
pub fn tinted_blend(
    materials: &mut Assets<StandardMaterial>,
    color: Color,
    alpha: f32,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: color.with_alpha(alpha),
        alpha_mode: AlphaMode::Blend,
        ..default()
    })
}
