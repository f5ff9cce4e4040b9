//! Audio-reactive rising particle field.

use glam::Vec2;

mod field;

pub use field::ParticleField;

/// sRGB particle color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Tailwind pink-500, the default particle tint.
pub const PINK: Color = Color {
    r: 0xec,
    g: 0x48,
    b: 0x99,
};

/// Tailwind rose-500, the alternate particle tint.
pub const ROSE: Color = Color {
    r: 0xf4,
    g: 0x3f,
    b: 0x5e,
};

/// One particle's persistent state.
///
/// The `base_*` attributes are fixed at spawn; energy reactivity never
/// writes them, it only scales the derived sprite. `pos.x` is the wobble
/// center, not the drawn position.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub base_size: f32,
    pub base_speed: f32,
    pub base_opacity: f32,
    pub phase: f32,
    pub phase_rate: f32,
    pub color: Color,
}

/// Renderer-facing description of one particle for the current frame,
/// with wobble, size pulse, and opacity pulse already applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSprite {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
    pub color: Color,
}
