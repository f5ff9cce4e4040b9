//! Particle field configuration and canvas bounds.

use crate::error::{Error, Result};
use crate::particles::{Color, PINK, ROSE};

/// Drawing surface dimensions used as wrap bounds (pixels)
#[derive(Debug, Clone, Copy)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Particle field initialization ranges and per-frame reactivity constants.
///
/// Randomized attributes draw uniformly from `[min, min + span)`.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Number of particles, fixed for the session lifetime
    pub particle_count: usize,

    /// Particle size range (pixels)
    pub size_min_px: f32,
    pub size_span_px: f32,

    /// Base rise speed range (pixels per frame)
    pub speed_min: f32,
    pub speed_span: f32,

    /// Base opacity range (dimensionless, within [0, 1])
    pub opacity_min: f32,
    pub opacity_span: f32,

    /// Maximum per-frame phase advance (radians per frame)
    pub phase_rate_max: f32,

    /// Depth of the staging band below the canvas where particles start
    /// (pixels); initial y is uniform over [height, height + this)
    pub stage_depth_px: f32,

    /// Off-screen margin: a particle wraps once y < -margin, reappearing
    /// at height + margin (pixels)
    pub wrap_margin_px: f32,

    /// Energy-to-boost scale: boost = energy * this
    pub boost_scale: f32,

    /// Extra rise speed per unit boost (pixels per frame)
    /// Formula: dy = base_speed + boost * this
    pub boost_to_speed: f32,

    /// Size pulse per unit boost
    /// Formula: size = base_size * (1 + boost * this)
    pub boost_to_size: f32,

    /// Opacity pulse per unit boost
    /// Formula: opacity = base_opacity + boost * this (clamped to [0, 1])
    pub boost_to_opacity: f32,

    /// Horizontal sine-wobble amplitude (pixels)
    pub wobble_amplitude_px: f32,

    /// Two-color palette, each chosen with equal probability
    pub palette: [Color; 2],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 20,
            size_min_px: 10.0,
            size_span_px: 20.0,
            speed_min: 0.5,
            speed_span: 2.0,
            opacity_min: 0.2,
            opacity_span: 0.5,
            phase_rate_max: 0.1,
            stage_depth_px: 500.0,
            wrap_margin_px: 50.0,
            boost_scale: 1.5,
            boost_to_speed: 2.0,
            boost_to_size: 0.5,
            boost_to_opacity: 0.3,
            wobble_amplitude_px: 2.0,
            palette: [PINK, ROSE],
        }
    }
}

impl FieldConfig {
    /// Validate configuration ranges
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(Error::Config("particle_count must be > 0".to_string()));
        }
        if self.size_min_px <= 0.0 || self.size_span_px < 0.0 {
            return Err(Error::Config(format!(
                "particle size range [{}, +{}) must be positive",
                self.size_min_px, self.size_span_px
            )));
        }
        if self.speed_min <= 0.0 || self.speed_span < 0.0 {
            return Err(Error::Config(format!(
                "particle speed range [{}, +{}) must be positive",
                self.speed_min, self.speed_span
            )));
        }
        if self.opacity_min < 0.0 || self.opacity_min + self.opacity_span > 1.0 {
            return Err(Error::Config(format!(
                "opacity range [{}, {}) must stay within [0, 1]",
                self.opacity_min,
                self.opacity_min + self.opacity_span
            )));
        }
        if self.wrap_margin_px < 0.0 {
            return Err(Error::Config("wrap_margin_px must be >= 0".to_string()));
        }
        Ok(())
    }
}
