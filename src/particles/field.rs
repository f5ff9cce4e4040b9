//! Particle field simulation.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::params::{CanvasSize, FieldConfig};

use super::{Particle, ParticleSprite};

/// Fixed-population field of particles rising through the canvas.
///
/// All randomness flows through one seeded generator, so two fields built
/// with the same config and seed replay identical trajectories. Energy
/// only enters through `update`; the field never reads audio itself.
pub struct ParticleField {
    particles: Vec<Particle>,
    config: FieldConfig,
    canvas: CanvasSize,
    rng: StdRng,
    boost: f32,
}

impl ParticleField {
    pub fn new(config: FieldConfig, canvas: CanvasSize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..config.particle_count)
            .map(|_| spawn(&config, canvas, &mut rng))
            .collect();
        Self {
            particles,
            config,
            canvas,
            rng,
            boost: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Energy boost applied during the most recent update.
    pub fn boost(&self) -> f32 {
        self.boost
    }

    /// Advance every particle by one frame under the given energy.
    ///
    /// Higher energy raises rise speed immediately; the sprite-level size
    /// and opacity pulses are derived in `snapshot` from the same boost.
    /// A particle that climbs past the top margin re-enters below the
    /// canvas at a fresh horizontal position, keeping its other traits.
    pub fn update(&mut self, energy: f32) {
        self.boost = energy * self.config.boost_scale;
        let dy = self.boost * self.config.boost_to_speed;
        let wrap_at = -self.config.wrap_margin_px;
        let reentry_y = self.canvas.height + self.config.wrap_margin_px;

        for p in &mut self.particles {
            p.pos.y -= p.base_speed + dy;
            p.phase += p.phase_rate;
            if p.pos.y < wrap_at {
                p.pos.y = reentry_y;
                p.pos.x = self.rng.gen::<f32>() * self.canvas.width;
            }
        }
    }

    /// Describe every particle for drawing, wobble and pulses applied.
    pub fn snapshot(&self) -> Vec<ParticleSprite> {
        let size_scale = 1.0 + self.boost * self.config.boost_to_size;
        let opacity_lift = self.boost * self.config.boost_to_opacity;

        self.particles
            .iter()
            .map(|p| ParticleSprite {
                x: p.pos.x + p.phase.sin() * self.config.wobble_amplitude_px,
                y: p.pos.y,
                size: p.base_size * size_scale,
                opacity: (p.base_opacity + opacity_lift).clamp(0.0, 1.0),
                color: p.color,
            })
            .collect()
    }

    /// Adopt new canvas bounds. Existing particles keep their positions;
    /// only future wraps and spawns see the new size.
    pub fn resize(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
    }
}

fn spawn(config: &FieldConfig, canvas: CanvasSize, rng: &mut StdRng) -> Particle {
    Particle {
        pos: Vec2::new(
            rng.gen::<f32>() * canvas.width,
            canvas.height + rng.gen::<f32>() * config.stage_depth_px,
        ),
        base_size: config.size_min_px + rng.gen::<f32>() * config.size_span_px,
        base_speed: config.speed_min + rng.gen::<f32>() * config.speed_span,
        base_opacity: config.opacity_min + rng.gen::<f32>() * config.opacity_span,
        phase: rng.gen::<f32>() * std::f32::consts::TAU,
        phase_rate: rng.gen::<f32>() * config.phase_rate_max,
        color: if rng.gen_bool(0.5) {
            config.palette[0]
        } else {
            config.palette[1]
        },
    }
}
