//! Visualizer session: wires the spectral source, energy analyzer, and
//! particle field into a caller-driven frame loop.

use crate::energy::EnergyAnalyzer;
use crate::params::{AnalyzerConfig, CanvasSize, FieldConfig};
use crate::particles::{ParticleField, ParticleSprite};

/// Polled producer of spectral snapshots.
///
/// Called once per frame; each call may advance the source's own clock
/// (a file reader steps its read cursor, a live capture just reports the
/// latest block). Bytes are magnitudes on the analyser scale, 0-255.
pub trait SpectralSource {
    fn snapshot(&mut self) -> &[u8];
}

/// Drawing backend fed one sprite batch per frame.
///
/// The session never assumes a concrete graphics stack; terminal meters,
/// GPU quads, and test collectors all implement this the same way.
pub trait ParticleRenderer {
    fn begin_frame(&mut self, canvas: CanvasSize);
    fn draw(&mut self, sprite: &ParticleSprite);
    fn end_frame(&mut self) {}
}

/// Renderer that discards everything. Useful for headless runs where only
/// the simulation state matters.
pub struct NullRenderer;

impl ParticleRenderer for NullRenderer {
    fn begin_frame(&mut self, _canvas: CanvasSize) {}
    fn draw(&mut self, _sprite: &ParticleSprite) {}
}

/// Renderer that buffers the current frame's sprites for inspection.
#[derive(Default)]
pub struct SpriteCollector {
    sprites: Vec<ParticleSprite>,
    canvas: CanvasSize,
}

impl SpriteCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprites(&self) -> &[ParticleSprite] {
        &self.sprites
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }
}

impl ParticleRenderer for SpriteCollector {
    fn begin_frame(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
        self.sprites.clear();
    }

    fn draw(&mut self, sprite: &ParticleSprite) {
        self.sprites.push(*sprite);
    }
}

/// One visualization run: analyzer plus field plus an optional source.
///
/// The caller owns the cadence; each `frame` call advances the simulation
/// exactly one step and draws it. Without a source the session idles:
/// energy is pinned at zero and the particles drift on base speed alone,
/// so pausing the audio never freezes the picture.
pub struct VisualizerSession {
    analyzer: EnergyAnalyzer,
    field: ParticleField,
    source: Option<Box<dyn SpectralSource>>,
    frames: u64,
}

impl VisualizerSession {
    pub fn new(
        analyzer_config: AnalyzerConfig,
        field_config: FieldConfig,
        canvas: CanvasSize,
        seed: u64,
    ) -> Self {
        Self {
            analyzer: EnergyAnalyzer::new(analyzer_config),
            field: ParticleField::new(field_config, canvas, seed),
            source: None,
            frames: 0,
        }
    }

    /// Start reacting to a spectral source. Replaces any previous one.
    pub fn attach_source(&mut self, source: Box<dyn SpectralSource>) {
        self.source = Some(source);
        log::debug!("spectral source attached");
    }

    /// Return to idle mode. Smoothing history is dropped with the source,
    /// so a later attach starts its energy envelope from zero.
    pub fn detach_source(&mut self) -> Option<Box<dyn SpectralSource>> {
        let source = self.source.take();
        self.analyzer.reset();
        source
    }

    pub fn energy(&self) -> f32 {
        self.analyzer.energy()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn resize(&mut self, canvas: CanvasSize) {
        self.field.resize(canvas);
    }

    /// Advance one frame: poll the source, fold its snapshot into the
    /// energy envelope, step the particles, and draw them. Returns the
    /// frame's energy.
    pub fn frame(&mut self, renderer: &mut dyn ParticleRenderer) -> f32 {
        let energy = match self.source.as_mut() {
            Some(source) => self.analyzer.step(source.snapshot()),
            None => {
                self.analyzer.reset();
                0.0
            }
        };

        self.field.update(energy);

        renderer.begin_frame(self.field.canvas());
        for sprite in self.field.snapshot() {
            renderer.draw(&sprite);
        }
        renderer.end_frame();

        self.frames += 1;
        log::trace!("frame {} energy {:.3}", self.frames, energy);
        energy
    }

    /// Run a fixed number of frames back to back.
    pub fn run_frames(&mut self, count: u64, renderer: &mut dyn ParticleRenderer) {
        for _ in 0..count {
            self.frame(renderer);
        }
    }

    /// End the session, releasing the source with it.
    pub fn teardown(self) {
        log::debug!("session torn down after {} frames", self.frames);
    }
}
