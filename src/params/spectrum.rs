//! Spectral source configuration.

use crate::error::{Error, Result};

/// Short-time FFT configuration for the native spectral source.
///
/// The dB-to-byte mapping and per-bin temporal smoothing reproduce the
/// browser analyser contract the visualizer was written against
/// (fftSize 256, smoothingTimeConstant 0.8, byte frequency data).
#[derive(Debug, Clone)]
pub struct SpectrumConfig {
    /// FFT window size in samples (must be a power of 2)
    pub fft_size: usize,

    /// Polling rate the source is stepped at (frames per second);
    /// determines the hop between consecutive analysis windows
    pub fps: u32,

    /// Per-bin temporal smoothing: retained fraction of the previous
    /// frame's linear magnitude, in [0, 1)
    pub smoothing: f32,

    /// Magnitude (dB) mapped to byte 0
    pub min_db: f32,

    /// Magnitude (dB) mapped to byte 255
    pub max_db: f32,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            fft_size: 256,
            fps: 60,
            smoothing: 0.8,
            min_db: -100.0,
            max_db: -30.0,
        }
    }
}

impl SpectrumConfig {
    /// Number of magnitude bins a snapshot carries
    pub fn bin_count(&self) -> usize {
        self.fft_size / 2
    }

    /// Validate configuration (FFT size must be power of 2, etc.)
    pub fn validate(&self) -> Result<()> {
        if !self.fft_size.is_power_of_two() {
            return Err(Error::Config(format!(
                "fft_size must be a power of 2, got {}",
                self.fft_size
            )));
        }
        if self.fps == 0 {
            return Err(Error::Config("fps must be > 0".to_string()));
        }
        if !(0.0..1.0).contains(&self.smoothing) {
            return Err(Error::Config(format!(
                "smoothing must be in [0, 1), got {}",
                self.smoothing
            )));
        }
        if self.min_db >= self.max_db {
            return Err(Error::Config(format!(
                "min_db ({}) must be below max_db ({})",
                self.min_db, self.max_db
            )));
        }
        Ok(())
    }
}
