//! Energy extraction configuration.

use crate::error::{Error, Result};

/// Configuration for bass-band energy extraction and smoothing.
///
/// Per frame: `instant = avg(bass band) / 255`, then
/// `energy = min((prev * retain + instant * (1 - retain)) * gain, 1)`.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Fraction of the spectrum treated as the bass band (dimensionless).
    /// The band is `floor(len * fraction)` samples, never fewer than one.
    /// Default 0.1 covers the first 10% of bins.
    pub bass_fraction: f32,

    /// Weight of the previous frame's energy in the one-pole low-pass
    /// blend. Default 0.7 keeps a 70/30 mix of old and new.
    pub smoothing_retain: f32,

    /// Gain applied after smoothing; output is hard-clipped to 1.0.
    pub gain: f32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            bass_fraction: 0.1,
            smoothing_retain: 0.7,
            gain: 1.5,
        }
    }
}

impl AnalyzerConfig {
    /// Validate configuration ranges
    pub fn validate(&self) -> Result<()> {
        if !(self.bass_fraction > 0.0 && self.bass_fraction <= 1.0) {
            return Err(Error::Config(format!(
                "bass_fraction must be in (0, 1], got {}",
                self.bass_fraction
            )));
        }
        if !(0.0..1.0).contains(&self.smoothing_retain) {
            return Err(Error::Config(format!(
                "smoothing_retain must be in [0, 1), got {}",
                self.smoothing_retain
            )));
        }
        if self.gain <= 0.0 {
            return Err(Error::Config(format!(
                "gain must be > 0, got {}",
                self.gain
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_bass_fraction() {
        let config = AnalyzerConfig {
            bass_fraction: 0.0,
            ..AnalyzerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_full_retain() {
        // retain = 1.0 would make the filter ignore input entirely
        let config = AnalyzerConfig {
            smoothing_retain: 1.0,
            ..AnalyzerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
