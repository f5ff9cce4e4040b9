//! Bass-band energy extraction with exponential smoothing.

use crate::params::AnalyzerConfig;

/// Smoothed, boosted loudness estimate of the low-frequency band.
///
/// Owns the one piece of state that persists across frames: the running
/// energy in [0, 1]. `step` is called once per animation frame, so the
/// filter is frame-order dependent by design.
pub struct EnergyAnalyzer {
    config: AnalyzerConfig,
    energy: f32,
}

impl EnergyAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            energy: 0.0,
        }
    }

    /// Current smoothed energy in [0, 1].
    pub fn energy(&self) -> f32 {
        self.energy
    }

    /// Forget all smoothing history.
    pub fn reset(&mut self) {
        self.energy = 0.0;
    }

    /// Fold one spectral snapshot (byte magnitudes, 0-255) into the
    /// running energy and return the new value.
    ///
    /// The bass band is the first `bass_fraction` of the snapshot, never
    /// fewer than one sample. An empty snapshot reads as silence.
    pub fn step(&mut self, spectrum: &[u8]) -> f32 {
        let instant = self.instant_level(spectrum);
        let retain = self.config.smoothing_retain;
        let smoothed = self.energy * retain + instant * (1.0 - retain);
        self.energy = (smoothed * self.config.gain).min(1.0);
        self.energy
    }

    /// Unsmoothed bass level in [0, 1] for one snapshot.
    fn instant_level(&self, spectrum: &[u8]) -> f32 {
        if spectrum.is_empty() {
            return 0.0;
        }
        let band = ((spectrum.len() as f32 * self.config.bass_fraction) as usize).max(1);
        let sum: u32 = spectrum[..band].iter().map(|&s| u32::from(s)).sum();
        sum as f32 / band as f32 / 255.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> EnergyAnalyzer {
        EnergyAnalyzer::new(AnalyzerConfig::default())
    }

    #[test]
    fn test_first_step_blends_from_zero() {
        // instant = 170/255 = 2/3; energy = min(1.5 * 0.3 * 2/3, 1) = 0.3
        let mut a = analyzer();
        let energy = a.step(&[170u8; 128]);
        assert!((energy - 0.3).abs() < 1e-4, "got {energy}");
    }

    #[test]
    fn test_constant_loud_input_saturates_at_ceiling() {
        let mut a = analyzer();
        for _ in 0..100 {
            a.step(&[170u8; 128]);
        }
        assert_eq!(a.energy(), 1.0);
    }

    #[test]
    fn test_silence_from_rest_stays_at_zero() {
        let mut a = analyzer();
        for _ in 0..10 {
            assert_eq!(a.step(&[0u8; 64]), 0.0);
        }
        assert_eq!(a.step(&[]), 0.0);
    }

    #[test]
    fn test_bass_band_is_first_tenth() {
        // 128 bins -> band of 12; only those samples matter
        let mut spectrum = [0u8; 128];
        for s in spectrum.iter_mut().take(12) {
            *s = 255;
        }
        let mut loud_tail = [0u8; 128];
        for s in loud_tail.iter_mut().skip(12) {
            *s = 255;
        }

        let mut a = analyzer();
        let bass_only = a.step(&spectrum);
        let mut b = analyzer();
        let tail_only = b.step(&loud_tail);

        assert!(bass_only > 0.4);
        assert_eq!(tail_only, 0.0);
    }

    #[test]
    fn test_short_spectrum_uses_at_least_one_sample() {
        // len 5 -> floor(0.5) clamped to 1 sample
        let mut a = analyzer();
        let energy = a.step(&[255, 0, 0, 0, 0]);
        assert!((energy - 0.45).abs() < 1e-4, "got {energy}");
    }

    #[test]
    fn test_reset_clears_history() {
        let mut a = analyzer();
        a.step(&[255u8; 32]);
        assert!(a.energy() > 0.0);
        a.reset();
        assert_eq!(a.energy(), 0.0);
    }
}
