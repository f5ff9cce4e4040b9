//! Native spectral source: WAV file playback position to byte spectrum.
//!
//! Reproduces the browser analyser contract the visualizer consumes:
//! Hann-windowed short-time FFT, per-bin temporal smoothing of linear
//! magnitudes, then dB conversion mapped onto bytes over a fixed range.

use std::f32::consts::TAU;
use std::path::Path;
use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::error::{Error, Result};
use crate::params::SpectrumConfig;
use crate::session::SpectralSource;

/// Spectral snapshots from a decoded WAV track.
///
/// Each `snapshot` call analyzes one window and advances the read cursor
/// by one hop (`sample_rate / fps`), so polling at the configured frame
/// rate tracks real playback time. Past the end of the track the source
/// keeps producing windows of silence and the smoothed spectrum decays
/// to zero instead of cutting off.
pub struct WavSpectralSource {
    samples: Vec<f32>,
    sample_rate: u32,
    config: SpectrumConfig,
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    cursor: usize,
    smoothed: Vec<f32>,
    snapshot: Vec<u8>,
    scratch: Vec<Complex<f32>>,
}

impl WavSpectralSource {
    /// Decode a WAV file, downmixing to mono by averaging channels.
    pub fn open<P: AsRef<Path>>(path: P, config: SpectrumConfig) -> Result<Self> {
        let mut reader = hound::WavReader::open(path)?;
        let spec = reader.spec();

        let interleaved: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => {
                reader.samples::<f32>().collect::<std::result::Result<_, _>>()?
            }
            hound::SampleFormat::Int => {
                let scale = 1.0 / (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 * scale))
                    .collect::<std::result::Result<_, _>>()?
            }
        };

        let channels = spec.channels as usize;
        let samples: Vec<f32> = interleaved
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect();

        log::info!(
            "loaded {:.1}s of audio at {} Hz ({} channels)",
            samples.len() as f64 / f64::from(spec.sample_rate),
            spec.sample_rate,
            channels
        );
        Self::from_samples(samples, spec.sample_rate, config)
    }

    /// Build a source over mono samples already in memory.
    pub fn from_samples(samples: Vec<f32>, sample_rate: u32, config: SpectrumConfig) -> Result<Self> {
        config.validate()?;
        if sample_rate == 0 {
            return Err(Error::Config("sample_rate must be > 0".to_string()));
        }

        let n = config.fft_size;
        let fft = FftPlanner::new().plan_fft_forward(n);
        let window = (0..n)
            .map(|i| 0.5 * (1.0 - (TAU * i as f32 / n as f32).cos()))
            .collect();

        Ok(Self {
            samples,
            sample_rate,
            fft,
            window,
            cursor: 0,
            smoothed: vec![0.0; config.bin_count()],
            snapshot: vec![0; config.bin_count()],
            scratch: vec![Complex::default(); n],
            config,
        })
    }

    pub fn duration_sec(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Analysis position in seconds.
    pub fn position_sec(&self) -> f64 {
        self.cursor as f64 / f64::from(self.sample_rate)
    }

    fn analyze(&mut self) {
        let n = self.config.fft_size;
        for (i, slot) in self.scratch.iter_mut().enumerate() {
            let sample = self.samples.get(self.cursor + i).copied().unwrap_or(0.0);
            *slot = Complex::new(sample * self.window[i], 0.0);
        }
        self.fft.process(&mut self.scratch);

        let smoothing = self.config.smoothing;
        let db_span = self.config.max_db - self.config.min_db;
        for (k, out) in self.snapshot.iter_mut().enumerate() {
            let lin = self.scratch[k].norm() * 2.0 / n as f32;
            self.smoothed[k] = smoothing * self.smoothed[k] + (1.0 - smoothing) * lin;
            let db = 20.0 * self.smoothed[k].log10();
            let norm = ((db - self.config.min_db) / db_span).clamp(0.0, 1.0);
            *out = (norm * 255.0) as u8;
        }

        self.cursor += (self.sample_rate / self.config.fps) as usize;
    }
}

impl SpectralSource for WavSpectralSource {
    fn snapshot(&mut self) -> &[u8] {
        self.analyze();
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f32, amplitude: f32, seconds: f32, sample_rate: u32) -> Vec<f32> {
        let count = (seconds * sample_rate as f32) as usize;
        (0..count)
            .map(|i| amplitude * (TAU * freq * i as f32 / sample_rate as f32).sin())
            .collect()
    }

    #[test]
    fn test_silence_reads_as_zero_bytes() {
        let mut source =
            WavSpectralSource::from_samples(vec![0.0; 44_100], 44_100, SpectrumConfig::default())
                .unwrap();
        let snapshot = source.snapshot();
        assert_eq!(snapshot.len(), 128);
        assert!(snapshot.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_low_tone_concentrates_in_low_bins() {
        let samples = sine(500.0, 0.8, 1.0, 44_100);
        let mut source =
            WavSpectralSource::from_samples(samples, 44_100, SpectrumConfig::default()).unwrap();
        // Let the temporal smoothing converge
        for _ in 0..20 {
            source.snapshot();
        }
        let snapshot = source.snapshot().to_vec();
        let low: u32 = snapshot[..13].iter().map(|&b| u32::from(b)).sum();
        let high: u32 = snapshot[64..].iter().map(|&b| u32::from(b)).sum();
        assert!(low > 0, "tone must register in the bass band");
        assert!(low > high * 4, "low {low} vs high {high}");
    }

    #[test]
    fn test_spectrum_decays_past_end_of_track() {
        let samples = sine(500.0, 0.8, 0.1, 44_100);
        let mut source =
            WavSpectralSource::from_samples(samples, 44_100, SpectrumConfig::default()).unwrap();
        for _ in 0..10 {
            source.snapshot();
        }
        assert!(source.snapshot().iter().any(|&b| b > 0));

        // 0.1 s of audio is long gone after 200 hops; smoothing has had
        // ~190 silent frames to decay below the -100 dB floor
        for _ in 0..190 {
            source.snapshot();
        }
        assert!(source.snapshot().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_cursor_tracks_frame_rate() {
        let mut source =
            WavSpectralSource::from_samples(vec![0.0; 44_100], 44_100, SpectrumConfig::default())
                .unwrap();
        for _ in 0..60 {
            source.snapshot();
        }
        // 60 hops of 735 samples = 44100, one second of playback
        assert!((source.position_sec() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_duration() {
        let source =
            WavSpectralSource::from_samples(vec![0.0; 22_050], 44_100, SpectrumConfig::default())
                .unwrap();
        assert!((source.duration_sec() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SpectrumConfig {
            fft_size: 100,
            ..SpectrumConfig::default()
        };
        assert!(WavSpectralSource::from_samples(vec![0.0; 512], 44_100, config).is_err());
    }

    #[test]
    fn test_wav_round_trip_downmixes_stereo() {
        let path = std::env::temp_dir().join(format!("lyricflow-test-{}.wav", std::process::id()));
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 44_100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for sample in sine(500.0, 0.5, 0.25, 44_100) {
            let v = (sample * i16::MAX as f32) as i16;
            writer.write_sample(v).unwrap(); // left
            writer.write_sample(v).unwrap(); // right
        }
        writer.finalize().unwrap();

        let mut source = WavSpectralSource::open(&path, SpectrumConfig::default()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(source.sample_rate(), 44_100);
        assert!((source.duration_sec() - 0.25).abs() < 1e-3);
        for _ in 0..10 {
            source.snapshot();
        }
        assert!(source.snapshot().iter().any(|&b| b > 0));
    }
}
