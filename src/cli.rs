//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::CanvasSize;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Lyricflow")]
#[command(about = "Timed-lyrics visualizer with audio-reactive particles", long_about = None)]
pub struct Args {
    /// LRC lyrics file to synchronize against
    #[arg(value_name = "LYRICS.lrc")]
    pub lyrics: PathBuf,

    /// WAV file driving the particle reactivity; omit for idle mode
    #[arg(long, value_name = "AUDIO.wav")]
    pub audio: Option<PathBuf>,

    /// Number of frames to run
    #[arg(long, value_name = "COUNT", default_value = "300")]
    pub frames: u64,

    /// Simulated frame rate (frames per second)
    #[arg(long, value_name = "FPS", default_value = "60")]
    pub fps: u32,

    /// Particle randomness seed
    #[arg(long, value_name = "SEED", default_value = "42")]
    pub seed: u64,

    /// Canvas width in pixels
    #[arg(long, value_name = "PIXELS", default_value = "1280")]
    pub width: f32,

    /// Canvas height in pixels
    #[arg(long, value_name = "PIXELS", default_value = "720")]
    pub height: f32,

    /// Number of particles in the field
    #[arg(long, value_name = "COUNT", default_value = "20")]
    pub particles: usize,
}

impl Args {
    pub fn canvas(&self) -> CanvasSize {
        CanvasSize {
            width: self.width,
            height: self.height,
        }
    }
}
