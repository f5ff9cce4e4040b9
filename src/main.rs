//! Lyricflow - timed-lyrics visualizer with audio-reactive particles
//!
//! Runs the visualizer headless at a fixed frame rate: lyrics scroll by
//! on a simulated playback clock while the particle field reacts to the
//! bass energy of an optional WAV track.

use anyhow::Context;
use clap::Parser;

use lyricflow::cli::Args;
use lyricflow::lyrics::{self, PlaybackSync};
use lyricflow::params::{AnalyzerConfig, FieldConfig, SpectrumConfig};
use lyricflow::session::{SpriteCollector, VisualizerSession};
use lyricflow::spectrum::WavSpectralSource;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.lyrics)
        .with_context(|| format!("reading lyrics file {}", args.lyrics.display()))?;
    let track = lyrics::parse(&raw);
    if track.is_empty() {
        log::warn!("no timestamped lyrics found in {}", args.lyrics.display());
    }

    let analyzer_config = AnalyzerConfig::default();
    analyzer_config.validate()?;
    let field_config = FieldConfig {
        particle_count: args.particles,
        ..FieldConfig::default()
    };
    field_config.validate()?;

    let mut session =
        VisualizerSession::new(analyzer_config, field_config, args.canvas(), args.seed);

    let mut duration = args.frames as f64 / f64::from(args.fps);
    if let Some(audio_path) = &args.audio {
        let spectrum_config = SpectrumConfig {
            fps: args.fps,
            ..SpectrumConfig::default()
        };
        let source = WavSpectralSource::open(audio_path, spectrum_config)
            .with_context(|| format!("opening audio file {}", audio_path.display()))?;
        duration = source.duration_sec();
        session.attach_source(Box::new(source));
    }

    let mut sync = PlaybackSync::new(track, duration);
    let mut renderer = SpriteCollector::new();

    for frame in 0..args.frames {
        sync.set_time(frame as f64 / f64::from(args.fps));
        let energy = session.frame(&mut renderer);

        let meter = "#".repeat((energy * 20.0).round() as usize);
        println!(
            "{} |{:<20}| {}",
            sync.transport(),
            meter,
            sync.active_text().unwrap_or("...")
        );
    }

    log::info!(
        "ran {} frames, final energy {:.3}",
        session.frame_count(),
        session.energy()
    );
    session.teardown();
    Ok(())
}
