//! Lyricflow - timed-lyrics synchronization and audio-reactive particles
//!
//! LRC text becomes a time-sorted cue track; a polled playback clock
//! resolves the active line, while a per-frame session turns spectral
//! snapshots into a smoothed energy signal that drives a fixed set of
//! rising particles.

pub mod cli;
pub mod energy;
pub mod error;
pub mod lyrics;
pub mod params;
pub mod particles;
pub mod session;
pub mod spectrum;
