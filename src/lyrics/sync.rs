//! Playback-time to lyric-index synchronization.

use super::{format_time, Track};

/// Maps a polled playback clock onto the active cue of one track.
///
/// Holds no cursor into the track: every lookup recomputes the index from
/// the freshest time, so seeking in either direction can never leave the
/// display out of sync. Playback-time updates arrive on their own cadence,
/// independent of the render loop.
pub struct PlaybackSync {
    track: Track,
    current_time: f64,
    duration: f64,
}

impl PlaybackSync {
    /// Wrap a parsed track. `duration_sec` is the total track length used
    /// for progress display; pass 0.0 when unknown.
    pub fn new(track: Track, duration_sec: f64) -> Self {
        Self {
            track,
            current_time: 0.0,
            duration: duration_sec.max(0.0),
        }
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Record the freshest playback time (seconds). A seek is just another
    /// time update.
    pub fn set_time(&mut self, t: f64) {
        self.current_time = t;
    }

    pub fn time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Active cue index for the freshest time; `None` means no lyric is
    /// active yet (or the track is empty).
    pub fn active_index(&self) -> Option<usize> {
        self.track.index_at(self.current_time)
    }

    /// Text of the active cue, if any.
    pub fn active_text(&self) -> Option<&str> {
        self.active_index()
            .and_then(|i| self.track.get(i))
            .map(|cue| cue.text.as_str())
    }

    /// Playback progress in [0, 1]; 0 when the duration is unknown.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        (self.current_time / self.duration).clamp(0.0, 1.0)
    }

    /// Transport display string, e.g. `"1:05 / 3:42"`.
    pub fn transport(&self) -> String {
        format!(
            "{} / {}",
            format_time(self.current_time),
            format_time(self.duration)
        )
    }
}
