//! Timed-lyric cue model, LRC parsing, and playback synchronization.

mod parse;
mod sync;

pub use parse::parse;
pub use sync::PlaybackSync;

/// One timestamped lyric line.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    /// Cue time in seconds from track start (fractional, >= 0)
    pub time: f64,
    /// Lyric text (never empty for parsed cues)
    pub text: String,
}

/// Ordered cue sequence for one song, immutable after parse.
///
/// Cues are sorted ascending by time; cues sharing a timestamp keep the
/// order in which parsing emitted them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    cues: Vec<Cue>,
}

impl Track {
    pub(crate) fn from_cues(mut cues: Vec<Cue>) -> Self {
        // Vec::sort_by is stable, which is what keeps equal-time cues in
        // emission order.
        cues.sort_by(|a, b| {
            a.time
                .partial_cmp(&b.time)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self { cues }
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cue> {
        self.cues.get(index)
    }

    /// Index of the last cue whose time is <= `t`, or `None` when the
    /// track is empty or `t` is before the first cue.
    ///
    /// Recomputed from scratch on every call: a backward seek yields the
    /// correct smaller index with no stale state. For a fixed track the
    /// result is monotone nondecreasing in `t`.
    pub fn index_at(&self, t: f64) -> Option<usize> {
        self.cues.iter().rposition(|cue| cue.time <= t)
    }
}

/// Format seconds as `"M:SS"` for transport display.
///
/// Both components are floored, never rounded; NaN and negative input
/// render as `"0:00"`.
pub fn format_time(seconds: f64) -> String {
    if seconds.is_nan() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
