//! LRC timestamp parsing.
//!
//! Each line carries any number of `[M{1,2}:S{1,2}[(.|:)F{1,3}]]` tags
//! followed by lyric text; the text belongs to every tag on the line,
//! which is how a repeated lyric is written once. Metadata tags such as
//! `[ar:...]` carry no cue, and anything unrecognizable is skipped.

use super::{Cue, Track};

/// Metadata tag prefixes whose lines are skipped entirely
/// (case-insensitive): artist, title, album, author, length, creator,
/// offset, re-creator, version, id, tool.
const METADATA_PREFIXES: &[&str] = &[
    "ar", "ti", "al", "au", "length", "by", "offset", "re", "ve", "id", "tool",
];

/// Parse raw LRC text into a time-sorted track.
///
/// Never fails: malformed lines are silently ignored and the result
/// degrades to a shorter (possibly empty) track. Callers that want to
/// distinguish "no lyrics supplied" from "lyrics present but unparseable"
/// inspect the source text, not an error code.
pub fn parse(raw: &str) -> Track {
    let mut cues = Vec::new();

    // Splitting on both separators handles \n, \r\n, and bare \r input;
    // the empty fragments a \r\n pair produces are dropped as blank lines.
    for line in raw.split(['\n', '\r']) {
        if line.trim().is_empty() {
            continue;
        }
        if is_metadata_line(line) {
            continue;
        }
        scan_line(line, &mut cues);
    }

    log::info!("parsed {} cues from {} bytes of lyrics", cues.len(), raw.len());
    Track::from_cues(cues)
}

/// True when the line opens with a known metadata tag, e.g. `[ar:Artist]`.
fn is_metadata_line(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('[') else {
        return false;
    };
    let lower = rest.to_ascii_lowercase();
    METADATA_PREFIXES
        .iter()
        .any(|prefix| match lower.strip_prefix(prefix) {
            Some(after) => after.starts_with(':'),
            None => false,
        })
}

/// Emit one cue per timestamp tag found on the line, all sharing the text
/// that follows the last tag.
fn scan_line(line: &str, cues: &mut Vec<Cue>) {
    let bytes = line.as_bytes();
    let mut times: Vec<f64> = Vec::new();
    let mut text_start = 0;

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'[' {
            if let Some((time, len)) = match_tag(&bytes[i..]) {
                times.push(time);
                text_start = i + len;
                i += len;
                continue;
            }
        }
        i += 1;
    }

    if times.is_empty() {
        return;
    }

    // text_start is always just past a ']', so slicing is char-safe
    let text = line[text_start..].trim();
    if text.is_empty() {
        return;
    }

    for time in times {
        cues.push(Cue {
            time,
            text: text.to_string(),
        });
    }
}

/// Match one timestamp tag at the start of `s` (which begins with `[`).
///
/// Grammar: `[M{1,2}:S{1,2}[(.|:)F{1,3}]]`. The fractional capture is
/// right-padded or truncated to exactly three digits and read as whole
/// milliseconds. Returns the time in seconds and the tag's byte length.
fn match_tag(s: &[u8]) -> Option<(f64, usize)> {
    let mut i = 1;

    let (minutes, n) = read_digits(&s[i..], 2)?;
    i += n;
    if s.get(i) != Some(&b':') {
        return None;
    }
    i += 1;

    let (seconds, n) = read_digits(&s[i..], 2)?;
    i += n;

    let mut millis = 0u32;
    if matches!(s.get(i), Some(b'.') | Some(b':')) {
        // A separator with no workable digit count invalidates the whole
        // tag: the closing bracket can never sit on the separator itself.
        let (frac_millis, len) = match_fraction(&s[i + 1..])?;
        millis = frac_millis;
        i += 1 + len;
    }

    if s.get(i) != Some(&b']') {
        return None;
    }

    let time = f64::from(minutes) * 60.0 + f64::from(seconds) + f64::from(millis) / 1000.0;
    Some((time, i + 1))
}

/// Match the fractional-second digits, longest first, such that a `]`
/// follows. Mirrors the backtracking a greedy `\d{1,3}` regex would do.
fn match_fraction(s: &[u8]) -> Option<(u32, usize)> {
    let mut available = 0;
    while available < 3 && s.get(available).is_some_and(u8::is_ascii_digit) {
        available += 1;
    }
    for len in (1..=available).rev() {
        if s.get(len) == Some(&b']') {
            // Right-pad to three digits: ".5" means 500 ms
            let mut millis = 0u32;
            for k in 0..3 {
                let digit = if k < len { (s[k] - b'0') as u32 } else { 0 };
                millis = millis * 10 + digit;
            }
            return Some((millis, len));
        }
    }
    None
}

/// Read 1..=`max` ASCII digits from the front of `s`.
fn read_digits(s: &[u8], max: usize) -> Option<(u32, usize)> {
    let mut value = 0u32;
    let mut count = 0;
    while count < max && s.get(count).is_some_and(u8::is_ascii_digit) {
        value = value * 10 + (s[count] - b'0') as u32;
        count += 1;
    }
    (count > 0).then_some((value, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tag_line() {
        let track = parse("[00:12.50]Hello world");
        assert_eq!(track.len(), 1);
        assert_eq!(track.cues()[0].time, 12.5);
        assert_eq!(track.cues()[0].text, "Hello world");
    }

    #[test]
    fn test_output_sorted_by_time() {
        let track = parse("[00:12.50]Hello world\n[00:05.00]Bye");
        assert_eq!(track.len(), 2);
        assert_eq!(track.cues()[0].time, 5.0);
        assert_eq!(track.cues()[0].text, "Bye");
        assert_eq!(track.cues()[1].time, 12.5);
        assert_eq!(track.cues()[1].text, "Hello world");
    }

    #[test]
    fn test_metadata_only_input_yields_empty_track() {
        assert!(parse("[ar:Test Artist]").is_empty());
        assert!(parse("[ti:Song]\n[al:Album]\n[offset:+500]").is_empty());
    }

    #[test]
    fn test_metadata_check_is_case_insensitive() {
        assert!(parse("[AR:Test Artist]\n[Ti:Song]").is_empty());
    }

    #[test]
    fn test_repeated_line_emits_one_cue_per_tag() {
        let track = parse("[00:01.00][00:02.00]Repeat");
        assert_eq!(track.len(), 2);
        assert_eq!(track.cues()[0].time, 1.0);
        assert_eq!(track.cues()[1].time, 2.0);
        assert!(track.cues().iter().all(|c| c.text == "Repeat"));
    }

    #[test]
    fn test_text_taken_after_last_tag() {
        // Anything between tags is dropped; both cues get the final text
        let track = parse("[00:01.00]early [00:02.00]final");
        assert_eq!(track.len(), 2);
        assert!(track.cues().iter().all(|c| c.text == "final"));
    }

    #[test]
    fn test_equal_timestamps_keep_emission_order() {
        let track = parse("[00:01.00]first\n[00:01.00]second");
        assert_eq!(track.cues()[0].text, "first");
        assert_eq!(track.cues()[1].text, "second");
    }

    #[test]
    fn test_crlf_and_bare_cr_line_endings() {
        let track = parse("[00:01.00]one\r\n[00:02.00]two\r[00:03.00]three");
        assert_eq!(track.len(), 3);
        assert_eq!(track.cues()[2].text, "three");
    }

    #[test]
    fn test_single_digit_components() {
        let track = parse("[0:05]short\n[1:2.5]padded");
        assert_eq!(track.len(), 2);
        assert_eq!(track.cues()[0].time, 5.0);
        // ".5" pads to 500 ms
        assert_eq!(track.cues()[1].time, 62.5);
        assert_eq!(track.cues()[1].text, "padded");
    }

    #[test]
    fn test_colon_fraction_separator() {
        let track = parse("[0:05:250]colon form");
        assert_eq!(track.len(), 1);
        assert_eq!(track.cues()[0].time, 5.25);
    }

    #[test]
    fn test_three_digit_fraction_is_milliseconds() {
        let track = parse("[00:07.123]precise");
        assert_eq!(track.cues()[0].time, 7.123);
    }

    #[test]
    fn test_four_fraction_digits_invalidate_the_tag() {
        assert!(parse("[00:05.1234]too precise").is_empty());
    }

    #[test]
    fn test_unrecognizable_lines_are_ignored() {
        let track = parse("no timestamps here\n[broken\n[00:01.00]ok\n[99]nope");
        assert_eq!(track.len(), 1);
        assert_eq!(track.cues()[0].text, "ok");
    }

    #[test]
    fn test_tag_after_leading_text_still_counts() {
        let track = parse("chorus: [00:30.00]sing along");
        assert_eq!(track.len(), 1);
        assert_eq!(track.cues()[0].time, 30.0);
        assert_eq!(track.cues()[0].text, "sing along");
    }

    #[test]
    fn test_tag_with_no_text_emits_nothing() {
        assert!(parse("[00:01.00]").is_empty());
        assert!(parse("[00:01.00]    ").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n\r\n").is_empty());
    }

    #[test]
    fn test_three_digit_minutes_rejected() {
        assert!(parse("[123:45]way out there").is_empty());
    }

    #[test]
    fn test_whitespace_around_text_trimmed() {
        let track = parse("[00:01.00]   spaced out   ");
        assert_eq!(track.cues()[0].text, "spaced out");
    }
}
