//! Playhead lookups for a playback UI
//!
//! A UI driver advances a virtual playhead over a [`PlaybackSong`] and, on
//! every frame, asks which lyric line, chord and strum are current and how
//! far the auto-scroll should have moved.

use serde::Serialize;

use super::types::{ChordEvent, LyricLine, PlaybackSong, StrumEvent};

/// Index of the lyric line current at `progress_ms`.
///
/// Ranges are closed, so at a shared boundary the later line wins. When no
/// range contains the time (before the first or after the last line) the
/// first line is reported; `None` only when there are no lyrics.
pub fn current_lyric_index(lyrics: &[LyricLine], progress_ms: u64) -> Option<usize> {
    if lyrics.is_empty() {
        return None;
    }
    Some(
        lyrics
            .iter()
            .rposition(|l| l.contains(progress_ms))
            .unwrap_or(0),
    )
}

/// The chord change most recently passed at `time_ms`.
pub fn active_chord(chords: &[ChordEvent], time_ms: u64) -> Option<&ChordEvent> {
    chords.iter().take_while(|c| c.time_ms <= time_ms).last()
}

/// The strum stroke most recently passed at `time_ms`.
pub fn active_strum(strums: &[StrumEvent], time_ms: u64) -> Option<&StrumEvent> {
    strums.iter().take_while(|s| s.time_ms <= time_ms).last()
}

/// Auto-scroll progress in `[0, 1]`.
///
/// `speed` scales playback (2.0 plays twice as fast, so the song finishes in
/// half of `duration_ms`).
pub fn scroll_fraction(elapsed_ms: u64, duration_ms: u64, speed: f64) -> f64 {
    if duration_ms == 0 || speed <= 0.0 || !speed.is_finite() {
        return 0.0;
    }
    let effective = duration_ms as f64 / speed;
    if effective <= 0.0 {
        return 0.0;
    }
    (elapsed_ms as f64 / effective).clamp(0.0, 1.0)
}

/// Milliseconds between metronome clicks at `bpm` scaled by `speed`.
///
/// The scaled tempo is truncated to whole beats per minute; `None` when it
/// rounds down to zero.
pub fn metronome_interval_ms(bpm: u32, speed: f64) -> Option<u64> {
    let scaled = (f64::from(bpm) * speed) as u64;
    if scaled == 0 {
        return None;
    }
    Some((60_000.0 / scaled as f64) as u64)
}

/// Everything current at one playhead position.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayheadFrame {
    pub position_ms: u64,
    pub lyric_index: Option<usize>,
    pub chord: Option<String>,
    pub strum: Option<StrumEvent>,
    pub fraction: f64,
}

/// A virtual playhead over a song.
#[derive(Debug, Clone)]
pub struct Playhead<'a> {
    song: &'a PlaybackSong,
    position_ms: u64,
}

impl<'a> Playhead<'a> {
    pub fn new(song: &'a PlaybackSong) -> Self {
        Self { song, position_ms: 0 }
    }

    pub fn position_ms(&self) -> u64 {
        self.position_ms
    }

    /// Move to an absolute position, clamped to the song's end.
    pub fn seek(&mut self, position_ms: u64) {
        self.position_ms = position_ms.min(self.song.duration_ms);
    }

    /// Advance by `delta_ms`; returns `false` once the end is reached.
    pub fn advance(&mut self, delta_ms: u64) -> bool {
        self.seek(self.position_ms.saturating_add(delta_ms));
        !self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.position_ms >= self.song.duration_ms
    }

    pub fn frame(&self) -> PlayheadFrame {
        let t = self.position_ms;
        PlayheadFrame {
            position_ms: t,
            lyric_index: current_lyric_index(&self.song.lyrics, t),
            chord: active_chord(&self.song.chords, t).map(|c| c.label.clone()),
            strum: active_strum(&self.song.strums, t).cloned(),
            fraction: scroll_fraction(t, self.song.duration_ms, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::StrumDirection;

    fn lyric(text: &str, start_ms: u64, end_ms: u64) -> LyricLine {
        LyricLine { text: text.to_string(), start_ms, end_ms }
    }

    fn chord(label: &str, time_ms: u64) -> ChordEvent {
        ChordEvent { label: label.to_string(), time_ms }
    }

    #[test]
    fn test_current_lyric_index() {
        let lyrics = vec![lyric("a", 0, 100), lyric("b", 100, 200), lyric("c", 200, 300)];
        assert_eq!(current_lyric_index(&lyrics, 0), Some(0));
        assert_eq!(current_lyric_index(&lyrics, 50), Some(0));
        assert_eq!(current_lyric_index(&lyrics, 100), Some(1));
        assert_eq!(current_lyric_index(&lyrics, 250), Some(2));
        assert_eq!(current_lyric_index(&lyrics, 300), Some(2));
        assert_eq!(current_lyric_index(&lyrics, 999), Some(0));
        assert_eq!(current_lyric_index(&[], 10), None);
    }

    #[test]
    fn test_active_chord() {
        let chords = vec![chord("C", 0), chord("Am", 2181), chord("G", 4363)];
        assert_eq!(active_chord(&chords, 0).map(|c| c.label.as_str()), Some("C"));
        assert_eq!(active_chord(&chords, 2180).map(|c| c.label.as_str()), Some("C"));
        assert_eq!(active_chord(&chords, 2181).map(|c| c.label.as_str()), Some("Am"));
        assert_eq!(active_chord(&chords[1..], 5), None);
    }

    #[test]
    fn test_scroll_fraction() {
        assert_eq!(scroll_fraction(500, 1000, 1.0), 0.5);
        assert_eq!(scroll_fraction(500, 1000, 2.0), 1.0);
        assert_eq!(scroll_fraction(250, 1000, 0.5), 0.125);
        assert_eq!(scroll_fraction(5000, 1000, 1.0), 1.0);
        assert_eq!(scroll_fraction(10, 0, 1.0), 0.0);
        assert_eq!(scroll_fraction(10, 1000, 0.0), 0.0);
    }

    #[test]
    fn test_metronome_interval() {
        assert_eq!(metronome_interval_ms(120, 1.0), Some(500));
        assert_eq!(metronome_interval_ms(110, 1.0), Some(545));
        assert_eq!(metronome_interval_ms(100, 1.5), Some(400));
        assert_eq!(metronome_interval_ms(1, 0.5), None);
        assert_eq!(metronome_interval_ms(0, 1.0), None);
    }

    #[test]
    fn test_playhead_frames() {
        let song = PlaybackSong {
            title: "t".to_string(),
            bpm: 120,
            duration_ms: 1000,
            chords: vec![chord("C", 0), chord("G", 500)],
            strums: vec![
                StrumEvent { chord: Some("C".to_string()), direction: StrumDirection::Down, time_ms: 0, index: 0 },
                StrumEvent { chord: Some("G".to_string()), direction: StrumDirection::Up, time_ms: 750, index: 3 },
            ],
            lyrics: vec![lyric("only", 0, 1000)],
            raw_chord_line: None,
            raw_strum_line: None,
        };

        let mut head = Playhead::new(&song);
        assert_eq!(head.frame().chord.as_deref(), Some("C"));

        assert!(head.advance(600));
        let frame = head.frame();
        assert_eq!(frame.chord.as_deref(), Some("G"));
        assert_eq!(frame.strum.map(|s| s.direction), Some(StrumDirection::Down));
        assert_eq!(frame.lyric_index, Some(0));

        assert!(!head.advance(10_000));
        assert_eq!(head.position_ms(), 1000);
        assert_eq!(head.frame().fraction, 1.0);
    }
}
