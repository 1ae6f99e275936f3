//! Playback timeline type definitions
//!
//! This module defines the values a tab document is turned into: chord changes,
//! strum strokes and lyric ranges, all in milliseconds from the start of the song.
//! Values are never mutated after construction; shifting an event in time
//! produces a new copy, so one base pattern can be repeated at many offsets.

use serde::Serialize;

/// Direction of a single strum stroke
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StrumDirection {
    /// `D` on the strum line
    Down,
    /// `U` on the strum line
    Up,
}

impl StrumDirection {
    /// Classify a strum-line character, case-insensitively.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'D' => Some(StrumDirection::Down),
            'U' => Some(StrumDirection::Up),
            _ => None,
        }
    }
}

/// A chord name and the column where it begins on a chord line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    pub chord: String,
    pub start_index: usize,
}

/// One strum stroke
///
/// # Fields
/// - `chord`: chord active at this column (last token starting at or before it), if any
/// - `direction`: down or up stroke
/// - `time_ms`: time from the start of the timeline
/// - `index`: column on the realigned strum line
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrumEvent {
    pub chord: Option<String>,
    pub direction: StrumDirection,
    pub time_ms: u64,
    pub index: usize,
}

impl StrumEvent {
    pub fn with_offset(&self, offset_ms: u64) -> Self {
        Self {
            time_ms: self.time_ms + offset_ms,
            ..self.clone()
        }
    }
}

/// The moment a chord becomes active
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChordEvent {
    pub label: String,
    pub time_ms: u64,
}

impl ChordEvent {
    pub fn with_offset(&self, offset_ms: u64) -> Self {
        Self {
            label: self.label.clone(),
            time_ms: self.time_ms + offset_ms,
        }
    }
}

/// A lyric line and the range during which it is current
///
/// Within one song the ranges are contiguous: each line's `end_ms` is the
/// next line's `start_ms`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LyricLine {
    pub text: String,
    pub start_ms: u64,
    pub end_ms: u64,
}

impl LyricLine {
    pub fn with_offset(&self, offset_ms: u64) -> Self {
        Self {
            text: self.text.clone(),
            start_ms: self.start_ms + offset_ms,
            end_ms: self.end_ms + offset_ms,
        }
    }

    /// Closed-range membership, as used for highlighting.
    pub fn contains(&self, time_ms: u64) -> bool {
        self.start_ms <= time_ms && time_ms <= self.end_ms
    }
}

/// The complete timeline handed to a playback UI
///
/// # Fields
/// - `bpm`: tempo in beats per minute (for composed songs, the first section's tempo)
/// - `duration_ms`: total length; sections and repetitions are laid end to end
/// - `raw_chord_line` / `raw_strum_line`: the source lines, set only for a single parsed block
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSong {
    pub title: String,
    pub bpm: u32,
    pub duration_ms: u64,
    pub chords: Vec<ChordEvent>,
    pub strums: Vec<StrumEvent>,
    pub lyrics: Vec<LyricLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_chord_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_strum_line: Option<String>,
}

impl PlaybackSong {
    /// An empty timeline with the given title and tempo.
    pub fn empty(title: impl Into<String>, bpm: u32) -> Self {
        Self {
            title: title.into(),
            bpm,
            duration_ms: 0,
            chords: Vec::new(),
            strums: Vec::new(),
            lyrics: Vec::new(),
            raw_chord_line: None,
            raw_strum_line: None,
        }
    }
}
