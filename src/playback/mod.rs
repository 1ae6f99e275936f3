//! # Playback Module
//!
//! Generate a timed playback timeline from ASCII guitar tabs for auto-scrolling
//! and chord/strum/lyric highlighting.
//!
//! ## Purpose
//! A tab section pairs a chord line with a strum line and follows it with lyrics:
//!
//! ```text
//!    C       Am      G       C
//!    D D UDU D D UDU D D UDU D D UDU
//!
//! First lyric line
//! Second lyric line
//! ```
//!
//! The chord/strum pair is one repeating unit; it plays once per lyric line.
//! This module turns that into:
//! 1. **Chord events** - when each chord becomes active
//! 2. **Strum events** - every down/up stroke with its active chord
//! 3. **Lyric lines** - contiguous time ranges for highlighting
//!
//! ## Sub-modules
//! - `types` - PlaybackSong, ChordEvent, StrumEvent, LyricLine definitions
//! - `chord_parser` - Chord line tokenizing and chord-line detection
//! - `align` - Pluggable chord/strum column realignment
//! - `engine` - Block parsing, section assembly and song composition
//! - `playhead` - Lookups a UI performs while playing a timeline
//!
//! ## Entry Points
//! - [`parse_block()`] - One chord line + strum line
//! - [`assemble_section()`] - One section body
//! - [`compose_song()`] - A whole sectioned document
//!
//! ## Example
//! ```rust
//! use strumline::playback::parse_block;
//!
//! let unit = parse_block("C       Am", "D D UDU D D UDU", 120);
//!
//! assert_eq!(unit.strums[0].time_ms, 0);
//! assert_eq!(unit.chords[1].label, "Am");
//! assert_eq!(unit.chords[1].time_ms, 2000); // column 8 = 4 beats at 120 BPM
//! ```
//!
//! ## Timing
//!
//! Every character column is one eighth note, so at `bpm` beats per minute
//! column `i` starts at `i * 0.5 * 60000 / bpm` milliseconds. Repetitions,
//! blocks and sections are laid end to end without gaps or overlap.
//!
//! ## Related Modules
//! - `sanitize` - Cleans document text before parsing
//! - `sections` - Splits a document into `[Section]` blocks
//! - `metadata` - Per-section tempo configuration

mod align;
mod chord_parser;
mod engine;
mod playhead;
mod types;


pub use align::{AlignedLines, Alignment, DownUpRestAlignment, RawAlignment};
pub use chord_parser::{current_chord_at_index, is_chord_symbol, looks_like_chord_line, parse_chord_line};
pub use engine::{
    assemble_section, compose_song, offset_chords, offset_lyrics, offset_strums, parse_block,
    parse_block_with, DEFAULT_BPM,
};
pub use playhead::{
    active_chord, active_strum, current_lyric_index, metronome_interval_ms, scroll_fraction,
    Playhead, PlayheadFrame,
};
pub use types::{ChordEvent, ChordToken, LyricLine, PlaybackSong, StrumDirection, StrumEvent};
