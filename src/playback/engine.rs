//! Playback timeline generation engine
//!
//! Converts tab text into timed chord, strum and lyric events at three levels:
//! - [`parse_block`]: one chord line + strum line, a single repeating unit
//! - [`assemble_section`]: every chord/strum block of one section, repeated per lyric line
//! - [`compose_song`]: every section of a document, played back to back
//!
//! # Timing
//! One character column is one eighth note (half a beat):
//! `time_ms(i) = i * 0.5 * (60000 / bpm)`, truncated to whole milliseconds.
//! The math is done in integers (`i * 30000 / bpm`) so exact values stay exact.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::align::{Alignment, DownUpRestAlignment};
use super::chord_parser::{current_chord_at_index, looks_like_chord_line, parse_chord_line};
use super::types::{ChordEvent, LyricLine, PlaybackSong, StrumDirection, StrumEvent};
use crate::sections::{doc_lines, split_into_sections};

/// Tempo used for sections without an explicit BPM
pub const DEFAULT_BPM: u32 = 80;

/// One eighth note lasts `EIGHTH_NOTE_MS_AT_1_BPM / bpm` milliseconds
const EIGHTH_NOTE_MS_AT_1_BPM: u64 = 30_000;

/// Eighth notes assumed after the last chord when a block has no strum pattern
const CHORD_ONLY_TAIL_EIGHTHS: u64 = 8;

/// Tab staff marker (`e|-0---`), ends a lyric run
const STAFF_MARKER: &str = "|-";

fn effective_bpm(bpm: u32) -> u64 {
    if bpm == 0 {
        warn!("tempo of 0 BPM clamped to 1 BPM");
        1
    } else {
        u64::from(bpm)
    }
}

/// Start of eighth-note column `eighths`, in whole milliseconds (truncated).
fn eighths_to_ms(eighths: u64, bpm: u64) -> u64 {
    eighths * EIGHTH_NOTE_MS_AT_1_BPM / bpm
}

/// Parse a single chord line + strum line pair into one repeating unit.
///
/// Uses the [`DownUpRestAlignment`] heuristic; see [`parse_block_with`] to
/// supply another [`Alignment`].
///
/// # Duration
/// - with strums: up to and including the last strum column
/// - without strums: last chord column plus a four-beat tail
///
/// # Examples
/// ```
/// use strumline::playback::{parse_block, StrumDirection};
///
/// let unit = parse_block("C   G", "D D U D", 120);
/// assert_eq!(unit.strums[0].direction, StrumDirection::Down);
/// assert_eq!(unit.strums[0].chord.as_deref(), Some("C"));
/// assert_eq!(unit.chords.len(), 2);
/// ```
pub fn parse_block(chord_line: &str, strum_line: &str, bpm: u32) -> PlaybackSong {
    parse_block_with(&DownUpRestAlignment, chord_line, strum_line, bpm)
}

/// [`parse_block`] with an explicit alignment strategy.
pub fn parse_block_with(
    alignment: &dyn Alignment,
    chord_line: &str,
    strum_line: &str,
    bpm: u32,
) -> PlaybackSong {
    let aligned = alignment.realign(chord_line, strum_line);
    let tokens = parse_chord_line(&aligned.chord_line);
    let eff_bpm = effective_bpm(bpm);
    let time_at = |index: usize| eighths_to_ms(index as u64, eff_bpm);

    let strums: Vec<StrumEvent> = aligned
        .strum_line
        .chars()
        .enumerate()
        .filter_map(|(i, c)| {
            StrumDirection::from_char(c).map(|direction| StrumEvent {
                chord: current_chord_at_index(&tokens, i).map(str::to_string),
                direction,
                time_ms: time_at(i),
                index: i,
            })
        })
        .collect();

    let chords: Vec<ChordEvent> = tokens
        .iter()
        .map(|t| ChordEvent {
            label: t.chord.clone(),
            time_ms: time_at(t.start_index),
        })
        .collect();

    let duration_ms = match strums.iter().map(|s| s.index).max() {
        Some(last) => time_at(last + 1),
        None => {
            let last_chord = tokens.iter().map(|t| t.start_index).max().unwrap_or(0);
            eighths_to_ms(last_chord as u64 + CHORD_ONLY_TAIL_EIGHTHS, eff_bpm)
        }
    };

    PlaybackSong {
        title: String::new(),
        bpm,
        duration_ms,
        chords,
        strums,
        lyrics: Vec::new(),
        raw_chord_line: Some(chord_line.to_string()),
        raw_strum_line: Some(strum_line.to_string()),
    }
}

pub fn offset_strums(strums: &[StrumEvent], offset_ms: u64) -> Vec<StrumEvent> {
    strums.iter().map(|s| s.with_offset(offset_ms)).collect()
}

pub fn offset_chords(chords: &[ChordEvent], offset_ms: u64) -> Vec<ChordEvent> {
    chords.iter().map(|c| c.with_offset(offset_ms)).collect()
}

pub fn offset_lyrics(lyrics: &[LyricLine], offset_ms: u64) -> Vec<LyricLine> {
    lyrics.iter().map(|l| l.with_offset(offset_ms)).collect()
}

/// Assemble every chord/strum block in one section into a timeline.
///
/// For each block:
/// 1. the next chord-looking line is the chord line
/// 2. the next non-blank line is the strum line
/// 3. the non-blank lines after it, up to the next tab staff (`|-`) or the end
///    of the section, are its lyrics
/// 4. the block's pattern plays once per lyric line; a block without lyrics
///    plays once under the placeholder lyric `[<name>]`
///
/// Blocks follow each other without gaps; the section duration is the sum
/// of all repetitions.
pub fn assemble_section(name: &str, body: &str, bpm: u32) -> PlaybackSong {
    let lines = doc_lines(body);
    let mut song = PlaybackSong::empty(name, bpm);
    let mut offset_ms: u64 = 0;
    let mut i = 0;

    while i < lines.len() {
        let Some(chord_idx) = (i..lines.len()).find(|&n| {
            let line = lines[n];
            !line.trim().is_empty()
                && !line.contains('|')
                && !line.contains('-')
                && looks_like_chord_line(line)
        }) else {
            break;
        };

        let Some(strum_idx) = (chord_idx + 1..lines.len()).find(|&n| !lines[n].trim().is_empty())
        else {
            debug!(section = name, line = chord_idx, "chord line without strum line");
            break;
        };

        let lyric_start = (strum_idx + 1..lines.len())
            .find(|&n| !lines[n].trim().is_empty())
            .unwrap_or(lines.len());
        let lyric_end = (lyric_start..lines.len())
            .find(|&n| lines[n].contains(STAFF_MARKER))
            .unwrap_or(lines.len());

        let mut lyrics: Vec<String> = lines[lyric_start..lyric_end]
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        if lyrics.is_empty() {
            lyrics.push(format!("[{}]", name));
        }

        let base = parse_block(lines[chord_idx], lines[strum_idx], bpm);
        let base_duration = base.duration_ms;
        debug!(
            section = name,
            line = chord_idx,
            repetitions = lyrics.len(),
            base_duration_ms = base_duration,
            "assembled chord/strum block"
        );

        for (idx, text) in lyrics.iter().enumerate() {
            let rep_offset = offset_ms + base_duration * idx as u64;
            song.chords.extend(offset_chords(&base.chords, rep_offset));
            song.strums.extend(offset_strums(&base.strums, rep_offset));
            song.lyrics.push(LyricLine {
                text: text.clone(),
                start_ms: rep_offset,
                end_ms: rep_offset + base_duration,
            });
        }
        offset_ms += base_duration * lyrics.len() as u64;

        i = lyric_end;
    }

    song.duration_ms = offset_ms;
    song
}

/// Compose a full song from a sectioned tab document.
///
/// Each `[Section]` is assembled at its own tempo (looked up by exact name in
/// `bpm_by_section`, else `default_bpm`) and appended after the previous one.
/// The reported `bpm` is the first section's tempo.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use strumline::playback::compose_song;
///
/// let text = "[Verse]\nC\nD D U\nline one\n\n[Chorus]\nG\nD U\n";
/// let bpm = HashMap::from([("Chorus".to_string(), 120)]);
/// let song = compose_song("Demo", text, &bpm, 100);
///
/// assert_eq!(song.bpm, 100);
/// assert_eq!(song.lyrics.len(), 2);
/// assert_eq!(song.lyrics[1].text, "[Chorus]");
/// assert_eq!(song.lyrics[1].start_ms, song.lyrics[0].end_ms);
/// ```
pub fn compose_song(
    title: &str,
    full_text: &str,
    bpm_by_section: &HashMap<String, u32>,
    default_bpm: u32,
) -> PlaybackSong {
    let sections: Vec<PlaybackSong> = split_into_sections(full_text)
        .iter()
        .map(|block| {
            let bpm = bpm_by_section.get(&block.name).copied().unwrap_or(default_bpm);
            assemble_section(&block.name, &block.body, bpm)
        })
        .collect();

    let bpm = sections.first().map(|s| s.bpm).unwrap_or(default_bpm);
    let mut song = PlaybackSong::empty(title, bpm);
    let mut offset_ms: u64 = 0;

    for section in &sections {
        song.chords.extend(offset_chords(&section.chords, offset_ms));
        song.strums.extend(offset_strums(&section.strums, offset_ms));
        song.lyrics.extend(offset_lyrics(&section.lyrics, offset_ms));
        offset_ms += section.duration_ms;
    }
    song.duration_ms = offset_ms;

    debug!(
        title,
        sections = sections.len(),
        duration_ms = song.duration_ms,
        "composed song"
    );
    song
}
