//! Chord line tokenizing and detection
//!
//! A chord line names chords at the columns where they start:
//!
//! ```text
//! C       Am      G       C
//! ^0      ^8      ^16     ^24
//! ```
//!
//! Columns are counted in characters, not bytes.

use lazy_static::lazy_static;
use regex::Regex;

use super::types::ChordToken;

lazy_static! {
    static ref CHORD_SYMBOL: Regex =
        Regex::new(r"^[A-G][#b]?(m|maj7|sus2|sus4|add9|dim|aug)?\d*$").expect("valid chord regex");
}

/// Split a chord line into tokens at whitespace runs, recording start columns.
///
/// Every non-whitespace run counts, chord-shaped or not; the result is sorted
/// by column.
///
/// # Examples
/// ```
/// use strumline::playback::parse_chord_line;
///
/// let tokens = parse_chord_line("C   Am7  G");
/// let cols: Vec<_> = tokens.iter().map(|t| (t.chord.as_str(), t.start_index)).collect();
/// assert_eq!(cols, vec![("C", 0), ("Am7", 4), ("G", 9)]);
/// ```
pub fn parse_chord_line(chord_line: &str) -> Vec<ChordToken> {
    let mut tokens = Vec::new();
    let mut current: Option<ChordToken> = None;

    for (i, c) in chord_line.chars().enumerate() {
        if c.is_whitespace() {
            if let Some(token) = current.take() {
                tokens.push(token);
            }
        } else {
            current
                .get_or_insert_with(|| ChordToken { chord: String::new(), start_index: i })
                .chord
                .push(c);
        }
    }
    if let Some(token) = current {
        tokens.push(token);
    }

    tokens.sort_by_key(|t| t.start_index);
    tokens
}

/// The chord active at `index`: the last token starting at or before it.
pub fn current_chord_at_index(tokens: &[ChordToken], index: usize) -> Option<&str> {
    tokens
        .iter()
        .take_while(|t| t.start_index <= index)
        .last()
        .map(|t| t.chord.as_str())
}

/// Whether a single token looks like a chord name (`C`, `F#m`, `Dsus4`, `Bb7`, ...).
pub fn is_chord_symbol(token: &str) -> bool {
    CHORD_SYMBOL.is_match(token)
}

/// Heuristic chord-line detection.
///
/// A line qualifies when it is non-blank, carries no tab-staff characters
/// (`|` or `-`), and at least half of its tokens (rounded down) are chord
/// names. Rounding down means a single-word line always qualifies.
pub fn looks_like_chord_line(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.contains('|') || trimmed.contains('-') {
        return false;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let chordish = tokens.iter().filter(|t| is_chord_symbol(t)).count();
    chordish >= tokens.len() / 2
}
