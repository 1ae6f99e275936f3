//! Chord/strum column realignment
//!
//! Hand-written tabs rarely keep the chord line and the strum line on the same
//! eighth-note grid. An [`Alignment`] rewrites the pair before tokenizing so that
//! every column is exactly one eighth note. The strategy is pluggable:
//! [`DownUpRestAlignment`] is the heuristic tuned for common hand-written tabs,
//! [`RawAlignment`] trusts the input columns as written.

use tracing::trace;

/// A chord line and a strum line of equal length, one column per eighth note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedLines {
    pub chord_line: String,
    pub strum_line: String,
}

/// Strategy for putting a chord line and a strum line on a shared column grid.
pub trait Alignment {
    fn realign(&self, chord_line: &str, strum_line: &str) -> AlignedLines;
}

/// Pad both lines to the same length, then trim leading whitespace from each.
fn pad_and_trim(chord_line: &str, strum_line: &str) -> (Vec<char>, Vec<char>) {
    let width = chord_line.chars().count().max(strum_line.chars().count());
    let padded = |line: &str| -> Vec<char> {
        let mut chars: Vec<char> = line.chars().collect();
        chars.resize(width, ' ');
        let lead = chars.iter().take_while(|c| c.is_whitespace()).count();
        chars.split_off(lead)
    };
    (padded(chord_line), padded(strum_line))
}

/// Uses the columns as written, after the shared pad-and-trim pre-pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawAlignment;

impl Alignment for RawAlignment {
    fn realign(&self, chord_line: &str, strum_line: &str) -> AlignedLines {
        let (mut chord, mut strum) = pad_and_trim(chord_line, strum_line);
        let width = chord.len().max(strum.len());
        chord.resize(width, ' ');
        strum.resize(width, ' ');
        AlignedLines {
            chord_line: chord.into_iter().collect(),
            strum_line: strum.into_iter().collect(),
        }
    }
}

/// Heuristic realignment for hand-written tabs.
///
/// Walking both lines column by column (the shorter line reads as spaces):
/// - a chord-line space directly before a chord name is dropped, together with
///   its strum column, so the chord absorbs the gap;
/// - a strum-line space between `D` and `U` (as in `D UDU`) gets one extra
///   space in both lines, restoring the eighth-note rest the author implied.
///
/// The last column is always copied as is. The `D`/`U` trigger is
/// case-sensitive and only encodes the down/up grammar seen in typical
/// strumming patterns; unusual patterns may come out mistimed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownUpRestAlignment;

impl Alignment for DownUpRestAlignment {
    fn realign(&self, chord_line: &str, strum_line: &str) -> AlignedLines {
        let (chord, strum) = pad_and_trim(chord_line, strum_line);
        let width = chord.len().max(strum.len());
        let chord_at = |i: usize| chord.get(i).copied().unwrap_or(' ');
        let strum_at = |i: usize| strum.get(i).copied().unwrap_or(' ');

        let mut out_chord = String::with_capacity(width + width / 4);
        let mut out_strum = String::with_capacity(width + width / 4);

        for index in 0..width {
            let chord_char = chord_at(index);
            let strum_char = strum_at(index);

            if index + 1 < width {
                if chord_char == ' ' && chord_at(index + 1) != ' ' {
                    continue;
                }
                if index > 0
                    && strum_char == ' '
                    && strum_at(index - 1) == 'D'
                    && strum_at(index + 1) == 'U'
                {
                    trace!(column = index, "inserting eighth-note rest between D and U");
                    out_chord.push(' ');
                    out_strum.push(' ');
                }
            }

            out_chord.push(chord_char);
            out_strum.push(strum_char);
        }

        AlignedLines {
            chord_line: out_chord,
            strum_line: out_strum,
        }
    }
}
