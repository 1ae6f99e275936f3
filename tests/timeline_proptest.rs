//! Property-based tests for the tab timeline.
//! Verifies invariants hold for arbitrary chord/strum/lyric input, not just fixed examples.

use std::collections::HashMap;

use proptest::prelude::*;
use strumline::{assemble_section, compose_song, parse_block, sanitize, split_into_sections};

fn chord_name() -> impl Strategy<Value = String> {
    "[A-G][#b]?(m|maj7|sus2|sus4|dim)?[79]?"
}

/// A chord line with chords separated by 1..8 spaces.
fn chord_line() -> impl Strategy<Value = String> {
    prop::collection::vec((chord_name(), 1usize..8), 1..6).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(chord, gap)| format!("{}{}", chord, " ".repeat(gap)))
            .collect::<String>()
            .trim_end()
            .to_string()
    })
}

fn strum_line() -> impl Strategy<Value = String> {
    "[DUdu ]{1,40}"
}

fn lyric_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z ]{0,20}[a-z]", 0..6)
}

proptest! {
    /// One column is at least 75 ms below 400 BPM, so strum times strictly increase.
    #[test]
    fn strum_times_strictly_increase(chords in chord_line(), strums in strum_line(), bpm in 1u32..400) {
        let unit = parse_block(&chords, &strums, bpm);
        for pair in unit.strums.windows(2) {
            prop_assert!(pair[0].index < pair[1].index);
            prop_assert!(pair[0].time_ms < pair[1].time_ms);
        }
        if let Some(last) = unit.strums.last() {
            prop_assert!(last.time_ms < unit.duration_ms);
        }
    }

    /// Every time is its column in eighth notes, truncated once to whole milliseconds.
    #[test]
    fn times_follow_eighth_note_grid(chords in chord_line(), strums in strum_line(), bpm in 1u32..400) {
        let unit = parse_block(&chords, &strums, bpm);
        let bpm = u64::from(bpm);
        for strum in &unit.strums {
            prop_assert_eq!(strum.time_ms, strum.index as u64 * 30_000 / bpm);
        }
        if let Some(last) = unit.strums.last() {
            prop_assert_eq!(unit.duration_ms, (last.index as u64 + 1) * 30_000 / bpm);
        }
    }

    /// Chord events keep column order after realignment.
    #[test]
    fn chord_events_are_ordered(chords in chord_line(), strums in strum_line(), bpm in 1u32..400) {
        let unit = parse_block(&chords, &strums, bpm);
        for pair in unit.chords.windows(2) {
            prop_assert!(pair[0].time_ms <= pair[1].time_ms);
        }
    }

    /// Sanitizing twice is the same as sanitizing once, and keeps the char count.
    #[test]
    fn sanitize_is_idempotent(raw in any::<String>()) {
        let once = sanitize(&raw);
        prop_assert_eq!(sanitize(&once), once.clone());
        prop_assert_eq!(once.chars().count(), raw.chars().count());
        prop_assert!(once.chars().all(|c| c == '\n' || (' '..='~').contains(&c)));
    }

    /// One lyric line per collected lyric, or a single placeholder.
    #[test]
    fn lyric_count_matches_block(
        chords in chord_line(),
        strums in "[DU][DU ]{0,30}",
        lyrics in lyric_lines(),
        bpm in 40u32..200,
    ) {
        let body = format!("{}\n{}\n\n{}", chords, strums, lyrics.join("\n"));
        let section = assemble_section("Verse", &body, bpm);

        let expected = lyrics.len().max(1);
        prop_assert_eq!(section.lyrics.len(), expected);
        if lyrics.is_empty() {
            prop_assert_eq!(section.lyrics[0].text.as_str(), "[Verse]");
        }
        for pair in section.lyrics.windows(2) {
            prop_assert_eq!(pair[0].end_ms, pair[1].start_ms);
        }
        prop_assert_eq!(section.lyrics.last().map(|l| l.end_ms), Some(section.duration_ms));
    }

    /// A composed song lasts exactly as long as its sections back to back.
    #[test]
    fn composed_duration_is_sum(
        sections in prop::collection::vec(
            (prop::sample::select(vec!["Verse", "Chorus", "Bridge"]), chord_line(), strum_line(), lyric_lines()),
            0..5,
        ),
        chorus_bpm in 40u32..200,
        default_bpm in 40u32..200,
    ) {
        let text: String = sections
            .iter()
            .map(|(name, chords, strums, lyrics)| {
                format!("[{}]\n{}\n{}\n{}\n", name, chords, strums, lyrics.join("\n"))
            })
            .collect();
        let tempos = HashMap::from([("Chorus".to_string(), chorus_bpm)]);
        let song = compose_song("Prop", &text, &tempos, default_bpm);

        let total: u64 = split_into_sections(&text)
            .iter()
            .map(|b| {
                let bpm = tempos.get(&b.name).copied().unwrap_or(default_bpm);
                assemble_section(&b.name, &b.body, bpm).duration_ms
            })
            .sum();
        prop_assert_eq!(song.duration_ms, total);
    }
}
