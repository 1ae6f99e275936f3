//! # Public API
//!
//! Document-level entry points for the strumline library.
//!
//! ## Functions
//!
//! - [`compose_document()`] - Front matter + sanitizing + composition (recommended)
//! - [`compose_document_with()`] - Same, with caller overrides over the front matter
//! - [`parse_ascii_block()`] - A single titled chord/strum pair
//! - [`to_json()`] - Serialize a timeline for a web front end
//!
//! ## Typical Usage
//!
//! ```rust
//! use strumline::compose_document;
//!
//! let source = r#"---
//! title: Demo
//! bpm: 120
//! ---
//! [Verse]
//!    C       G
//!    D D UDU D D UDU
//!
//! First line
//! Second line
//! "#;
//!
//! let song = compose_document(source)?;
//! assert_eq!(song.title, "Demo");
//! assert_eq!(song.lyrics.len(), 2);
//! # Ok::<(), strumline::TabError>(())
//! ```

use tracing::debug;

use crate::metadata::{split_front_matter, SongConfig};
use crate::playback::{compose_song, parse_block, PlaybackSong};
use crate::TabError;

/// Title used when neither the front matter nor the caller provides one
pub const UNTITLED: &str = "Untitled";

/// Compose a full tab document into a playback timeline.
///
/// # Pipeline
/// 1. Split off and parse optional YAML front matter
/// 2. Sanitize the body (monospace cleanup unless configured otherwise)
/// 3. Split into `[Section]` blocks and assemble each at its tempo
/// 4. Concatenate the sections
///
/// # Errors
/// Only the front matter can fail, see [`SongConfig::from_yaml`]. The tab body
/// itself always yields a (possibly empty) timeline.
pub fn compose_document(source: &str) -> Result<PlaybackSong, TabError> {
    compose_document_with(source, &SongConfig::default())
}

/// Compose a tab document with `overrides` layered over its front matter.
///
/// # Example
/// ```rust
/// use strumline::{compose_document_with, SongConfig};
///
/// let source = "---\nbpm: 90\n---\n[Chorus]\nG\nD\n";
/// let overrides = SongConfig { bpm: Some(120), ..SongConfig::default() };
///
/// let song = compose_document_with(source, &overrides)?;
/// assert_eq!(song.bpm, 120);
/// # Ok::<(), strumline::TabError>(())
/// ```
pub fn compose_document_with(
    source: &str,
    overrides: &SongConfig,
) -> Result<PlaybackSong, TabError> {
    let (front_matter, body) = split_front_matter(source);
    let config = match front_matter {
        Some(yaml) => SongConfig::from_yaml(yaml)?,
        None => SongConfig::default(),
    }
    .merge(overrides);
    config.validate()?;

    let mode = config.sanitize_mode();
    debug!(?mode, has_front_matter = front_matter.is_some(), "composing document");
    let text = mode.apply(body);

    let title = config.title.as_deref().unwrap_or(UNTITLED);
    Ok(compose_song(
        title,
        &text,
        &config.section_bpm,
        config.default_bpm(),
    ))
}

/// Parse one chord line + strum line pair as a titled timeline.
///
/// The result has no lyrics; use [`compose_document()`] for sectioned text.
pub fn parse_ascii_block(title: &str, chord_line: &str, strum_line: &str, bpm: u32) -> PlaybackSong {
    PlaybackSong {
        title: title.to_string(),
        ..parse_block(chord_line, strum_line, bpm)
    }
}

/// Serialize a timeline as JSON (camelCase fields).
pub fn to_json(song: &PlaybackSong, pretty: bool) -> Result<String, TabError> {
    let result = if pretty {
        serde_json::to_string_pretty(song)
    } else {
        serde_json::to_string(song)
    };
    result.map_err(|e| TabError::Serialization(e.to_string()))
}
