pub mod api;
pub mod error;
pub mod metadata;
pub mod playback;
pub mod samples;
pub mod sanitize;
pub mod sections;

pub use api::{compose_document, compose_document_with, parse_ascii_block, to_json, UNTITLED};
pub use error::*;
pub use metadata::SongConfig;
pub use playback::{
    assemble_section, compose_song, parse_block, ChordEvent, LyricLine, PlaybackSong,
    StrumDirection, StrumEvent, DEFAULT_BPM,
};
pub use sanitize::{normalize_doc_text, sanitize, SanitizeMode};
pub use sections::{split_into_sections, SectionBlock};
