//! # Error Types
//!
//! This module defines the error type for the strumline library.
//!
//! The tab parser itself never fails: malformed chord, strum or lyric lines
//! degrade into shorter timelines. Errors only come from the layers around it,
//! namely song configuration (YAML front matter or a config file) and JSON output.
//!
//! ## Error Types
//! - `MetadataError` - Invalid YAML in front matter or a config file
//! - `InvalidTempo` - A configured BPM of zero
//! - `Serialization` - Failure while writing the timeline as JSON
//!
//! ## Usage
//! ```rust
//! use strumline::{compose_document, TabError};
//!
//! let source = "---\nbpm: 0\n---\n[Verse]\nC\nD D U\n";
//! match compose_document(source) {
//!     Ok(song) => println!("{} ms", song.duration_ms),
//!     Err(TabError::InvalidTempo { section, bpm }) => {
//!         eprintln!("bad tempo {} for {:?}", bpm, section);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TabError {
    /// Invalid song metadata.
    ///
    /// Occurs when YAML front matter or a config file cannot be parsed.
    ///
    /// # Example
    /// ```
    /// # use strumline::TabError;
    /// let err = TabError::MetadataError("sections: invalid type".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: sections: invalid type");
    /// ```
    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    /// A tempo of zero beats per minute was configured.
    ///
    /// `section` is `None` for the song-wide default tempo.
    ///
    /// # Example
    /// ```
    /// # use strumline::TabError;
    /// let err = TabError::InvalidTempo { section: Some("Chorus".to_string()), bpm: 0 };
    /// assert_eq!(err.to_string(), "Invalid tempo 0 BPM for section 'Chorus'");
    ///
    /// let err = TabError::InvalidTempo { section: None, bpm: 0 };
    /// assert_eq!(err.to_string(), "Invalid tempo 0 BPM for song");
    /// ```
    #[error("Invalid tempo {bpm} BPM for {}", section_label(.section))]
    InvalidTempo { section: Option<String>, bpm: u32 },

    /// The timeline could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

fn section_label(section: &Option<String>) -> String {
    match section {
        Some(name) => format!("section '{}'", name),
        None => "song".to_string(),
    }
}
