//! # Song Metadata
//!
//! Optional YAML front matter at the top of a tab document, or a standalone
//! config file with the same schema:
//!
//! ```yaml
//! ---
//! title: Harbor Lights
//! bpm: 96
//! sections:
//!   Chorus: 110
//!   Verse - Palm Muted: 104
//! sanitize: light
//! ---
//! ```
//!
//! - `bpm` is the default tempo for sections not listed under `sections`
//! - `sanitize` is one of `monospace` (default), `light`, `off`
//!
//! Front matter sits before the first `[Section]` header, so the section
//! splitter would drop it anyway; it is split off before sanitizing so YAML
//! indentation survives.

use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

use crate::error::TabError;
use crate::playback::DEFAULT_BPM;
use crate::sanitize::SanitizeMode;

const FRONT_MATTER_FENCE: &str = "---";

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawSongConfig {
    pub title: Option<String>,
    pub bpm: Option<u32>,
    #[serde(default)]
    pub sections: HashMap<String, u32>,
    pub sanitize: Option<SanitizeMode>,
}

/// Validated song configuration; `None` fields fall back to defaults or to
/// whatever configuration it is merged over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongConfig {
    pub title: Option<String>,
    pub bpm: Option<u32>,
    pub section_bpm: HashMap<String, u32>,
    pub sanitize: Option<SanitizeMode>,
}

impl SongConfig {
    /// Parse and validate a YAML configuration.
    ///
    /// # Errors
    /// - [`TabError::MetadataError`] for malformed YAML or unknown keys
    /// - [`TabError::InvalidTempo`] for a tempo of 0
    pub fn from_yaml(content: &str) -> Result<Self, TabError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawSongConfig =
            serde_yaml::from_str(content).map_err(|e| TabError::MetadataError(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Layer `other` over `self`: its set fields win and section tempos merge.
    pub fn merge(mut self, other: &SongConfig) -> Self {
        if other.title.is_some() {
            self.title = other.title.clone();
        }
        if other.bpm.is_some() {
            self.bpm = other.bpm;
        }
        if other.sanitize.is_some() {
            self.sanitize = other.sanitize;
        }
        self.section_bpm
            .extend(other.section_bpm.iter().map(|(k, v)| (k.clone(), *v)));
        self
    }

    pub fn default_bpm(&self) -> u32 {
        self.bpm.unwrap_or(DEFAULT_BPM)
    }

    pub fn sanitize_mode(&self) -> SanitizeMode {
        self.sanitize.unwrap_or_default()
    }

    /// Reject zero tempos.
    pub fn validate(&self) -> Result<(), TabError> {
        if self.bpm == Some(0) {
            return Err(TabError::InvalidTempo { section: None, bpm: 0 });
        }
        let mut zero: Vec<&String> = self
            .section_bpm
            .iter()
            .filter(|(_, bpm)| **bpm == 0)
            .map(|(name, _)| name)
            .collect();
        zero.sort();
        match zero.first() {
            Some(name) => Err(TabError::InvalidTempo {
                section: Some((*name).clone()),
                bpm: 0,
            }),
            None => Ok(()),
        }
    }
}

impl TryFrom<RawSongConfig> for SongConfig {
    type Error = TabError;

    fn try_from(raw: RawSongConfig) -> Result<Self, Self::Error> {
        let config = SongConfig {
            title: raw.title,
            bpm: raw.bpm,
            section_bpm: raw.sections,
            sanitize: raw.sanitize,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Split a document into its YAML front matter (if any) and the remaining body.
///
/// The opening `---` must be the first non-blank line and a closing `---`
/// line must follow; otherwise the whole text is the body.
///
/// # Examples
/// ```
/// use strumline::metadata::split_front_matter;
///
/// let (yaml, body) = split_front_matter("---\nbpm: 90\n---\n[Verse]\nC\n");
/// assert_eq!(yaml, Some("bpm: 90"));
/// assert_eq!(body, "[Verse]\nC\n");
///
/// let (yaml, body) = split_front_matter("[Verse]\nC\n");
/// assert_eq!(yaml, None);
/// assert_eq!(body, "[Verse]\nC\n");
/// ```
pub fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let start = text.len() - text.trim_start().len();
    let rest = &text[start..];

    let Some(after_open) = strip_fence_line(rest) else {
        return (None, text);
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end() == FRONT_MATTER_FENCE {
            let yaml = after_open[..offset].trim_end_matches(|c: char| c == '\n' || c == '\r');
            let body = &after_open[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    warn!("front matter opened with '---' but never closed; treating it as body text");
    (None, text)
}

/// If `text` starts with a fence line, the text after it.
fn strip_fence_line(text: &str) -> Option<&str> {
    let line_end = text.find('\n').map(|i| i + 1).unwrap_or(text.len());
    let first = &text[..line_end];
    if first.trim_end() == FRONT_MATTER_FENCE {
        Some(&text[line_end..])
    } else {
        None
    }
}
