//! # Section Splitting
//!
//! Groups the lines of a tab document under bracketed headers:
//!
//! ```text
//! [Verse - Palm Muted]     <- header, starts block "Verse - Palm Muted"
//!    C       Am
//!    D D UDU D D UDU
//! Lyric line
//!
//! [Chorus]                 <- flushes the verse, starts "Chorus"
//! ```
//!
//! Lines before the first header are dropped. Repeated headers stay separate
//! blocks so each occurrence is timed on its own.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

lazy_static! {
    static ref HEADER: Regex = Regex::new(r"^\[(.+)\]$").expect("valid header regex");
}

/// One named region of a tab document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBlock {
    pub name: String,
    pub body: String,
}

/// Split document text into lines at `\r\n`, `\r` or `\n`.
pub(crate) fn doc_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            '\r' => {
                lines.push(&text[start..i]);
                start = i + 1;
                if let Some(&(_, '\n')) = chars.peek() {
                    chars.next();
                    start += 1;
                }
            }
            _ => {}
        }
    }
    lines.push(&text[start..]);
    lines
}

/// Name carried by a header line, if the trimmed line is entirely `[name]`.
pub fn section_header(line: &str) -> Option<&str> {
    HEADER
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Split text into named section blocks, in document order.
///
/// # Examples
/// ```
/// use strumline::split_into_sections;
///
/// let text = "intro text\n[Chorus]\nC\n[Chorus]\nG\n";
/// let blocks = split_into_sections(text);
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].name, "Chorus");
/// assert_eq!(blocks[1].body, "G");
/// ```
pub fn split_into_sections(text: &str) -> Vec<SectionBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in doc_lines(text) {
        if let Some(name) = section_header(line) {
            if let Some((prev, lines)) = current.take() {
                blocks.push(flush_block(prev, &lines));
            }
            current = Some((name.to_string(), Vec::new()));
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(line);
        }
    }
    if let Some((prev, lines)) = current.take() {
        blocks.push(flush_block(prev, &lines));
    }

    debug!(sections = blocks.len(), "split document into sections");
    blocks
}

fn flush_block(name: String, lines: &[&str]) -> SectionBlock {
    let body = lines
        .join("\n")
        .trim_matches(|c: char| c == '\n' || c == ' ')
        .to_string();
    SectionBlock { name, body }
}
