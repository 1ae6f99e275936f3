//! Text normalization for tab documents.
//!
//! Exported documents (plain-text exports, HTML-derived text) carry carriage
//! returns, non-breaking spaces, typographic dashes and tabs that break column
//! alignment. Everything here maps one input character to one output character
//! so chord and strum columns stay where the author put them.

use std::str::FromStr;

use serde::Deserialize;

/// How a document body is normalized before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanitizeMode {
    /// Full monospace cleanup via [`sanitize`]
    #[default]
    Monospace,
    /// Line endings, tabs and non-breaking spaces only, via [`normalize_doc_text`]
    Light,
    /// Leave the text untouched
    #[serde(alias = "none")]
    Off,
}

impl FromStr for SanitizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monospace" => Ok(SanitizeMode::Monospace),
            "light" => Ok(SanitizeMode::Light),
            "off" | "none" => Ok(SanitizeMode::Off),
            _ => Err(format!("unknown sanitize mode '{}'", s)),
        }
    }
}

impl SanitizeMode {
    pub fn apply(self, raw: &str) -> String {
        match self {
            SanitizeMode::Monospace => sanitize(raw),
            SanitizeMode::Light => normalize_doc_text(raw),
            SanitizeMode::Off => raw.to_string(),
        }
    }
}

/// Normalize raw document text into a monospace-safe ASCII string.
///
/// - `\r` becomes `\n` (so `\r\n` yields an extra blank line, which the
///   section and block scanners ignore)
/// - U+00A0, U+2007 and U+202F become a space
/// - `\t` becomes a single space
/// - en/em dashes, Unicode hyphens and the minus sign become `-`
/// - anything else outside printable ASCII becomes a space
///
/// # Examples
/// ```
/// use strumline::sanitize;
///
/// assert_eq!(sanitize("C\u{00A0}\u{2013}\tAm\r"), "C - Am\n");
/// assert_eq!(sanitize("café"), "caf ");
/// ```
pub fn sanitize(raw: &str) -> String {
    raw.chars().map(sanitize_char).collect()
}

fn sanitize_char(ch: char) -> char {
    match ch {
        '\r' | '\n' => '\n',
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\t' => ' ',
        '\u{2010}' | '\u{2011}' | '\u{2013}' | '\u{2014}' | '\u{2212}' | '-' => '-',
        ' '..='~' => ch,
        _ => ' ',
    }
}

/// Lighter normalization: line endings, tabs and non-breaking spaces only.
///
/// Unlike [`sanitize`], `\r\n` collapses to a single `\n` and non-ASCII text
/// (accented lyrics, for instance) is preserved.
pub fn normalize_doc_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', " ")
        .replace('\u{00A0}', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_special_spaces_and_tabs() {
        assert_eq!(sanitize("a\u{00A0}b\u{2007}c\u{202F}d\te"), "a b c d e");
    }

    #[test]
    fn test_sanitize_dashes() {
        assert_eq!(sanitize("e|\u{2013}0\u{2014}1\u{2212}2\u{2010}|"), "e|-0-1-2-|");
    }

    #[test]
    fn test_sanitize_line_endings_keep_length() {
        let raw = "[Verse]\r\nC\rD";
        let clean = sanitize(raw);
        assert_eq!(clean, "[Verse]\n\nC\nD");
        assert_eq!(clean.chars().count(), raw.chars().count());
    }

    #[test]
    fn test_sanitize_non_ascii_and_controls() {
        assert_eq!(sanitize("Hé\u{0007}llo ♪"), "H  llo  ");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let raw = "  C\u{00A0}\u{00A0}Am\r\n\tD D U – ok ★";
        let once = sanitize(raw);
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_normalize_doc_text() {
        assert_eq!(normalize_doc_text("a\r\nb\rc\td\u{00A0}é"), "a\nb\nc d é");
    }

    #[test]
    fn test_sanitize_mode_parsing() {
        assert_eq!("Light".parse(), Ok(SanitizeMode::Light));
        assert_eq!("none".parse(), Ok(SanitizeMode::Off));
        assert!("bogus".parse::<SanitizeMode>().is_err());
        assert_eq!(SanitizeMode::Off.apply("\t"), "\t");
    }

    #[test]
    fn test_sanitize_mode_yaml_matches_cli_names() {
        for name in ["monospace", "light", "off", "none"] {
            let from_yaml: SanitizeMode = serde_yaml::from_str(name).unwrap();
            assert_eq!(Ok(from_yaml), name.parse());
        }
    }
}
