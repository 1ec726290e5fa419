//! # Text Analysis
//!
//! Counting text is ambiguous: "how long is this string" has at least four correct
//! answers depending on the unit. This module reports all of them side by side:
//!
//! - **Code points**: Unicode scalar values (`char`s).
//! - **Graphemes**: user-perceived characters (extended grapheme clusters).
//! - **UTF-8 bytes**: the encoded size on disk or on the wire.
//! - **UTF-16 code units**: the indexing unit of UTF-16 string runtimes.
//!
//! ## Grapheme Modes
//!
//! [`GraphemeMode::Segmented`] runs the Unicode text segmentation algorithm.
//! [`GraphemeMode::CodePoints`] is the degraded mode for hosts without a segmenter:
//! it returns the code-point count. That undercounts nothing but is cluster-unaware,
//! so a family emoji (several scalars joined by ZWJ) counts as many characters.
//! The degraded mode is kept on purpose so both answers can be compared.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("static regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphemeMode {
    #[default]
    Segmented,
    CodePoints,
}

impl GraphemeMode {
    pub fn count(self, text: &str) -> usize {
        match self {
            GraphemeMode::Segmented => text.graphemes(true).count(),
            GraphemeMode::CodePoints => code_point_count(text),
        }
    }
}

impl fmt::Display for GraphemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphemeMode::Segmented => write!(f, "segmented"),
            GraphemeMode::CodePoints => write!(f, "codepoints"),
        }
    }
}

impl FromStr for GraphemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "segmented" => Ok(GraphemeMode::Segmented),
            "codepoints" | "code-points" => Ok(GraphemeMode::CodePoints),
            other => Err(format!(
                "unknown grapheme mode '{}' (expected segmented or codepoints)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub code_points: usize,
    pub graphemes: usize,
    pub grapheme_mode: GraphemeMode,
    pub utf8_bytes: usize,
    pub utf16_units: usize,
    pub words: usize,
    pub lines: usize,
    pub display_width: usize,
}

pub fn code_point_count(text: &str) -> usize {
    text.chars().count()
}

pub fn grapheme_count(text: &str, mode: GraphemeMode) -> usize {
    mode.count(text)
}

pub fn utf8_byte_length(text: &str) -> usize {
    text.len()
}

/// Number of UTF-16 code units. Astral-plane scalars take two units, so this is
/// never smaller than [`code_point_count`].
pub fn code_unit_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Unicode White_Space plus U+FEFF, the byte order mark that browser runtimes
/// also count as space.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

pub fn word_count(text: &str) -> usize {
    text.split(is_space).filter(|word| !word.is_empty()).count()
}

/// Segments produced by splitting on `\r\n`, `\r` or `\n`. A trailing newline
/// leaves an empty final segment, and the empty string is one (empty) line.
pub fn line_count(text: &str) -> usize {
    LINE_BREAK.split(text).count()
}

pub fn display_width(text: &str) -> usize {
    text.width()
}

pub fn run(text: &str, mode: GraphemeMode) -> Analysis {
    Analysis {
        code_points: code_point_count(text),
        graphemes: grapheme_count(text, mode),
        grapheme_mode: mode,
        utf8_bytes: utf8_byte_length(text),
        utf16_units: code_unit_length(text),
        words: word_count(text),
        lines: line_count(text),
        display_width: display_width(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAMILY: &str = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";

    #[test]
    fn family_emoji_is_one_grapheme_when_segmented() {
        assert_eq!(grapheme_count(FAMILY, GraphemeMode::Segmented), 1);
    }

    #[test]
    fn family_emoji_falls_back_to_code_points() {
        let count = grapheme_count(FAMILY, GraphemeMode::CodePoints);
        assert_eq!(count, 7);
        assert_eq!(count, code_point_count(FAMILY));
    }

    #[test]
    fn combining_mark_joins_its_base() {
        let text = "e\u{0301}";
        assert_eq!(code_point_count(text), 2);
        assert_eq!(grapheme_count(text, GraphemeMode::Segmented), 1);
    }

    #[test]
    fn unit_counts_for_astral_scalars() {
        let text = "a\u{1F600}";
        assert_eq!(code_point_count(text), 2);
        assert_eq!(code_unit_length(text), 3);
        assert_eq!(utf8_byte_length(text), 5);
    }

    #[test]
    fn code_points_never_exceed_code_units() {
        for text in ["", "plain", "caf\u{e9}", FAMILY, "\u{1F44D}\u{1F3FD} ok"] {
            assert!(code_point_count(text) <= code_unit_length(text), "{text:?}");
        }
    }

    #[test]
    fn word_count_handles_blank_and_runs() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \t\n "), 0);
        assert_eq!(word_count("  one   two\tthree\n"), 3);
    }

    #[test]
    fn word_count_treats_bom_as_space() {
        assert_eq!(word_count("\u{FEFF}"), 0);
        assert_eq!(word_count("one\u{FEFF}two"), 2);
    }

    #[test]
    fn line_count_keeps_trailing_segment() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("one"), 1);
        assert_eq!(line_count("one\n"), 2);
        assert_eq!(line_count("a\r\nb\rc\nd"), 4);
    }

    #[test]
    fn display_width_counts_wide_chars() {
        assert_eq!(display_width("ab"), 2);
        assert_eq!(display_width("\u{4E2D}"), 2);
    }

    #[test]
    fn run_reports_mode_used() {
        let analysis = run("hi there", GraphemeMode::CodePoints);
        assert_eq!(analysis.grapheme_mode, GraphemeMode::CodePoints);
        assert_eq!(analysis.words, 2);
        assert_eq!(analysis.graphemes, 8);
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("Segmented".parse::<GraphemeMode>(), Ok(GraphemeMode::Segmented));
        assert_eq!("codepoints".parse::<GraphemeMode>(), Ok(GraphemeMode::CodePoints));
        assert!("bytes".parse::<GraphemeMode>().is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn code_point_count_never_exceeds_code_units(text in any::<String>()) {
                prop_assert!(code_point_count(&text) <= code_unit_length(&text));
            }

            #[test]
            fn segmented_graphemes_never_exceed_code_points(text in any::<String>()) {
                prop_assert!(
                    grapheme_count(&text, GraphemeMode::Segmented) <= code_point_count(&text)
                );
            }
        }
    }
}
