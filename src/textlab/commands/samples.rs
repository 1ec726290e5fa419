//! Preset sample texts. Each one stresses a different part of the toolkit.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sample {
    Plain,
    Emoji,
    Accented,
    Social,
}

impl Sample {
    pub fn all() -> &'static [Sample] {
        &[Sample::Plain, Sample::Emoji, Sample::Accented, Sample::Social]
    }

    pub fn name(self) -> &'static str {
        match self {
            Sample::Plain => "plain",
            Sample::Emoji => "emoji",
            Sample::Accented => "accented",
            Sample::Social => "social",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Sample::Plain => "Plain ASCII prose",
            Sample::Emoji => "Skin-tone modifiers and ZWJ family sequences",
            Sample::Accented => "Precomposed accents next to combining marks",
            Sample::Social => "A URL, @mentions and #hashtags",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Sample::Plain => "The quick brown fox jumps over the lazy dog.\nPack my box with five dozen liquor jugs.",
            Sample::Emoji => "Thumbs up \u{1F44D}\u{1F3FD}, family \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}, flag \u{1F1EF}\u{1F1F5} and a heart \u{2764}\u{FE0F}!",
            Sample::Accented => "Caf\u{e9} na\u{ef}ve co\u{f6}perate r\u{e9}sum\u{e9} vs. Cafe\u{0301} nai\u{0308}ve",
            Sample::Social => "Loving the new release! Thanks @rustlang & @ferris_crab \u{2192} https://www.rust-lang.org #rust #opensource",
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sample {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sample::all()
            .iter()
            .copied()
            .find(|sample| sample.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Sample::all().iter().map(|s| s.name()).collect();
                format!("unknown sample '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::analyze::{code_point_count, grapheme_count, GraphemeMode};

    #[test]
    fn names_round_trip() {
        for sample in Sample::all() {
            assert_eq!(sample.name().parse::<Sample>(), Ok(*sample));
        }
        assert!("nope".parse::<Sample>().is_err());
    }

    #[test]
    fn emoji_sample_has_multi_scalar_clusters() {
        let text = Sample::Emoji.text();
        assert!(grapheme_count(text, GraphemeMode::Segmented) < code_point_count(text));
    }

    #[test]
    fn accented_sample_mixes_forms() {
        let text = Sample::Accented.text();
        assert!(text.contains('\u{0301}'));
        assert!(text.contains('\u{e9}'));
    }
}
