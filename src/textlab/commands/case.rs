//! Case mapping and whitespace transforms.
//!
//! All functions work per Unicode scalar value, never per byte, and use the full
//! Unicode case mapping tables shipped with the standard library. A single scalar
//! may map to several (`ß` uppercases to `SS`), so output length can differ from
//! input length.

use super::analyze::is_space;
use crate::error::{Result, TextlabError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// A letter followed by any non-whitespace run.
static TITLE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}\S*").expect("static regex"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x{FEFF}]+").expect("static regex"));

pub fn upper_case(text: &str) -> String {
    text.to_uppercase()
}

pub fn lower_case(text: &str) -> String {
    text.to_lowercase()
}

pub fn title_case(text: &str) -> String {
    TITLE_WORD
        .replace_all(text, |caps: &regex::Captures| {
            let word = &caps[0];
            let mut chars = word.chars();
            let mut out = String::with_capacity(word.len());
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
            }
            for c in chars {
                out.extend(c.to_lowercase());
            }
            out
        })
        .into_owned()
}

/// Caseless scalars go through the lowercase branch, which leaves them unchanged.
pub fn swap_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.to_uppercase().eq(std::iter::once(c)) {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
    }
    out
}

pub fn trim_collapse(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim_matches(is_space), " ").into_owned()
}

/// Reverses by grapheme cluster so emoji sequences and combining marks stay intact.
pub fn reverse_graphemes(text: &str) -> String {
    text.graphemes(true).rev().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NormalizationForm {
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NormalizationForm::Nfc => "NFC",
            NormalizationForm::Nfd => "NFD",
            NormalizationForm::Nfkc => "NFKC",
            NormalizationForm::Nfkd => "NFKD",
        };
        f.write_str(name)
    }
}

impl FromStr for NormalizationForm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NFC" => Ok(NormalizationForm::Nfc),
            "NFD" => Ok(NormalizationForm::Nfd),
            "NFKC" => Ok(NormalizationForm::Nfkc),
            "NFKD" => Ok(NormalizationForm::Nfkd),
            other => Err(format!("unknown normalization form '{}'", other)),
        }
    }
}

pub fn normalize(text: &str, form: NormalizationForm) -> String {
    match form {
        NormalizationForm::Nfc => text.nfc().collect(),
        NormalizationForm::Nfd => text.nfd().collect(),
        NormalizationForm::Nfkc => text.nfkc().collect(),
        NormalizationForm::Nfkd => text.nfkd().collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadSide {
    Start,
    End,
}

/// Largest padded length `pad` will build.
pub const MAX_PAD_LEN: usize = 1_000_000;

/// Pads `text` to `target_len` scalar values by repeating `fill` (truncated to fit).
/// Text already at or past the target, or an empty fill, comes back unchanged.
/// Targets above [`MAX_PAD_LEN`] are rejected before anything is allocated.
pub fn pad(text: &str, target_len: usize, fill: &str, side: PadSide) -> Result<String> {
    let len = text.chars().count();
    if len >= target_len || fill.is_empty() {
        return Ok(text.to_string());
    }
    if target_len > MAX_PAD_LEN {
        return Err(TextlabError::Api(format!(
            "pad length {} exceeds the maximum of {}",
            target_len, MAX_PAD_LEN
        )));
    }
    let filler: String = fill.chars().cycle().take(target_len - len).collect();
    Ok(match side {
        PadSide::Start => format!("{}{}", filler, text),
        PadSide::End => format!("{}{}", text, filler),
    })
}
