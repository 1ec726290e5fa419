//! # The Three Slicing Conventions
//!
//! String runtimes in the wild ship three subtly different extraction calls, and
//! the differences are a classic source of off-by-one bugs. All three are
//! reproduced here with identical edge-case behavior:
//!
//! | call                      | negative index        | swapped bounds | second arg |
//! |---------------------------|-----------------------|----------------|------------|
//! | `slice(start, end)`       | counts from the end   | empty result   | end index  |
//! | `substring(start, end)`   | treated as 0          | swapped        | end index  |
//! | `substr(start, length)`   | start counts from end | n/a            | length     |
//!
//! Indices count Unicode scalar values, so no call can split a character.
//! Arguments are `f64` because the conventions include conversion rules for
//! fractional and NaN inputs: NaN becomes 0, fractions truncate toward zero and
//! infinities clamp to the bounds.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SliceMode {
    Slice,
    Substring,
    Substr,
}

impl fmt::Display for SliceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceMode::Slice => write!(f, "slice"),
            SliceMode::Substring => write!(f, "substring"),
            SliceMode::Substr => write!(f, "substr"),
        }
    }
}

impl FromStr for SliceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slice" => Ok(SliceMode::Slice),
            "substring" => Ok(SliceMode::Substring),
            "substr" => Ok(SliceMode::Substr),
            other => Err(format!("unknown slice mode '{}'", other)),
        }
    }
}

/// Converts a numeric argument to an integer index.
fn to_integer(value: f64) -> i64 {
    if value.is_nan() {
        0
    } else {
        // `as` saturates at the i64 bounds, which is what infinities need.
        value.trunc() as i64
    }
}

/// Resolves a possibly negative index against `len`, clamping to `0..=len`.
fn relative(index: f64, len: usize) -> usize {
    let len = len as i64;
    let idx = to_integer(index);
    let resolved = if idx < 0 { (len + idx).max(0) } else { idx.min(len) };
    resolved as usize
}

/// Clamps to `0..=len`, treating negatives as 0.
fn clamped(index: f64, len: usize) -> usize {
    to_integer(index).clamp(0, len as i64) as usize
}

fn take_chars(text: &str, from: usize, to: usize) -> String {
    if from >= to {
        return String::new();
    }
    text.chars().skip(from).take(to - from).collect()
}

pub fn slice(text: &str, start: f64, end: Option<f64>) -> String {
    let len = text.chars().count();
    let from = relative(start, len);
    let to = end.map_or(len, |e| relative(e, len));
    take_chars(text, from, to)
}

pub fn substring(text: &str, start: f64, end: Option<f64>) -> String {
    let len = text.chars().count();
    let a = clamped(start, len);
    let b = end.map_or(len, |e| clamped(e, len));
    let (from, to) = if a > b { (b, a) } else { (a, b) };
    take_chars(text, from, to)
}

pub fn substr(text: &str, start: f64, length: Option<f64>) -> String {
    let len = text.chars().count();
    let from = relative(start, len);
    let available = (len - from) as i64;
    let count = length.map_or(available, |l| to_integer(l).clamp(0, available));
    take_chars(text, from, from + count as usize)
}

/// Runs one of the three conventions where the second bound is always an *end
/// index*, converting it into a length for [`substr`].
pub fn by_end_index(text: &str, mode: SliceMode, start: f64, end: Option<f64>) -> String {
    match mode {
        SliceMode::Slice => slice(text, start, end),
        SliceMode::Substring => substring(text, start, end),
        SliceMode::Substr => substr(text, start, end.map(|e| e - start)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_counts_negatives_from_end() {
        assert_eq!(slice("hello", -3.0, None), "llo");
        assert_eq!(slice("hello", 1.0, Some(-1.0)), "ell");
        assert_eq!(slice("hello", -100.0, Some(2.0)), "he");
    }

    #[test]
    fn slice_with_crossed_bounds_is_empty() {
        assert_eq!(slice("hello", 3.0, Some(1.0)), "");
        assert_eq!(slice("hello", 10.0, None), "");
    }

    #[test]
    fn substring_treats_negative_and_nan_as_zero() {
        assert_eq!(substring("hello", -3.0, Some(2.0)), "he");
        assert_eq!(substring("hello", f64::NAN, Some(3.0)), "hel");
        assert_eq!(substring("hello", 2.0, Some(f64::NAN)), "he");
    }

    #[test]
    fn substring_swaps_crossed_bounds() {
        assert_eq!(substring("hello", 4.0, Some(1.0)), "ell");
        assert_eq!(substring("hello", 2.0, Some(100.0)), "llo");
    }

    #[test]
    fn substr_takes_a_length() {
        assert_eq!(substr("hello", -3.0, Some(2.0)), "ll");
        assert_eq!(substr("hello", 1.0, Some(3.0)), "ell");
        assert_eq!(substr("hello", 1.0, None), "ello");
        assert_eq!(substr("hello", 1.0, Some(-2.0)), "");
        assert_eq!(substr("hello", -10.0, Some(2.0)), "he");
    }

    #[test]
    fn fractional_and_infinite_indices() {
        assert_eq!(slice("hello", 1.9, Some(3.2)), "el");
        assert_eq!(slice("hello", f64::NEG_INFINITY, Some(f64::INFINITY)), "hello");
        assert_eq!(substr("hello", 0.0, Some(f64::INFINITY)), "hello");
    }

    #[test]
    fn never_splits_characters() {
        let text = "a\u{1F600}b";
        assert_eq!(slice(text, 1.0, Some(2.0)), "\u{1F600}");
        assert_eq!(substr(text, -2.0, Some(1.0)), "\u{1F600}");
    }

    #[test]
    fn end_index_is_converted_for_substr() {
        assert_eq!(by_end_index("hello", SliceMode::Substr, 1.0, Some(4.0)), "ell");
        assert_eq!(by_end_index("hello", SliceMode::Slice, 1.0, Some(4.0)), "ell");
        assert_eq!(by_end_index("hello", SliceMode::Substring, 4.0, Some(1.0)), "ell");
    }
}
