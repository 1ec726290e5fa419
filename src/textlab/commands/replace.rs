//! # Find & Replace
//!
//! Patterns and flags follow the single-letter flag convention users already know
//! from browser regex literals (`g`, `i`, `m`, `s`, `u`, `y`). Replacement strings
//! use the same convention (`$1`, `$&`, `$<name>`, `$$`) and are translated into
//! the `regex` crate's expansion syntax before use.
//!
//! Two entry points:
//!
//! - [`apply_replace`] computes a new text and fails with
//!   [`TextlabError::Pattern`] on a bad pattern. Callers must leave their input
//!   untouched in that case.
//! - [`highlight`] is display-only and total: it recomputes on every keystroke,
//!   so an invalid pattern degrades to "no matches" instead of failing.

use super::linkify::escape_html;
use crate::error::{Result, TextlabError};
use regex::{Regex, RegexBuilder};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexFlags {
    pub global: bool,
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
}

impl RegexFlags {
    pub fn parse(flags: &str) -> Result<Self> {
        let mut parsed = RegexFlags::default();
        let mut seen = String::new();
        for flag in flags.chars() {
            if seen.contains(flag) {
                return Err(TextlabError::Pattern(format!("duplicate flag '{}'", flag)));
            }
            seen.push(flag);
            match flag {
                'g' => parsed.global = true,
                'i' => parsed.case_insensitive = true,
                'm' => parsed.multi_line = true,
                's' => parsed.dot_matches_new_line = true,
                // Matching is always Unicode-aware, and sticky matching has no
                // equivalent here; both are accepted for compatibility.
                'u' | 'y' => {}
                other => {
                    return Err(TextlabError::Pattern(format!("invalid flag '{}'", other)));
                }
            }
        }
        Ok(parsed)
    }
}

pub fn build_regex(find: &str, use_regex: bool, flags: RegexFlags) -> Result<Regex> {
    let pattern = if use_regex {
        find.to_string()
    } else {
        regex::escape(find)
    };
    RegexBuilder::new(&pattern)
        .case_insensitive(flags.case_insensitive)
        .multi_line(flags.multi_line)
        .dot_matches_new_line(flags.dot_matches_new_line)
        .build()
        .map_err(|e| TextlabError::Pattern(e.to_string()))
}

/// Translates a `$1` / `$&` / `$<name>` / `$$` replacement into `regex` syntax.
///
/// `$nn` prefers the two-digit group when it exists, then the one-digit group;
/// references to missing groups and unknown `$` sequences stay literal. `$<name>`
/// is only a reference when the pattern has named groups at all.
pub fn translate_replacement(replacement: &str, group_count: usize, has_names: bool) -> String {
    let chars: Vec<char> = replacement.chars().collect();
    let mut out = String::with_capacity(replacement.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c != '$' {
            out.push(c);
            i += 1;
            continue;
        }

        let next = chars.get(i + 1).copied();
        match next {
            Some('$') => {
                out.push_str("$$");
                i += 2;
            }
            Some('&') => {
                out.push_str("${0}");
                i += 2;
            }
            Some(d) if d.is_ascii_digit() => {
                let one = d.to_digit(10).unwrap_or(0) as usize;
                let two = chars
                    .get(i + 2)
                    .and_then(|d2| d2.to_digit(10))
                    .map(|d2| one * 10 + d2 as usize);

                if let Some(n) = two.filter(|n| (1..=group_count).contains(n)) {
                    out.push_str(&format!("${{{}}}", n));
                    i += 3;
                } else if (1..=group_count).contains(&one) {
                    out.push_str(&format!("${{{}}}", one));
                    i += 2;
                } else {
                    out.push_str("$$");
                    i += 1;
                }
            }
            Some('<') if has_names => {
                let close = chars[i + 2..].iter().position(|&ch| ch == '>');
                match close {
                    Some(offset) => {
                        let name: String = chars[i + 2..i + 2 + offset].iter().collect();
                        out.push_str(&format!("${{{}}}", name));
                        i += 3 + offset;
                    }
                    None => {
                        out.push_str("$$");
                        i += 1;
                    }
                }
            }
            _ => {
                out.push_str("$$");
                i += 1;
            }
        }
    }

    out
}

pub fn apply_replace(
    text: &str,
    find: &str,
    replacement: &str,
    use_regex: bool,
    flags: &str,
    force_all: bool,
) -> Result<String> {
    let mut parsed = RegexFlags::parse(flags)?;
    if force_all {
        parsed.global = true;
    }
    let re = build_regex(find, use_regex, parsed)?;
    // captures_len includes the implicit whole-match group.
    let has_names = re.capture_names().flatten().next().is_some();
    let expansion = translate_replacement(replacement, re.captures_len() - 1, has_names);

    let replaced = if parsed.global {
        re.replace_all(text, expansion.as_str())
    } else {
        re.replace(text, expansion.as_str())
    };
    Ok(replaced.into_owned())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

/// A display-only annotation of `text` with every match marked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub segments: Vec<Segment>,
    pub match_count: usize,
    pub pattern_error: Option<String>,
}

impl Highlight {
    fn unannotated(text: &str, pattern_error: Option<String>) -> Self {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment {
                text: text.to_string(),
                is_match: false,
            }]
        };
        Self {
            segments,
            match_count: 0,
            pattern_error,
        }
    }

    /// Escapes every segment and wraps matches in `<marker>...</marker>`.
    pub fn to_html(&self, marker: &str) -> String {
        self.segments
            .iter()
            .map(|seg| {
                let escaped = escape_html(&seg.text);
                if seg.is_match {
                    format!("<{m}>{}</{m}>", escaped, m = marker)
                } else {
                    escaped
                }
            })
            .collect()
    }
}

/// Marks every non-empty match of `find` in `text`. Never fails: a bad pattern
/// yields the plain text with `pattern_error` set.
pub fn highlight(text: &str, find: &str, use_regex: bool, flags: &str) -> Highlight {
    if find.is_empty() {
        return Highlight::unannotated(text, None);
    }

    let re = match RegexFlags::parse(flags).and_then(|f| build_regex(find, use_regex, f)) {
        Ok(re) => re,
        Err(e) => {
            tracing::debug!(pattern = find, error = %e, "highlight pattern rejected");
            return Highlight::unannotated(text, Some(e.to_string()));
        }
    };

    let mut segments = Vec::new();
    let mut last = 0;
    let mut match_count = 0;

    for m in re.find_iter(text).filter(|m| !m.is_empty()) {
        if m.start() > last {
            segments.push(Segment {
                text: text[last..m.start()].to_string(),
                is_match: false,
            });
        }
        segments.push(Segment {
            text: m.as_str().to_string(),
            is_match: true,
        });
        match_count += 1;
        last = m.end();
    }
    if last < text.len() {
        segments.push(Segment {
            text: text[last..].to_string(),
            is_match: false,
        });
    }

    Highlight {
        segments,
        match_count,
        pattern_error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_all_replaces_every_literal_match() {
        assert_eq!(apply_replace("aaa", "a", "b", false, "", true).unwrap(), "bbb");
    }

    #[test]
    fn without_global_only_first_match_is_replaced() {
        assert_eq!(apply_replace("aaa", "a", "b", false, "", false).unwrap(), "baa");
    }

    #[test]
    fn global_flag_replaces_all() {
        assert_eq!(apply_replace("aaa", "a", "b", false, "g", false).unwrap(), "bbb");
    }

    #[test]
    fn literal_mode_escapes_metacharacters() {
        let out = apply_replace("1+1=2 and 1+1", "1+1", "two", false, "g", false).unwrap();
        assert_eq!(out, "two=2 and two");
    }

    #[test]
    fn back_references_swap_groups() {
        let out =
            apply_replace("John Smith", r"(\w+)\s(\w+)", "$2, $1", true, "", false).unwrap();
        assert_eq!(out, "Smith, John");
    }

    #[test]
    fn whole_match_and_literal_dollar() {
        let out = apply_replace("cost 5", r"\d", "$$$&", true, "", false).unwrap();
        assert_eq!(out, "cost $5");
    }

    #[test]
    fn group_reference_followed_by_letters() {
        let out = apply_replace("ab", "(a)", "$1x", true, "", false).unwrap();
        assert_eq!(out, "axb");
    }

    #[test]
    fn named_group_reference() {
        let out =
            apply_replace("2024-05", r"(?P<y>\d+)-(?P<m>\d+)", "$<m>/$<y>", true, "", false)
                .unwrap();
        assert_eq!(out, "05/2024");
    }

    #[test]
    fn case_insensitive_flag() {
        let out = apply_replace("Cat cat CAT", "cat", "dog", false, "gi", false).unwrap();
        assert_eq!(out, "dog dog dog");
    }

    #[test]
    fn invalid_pattern_is_a_pattern_error() {
        let err = apply_replace("text", "(", "x", true, "", false).unwrap_err();
        assert!(matches!(err, TextlabError::Pattern(_)));
    }

    #[test]
    fn invalid_flag_is_a_pattern_error() {
        let err = apply_replace("text", "t", "x", true, "q", false).unwrap_err();
        assert!(matches!(err, TextlabError::Pattern(_)));
        let err = apply_replace("text", "t", "x", true, "gg", false).unwrap_err();
        assert!(matches!(err, TextlabError::Pattern(_)));
    }

    #[test]
    fn parenthesis_is_fine_in_literal_mode() {
        assert_eq!(apply_replace("f(x)", "(", "[", false, "", false).unwrap(), "f[x)");
    }

    #[test]
    fn translate_keeps_missing_groups_literal() {
        assert_eq!(translate_replacement("$1", 0, false), "$$1");
        assert_eq!(translate_replacement("$12", 1, false), "${1}2");
        assert_eq!(translate_replacement("$12", 12, false), "${12}");
        assert_eq!(translate_replacement("a$", 0, false), "a$$");
        assert_eq!(translate_replacement("$<open", 0, true), "$$<open");
    }

    #[test]
    fn named_reference_without_named_groups_is_literal() {
        assert_eq!(apply_replace("ab", "a", "$<x>", true, "", false).unwrap(), "$<x>b");
        assert_eq!(translate_replacement("$<x>", 0, false), "$$<x>");
    }

    #[test]
    fn unknown_name_expands_empty_when_pattern_has_names() {
        let out = apply_replace("ab", "(?P<y>a)", "[$<x>]", true, "", false).unwrap();
        assert_eq!(out, "[]b");
    }

    #[test]
    fn highlight_marks_all_matches() {
        let h = highlight("a cat and a cat", "cat", false, "");
        assert_eq!(h.match_count, 2);
        assert_eq!(h.to_html("mark"), "a <mark>cat</mark> and a <mark>cat</mark>");
    }

    #[test]
    fn highlight_escapes_markup() {
        let h = highlight("<b>x</b>", "x", false, "");
        assert_eq!(h.to_html("mark"), "&lt;b&gt;<mark>x</mark>&lt;/b&gt;");
    }

    #[test]
    fn highlight_survives_invalid_pattern() {
        let h = highlight("<a> (b", "(", true, "");
        assert_eq!(h.match_count, 0);
        assert!(h.pattern_error.is_some());
        assert_eq!(h.to_html("mark"), "&lt;a&gt; (b");
    }

    #[test]
    fn highlight_skips_empty_matches() {
        let h = highlight("abc", "x*", true, "");
        assert_eq!(h.match_count, 0);
        assert_eq!(h.to_html("mark"), "abc");
    }

    #[test]
    fn highlight_with_empty_find_is_plain() {
        let h = highlight("abc", "", false, "");
        assert_eq!(h.match_count, 0);
        assert!(h.pattern_error.is_none());
        assert_eq!(h.segments.len(), 1);
    }
}
