use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("static regex"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));
static DASH_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("static regex"));

/// Builds a URL slug: accents are stripped by decomposing and dropping combining
/// marks, anything outside `[a-z0-9]` becomes a single `-`, and no dash leads,
/// trails or repeats.
pub fn slugify(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let lowered = stripped.to_lowercase();
    let replaced = DISALLOWED.replace_all(&lowered, "-");
    let dashed = WHITESPACE_RUN.replace_all(&replaced, "-");
    let collapsed = DASH_RUN.replace_all(&dashed, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_clean_slug(slug: &str) -> bool {
        slug.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && !slug.contains("--")
    }

    #[test]
    fn strips_accents() {
        let slug = slugify("Café naïve coöperate résumé");
        assert_eq!(slug, "cafe-naive-cooperate-resume");
        assert!(is_clean_slug(&slug));
    }

    #[test]
    fn strips_precomposed_and_combining_forms_alike() {
        assert_eq!(slugify("e\u{0301}le\u{0300}ve"), slugify("\u{e9}l\u{e8}ve"));
    }

    #[test]
    fn punctuation_and_spaces_collapse() {
        assert_eq!(slugify("  Hello,   World!! -- 2024  "), "hello-world-2024");
    }

    #[test]
    fn emoji_only_input_yields_empty() {
        assert_eq!(slugify("\u{1F600}\u{1F389}"), "");
    }

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn non_latin_letters_become_dashes() {
        let slug = slugify("straße über 東京");
        assert!(is_clean_slug(&slug));
        assert_eq!(slug, "stra-e-uber");
    }
}
