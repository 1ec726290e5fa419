//! HTML escaping and mention/hashtag linkification.
//!
//! Escaping always runs first, so markup already present in the input can never
//! break the generated links. The escape sequences used here contain neither `@`
//! nor `#`, and mentions and tags are rewritten in a single pass, so the patterns
//! never match inside inserted markup.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

static MENTION_OR_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([@#])([A-Za-z0-9_]+)").expect("static regex"));

/// Link prefixes for profile and tag links. The word is appended verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTargets {
    pub profile_url: String,
    pub tag_url: String,
}

impl Default for LinkTargets {
    fn default() -> Self {
        Self {
            profile_url: "https://example.com/users/".to_string(),
            tag_url: "https://example.com/tags/".to_string(),
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn linkify(text: &str, links: &LinkTargets) -> String {
    let escaped = escape_html(text);
    let profile_url = escape_html(&links.profile_url);
    let tag_url = escape_html(&links.tag_url);

    MENTION_OR_TAG
        .replace_all(&escaped, |caps: &Captures| {
            let sigil = &caps[1];
            let word = &caps[2];
            let (class, base) = if sigil == "@" {
                ("mention", &profile_url)
            } else {
                ("hashtag", &tag_url)
            };
            format!(
                r#"<a class="{}" href="{}{}">{}{}</a>"#,
                class, base, word, sigil, word
            )
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> LinkTargets {
        LinkTargets {
            profile_url: "/u/".to_string(),
            tag_url: "/t/".to_string(),
        }
    }

    #[test]
    fn escapes_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &apos;Jerry&apos;&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_sequences_contain_no_sigils() {
        let escaped = escape_html("&<>\"'");
        assert!(!escaped.contains('@'));
        assert!(!escaped.contains('#'));
    }

    #[test]
    fn links_mentions_and_tags() {
        let out = linkify("hi @ann, see #rust_lang", &links());
        assert_eq!(
            out,
            r#"hi <a class="mention" href="/u/ann">@ann</a>, see <a class="hashtag" href="/t/rust_lang">#rust_lang</a>"#
        );
    }

    #[test]
    fn escapes_before_linking() {
        let out = linkify("<script>@x</script> & #y", &links());
        assert!(out.starts_with("&lt;script&gt;<a class=\"mention\""));
        assert!(out.contains("&amp; <a class=\"hashtag\" href=\"/t/y\">#y</a>"));
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn adjacent_tags_each_get_a_link() {
        let out = linkify("#a#b", &links());
        assert_eq!(out.matches("<a ").count(), 2);
    }

    #[test]
    fn sigil_in_prefix_does_not_relink() {
        let targets = LinkTargets {
            profile_url: "/#/users/".to_string(),
            tag_url: "/#/tags/".to_string(),
        };
        let out = linkify("@me", &targets);
        assert_eq!(out.matches("<a ").count(), 1);
    }

    #[test]
    fn lone_sigils_stay_plain() {
        assert_eq!(linkify("a @ b # c", &links()), "a @ b # c");
    }
}
