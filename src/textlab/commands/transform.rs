//! Dispatch for every staging transform.
//!
//! A [`Transform`] names one `text -> text` operation plus its options. [`run`]
//! applies it to an input and returns the new text without touching any state;
//! staging the result is the API's job.

use crate::commands::case::{self, NormalizationForm, PadSide};
use crate::commands::slice::{self, SliceMode};
use crate::commands::{codec, linkify, replace, slug, template};
use crate::config::TextlabConfig;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    TitleCase,
    SwapCase,
    UpperCase,
    LowerCase,
    TrimCollapse,
    Reverse,
    Normalize(NormalizationForm),
    Pad {
        target_len: usize,
        fill: Option<String>,
        side: PadSide,
    },
    Slice {
        mode: SliceMode,
        start: f64,
        end: Option<f64>,
    },
    Replace {
        find: String,
        replacement: String,
        use_regex: bool,
        flags: Option<String>,
        force_all: bool,
    },
    Linkify,
    Slugify,
    EscapeHtml,
    Base64Encode,
    Base64Decode,
    /// The input is the template; `vars_json` holds the variables.
    Interpolate {
        vars_json: String,
        escape: bool,
    },
}

impl Transform {
    pub fn name(&self) -> &'static str {
        match self {
            Transform::TitleCase => "title",
            Transform::SwapCase => "swap",
            Transform::UpperCase => "upper",
            Transform::LowerCase => "lower",
            Transform::TrimCollapse => "trim",
            Transform::Reverse => "reverse",
            Transform::Normalize(_) => "normalize",
            Transform::Pad { .. } => "pad",
            Transform::Slice { .. } => "slice",
            Transform::Replace { .. } => "replace",
            Transform::Linkify => "linkify",
            Transform::Slugify => "slug",
            Transform::EscapeHtml => "escape",
            Transform::Base64Encode => "encode",
            Transform::Base64Decode => "decode",
            Transform::Interpolate { .. } => "interpolate",
        }
    }
}

pub fn run(text: &str, transform: &Transform, config: &TextlabConfig) -> Result<String> {
    let output = match transform {
        Transform::TitleCase => case::title_case(text),
        Transform::SwapCase => case::swap_case(text),
        Transform::UpperCase => case::upper_case(text),
        Transform::LowerCase => case::lower_case(text),
        Transform::TrimCollapse => case::trim_collapse(text),
        Transform::Reverse => case::reverse_graphemes(text),
        Transform::Normalize(form) => case::normalize(text, *form),
        Transform::Pad {
            target_len,
            fill,
            side,
        } => {
            let fill = fill.as_deref().unwrap_or(&config.pad_char);
            case::pad(text, *target_len, fill, *side)?
        }
        Transform::Slice { mode, start, end } => slice::by_end_index(text, *mode, *start, *end),
        Transform::Replace {
            find,
            replacement,
            use_regex,
            flags,
            force_all,
        } => {
            let flags = flags.as_deref().unwrap_or(&config.default_flags);
            replace::apply_replace(text, find, replacement, *use_regex, flags, *force_all)?
        }
        Transform::Linkify => linkify::linkify(text, &config.links),
        Transform::Slugify => slug::slugify(text),
        Transform::EscapeHtml => linkify::escape_html(text),
        Transform::Base64Encode => codec::base64_encode(text),
        Transform::Base64Decode => codec::base64_decode(text)?,
        Transform::Interpolate { vars_json, escape } => {
            let vars = template::parse_variables(vars_json);
            if *escape {
                template::render_escaped(text, &vars)
            } else {
                template::interpolate_with(text, &vars)
            }
        }
    };
    Ok(output)
}
