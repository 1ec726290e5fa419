//! # Rendering
//!
//! Turns API results into terminal text. Every renderer builds a small serializable
//! view model and feeds it to one of the templates in [`super::templates`]; the
//! `style` filter maps semantic names onto the theme from [`super::styles`].
//!
//! Renderers take an explicit `use_color` flag. The CLI resolves it once from
//! `--no-color` and terminal detection, and tests pass `false` to assert on plain text.

use super::styles::{names, TEXTLAB_THEME};
use super::templates::{
    HIGHLIGHT_TEMPLATE, MESSAGES_TEMPLATE, OUTPUT_TEMPLATE, SAMPLES_TEMPLATE, SESSION_TEMPLATE,
    TABLE_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::time::Duration;
use textlab::api::{
    Analysis, BenchReport, CmdMessage, GraphemeMode, Highlight, MessageLevel, Sample,
};
use unicode_width::UnicodeWidthStr;

const LABEL_WIDTH: usize = 16;

#[derive(Serialize)]
struct OutputData<'a> {
    output: &'a str,
    label: Option<&'a str>,
}

#[derive(Serialize)]
struct TableRow {
    label: String,
    value: String,
    note: Option<String>,
}

#[derive(Serialize)]
struct TableData {
    title: Option<String>,
    rows: Vec<TableRow>,
}

#[derive(Serialize)]
struct SegmentData<'a> {
    text: &'a str,
    style: &'static str,
}

#[derive(Serialize)]
struct HighlightData<'a> {
    segments: Vec<SegmentData<'a>>,
    summary: String,
}

#[derive(Serialize)]
struct SessionData<'a> {
    current: &'a str,
    pending: Option<&'a str>,
}

#[derive(Serialize)]
struct SampleEntry {
    name: &'static str,
    padding: String,
    description: &'static str,
}

#[derive(Serialize)]
struct SamplesData {
    samples: Vec<SampleEntry>,
}

#[derive(Serialize)]
struct TextListData<'a> {
    lines: &'a [String],
    empty_message: &'a str,
}

#[derive(Serialize)]
struct MessageData<'a> {
    content: &'a str,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData<'a> {
    messages: Vec<MessageData<'a>>,
}

/// Renders `template` with the textlab theme bound to the `style` filter.
fn render_template<T: Serialize>(
    template: &'static str,
    data: &T,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        TEXTLAB_THEME.apply(&name, &value.to_string(), use_color)
    });
    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}

fn row(label: &str, value: impl ToString, note: Option<String>) -> TableRow {
    let padding = LABEL_WIDTH.saturating_sub(label.width());
    TableRow {
        label: format!("{}{}", label, " ".repeat(padding)),
        value: value.to_string(),
        note,
    }
}

/// Renders a transform result. `label` is set inside the repl, where the output is a
/// pending value rather than the final answer.
pub fn render_output(output: &str, label: Option<&str>, use_color: bool) -> String {
    let data = OutputData { output, label };
    render_template(OUTPUT_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", output))
}

pub fn render_analysis(analysis: &Analysis, use_color: bool) -> String {
    let grapheme_note = match analysis.grapheme_mode {
        GraphemeMode::Segmented => None,
        GraphemeMode::CodePoints => Some("(code point approximation)".to_string()),
    };
    let data = TableData {
        title: None,
        rows: vec![
            row("Characters", analysis.code_points, None),
            row("Graphemes", analysis.graphemes, grapheme_note),
            row("UTF-8 bytes", analysis.utf8_bytes, None),
            row("UTF-16 units", analysis.utf16_units, None),
            row("Words", analysis.words, None),
            row("Lines", analysis.lines, None),
            row("Display width", analysis.display_width, None),
        ],
    };
    render_template(TABLE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn match_summary(count: usize) -> String {
    match count {
        1 => "1 match".to_string(),
        n => format!("{} matches", n),
    }
}

pub fn render_highlight(highlight: &Highlight, use_color: bool) -> String {
    let segments = highlight
        .segments
        .iter()
        .map(|seg| SegmentData {
            text: &seg.text,
            style: if seg.is_match {
                names::MATCH
            } else {
                names::PLAIN
            },
        })
        .collect();
    let data = HighlightData {
        segments,
        summary: match_summary(highlight.match_count),
    };
    render_template(HIGHLIGHT_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn format_millis(duration: Duration) -> String {
    format!("{:.3} ms", duration.as_secs_f64() * 1000.0)
}

pub fn render_bench(report: &BenchReport, use_color: bool) -> String {
    let data = TableData {
        title: Some(format!("Building a string from {} pieces", report.size)),
        rows: vec![
            row("Accumulate", format_millis(report.accumulate), None),
            row("Pre-sized join", format_millis(report.presized_join), None),
            row(
                "Ratio",
                format!("{:.2}x", report.ratio()),
                Some("(accumulate / join)".to_string()),
            ),
        ],
    };
    render_template(TABLE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_session(current: &str, pending: Option<&str>, use_color: bool) -> String {
    let data = SessionData { current, pending };
    render_template(SESSION_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_samples(samples: &[Sample], use_color: bool) -> String {
    let width = samples
        .iter()
        .map(|s| s.name().width())
        .max()
        .unwrap_or(0)
        + 2;
    let data = SamplesData {
        samples: samples
            .iter()
            .map(|s| SampleEntry {
                name: s.name(),
                padding: " ".repeat(width - s.name().width()),
                description: s.description(),
            })
            .collect(),
    };
    render_template(SAMPLES_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines,
        empty_message,
    };
    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: &msg.content,
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    let output = render_messages(messages, use_color);
    if !output.is_empty() {
        print!("{}", output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textlab::api::Segment;

    fn analysis(mode: GraphemeMode) -> Analysis {
        Analysis {
            code_points: 5,
            graphemes: 4,
            grapheme_mode: mode,
            utf8_bytes: 9,
            utf16_units: 6,
            words: 1,
            lines: 1,
            display_width: 5,
        }
    }

    #[test]
    fn test_render_output_plain() {
        assert_eq!(render_output("Hello World", None, false), "Hello World\n");
    }

    #[test]
    fn test_render_output_with_pending_label() {
        assert_eq!(
            render_output("HELLO", Some("pending:"), false),
            "pending: HELLO\n"
        );
    }

    #[test]
    fn test_render_output_keeps_template_syntax_literal() {
        assert_eq!(render_output("{{ x }}", None, false), "{{ x }}\n");
    }

    #[test]
    fn test_render_analysis_rows() {
        let output = render_analysis(&analysis(GraphemeMode::Segmented), false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Characters      5");
        assert_eq!(lines[1], "Graphemes       4");
        assert!(!output.contains("approximation"));
    }

    #[test]
    fn test_render_analysis_flags_fallback_mode() {
        let output = render_analysis(&analysis(GraphemeMode::CodePoints), false);
        assert!(output.contains("Graphemes       4 (code point approximation)"));
    }

    #[test]
    fn test_render_highlight_plain_text_and_summary() {
        let highlight = Highlight {
            segments: vec![
                Segment {
                    text: "a ".into(),
                    is_match: false,
                },
                Segment {
                    text: "fox".into(),
                    is_match: true,
                },
            ],
            match_count: 1,
            pattern_error: None,
        };
        assert_eq!(render_highlight(&highlight, false), "a fox\n1 match\n");
    }

    #[test]
    fn test_render_highlight_styles_matches_only() {
        let highlight = Highlight {
            segments: vec![
                Segment {
                    text: "plain".into(),
                    is_match: false,
                },
                Segment {
                    text: "hit".into(),
                    is_match: true,
                },
            ],
            match_count: 1,
            pattern_error: None,
        };
        let output = render_highlight(&highlight, true);
        assert!(output.starts_with("plain"));
        assert!(output.contains("\u{1b}["));
    }

    #[test]
    fn test_render_bench() {
        let report = BenchReport {
            size: 100,
            accumulate: Duration::from_millis(4),
            presized_join: Duration::from_millis(2),
        };
        let output = render_bench(&report, false);
        assert!(output.starts_with("Building a string from 100 pieces\n"));
        assert!(output.contains("Accumulate      4.000 ms"));
        assert!(output.contains("2.00x (accumulate / join)"));
    }

    #[test]
    fn test_render_session_without_pending() {
        assert_eq!(render_session("abc", None, false), "current abc\n");
    }

    #[test]
    fn test_render_session_with_empty_pending() {
        assert_eq!(
            render_session("abc", Some(""), false),
            "current abc\npending \n"
        );
    }

    #[test]
    fn test_render_samples_aligned() {
        let output = render_samples(&[Sample::Plain, Sample::Accented], false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("plain     "));
        assert!(lines[1].starts_with("accented  "));
    }

    #[test]
    fn test_render_text_list_empty() {
        let output = render_text_list(&[], "Nothing here.", false);
        assert_eq!(output, "Nothing here.\n");
    }

    #[test]
    fn test_render_text_list_lines() {
        let lines = vec!["a = 1".to_string(), "b = 2".to_string()];
        assert_eq!(render_text_list(&lines, "-", false), "a = 1\nb = 2\n");
    }

    #[test]
    fn test_render_messages() {
        let messages = vec![
            CmdMessage::success("Applied"),
            CmdMessage::warning("Careful"),
        ];
        assert_eq!(render_messages(&messages, false), "Applied\nCareful\n");
        assert_eq!(render_messages(&[], false), "");
    }
}
