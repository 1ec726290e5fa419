//! # Command Layer
//!
//! Pure text functions, one module per concern. Nothing here reads the session or
//! touches the terminal, and only [`config`] writes a file (the saved settings).
//! The text functions take `&str` (plus options) and return a new value. The API
//! facade threads session state around these.

use crate::config::TextlabConfig;
use analyze::Analysis;
use bench::BenchReport;
use replace::Highlight;
use samples::Sample;

pub mod analyze;
pub mod bench;
pub mod case;
pub mod codec;
pub mod config;
pub mod linkify;
pub mod replace;
pub mod samples;
pub mod slice;
pub mod slug;
pub mod template;
pub mod transform;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Result of a transform. Staged as the session's pending transform.
    pub output: Option<String>,
    pub current_text: Option<String>,
    pub analysis: Option<Analysis>,
    pub highlight: Option<Highlight>,
    pub bench: Option<BenchReport>,
    pub samples: Vec<Sample>,
    pub config: Option<TextlabConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_current_text(mut self, text: String) -> Self {
        self.current_text = Some(text);
        self
    }

    pub fn with_analysis(mut self, analysis: Analysis) -> Self {
        self.analysis = Some(analysis);
        self
    }

    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = Some(highlight);
        self
    }

    pub fn with_bench(mut self, report: BenchReport) -> Self {
        self.bench = Some(report);
        self
    }

    pub fn with_samples(mut self, samples: Vec<Sample>) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_config(mut self, config: TextlabConfig) -> Self {
        self.config = Some(config);
        self
    }
}
