//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for all textlab operations, whatever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session**: the current text and the pending transform
//! - **Dispatches** to the appropriate command function
//! - **Stages** transform results and promotes them on request
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Text logic**: that belongs in `commands/*.rs`
//! - **I/O**: no stdout, stderr or terminal formatting
//!
//! ## Failure Semantics
//!
//! A transform that fails (invalid pattern, invalid Base64) returns the error and
//! leaves the session exactly as it was: the current text is untouched and any
//! previously pending transform is kept.

use crate::commands::{analyze, bench, replace, transform};
use crate::config::TextlabConfig;
use crate::error::Result;
use crate::session::Session;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct TextlabPaths {
    pub config_dir: PathBuf,
}

pub struct TextlabApi {
    session: Session,
    config: TextlabConfig,
    paths: TextlabPaths,
}

impl TextlabApi {
    pub fn new(config: TextlabConfig, paths: TextlabPaths) -> Self {
        Self {
            session: Session::default(),
            config,
            paths,
        }
    }

    pub fn with_text(config: TextlabConfig, paths: TextlabPaths, text: impl Into<String>) -> Self {
        Self {
            session: Session::new(text),
            config,
            paths,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> &TextlabConfig {
        &self.config
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> CmdResult {
        self.session.set_text(text);
        let count = analyze::code_point_count(self.session.current_text());
        let mut result = CmdResult::default().with_current_text(self.session.current_text().into());
        result.add_message(CmdMessage::info(format!("Text set ({} characters)", count)));
        result
    }

    pub fn load_sample(&mut self, sample: Sample) -> CmdResult {
        let mut result = self.set_text(sample.text());
        result.messages.clear();
        result.add_message(CmdMessage::info(format!("Loaded sample: {}", sample)));
        result
    }

    /// Runs a transform on the current text and stages its result.
    pub fn transform(&mut self, op: &Transform) -> Result<CmdResult> {
        let output = transform::run(self.session.current_text(), op, &self.config)?;
        tracing::debug!(transform = op.name(), "staged transform result");
        self.session.stage(output.clone());
        Ok(CmdResult::default().with_output(output))
    }

    pub fn promote(&mut self) -> CmdResult {
        let mut result = CmdResult::default();
        if self.session.promote() {
            tracing::debug!("promoted pending transform");
            result.add_message(CmdMessage::success("Applied pending transform"));
        } else {
            result.add_message(CmdMessage::warning("Nothing to apply"));
        }
        result.with_current_text(self.session.current_text().into())
    }

    pub fn discard(&mut self) -> CmdResult {
        let mut result = CmdResult::default();
        if self.session.discard() {
            result.add_message(CmdMessage::info("Discarded pending transform"));
        } else {
            result.add_message(CmdMessage::warning("Nothing to discard"));
        }
        result
    }

    pub fn show(&self) -> CmdResult {
        let mut result = CmdResult::default().with_current_text(self.session.current_text().into());
        result.output = self.session.pending().map(str::to_string);
        result
    }

    pub fn analyze(&self, mode: Option<GraphemeMode>) -> CmdResult {
        let mode = mode.unwrap_or(self.config.grapheme_mode);
        let analysis = analyze::run(self.session.current_text(), mode);
        let mut result = CmdResult::default().with_analysis(analysis);
        if mode == GraphemeMode::CodePoints {
            result.add_message(CmdMessage::warning(
                "Grapheme count is approximated by code points (cluster-unaware)",
            ));
        }
        result
    }

    /// Display-only: never stages and never fails.
    pub fn highlight(&self, find: &str, use_regex: bool, flags: Option<&str>) -> CmdResult {
        let flags = flags.unwrap_or(&self.config.default_flags);
        let highlight = replace::highlight(self.session.current_text(), find, use_regex, flags);
        let mut result = CmdResult::default();
        if let Some(err) = &highlight.pattern_error {
            result.add_message(CmdMessage::warning(err.clone()));
        }
        result.with_highlight(highlight)
    }

    pub fn bench(&self, size: usize) -> CmdResult {
        let mut result = CmdResult::default();
        let size = if size > self.config.bench_max_size {
            result.add_message(CmdMessage::warning(format!(
                "Size clamped to {}",
                self.config.bench_max_size
            )));
            self.config.bench_max_size
        } else {
            size
        };
        result.with_bench(bench::compare_concat(size))
    }

    pub fn samples(&self) -> CmdResult {
        CmdResult::default().with_samples(Sample::all().to_vec())
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        crate::commands::config::run(&self.paths.config_dir, action)
    }

    pub fn paths(&self) -> &TextlabPaths {
        &self.paths
    }
}

pub use crate::commands::analyze::{Analysis, GraphemeMode};
pub use crate::commands::bench::BenchReport;
pub use crate::commands::case::{NormalizationForm, PadSide};
pub use crate::commands::config::ConfigAction;
pub use crate::commands::replace::{Highlight, Segment};
pub use crate::commands::samples::Sample;
pub use crate::commands::slice::SliceMode;
pub use crate::commands::transform::Transform;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
