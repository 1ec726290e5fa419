//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in stand-alone `.tmp`
//! files, so they can be edited and diffed without touching Rust code. They are pulled
//! in here as string constants.
//!
//! Conventions:
//!
//! 1. Line breaks are explicit. The environment keeps the trailing newline of each
//!    file, and loops use `-%}` so that each iteration emits exactly one line.
//! 2. Layout (padding, counts, summaries) is computed in Rust. Templates only decide
//!    what gets printed and which semantic style it gets.
//! 3. When a style depends on the data, the renderer passes the style name in
//!    (`seg.style`, `msg.style`) instead of branching in the template.

pub const OUTPUT_TEMPLATE: &str = include_str!("templates/output.tmp");
pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const HIGHLIGHT_TEMPLATE: &str = include_str!("templates/highlight.tmp");
pub const SESSION_TEMPLATE: &str = include_str!("templates/session.tmp");
pub const SAMPLES_TEMPLATE: &str = include_str!("templates/samples.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
