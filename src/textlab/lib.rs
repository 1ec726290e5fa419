//! # Textlab Architecture
//!
//! Textlab is a **UI-agnostic text manipulation library** with a CLI client. Every
//! interesting behavior is a pure `text -> text` function; the rest of the crate
//! threads session state around those functions and presents the results.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, runs the repl          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs + session.rs)                            │
//! │  - Owns the session (current text + pending transform)      │
//! │  - Stages transform results, promotes them on request       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure text functions: case, slicing, replace, slugs,      │
//! │    Base64, templates, analysis                              │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Compute, Then Apply
//!
//! Transforms never overwrite the input. Each result is staged as the session's
//! pending transform, and only an explicit promote makes it the new input. A
//! failing transform stages nothing. See [`session`].
//!
//! ## Unicode Correctness
//!
//! Case mapping, normalization and grapheme segmentation come from the Unicode
//! tables in the standard library, `unicode-normalization` and
//! `unicode-segmentation`. Nothing here hand-rolls Unicode rules.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular Rust
//! types, and never writes to stdout/stderr or exits the process. Diagnostics go
//! through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Text functions, one module per concern
//! - [`session`]: Current text and pending transform
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, rendering and the repl (binary only)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod session;
