//! # CLI Behavior
//!
//! This is **one possible UI client** for textlab, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and output
//! formatting. For the overall architecture, see the crate-level docs of `textlab`.
//!
//! ## One-Shot Commands
//!
//! `textlab <transform> [ARGS]` reads the input (`--text`, `--sample` or piped
//! stdin), applies a single transform and prints the result. Nothing is kept between
//! runs, so the compute/apply split of the session is invisible here: the printed
//! output is the pending result.
//!
//! ```text
//! $ textlab --text "hello world" title
//! Hello World
//! $ echo "héllo" | textlab encode
//! aMOpbGxv
//! ```
//!
//! ## The Repl
//!
//! `textlab repl` keeps a session alive. Transforms stage a pending result, `apply`
//! promotes it, `show` prints both. See [`repl`] for the line grammar.
//!
//! ## Output
//!
//! All output goes through minijinja templates (`templates/`) styled by the theme
//! in [`styles`]. Colors are on when stdout is a color terminal and `--no-color` is
//! not given.

mod commands;
mod render;
mod repl;
mod setup;
mod styles;
mod templates;

pub use commands::run;
