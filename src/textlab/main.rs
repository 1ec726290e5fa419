//! # Textlab CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/textlab/cli/)                               │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Input selection + dispatch (commands.rs)                 │
//! │  - Interactive session loop (repl.rs)                       │
//! │  - Terminal rendering via minijinja templates (render.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                 API Layer (textlab::api) → Commands
//! ```
//!
//! Testing follows the layers: text logic is unit tested in the library, the
//! renderer is tested against canned `CmdResult`s, and `tests/` drives the
//! compiled binary end to end.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
