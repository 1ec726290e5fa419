//! # CLI Layer
//!
//! This module is **one possible UI client** for textlab. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr, whether stdin is piped)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load configuration, pick the input text, build the API
//! 3. **API Dispatch**: Call the appropriate `TextlabApi` method
//! 4. **Output Formatting**: Render `CmdResult`s through the templates
//!
//! Errors bubble up to `main`, which prints them and exits with status 1.
//!
//! ## Input Selection
//!
//! Commands that read text take it from `--text`, then `--sample`, then piped stdin.
//! A single trailing newline is dropped from stdin so `echo hi | textlab upper`
//! prints `HI`, not `HI` plus a blank line. `repl` never treats stdin as input text:
//! stdin is its command stream, and `--text`/`--sample` only seed the session.

use super::render::{
    print_messages, render_analysis, render_bench, render_highlight, render_output,
    render_samples, render_text_list,
};
use super::repl;
use super::setup::{
    print_grouped_help, print_help_for_command, Cli, Commands, InspectCommands, MiscCommands,
};
use clap::{CommandFactory, FromArgMatches};
use console::Term;
use directories::ProjectDirs;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use textlab::api::{
    CmdMessage, ConfigAction, GraphemeMode, TextlabApi, TextlabPaths, Transform,
};
use textlab::config::TextlabConfig;
use textlab::error::{Result, TextlabError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub struct AppContext {
    pub api: TextlabApi,
    pub use_color: bool,
    /// Set by `--codepoints`; otherwise analysis uses the configured mode.
    pub grapheme_override: Option<GraphemeMode>,
}

pub fn run() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    let use_color = !cli.no_color && Term::stdout().features().colors_supported();

    // Top level uses grouped help, subcommands use clap's default
    if cli.help {
        match matches.subcommand_name() {
            Some(name) => print_help_for_command(name, use_color),
            None => print_grouped_help(use_color),
        }
        return Ok(());
    }

    init_logging(cli.verbose);

    let reads_stdin = matches!(
        cli.command,
        Some(Commands::Transform(_))
            | Some(Commands::Inspect(InspectCommands::Analyze))
            | Some(Commands::Inspect(InspectCommands::Highlight { .. }))
    );
    let input = read_input(&cli, reads_stdin)?;
    let mut ctx = init_context(&cli, input.unwrap_or_default(), use_color)?;

    match cli.command {
        Some(Commands::Transform(cmd)) => handle_transform(&mut ctx, cmd.into_transform(), None),
        Some(Commands::Inspect(cmd)) => handle_inspect(&mut ctx, cmd),
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Repl => repl::run(&mut ctx),
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
            MiscCommands::Help { command } => handle_help(command, use_color),
        },
        None => {
            print_grouped_help(use_color);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "textlab=debug"
    } else {
        "textlab=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn config_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("TEXTLAB_HOME") {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "textlab", "textlab")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".textlab"))
}

fn read_input(cli: &Cli, allow_stdin: bool) -> Result<Option<String>> {
    match (&cli.text, cli.sample) {
        (Some(_), Some(_)) => Err(TextlabError::Api(
            "--text and --sample cannot be used together".to_string(),
        )),
        (Some(text), None) => Ok(Some(text.clone())),
        (None, Some(sample)) => Ok(Some(sample.text().to_string())),
        (None, None) if allow_stdin && !std::io::stdin().is_terminal() => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(strip_trailing_newline(buffer)))
        }
        (None, None) => Ok(None),
    }
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

fn init_context(cli: &Cli, text: String, use_color: bool) -> Result<AppContext> {
    let config_dir = config_dir();
    let config = TextlabConfig::load(&config_dir)?;
    tracing::debug!(config_dir = %config_dir.display(), "loaded configuration");

    Ok(AppContext {
        api: TextlabApi::with_text(config, TextlabPaths { config_dir }, text),
        use_color,
        grapheme_override: cli.codepoints.then_some(GraphemeMode::CodePoints),
    })
}

/// Runs a transform and prints its result. `label` marks the output as pending
/// inside the repl.
pub fn handle_transform(
    ctx: &mut AppContext,
    transform: Transform,
    label: Option<&str>,
) -> Result<()> {
    let result = ctx.api.transform(&transform)?;
    if let Some(output) = &result.output {
        print!("{}", render_output(output, label, ctx.use_color));
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

pub fn handle_inspect(ctx: &mut AppContext, cmd: InspectCommands) -> Result<()> {
    let result = match cmd {
        InspectCommands::Analyze => {
            let result = ctx.api.analyze(ctx.grapheme_override);
            if let Some(analysis) = &result.analysis {
                print!("{}", render_analysis(analysis, ctx.use_color));
            }
            result
        }
        InspectCommands::Highlight {
            find,
            pattern,
            html,
        } => {
            let result = ctx
                .api
                .highlight(&find, pattern.regex, pattern.flags.as_deref());
            if let Some(highlight) = &result.highlight {
                if html {
                    println!("{}", highlight.to_html(&ctx.api.settings().highlight_marker));
                } else {
                    print!("{}", render_highlight(highlight, ctx.use_color));
                }
            }
            result
        }
        InspectCommands::Bench { size } => {
            print_messages(&[CmdMessage::info("Running...")], ctx.use_color);
            let result = ctx.api.bench(size);
            if let Some(report) = &result.bench {
                print!("{}", render_bench(report, ctx.use_color));
            }
            result
        }
        InspectCommands::Samples => {
            let result = ctx.api.samples();
            print!("{}", render_samples(&result.samples, ctx.use_color));
            result
        }
    };
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        let lines: Vec<String> = result
            .config
            .iter()
            .flat_map(|config| config.list_all())
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        print!(
            "{}",
            render_text_list(&lines, "No configuration values.", ctx.use_color)
        );
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_help(command: Option<String>, use_color: bool) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(&cmd, use_color),
        None => print_grouped_help(use_color),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_newline() {
        assert_eq!(strip_trailing_newline("hi\n".into()), "hi");
        assert_eq!(strip_trailing_newline("hi\r\n".into()), "hi");
        assert_eq!(strip_trailing_newline("hi\n\n".into()), "hi\n");
        assert_eq!(strip_trailing_newline("hi".into()), "hi");
    }
}
