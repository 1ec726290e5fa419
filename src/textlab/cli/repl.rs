//! Interactive session: `textlab repl`.
//!
//! Each stdin line is parsed with the same clap definitions as the one-shot
//! commands, plus the session verbs (`set`, `sample`, `apply`, `discard`, `show`,
//! `quit`). Transforms print their result as pending; `apply` promotes it to the
//! current text, so transforms can be chained step by step.
//!
//! Lines are split shell-style. Single quotes are fully literal. Double quotes allow
//! `\"` and `\\`. A backslash before anything else stays a backslash, so regexes
//! such as `\d+` can be typed without doubling.
//!
//! A failing line prints `Error: ...` to stderr and the session carries on.

use super::commands::{handle_inspect, handle_transform, AppContext};
use super::render::{print_messages, render_session};
use super::setup::{ReplCommands, ReplLine, SessionCommands};
use clap::Parser;
use std::io::{BufRead, IsTerminal, Write};
use textlab::error::{Result, TextlabError};

const PROMPT: &str = "textlab> ";
const PENDING_LABEL: &str = "pending:";

enum Flow {
    Continue,
    Quit,
}

pub fn run(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("Type `help` for commands, `quit` to leave.");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        match run_line(ctx, &line?) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    Ok(())
}

fn run_line(ctx: &mut AppContext, line: &str) -> Result<Flow> {
    let tokens = tokenize(line).map_err(TextlabError::Api)?;
    if tokens.is_empty() {
        return Ok(Flow::Continue);
    }

    let parsed = match ReplLine::try_parse_from(tokens.iter()) {
        Ok(parsed) => parsed,
        Err(e) => {
            // Help requests land here too; clap knows which stream each belongs on.
            if e.use_stderr() {
                eprint!("{}", e);
            } else {
                print!("{}", e);
            }
            return Ok(Flow::Continue);
        }
    };

    match parsed.command {
        ReplCommands::Transform(cmd) => {
            handle_transform(ctx, cmd.into_transform(), Some(PENDING_LABEL))?
        }
        ReplCommands::Inspect(cmd) => handle_inspect(ctx, cmd)?,
        ReplCommands::Session(cmd) => return handle_session(ctx, cmd),
    }
    Ok(Flow::Continue)
}

fn handle_session(ctx: &mut AppContext, cmd: SessionCommands) -> Result<Flow> {
    let result = match cmd {
        SessionCommands::Set { words } => ctx.api.set_text(words.join(" ")),
        SessionCommands::Sample { name } => ctx.api.load_sample(name),
        SessionCommands::Apply => {
            let result = ctx.api.promote();
            print_messages(&result.messages, ctx.use_color);
            if let Some(current) = &result.current_text {
                print!("{}", render_session(current, None, ctx.use_color));
            }
            return Ok(Flow::Continue);
        }
        SessionCommands::Discard => ctx.api.discard(),
        SessionCommands::Show => {
            let result = ctx.api.show();
            let current = result.current_text.as_deref().unwrap_or_default();
            print!(
                "{}",
                render_session(current, result.output.as_deref(), ctx.use_color)
            );
            return Ok(Flow::Continue);
        }
        SessionCommands::Quit => return Ok(Flow::Quit),
    };
    print_messages(&result.messages, ctx.use_color);
    Ok(Flow::Continue)
}

/// Splits a repl line into arguments.
fn tokenize(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) if c == q => quote = None,
            Some('"') if c == '\\' && matches!(chars.peek(), Some('"') | Some('\\')) => {
                current.extend(chars.next());
            }
            Some(_) => current.push(c),
            None => match c {
                '"' | '\'' => {
                    quote = Some(c);
                    in_token = true;
                }
                '\\' if matches!(chars.peek(), Some(n) if n.is_whitespace() || matches!(n, '"' | '\'' | '\\')) =>
                {
                    current.extend(chars.next());
                    in_token = true;
                }
                c if c.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                c => {
                    current.push(c);
                    in_token = true;
                }
            },
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {} quote", q));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        tokenize(line).unwrap()
    }

    #[test]
    fn test_tokenize_plain_words() {
        assert_eq!(words("  replace  a   b "), vec!["replace", "a", "b"]);
        assert!(words("   ").is_empty());
    }

    #[test]
    fn test_tokenize_quotes_keep_spaces() {
        assert_eq!(
            words(r#"set "hello   world" 'it''s'"#),
            vec!["set", "hello   world", "its"]
        );
    }

    #[test]
    fn test_tokenize_empty_quotes_make_an_argument() {
        assert_eq!(words(r#"replace x """#), vec!["replace", "x", ""]);
    }

    #[test]
    fn test_tokenize_backslashes() {
        assert_eq!(words(r"replace \d+ #"), vec!["replace", r"\d+", "#"]);
        assert_eq!(words(r#"set "say \"hi\"""#), vec!["set", r#"say "hi""#]);
        assert_eq!(words(r"set a\ b"), vec!["set", "a b"]);
    }

    #[test]
    fn test_tokenize_single_quotes_are_literal() {
        assert_eq!(words(r"set 'a\b'"), vec!["set", r"a\b"]);
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        assert!(tokenize(r#"set "oops"#).is_err());
    }
}
