use super::styles::{names, TEXTLAB_THEME};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use textlab::api::{NormalizationForm, PadSide, Sample, SliceMode, Transform};

#[derive(Parser, Debug)]
#[command(
    name = "textlab",
    bin_name = "textlab",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Unicode-aware text manipulation toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input text (defaults to piped stdin)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub text: Option<String>,

    /// Use a preset sample as input
    #[arg(short, long, global = true, help_heading = "Options")]
    pub sample: Option<Sample>,

    /// Approximate graphemes by code points
    #[arg(long, global = true, help_heading = "Options")]
    pub codepoints: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Transform,
    Inspect,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Transform => "Transform Commands:",
            CommandGroup::Inspect => "Inspect Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "title" | "swap" | "upper" | "lower" | "trim" | "reverse" | "normalize" | "pad"
            | "slice" | "replace" | "linkify" | "slug" | "escape" | "encode" | "decode"
            | "interpolate" => Some(CommandGroup::Transform),
            "analyze" | "highlight" | "bench" | "samples" => Some(CommandGroup::Inspect),
            "repl" | "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Transform,
            CommandGroup::Inspect,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help(use_color: bool) -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");
    let style = |name: &str, text: &str| TEXTLAB_THEME.apply(name, text, use_color);

    let mut output = String::new();
    output.push_str(&format!("textlab {version}\n"));
    output.push_str("Unicode-aware text manipulation toolkit\n");
    output.push('\n');
    output.push_str("Usage: textlab [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", style(names::HELP_SECTION, group.heading())));
            for sc in group_cmds {
                let name = format!("{:<12}", sc.get_name());
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {} {}\n", style(names::HELP_COMMAND, &name), about));
            }
        }
    }

    output.push('\n');
    output.push_str(&format!("{}\n", style(names::HELP_SECTION, "Options:")));
    output.push_str("  -t, --text <TEXT>      Input text (defaults to piped stdin)\n");
    output.push_str("  -s, --sample <SAMPLE>  Use a preset sample as input\n");
    output.push_str("      --codepoints       Approximate graphemes by code points\n");
    output.push_str("      --no-color         Disable colored output\n");
    output.push_str("  -v, --verbose          Verbose output\n");
    output.push_str("  -h, --help             Print help\n");
    output.push_str("  -V, --version          Print version\n");

    output
}

pub fn print_grouped_help(use_color: bool) {
    print!("{}", get_grouped_help(use_color));
}

/// Prints help for a command by name, falling back to the grouped help.
pub fn print_help_for_command(name: &str, use_color: bool) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help(use_color);
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Transform(TransformCommands),

    #[command(flatten)]
    Inspect(InspectCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum FormArg {
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl From<FormArg> for NormalizationForm {
    fn from(form: FormArg) -> Self {
        match form {
            FormArg::Nfc => NormalizationForm::Nfc,
            FormArg::Nfd => NormalizationForm::Nfd,
            FormArg::Nfkc => NormalizationForm::Nfkc,
            FormArg::Nfkd => NormalizationForm::Nfkd,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SliceModeArg {
    Slice,
    Substring,
    Substr,
}

impl From<SliceModeArg> for SliceMode {
    fn from(mode: SliceModeArg) -> Self {
        match mode {
            SliceModeArg::Slice => SliceMode::Slice,
            SliceModeArg::Substring => SliceMode::Substring,
            SliceModeArg::Substr => SliceMode::Substr,
        }
    }
}

/// Find/replace options shared by `replace` and `highlight`.
#[derive(Args, Debug)]
pub struct PatternArgs {
    /// Treat the search string as a regular expression
    #[arg(short = 'r', long)]
    pub regex: bool,

    /// Regex flags, e.g. "gi" (defaults to the configured flags)
    #[arg(short, long, allow_hyphen_values = true)]
    pub flags: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum TransformCommands {
    /// Capitalize the first letter of every word
    #[command(display_order = 1)]
    Title,

    /// Swap upper and lower case
    #[command(display_order = 2)]
    Swap,

    /// Convert to upper case
    #[command(display_order = 3)]
    Upper,

    /// Convert to lower case
    #[command(display_order = 4)]
    Lower,

    /// Trim and collapse whitespace runs to single spaces
    #[command(display_order = 5)]
    Trim,

    /// Reverse by grapheme cluster
    #[command(display_order = 6)]
    Reverse,

    /// Apply a Unicode normalization form
    #[command(display_order = 7)]
    Normalize {
        #[arg(value_enum, default_value = "nfc")]
        form: FormArg,
    },

    /// Pad to a target length in code points
    #[command(display_order = 8)]
    Pad {
        /// Target length
        width: usize,

        /// Fill string (defaults to the configured pad-char)
        #[arg(long)]
        fill: Option<String>,

        /// Pad at the start instead of the end
        #[arg(long)]
        start: bool,
    },

    /// Extract a range with slice, substring or substr semantics
    #[command(display_order = 9)]
    Slice {
        /// Start index (negative, fractional and NaN values are accepted)
        #[arg(allow_negative_numbers = true)]
        start: f64,

        /// End index (exclusive)
        #[arg(allow_negative_numbers = true)]
        end: Option<f64>,

        /// Index semantics
        #[arg(short, long, value_enum, default_value = "slice")]
        mode: SliceModeArg,
    },

    /// Find and replace (literal or regex)
    #[command(display_order = 10)]
    Replace {
        /// Text or pattern to find
        #[arg(allow_hyphen_values = true)]
        find: String,

        /// Replacement ($1, $&, $<name> are expanded in regex mode)
        #[arg(allow_hyphen_values = true)]
        replacement: String,

        #[command(flatten)]
        pattern: PatternArgs,

        /// Replace every match even without the g flag
        #[arg(short, long)]
        all: bool,
    },

    /// Escape HTML and turn @mentions and #hashtags into links
    #[command(display_order = 11)]
    Linkify,

    /// Make a URL-safe slug
    #[command(display_order = 12)]
    Slug,

    /// Escape HTML special characters
    #[command(display_order = 13)]
    Escape,

    /// Encode UTF-8 as Base64
    #[command(display_order = 14)]
    Encode,

    /// Decode Base64 into UTF-8
    #[command(display_order = 15)]
    Decode,

    /// Fill ${path} placeholders in the input from JSON variables
    #[command(display_order = 16)]
    Interpolate {
        /// JSON object with the variables
        #[arg(long, default_value = "{}")]
        vars: String,

        /// HTML-escape interpolated values
        #[arg(short, long)]
        escape: bool,
    },
}

impl TransformCommands {
    pub fn into_transform(self) -> Transform {
        match self {
            TransformCommands::Title => Transform::TitleCase,
            TransformCommands::Swap => Transform::SwapCase,
            TransformCommands::Upper => Transform::UpperCase,
            TransformCommands::Lower => Transform::LowerCase,
            TransformCommands::Trim => Transform::TrimCollapse,
            TransformCommands::Reverse => Transform::Reverse,
            TransformCommands::Normalize { form } => Transform::Normalize(form.into()),
            TransformCommands::Pad { width, fill, start } => Transform::Pad {
                target_len: width,
                fill,
                side: if start { PadSide::Start } else { PadSide::End },
            },
            TransformCommands::Slice { start, end, mode } => Transform::Slice {
                mode: mode.into(),
                start,
                end,
            },
            TransformCommands::Replace {
                find,
                replacement,
                pattern,
                all,
            } => Transform::Replace {
                find,
                replacement,
                use_regex: pattern.regex,
                flags: pattern.flags,
                force_all: all,
            },
            TransformCommands::Linkify => Transform::Linkify,
            TransformCommands::Slug => Transform::Slugify,
            TransformCommands::Escape => Transform::EscapeHtml,
            TransformCommands::Encode => Transform::Base64Encode,
            TransformCommands::Decode => Transform::Base64Decode,
            TransformCommands::Interpolate { vars, escape } => Transform::Interpolate {
                vars_json: vars,
                escape,
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum InspectCommands {
    /// Count characters, graphemes, bytes, words and lines
    #[command(display_order = 20)]
    Analyze,

    /// Show every match of a search in the input
    #[command(display_order = 21)]
    Highlight {
        /// Text or pattern to find
        #[arg(allow_hyphen_values = true)]
        find: String,

        #[command(flatten)]
        pattern: PatternArgs,

        /// Emit HTML with matches wrapped in the configured marker element
        #[arg(long)]
        html: bool,
    },

    /// Compare string accumulation against a pre-sized join
    #[command(display_order = 22)]
    Bench {
        /// Number of pieces to concatenate
        #[arg(default_value_t = 10_000)]
        size: usize,
    },

    /// List the preset sample texts
    #[command(display_order = 23)]
    Samples,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Start an interactive session reading commands from stdin
    #[command(display_order = 30)]
    Repl,

    /// Get or set configuration
    #[command(display_order = 31)]
    Config {
        /// Configuration key (e.g., pad-char)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for textlab or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

/// One line of input inside `textlab repl`.
#[derive(Parser, Debug)]
#[command(name = "textlab", no_binary_name = true, disable_version_flag = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCommands,
}

#[derive(Subcommand, Debug)]
pub enum ReplCommands {
    #[command(flatten)]
    Transform(TransformCommands),

    #[command(flatten)]
    Inspect(InspectCommands),

    #[command(flatten)]
    Session(SessionCommands),
}

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Replace the current text
    #[command(display_order = 40)]
    Set {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Load a preset sample as the current text
    #[command(display_order = 41)]
    Sample { name: Sample },

    /// Promote the pending result to the current text
    #[command(display_order = 42)]
    Apply,

    /// Drop the pending result
    #[command(display_order = 43)]
    Discard,

    /// Show the current text and pending result
    #[command(display_order = 44)]
    Show,

    /// Leave the session
    #[command(alias = "exit", display_order = 45)]
    Quit,
}
