use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "ldiff",
    version,
    about = "Line-level diff viewer with split and unified views"
)]
pub struct Cli {
    /// Original content: a file path, or - for standard input
    pub old: String,

    /// New content: a file path, or - for standard input
    pub new: String,

    /// Read OLD from this git revision instead of the work tree
    #[arg(long)]
    pub rev: Option<String>,

    /// Show a single unified column instead of side by side
    #[arg(long)]
    pub unified: bool,

    /// Show old and new side by side, overriding a unified config default
    #[arg(long, conflicts_with = "unified")]
    pub split: bool,

    /// Print the diff as JSON
    #[arg(long)]
    pub json: bool,

    /// Print only the added/removed counts
    #[arg(long, conflicts_with = "json")]
    pub stats: bool,

    /// Collapse unchanged runs to N lines of context around each change
    #[arg(short = 'C', long, value_name = "N")]
    pub context: Option<usize>,

    /// Color theme (one-dark, github-dark, dracula)
    #[arg(long)]
    pub theme: Option<String>,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Filename used for the language label (defaults to NEW)
    #[arg(long)]
    pub label: Option<String>,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}
