//! CLI Argument Parsing
//!
//! Invoked with no arguments the tool runs every check against the current
//! directory. All flags are optional and only change presentation or the
//! directory inspected.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Verify the TaskMaster development environment and issue a verification token
#[derive(Parser, Debug)]
#[command(name = "taskmaster-verify")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Exit status is 0 when every check passes and 1 otherwise.")]
pub struct Cli {
    /// Output format for CI (NDJSON event stream)
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory to inspect (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub project_root: Option<PathBuf>,
}
