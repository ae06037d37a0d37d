//! taskmaster-verify - check a TaskMaster development environment
//!
//! Usage: taskmaster-verify [--json] [--color <WHEN>] [-v] [--project-root <PATH>]
//!
//! Exits 0 and prints a verification token when every check passes,
//! exits 1 otherwise.

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use taskmaster_verify::presentation::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::cmd_verify(&cli)
}
