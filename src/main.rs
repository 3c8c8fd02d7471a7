//! # Affected Roots CLI
//!
//! This is the binary entry point for the `affected-roots` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging on stderr so stdout only carries results.
//! - Executing the appropriate command based on the parsed arguments.
//!
//! The core logic lives in the `affected_roots` library crate; the binary is
//! a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
