//! # Find Command Implementation
//!
//! This module implements the `find` subcommand, which takes the list of files
//! changed in a commit or pull request and prints every root module that
//! depends on them.
//!
//! ## Functionality
//!
//! - **Input**: a JSON array of paths relative to the repository root (the
//!   default), or a whitespace-separated list with `--input-format list`. The
//!   list is read from `--changed-files` or the `CHANGED_FILES` environment
//!   variable.
//! - **Search**: each changed file is resolved to its root modules by
//!   climbing the caller graph (see `affected_roots::search`).
//! - **Output**: the deduplicated roots, by default as a GitHub Actions
//!   `::set-output name=target_folders::[...]` line.
//!
//! A malformed list or a path outside the repository fails the command
//! before anything is printed. So does a search that runs out of its visit
//! budget: a partial list of roots is never printed.

use anyhow::Result;
use clap::{Args, ValueEnum};

use affected_roots::defaults::CHANGED_FILES_ENV;
use affected_roots::driver::{self, DriverOptions};
use affected_roots::report;
use affected_roots::suggestions;

use super::RepoArgs;

/// Find the root modules affected by a list of changed files
#[derive(Args, Debug)]
pub struct FindArgs {
    /// The changed files, relative to the repository root.
    #[arg(long, value_name = "LIST", env = CHANGED_FILES_ENV)]
    pub changed_files: Option<String>,

    /// How the changed-file list is encoded.
    #[arg(long, value_enum, default_value = "json")]
    pub input_format: InputFormat,

    /// How the affected roots are printed.
    #[arg(short, long, value_enum, default_value = "github")]
    pub format: OutputFormat,

    /// Skip changed files that are not configuration files.
    #[arg(long)]
    pub only_config_files: bool,

    #[command(flatten)]
    pub repo: RepoArgs,
}

/// Encoding of the changed-file list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum InputFormat {
    /// A JSON array of strings
    #[default]
    Json,
    /// Paths separated by whitespace
    List,
}

/// Rendering of the affected roots
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// A GitHub Actions `set-output` workflow command
    #[default]
    Github,
    /// A JSON array
    Json,
    /// One directory per line
    Lines,
}

/// Execute the `find` command.
pub fn execute(args: FindArgs) -> Result<()> {
    let (repo, rules) = args.repo.load()?;

    let input = args
        .changed_files
        .as_deref()
        .ok_or_else(suggestions::changed_files_missing)?;
    let changed_files = match args.input_format {
        InputFormat::Json => {
            driver::parse_json_list(input).map_err(|e| suggestions::changed_files_invalid(&e))?
        }
        InputFormat::List => driver::parse_plain_list(input),
    };

    let options = DriverOptions {
        only_config_files: args.only_config_files,
    };
    let roots = driver::find_affected_roots(&repo, &rules, &changed_files, options)
        .map_err(suggestions::search_failed)?;

    match args.format {
        OutputFormat::Github => println!("{}", report::github(&roots)?),
        OutputFormat::Json => println!("{}", report::json(&roots)?),
        OutputFormat::Lines => print!("{}", report::lines(&roots)),
    }

    Ok(())
}
