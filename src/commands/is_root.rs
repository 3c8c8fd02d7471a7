//! # Is-Root Command Implementation
//!
//! This module implements the `is-root` subcommand, which reports whether a
//! single directory is a root module. It is a read-only diagnostic for
//! checking how a directory will be classified during `find`.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use affected_roots::search::Search;

use super::RepoArgs;

/// Tell whether a directory is a root module
#[derive(Args, Debug)]
pub struct IsRootArgs {
    /// Directory to classify, relative to the repository root.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    #[command(flatten)]
    pub repo: RepoArgs,
}

/// Execute the `is-root` command.
///
/// Prints `<dir>: root` or `<dir>: module`. A directory that does not exist
/// is reported as a module.
pub fn execute(args: IsRootArgs) -> Result<()> {
    let (repo, rules) = args.repo.load()?;
    let dir = repo.resolve(&args.dir.to_string_lossy())?;

    let search = Search::new(&repo, &rules);
    let kind = if search.is_root(&dir) { "root" } else { "module" };
    println!("{}: {}", repo.relativize(&dir), kind);

    Ok(())
}
