//! # Callers Command Implementation
//!
//! This module implements the `callers` subcommand, which lists every
//! directory that directly references a module, at any distance up the
//! tree. Unlike `find` it does not follow the callers further, so it shows a
//! single step of the caller graph.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use affected_roots::repository::dir_name;
use affected_roots::search::Search;
use affected_roots::suggestions;

use super::RepoArgs;

/// List the directories that call a module
#[derive(Args, Debug)]
pub struct CallersArgs {
    /// Module directory, relative to the repository root.
    #[arg(value_name = "MODULE_DIR")]
    pub module_dir: PathBuf,

    #[command(flatten)]
    pub repo: RepoArgs,
}

/// Execute the `callers` command.
pub fn execute(args: CallersArgs) -> Result<()> {
    let (repo, rules) = args.repo.load()?;
    let module_dir = repo.resolve(&args.module_dir.to_string_lossy())?;

    let parent = match module_dir.parent() {
        Some(parent) if !repo.is_root_path(&module_dir) => parent,
        _ => anyhow::bail!("The repository root is not a module and has no callers"),
    };

    let search = Search::new(&repo, &rules);
    for caller in search.find_callers(parent, None, &dir_name(&module_dir)) {
        println!("{}", repo.relativize(&caller));
    }

    Ok(())
}
