//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `affected-roots` command-line tool. Each subcommand is defined in its own
//! file to keep the logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic.
//!
//! Commands that search a repository share [`RepoArgs`], which locates the
//! repository and loads its configuration.

pub mod callers;
pub mod completions;
pub mod find;
pub mod is_root;

use anyhow::Result;
use clap::Args;
use log::debug;
use std::path::PathBuf;

use affected_roots::config::{self, Rules, SearchConfig};
use affected_roots::defaults::{DEFAULT_CONFIG_FILENAME, REPO_ROOT_ENV};
use affected_roots::repository::Repository;
use affected_roots::suggestions;

/// Repository location and configuration shared by the search commands
#[derive(Args, Debug)]
pub struct RepoArgs {
    /// Root directory of the repository to search.
    ///
    /// Nothing outside this directory is ever read. Defaults to the
    /// `GITHUB_WORKSPACE` environment variable.
    #[arg(long, value_name = "DIR", env = REPO_ROOT_ENV)]
    pub repo_root: Option<PathBuf>,

    /// Path to a configuration file.
    ///
    /// Defaults to `.affected-roots.yaml` in the repository root when that
    /// file exists, and to the built-in settings otherwise.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl RepoArgs {
    /// Locate the repository and compile the search rules.
    pub fn load(&self) -> Result<(Repository, Rules)> {
        let root = self
            .repo_root
            .as_ref()
            .ok_or_else(suggestions::repo_root_missing)?;
        let root = if root.is_absolute() {
            root.clone()
        } else {
            std::env::current_dir()?.join(root)
        };
        let repo = Repository::new(&root).map_err(|e| suggestions::repo_root_invalid(&root, &e))?;

        let search_config = match &self.config {
            Some(path) => {
                if !path.exists() {
                    return Err(suggestions::config_not_found(path));
                }
                config::from_file(path).map_err(|e| suggestions::config_invalid(path, &e))?
            }
            None => {
                let default_path = repo.root().join(DEFAULT_CONFIG_FILENAME);
                if default_path.is_file() {
                    debug!("Loading configuration from {}", default_path.display());
                    config::from_file(&default_path)
                        .map_err(|e| suggestions::config_invalid(&default_path, &e))?
                } else {
                    SearchConfig::default()
                }
            }
        };

        let rules = search_config
            .compile()
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;
        let repo = match search_config.root_folder_name {
            Some(name) => repo.with_root_folder_name(name),
            None => repo,
        };

        Ok((repo, rules))
    }
}
