//! # Affected Roots Library
//!
//! This library finds the Terraform root modules affected by a set of changed
//! files, so that a CI pipeline only plans and applies the directories that
//! actually depend on the change. It is used by the `affected-roots`
//! command-line tool but can be embedded in other tooling as well.
//!
//! ## Quick Example
//!
//! ```no_run
//! use affected_roots::config::SearchConfig;
//! use affected_roots::driver::{find_affected_roots, DriverOptions};
//! use affected_roots::repository::Repository;
//!
//! let repo = Repository::new("/work/infra").unwrap();
//! let rules = SearchConfig::default().compile().unwrap();
//! let changed = vec!["modules/network/main.tf".to_string()];
//!
//! let roots = find_affected_roots(&repo, &rules, &changed, DriverOptions::default()).unwrap();
//! println!("{}", affected_roots::report::github(&roots).unwrap());
//! ```
//!
//! ## Core Concepts
//!
//! - **Repository (`repository`)**: the directory every search is confined
//!   to, and the directory name at which the upward climb stops.
//! - **Configuration (`config`)**: the optional `.affected-roots.yaml` file
//!   and the compiled `Rules` (file suffixes, root markers, skipped
//!   directories, visit budget).
//! - **Search (`search`)**: the dependency discovery itself. A root module is
//!   recognized by a provider declaration or a top-level `terraform` block;
//!   callers of a module are found by looking for the relative path to it in
//!   the raw text of every other directory's `.tf` files.
//! - **Driver (`driver`)**: runs the search for every changed file and
//!   deduplicates the affected roots. A run that exceeds the visit budget
//!   fails instead of returning a partial list.
//! - **Report (`report`)**: renders the result, by default as a GitHub
//!   Actions `set-output` command.
//!
//! No HCL is parsed. References are matched as literal substrings, so a path
//! mentioned in a comment is treated like a real module source.

pub mod config;
pub mod defaults;
pub mod driver;
pub mod error;
pub mod report;
pub mod repository;
pub mod search;
pub mod suggestions;

#[cfg(test)]
mod search_proptest;
