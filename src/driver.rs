//! # Driver
//!
//! Runs the root search for a whole change set: decodes the changed-file
//! list, resolves every path inside the repository, walks the caller graph
//! once per file and merges the results.
//!
//! Input problems are detected before any searching starts, so a bad entry
//! anywhere in the list fails the run without producing partial output. A
//! search that runs out of its visit budget fails the run as well, rather
//! than returning the roots it managed to find.

use std::collections::HashSet;

use log::{debug, info};

use crate::config::Rules;
use crate::error::{Error, Result};
use crate::repository::Repository;
use crate::search::Search;

/// Decode a JSON array of changed-file paths.
pub fn parse_json_list(input: &str) -> Result<Vec<String>> {
    serde_json::from_str::<Vec<String>>(input).map_err(|e| Error::ChangedFiles {
        message: format!("expected a JSON array of strings ({e})"),
    })
}

/// Split a whitespace-separated list of changed-file paths.
pub fn parse_plain_list(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// Options for [`find_affected_roots`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverOptions {
    /// Ignore changed files without a recognized configuration suffix.
    pub only_config_files: bool,
}

/// Find every root module affected by the given changed files.
///
/// Paths are relative to the repository root (absolute paths inside the
/// repository are accepted too). The result holds each root once, in the
/// order it was first discovered.
///
/// Fails with [`Error::SearchBudgetExhausted`] when the walk needed more
/// directory visits than the rules allow.
pub fn find_affected_roots(
    repo: &Repository,
    rules: &Rules,
    changed_files: &[String],
    options: DriverOptions,
) -> Result<Vec<String>> {
    let mut targets = Vec::new();
    for changed in changed_files {
        let trimmed = changed.trim();
        if trimmed.is_empty() {
            continue;
        }
        let path = repo.resolve(trimmed)?;
        if options.only_config_files {
            let name = crate::repository::dir_name(&path);
            if !rules.is_config_file(&name) {
                debug!("Skipping {}: not a configuration file", trimmed);
                continue;
            }
        }
        targets.push((trimmed, path));
    }

    let search = Search::new(repo, rules);
    let mut seen = HashSet::new();
    let mut roots = Vec::new();
    for (changed, path) in targets {
        let found = search.find_roots_for(&path);
        debug!("{} resolved to {} root(s)", changed, found.len());
        for root in found {
            if seen.insert(root.clone()) {
                roots.push(root);
            }
        }
    }

    search.budget().check()?;
    info!(
        "Found {} affected root(s) after {} directory visits",
        roots.len(),
        search.budget().used()
    );
    Ok(roots)
}
