//! # Error Suggestions
//!
//! This module provides helper functions for generating helpful error
//! messages with hints and suggestions. Errors should tell users what went
//! wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use affected_roots::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("Repository root not set");
//!
//! // Use:
//! return Err(suggestions::repo_root_missing());
//! ```

use std::path::Path;

use crate::defaults::{CHANGED_FILES_ENV, DEFAULT_CONFIG_FILENAME, REPO_ROOT_ENV};

/// Generate an error for when no repository root was given.
pub fn repo_root_missing() -> anyhow::Error {
    anyhow::anyhow!(
        "Repository root not set\n\n\
         hint: Pass --repo-root <DIR>\n\
         hint: Or set the {REPO_ROOT_ENV} environment variable (set automatically in GitHub Actions)"
    )
}

/// Generate an error for an unusable repository root.
pub fn repo_root_invalid(path: &Path, error: &crate::error::Error) -> anyhow::Error {
    anyhow::anyhow!(
        "{error}\n\n\
         hint: The repository root must be an existing directory, got {path}\n\
         hint: Relative paths are resolved against the current directory",
        path = path.display()
    )
}

/// Generate an error for an undecodable changed-file list.
pub fn changed_files_invalid(error: &crate::error::Error) -> anyhow::Error {
    anyhow::anyhow!(
        "{error}\n\n\
         hint: Pass a JSON array such as '[\"modules/network/main.tf\"]'\n\
         hint: Use --input-format list for a whitespace-separated list\n\
         hint: The list can also come from the {CHANGED_FILES_ENV} environment variable"
    )
}

/// Generate an error for when no changed-file list was given.
pub fn changed_files_missing() -> anyhow::Error {
    anyhow::anyhow!(
        "No changed files given\n\n\
         hint: Pass --changed-files '<JSON array>'\n\
         hint: Or set the {CHANGED_FILES_ENV} environment variable"
    )
}

/// Generate an error for a search that ran out of directory visits.
pub fn search_budget_exhausted(limit: u64) -> anyhow::Error {
    anyhow::anyhow!(
        "Search stopped after {limit} directory visits before finishing\n\n\
         hint: Raise max_visits in {DEFAULT_CONFIG_FILENAME} (currently {limit})\n\
         hint: A low limit is usually reached because modules reference each other in a cycle"
    )
}

/// Wrap a library error from a search, adding hints where there are any.
pub fn search_failed(error: crate::error::Error) -> anyhow::Error {
    match error {
        crate::error::Error::SearchBudgetExhausted { limit } => search_budget_exhausted(limit),
        other => other.into(),
    }
}

/// Generate an error for when the configuration file is not found.
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration file not found: {path}\n\n\
         hint: Omit --config to use .affected-roots.yaml from the repository root, if present\n\
         hint: Without any configuration file the built-in defaults are used",
        path = path.display()
    )
}

/// Generate an error for an invalid configuration file.
pub fn config_invalid(path: &Path, error: &crate::error::Error) -> anyhow::Error {
    anyhow::anyhow!(
        "Failed to load config from {path}: {error}",
        path = path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_repo_root_missing() {
        let error = repo_root_missing().to_string();
        assert!(error.contains("Repository root not set"));
        assert!(error.contains("--repo-root"));
        assert!(error.contains(REPO_ROOT_ENV));
    }

    #[test]
    fn test_changed_files_invalid_keeps_cause() {
        let cause = Error::ChangedFiles {
            message: "expected a JSON array of strings".to_string(),
        };
        let error = changed_files_invalid(&cause).to_string();
        assert!(error.contains("Invalid changed-file list"));
        assert!(error.contains("--input-format list"));
    }

    #[test]
    fn test_search_budget_exhausted() {
        let error = search_budget_exhausted(12).to_string();
        assert!(error.contains("12 directory visits"));
        assert!(error.contains("hint: Raise max_visits"));
    }

    #[test]
    fn test_search_failed_adds_hint_for_budget() {
        let error = search_failed(Error::SearchBudgetExhausted { limit: 5 }).to_string();
        assert!(error.contains("hint:"));

        let error = search_failed(Error::OutsideRepository {
            path: "../x".into(),
        })
        .to_string();
        assert!(error.contains("Path escapes the repository"));
    }

    #[test]
    fn test_config_not_found() {
        let error = config_not_found(Path::new("custom.yaml")).to_string();
        assert!(error.contains("Configuration file not found: custom.yaml"));
        assert!(error.contains("hint:"));
    }

    #[test]
    fn test_config_invalid() {
        let cause = Error::ConfigParse {
            message: "max_visits must be greater than zero".to_string(),
            hint: None,
        };
        let error = config_invalid(Path::new(".affected-roots.yaml"), &cause).to_string();
        assert!(error.contains("Failed to load config from .affected-roots.yaml"));
        assert!(error.contains("max_visits"));
    }
}
