//! Default values for affected-roots configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

/// Name of the optional configuration file looked up in the repository root.
pub const DEFAULT_CONFIG_FILENAME: &str = ".affected-roots.yaml";

/// Environment variable consulted for the repository root.
///
/// GitHub Actions sets this to the checkout directory.
pub const REPO_ROOT_ENV: &str = "GITHUB_WORKSPACE";

/// Environment variable consulted for the changed-file list.
pub const CHANGED_FILES_ENV: &str = "CHANGED_FILES";

/// Name of the output emitted by the `github` output format.
pub const OUTPUT_NAME: &str = "target_folders";

/// Upper bound on directory visits for a single run.
pub const DEFAULT_MAX_VISITS: u64 = 1_000_000;

/// File suffixes scanned by default.
pub fn default_extensions() -> Vec<String> {
    vec![".tf".to_string()]
}

/// Line prefixes marking a directory as a root module.
///
/// A provider declaration or a top-level `terraform` settings block.
pub fn default_root_markers() -> Vec<String> {
    vec!["provider \"".to_string(), "terraform {".to_string()]
}

pub fn default_max_visits() -> u64 {
    DEFAULT_MAX_VISITS
}

/// Symlinked directories inside the repository are searched by default.
pub fn default_follow_symlinks() -> bool {
    true
}
