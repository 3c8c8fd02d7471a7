//! # Search Configuration
//!
//! This module defines the optional `.affected-roots.yaml` configuration file
//! and the compiled [`Rules`] the search components consult.
//!
//! Every key is optional; an empty file (or no file at all) yields the
//! defaults from [`crate::defaults`]:
//!
//! ```yaml
//! # File suffixes whose lines are scanned
//! extensions: [".tf"]
//! # Line prefixes that mark a directory as a root module
//! root_markers: ['provider "', 'terraform {']
//! # Directory name at which the upward climb stops
//! # (defaults to the name of the repository directory)
//! root_folder_name: terraform
//! # Glob patterns for directory names never searched
//! skip_dirs: ["node_modules"]
//! # Upper bound on directory visits in one run
//! max_visits: 1000000
//! # Descend into symlinked directories that stay inside the repository
//! follow_symlinks: true
//! ```

use std::path::Path;

use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{Error, Result};

/// The raw configuration as written in the YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// File name suffixes treated as configuration files.
    #[serde(default = "defaults::default_extensions")]
    pub extensions: Vec<String>,

    /// Literal line prefixes identifying a root module.
    #[serde(default = "defaults::default_root_markers")]
    pub root_markers: Vec<String>,

    /// Directory name that ends the upward climb.
    #[serde(default)]
    pub root_folder_name: Option<String>,

    /// Glob patterns matched against directory names to skip.
    #[serde(default)]
    pub skip_dirs: Vec<String>,

    /// Maximum number of directory listings read in a single run.
    #[serde(default = "defaults::default_max_visits")]
    pub max_visits: u64,

    /// Whether symlinked directories are searched.
    #[serde(default = "defaults::default_follow_symlinks")]
    pub follow_symlinks: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            extensions: defaults::default_extensions(),
            root_markers: defaults::default_root_markers(),
            root_folder_name: None,
            skip_dirs: Vec::new(),
            max_visits: defaults::DEFAULT_MAX_VISITS,
            follow_symlinks: defaults::default_follow_symlinks(),
        }
    }
}

impl SearchConfig {
    /// Validate the configuration and compile it into [`Rules`].
    pub fn compile(&self) -> Result<Rules> {
        if self.extensions.is_empty() || self.extensions.iter().any(|e| e.is_empty()) {
            return Err(Error::ConfigParse {
                message: "extensions must list at least one non-empty suffix".to_string(),
                hint: Some("Remove the key to scan \".tf\" files".to_string()),
            });
        }

        if self.root_markers.is_empty() || self.root_markers.iter().any(|m| m.is_empty()) {
            return Err(Error::ConfigParse {
                message: "root_markers must list at least one non-empty prefix".to_string(),
                hint: Some("Remove the key to use the default markers".to_string()),
            });
        }

        if self.max_visits == 0 {
            return Err(Error::ConfigParse {
                message: "max_visits must be greater than zero".to_string(),
                hint: None,
            });
        }

        if let Some(name) = &self.root_folder_name {
            if name.is_empty() || name.contains('/') {
                return Err(Error::ConfigParse {
                    message: format!("root_folder_name must be a single directory name, got {name:?}"),
                    hint: Some("Use the bare name, e.g. \"terraform\"".to_string()),
                });
            }
        }

        let skip_dirs = self
            .skip_dirs
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Rules {
            extensions: self.extensions.clone(),
            root_markers: self.root_markers.clone(),
            skip_dirs,
            max_visits: self.max_visits,
            follow_symlinks: self.follow_symlinks,
        })
    }
}

/// Parse a YAML string into a [`SearchConfig`].
///
/// A document that is empty or holds only comments yields the defaults.
pub fn parse(yaml_content: &str) -> Result<SearchConfig> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml_content)?;
    if value.is_null() {
        return Ok(SearchConfig::default());
    }

    serde_yaml::from_value(value).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some(
            concat!(
                "Valid keys are extensions, root_markers, root_folder_name, ",
                "skip_dirs, max_visits, follow_symlinks"
            )
            .to_string(),
        ),
    })
}

/// Load a [`SearchConfig`] from a file
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SearchConfig> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

/// Compiled matching rules shared by every search component.
#[derive(Debug, Clone)]
pub struct Rules {
    extensions: Vec<String>,
    root_markers: Vec<String>,
    skip_dirs: Vec<Pattern>,
    max_visits: u64,
    follow_symlinks: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            extensions: defaults::default_extensions(),
            root_markers: defaults::default_root_markers(),
            skip_dirs: Vec::new(),
            max_visits: defaults::DEFAULT_MAX_VISITS,
            follow_symlinks: defaults::default_follow_symlinks(),
        }
    }
}

impl Rules {
    /// Whether a file name carries one of the recognized suffixes.
    pub fn is_config_file(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext))
    }

    /// Whether a line opens a provider declaration or settings block.
    pub fn is_root_marker(&self, line: &str) -> bool {
        self.root_markers.iter().any(|marker| line.starts_with(marker))
    }

    /// Whether a directory is never descended into.
    ///
    /// Hidden directories are always skipped.
    pub fn skips_dir(&self, dir_name: &str) -> bool {
        dir_name.starts_with('.') || self.skip_dirs.iter().any(|p| p.matches(dir_name))
    }

    pub fn max_visits(&self) -> u64 {
        self.max_visits
    }

    pub fn follow_symlinks(&self) -> bool {
        self.follow_symlinks
    }
}
