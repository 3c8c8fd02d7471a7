//! # Error Handling
//!
//! This module defines the centralized error type for the `affected-roots`
//! library. It uses the `thiserror` library to create an `Error` enum that
//! covers every failure the outer layers can hit, with descriptive messages
//! and, where useful, a hint on how to fix the problem.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors. Each
//!   variant carries the context needed to explain what went wrong.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Note that the search itself (classification, usage search, ascent and the
//! graph walk) never produces an `Error`. Filesystem trouble inside a search
//! branch degrades to "no result in this branch". Errors come from the input
//! edges and from a search that ran out of its visit budget, which is
//! checked once the search is over.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for affected-roots operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file could not be parsed or holds invalid values.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The list of changed files could not be decoded.
    #[error("Invalid changed-file list: {message}")]
    ChangedFiles { message: String },

    /// The repository root is missing, not absolute or not a directory.
    #[error("Invalid repository root {}: {message}", path.display())]
    RepositoryRoot { path: PathBuf, message: String },

    /// A changed file resolves to a location outside the repository.
    #[error("Path escapes the repository: {}", path.display())]
    OutsideRepository { path: PathBuf },

    /// The search ran out of directory visits before it finished.
    #[error("Search stopped after {limit} directory visits, the result would be incomplete")]
    SearchBudgetExhausted { limit: u64 },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON encoding or decoding error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
