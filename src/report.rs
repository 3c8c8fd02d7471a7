//! # Result Formatting
//!
//! Renders the list of affected root directories for the consumer. The
//! default rendering is the workflow command understood by GitHub Actions:
//!
//! ```text
//! ::set-output name=target_folders::["envs/prod","envs/staging"]
//! ```

use crate::defaults::OUTPUT_NAME;
use crate::error::Result;

/// Render roots as a compact JSON array.
pub fn json(roots: &[String]) -> Result<String> {
    Ok(serde_json::to_string(roots)?)
}

/// Render roots as a GitHub Actions `set-output` workflow command.
pub fn github(roots: &[String]) -> Result<String> {
    Ok(format!("::set-output name={}::{}", OUTPUT_NAME, json(roots)?))
}

/// Render roots one per line. An empty list renders as an empty string.
pub fn lines(roots: &[String]) -> String {
    roots.iter().map(|r| format!("{r}\n")).collect()
}
