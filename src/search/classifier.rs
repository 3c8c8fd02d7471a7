//! Root module classification.

use std::path::Path;

use log::debug;

use super::{scan, Search};

impl Search<'_> {
    /// Whether `dir` is a root module.
    ///
    /// A directory is a root when any of its own configuration files has a
    /// line starting with one of the root markers. Subdirectories are not
    /// consulted. A directory that cannot be read is not a root.
    pub fn is_root(&self, dir: &Path) -> bool {
        let Some(listing) = self.list(dir) else {
            return false;
        };

        let found = listing
            .files
            .iter()
            .filter(|file| self.rules.is_config_file(&file.name))
            .any(|file| scan::any_line(&file.path, |line| self.rules.is_root_marker(line)));

        debug!(
            "{} is {}",
            dir.display(),
            if found { "a root module" } else { "not a root module" }
        );
        found
    }
}
