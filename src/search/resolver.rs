//! Upward caller resolution.

use std::path::{Path, PathBuf};

use log::debug;

use super::Search;
use crate::repository::dir_name;

impl Search<'_> {
    /// Find every directory that references a module, climbing from
    /// `start_dir` to the top of the repository.
    ///
    /// At each level the usage search runs with the reference as seen from
    /// that level; the climb then moves to the parent, leaving out the child
    /// just searched and prefixing the reference with its name. Users found
    /// at every level are kept. The climb ends after searching a directory
    /// named like the repository root folder, or the repository root itself.
    pub fn find_callers(
        &self,
        start_dir: &Path,
        exclude_child: Option<&str>,
        reference: &str,
    ) -> Vec<PathBuf> {
        let mut callers = Vec::new();
        let mut current = start_dir.to_path_buf();
        let mut exclude = exclude_child.map(str::to_string);
        let mut reference = reference.to_string();

        loop {
            if !self.repo.contains(&current) || self.budget.is_exhausted() {
                break;
            }

            callers.extend(self.find_users(&current, exclude.as_deref(), &reference));

            let name = dir_name(&current);
            if name == self.repo.root_folder_name() || self.repo.is_root_path(&current) {
                break;
            }
            let Some(parent) = current.parent() else {
                break;
            };

            reference = format!("{name}/{reference}");
            current = parent.to_path_buf();
            exclude = Some(name);
            debug!("Climbing to {} looking for {}", current.display(), reference);
        }

        callers
    }
}
