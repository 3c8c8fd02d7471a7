//! Walking the caller graph from a changed file up to its root modules.

use std::path::Path;

use log::{debug, info};

use super::Search;
use crate::repository::dir_name;

impl Search<'_> {
    /// Find the root modules affected by a change to `changed_file`.
    ///
    /// `changed_file` is an absolute path inside the repository; the file
    /// itself need not exist any more. The directory holding it is the first
    /// candidate. Each candidate that is a root is recorded relative to the
    /// repository root; any other candidate is treated as a module and its
    /// callers become new candidates. Candidates are processed last in,
    /// first out and there is no visited-set, so a root reachable along
    /// several caller chains is reported once per chain.
    pub fn find_roots_for(&self, changed_file: &Path) -> Vec<String> {
        let Some(start) = changed_file.parent() else {
            return Vec::new();
        };

        let mut roots = Vec::new();
        let mut candidates = vec![start.to_path_buf()];

        while let Some(candidate) = candidates.pop() {
            if self.budget.is_exhausted() {
                break;
            }

            if self.is_root(&candidate) {
                let root = self.repo.relativize(&candidate);
                info!("{} affects root {}", changed_file.display(), root);
                roots.push(root);
                continue;
            }

            if self.repo.is_root_path(&candidate) || !self.repo.contains(&candidate) {
                debug!("{} has no callers to look for", candidate.display());
                continue;
            }
            let Some(parent) = candidate.parent() else {
                continue;
            };

            let module_name = dir_name(&candidate);
            let callers = self.find_callers(parent, None, &module_name);
            debug!(
                "Module {} has {} caller(s)",
                self.repo.relativize(&candidate),
                callers.len()
            );
            candidates.extend(callers);
        }

        roots
    }
}
