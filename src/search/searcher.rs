//! Downward usage search.

use std::path::{Path, PathBuf};

use log::debug;

use super::{scan, Search};

impl Search<'_> {
    /// Find the directories at or below `dir` whose files mention `reference`.
    ///
    /// The files of a directory are checked first; the first line containing
    /// `reference` makes that directory a user and its subdirectories are not
    /// searched. Otherwise each subdirectory is searched with `reference`
    /// prefixed by one more `../`, and every subdirectory contributes its own
    /// users. `exclude_child` names a subdirectory of `dir` itself to leave
    /// out. Hidden and skipped directories are never entered.
    ///
    /// Users are returned in depth-first pre-order.
    pub fn find_users(&self, dir: &Path, exclude_child: Option<&str>, reference: &str) -> Vec<PathBuf> {
        let mut users = Vec::new();
        let mut pending = vec![(dir.to_path_buf(), reference.to_string())];

        while let Some((current, reference)) = pending.pop() {
            let Some(listing) = self.list(&current) else {
                continue;
            };

            let referenced = listing
                .files
                .iter()
                .filter(|file| self.rules.is_config_file(&file.name))
                .any(|file| scan::contains(&file.path, &reference));
            if referenced {
                debug!("{} references {}", current.display(), reference);
                users.push(current);
                continue;
            }

            let exclude = if current == dir { exclude_child } else { None };
            let nested = format!("../{reference}");
            for sub in listing.dirs.iter().rev() {
                if exclude == Some(sub.name.as_str()) || self.rules.skips_dir(&sub.name) {
                    continue;
                }
                pending.push((sub.path.clone(), nested.clone()));
            }
        }

        users
    }
}
