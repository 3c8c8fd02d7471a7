//! Fresh, sorted directory listings.
//!
//! Listings are never cached: every visit reads the directory again so the
//! search always sees the tree as it is now.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

/// A file or directory inside a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    /// Whether the entry is a symlink to its file or directory.
    pub is_link: bool,
}

/// The immediate files and subdirectories of one directory, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirListing {
    pub files: Vec<Entry>,
    pub dirs: Vec<Entry>,
}

impl DirListing {
    /// Read the immediate entries of `dir`.
    ///
    /// Symlinks are followed to decide whether an entry is a file or a
    /// directory and are marked with [`Entry::is_link`]. Dangling symlinks
    /// and entries that vanish while being inspected are skipped. Returns
    /// `None` when `dir` itself cannot be read.
    pub fn read(dir: &Path) -> Option<Self> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Cannot list {}: {}", dir.display(), e);
                return None;
            }
        };

        let mut listing = DirListing::default();
        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let is_link = file_type.is_symlink();
            let item = Entry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path(),
                is_link,
            };

            if file_type.is_dir() || (is_link && item.path.is_dir()) {
                listing.dirs.push(item);
            } else if file_type.is_file() || (is_link && item.path.is_file()) {
                listing.files.push(item);
            }
        }

        listing.files.sort_by(|a, b| a.name.cmp(&b.name));
        listing.dirs.sort_by(|a, b| a.name.cmp(&b.name));
        Some(listing)
    }
}
