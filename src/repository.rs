//! # Repository Bounds
//!
//! A [`Repository`] is the absolute directory every search is confined to.
//! It knows how to turn changed-file paths into absolute locations inside
//! itself, how to report discovered directories relative to itself, and the
//! directory name at which the upward climb of a search stops.
//!
//! All path handling here is lexical: changed files may already be deleted
//! from the working tree, so nothing is canonicalized through the filesystem.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// The directory tree searched for root modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    root: PathBuf,
    root_folder_name: String,
}

impl Repository {
    /// Create a repository bounded by `root`.
    ///
    /// The root must be an absolute path to an existing directory. The
    /// root-folder name defaults to the last component of the path.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_absolute() {
            return Err(Error::RepositoryRoot {
                path: root.to_path_buf(),
                message: "path must be absolute".to_string(),
            });
        }

        let root = normalize(root);
        if !root.is_dir() {
            return Err(Error::RepositoryRoot {
                path: root,
                message: "not a directory".to_string(),
            });
        }

        let root_folder_name = dir_name(&root);
        Ok(Self {
            root,
            root_folder_name,
        })
    }

    /// Override the directory name that ends the upward climb.
    pub fn with_root_folder_name(mut self, name: impl Into<String>) -> Self {
        self.root_folder_name = name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn root_folder_name(&self) -> &str {
        &self.root_folder_name
    }

    /// Whether `path` lies inside the repository (the root included).
    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.root)
    }

    /// Whether `path` is the repository root itself.
    pub fn is_root_path(&self, path: &Path) -> bool {
        path == self.root
    }

    /// Resolve a path given relative to the repository root (or absolute)
    /// into an absolute path inside the repository.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        let candidate = Path::new(path);
        let resolved = if candidate.is_absolute() {
            normalize(candidate)
        } else {
            normalize(&self.root.join(candidate))
        };

        if !self.contains(&resolved) {
            return Err(Error::OutsideRepository {
                path: PathBuf::from(path),
            });
        }
        Ok(resolved)
    }

    /// Express a directory relative to the repository root using `/`
    /// separators. The root itself is reported as `.`.
    pub fn relativize(&self, path: &Path) -> String {
        let Ok(relative) = path.strip_prefix(&self.root) else {
            return path.to_string_lossy().into_owned();
        };

        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if parts.is_empty() {
            ".".to_string()
        } else {
            parts.join("/")
        }
    }
}

/// The final component of a path as an owned string, empty for `/`.
pub fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Remove `.` components and fold `..` into its parent without touching
/// the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
