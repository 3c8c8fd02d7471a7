//! # Affected Root Search
//!
//! This module holds the dependency-discovery algorithm. Terraform modules
//! reference each other by relative path (`source = "../../modules/network"`),
//! so the "imported-by" graph is never written down anywhere. It is
//! discovered lazily by scanning file contents while crawling the tree in two
//! directions.
//!
//! ## Components
//!
//! The search is split into four layers, each adding an `impl` block to
//! [`Search`]:
//!
//! 1.  **Classification (`classifier`)**: decides whether a directory is a
//!     root module, i.e. one of its `.tf` files opens a provider declaration
//!     or a top-level `terraform` block.
//! 2.  **Usage search (`searcher`)**: crawls *down* from a directory looking
//!     for files that mention a reference string, prefixing the string with
//!     `../` for every level descended.
//! 3.  **Ascent (`resolver`)**: climbs *up* from a module's parent toward the
//!     repository root, running the usage search at every level with the
//!     reference prefixed by the name of the directory just left.
//! 4.  **Graph walk (`walker`)**: starting from a changed file, repeatedly
//!     classifies candidates, recording roots and expanding modules into
//!     their callers until nothing is left.
//!
//! Directory listings ([`listing`]) and line scanning ([`scan`]) sit below
//! all four layers.
//!
//! ## Failure Model
//!
//! None of the components return errors. A directory or file that cannot be
//! read (typically because it vanished mid-run) contributes nothing to the
//! result, and the search carries on with its other branches.
//!
//! There is no visited-set: a directory reachable through several callers is
//! visited once per path. Every directory listing is charged against a
//! [`Budget`] so that reference cycles between non-root modules cannot keep
//! the walk alive forever. A search that runs out of budget stops early;
//! callers must consult [`Budget::check`] before trusting its result.

pub mod classifier;
pub mod listing;
pub mod resolver;
pub mod scan;
pub mod searcher;
pub mod walker;

use std::cell::Cell;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::config::Rules;
use crate::error::{Error, Result};
use crate::repository::Repository;
use listing::{DirListing, Entry};

/// Caps the number of directory listings a search may read.
///
/// Running out is not silent: once a visit has been refused the search
/// stops, and [`Budget::check`] reports the run as failed.
#[derive(Debug)]
pub struct Budget {
    limit: u64,
    used: Cell<u64>,
    refused: Cell<bool>,
}

impl Budget {
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            used: Cell::new(0),
            refused: Cell::new(false),
        }
    }

    /// Charge one visit. Returns `false` once the budget is spent.
    pub fn charge(&self) -> bool {
        let used = self.used.get();
        if used >= self.limit {
            if !self.refused.replace(true) {
                warn!(
                    "Search budget of {} directory visits exhausted, stopping",
                    self.limit
                );
            }
            return false;
        }
        self.used.set(used + 1);
        true
    }

    pub fn used(&self) -> u64 {
        self.used.get()
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Whether a visit has been refused. A search that used exactly the
    /// limit without asking for more is not exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.refused.get()
    }

    /// Fail if the search was cut short.
    pub fn check(&self) -> Result<()> {
        if self.is_exhausted() {
            return Err(Error::SearchBudgetExhausted { limit: self.limit });
        }
        Ok(())
    }
}

/// A single search run over one repository.
///
/// The same `Search` is meant to serve every changed file of a run so the
/// budget applies to the run as a whole.
#[derive(Debug)]
pub struct Search<'a> {
    repo: &'a Repository,
    rules: &'a Rules,
    budget: Budget,
}

impl<'a> Search<'a> {
    pub fn new(repo: &'a Repository, rules: &'a Rules) -> Self {
        Self {
            repo,
            rules,
            budget: Budget::new(rules.max_visits()),
        }
    }

    pub fn repository(&self) -> &Repository {
        self.repo
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Read a fresh listing of `dir`, charging the budget.
    ///
    /// Returns `None` for directories outside the repository, for
    /// directories that cannot be read, and once the budget is spent.
    /// Symlinked subdirectories are kept only when [`Search::follows_link`]
    /// allows them.
    fn list(&self, dir: &Path) -> Option<DirListing> {
        if !self.repo.contains(dir) {
            debug!("Refusing to list {} outside the repository", dir.display());
            return None;
        }
        if !self.budget.charge() {
            return None;
        }
        let mut listing = DirListing::read(dir)?;
        listing
            .dirs
            .retain(|entry| !entry.is_link || self.follows_link(dir, entry));
        Some(listing)
    }

    /// Whether the symlinked subdirectory `entry` of `dir` may be entered.
    ///
    /// The link target must resolve inside the repository and must not be
    /// `dir` itself or one of its ancestors.
    fn follows_link(&self, dir: &Path, entry: &Entry) -> bool {
        if !self.rules.follow_symlinks() {
            return false;
        }
        let resolved = (
            fs::canonicalize(&entry.path),
            fs::canonicalize(self.repo.root()),
            fs::canonicalize(dir),
        );
        let (Ok(target), Ok(root), Ok(parent)) = resolved else {
            return false;
        };
        if !target.starts_with(&root) {
            debug!(
                "Not following {}: it points outside the repository",
                entry.path.display()
            );
            return false;
        }
        if parent.starts_with(&target) {
            debug!(
                "Not following {}: it points back at {}",
                entry.path.display(),
                target.display()
            );
            return false;
        }
        true
    }
}

/// Builders for on-disk module trees used by the search tests.
#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    /// A repository directory named `infra` inside a temporary directory.
    pub struct Tree {
        _temp_dir: TempDir,
        pub root: PathBuf,
    }

    impl Tree {
        /// Create the tree from `(relative path, content)` pairs.
        pub fn new(files: &[(&str, &str)]) -> Self {
            let temp_dir = TempDir::new().unwrap();
            let root = temp_dir.path().join("infra");
            fs::create_dir(&root).unwrap();
            for (path, content) in files {
                let path = root.join(path);
                fs::create_dir_all(path.parent().unwrap()).unwrap();
                fs::write(path, content).unwrap();
            }
            Self {
                _temp_dir: temp_dir,
                root,
            }
        }

        pub fn path(&self, relative: &str) -> PathBuf {
            self.root.join(relative)
        }
    }
}
