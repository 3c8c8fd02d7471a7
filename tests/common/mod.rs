//! Shared test utilities for the CLI end-to-end tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_file("envs/prod/main.tf", trees::ROOT);
//!     fixture.command().arg("is-root").arg("envs/prod").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::trees;
    pub use super::TestFixture;
}

/// Terraform file contents used to build repositories.
#[allow(dead_code)]
pub mod trees {
    /// A root module with a settings block.
    pub const ROOT: &str = "terraform {\n  required_version = \">= 1.5\"\n}\n";

    /// A plain module with no root markers.
    pub const MODULE: &str = "resource \"aws_vpc\" \"this\" {\n  cidr_block = var.cidr\n}\n";

    /// A root calling `modules/network` from two levels down.
    pub const PROD: &str = r#"terraform {
  backend "s3" {}
}

provider "aws" {
  region = "eu-west-1"
}

module "network" {
  source = "../../modules/network"
}
"#;
}

/// A test fixture that provides a temporary repository directory.
///
/// The repository lives in an `infra` directory inside the temp dir so the
/// climb always ends at a predictable folder name.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty repository.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("infra")
            .create_dir_all()
            .expect("Failed to create repository directory");
        Self { temp_dir }
    }

    /// Add a file at a path relative to the repository root.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// The basic repository: one module used by one root.
    #[allow(dead_code)]
    pub fn with_network_scenario(self) -> Self {
        self.with_file("modules/network/main.tf", trees::MODULE)
            .with_file("envs/prod/main.tf", trees::PROD)
    }

    /// Get the path to the repository root.
    pub fn repo_root(&self) -> PathBuf {
        self.temp_dir.path().join("infra")
    }

    /// Get the path to the temporary directory holding the repository.
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the repository.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child("infra").child(path)
    }

    /// Create a command with a clean environment, run from the repository.
    ///
    /// `GITHUB_WORKSPACE`, `CHANGED_FILES` and `RUST_LOG` are removed so
    /// that tests do not pick up values from a CI runner.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("affected-roots");
        cmd.current_dir(self.repo_root())
            .env_remove("GITHUB_WORKSPACE")
            .env_remove("CHANGED_FILES")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Create a `find` command for the given JSON list of changed files.
    #[allow(dead_code)]
    pub fn find(&self, changed_files: &str) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("find")
            .arg("--repo-root")
            .arg(self.repo_root())
            .arg("--changed-files")
            .arg(changed_files);
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
