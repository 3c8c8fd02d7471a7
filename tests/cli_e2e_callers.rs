//! End-to-end tests for the `affected-roots callers` command.

mod common;
use common::prelude::*;

#[test]
fn test_callers_lists_direct_callers_only() {
    let fixture = TestFixture::new()
        .with_file("modules/vpc/main.tf", trees::MODULE)
        .with_file("modules/network/main.tf", "module \"vpc\" {\n  source = \"../vpc\"\n}\n")
        .with_file("envs/prod/main.tf", trees::PROD);

    fixture
        .command()
        .arg("callers")
        .arg("modules/vpc")
        .arg("--repo-root")
        .arg(fixture.repo_root())
        .assert()
        .success()
        .stdout("modules/network\n");
}

#[test]
fn test_callers_across_the_tree() {
    let fixture = TestFixture::new().with_network_scenario();

    fixture
        .command()
        .arg("callers")
        .arg("modules/network")
        .arg("--repo-root")
        .arg(fixture.repo_root())
        .assert()
        .success()
        .stdout("envs/prod\n");
}

#[test]
fn test_callers_of_unused_module() {
    let fixture = TestFixture::new()
        .with_network_scenario()
        .with_file("modules/unused/main.tf", trees::MODULE);

    fixture
        .command()
        .arg("callers")
        .arg("modules/unused")
        .arg("--repo-root")
        .arg(fixture.repo_root())
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_callers_of_repository_root_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("callers")
        .arg(".")
        .arg("--repo-root")
        .arg(fixture.repo_root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no callers"));
}
