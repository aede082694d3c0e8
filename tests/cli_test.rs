// tests/cli_test.rs
//
// Smoke tests for the command-line front-end, run against the compiled
// binary. Fixture repositories come from git2, like the view tests.

use git2::{Oid, Repository, Signature};
use std::process::Command;
use tempfile::TempDir;

fn autover() -> Command {
    Command::new(env!("CARGO_BIN_EXE_autover"))
}

fn commit(repo: &Repository, parents: &[Oid], message: &str) -> Oid {
    let sig = Signature::now("autover tests", "tests@autover.invalid").unwrap();
    let tree_id = {
        let mut index = repo.index().unwrap();
        index.write_tree().unwrap()
    };
    let tree = repo.find_tree(tree_id).unwrap();
    let parent_commits: Vec<_> = parents
        .iter()
        .map(|id| repo.find_commit(*id).unwrap())
        .collect();
    let parent_refs: Vec<_> = parent_commits.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

fn stdout(output: std::process::Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn test_help() {
    let output = autover().arg("--help").output().expect("binary should run");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("autover"));
    assert!(text.contains("SemVer"));
}

#[test]
fn test_non_git_directory_degrades_to_default() {
    let dir = TempDir::new().unwrap();
    let output = autover()
        .arg(dir.path())
        .output()
        .expect("binary should run");
    assert_eq!(stdout(output), "0.0.0-alpha.0");
}

#[test]
fn test_release_tag_on_head() {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    let c1 = commit(&repo, &[], "initial");
    let object = repo.find_object(c1, None).unwrap();
    repo.tag_lightweight("v1.2.3", &object, false).unwrap();

    let output = autover()
        .arg(dir.path())
        .output()
        .expect("binary should run");
    assert_eq!(stdout(output), "1.2.3");
}

#[test]
fn test_show_selects_a_component() {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    let c1 = commit(&repo, &[], "initial");
    let object = repo.find_object(c1, None).unwrap();
    repo.tag_lightweight("v1.2.3", &object, false).unwrap();

    let patch = autover()
        .arg(dir.path())
        .args(["--show", "patch"])
        .output()
        .expect("binary should run");
    assert_eq!(stdout(patch), "3");

    let prerelease = autover()
        .arg(dir.path())
        .args(["--show", "prerelease"])
        .output()
        .expect("binary should run");
    assert_eq!(stdout(prerelease), "");
}

#[test]
fn test_flags_override_defaults() {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    let c1 = commit(&repo, &[], "initial");
    let object = repo.find_object(c1, None).unwrap();
    repo.tag_lightweight("v1.0.0", &object, false).unwrap();
    commit(&repo, &[c1], "second");

    let output = autover()
        .arg(dir.path())
        .args(["--auto-increment", "major", "--build-metadata", "ci.42"])
        .output()
        .expect("binary should run");
    assert_eq!(stdout(output), "2.0.0-alpha.0.1+ci.42");
}

#[test]
fn test_invalid_build_metadata_fails_loudly() {
    let dir = TempDir::new().unwrap();
    let output = autover()
        .arg(dir.path())
        .args(["--build-metadata", "not valid"])
        .output()
        .expect("binary should run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"));
}

#[test]
fn test_config_file_flag() {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    let c1 = commit(&repo, &[], "initial");
    let object = repo.find_object(c1, None).unwrap();
    repo.tag_lightweight("rel-0.4.0", &object, false).unwrap();

    let config_path = dir.path().join("versioning.toml");
    std::fs::write(&config_path, "tag_prefix = \"rel-\"\n").unwrap();

    let output = autover()
        .arg(dir.path())
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("binary should run");
    assert_eq!(stdout(output), "0.4.0");
}
