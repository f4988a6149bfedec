// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BSD_CONFIG: &str = r#"{
    "Licenses": [["BSD line1", "BSD line2"]],
    "GoPkg": "pkg/",
    "Accept": [".*\\.go"],
    "Reject": [".*_test\\.go"]
}"#;

/// A repository whose index tracks `files`; content is written to disk.
fn repo_with(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();
    let mut index = repo.index().unwrap();

    for (path, content) in files {
        let full = dir.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(&full, content).unwrap();
        index.add_path(Path::new(path)).unwrap();
    }
    index.write().unwrap();

    dir
}

fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("checklicenses.json"), content).unwrap();
}

fn checklicenses(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("checklicenses").unwrap();
    cmd.current_dir(dir.path()).env_remove("CHECKLICENSES_CONFIG");
    cmd
}

#[test]
fn compliant_repo_exits_cleanly() {
    let dir = repo_with(&[("pkg/a.go", "BSD line1\nBSD line2\nrest")]);
    write_config(&dir, BSD_CONFIG);

    checklicenses(&dir)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn violations_are_listed_trimmed() {
    let dir = repo_with(&[
        ("pkg/a.go", "BSD line1\nBSD line2\nrest"),
        ("pkg/b.go", "wrong header"),
        ("pkg/c_test.go", "no header either"),
        ("pkg/d.go", "BSD line1\n"),
    ]);
    write_config(&dir, BSD_CONFIG);

    checklicenses(&dir)
        .assert()
        .code(1)
        .stdout("b.go\nd.go\n");
}

#[test]
fn absolute_flag_keeps_prefix() {
    let dir = repo_with(&[("pkg/b.go", "wrong header")]);
    write_config(&dir, BSD_CONFIG);

    checklicenses(&dir)
        .arg("-a")
        .assert()
        .code(1)
        .stdout("pkg/b.go\n");
}

#[test]
fn untracked_files_are_ignored() {
    let dir = repo_with(&[("pkg/a.go", "BSD line1\nBSD line2\n")]);
    write_config(&dir, BSD_CONFIG);
    fs::write(dir.path().join("pkg/untracked.go"), "nothing").unwrap();

    checklicenses(&dir).assert().success();
}

#[test]
fn walk_mode_sees_untracked_files() {
    let dir = repo_with(&[("pkg/a.go", "BSD line1\nBSD line2\n")]);
    write_config(&dir, BSD_CONFIG);
    fs::write(dir.path().join("pkg/untracked.go"), "nothing").unwrap();

    checklicenses(&dir)
        .arg("--walk")
        .assert()
        .code(1)
        .stdout("untracked.go\n");
}

#[test]
fn malformed_license_aborts() {
    let dir = repo_with(&[("pkg/a.go", "anything")]);
    write_config(&dir, r#"{"Licenses": [["Copyright (c"]]}"#);

    checklicenses(&dir)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("license #0"));
}

#[test]
fn malformed_json_aborts() {
    let dir = repo_with(&[]);
    write_config(&dir, "{ \"Licenses\": ");

    checklicenses(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("JSON"));
}

#[test]
fn empty_repo_is_clean() {
    let dir = repo_with(&[]);
    write_config(&dir, BSD_CONFIG);

    checklicenses(&dir)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn tracked_but_deleted_file_is_fatal() {
    let dir = repo_with(&[("pkg/a.go", "BSD line1\nBSD line2\n")]);
    write_config(&dir, BSD_CONFIG);
    fs::remove_file(dir.path().join("pkg/a.go")).unwrap();

    checklicenses(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("pkg/a.go"));
}

#[test]
fn outside_repository_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, BSD_CONFIG);

    checklicenses(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not a git repository"));
}

#[test]
fn explicit_toml_config() {
    let dir = repo_with(&[("src/lib.rs", "// SPDX-License-Identifier: MIT\n")]);
    fs::write(
        dir.path().join("rules.toml"),
        "Licenses = [[\"// SPDX-License-Identifier: MIT\"]]\nAccept = ['.*\\.rs']\n",
    )
    .unwrap();

    checklicenses(&dir)
        .args(["-c", "rules.toml"])
        .assert()
        .success();
}

#[test]
fn json_report() {
    let dir = repo_with(&[("pkg/b.go", "wrong header"), ("README.md", "# readme")]);
    write_config(&dir, BSD_CONFIG);

    let output = checklicenses(&dir)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["violations"], serde_json::json!(["b.go"]));
    assert_eq!(report["checked"], 1);
    assert_eq!(report["excluded"], 1);
}

#[test]
fn prefix_from_environment() {
    let dir = repo_with(&[("mod/x/b.go", "wrong header")]);
    write_config(
        &dir,
        r#"{"Licenses": [["BSD"]], "GoPkg": "$MODROOT/", "Accept": [".*\\.go"]}"#,
    );

    checklicenses(&dir)
        .env("MODROOT", "mod/x")
        .assert()
        .code(1)
        .stdout("b.go\n");
}
