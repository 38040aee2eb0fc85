//! End-to-end tests for the patcheck binary

mod common;

use assert_cmd::Command;
use common::{TestResult, write_go};
use predicates::prelude::*;

const INVALID: &str = "package main\n\nimport \"regexp\"\n\nvar re = regexp.MustCompile(\"(\")\n";
const VALID: &str = "package main\n\nimport \"regexp\"\n\nvar re = regexp.MustCompile(\"a+\")\n";

fn patcheck() -> Command {
    Command::cargo_bin("patcheck").expect("binary should build")
}

#[test]
fn test_clean_tree_exits_zero() -> TestResult {
    let dir = tempfile::tempdir()?;
    write_go(dir.path(), "main.go", VALID);

    patcheck()
        .args(["check", "."])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No invalid patterns"));
    Ok(())
}

#[test]
fn test_findings_exit_one() -> TestResult {
    let dir = tempfile::tempdir()?;
    write_go(dir.path(), "main.go", INVALID);

    patcheck()
        .args(["check", "."])
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("main.go:5:29:")
                .and(predicate::str::contains("unclosed group"))
                .and(predicate::str::contains("regexp.MustCompile")),
        );
    Ok(())
}

#[test]
fn test_jsonl_output() -> TestResult {
    let dir = tempfile::tempdir()?;
    write_go(dir.path(), "main.go", INVALID);

    let output = patcheck()
        .args(["check", ".", "--format", "jsonl"])
        .current_dir(dir.path())
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let lines: Vec<serde_json::Value> = String::from_utf8(output)?
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is JSON"))
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["type"], "finding");
    assert_eq!(lines[0]["pattern"], "(");
    assert_eq!(lines[1]["type"], "status");
    assert_eq!(lines[1]["clean"], false);
    assert_eq!(lines[1]["total_findings"], 1);
    Ok(())
}

#[test]
fn test_parse_error_exits_two() -> TestResult {
    let dir = tempfile::tempdir()?;
    write_go(dir.path(), "broken.go", "package main\n\nfunc main() {\n");

    patcheck()
        .args(["check", "."])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Parse error"));
    Ok(())
}

#[test]
fn test_missing_config_exits_two() -> TestResult {
    let dir = tempfile::tempdir()?;
    write_go(dir.path(), "main.go", VALID);

    patcheck()
        .args(["check", ".", "--config", "missing.toml"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read"));
    Ok(())
}

#[test]
fn test_config_excludes_vendor() -> TestResult {
    let dir = tempfile::tempdir()?;
    write_go(dir.path(), "vendor/dep/dep.go", INVALID);
    std::fs::write(dir.path().join("patcheck.toml"), "exclude = [\"vendor/**\"]\n")?;

    patcheck()
        .args(["check", "."])
        .current_dir(dir.path())
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_config_deny_empty() -> TestResult {
    let dir = tempfile::tempdir()?;
    write_go(
        dir.path(),
        "main.go",
        "package main\n\nimport \"regexp\"\n\nvar re = regexp.MustCompile(\"\")\n",
    );
    std::fs::write(
        dir.path().join("patcheck.toml"),
        r#"
[[signatures]]
package = "regexp"
function = "MustCompile"
arg = 0
validator = "regex"
deny_empty = true
"#,
    )?;

    patcheck()
        .args(["check", "."])
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("empty pattern"));
    Ok(())
}

#[test]
fn test_list_shows_default_table() -> TestResult {
    let dir = tempfile::tempdir()?;

    patcheck()
        .args(["list"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("regexp.Compile")
                .and(predicate::str::contains("regexp.MustCompile"))
                .and(predicate::str::contains("regexp.MatchString")),
        );
    Ok(())
}

#[test]
fn test_init_writes_config_once() -> TestResult {
    let dir = tempfile::tempdir()?;

    patcheck()
        .args(["init"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created patcheck.toml"));

    assert!(dir.path().join("patcheck.toml").exists());

    patcheck()
        .args(["init"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    patcheck()
        .args(["init", "--force"])
        .current_dir(dir.path())
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_explicit_file_path_is_checked() -> TestResult {
    let dir = tempfile::tempdir()?;
    let file = write_go(dir.path(), "main.go", INVALID);

    patcheck()
        .args(["check", file.to_str().expect("utf-8 path")])
        .current_dir(dir.path())
        .assert()
        .code(1);
    Ok(())
}
