//! Integration tests for the sql-query-helper binary.

use std::io::Write;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};

/// Command isolated from any user or project config file.
fn cmd(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("sql-query-helper");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("SQL_HELPER_DEBOUNCE_MS")
        .env_remove("RUST_LOG");
    cmd
}

fn sql_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_check_clean_query() {
    let home = TempDir::new().unwrap();
    let queries = sql_file("SELECT id FROM users;");

    cmd(&home)
        .args(["check", "--no-color", queries.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found!"));
}

#[test]
fn test_check_reports_errors() {
    let home = TempDir::new().unwrap();
    let queries = sql_file("SELCT * FRM users");

    cmd(&home)
        .args(["check", "--no-color", queries.path().to_str().unwrap()])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Misspelled keyword: SELCT"))
        .stdout(predicate::str::contains("Did you mean: FROM?"))
        .stdout(predicate::str::contains("[SQL002]"));
}

#[test]
fn test_check_stdin() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["check", "--no-color", "-"])
        .write_stdin("SELECT * FROM t WHERE (a=1;")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("<stdin>:"))
        .stdout(predicate::str::contains("Unmatched parentheses detected"));
}

#[test]
fn test_check_json_output() {
    let home = TempDir::new().unwrap();
    let queries = sql_file("SELECT 1");

    let output = cmd(&home)
        .args(["check", "-f", "json", queries.path().to_str().unwrap()])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["findings"][0]["rule_id"], "SQL002");
}

#[test]
fn test_check_file_not_found() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["check", "/nonexistent/queries.sql"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_check_requires_paths() {
    let home = TempDir::new().unwrap();

    cmd(&home).arg("check").assert().failure();
}

#[test]
fn test_local_config_disables_rule() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join(".sql-helper.toml"),
        "[rules]\ndisabled = [\"SQL002\"]\n"
    )
    .unwrap();
    let queries = sql_file("SELECT 1");

    cmd(&home)
        .args(["check", "--no-color", queries.path().to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn test_explicit_config_severity_override() {
    let home = TempDir::new().unwrap();
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[rules.severity]\nSQL002 = \"warning\"").unwrap();
    let queries = sql_file("SELECT 1");

    cmd(&home)
        .args([
            "--config",
            config.path().to_str().unwrap(),
            "check",
            "--no-color",
            queries.path().to_str().unwrap()
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("WARN [SQL002]"));
}

#[test]
fn test_invalid_config_fails() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join(".sql-helper.toml"), "[rules\n").unwrap();
    let queries = sql_file("SELECT 1;");

    cmd(&home)
        .args(["check", queries.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_check_ignores_invalid_debounce_env() {
    let home = TempDir::new().unwrap();
    let queries = sql_file("SELECT 1;");

    cmd(&home)
        .env("SQL_HELPER_DEBOUNCE_MS", "soon")
        .args(["check", "--no-color", queries.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found!"));
}

#[test]
fn test_format_stdout() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["format", "-"])
        .write_stdin("select * frm users where id=1")
        .assert()
        .success()
        .stdout("SELECT *\nFROM users\nWHERE id=1\n");
}

#[test]
fn test_format_write_in_place() {
    let home = TempDir::new().unwrap();
    let queries = sql_file("select a from t where b=1 and c=2;");

    cmd(&home)
        .args(["format", "--write", queries.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("");

    let content = std::fs::read_to_string(queries.path()).unwrap();
    assert_eq!(content, "SELECT a\nFROM t\nWHERE b=1\n  AND c=2;\n");
}

#[test]
fn test_format_write_stdin_rejected() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["format", "--write", "-"])
        .write_stdin("select 1")
        .assert()
        .code(1);
}

#[test]
fn test_live_mode() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["live", "--no-color", "--debounce-ms", "10", "--print-document"])
        .write_stdin("selct *\nfrm users;\n\\format\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<live>"))
        .stdout(predicate::str::ends_with("SELECT *\nFROM users;\n"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sql-query-helper"));
}
