use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn sanipro_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sanipro").unwrap();
    cmd.env("SANIPRO_HOME", home.path())
        .env_remove("SANIPRO_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_interactive_processes_each_line() {
    let home = TempDir::new().unwrap();
    sanipro_cmd(&home)
        .args(["-i", "unique"])
        .write_stdin("a, a, b\n(c:1.5), c\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("a, b"))
        .stdout(predicate::str::contains("c"));
}

#[test]
fn test_interactive_survives_bad_prompt() {
    let home = TempDir::new().unwrap();
    sanipro_cmd(&home)
        .arg("--interactive")
        .write_stdin("(broken\nfine\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("fine"))
        .stderr(predicate::str::contains("unclosed"));
}

#[test]
fn test_interactive_saves_history() {
    let home = TempDir::new().unwrap();
    sanipro_cmd(&home)
        .arg("-i")
        .write_stdin("a, b\nc\n")
        .assert()
        .success();

    let history = std::fs::read_to_string(home.path().join("history")).unwrap();
    assert!(history.lines().any(|l| l == "a, b"));
    assert!(history.lines().any(|l| l == "c"));
}
