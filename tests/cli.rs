use assert_cmd::Command;
use predicates::prelude::*;

fn inkpad_cmd() -> Command {
    Command::cargo_bin("inkpad").expect("binary exists")
}

#[test]
fn inkpad_help_prints_usage() {
    inkpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand drawing pad with brush, eraser, and fill tools",
        ));
}

#[test]
fn unknown_flag_is_rejected() {
    inkpad_cmd()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn missing_config_override_fails() {
    inkpad_cmd()
        .args(["--config", "/nonexistent/inkpad.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}
