use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("suggest"));
}

#[test]
fn test_check_without_terminal_cannot_prompt() {
    // Prompts need a TTY; under the test harness stdin is not one
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("check").arg("A|B").write_stdin("A|B\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("simplified expression"));
}
