use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_check_equivalent_pair() {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("check")
        .arg("((!(A&B)|!C)&(C&A&B))|(A&C)")
        .arg("A&C");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Original"))
        .stdout(predicate::str::contains("Simplified"))
        .stdout(predicate::str::contains(" -A=1 -B=0 -C=1"))
        .stdout(predicate::str::contains(" -A=1 -B=1 -C=1"))
        .stdout(predicate::str::contains(
            "The 2 Expressions: '((!(A&B)|!C)&(C&A&B))|(A&C)' and 'A&C' are Equivalent.",
        ));
}

#[test]
fn test_cli_check_not_equivalent() {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("check").arg("A|B&C").arg("A|(B&C)");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("are Not Equivalent."));
}

#[test]
fn test_cli_check_unsatisfiable() {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("check").arg("A&!A").arg("0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Original Expression is Unsatisfiable."))
        .stdout(predicate::str::contains("Simplified Expression is Unsatisfiable."))
        .stdout(predicate::str::contains("are Equivalent."));
}

#[test]
fn test_cli_check_json() {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("check").arg("a|b").arg("B|A").arg("--json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["equivalent"], true);
    assert_eq!(json["variables"], serde_json::json!(["A", "B"]));
    assert_eq!(json["rows"].as_array().unwrap().len(), 4);
    assert_eq!(json["original_satisfiability"]["inputs"].as_array().unwrap().len(), 3);
}

#[test]
fn test_cli_check_missing_gate_fails() {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("check").arg("AB").arg("A");

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Missing gate"))
        .stderr(predicate::str::contains("Insert a gate"));
}

#[test]
fn test_cli_check_unknown_variable_fails() {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("check").arg("A&B").arg("A&C");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown variable"))
        .stderr(predicate::str::contains("A, B"));
}

#[test]
fn test_cli_check_max_variables() {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("check")
        .arg("A&B&C")
        .arg("A")
        .arg("--max-variables")
        .arg("2");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("max_variables"))
        .stderr(predicate::str::contains("Limit: 2"))
        .stderr(predicate::str::contains("Actual: 3"));
}

#[test]
fn test_cli_eval() {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("eval")
        .arg("A|B&C")
        .arg("A=1")
        .arg("B=0")
        .arg("C=0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("A|B&C = 0"));
}

#[test]
fn test_cli_eval_raw() {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("eval")
        .arg("!a&b")
        .arg("a=false")
        .arg("b=true")
        .arg("--raw");

    cmd.assert().success().stdout("1\n");
}

#[test]
fn test_cli_eval_unbound_variable() {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("eval").arg("A&B").arg("A=1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unbound variable"))
        .stderr(predicate::str::contains("No value assigned to variable B"));
}

#[test]
fn test_cli_eval_invalid_binding() {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("eval").arg("A").arg("A=maybe");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid assignment"));
}

#[test]
fn test_cli_suggest() {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("suggest").arg("((!(A&B)|!C)&(C&A&B))|(A&C)");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Suggested: "))
        .stdout(predicate::str::contains("are Equivalent."));
}

#[test]
fn test_cli_suggest_tautology() {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("suggest").arg("A|!A");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Suggested: 1\n"));
}

#[test]
fn test_cli_malformed_expression() {
    let mut cmd = Command::cargo_bin("verity").unwrap();
    cmd.arg("check").arg("(A)(B)").arg("A");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Malformed expression"));
}
