use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

fn run_rpncalc<P: AsRef<Path>>(dir: P, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rpncalc"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn default_file_is_evaluated() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("calcul.txt"), "  3 5 + 2 *\n").unwrap();

    let output = run_rpncalc(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("--- RPN calculator ---"), "stdout: {}", out);
    assert!(out.contains("calcul.txt"), "stdout: {}", out);
    assert!(out.contains("Expression: 3 5 + 2 *\n"), "stdout: {}", out);
    assert!(out.contains("Result: 16\n"), "stdout: {}", out);
}

#[test]
fn file_argument_is_evaluated() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("expr.txt"), "-7 2 /").unwrap();

    let output = run_rpncalc(dir.path(), &["expr.txt"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Result: -3\n"));
}

#[test]
fn missing_file_exits_with_1() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_rpncalc(dir.path(), &["missing.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: file 'missing.txt' does not exist."));
    assert!(!stdout(&output).contains("Result:"));
}

#[test]
fn missing_default_file_exits_with_1() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_rpncalc(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("'calcul.txt' does not exist"));
}

#[test]
fn evaluation_errors_exit_with_2() {
    let cases = [
        ("5 0 /", "Calculation error: division by zero"),
        ("3 +", "Calculation error: not enough operands for '+' at position 2"),
        ("3 5", "Calculation error: incomplete expression: 2 values left"),
        ("", "Calculation error: empty expression"),
    ];
    for (expression, message) in cases {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("calcul.txt"), expression).unwrap();

        let output = run_rpncalc(dir.path(), &[]);
        assert_eq!(output.status.code(), Some(2), "evaluating '{}'", expression);
        assert!(
            stderr(&output).contains(message),
            "evaluating '{}', stderr: {}",
            expression,
            stderr(&output)
        );
    }
}

#[test]
fn invalid_token_is_pointed_at() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("calcul.txt"), "3 xy +").unwrap();

    let output = run_rpncalc(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("invalid token 'xy' at position 2"), "stderr: {}", err);
    assert!(err.contains("| 3 xy +\n"), "stderr: {}", err);
    assert!(err.contains("|   ^^\n"), "stderr: {}", err);
}

#[test]
fn too_many_arguments_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_rpncalc(dir.path(), &["a.txt", "b.txt"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn help_exits_successfully() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_rpncalc(dir.path(), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage"));
}

#[test]
fn verbose_logs_evaluation_steps() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("calcul.txt"), "3 5 +").unwrap();

    let output = run_rpncalc(dir.path(), &["--verbose"]);
    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("debug: "), "stderr: {}", err);
    assert!(err.contains("3 + 5 = 8"), "stderr: {}", err);
}
