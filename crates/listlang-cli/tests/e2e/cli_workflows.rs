//! E2E tests for complete CLI workflows

use std::process::Command;

const CLI_BINARY: &str = env!("CARGO_BIN_EXE_listlang-cli");

fn run_command(args: &[&str]) -> std::process::Output {
    Command::new(CLI_BINARY)
        .args(args)
        .env_remove("LISTLANG_LOG")
        .output()
        .unwrap_or_else(|_| panic!("Failed to execute {CLI_BINARY}"))
}

fn stdout_of(args: &[&str]) -> String {
    let output = run_command(args);
    assert!(output.status.success(), "{args:?} failed");
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_show_has_no_trailing_newline() {
    assert_eq!(stdout_of(&["show", "[1, 2, 3]"]), "[1, 2, 3]");
    assert_eq!(stdout_of(&["show", "[]"]), "[]");
}

#[test]
fn test_slice() {
    assert_eq!(stdout_of(&["slice", "[1,2,3]", "1", "2"]), "[2]");
}

#[test]
fn test_concat() {
    assert_eq!(stdout_of(&["concat", "[1,2]", "[3,4]"]), "[1, 2, 3, 4]");
}

#[test]
fn test_remove_every() {
    assert_eq!(stdout_of(&["remove-every", "[1,2,2,3]", "2"]), "[1, 3]");
}

#[test]
fn test_multiply() {
    assert_eq!(stdout_of(&["mul", "[1,2]", "2"]), "[1, 2, 1, 2]");
    assert_eq!(stdout_of(&["mul", "[1,2]", "0"]), "[]");
}

#[test]
fn test_truthiness() {
    assert_eq!(stdout_of(&["bool", "[]"]), "0");
    assert_eq!(stdout_of(&["bool", "[5]"]), "1");
}

#[test]
fn test_json_output() {
    assert_eq!(stdout_of(&["--json", "incr", "[1]", "--post"]), "[1,0]");
}

#[test]
fn test_negative_index_is_an_error() {
    let output = run_command(&["get", "[1, 2]", "-1"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_INDEX"));
}

#[test]
fn test_decrement_empty_list_is_an_error() {
    let output = run_command(&["decr", "[]", "--post"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("empty list"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let output = run_command(&["--verbose", "len", "[1, 2]"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("running `len`"));
}
