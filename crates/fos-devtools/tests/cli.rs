//! aom-inspect tests - run the binary on the demo snapshot

use std::process::{Command, Output};

const SIGNUP_FORM: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/signup_form.json");

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aom-inspect"))
        .arg(SIGNUP_FORM)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout(args: &[&str]) -> String {
    let output = run(args);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

fn has_line(text: &str, line: &str) -> bool {
    text.lines().any(|l| l == line)
}

// ============================================================================
// TEXT OUTPUT
// ============================================================================

#[test]
fn test_default_view() {
    let out = stdout(&[]);

    assert!(out.starts_with("Create an account\n"));
    assert!(has_line(&out, "[…]"));
    assert!(has_line(&out, "[<input> Email] ada@example.com"));
    assert!(has_line(&out, "[<button>] […]"));
    assert!(out.contains("Password (at least 12 characters) "));
}

#[test]
fn test_expanded_labels() {
    let out = stdout(&["--expand", "3", "--expand", "10"]);

    assert!(has_line(&out, "[Email]"));
    assert!(has_line(&out, "[<button>] [Sign up]"));
    assert!(!out.contains('…'));
}

#[test]
fn test_inspect_single_node() {
    assert_eq!(stdout(&["--inspect", "4"]), "[<input> Email] ada@example.com\n");
}

#[test]
fn test_inspect_suppressed_node_prints_nothing() {
    assert_eq!(stdout(&["--inspect", "8"]), "");
}

#[test]
fn test_tree_outline() {
    assert_eq!(
        stdout(&["--tree", "1"]),
        "<body> #1\n  <p> #2\n  <label> #3 label-of=4\n  <input> #4\n  <label> #5 label-of=7\n  \
         <span> #6\n  <input> #7\n  <div> #8\n  <button> #9\n"
    );
}

// ============================================================================
// JSON OUTPUT AND ERRORS
// ============================================================================

#[test]
fn test_json_output() {
    let value: serde_json::Value = serde_json::from_str(&stdout(&["--json", "--compact"])).unwrap();
    assert_eq!(value["kind"], "contents");
    assert_eq!(value["value"]["key"], "1");
    assert_eq!(value["value"]["tag"], "body");
}

#[test]
fn test_unknown_key_fails() {
    assert!(!run(&["--focus", "missing"]).status.success());
    assert!(!run(&["--expand", "4"]).status.success());
}
