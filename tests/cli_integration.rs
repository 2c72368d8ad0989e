//! Integration tests for the `tt` CLI.
//!
//! Each test runs `tt` as a subprocess on a single line and checks stdout
//! and/or stderr.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use chrono::Local;

/// Get the path to the built `tt` binary.
fn tt_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tt");
    path
}

/// Run `tt` with the given args, returning (stdout, stderr, success).
fn run_tt(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(tt_bin())
        .args(args)
        .output()
        .expect("failed to run tt");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `tt` expecting success, return stdout.
fn run_tt_ok(args: &[&str]) -> String {
    let (stdout, stderr, success) = run_tt(args);
    if !success {
        panic!(
            "tt {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

/// Run `tt` with the given bytes piped to stdin.
fn run_tt_stdin(args: &[&str], input: &[u8]) -> (String, String, bool) {
    let mut child = Command::new(tt_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run tt");

    child.stdin.take().unwrap().write_all(input).unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn test_show_human() {
    let out = run_tt_ok(&["show", "x 2021-01-02 (A) 2021-01-01 call mum +family @phone"]);
    assert!(out.contains("[x] (A) call mum +family @phone"));
    assert!(out.contains("completed: 2021-01-02"));
    assert!(out.contains("created: 2021-01-01"));
    assert!(out.contains("projects: family"));
    assert!(out.contains("contexts: phone"));
}

#[test]
fn test_show_json() {
    let out = run_tt_ok(&["show", "--json", "Submit report due:2021-03-15 ref:x9"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["completed"], false);
    assert_eq!(parsed["priority_score"], 100);
    assert_eq!(parsed["content"], "Submit report due:2021-03-15 ref:x9");
    assert_eq!(parsed["metadata"][0]["name"], "due");
    assert_eq!(parsed["metadata"][0]["value"], "2021-03-15");
    assert_eq!(parsed["metadata"][1]["name"], "ref");
    assert_eq!(parsed["due_date"], "2021-03-15");
}

#[test]
fn test_show_reads_stdin() {
    let (out, _, success) = run_tt_stdin(&["show", "--json"], b"(B) water plants\n");
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["priority"], "B");
    assert_eq!(parsed["content"], "water plants");
}

#[test]
fn test_stdin_rejects_non_text() {
    let (_, err, success) = run_tt_stdin(&["show"], &[0x66, 0x6f, 0xff, 0x0a]);
    assert!(!success);
    assert!(err.contains("not text"));
}

// ---------------------------------------------------------------------------
// fmt
// ---------------------------------------------------------------------------

#[test]
fn test_fmt_round_trips_canonical_line() {
    let line = "x 2021-01-02 (A) 2021-01-01 call mum";
    let out = run_tt_ok(&["fmt", line]);
    assert_eq!(out, format!("{}\n", line));
}

// ---------------------------------------------------------------------------
// done / undo
// ---------------------------------------------------------------------------

#[test]
fn test_done_stamps_today() {
    let out = run_tt_ok(&["done", "call mum"]);
    assert_eq!(out, format!("x {} call mum\n", today()));
}

#[test]
fn test_done_already_completed() {
    let (out, err, success) = run_tt(&["done", "x 2021-01-02 call mum"]);
    assert!(success);
    assert_eq!(out, "x 2021-01-02 call mum\n");
    assert!(err.contains("already completed"));
}

#[test]
fn test_undo_clears_completion() {
    let out = run_tt_ok(&["undo", "x 2021-01-02 (A) call mum"]);
    assert_eq!(out, "(A) call mum\n");
}

// ---------------------------------------------------------------------------
// pri
// ---------------------------------------------------------------------------

#[test]
fn test_pri_sets_priority() {
    let out = run_tt_ok(&["pri", "B", "call mum"]);
    assert_eq!(out, "(B) call mum\n");
}

#[test]
fn test_pri_replaces_priority() {
    let out = run_tt_ok(&["pri", "A", "(C) 2021-01-01 call mum"]);
    assert_eq!(out, "(A) 2021-01-01 call mum\n");
}

#[test]
fn test_pri_clears_priority() {
    let out = run_tt_ok(&["pri", "-", "(C) call mum"]);
    assert_eq!(out, "call mum\n");
}

#[test]
fn test_pri_rejects_garbage() {
    let (_, err, success) = run_tt(&["pri", "abc", "call mum"]);
    assert!(!success);
    assert!(err.contains("invalid priority"));
}
