//! End-to-end tests for the macrofunc binary.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn macrofunc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_macrofunc"))
        .args(["--color", "never"])
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn eval_prints_result() {
    let output = macrofunc(&[
        "eval",
        "--value",
        "2024-01-15",
        "--function",
        "regsub",
        "-p",
        "(\\d+)-(\\d+)-(\\d+)",
        "-p",
        "\\3/\\2/\\1",
    ]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert_eq!(stdout(&output), "15/01/2024\n");
}

#[test]
fn eval_accepts_leading_dashes() {
    let output = macrofunc(&["eval", "--value", "-2.5", "--function", "fmtnum", "-p", "0"]);
    assert_eq!(stdout(&output), "-3\n");
}

#[test]
fn eval_unresolved_sets_exit_code() {
    let output = macrofunc(&["eval", "--value", "x", "--function", "lowercas"]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
    assert_eq!(stdout(&output), "*UNKNOWN*\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("did you mean: lowercase?"));
}

#[test]
fn eval_json_output() {
    let output = macrofunc(&["eval", "--value", "hi", "--function", "btoa", "--json"]);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["result"], "aGk=");
    assert_eq!(json["resolved"], true);
}

#[test]
fn eval_uses_pinned_time_settings() {
    let output = macrofunc(&[
        "--utc-offset",
        "+02:00",
        "--now",
        "2024-03-10T12:00:00Z",
        "eval",
        "--value",
        "08:00:00",
        "--function",
        "fmttime",
        "-p",
        "%Y-%m-%d %H:%M %z",
    ]);
    assert_eq!(stdout(&output), "2024-03-10 08:00 +0200\n");
}

#[test]
fn batch_evaluates_every_call() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"[
            {{"value": "hello", "function": "tr", "parameters": ["a-y", "b-z"]}},
            {{"value": "abc", "function": "fmtnum", "parameters": ["2"]}},
            {{"value": "a b", "function": "urlencode"}}
        ]"#
    )
    .unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap();
    let output = macrofunc(&["batch", path, "--json"]);
    assert_eq!(output.status.code(), Some(exitcode::OK));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["result"].as_str().unwrap())
        .collect();
    assert_eq!(results, vec!["ifmmp", "*UNKNOWN*", "a%20b"]);

    let strict = macrofunc(&["batch", path, "--strict"]);
    assert_eq!(strict.status.code(), Some(exitcode::DATAERR));
}

#[test]
fn batch_rejects_malformed_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"[{{"value": "x"}}]"#).unwrap();
    file.flush().unwrap();

    let output = macrofunc(&["batch", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(exitcode::SOFTWARE));
}

#[test]
fn list_shows_all_functions() {
    let output = macrofunc(&["list", "--json"]);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 13);
    assert!(names.contains(&"regsub"));
    assert!(names.contains(&"uppercase"));
}

#[test]
fn batch_result_equal_to_marker_is_resolved() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"[{{"value": "*unknown*", "function": "uppercase"}}]"#).unwrap();
    file.flush().unwrap();

    let output = macrofunc(&["batch", file.path().to_str().unwrap(), "--json", "--strict"]);
    assert_eq!(output.status.code(), Some(exitcode::OK));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["result"], "*UNKNOWN*");
    assert_eq!(json[0]["resolved"], true);
}
