use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::NamedTempFile;

const TRACK: &str = include_str!("fixtures/track.json");
const CONTRIBUTOR: &str = include_str!("fixtures/contributor.json");

fn cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_catalog-cli"))
        .args(args)
        .env_remove("CATALOG_LOG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_temp(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_parse_prints_canonical_json() {
    let file = write_temp(TRACK);
    let out = cli(&["parse", "track", file.path().to_str().unwrap()]);
    assert!(out.status.success());

    let printed: Value = serde_json::from_slice(&out.stdout).unwrap();
    let input: Value = serde_json::from_str(TRACK).unwrap();
    assert_eq!(printed, input);
}

#[test]
fn test_parse_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_catalog-cli"))
        .args(["parse", "contributor", "--pretty"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(CONTRIBUTOR.as_bytes())
        .unwrap();
    let out = child.wait_with_output().unwrap();

    assert!(out.status.success());
    let printed = String::from_utf8(out.stdout).unwrap();
    assert!(printed.contains("\n  \"role\": \"Main\""));
}

#[test]
fn test_parse_reports_schema_error() {
    let file = write_temp(r#"{"id": 27, "name": "Daft Punk"}"#);
    let out = cli(&["parse", "contributor", file.path().to_str().unwrap()]);
    assert!(!out.status.success());

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("missing field `link`"));
}

#[test]
fn test_resolve_lists_tracks() {
    let body = format!(r#"{{"data": [{}], "total": 1}}"#, TRACK);
    let file = write_temp(&body);
    let out = cli(&["resolve", "search", file.path().to_str().unwrap()]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("search"));
    assert_eq!(
        lines.next(),
        Some("1. Daft Punk, Edwin Birdsong - Harder, Better, Faster, Stronger (ID: 3135556, 03:44)")
    );
}

#[test]
fn test_resolve_error_envelope() {
    let file = write_temp(
        r#"{"error": {"type": "QuotaException", "message": "Quota limit exceeded", "code": 4}}"#,
    );
    let out = cli(&["resolve", "track", file.path().to_str().unwrap()]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout, "error\n   QuotaException: Quota limit exceeded\n");
}

#[test]
fn test_outcome_validation() {
    let out = cli(&["outcome", "playlist"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "playlist\n");

    let out = cli(&["outcome", "loaded"]);
    assert!(!out.status.success());
}
