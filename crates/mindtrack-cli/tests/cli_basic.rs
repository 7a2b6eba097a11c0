//! Basic CLI E2E tests.
//!
//! Tests run the built binary against a throwaway data directory.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_mindtrack"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn run_json(data_dir: &Path, args: &[&str]) -> serde_json::Value {
    let (code, stdout, stderr) = run_cli(data_dir, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_add_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["add", "4", "--note", "sunny walk"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Saved mood 4"));

    run_cli(dir.path(), &["add", "2"]);

    let list = run_json(dir.path(), &["list", "--json"]);
    let entries = list.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["mood"], 2);
    assert_eq!(entries[1]["note"], "sunny walk");
}

#[test]
fn test_list_limit() {
    let dir = tempfile::tempdir().unwrap();
    for mood in ["1", "2", "3"] {
        run_cli(dir.path(), &["add", mood]);
    }
    let list = run_json(dir.path(), &["list", "--json", "--limit", "2"]);
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[test]
fn test_add_rejects_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    for bad in ["0", "6", "-1"] {
        let (code, _, stderr) = run_cli(dir.path(), &["add", bad]);
        assert_ne!(code, 0, "mood {bad} should be rejected");
        assert!(stderr.contains("Mood must be between 1 and 5"));
    }
    let list = run_json(dir.path(), &["list", "--json"]);
    assert!(list.as_array().unwrap().is_empty());
}

#[test]
fn test_manual_reset_repeats_within_week() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["reset", "--yes"]);
    run_cli(dir.path(), &["add", "4"]);
    run_cli(dir.path(), &["add", "2"]);

    let (code, stdout, _) = run_cli(dir.path(), &["reset", "--yes"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Deleted 2 entries"));
    assert!(!stdout.contains("already reset"));
}

#[test]
fn test_summary_json() {
    let dir = tempfile::tempdir().unwrap();
    for mood in ["5", "3", "1"] {
        run_cli(dir.path(), &["add", mood]);
    }
    let summary = run_json(dir.path(), &["summary", "--json"]);
    assert_eq!(summary["weekly_average"], 3.0);
    let series = summary["daily_series"].as_array().unwrap();
    assert_eq!(series.len(), 7);
    assert_eq!(series[6]["avg_mood"], 3.0);
}

#[test]
fn test_summary_text() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["summary"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Weekly Average Mood: 0.0"));
    assert_eq!(stdout.matches("no data").count(), 7);
}

#[test]
fn test_reset_requires_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["add", "3"]);

    let (code, _, stderr) = run_cli(dir.path(), &["reset"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("--yes"));

    let (code, stdout, _) = run_cli(dir.path(), &["reset", "--yes"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Deleted 1 entries"));

    let list = run_json(dir.path(), &["list", "--json"]);
    assert!(list.as_array().unwrap().is_empty());
}

#[test]
fn test_entries_survive_same_week_sessions() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["add", "5"]);
    // each invocation runs the weekly check; the week is already recorded
    for _ in 0..3 {
        let list = run_json(dir.path(), &["list", "--json"]);
        assert_eq!(list.as_array().unwrap().len(), 1);
    }
}

#[test]
fn test_export_csv() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["add", "4", "--note", "busy, but fine"]);
    let out = dir.path().join("moods.csv");

    let (code, stdout, _) = run_cli(dir.path(), &["export", "--output", out.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("moods.csv"));

    let csv = std::fs::read_to_string(&out).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("id,mood,note,timestamp"));
    assert!(lines.next().unwrap().starts_with("1,4,\"busy, but fine\","));
}

#[test]
fn test_export_default_path() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["export"]);
    assert_eq!(code, 0);
    assert!(dir.path().join("mindtrack_moods.csv").exists());
}

#[test]
fn test_config_get_set() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "reset.auto_reset"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "true");

    let (code, _, _) = run_cli(dir.path(), &["config", "set", "reset.auto_reset", "false"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "reset.auto_reset"]);
    assert_eq!(stdout.trim(), "false");

    let (code, _, stderr) = run_cli(dir.path(), &["config", "set", "reset.nope", "1"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown configuration key"));
}

#[test]
fn test_config_path_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stdout, _) = run_cli(dir.path(), &["config", "path"]);
    assert!(stdout.trim().ends_with("config.toml"));

    let list = run_json(dir.path(), &["config", "list"]);
    assert_eq!(list["storage"]["database_file"], "mindtrack.db");
}
