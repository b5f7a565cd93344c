//! Integration tests for the command-file runner

use std::fs;
use std::process::Command;

use grid_draw::engine::{RunSummary, Session, SessionConfig, TraceRecord, TraceStatus};

fn write_script(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_full_script() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.bmp");
    let script = write_script(
        &dir,
        "cmds.txt",
        &format!(
            "I 5 6\n\
             L 2 3 A\n\
             \n\
             S {out}\n\
             G 2 3 J\n\
             V 2 3 4 W\n\
             H 3 4 2 Z\n\
             F 3 3 J\n\
             S {out}\n\
             X\n",
            out = out.display()
        ),
    );

    let mut session = Session::new(SessionConfig::default());
    let summary = session.run_file(&script).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            executed: 8,
            skipped: 1
        }
    );
    assert!(session.router().grid().is_none());
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "JJJJJ\nJJZZJ\nJWJJJ\nJWJJJ\nJJJJJ\nJJJJJ"
    );
}

#[test]
fn test_commands_before_create_are_skipped() {
    let mut session = Session::new(SessionConfig::default());
    let summary = session.run(["C", "L 1 1 A", "I 2 2", "L 1 1 A"]).unwrap();

    assert_eq!(summary.skipped, 2);
    assert_eq!(session.router().grid().unwrap().serialize(), "AO\nOO");
}

#[test]
fn test_missing_command_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::new(SessionConfig::default());
    let missing = dir.path().join("nowhere_file.txt");
    let err = session.run_file(&missing).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("File '{}' not found.", missing.display())
    );
}

#[test]
fn test_trace_log_records_each_line() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = dir.path().join("trace.jsonl");

    let mut session = Session::new(SessionConfig {
        trace_path: Some(trace_path.clone()),
        strict: false,
    });
    session.run(["I 2 2", "", "Z", "L 1 1 A", "X"]).unwrap();
    drop(session);

    let records: Vec<TraceRecord> = fs::read_to_string(&trace_path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(records.len(), 4);
    assert_eq!(
        records.iter().map(|r| r.seq).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    assert_eq!(records[0].status, TraceStatus::Ok);
    assert_eq!(records[1].status, TraceStatus::Skipped);
    assert_eq!(records[1].code.as_deref(), Some("unknown_command"));
    assert_eq!(records[1].fingerprint, records[0].fingerprint);
    assert_ne!(records[2].fingerprint, records[1].fingerprint);
    assert_eq!(records[3].alias, "X");
    assert_eq!(records[3].fingerprint, None);
}

#[test]
fn test_trace_lines_are_json_objects() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = dir.path().join("trace.jsonl");

    let mut session = Session::new(SessionConfig {
        trace_path: Some(trace_path.clone()),
        strict: false,
    });
    session.run(["C", "I 1 1"]).unwrap();
    drop(session);

    for line in fs::read_to_string(&trace_path).unwrap().lines() {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(v["seq"].is_u64());
        assert!(v["alias"].is_string());
        assert!(v["status"].is_string());
    }
}

#[test]
fn test_cli_runs_script() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("cli.bmp");
    let script = write_script(
        &dir,
        "cmds.txt",
        &format!("I 3 2\nK 1 1 2 2 C\nS {}\n", out.display()),
    );

    let output = Command::new(env!("CARGO_BIN_EXE_grid-draw"))
        .arg(&script)
        .env("GRID_DRAW_LOG", "info")
        .env_remove("GRID_DRAW_LOG_JSON")
        .env_remove("GRID_DRAW_TRACE_PATH")
        .env_remove("GRID_DRAW_STRICT")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&out).unwrap(), "CCO\nCCO");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(&format!("Saved file '{}'", out.display())),
        "{}",
        stderr
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nowhere_file.txt");
    let output = Command::new(env!("CARGO_BIN_EXE_grid-draw"))
        .arg(&missing)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains(&format!("File '{}' not found.", missing.display())));
}

#[test]
fn test_cli_json_logs_carry_the_save_message() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("json.bmp");
    let script = write_script(&dir, "cmds.txt", &format!("I 1 1\nS {}\n", out.display()));

    let output = Command::new(env!("CARGO_BIN_EXE_grid-draw"))
        .arg(&script)
        .env("GRID_DRAW_LOG", "info")
        .env("GRID_DRAW_LOG_JSON", "1")
        .env_remove("GRID_DRAW_TRACE_PATH")
        .env_remove("GRID_DRAW_STRICT")
        .output()
        .unwrap();
    assert!(output.status.success());

    let expected = format!("Saved file '{}'", out.display());
    let saved = String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter_map(|l| serde_json::from_str::<serde_json::Value>(l).ok())
        .any(|v| v["fields"]["message"] == expected.as_str() && v["level"] == "INFO");
    assert!(saved);
}

#[test]
fn test_cli_requires_argument() {
    let output = Command::new(env!("CARGO_BIN_EXE_grid-draw"))
        .output()
        .unwrap();
    assert!(!output.status.success());
}
