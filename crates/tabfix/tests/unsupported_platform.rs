//! Integration tests for startup on a platform without an overlay.

#![cfg(not(windows))]

use std::process::Command;

#[test]
fn test_exits_with_error_off_windows() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = Command::new(env!("CARGO_BIN_EXE_tabfix"))
        .env("TABFIX_CONFIG", temp_dir.path().join("config.toml"))
        .output()
        .expect("Failed to execute tabfix");

    assert!(!output.status.success(), "tabfix should refuse to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("only runs on Windows"),
        "Expected platform error in stderr, got: {}",
        stderr
    );
    assert!(
        !stderr.contains("Warning: Could not load config"),
        "A missing config file should not warn: {}",
        stderr
    );
}

#[test]
fn test_startup_is_logged_as_json() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = Command::new(env!("CARGO_BIN_EXE_tabfix"))
        .env("TABFIX_CONFIG", temp_dir.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute tabfix");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("\"event\":\"core.app.startup_completed\""),
        "Expected startup event in stderr, got: {}",
        stderr
    );
}

#[test]
fn test_log_file_receives_events() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("logs").join("tabfix.log");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!("[logging]\nfile = {:?}\n", log_path.display().to_string()),
    )
    .expect("Failed to write config");

    let output = Command::new(env!("CARGO_BIN_EXE_tabfix"))
        .env("TABFIX_CONFIG", &config_path)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute tabfix");

    assert!(!output.status.success());

    let log = std::fs::read_to_string(&log_path).expect("Log file should exist");
    assert!(
        log.contains("app.unsupported_platform"),
        "Expected platform event in log file, got: {}",
        log
    );
}
