//! Integration tests for config warning behavior.
//!
//! A broken config file must not stop startup; tabfix warns and uses defaults.

#![cfg(not(windows))]

use std::fs;
use std::process::Command;

#[test]
fn test_config_warning_on_invalid_toml() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "invalid toml [[[").expect("Failed to write invalid config");

    let output = Command::new(env!("CARGO_BIN_EXE_tabfix"))
        .env("TABFIX_CONFIG", &config_path)
        .output()
        .expect("Failed to execute tabfix");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(
        stderr.contains("Tip: Check"),
        "Expected tip about config files in stderr, got: {}",
        stderr
    );
    // Startup continued past config loading
    assert!(
        stderr.contains("only runs on Windows"),
        "Expected platform error after the warning, got: {}",
        stderr
    );
}

#[test]
fn test_config_warning_on_invalid_hotkey() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[hotkey]\ntrigger = \"b\"\n").expect("Failed to write config");

    let output = Command::new(env!("CARGO_BIN_EXE_tabfix"))
        .env("TABFIX_CONFIG", &config_path)
        .output()
        .expect("Failed to execute tabfix");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
}

#[test]
fn test_no_warning_on_valid_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r##"
[hotkey]
trigger = "ctrl+b"
alternate = "alt+q"

[overlay]
background = "#000000"
"##,
    )
    .expect("Failed to write valid config");

    let output = Command::new(env!("CARGO_BIN_EXE_tabfix"))
        .env("TABFIX_CONFIG", &config_path)
        .output()
        .expect("Failed to execute tabfix");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("Warning: Could not load config"),
        "Unexpected config warning in stderr: {}",
        stderr
    );
}
