//! Tests for the binary's command line, run against the built executable.

mod common;

use common::temp_config;
use std::process::Command;

fn devfolio_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_devfolio"))
}

#[test]
fn test_help_lists_headless_options() {
    let output = devfolio_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--headless"));
    assert!(stdout.contains("--until-ms"));
    assert!(stdout.contains("--content"));
}

#[test]
fn test_headless_prints_json_frames() {
    let (_dir, config) = temp_config("");
    let output = devfolio_cmd()
        .args(["--headless", "--until-ms", "2000", "--config"])
        .arg(&config)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let frames: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("frame is JSON"))
        .collect();
    assert!(frames.len() > 1);
    assert_eq!(frames[0]["t_ms"], 0);

    let last = frames.last().unwrap();
    let contact = last["sections"]
        .as_array()
        .unwrap()
        .iter()
        .find(|section| section["id"] == "contact")
        .unwrap();
    assert_eq!(contact["typewriter"]["text"], "$ run connect");
    assert_eq!(contact["typewriter"]["commands_unlocked"], true);
    assert_eq!(
        contact["lists"][0]["visible"],
        serde_json::json!([true, true, true, true])
    );
}

#[test]
fn test_headless_counter_lands_on_target() {
    let (_dir, config) = temp_config("");
    let output = devfolio_cmd()
        .args(["--headless", "--until-ms", "1600", "--frame-ms", "16", "--config"])
        .arg(&config)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let last: serde_json::Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    let hero = &last["sections"][0];
    assert_eq!(hero["id"], "hero");
    assert_eq!(hero["counters"][0]["text"], "99.9");
    assert_eq!(hero["counters"][0]["phase"], "complete");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, config) = temp_config("[animation]\nframe_ms = 0\n");
    let output = devfolio_cmd()
        .args(["--headless", "--config"])
        .arg(&config)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}

#[test]
fn test_missing_content_file_exits_with_error() {
    let (_dir, config) = temp_config("");
    let output = devfolio_cmd()
        .args(["--headless", "--content", "/nonexistent/site.toml", "--config"])
        .arg(&config)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read content file"));
}
