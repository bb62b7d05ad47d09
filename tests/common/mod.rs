//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use devfolio::config::AnimationConfig;
use devfolio::content::Portfolio;
use devfolio::motion::{ManualClock, RevealThreshold};
use devfolio::sections::Page;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Write `body` to `<tempdir>/<name>` and return both.
pub fn temp_file(name: &str, body: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, body).expect("Failed to write temp file");
    (temp_dir, path)
}

/// Config file that keeps logs inside the temp dir.
pub fn temp_config(extra: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    let log = temp_dir.path().join("devfolio.log");
    let body = format!(
        "[logging]\nlevel = \"warn\"\nfile = {:?}\n\n{}",
        log.display().to_string(),
        extra
    );
    std::fs::write(&path, body).expect("Failed to write config");
    (temp_dir, path)
}

/// The built-in page mounted at t=0 with default timings.
pub fn builtin_page(clock: &ManualClock) -> Page {
    builtin_page_with(clock, RevealThreshold::default())
}

pub fn builtin_page_with(clock: &ManualClock, threshold: RevealThreshold) -> Page {
    use devfolio::motion::Clock;
    Page::compose(
        &Portfolio::builtin(),
        &AnimationConfig::default(),
        threshold,
        clock.now(),
    )
    .expect("builtin page composes")
}
