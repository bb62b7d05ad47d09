use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::motion::Easing;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Optional TOML file replacing the built-in portfolio content.
    #[serde(default)]
    pub content: Option<PathBuf>,
}

/// Per-component animation timings, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Redraw interval of the interactive loop (default: 33).
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    /// Count-up duration for numeric metrics (default: 1500).
    #[serde(default = "default_counter_duration_ms")]
    pub counter_duration_ms: u64,
    /// Delay between typed characters (default: 100).
    #[serde(default = "default_type_interval_ms")]
    pub type_interval_ms: u64,
    /// Cursor toggle interval; 0 disables blinking (default: 500).
    #[serde(default = "default_cursor_blink_ms")]
    pub cursor_blink_ms: u64,
    /// Stagger between contact commands after the prompt is typed (default: 100).
    #[serde(default = "default_contact_stagger_ms")]
    pub contact_stagger_ms: u64,
    /// Stagger between cards in a section (default: 100).
    #[serde(default = "default_card_stagger_ms")]
    pub card_stagger_ms: u64,
    /// Pipeline connector sweep duration (default: 1800).
    #[serde(default = "default_connector_duration_ms")]
    pub connector_duration_ms: u64,
    /// Status indicator pulse period (default: 2000).
    #[serde(default = "default_pulse_period_ms")]
    pub pulse_period_ms: u64,
    /// Curve for counters and the pipeline connector: "linear",
    /// "ease-out-cubic" or "exponential-out" (default: "ease-out-cubic").
    #[serde(default)]
    pub easing: Easing,
}

/// Viewport intersection settings shared by every section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Fraction of a section that must be visible; 0.0 = any row (default: 0.0).
    #[serde(default)]
    pub threshold: f32,
    /// Rows added to (or removed from) the viewport before intersecting (default: 0).
    #[serde(default)]
    pub margin_rows: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive mode.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_frame_ms() -> u64 {
    33
}

fn default_counter_duration_ms() -> u64 {
    1500
}

fn default_type_interval_ms() -> u64 {
    100
}

fn default_cursor_blink_ms() -> u64 {
    500
}

fn default_contact_stagger_ms() -> u64 {
    100
}

fn default_card_stagger_ms() -> u64 {
    100
}

fn default_connector_duration_ms() -> u64 {
    1800
}

fn default_pulse_period_ms() -> u64 {
    2000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_ms: default_frame_ms(),
            counter_duration_ms: default_counter_duration_ms(),
            type_interval_ms: default_type_interval_ms(),
            cursor_blink_ms: default_cursor_blink_ms(),
            contact_stagger_ms: default_contact_stagger_ms(),
            card_stagger_ms: default_card_stagger_ms(),
            connector_duration_ms: default_connector_duration_ms(),
            pulse_period_ms: default_pulse_period_ms(),
            easing: Easing::default(),
        }
    }
}

impl AnimationConfig {
    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    pub fn type_interval(&self) -> Duration {
        Duration::from_millis(self.type_interval_ms)
    }

    pub fn cursor_blink(&self) -> Duration {
        Duration::from_millis(self.cursor_blink_ms)
    }

    pub fn contact_stagger(&self) -> Duration {
        Duration::from_millis(self.contact_stagger_ms)
    }

    pub fn card_stagger(&self) -> Duration {
        Duration::from_millis(self.card_stagger_ms)
    }

    pub fn connector_duration(&self) -> Duration {
        Duration::from_millis(self.connector_duration_ms)
    }

    pub fn pulse_period(&self) -> Duration {
        Duration::from_millis(self.pulse_period_ms)
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            margin_rows: 0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
