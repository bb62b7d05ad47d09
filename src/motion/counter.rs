use std::time::Duration;

use serde::Serialize;

use super::easing::Easing;
use super::error::MotionError;
use super::tween::Tween;

/// Parameters of a count-up animation, validated at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterConfig {
    target: f64,
    duration: Duration,
    decimals: u8,
    easing: Easing,
}

impl CounterConfig {
    /// Reject targets a counter must never animate toward.
    pub fn new(target: f64, duration: Duration, decimals: u8) -> Result<Self, MotionError> {
        if !target.is_finite() || target < 0.0 {
            return Err(MotionError::InvalidTarget { value: target });
        }
        Ok(Self {
            target,
            duration,
            decimals,
            easing: Easing::default(),
        })
    }

    /// Like [`CounterConfig::new`], with the target clamped to 100.
    pub fn percent(target: f64, duration: Duration, decimals: u8) -> Result<Self, MotionError> {
        let mut config = Self::new(target, duration, decimals)?;
        config.target = config.target.min(100.0);
        Ok(config)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterPhase {
    Idle,
    Running,
    Complete,
    Cancelled,
}

/// What the presentation layer needs to draw a counter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterDisplay {
    pub value: f64,
    pub text: String,
    pub phase: CounterPhase,
}

/// Interpolates a displayed number from 0 to its target once started.
#[derive(Debug, Clone)]
pub struct NumericCounter {
    target: f64,
    decimals: u8,
    tween: Tween,
    phase: CounterPhase,
    current: f64,
    elapsed: Duration,
}

impl NumericCounter {
    pub fn new(config: CounterConfig) -> Self {
        let tween = Tween::new(0.0, config.target, config.duration).with_easing(config.easing);
        Self {
            target: config.target,
            decimals: config.decimals,
            tween,
            phase: CounterPhase::Idle,
            current: 0.0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn start(&mut self, now: Duration) {
        if self.phase == CounterPhase::Idle {
            self.tween.start(now);
            self.phase = CounterPhase::Running;
        }
    }

    /// Advance to `now`. Returns whether the displayed value changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.phase != CounterPhase::Running {
            return false;
        }

        self.elapsed = self.tween.elapsed(now);
        let next = if self.tween.is_finished(now) {
            self.phase = CounterPhase::Complete;
            tracing::debug!(value = self.target, "counter complete");
            self.target
        } else {
            round_to(self.tween.value_at(now), self.decimals).min(self.target)
        };

        let changed = next != self.current;
        self.current = next;
        changed
    }

    /// Teardown: no further mutation after this.
    pub fn cancel(&mut self) {
        if self.phase != CounterPhase::Complete {
            self.phase = CounterPhase::Cancelled;
        }
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn value(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn text(&self) -> String {
        format!("{:.*}", self.decimals as usize, self.current)
    }

    pub fn display(&self) -> CounterDisplay {
        CounterDisplay {
            value: self.current,
            text: self.text(),
            phase: self.phase,
        }
    }
}

fn round_to(value: f64, decimals: u8) -> f64 {
    let scale = 10_f64.powi(i32::from(decimals));
    (value * scale).round() / scale
}
