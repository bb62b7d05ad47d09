use std::time::Duration;

use super::easing::Easing;

/// Time-parameterised interpolation from one value to another.
///
/// A tween is a pure function of the clock once started: it stores the
/// start time and computes the value on demand. Owners decide when to stop
/// reading it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    delay: Duration,
    duration: Duration,
    easing: Easing,
    started_at: Option<Duration>,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            delay: Duration::ZERO,
            duration,
            easing: Easing::default(),
            started_at: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    /// Start at `now`. Restarting an already running tween is ignored.
    pub fn start(&mut self, now: Duration) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn started_at(&self) -> Option<Duration> {
        self.started_at
    }

    /// Time spent animating, excluding the delay.
    pub fn elapsed(&self, now: Duration) -> Duration {
        match self.started_at {
            Some(start) => now.saturating_sub(start + self.delay),
            None => Duration::ZERO,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Duration) -> f64 {
        if self.started_at.is_none() {
            return 0.0;
        }
        let elapsed = self.elapsed(now);
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }
        elapsed.as_secs_f64() / self.duration.as_secs_f64()
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.started_at.is_some() && self.progress(now) >= 1.0
    }

    pub fn value_at(&self, now: Duration) -> f64 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }
}
