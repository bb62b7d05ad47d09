use std::time::Duration;

/// Endlessly repeating phase, used by status dots and "active" markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    period: Duration,
    started_at: Option<Duration>,
}

impl Pulse {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            started_at: None,
        }
    }

    pub fn start(&mut self, now: Duration) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Position inside the current cycle, in `[0, 1)`. Zero when stopped.
    pub fn phase(&self, now: Duration) -> f64 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        if self.period.is_zero() {
            return 0.0;
        }
        let into = now.saturating_sub(start).as_nanos() % self.period.as_nanos();
        into as f64 / self.period.as_nanos() as f64
    }

    /// First half of the cycle.
    pub fn is_high(&self, now: Duration) -> bool {
        self.is_running() && self.phase(now) < 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn phase_wraps_every_period() {
        let mut pulse = Pulse::new(ms(2000));
        pulse.start(ms(0));
        assert_eq!(pulse.phase(ms(500)), 0.25);
        assert_eq!(pulse.phase(ms(2500)), 0.25);
    }

    #[test]
    fn high_for_first_half() {
        let mut pulse = Pulse::new(ms(2000));
        pulse.start(ms(0));
        assert!(pulse.is_high(ms(999)));
        assert!(!pulse.is_high(ms(1000)));
        assert!(pulse.is_high(ms(2000)));
    }

    #[test]
    fn stopped_pulse_is_flat() {
        let mut pulse = Pulse::new(ms(2000));
        pulse.start(ms(0));
        pulse.stop();
        assert!(!pulse.is_high(ms(100)));
        assert_eq!(pulse.phase(ms(100)), 0.0);
    }
}
