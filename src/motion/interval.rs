use std::time::Duration;

/// Repeating timer polled against an external clock.
///
/// `poll` reports how many periods elapsed since the previous poll, so a
/// slow frame never drops ticks. A cancelled or never-started interval
/// reports zero forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next_due: Option<Duration>,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Arm the timer; the first fire is one period after `now`.
    /// A zero period never arms.
    pub fn start(&mut self, now: Duration) {
        if self.period.is_zero() {
            return;
        }
        self.next_due = Some(now + self.period);
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.next_due
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn poll(&mut self, now: Duration) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due {
            return 0;
        }

        let behind = (now - due).as_nanos() / self.period.as_nanos();
        let fired = u32::try_from(behind).unwrap_or(u32::MAX - 1) + 1;
        self.next_due = Some(due + self.period * fired);
        fired
    }
}
