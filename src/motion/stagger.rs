use std::time::Duration;

/// Reveals `len` items in order, item `i` at `base_delay + i * increment`
/// after the trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaggeredList {
    len: usize,
    base_delay: Duration,
    increment: Duration,
    triggered_at: Option<Duration>,
    visible: usize,
    cancelled: bool,
}

impl StaggeredList {
    pub fn new(len: usize, increment: Duration) -> Self {
        Self {
            len,
            base_delay: Duration::ZERO,
            increment,
            triggered_at: None,
            visible: 0,
            cancelled: false,
        }
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Start the schedule at `at`. Later triggers are ignored.
    pub fn trigger(&mut self, at: Duration) -> bool {
        if self.cancelled || self.triggered_at.is_some() {
            return false;
        }
        self.triggered_at = Some(at);
        true
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered_at.is_some()
    }

    pub fn item_delay(&self, index: usize) -> Duration {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_delay + self.increment.saturating_mul(steps)
    }

    /// Returns whether any new item became visible.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.cancelled || self.visible == self.len {
            return false;
        }
        let Some(triggered_at) = self.triggered_at else {
            return false;
        };

        let origin = triggered_at + self.base_delay;
        if now < origin {
            return false;
        }

        let due = if self.increment.is_zero() {
            self.len
        } else {
            let steps = (now - origin).as_nanos() / self.increment.as_nanos();
            usize::try_from(steps)
                .unwrap_or(usize::MAX)
                .saturating_add(1)
                .min(self.len)
        };

        if due > self.visible {
            self.visible = due;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index < self.visible
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn is_complete(&self) -> bool {
        self.visible == self.len
    }

    pub fn flags(&self) -> Vec<bool> {
        (0..self.len).map(|index| self.is_visible(index)).collect()
    }
}
