use std::time::Duration;

use serde::Serialize;

use super::error::MotionError;
use super::interval::Interval;

/// Text and timings for a typewriter line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterConfig {
    text: String,
    type_interval: Duration,
    blink_interval: Duration,
}

impl TypewriterConfig {
    pub fn new(text: impl Into<String>, type_interval: Duration) -> Result<Self, MotionError> {
        if type_interval.is_zero() {
            return Err(MotionError::ZeroTypeInterval);
        }
        Ok(Self {
            text: text.into(),
            type_interval,
            blink_interval: Duration::from_millis(500),
        })
    }

    /// Zero disables blinking; the cursor then stays on.
    pub fn with_blink_interval(mut self, blink_interval: Duration) -> Self {
        self.blink_interval = blink_interval;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Toggles on/off every interval for as long as it is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlinkingCursor {
    timer: Interval,
    on: bool,
}

impl BlinkingCursor {
    pub fn new(interval: Duration) -> Self {
        Self {
            timer: Interval::new(interval),
            on: true,
        }
    }

    pub fn mount(&mut self, now: Duration) {
        self.timer.start(now);
    }

    pub fn tick(&mut self, now: Duration) -> bool {
        let fired = self.timer.poll(now);
        if fired % 2 == 1 {
            self.on = !self.on;
        }
        fired > 0
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

/// Latch that opens exactly once and remembers when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealGate {
    unlocked_at: Option<Duration>,
}

impl RevealGate {
    /// Returns `true` only for the call that opens the gate.
    pub fn unlock(&mut self, at: Duration) -> bool {
        if self.unlocked_at.is_some() {
            return false;
        }
        self.unlocked_at = Some(at);
        true
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }

    pub fn unlocked_at(&self) -> Option<Duration> {
        self.unlocked_at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypewriterPhase {
    Idle,
    Typing,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypewriterDisplay {
    pub text: String,
    pub shown_length: usize,
    pub cursor_on: bool,
    pub commands_unlocked: bool,
    pub phase: TypewriterPhase,
}

/// Types a fixed string one character per tick once started.
///
/// `Idle → Typing → Complete`. Reaching `Complete` opens the
/// [`RevealGate`] at the exact time the last character was due, so
/// anything scheduled off the gate is independent of frame jitter. The
/// cursor blinks from mount until [`TypewriterSequencer::cancel`].
#[derive(Debug, Clone)]
pub struct TypewriterSequencer {
    text: String,
    char_count: usize,
    shown_length: usize,
    phase: TypewriterPhase,
    started_at: Option<Duration>,
    typing: Interval,
    cursor: BlinkingCursor,
    gate: RevealGate,
    mounted: bool,
}

impl TypewriterSequencer {
    /// Mount at `now`: the cursor starts blinking, typing waits for `start`.
    pub fn new(config: TypewriterConfig, now: Duration) -> Self {
        let mut cursor = BlinkingCursor::new(config.blink_interval);
        cursor.mount(now);
        let char_count = config.text.chars().count();
        Self {
            text: config.text,
            char_count,
            shown_length: 0,
            phase: TypewriterPhase::Idle,
            started_at: None,
            typing: Interval::new(config.type_interval),
            cursor,
            gate: RevealGate::default(),
            mounted: true,
        }
    }

    pub fn start(&mut self, now: Duration) {
        if !self.mounted || self.phase != TypewriterPhase::Idle {
            return;
        }
        self.started_at = Some(now);
        if self.char_count == 0 {
            self.complete(now);
            return;
        }
        self.phase = TypewriterPhase::Typing;
        self.typing.start(now);
    }

    /// Advance to `now`. Returns whether anything visible changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if !self.mounted {
            return false;
        }

        let mut changed = self.cursor.tick(now);
        if self.phase == TypewriterPhase::Typing {
            let fired = self.typing.poll(now) as usize;
            if fired > 0 {
                self.shown_length = (self.shown_length + fired).min(self.char_count);
                changed = true;
                if self.shown_length == self.char_count {
                    let started = self.started_at.unwrap_or(now);
                    let steps = u32::try_from(self.char_count).unwrap_or(u32::MAX);
                    let due = started + self.typing.period().saturating_mul(steps);
                    self.complete(due);
                }
            }
        }
        changed
    }

    /// Teardown: stops both timers; later ticks are no-ops.
    pub fn cancel(&mut self) {
        self.mounted = false;
        self.typing.cancel();
        self.cursor.cancel();
    }

    fn complete(&mut self, at: Duration) {
        self.phase = TypewriterPhase::Complete;
        self.shown_length = self.char_count;
        self.typing.cancel();
        if self.gate.unlock(at) {
            tracing::debug!(text = %self.text, at_ms = at.as_millis() as u64, "typewriter complete");
        }
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn shown_length(&self) -> usize {
        self.shown_length
    }

    pub fn shown_text(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.shown_length)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }

    pub fn cursor_on(&self) -> bool {
        self.cursor.is_on()
    }

    pub fn gate(&self) -> &RevealGate {
        &self.gate
    }

    pub fn commands_unlocked(&self) -> bool {
        self.gate.is_unlocked()
    }

    pub fn current_display(&self) -> TypewriterDisplay {
        TypewriterDisplay {
            text: self.shown_text().to_string(),
            shown_length: self.shown_length,
            cursor_on: self.cursor.is_on(),
            commands_unlocked: self.gate.is_unlocked(),
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn sequencer(text: &str, tick_ms: u64) -> TypewriterSequencer {
        TypewriterSequencer::new(TypewriterConfig::new(text, ms(tick_ms)).unwrap(), ms(0))
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert_eq!(
            TypewriterConfig::new("x", Duration::ZERO),
            Err(MotionError::ZeroTypeInterval)
        );
    }

    #[test]
    fn idle_until_started() {
        let mut tw = sequencer("$ ls", 80);
        tw.tick(ms(1_000));
        assert_eq!(tw.phase(), TypewriterPhase::Idle);
        assert_eq!(tw.shown_text(), "");
    }

    #[test]
    fn types_one_char_per_tick() {
        let mut tw = sequencer("abc", 100);
        tw.start(ms(0));
        tw.tick(ms(100));
        assert_eq!(tw.shown_text(), "a");
        tw.tick(ms(200));
        assert_eq!(tw.shown_text(), "ab");
        assert!(!tw.commands_unlocked());
        tw.tick(ms(300));
        assert_eq!(tw.shown_text(), "abc");
        assert!(tw.commands_unlocked());
        assert_eq!(tw.phase(), TypewriterPhase::Complete);
    }

    #[test]
    fn gate_time_is_exact_even_with_late_frame() {
        let mut tw = sequencer("abcd", 80);
        tw.start(ms(20));
        tw.tick(ms(1_000));
        assert_eq!(tw.gate().unlocked_at(), Some(ms(20 + 4 * 80)));
    }

    #[test]
    fn multibyte_text_slices_on_char_boundaries() {
        let mut tw = sequencer("✓ ok", 10);
        tw.start(ms(0));
        tw.tick(ms(10));
        assert_eq!(tw.shown_text(), "✓");
        tw.tick(ms(20));
        assert_eq!(tw.shown_text(), "✓ ");
    }

    #[test]
    fn empty_text_unlocks_on_start() {
        let mut tw = sequencer("", 80);
        tw.start(ms(5));
        assert!(tw.commands_unlocked());
        assert_eq!(tw.gate().unlocked_at(), Some(ms(5)));
    }

    #[test]
    fn cursor_blinks_independently_of_typing() {
        let mut tw = sequencer("abc", 100);
        assert!(tw.cursor_on());
        tw.tick(ms(500));
        assert!(!tw.cursor_on());
        tw.tick(ms(1_000));
        assert!(tw.cursor_on());
        assert_eq!(tw.phase(), TypewriterPhase::Idle);
    }

    #[test]
    fn cursor_keeps_blinking_after_completion() {
        let mut tw = sequencer("a", 100);
        tw.start(ms(0));
        tw.tick(ms(100));
        assert!(tw.commands_unlocked());
        tw.tick(ms(500));
        assert!(!tw.cursor_on());
    }

    #[test]
    fn disabled_blink_keeps_cursor_on() {
        let config = TypewriterConfig::new("a", ms(100))
            .unwrap()
            .with_blink_interval(Duration::ZERO);
        let mut tw = TypewriterSequencer::new(config, ms(0));
        tw.tick(ms(5_000));
        assert!(tw.cursor_on());
    }

    #[test]
    fn cancel_stops_all_mutation() {
        let mut tw = sequencer("hello", 100);
        tw.start(ms(0));
        tw.tick(ms(200));
        tw.cancel();
        let before = tw.current_display();
        assert!(!tw.tick(ms(10_000)));
        assert_eq!(tw.current_display(), before);
        assert!(!tw.commands_unlocked());
    }

    #[test]
    fn start_after_cancel_is_ignored() {
        let mut tw = sequencer("hello", 100);
        tw.cancel();
        tw.start(ms(0));
        assert_eq!(tw.phase(), TypewriterPhase::Idle);
    }
}
