use std::time::Duration;

use serde::Serialize;

use super::error::MotionError;

/// Vertical span of a content block, in page rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Region {
    pub top: u32,
    pub height: u32,
}

impl Region {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

/// How much of a region must be on screen before it counts as seen.
///
/// `amount` is the visible fraction of the region; `0.0` means "any row".
/// `margin_rows` grows (positive) or shrinks (negative) the viewport
/// before intersecting. Fixed for the life of the trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealThreshold {
    amount: f32,
    margin_rows: i32,
}

impl RevealThreshold {
    pub fn new(amount: f32, margin_rows: i32) -> Result<Self, MotionError> {
        if !(0.0..=1.0).contains(&amount) {
            return Err(MotionError::InvalidThreshold { value: amount });
        }
        Ok(Self {
            amount,
            margin_rows,
        })
    }

    pub fn amount(&self) -> f32 {
        self.amount
    }

    pub fn margin_rows(&self) -> i32 {
        self.margin_rows
    }

    fn is_crossed(&self, fraction: f32) -> bool {
        if self.amount == 0.0 {
            fraction > 0.0
        } else {
            fraction >= self.amount
        }
    }
}

impl Default for RevealThreshold {
    fn default() -> Self {
        Self {
            amount: 0.0,
            margin_rows: 0,
        }
    }
}

/// Capability that reports how much of a region is currently visible.
///
/// `None` means the platform cannot tell; the trigger then degrades to
/// "revealed" so content is never stuck hidden.
pub trait VisibilityObserver {
    fn visible_fraction(&self, region: Region, margin_rows: i32) -> Option<f32>;
}

/// Scrolling viewport over the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportObserver {
    offset: u32,
    height: u32,
}

impl ViewportObserver {
    pub fn new(offset: u32, height: u32) -> Self {
        Self { offset, height }
    }
}

impl VisibilityObserver for ViewportObserver {
    /// Overlap measured against whichever is shorter, the region or the
    /// viewport, so a section taller than the screen still reads `1.0`
    /// once it fills it. A shrinking margin never leaves less than one row.
    fn visible_fraction(&self, region: Region, margin_rows: i32) -> Option<f32> {
        let height = i64::from(self.height);
        if height == 0 {
            return Some(0.0);
        }
        let margin = i64::from(margin_rows).max(-((height - 1) / 2));
        let view_top = i64::from(self.offset) - margin;
        let view_bottom = i64::from(self.offset) + height + margin;

        let top = i64::from(region.top);
        let bottom = i64::from(region.bottom());
        if region.height == 0 {
            let inside = top >= view_top && top < view_bottom;
            return Some(if inside { 1.0 } else { 0.0 });
        }

        let overlap = (bottom.min(view_bottom) - top.max(view_top)).max(0);
        let window = (view_bottom - view_top).min(height);
        let full = i64::from(region.height).min(window);
        Some((overlap as f32 / full as f32).min(1.0))
    }
}

/// Observer for non-interactive surfaces: everything is already in view.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysRevealed;

impl VisibilityObserver for AlwaysRevealed {
    fn visible_fraction(&self, _region: Region, _margin_rows: i32) -> Option<f32> {
        Some(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RevealState {
    pub revealed: bool,
}

/// One-shot visibility latch for a content region.
///
/// Flips to revealed the first time the observer reports the threshold
/// crossed and never observes again afterwards.
#[derive(Debug, Clone)]
pub struct RevealTrigger {
    threshold: RevealThreshold,
    state: RevealState,
    revealed_at: Option<Duration>,
}

impl RevealTrigger {
    pub fn new(threshold: RevealThreshold) -> Self {
        Self {
            threshold,
            state: RevealState::default(),
            revealed_at: None,
        }
    }

    /// Trigger that is revealed from the moment it is created.
    pub fn immediate(now: Duration) -> Self {
        Self {
            threshold: RevealThreshold::default(),
            state: RevealState { revealed: true },
            revealed_at: Some(now),
        }
    }

    /// Returns `true` only on the call that performs the reveal.
    pub fn observe(
        &mut self,
        observer: &dyn VisibilityObserver,
        region: Region,
        now: Duration,
    ) -> bool {
        if self.state.revealed {
            return false;
        }

        let crossed = match observer.visible_fraction(region, self.threshold.margin_rows) {
            Some(fraction) => self.threshold.is_crossed(fraction),
            None => {
                tracing::warn!(
                    top = region.top,
                    height = region.height,
                    "visibility unavailable, revealing region"
                );
                true
            }
        };

        if crossed {
            self.state.revealed = true;
            self.revealed_at = Some(now);
        }
        crossed
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state.revealed
    }

    pub fn revealed_at(&self) -> Option<Duration> {
        self.revealed_at
    }
}
