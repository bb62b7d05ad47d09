//! Reveal-and-animate primitives.
//!
//! Every animated element of the page is one of a handful of small state
//! machines driven by an explicit clock value:
//!
//! ```text
//! VisibilityObserver ──→ RevealTrigger ──┬──→ NumericCounter
//!                                        ├──→ StaggeredList
//!                                        └──→ TypewriterSequencer ──→ RevealGate ──→ StaggeredList
//! ```
//!
//! Nothing in this module owns a thread or a real timer. Callers pass the
//! current time (usually from a [`Clock`]) into `start`/`tick`, which keeps
//! the behavior deterministic under a [`ManualClock`]. `cancel` is the
//! teardown hook: after it runs, `tick` never mutates state again.

mod clock;
mod counter;
mod easing;
mod error;
mod interval;
mod pulse;
mod reveal;
mod stagger;
mod tween;
mod typewriter;

pub use clock::{Clock, ManualClock, SystemClock};
pub use counter::{CounterConfig, CounterDisplay, CounterPhase, NumericCounter};
pub use easing::Easing;
pub use error::MotionError;
pub use interval::Interval;
pub use pulse::Pulse;
pub use reveal::{
    AlwaysRevealed, Region, RevealState, RevealThreshold, RevealTrigger, ViewportObserver,
    VisibilityObserver,
};
pub use stagger::StaggeredList;
pub use tween::Tween;
pub use typewriter::{
    BlinkingCursor, RevealGate, TypewriterConfig, TypewriterDisplay, TypewriterPhase,
    TypewriterSequencer,
};
