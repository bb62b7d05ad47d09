use thiserror::Error;

/// Configuration errors for animation primitives.
///
/// All of these are raised when a component is built. A component that was
/// constructed successfully never fails while animating.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("counter target must be a finite, non-negative number (got {value})")]
    InvalidTarget { value: f64 },

    #[error("typing interval must be greater than zero")]
    ZeroTypeInterval,

    #[error("reveal threshold must be within 0.0..=1.0 (got {value})")]
    InvalidThreshold { value: f32 },
}
