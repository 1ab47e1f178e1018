//! Error types for timeline validation.

use serde::{Deserialize, Serialize};

/// Invariant violations reported by [`crate::Timeline::validate`].
///
/// Query and sampling operations never raise these; they answer with `None`
/// sentinels so per-frame sampling loops stay cheap. Validation is an
/// explicit authoring-time check for hosts that mutate the backing sequence
/// directly.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TimelineError {
    /// A keyframe carries a NaN or infinite timestamp.
    #[error("non-finite keyframe time {time} at index {index}")]
    NonFiniteTime { index: usize, time: f32 },

    /// The backing sequence is no longer ascending by time.
    #[error("keyframes out of order at index {index}: {time} < {previous}")]
    OutOfOrder {
        index: usize,
        time: f32,
        previous: f32,
    },
}
