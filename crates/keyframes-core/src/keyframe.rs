//! The keyframe record: a value anchored at a timestamp.

use serde::{Deserialize, Serialize};

/// A single keyframe: a known value at a specific time.
///
/// Times are in caller-supplied units (seconds, frames, beats); the timeline
/// only ever compares them. All keyframes in one timeline should share the
/// same value shape for the default lerp path to be meaningful; mixed shapes
/// need the interpolator hook on [`crate::Timeline::value_with`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe<V> {
    /// Timestamp, signed, any finite magnitude.
    pub time: f32,
    pub value: V,
}

impl<V> Keyframe<V> {
    #[inline]
    pub fn new(time: f32, value: V) -> Self {
        Self { time, value }
    }
}
