//! Ordered keyframe timelines with time-based queries and interpolation.
//!
//! A [`Timeline`] owns a sequence of [`Keyframe`]s kept ascending by time and
//! answers nearest/exact/successor/predecessor lookups plus interpolated
//! sampling between the two keyframes that bracket a query time. It is the
//! primitive beneath animation curves and property timelines; playback loops,
//! easing libraries and persistence belong to the host.
//!
//! Lookups that find nothing answer with `None` rather than an error so that
//! per-frame sampling loops stay branch-cheap; out-of-range sample times
//! clamp to the boundary keyframe's value.

pub mod error;
pub mod interp;
pub mod keyframe;
pub mod timeline;
pub mod value;

pub use error::TimelineError;
pub use interp::{lerp, unlerp};
pub use keyframe::Keyframe;
pub use timeline::{Bracket, Timeline};
pub use value::Lerp;
