//! Scalar interpolation primitives: lerp and its inverse.

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Normalize `x` within `[a, b]` to a fraction (the inverse of [`lerp`]).
///
/// A zero-width interval (`a == b`) returns `0.0` instead of dividing by
/// zero, so two keyframes sharing a timestamp resolve to the earlier one.
#[inline]
pub fn unlerp(a: f32, b: f32, x: f32) -> f32 {
    if a == b {
        0.0
    } else {
        (x - a) / (b - a)
    }
}
