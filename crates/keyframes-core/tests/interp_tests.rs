use approx::assert_abs_diff_eq;
use keyframes_core::{lerp, unlerp};

/// it should lerp endpoints exactly and the midpoint linearly
#[test]
fn lerp_endpoints_and_midpoint() {
    assert_abs_diff_eq!(lerp(2.0, 4.0, 0.0), 2.0);
    assert_abs_diff_eq!(lerp(2.0, 4.0, 1.0), 4.0);
    assert_abs_diff_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    assert_abs_diff_eq!(lerp(-10.0, 10.0, 0.75), 5.0);
}

/// it should invert lerp over non-degenerate intervals
#[test]
fn unlerp_inverts_lerp() {
    for t in [0.0f32, 0.25, 0.5, 0.9, 1.0] {
        let x = lerp(-3.0, 5.0, t);
        assert_abs_diff_eq!(unlerp(-3.0, 5.0, x), t, epsilon = 1e-6);
    }
}

/// it should extrapolate fractions outside the interval
#[test]
fn unlerp_extrapolates_outside_interval() {
    assert_abs_diff_eq!(unlerp(0.0, 2.0, 4.0), 2.0);
    assert_abs_diff_eq!(unlerp(0.0, 2.0, -2.0), -1.0);
}

/// it should define the zero-width interval as t = 0 rather than NaN
#[test]
fn unlerp_zero_width_interval_is_zero() {
    assert_eq!(unlerp(1.0, 1.0, 1.0), 0.0);
    assert_eq!(unlerp(1.0, 1.0, 42.0), 0.0);
}
