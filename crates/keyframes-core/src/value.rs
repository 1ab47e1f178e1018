//! Default value blending for sampled keyframes.

use crate::interp::lerp;

/// Linear blend between two values of the same shape.
///
/// Implemented for numeric scalars and fixed-length numeric sequences.
/// Richer value types (quaternions, colors, caller-defined curves) go
/// through the interpolator hook on [`crate::Timeline::value_with`] instead
/// of this trait.
pub trait Lerp {
    /// Blend from `self` toward `other` by `t` (0 = self, 1 = other).
    fn lerp(&self, other: &Self, t: f32) -> Self
    where
        Self: Sized;

    /// Blend into an existing destination, reusing its storage where the
    /// shape allows. High-frequency sampling loops use this to avoid
    /// allocating a fresh value per sample.
    fn lerp_into(&self, other: &Self, t: f32, out: &mut Self)
    where
        Self: Sized,
    {
        *out = self.lerp(other, t);
    }
}

impl Lerp for f32 {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        lerp(*self, *other, t)
    }
}

impl Lerp for f64 {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * f64::from(t)
    }
}

impl<const N: usize> Lerp for [f32; N] {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        let mut out = [0.0; N];
        for i in 0..N {
            out[i] = lerp(self[i], other[i], t);
        }
        out
    }

    #[inline]
    fn lerp_into(&self, other: &Self, t: f32, out: &mut Self) {
        for i in 0..N {
            out[i] = lerp(self[i], other[i], t);
        }
    }
}

/// Element-wise over pairs; mismatched lengths truncate to the shorter
/// sequence (mixed shapes are outside the default-lerp contract).
impl Lerp for Vec<f32> {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self.iter()
            .zip(other)
            .map(|(a, b)| lerp(*a, *b, t))
            .collect()
    }

    fn lerp_into(&self, other: &Self, t: f32, out: &mut Self) {
        out.clear();
        out.extend(self.iter().zip(other).map(|(a, b)| lerp(*a, *b, t)));
    }
}
