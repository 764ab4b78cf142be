use num_traits::{Float, FloatConst};

/// Matrix element type, implemented for `f32` and `f64`.
///
/// Precision is selected once at the call site, usually through the
/// [`Mat3f`](crate::Mat3f)/[`Mat3d`](crate::Mat3d) aliases, so it never
/// has to be threaded through individual calls.
pub trait Scalar: Float + FloatConst {
    /// Converts an `f64` literal to the element type.
    fn from_f64(v: f64) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}
