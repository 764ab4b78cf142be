use crate::scalar::Scalar;

/// Radians to degrees.
#[inline]
pub fn rad_to_deg<S: Scalar>(r: S) -> S {
    r * S::from_f64(180.0) / S::PI()
}

/// Degrees to radians.
#[inline]
pub fn deg_to_rad<S: Scalar>(d: S) -> S {
    d * S::PI() / S::from_f64(180.0)
}
