//! Loose 2D vector helpers.
//!
//! These operate on bare coordinate pairs rather than a vector struct;
//! demo code feeds slider values straight in without packing.

use crate::scalar::Scalar;

/// Dot product of `(x1, y1)` and `(x2, y2)`.
#[inline]
pub fn dot<S: Scalar>(x1: S, y1: S, x2: S, y2: S) -> S {
    x1 * x2 + y1 * y2
}

/// Euclidean distance between two points.
#[inline]
pub fn distance<S: Scalar>(x1: S, y1: S, x2: S, y2: S) -> S {
    let dx = x1 - x2;
    let dy = y1 - y2;
    (dx * dx + dy * dy).sqrt()
}

/// Normalizes `(x, y)` to unit length.
///
/// Lengths at or below `1e-5` collapse to `[0, 0]` instead of dividing by a
/// near-zero value, so degenerate input yields the zero vector rather than a
/// unit one.
#[inline]
pub fn normalize<S: Scalar>(x: S, y: S) -> [S; 2] {
    let len = distance(S::zero(), S::zero(), x, y);
    if len > S::from_f64(1e-5) {
        [x / len, y / len]
    } else {
        [S::zero(), S::zero()]
    }
}

/// Reflects the incident vector `(ix, iy)` about the axis with normal
/// `(nx, ny)`: `I - 2·dot(N, I)·N`.
///
/// The normal must already be unit length; it is not normalized here.
#[inline]
pub fn reflect<S: Scalar>(ix: S, iy: S, nx: S, ny: S) -> [S; 2] {
    let d = dot(nx, ny, ix, iy);
    let two = S::from_f64(2.0);
    [ix - two * d * nx, iy - two * d * ny]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── dot / distance ────────────────────────────────────────────────────

    #[test]
    fn dot_orthogonal_is_zero() {
        assert_eq!(dot(1.0, 0.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn dot_parallel() {
        assert_eq!(dot(2.0, 3.0, 2.0, 3.0), 13.0);
    }

    #[test]
    fn distance_345() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(distance(1.0, 1.0, 4.0, 5.0), 5.0);
    }

    // ── normalize ─────────────────────────────────────────────────────────

    #[test]
    fn normalize_345() {
        assert_eq!(normalize(3.0, 4.0), [0.6, 0.8]);
    }

    #[test]
    fn normalize_zero_vector_is_zero() {
        assert_eq!(normalize(0.0f32, 0.0), [0.0, 0.0]);
    }

    #[test]
    fn normalize_below_threshold_is_zero() {
        // 1e-5 is the cutoff, inclusive.
        assert_eq!(normalize(1e-6f64, 0.0), [0.0, 0.0]);
    }

    #[test]
    fn normalize_just_above_threshold() {
        let [x, y] = normalize(2e-5f64, 0.0);
        assert!((x - 1.0).abs() < 1e-12);
        assert_eq!(y, 0.0);
    }

    // ── reflect ───────────────────────────────────────────────────────────

    #[test]
    fn reflect_across_vertical_normal() {
        // Incoming (1, -1) bouncing off a floor with normal (0, 1).
        assert_eq!(reflect(1.0, -1.0, 0.0, 1.0), [1.0, 1.0]);
    }

    #[test]
    fn reflect_head_on() {
        assert_eq!(reflect(0.0, -1.0, 0.0, 1.0), [0.0, 1.0]);
    }
}
