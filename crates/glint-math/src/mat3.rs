//! 3x3 homogeneous matrices for 2D transforms.

use crate::scalar::Scalar;

/// Row-major 3x3 matrix: a 2D affine transform in homogeneous coordinates.
///
/// Pure affine transforms keep `[0, 0, 1]` in cells 2, 5 and 8, but nothing
/// enforces that: all nine cells are caller data, and
/// [`transform_point`](Mat3::transform_point) performs a full perspective
/// divide either way.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3<S = f32>(pub [S; 9]);

/// Single-precision `Mat3`, the form uploaded as a `mat3` uniform.
pub type Mat3f = Mat3<f32>;
/// Double-precision `Mat3` for callers that want `f64` accumulation.
pub type Mat3d = Mat3<f64>;

impl<S: Scalar> Default for Mat3<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Mat3<S> {
    /// The identity transform.
    pub fn identity() -> Self {
        let o = S::one();
        let z = S::zero();
        Mat3([o, z, z, z, o, z, z, z, o])
    }

    /// Maps pixel space (origin top-left, Y down, `[0,w]×[0,h]`) to clip
    /// space `[-1,1]²`, flipping Y so pixel row 0 lands at the top.
    pub fn projection(width: S, height: S) -> Self {
        let two = S::from_f64(2.0);
        let o = S::one();
        let z = S::zero();
        Mat3([two / width, z, z, z, -(two / height), z, -o, o, o])
    }

    /// Translation by `(tx, ty)`.
    pub fn translation(tx: S, ty: S) -> Self {
        let o = S::one();
        let z = S::zero();
        Mat3([o, z, z, z, o, z, tx, ty, o])
    }

    /// Rotation by `angle_radians`.
    ///
    /// Plain `cos`/`sin`, no range normalization; any finite angle works
    /// through periodicity. Positive angles turn counter-clockwise in math
    /// orientation; under the flipped-Y pixel projection the visual sense
    /// inverts.
    pub fn rotation(angle_radians: S) -> Self {
        let c = angle_radians.cos();
        let s = angle_radians.sin();
        let o = S::one();
        let z = S::zero();
        Mat3([c, -s, z, s, c, z, z, z, o])
    }

    /// Non-uniform scale by `(sx, sy)`.
    ///
    /// Zero and negative factors are accepted as-is; a zero factor makes the
    /// matrix singular, which `inverse` then turns into non-finite output.
    pub fn scaling(sx: S, sy: S) -> Self {
        let o = S::one();
        let z = S::zero();
        Mat3([sx, z, z, z, sy, z, z, z, o])
    }

    /// Computes `other ⨉ self`.
    ///
    /// Under [`transform_point`](Mat3::transform_point) the product applies
    /// `other` to the point first, then `self`. A fluent chain like
    /// `identity().translate(..).rotate(..).scale(..)` therefore scales
    /// geometry first, then rotates, then translates, which is the order
    /// the demos rely on. The operand order is load-bearing: swapping it
    /// flips the composition of every dependent transform.
    pub fn multiply(self, other: Mat3<S>) -> Mat3<S> {
        let a = self.0;
        let b = other.0;
        let a00 = a[0];
        let a01 = a[1];
        let a02 = a[2];
        let a10 = a[3];
        let a11 = a[4];
        let a12 = a[5];
        let a20 = a[6];
        let a21 = a[7];
        let a22 = a[8];
        let b00 = b[0];
        let b01 = b[1];
        let b02 = b[2];
        let b10 = b[3];
        let b11 = b[4];
        let b12 = b[5];
        let b20 = b[6];
        let b21 = b[7];
        let b22 = b[8];

        Mat3([
            b00 * a00 + b01 * a10 + b02 * a20,
            b00 * a01 + b01 * a11 + b02 * a21,
            b00 * a02 + b01 * a12 + b02 * a22,
            b10 * a00 + b11 * a10 + b12 * a20,
            b10 * a01 + b11 * a11 + b12 * a21,
            b10 * a02 + b11 * a12 + b12 * a22,
            b20 * a00 + b21 * a10 + b22 * a20,
            b20 * a01 + b21 * a11 + b22 * a21,
            b20 * a02 + b21 * a12 + b22 * a22,
        ])
    }

    /// Appends a translation, applied to points before the transforms
    /// already in `self`.
    pub fn translate(self, tx: S, ty: S) -> Self {
        self.multiply(Self::translation(tx, ty))
    }

    /// Appends a rotation, applied to points before the transforms already
    /// in `self`.
    pub fn rotate(self, angle_radians: S) -> Self {
        self.multiply(Self::rotation(angle_radians))
    }

    /// Appends a scale, applied to points before the transforms already in
    /// `self`.
    pub fn scale(self, sx: S, sy: S) -> Self {
        self.multiply(Self::scaling(sx, sy))
    }

    /// `self.multiply(projection(width, height))`, the usual last step
    /// before a matrix leaves pixel space.
    pub fn project(self, width: S, height: S) -> Self {
        self.multiply(Self::projection(width, height))
    }

    /// Transforms the 2D point `v` (implicit third coordinate 1) and divides
    /// by the homogeneous `w`.
    ///
    /// The divide is unconditional: `w == 0` produces `inf`/`NaN`
    /// coordinates per IEEE-754, never an error.
    pub fn transform_point(self, v: [S; 2]) -> [S; 2] {
        let m = self.0;
        let v0 = v[0];
        let v1 = v[1];
        let d = v0 * m[2] + v1 * m[5] + m[8];
        [
            (v0 * m[0] + v1 * m[3] + m[6]) / d,
            (v0 * m[1] + v1 * m[4] + m[7]) / d,
        ]
    }

    /// Inverse via the adjugate/cofactor method.
    ///
    /// A singular input divides by a zero determinant; every output cell
    /// comes back `inf` or `NaN` and no error is raised.
    pub fn inverse(self) -> Mat3<S> {
        let m = self.0;
        let m00 = m[0];
        let m01 = m[1];
        let m02 = m[2];
        let m10 = m[3];
        let m11 = m[4];
        let m12 = m[5];
        let m20 = m[6];
        let m21 = m[7];
        let m22 = m[8];

        // First-column cofactors, reused for the determinant.
        let b01 = m22 * m11 - m12 * m21;
        let b11 = -(m22 * m10) + m12 * m20;
        let b21 = m21 * m10 - m11 * m20;

        let det = m00 * b01 + m01 * b11 + m02 * b21;
        let inv_det = S::one() / det;

        Mat3([
            b01 * inv_det,
            (-(m22 * m01) + m02 * m21) * inv_det,
            (m12 * m01 - m02 * m11) * inv_det,
            b11 * inv_det,
            (m22 * m00 - m02 * m20) * inv_det,
            (-(m12 * m00) + m02 * m10) * inv_det,
            b21 * inv_det,
            (-(m21 * m00) + m01 * m20) * inv_det,
            (m11 * m00 - m01 * m10) * inv_det,
        ])
    }
}

// ── Destination-buffer variants ────────────────────────────────────────────
//
// Each matrix producer has an `*_into` twin that writes into caller-owned
// storage, for render loops that reuse one scratch matrix per frame instead
// of materializing intermediates.
impl<S: Scalar> Mat3<S> {
    #[inline]
    pub fn identity_into(dst: &mut Mat3<S>) {
        *dst = Self::identity();
    }

    #[inline]
    pub fn projection_into(width: S, height: S, dst: &mut Mat3<S>) {
        *dst = Self::projection(width, height);
    }

    #[inline]
    pub fn translation_into(tx: S, ty: S, dst: &mut Mat3<S>) {
        *dst = Self::translation(tx, ty);
    }

    #[inline]
    pub fn rotation_into(angle_radians: S, dst: &mut Mat3<S>) {
        *dst = Self::rotation(angle_radians);
    }

    #[inline]
    pub fn scaling_into(sx: S, sy: S, dst: &mut Mat3<S>) {
        *dst = Self::scaling(sx, sy);
    }

    #[inline]
    pub fn multiply_into(self, other: Mat3<S>, dst: &mut Mat3<S>) {
        *dst = self.multiply(other);
    }

    #[inline]
    pub fn translate_into(self, tx: S, ty: S, dst: &mut Mat3<S>) {
        *dst = self.translate(tx, ty);
    }

    #[inline]
    pub fn rotate_into(self, angle_radians: S, dst: &mut Mat3<S>) {
        *dst = self.rotate(angle_radians);
    }

    #[inline]
    pub fn scale_into(self, sx: S, sy: S, dst: &mut Mat3<S>) {
        *dst = self.scale(sx, sy);
    }

    #[inline]
    pub fn project_into(self, width: S, height: S, dst: &mut Mat3<S>) {
        *dst = self.project(width, height);
    }

    #[inline]
    pub fn inverse_into(self, dst: &mut Mat3<S>) {
        *dst = self.inverse();
    }
}
