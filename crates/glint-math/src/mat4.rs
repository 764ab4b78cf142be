//! 4x4 homogeneous matrices for 3D camera work.
//!
//! Same conventions and composition orientation as [`mat3`](crate::mat3):
//! row-major flat storage, `multiply` computes `other ⨉ self`, degeneracies
//! propagate as IEEE-754 specials.

use crate::scalar::Scalar;

/// Row-major 4x4 matrix: a 3D transform in homogeneous coordinates.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4<S = f32>(pub [S; 16]);

/// Single-precision `Mat4`, the form uploaded as a `mat4` uniform.
pub type Mat4f = Mat4<f32>;
/// Double-precision `Mat4`.
pub type Mat4d = Mat4<f64>;

impl<S: Scalar> Default for Mat4<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Mat4<S> {
    /// The identity transform.
    pub fn identity() -> Self {
        let o = S::one();
        let z = S::zero();
        Mat4([
            o, z, z, z, //
            z, o, z, z, //
            z, z, o, z, //
            z, z, z, o,
        ])
    }

    /// Translation by `(tx, ty, tz)`.
    pub fn translation(tx: S, ty: S, tz: S) -> Self {
        let o = S::one();
        let z = S::zero();
        Mat4([
            o, z, z, z, //
            z, o, z, z, //
            z, z, o, z, //
            tx, ty, tz, o,
        ])
    }

    /// Rotation around the X axis.
    pub fn x_rotation(angle_radians: S) -> Self {
        let c = angle_radians.cos();
        let s = angle_radians.sin();
        let o = S::one();
        let z = S::zero();
        Mat4([
            o, z, z, z, //
            z, c, s, z, //
            z, -s, c, z, //
            z, z, z, o,
        ])
    }

    /// Rotation around the Y axis.
    pub fn y_rotation(angle_radians: S) -> Self {
        let c = angle_radians.cos();
        let s = angle_radians.sin();
        let o = S::one();
        let z = S::zero();
        Mat4([
            c, z, -s, z, //
            z, o, z, z, //
            s, z, c, z, //
            z, z, z, o,
        ])
    }

    /// Rotation around the Z axis.
    pub fn z_rotation(angle_radians: S) -> Self {
        let c = angle_radians.cos();
        let s = angle_radians.sin();
        let o = S::one();
        let z = S::zero();
        Mat4([
            c, s, z, z, //
            -s, c, z, z, //
            z, z, o, z, //
            z, z, z, o,
        ])
    }

    /// Non-uniform scale by `(sx, sy, sz)`. No validation, as in 2D.
    pub fn scaling(sx: S, sy: S, sz: S) -> Self {
        let o = S::one();
        let z = S::zero();
        Mat4([
            sx, z, z, z, //
            z, sy, z, z, //
            z, z, sz, z, //
            z, z, z, o,
        ])
    }

    /// WebGL-convention perspective frustum.
    ///
    /// `fov_y_radians` is the vertical field of view; depth maps `-z_near`
    /// to clip -1 and `-z_far` to clip +1 after the perspective divide.
    pub fn perspective(fov_y_radians: S, aspect: S, z_near: S, z_far: S) -> Self {
        let f = (S::FRAC_PI_2() - fov_y_radians * S::from_f64(0.5)).tan();
        let range_inv = S::one() / (z_near - z_far);
        let two = S::from_f64(2.0);
        let o = S::one();
        let z = S::zero();
        Mat4([
            f / aspect, z, z, z, //
            z, f, z, z, //
            z, z, (z_near + z_far) * range_inv, -o, //
            z, z, z_near * z_far * range_inv * two, z,
        ])
    }

    /// Computes `other ⨉ self`, with the same operand orientation as
    /// [`Mat3::multiply`](crate::Mat3::multiply): in a fluent chain the last
    /// appended transform touches vectors first.
    pub fn multiply(self, other: Mat4<S>) -> Mat4<S> {
        let a = self.0;
        let b = other.0;
        let a00 = a[0];
        let a01 = a[1];
        let a02 = a[2];
        let a03 = a[3];
        let a10 = a[4];
        let a11 = a[5];
        let a12 = a[6];
        let a13 = a[7];
        let a20 = a[8];
        let a21 = a[9];
        let a22 = a[10];
        let a23 = a[11];
        let a30 = a[12];
        let a31 = a[13];
        let a32 = a[14];
        let a33 = a[15];
        let b00 = b[0];
        let b01 = b[1];
        let b02 = b[2];
        let b03 = b[3];
        let b10 = b[4];
        let b11 = b[5];
        let b12 = b[6];
        let b13 = b[7];
        let b20 = b[8];
        let b21 = b[9];
        let b22 = b[10];
        let b23 = b[11];
        let b30 = b[12];
        let b31 = b[13];
        let b32 = b[14];
        let b33 = b[15];

        Mat4([
            b00 * a00 + b01 * a10 + b02 * a20 + b03 * a30,
            b00 * a01 + b01 * a11 + b02 * a21 + b03 * a31,
            b00 * a02 + b01 * a12 + b02 * a22 + b03 * a32,
            b00 * a03 + b01 * a13 + b02 * a23 + b03 * a33,
            b10 * a00 + b11 * a10 + b12 * a20 + b13 * a30,
            b10 * a01 + b11 * a11 + b12 * a21 + b13 * a31,
            b10 * a02 + b11 * a12 + b12 * a22 + b13 * a32,
            b10 * a03 + b11 * a13 + b12 * a23 + b13 * a33,
            b20 * a00 + b21 * a10 + b22 * a20 + b23 * a30,
            b20 * a01 + b21 * a11 + b22 * a21 + b23 * a31,
            b20 * a02 + b21 * a12 + b22 * a22 + b23 * a32,
            b20 * a03 + b21 * a13 + b22 * a23 + b23 * a33,
            b30 * a00 + b31 * a10 + b32 * a20 + b33 * a30,
            b30 * a01 + b31 * a11 + b32 * a21 + b33 * a31,
            b30 * a02 + b31 * a12 + b32 * a22 + b33 * a32,
            b30 * a03 + b31 * a13 + b32 * a23 + b33 * a33,
        ])
    }

    /// Appends a translation, applied to vectors before the transforms
    /// already in `self`.
    pub fn translate(self, tx: S, ty: S, tz: S) -> Self {
        self.multiply(Self::translation(tx, ty, tz))
    }

    /// Appends an X-axis rotation.
    pub fn x_rotate(self, angle_radians: S) -> Self {
        self.multiply(Self::x_rotation(angle_radians))
    }

    /// Appends a Y-axis rotation.
    pub fn y_rotate(self, angle_radians: S) -> Self {
        self.multiply(Self::y_rotation(angle_radians))
    }

    /// Appends a Z-axis rotation.
    pub fn z_rotate(self, angle_radians: S) -> Self {
        self.multiply(Self::z_rotation(angle_radians))
    }

    /// Appends a scale.
    pub fn scale(self, sx: S, sy: S, sz: S) -> Self {
        self.multiply(Self::scaling(sx, sy, sz))
    }

    /// Full 4-vector product, without a perspective divide. Shaders divide
    /// after interpolation, so the raw clip-space vector is what callers
    /// want here.
    pub fn transform_vector(self, v: [S; 4]) -> [S; 4] {
        let m = self.0;
        let mut dst = [S::zero(); 4];
        for (i, out) in dst.iter_mut().enumerate() {
            for (j, vj) in v.iter().enumerate() {
                *out = *out + *vj * m[j * 4 + i];
            }
        }
        dst
    }

    /// Inverse via the adjugate/cofactor method.
    ///
    /// A singular input divides by a zero determinant and yields non-finite
    /// cells, matching the 3x3 policy.
    pub fn inverse(self) -> Mat4<S> {
        let m = self.0;
        let mut cof = [S::zero(); 16];
        for r in 0..4 {
            for c in 0..4 {
                let minor = minor3(&m, r, c);
                cof[r * 4 + c] = if (r + c) % 2 == 0 { minor } else { -minor };
            }
        }

        // Laplace expansion along the first row.
        let det = m[0] * cof[0] + m[1] * cof[1] + m[2] * cof[2] + m[3] * cof[3];
        let inv_det = S::one() / det;

        // Adjugate is the cofactor transpose.
        let mut dst = [S::zero(); 16];
        for r in 0..4 {
            for c in 0..4 {
                dst[r * 4 + c] = cof[c * 4 + r] * inv_det;
            }
        }
        Mat4(dst)
    }
}

// ── Destination-buffer variants ────────────────────────────────────────────
impl<S: Scalar> Mat4<S> {
    #[inline]
    pub fn identity_into(dst: &mut Mat4<S>) {
        *dst = Self::identity();
    }

    #[inline]
    pub fn translation_into(tx: S, ty: S, tz: S, dst: &mut Mat4<S>) {
        *dst = Self::translation(tx, ty, tz);
    }

    #[inline]
    pub fn x_rotation_into(angle_radians: S, dst: &mut Mat4<S>) {
        *dst = Self::x_rotation(angle_radians);
    }

    #[inline]
    pub fn y_rotation_into(angle_radians: S, dst: &mut Mat4<S>) {
        *dst = Self::y_rotation(angle_radians);
    }

    #[inline]
    pub fn z_rotation_into(angle_radians: S, dst: &mut Mat4<S>) {
        *dst = Self::z_rotation(angle_radians);
    }

    #[inline]
    pub fn scaling_into(sx: S, sy: S, sz: S, dst: &mut Mat4<S>) {
        *dst = Self::scaling(sx, sy, sz);
    }

    #[inline]
    pub fn perspective_into(fov_y_radians: S, aspect: S, z_near: S, z_far: S, dst: &mut Mat4<S>) {
        *dst = Self::perspective(fov_y_radians, aspect, z_near, z_far);
    }

    #[inline]
    pub fn multiply_into(self, other: Mat4<S>, dst: &mut Mat4<S>) {
        *dst = self.multiply(other);
    }

    #[inline]
    pub fn translate_into(self, tx: S, ty: S, tz: S, dst: &mut Mat4<S>) {
        *dst = self.translate(tx, ty, tz);
    }

    #[inline]
    pub fn x_rotate_into(self, angle_radians: S, dst: &mut Mat4<S>) {
        *dst = self.x_rotate(angle_radians);
    }

    #[inline]
    pub fn y_rotate_into(self, angle_radians: S, dst: &mut Mat4<S>) {
        *dst = self.y_rotate(angle_radians);
    }

    #[inline]
    pub fn z_rotate_into(self, angle_radians: S, dst: &mut Mat4<S>) {
        *dst = self.z_rotate(angle_radians);
    }

    #[inline]
    pub fn scale_into(self, sx: S, sy: S, sz: S, dst: &mut Mat4<S>) {
        *dst = self.scale(sx, sy, sz);
    }

    #[inline]
    pub fn inverse_into(self, dst: &mut Mat4<S>) {
        *dst = self.inverse();
    }
}

/// Determinant of the 3x3 left after removing `row` and `col`.
fn minor3<S: Scalar>(m: &[S; 16], row: usize, col: usize) -> S {
    let mut sub = [S::zero(); 9];
    let mut k = 0;
    for r in 0..4 {
        if r == row {
            continue;
        }
        for c in 0..4 {
            if c == col {
                continue;
            }
            sub[k] = m[r * 4 + c];
            k += 1;
        }
    }
    sub[0] * (sub[4] * sub[8] - sub[5] * sub[7])
        - sub[1] * (sub[3] * sub[8] - sub[5] * sub[6])
        + sub[2] * (sub[3] * sub[7] - sub[4] * sub[6])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn mat_approx(a: Mat4f, b: Mat4f) -> bool {
        a.0.iter().zip(b.0.iter()).all(|(x, y)| approx(*x, *y))
    }

    fn vec_approx(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| approx(*x, *y))
    }

    // ── identity / multiply ───────────────────────────────────────────────

    #[test]
    fn multiply_identity_left_and_right() {
        let m = Mat4f::translation(3.0, -7.0, 2.0).y_rotate(0.4).scale(2.0, 0.5, 1.5);
        assert!(mat_approx(m.multiply(Mat4f::identity()), m));
        assert!(mat_approx(Mat4f::identity().multiply(m), m));
    }

    #[test]
    fn multiply_is_associative() {
        let a = Mat4f::translation(5.0, 1.0, -2.0);
        let b = Mat4f::x_rotation(0.7);
        let c = Mat4f::scaling(2.0, 3.0, 0.5);
        assert!(mat_approx(a.multiply(b).multiply(c), a.multiply(b.multiply(c))));
    }

    // ── translation / rotation ────────────────────────────────────────────

    #[test]
    fn translation_offsets_points() {
        let v = Mat4f::translation(10.0, 20.0, 30.0).transform_vector([1.0, 2.0, 3.0, 1.0]);
        assert_eq!(v, [11.0, 22.0, 33.0, 1.0]);
    }

    #[test]
    fn translation_ignores_directions() {
        // w = 0 means a direction, which translation must not move.
        let v = Mat4f::translation(10.0, 20.0, 30.0).transform_vector([1.0, 2.0, 3.0, 0.0]);
        assert_eq!(v, [1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn y_rotation_quarter_turn() {
        let v = Mat4f::y_rotation(FRAC_PI_2).transform_vector([1.0, 0.0, 0.0, 1.0]);
        assert!(vec_approx(v, [0.0, 0.0, -1.0, 1.0]));
    }

    #[test]
    fn x_rotation_quarter_turn() {
        let v = Mat4f::x_rotation(FRAC_PI_2).transform_vector([0.0, 1.0, 0.0, 1.0]);
        assert!(vec_approx(v, [0.0, 0.0, 1.0, 1.0]));
    }

    #[test]
    fn z_rotation_quarter_turn() {
        let v = Mat4f::z_rotation(FRAC_PI_2).transform_vector([1.0, 0.0, 0.0, 1.0]);
        assert!(vec_approx(v, [0.0, 1.0, 0.0, 1.0]));
    }

    // ── perspective ───────────────────────────────────────────────────────

    #[test]
    fn perspective_focal_length_and_aspect() {
        // 90° fov → f = tan(π/4) = 1.
        let p = Mat4f::perspective(FRAC_PI_2, 2.0, 1.0, 3.0);
        assert!(approx(p.0[0], 0.5));
        assert!(approx(p.0[5], 1.0));
        assert!(approx(p.0[11], -1.0));
    }

    #[test]
    fn perspective_maps_near_and_far_planes() {
        let p = Mat4f::perspective(FRAC_PI_2, 1.0, 1.0, 3.0);

        let near = p.transform_vector([0.0, 0.0, -1.0, 1.0]);
        assert!(approx(near[2] / near[3], -1.0));

        let far = p.transform_vector([0.0, 0.0, -3.0, 1.0]);
        assert!(approx(far[2] / far[3], 1.0));
    }

    // ── camera chain (the 3D demo's drawScene) ────────────────────────────

    #[test]
    fn orbit_view_undoes_camera_placement() {
        let camera = Mat4f::y_rotation(0.8).translate(0.0, 0.0, 300.0);
        let view = camera.inverse();

        // The camera's own position must land at the view-space origin.
        let eye = camera.transform_vector([0.0, 0.0, 0.0, 1.0]);
        assert!(vec_approx(view.transform_vector(eye), [0.0, 0.0, 0.0, 1.0]));
    }

    // ── inverse ───────────────────────────────────────────────────────────

    #[test]
    fn inverse_of_translation_negates_offsets() {
        let inv = Mat4f::translation(1.0, 2.0, 3.0).inverse();
        assert!(mat_approx(inv, Mat4f::translation(-1.0, -2.0, -3.0)));
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = Mat4f::identity()
            .translate(4.0, -1.0, 9.0)
            .y_rotate(0.6)
            .x_rotate(-0.2)
            .scale(2.0, 1.5, 0.5);
        assert!(mat_approx(m.multiply(m.inverse()), Mat4f::identity()));
        assert!(mat_approx(m.inverse().multiply(m), Mat4f::identity()));
    }

    #[test]
    fn inverse_times_matrix_is_identity_f64() {
        let m = Mat4d::identity().translate(4.0, -1.0, 9.0).y_rotate(0.6);
        let product = m.multiply(m.inverse());
        for (i, v) in product.0.iter().enumerate() {
            let expect = if i % 5 == 0 { 1.0 } else { 0.0 };
            assert!((*v - expect).abs() < 1e-12);
        }
    }

    #[test]
    fn singular_inverse_propagates_non_finite() {
        let inv = Mat4f::scaling(0.0, 1.0, 1.0).inverse();
        assert!(inv.0.iter().any(|v| !v.is_finite()));
    }

    // ── destination buffers ───────────────────────────────────────────────

    #[test]
    fn into_variants_overwrite_caller_storage() {
        let mut dst = Mat4f::identity();
        Mat4f::perspective_into(FRAC_PI_2, 1.5, 1.0, 100.0, &mut dst);
        assert_eq!(dst, Mat4f::perspective(FRAC_PI_2, 1.5, 1.0, 100.0));

        let a = Mat4f::y_rotation(0.3);
        a.translate_into(1.0, 2.0, 3.0, &mut dst);
        assert_eq!(dst, a.translate(1.0, 2.0, 3.0));
    }
}
