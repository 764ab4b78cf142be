//! GPU-ready uniform payloads.
//!
//! Plain-old-data structs a renderer can hand to a buffer write as-is.
//! Columns keep the flat-array order a `transpose = false` upload assumes,
//! so a matrix built here drives a shader's `u_matrix * vec(position, 1)`
//! unchanged. The `mat3` payload carries std140/WGSL vec4 padding, which
//! GL-style `uniformMatrix3fv` does not expect; callers on such APIs
//! should upload the nine floats of the `Mat3f` array directly rather
//! than `as_bytes()`.

use bytemuck::{Pod, Zeroable};
use glint_math::{Mat3f, Mat4f};

/// `mat3` uniform payload: three columns, each padded to a vec4 boundary
/// per std140/WGSL alignment rules.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat3Uniform {
    pub cols: [[f32; 4]; 3],
}

impl Mat3Uniform {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<Mat3f> for Mat3Uniform {
    fn from(m: Mat3f) -> Self {
        let e = m.0;
        Self {
            cols: [
                [e[0], e[1], e[2], 0.0],
                [e[3], e[4], e[5], 0.0],
                [e[6], e[7], e[8], 0.0],
            ],
        }
    }
}

/// `mat4` uniform payload, sixteen floats in array order.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4Uniform {
    pub cols: [[f32; 4]; 4],
}

impl Mat4Uniform {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<Mat4f> for Mat4Uniform {
    fn from(m: Mat4f) -> Self {
        let e = m.0;
        Self {
            cols: [
                [e[0], e[1], e[2], e[3]],
                [e[4], e[5], e[6], e[7]],
                [e[8], e[9], e[10], e[11]],
                [e[12], e[13], e[14], e[15]],
            ],
        }
    }
}
