//! Affine transform math for the glint demo gallery.
//!
//! Canonical conventions:
//! - Matrices are row-major flat arrays (`[S; 9]` / `[S; 16]`), the exact
//!   layout handed to `uniformMatrix3fv`/`uniformMatrix4fv`-style APIs.
//! - 2D pixel space has origin top-left, +X right, +Y down; [`Mat3::projection`]
//!   maps it to clip space with Y flipped.
//! - No input validation: a singular [`Mat3::inverse`] or a zero homogeneous
//!   `w` in [`Mat3::transform_point`] follows IEEE-754 division semantics.
//!   Callers see `inf`/`NaN`, never a panic or an error value.

pub mod angle;
pub mod mat3;
pub mod mat4;
pub mod scalar;
pub mod vec2;

pub use mat3::{Mat3, Mat3d, Mat3f};
pub use mat4::{Mat4, Mat4d, Mat4f};
pub use scalar::Scalar;
