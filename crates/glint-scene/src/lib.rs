//! Scene-side matrix composition for the glint demos.
//!
//! This crate owns the pieces between a demo's control panel and its draw
//! call: viewport math, the 2D transform stack, the 3D orbit camera, and
//! GPU uniform packing. Device, shader and buffer lifecycle stay with the
//! rendering host.

pub mod camera;
pub mod logging;
pub mod transform;
pub mod uniform;
pub mod viewport;

pub use camera::{Lens, OrbitCamera};
pub use transform::PanelTransform2d;
pub use uniform::{Mat3Uniform, Mat4Uniform};
pub use viewport::Viewport;
