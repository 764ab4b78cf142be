use glint_math::{Mat3f, angle};

use crate::viewport::Viewport;

/// Control-panel state behind a 2D demo: translation in pixels, rotation in
/// radians, per-axis scale factors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PanelTransform2d {
    pub translation: [f32; 2],
    pub rotation_radians: f32,
    pub scale: [f32; 2],
}

impl Default for PanelTransform2d {
    fn default() -> Self {
        Self {
            translation: [0.0, 0.0],
            rotation_radians: 0.0,
            scale: [1.0, 1.0],
        }
    }
}

impl PanelTransform2d {
    /// Full pixel-to-clip matrix for the current panel values.
    ///
    /// Geometry is scaled first, then rotated, then translated in pixels,
    /// then projected into clip space.
    pub fn matrix(&self, viewport: Viewport) -> Mat3f {
        Mat3f::projection(viewport.width, viewport.height)
            .translate(self.translation[0], self.translation[1])
            .rotate(self.rotation_radians)
            .scale(self.scale[0], self.scale[1])
    }

    /// Panel sliders usually expose degrees; convert on the way in.
    #[inline]
    pub fn set_rotation_degrees(&mut self, degrees: f32) {
        self.rotation_radians = angle::deg_to_rad(degrees);
    }
}
