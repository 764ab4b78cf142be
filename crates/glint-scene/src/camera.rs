//! Orbit camera and lens for the 3D demos.

use glint_math::{Mat4f, angle};

use crate::viewport::Viewport;

/// Perspective lens parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Lens {
    pub fov_y_radians: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for Lens {
    fn default() -> Self {
        // The demos' stock lens: 60° vertical field of view, 1..2000 depth.
        Self {
            fov_y_radians: angle::deg_to_rad(60.0),
            z_near: 1.0,
            z_far: 2000.0,
        }
    }
}

impl Lens {
    #[inline]
    pub fn matrix(&self, aspect: f32) -> Mat4f {
        Mat4f::perspective(self.fov_y_radians, aspect, self.z_near, self.z_far)
    }
}

/// Camera orbiting the world origin: yaw around +Y, then a push back along
/// the rotated Z axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitCamera {
    pub yaw_radians: f32,
    pub radius: f32,
}

impl OrbitCamera {
    #[inline]
    pub const fn new(yaw_radians: f32, radius: f32) -> Self {
        Self { yaw_radians, radius }
    }

    /// Camera-to-world matrix.
    pub fn world(&self) -> Mat4f {
        Mat4f::y_rotation(self.yaw_radians).translate(0.0, 0.0, self.radius)
    }

    /// World-to-camera (view) matrix.
    pub fn view(&self) -> Mat4f {
        self.world().inverse()
    }

    /// Combined view-projection: applies the view, then the lens, moving the
    /// world so the camera is effectively the origin.
    pub fn view_projection(&self, lens: Lens, viewport: Viewport) -> Mat4f {
        lens.matrix(viewport.aspect()).multiply(self.view())
    }
}

/// Positions for `count` objects spread on a circle of `radius` in the XZ
/// plane, the 3D demos' ring of models.
pub fn ring_positions(count: usize, radius: f32) -> Vec<[f32; 3]> {
    (0..count)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::TAU / count as f32;
            [angle.cos() * radius, 0.0, angle.sin() * radius]
        })
        .collect()
}
