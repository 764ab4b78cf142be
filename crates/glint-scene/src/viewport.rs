use glint_math::Mat3f;

/// Canvas size in pixels.
///
/// The coordinate basis demos use to map pixel positions into clip space;
/// a canvas resize means building a new value and recomputing matrices.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height, as fed to a perspective projection.
    #[inline]
    pub fn aspect(self) -> f32 {
        self.width / self.height
    }

    /// Pixel-space to clip-space projection for this viewport.
    #[inline]
    pub fn clip_from_pixels(self) -> Mat3f {
        Mat3f::projection(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(Viewport::new(800.0, 600.0).is_valid());
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(800.0, -1.0).is_valid());
        assert!(!Viewport::new(f32::NAN, 600.0).is_valid());
    }

    #[test]
    fn aspect_ratio() {
        assert_eq!(Viewport::new(800.0, 400.0).aspect(), 2.0);
    }

    #[test]
    fn clip_from_pixels_maps_top_left() {
        let clip = Viewport::new(640.0, 480.0).clip_from_pixels();
        assert_eq!(clip.transform_point([0.0, 0.0]), [-1.0, 1.0]);
    }
}
