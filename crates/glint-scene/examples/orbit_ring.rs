//! Headless run of the 3D demo's matrix pipeline: orbit camera, perspective
//! lens and a ring of model matrices, logged instead of drawn.
//!
//! ```sh
//! cargo run -p glint-scene --example orbit_ring
//! ```

use glint_math::angle::deg_to_rad;
use glint_scene::uniform::Mat4Uniform;
use glint_scene::{Lens, OrbitCamera, Viewport, camera, logging};

fn main() {
    logging::init(logging::LogConfig::default());

    let viewport = Viewport::new(800.0, 600.0);
    let lens = Lens::default();
    let orbit = OrbitCamera::new(deg_to_rad(30.0), 300.0);

    let vp = orbit.view_projection(lens, viewport);
    log::info!("view-projection: {:?}", vp.0);

    for (i, [x, y, z]) in camera::ring_positions(5, 200.0).into_iter().enumerate() {
        let model = vp.translate(x, y, z);
        let uniform = Mat4Uniform::from(model);
        log::info!(
            "object {i} at ({x:.1}, {y:.1}, {z:.1}): uniform bytes {}",
            uniform.as_bytes().len()
        );
    }
}
