use crate::{color::Rgb, ray::Ray, scene::Scene};

mod whitted;

pub use whitted::WhittedIntegrator;

/// Computes the color seen along a ray.
pub trait Integrator: Send + Sync {
    /// The color carried back by `ray`, `depth` being the number of bounces that led to it.
    ///
    /// The returned color is not clamped.
    fn ray_cast(&self, scene: &Scene, ray: Ray, depth: u32) -> Rgb;
}

/// Constants of the shading model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracerOptions {
    /// Rays at this depth are not traced anymore and get the background color
    pub max_depth: u32,
    /// Color of rays that do not hit anything
    pub background: Rgb,
    /// Light every surface receives regardless of the lights
    pub ambient: Rgb,
    /// Offset applied to the origin of shadow and reflection rays
    pub bias: f32,
}

impl Default for TracerOptions {
    fn default() -> Self {
        Self {
            max_depth: 20,
            background: Rgb::new(0.25, 0.25, 1.0),
            ambient: Rgb::new(0.1, 0.1, 0.1),
            bias: 1e-4,
        }
    }
}
