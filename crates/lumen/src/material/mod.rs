use crate::color::Rgb;

/// Surface response: a diffuse color and how much of the mirror reflection is added on top of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Channels in `[0, 1]`
    pub diffuse: Rgb,
    /// Weight of the reflected color, usually in `[0, 1]`
    pub specular: f32,
}

impl Material {
    pub const fn new(diffuse: Rgb, specular: f32) -> Self {
        Self { diffuse, specular }
    }

    /// A purely diffuse material
    pub const fn matte(diffuse: Rgb) -> Self {
        Self::new(diffuse, 0.0)
    }

    pub fn is_reflective(&self) -> bool {
        self.specular != 0.0
    }
}
