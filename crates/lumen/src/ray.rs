use crate::{
    math::{
        point::Point,
        vec::{Vec3, Vec3AsNonZero},
    },
    utils::log_once::warn_once,
};

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point,
    /// Always unit length
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, `direction` gets normalized.
    ///
    /// A zero `direction` has no meaning, the resulting ray is made of NaNs and will not hit anything.
    pub fn new(origin: Point, direction: Vec3) -> Self {
        if direction.into_non_zero(f32::EPSILON).is_none() {
            warn_once!("a ray has been built with a degenerate direction");
        }

        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Build a ray starting slightly off `origin` along `direction`.
    ///
    /// Secondary rays are offset this way so that they do not hit the surface they start from.
    pub fn new_biased(origin: Point, direction: Vec3, bias: f32) -> Self {
        let direction = direction.normalize();
        Self::new(origin + bias * direction, direction)
    }

    pub fn at(&self, t: f32) -> Point {
        self.origin + t * self.direction
    }
}
