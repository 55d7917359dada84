use crate::{
    math::{point::Point, vec::Vec3},
    ray::Ray,
    utils::counter::counter,
};

use super::{Collision, Surface};

/// An infinite plane going through `origin`.
///
/// The plane is one-sided: a ray only registers a hit when it travels along `normal`
/// (`direction · normal > 0`), rays travelling against the normal go through it.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub origin: Point,
    /// Unit length, not checked
    pub normal: Vec3,
}

impl Plane {
    /// Rays closer than this to being parallel to the plane never hit it
    pub const EPSILON: f32 = 1e-6;

    pub fn new(origin: Point, normal: Vec3) -> Self {
        Self { origin, normal }
    }

    /// The plane made of the points `p` such that `p · normal = offset`
    pub fn from_offset(offset: f32, normal: Vec3) -> Self {
        Self {
            origin: Point(offset * normal),
            normal,
        }
    }
}

impl Surface for Plane {
    fn intersection(&self, ray: &Ray) -> Collision {
        counter!("Plane intersection tests");

        let denom = ray.direction.dot(self.normal);
        if denom > Self::EPSILON {
            let t = (self.origin - ray.origin).dot(self.normal) / denom;
            if t >= 0.0 {
                return Collision::hit(t);
            }
        }

        Collision::Miss
    }

    fn normal(&self, _p: Point) -> Vec3 {
        self.normal
    }
}
