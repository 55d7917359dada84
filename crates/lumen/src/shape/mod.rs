//! Contains the geometric primitives that can be rendered:
//! - [Sphere]
//! - [Plane]
//!
//! The set is closed: [Shape] is an enum and callers match on it exhaustively. Each primitive
//! implements [Surface], the two queries the tracer needs.

pub mod plane;
pub mod sphere;

pub use plane::Plane;
pub use sphere::Sphere;

use crate::{
    math::{point::Point, vec::Vec3},
    ray::Ray,
};

/// The geometric queries needed to raytrace a primitive.
pub trait Surface {
    /// Check whether `ray` intersects the surface
    fn intersection(&self, ray: &Ray) -> Collision;

    /// The unit normal at `p`, `p` being a point on the surface
    fn normal(&self, p: Point) -> Vec3;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Surface for Shape {
    fn intersection(&self, ray: &Ray) -> Collision {
        match self {
            Shape::Sphere(sphere) => sphere.intersection(ray),
            Shape::Plane(plane) => plane.intersection(ray),
        }
    }

    fn normal(&self, p: Point) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.normal(p),
            Shape::Plane(plane) => plane.normal(p),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

/// Holds the time of a collision between a ray and a shape, along with what was hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayIntersection<Info> {
    pub t: f32,
    pub info: Info,
}

/// A `Result`-like type that takes care of intersections data.
///
/// Shapes report [Collision] (nothing but the time), the scene tags it with the object that was
/// hit, see [crate::scene::SceneCollision].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntersectionResult<Info> {
    Hit(RayIntersection<Info>),
    Miss,
}

pub type Collision = IntersectionResult<()>;

impl Collision {
    pub fn hit(t: f32) -> Self {
        IntersectionResult::Hit(RayIntersection { t, info: () })
    }
}

impl<Info> IntersectionResult<Info> {
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    pub fn t(&self) -> Option<f32> {
        match self {
            Self::Hit(RayIntersection { t, .. }) => Some(*t),
            Self::Miss => None,
        }
    }

    pub fn with_info<T>(self, info: T) -> IntersectionResult<T> {
        match self {
            Self::Hit(RayIntersection { t, .. }) => IntersectionResult::Hit(RayIntersection { t, info }),
            Self::Miss => IntersectionResult::Miss,
        }
    }

    /// Keep the closest of the two hits.
    ///
    /// `other` only wins if it is strictly closer, so on ties the first hit is kept.
    pub fn nearest(self, other: Self) -> Self {
        let Self::Hit(RayIntersection { t: t1, .. }) = self else {
            return other;
        };
        let Self::Hit(RayIntersection { t: t2, .. }) = other else {
            return self;
        };

        if t2 < t1 {
            other
        } else {
            self
        }
    }
}
