use crate::{
    math::{point::Point, vec::Vec3},
    ray::Ray,
    utils::counter::counter,
};

use super::{Collision, Surface};

/// A simple sphere shape.
///
/// `radius` must be positive, this is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub center: Point,
    pub radius: f32,
}

impl Sphere {
    /// Below this, discriminants are considered tangent hits and roots are considered to be at or
    /// behind the ray origin.
    pub const EPSILON: f32 = 1e-4;

    pub fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Surface for Sphere {
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn intersection(&self, ray: &Ray) -> Collision {
        counter!("Sphere intersection tests");

        // The direction is unit length so the quadratic's `a` is 1
        let oc = ray.origin - self.center;
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * c;
        // Written so that NaNs (degenerate rays) are misses
        if !(discriminant >= Self::EPSILON) {
            return Collision::Miss;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t1 = (-b + sqrt_discriminant) / 2.0;
        let t2 = (-b - sqrt_discriminant) / 2.0;

        // Only the near root is considered, a ray starting inside the sphere misses it
        let t = t1.min(t2);
        if !(t >= Self::EPSILON) {
            return Collision::Miss;
        }

        Collision::hit(t)
    }

    fn normal(&self, p: Point) -> Vec3 {
        (p - self.center).normalize()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::{Rng, SeedableRng};

    use crate::{
        math::point::Point,
        ray::Ray,
        shape::{Collision, Surface},
    };

    use super::Sphere;

    fn sphere() -> Sphere {
        Sphere::new(Point::new(0., 0., 30.), 5.)
    }

    #[test]
    fn hits_near_side() {
        let ray = Ray::new(Point::new(0., 0., -1.), Vec3::Z);
        assert_eq!(sphere().intersection(&ray), Collision::hit(26.));
    }

    #[test]
    fn misses_when_pointing_away() {
        let ray = Ray::new(Point::new(0., 0., -1.), -Vec3::Z);
        assert_eq!(sphere().intersection(&ray), Collision::Miss);
    }

    #[test]
    fn misses_from_inside() {
        let ray = Ray::new(Point::new(0., 0., 30.), Vec3::X);
        assert_eq!(sphere().intersection(&ray), Collision::Miss);
    }

    #[test]
    fn tangent_is_a_miss() {
        let ray = Ray::new(Point::new(5., 0., 0.), Vec3::Z);
        assert_eq!(sphere().intersection(&ray), Collision::Miss);
    }

    #[test]
    fn degenerate_ray_is_a_miss() {
        let ray = Ray::new(Point::ORIGIN, Vec3::ZERO);
        assert_eq!(sphere().intersection(&ray), Collision::Miss);

        let ray = Ray {
            origin: Point::new(0., 0., f32::NAN),
            direction: Vec3::Z,
        };
        assert_eq!(sphere().intersection(&ray), Collision::Miss);
    }

    #[test]
    fn random_rays_hit_on_surface() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x5EED);
        let mut hits = 0;

        for _ in 0..2000 {
            let sphere = Sphere::new(
                Point::new(
                    rng.gen_range(-10.0..10.0),
                    rng.gen_range(-10.0..10.0),
                    rng.gen_range(5.0..30.0),
                ),
                rng.gen_range(0.5..5.0),
            );
            let origin = Point::new(
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
            );
            // Aim around the sphere so that about half of the rays hit
            let target = sphere.center
                + Vec3::new(
                    rng.gen_range(-1.5..1.5),
                    rng.gen_range(-1.5..1.5),
                    rng.gen_range(-1.5..1.5),
                ) * sphere.radius;
            let ray = Ray::new(origin, target - origin);

            match sphere.intersection(&ray) {
                Collision::Miss => (),
                hit => {
                    hits += 1;
                    let t = hit.t().unwrap();
                    assert!(t > Sphere::EPSILON);

                    let p = ray.at(t);
                    assert!((p.distance(sphere.center) - sphere.radius).abs() < 1e-3);
                    assert!((sphere.normal(p).length() - 1.0).abs() < 1e-5);
                }
            }
        }

        assert!(hits > 0);
    }
}
