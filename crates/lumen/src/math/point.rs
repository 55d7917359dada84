use std::ops::{Add, Sub};

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub Vec3);

impl Point {
    pub const ORIGIN: Point = Point(Vec3::ZERO);

    pub fn vec(self) -> Vec3 {
        self.0
    }

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn distance(self, other: Self) -> f32 {
        self.0.distance(other.0)
    }
}

impl Add<Vec3> for Point {
    type Output = Self;

    fn add(self, rhs: Vec3) -> Self::Output {
        Point(self.vec() + rhs)
    }
}

impl Sub<Vec3> for Point {
    type Output = Self;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Point(self.vec() - rhs)
    }
}

/// We can sub two points but not add them
impl Sub for Point {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Self::Output {
        self.vec() - rhs.vec()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::Point;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1., 2., 3.);
        let b = Point::new(0., 2., 5.);

        assert_eq!(a - b, Vec3::new(1., 0., -2.));
        assert_eq!(b + (a - b), a);
        assert_eq!(a - Vec3::ONE, Point::new(0., 1., 2.));
        assert!((a.distance(b) - 5f32.sqrt()).abs() < 1e-6);
    }
}
