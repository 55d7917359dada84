use crate::{
    math::{point::Point, vec::Vec2},
    ray::Ray,
};

/// A pinhole looking toward `+z`, the screen being the `z = 0` plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Point,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Point::new(0.0, 0.0, -1.0),
        }
    }
}

impl Camera {
    /// Ray going through pixel `(x, y)` of a `width` x `height` image.
    ///
    /// Pixels go from left to right and from top to bottom, the world is y-up. Both screen
    /// coordinates are divided by the width, so that the horizontal field of view does not depend
    /// on the aspect ratio.
    pub fn ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let screen_pos = Vec2::new(x as f32, height as f32 - y as f32);
        let screen_size = Vec2::new(width as f32, height as f32);
        let centered = screen_pos - 0.5 * screen_size;
        let screen_point = centered / width as f32;

        let target = Point(screen_point.extend(0.0));
        Ray::new(self.eye, target - self.eye)
    }
}
