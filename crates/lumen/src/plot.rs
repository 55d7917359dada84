//! Plots of explicit curves `y = f(x)` as red points on a white image.
//!
//! The curve is sampled once per pixel column, steep parts of a curve therefore show gaps.
use crate::{color::PackedRgb, math::vec::Vec2, raster::Raster};

/// Side of the square image made by [draw_curve]
pub const PLOT_SIZE: u32 = 800;
pub const CURVE_COLOR: PackedRgb = PackedRgb(0xFF0000);
pub const PAPER_COLOR: PackedRgb = PackedRgb::WHITE;

/// A curve that gives one `y` for every `x`.
pub trait ExplicitCurve {
    fn y_at(&self, x: f32) -> f32;
}

impl<F: Fn(f32) -> f32> ExplicitCurve for F {
    fn y_at(&self, x: f32) -> f32 {
        self(x)
    }
}

/// `coefficients[0] * x^n + ... + coefficients[n - 1] * x + coefficients[n]`
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f32>,
}

impl Polynomial {
    /// Coefficients are given from the highest order down to the constant term
    pub fn new(coefficients: Vec<f32>) -> Self {
        Self { coefficients }
    }

    /// `a x² + b x + c`
    pub fn quadratic(a: f32, b: f32, c: f32) -> Self {
        Self::new(vec![a, b, c])
    }

    /// `a x³ + b x² + c x + d`
    pub fn cubic(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self::new(vec![a, b, c, d])
    }

    /// `None` for the empty polynomial
    pub fn order(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }
}

impl ExplicitCurve for Polynomial {
    fn y_at(&self, x: f32) -> f32 {
        self.coefficients.iter().fold(0.0, |acc, c| acc * x + c)
    }
}

/// The part of the plane shown by a plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Point at the center of the image
    pub origin: Vec2,
    /// Extent of the plane covered by the image
    pub scale: Vec2,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(origin: Vec2, scale: Vec2, width: u32, height: u32) -> Self {
        Self {
            origin,
            scale,
            width,
            height,
        }
    }

    /// Pixel containing `point`, possibly outside of the image.
    ///
    /// `y` goes up on the plane and down on the image. `None` if the point is not finite.
    pub fn pixel_of(&self, point: Vec2) -> Option<(i64, i64)> {
        let size = Vec2::new(self.width as f32, self.height as f32);
        let relative = (point - self.origin) / self.scale * Vec2::new(1.0, -1.0) + Vec2::splat(0.5);
        let pixel = (relative * size).floor();

        pixel
            .is_finite()
            .then_some((pixel.x as i64, pixel.y as i64))
    }
}

/// `start`, `start + step`, ... up to `end` excluded
pub fn floating_range(start: f32, end: f32, step: f32) -> impl Iterator<Item = f32> {
    // Negative and NaN counts saturate to zero
    let steps = ((end - start) / step) as usize;
    (0..steps).map(move |i| start + i as f32 * step)
}

/// Plot `curve` on a [PLOT_SIZE] x [PLOT_SIZE] image centered on `origin` and covering `scale`.
pub fn draw_curve<C: ExplicitCurve + ?Sized>(origin: Vec2, scale: Vec2, curve: &C) -> Raster {
    let viewport = Viewport::new(origin, scale, PLOT_SIZE, PLOT_SIZE);
    draw_explicit_curve(&viewport, curve, scale.x / PLOT_SIZE as f32)
}

/// Sample `curve` every `step` across the viewport and mark the pixels of the samples.
///
/// Samples falling outside of the image are dropped.
pub fn draw_explicit_curve<C: ExplicitCurve + ?Sized>(
    viewport: &Viewport,
    curve: &C,
    step: f32,
) -> Raster {
    let mut raster = Raster::filled(viewport.width, viewport.height, PAPER_COLOR);
    let half = viewport.scale.x * 0.5;
    let (start, end) = (viewport.origin.x - half, viewport.origin.x + half);

    let mut dropped = 0usize;
    for x in floating_range(start, end, step) {
        let point = Vec2::new(x, curve.y_at(x));
        let Some((px, py)) = viewport.pixel_of(point) else {
            dropped += 1;
            continue;
        };
        let (Ok(px), Ok(py)) = (u32::try_from(px), u32::try_from(py)) else {
            dropped += 1;
            continue;
        };
        if raster.set(px, py, CURVE_COLOR).is_err() {
            dropped += 1;
        }
    }

    log::debug!("{dropped} curve samples fell outside of the image");
    raster
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::raster::Raster;

    use super::{
        draw_curve, draw_explicit_curve, floating_range, ExplicitCurve, Polynomial, Viewport,
        CURVE_COLOR, PAPER_COLOR, PLOT_SIZE,
    };

    fn marked_near(raster: &Raster, x: u32, y: u32) -> bool {
        (x - 1..=x + 1)
            .flat_map(|x| (y - 1..=y + 1).map(move |y| (x, y)))
            .any(|(x, y)| raster.get(x, y) == Some(CURVE_COLOR))
    }

    #[test]
    fn polynomial_evaluation() {
        let square = Polynomial::quadratic(1., 0., 0.);
        assert_eq!(square.y_at(3.), 9.);
        assert_eq!(square.order(), Some(2));

        let cubic = Polynomial::cubic(1., 1., 1., 1.);
        assert_eq!(cubic.y_at(2.), 15.);
        assert_eq!(cubic.y_at(-1.), 0.);
        assert_eq!(cubic.order(), Some(3));

        assert_eq!(Polynomial::new(vec![]).y_at(4.), 0.);
        assert_eq!(Polynomial::new(vec![]).order(), None);
    }

    #[test]
    fn range() {
        let values: Vec<f32> = floating_range(0., 1., 0.25).collect();
        assert_eq!(values, vec![0., 0.25, 0.5, 0.75]);
        assert_eq!(floating_range(1., 0., 0.25).count(), 0);
    }

    #[test]
    fn pixel_mapping() {
        let viewport = Viewport::new(Vec2::new(0., 5.), Vec2::new(10., 10.), 800, 800);
        assert_eq!(viewport.pixel_of(Vec2::new(0., 5.)), Some((400, 400)));
        assert_eq!(viewport.pixel_of(Vec2::new(-5., 10.)), Some((0, 0)));
        assert_eq!(viewport.pixel_of(Vec2::new(5., 0.)), Some((800, 800)));
        assert_eq!(viewport.pixel_of(Vec2::new(-7.5, 5.)), Some((-200, 400)));
        assert_eq!(viewport.pixel_of(Vec2::new(0., f32::NAN)), None);
    }

    #[test]
    fn known_point_lands_on_its_pixel() {
        // y = x² seen over [-5, 5] x [0, 10]: (1, 1) is at pixel (480, 720)
        let raster = draw_curve(
            Vec2::new(0., 5.),
            Vec2::new(10., 10.),
            &Polynomial::quadratic(1., 0., 0.),
        );
        assert_eq!((raster.width(), raster.height()), (PLOT_SIZE, PLOT_SIZE));
        assert!(marked_near(&raster, 480, 720));
        assert!(!marked_near(&raster, 480, 400));
    }

    #[test]
    fn off_image_samples_are_dropped() {
        // The left edge of y = x² is far above the image
        let raster = draw_curve(
            Vec2::new(0., 5.),
            Vec2::new(10., 10.),
            &Polynomial::quadratic(1., 0., 0.),
        );
        assert!((0..PLOT_SIZE).all(|y| raster.get(0, y) == Some(PAPER_COLOR)));

        let flat = |_x: f32| 100.0;
        let raster = draw_curve(Vec2::ZERO, Vec2::new(10., 10.), &flat);
        assert!(raster.pixels().iter().all(|p| *p == PAPER_COLOR));
    }

    #[test]
    fn horizontal_line_fills_a_row() {
        let viewport = Viewport::new(Vec2::ZERO, Vec2::new(4., 4.), 8, 8);
        let raster = draw_explicit_curve(&viewport, &|_x: f32| 0.25, 0.5);
        // y = 0.25 is in row 3, one sample per column
        assert!((0..8).all(|x| raster.get(x, 3) == Some(CURVE_COLOR)));
        assert_eq!(
            raster.pixels().iter().filter(|p| **p == CURVE_COLOR).count(),
            8
        );
    }
}
