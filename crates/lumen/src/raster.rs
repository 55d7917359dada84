//! The pixel buffer produced by a render.
//!
//! Pixels are stored row-major from the top-left corner, with a row stride equal to the width.
use std::path::Path;

use itertools::Itertools;

use crate::color::PackedRgb;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("pixel ({x}, {y}) is outside of a {width}x{height} raster")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("a {width}x{height} raster needs {expected} pixels, got {actual}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("could not write image: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<PackedRgb>,
}

impl Raster {
    /// A black raster
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, PackedRgb::BLACK)
    }

    pub fn filled(width: u32, height: u32, color: PackedRgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Build a raster by evaluating `f` at every `(x, y)`
    pub fn from_fn<F: FnMut(u32, u32) -> PackedRgb>(width: u32, height: u32, mut f: F) -> Self {
        let pixels = (0..height)
            .cartesian_product(0..width)
            .map(|(y, x)| f(x, y))
            .collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn from_pixels(width: u32, height: u32, pixels: Vec<PackedRgb>) -> Result<Self, RasterError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RasterError::SizeMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[PackedRgb] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [PackedRgb] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<PackedRgb> {
        self.pixels
    }

    /// The pixels as `0x00RRGGBB` integers
    pub fn as_u32_slice(&self) -> &[u32] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x as usize + y as usize * self.width as usize)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<PackedRgb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: u32, y: u32, color: PackedRgb) -> Result<(), RasterError> {
        let Some(i) = self.index(x, y) else {
            return Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        };

        self.pixels[i] = color;
        Ok(())
    }

    /// Transform every pixel in place
    pub fn map<F: FnMut(PackedRgb) -> PackedRgb>(&mut self, mut f: F) {
        self.pixels.iter_mut().for_each(|p| *p = f(*p));
    }

    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(self.pixels[x as usize + y as usize * self.width as usize].channels())
        })
    }

    /// Write the raster to `path`, the format is deduced from the extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RasterError> {
        let path = path.as_ref();
        log::debug!(
            "saving {}x{} raster to {}",
            self.width,
            self.height,
            path.display()
        );
        self.to_rgb_image().save(path)?;
        Ok(())
    }
}
