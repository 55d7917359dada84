//! Square convolution kernels applied to a [Raster].
//!
//! Borders are not extended: a `d` x `d` kernel crops `d - 1` pixels on each axis.
use itertools::Itertools;

use crate::{color::PackedRgb, math::float::FloatAsExt, raster::Raster};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FilterError {
    #[error("a kernel needs an odd square number of weights, got {0}")]
    NotSquare(usize),
    #[error("the kernel weights sum to zero, it cannot be normalized")]
    ZeroSum,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    dimension: usize,
    /// Row-major, `dimension * dimension` weights
    weights: Vec<f32>,
}

impl Kernel {
    pub fn new(weights: Vec<f32>) -> Result<Self, FilterError> {
        let dimension = (weights.len() as f64).sqrt().round() as usize;
        if dimension * dimension != weights.len() || dimension % 2 == 0 {
            return Err(FilterError::NotSquare(weights.len()));
        }

        Ok(Self { dimension, weights })
    }

    /// 3x3 average
    pub fn box_blur() -> Self {
        Self {
            dimension: 3,
            weights: vec![1. / 9.; 9],
        }
    }

    pub fn sharpen() -> Self {
        Self {
            dimension: 3,
            #[rustfmt::skip]
            weights: vec![
                 0., -1.,  0.,
                -1.,  5., -1.,
                 0., -1.,  0.,
            ],
        }
    }

    /// Diagonal gradient
    pub fn edge_detection() -> Self {
        Self {
            dimension: 3,
            #[rustfmt::skip]
            weights: vec![
                 1., 0., -1.,
                 0., 0.,  0.,
                -1., 0.,  1.,
            ],
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// The same kernel, scaled so that its weights sum to one
    pub fn normalized(&self) -> Result<Self, FilterError> {
        let sum = self
            .weights
            .iter()
            .sum::<f32>()
            .into_non_zero(1e-6)
            .ok_or(FilterError::ZeroSum)?;

        Ok(Self {
            dimension: self.dimension,
            weights: self.weights.iter().map(|w| w / sum).collect(),
        })
    }

    /// Convolve `raster` with the kernel.
    ///
    /// Output pixel `(x, y)` is computed from the window whose top-left corner is input pixel
    /// `(x, y)`. Channels are clamped to `[0, 255]` and truncated.
    pub fn apply(&self, raster: &Raster) -> Raster {
        let d = self.dimension as u32;
        let width = (raster.width() + 1).saturating_sub(d);
        let height = (raster.height() + 1).saturating_sub(d);

        let channels: Vec<[f32; 3]> = raster
            .pixels()
            .iter()
            .map(|p| p.channels().map(f32::from))
            .collect();
        let stride = raster.width() as usize;

        Raster::from_fn(width, height, |x, y| {
            let (x, y) = (x as usize, y as usize);
            let mut sum = [0f32; 3];

            for (j, i) in (0..self.dimension).cartesian_product(0..self.dimension) {
                let weight = self.weights[j * self.dimension + i];
                let pixel = channels[(x + i) + (y + j) * stride];
                for (acc, c) in sum.iter_mut().zip(pixel) {
                    *acc += weight * c;
                }
            }

            PackedRgb::from_channels(sum.map(|c| c.clamp(0., 255.) as u8))
        })
    }

    /// Apply the kernel `times` times in a row
    pub fn apply_n(&self, raster: &Raster, times: usize) -> Raster {
        (0..times).fold(raster.clone(), |raster, _| self.apply(&raster))
    }
}
