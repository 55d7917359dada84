use core::fmt::Display;

use clap::ValueEnum;
use lumen::{
    filter::Kernel,
    math::vec::Vec2,
    plot::{draw_curve, Polynomial},
    raster::Raster,
    scene::{
        examples::{FloorScene, MirrorScene, SpheresScene},
        Scene,
    },
};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    #[default]
    Spheres,
    Mirror,
    Floor,
}

impl AvailableScene {
    pub fn build(self) -> Scene {
        match self {
            AvailableScene::Spheres => SpheresScene.into(),
            AvailableScene::Mirror => MirrorScene.into(),
            AvailableScene::Floor => FloorScene.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum AvailablePlot {
    /// y = x² over [-5, 5] x [0, 10]
    Quadratic,
    /// y = x³ + x² + x + 1 over [-5, 5] x [-5, 5]
    Cubic,
}

impl AvailablePlot {
    pub fn draw(self) -> Raster {
        let scale = Vec2::new(10., 10.);
        match self {
            AvailablePlot::Quadratic => draw_curve(
                Vec2::new(0., 5.),
                scale,
                &Polynomial::quadratic(1., 0., 0.),
            ),
            AvailablePlot::Cubic => {
                draw_curve(Vec2::ZERO, scale, &Polynomial::cubic(1., 1., 1., 1.))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum AvailableFilter {
    Blur,
    Sharpen,
    Edge,
}

impl From<AvailableFilter> for Kernel {
    fn from(val: AvailableFilter) -> Self {
        match val {
            AvailableFilter::Blur => Kernel::box_blur(),
            AvailableFilter::Sharpen => Kernel::sharpen(),
            AvailableFilter::Edge => Kernel::edge_detection(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExecutionMode {
    #[default]
    Multithreaded,
    Monothreaded,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::str::FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((a, b)) = s.split_once('x') else {
            return Err(anyhow::anyhow!("Incorrect format, see help"));
        };
        let width: u32 = a.trim().parse()?;
        let height: u32 = b.trim().parse()?;
        anyhow::ensure!(
            width > 0 && height > 0,
            "width and height must be positive, got {width}x{height}"
        );

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}
