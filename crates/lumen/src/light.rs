use crate::{color::Rgb, math::point::Point};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Point,
    /// Not used by the shading model, only `brightness` drives the diffuse strength
    pub color: Rgb,
    pub brightness: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Point(PointLight),
}

impl Light {
    pub fn point(position: Point, color: Rgb, brightness: f32) -> Self {
        Light::Point(PointLight {
            position,
            color,
            brightness,
        })
    }

    pub fn position(&self) -> Point {
        match self {
            Light::Point(light) => light.position,
        }
    }

    pub fn brightness(&self) -> f32 {
        match self {
            Light::Point(light) => light.brightness,
        }
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Light::Point(light)
    }
}
