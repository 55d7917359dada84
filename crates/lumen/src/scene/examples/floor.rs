use glam::Vec3;

use crate::{
    color::{linear, Rgb},
    light::Light,
    material::Material,
    math::point::Point,
    scene::Scene,
    shape::Plane,
};

/// A lone floor at `y = -1` lit from the side its normal faces.
pub struct FloorScene;

impl FloorScene {
    pub fn insert_into(scene: &mut Scene) {
        scene.insert_object(
            Plane::new(Point::new(0., -1., 0.), -Vec3::Y),
            Material::matte(Rgb::new(0.2, 0.6, 0.4)),
        );
        scene.insert_light(Light::point(Point::new(0., -10., 5.), linear::WHITE, 0.8));
    }
}

impl From<FloorScene> for Scene {
    fn from(_: FloorScene) -> Self {
        let mut scene = Scene::new();
        FloorScene::insert_into(&mut scene);
        scene
    }
}
