use glam::Vec3;

use crate::{
    color::{linear, Rgb},
    light::Light,
    material::Material,
    math::point::Point,
    scene::Scene,
    shape::{Plane, Sphere},
};

/// Three shiny spheres in a row above a red floor, lit by a single light behind the camera.
pub struct SpheresScene;

impl SpheresScene {
    pub fn insert_into(scene: &mut Scene) {
        scene.insert_object(
            Sphere::new(Point::new(0., 0., 30.), 5.),
            Material::new(Rgb::new(0.25, 0.75, 0.4), 0.5),
        );
        scene.insert_object(
            Sphere::new(Point::new(8., 0., 30.), 3.),
            Material::new(Rgb::new(0.75, 0.4, 0.25), 0.5),
        );
        scene.insert_object(
            Sphere::new(Point::new(-8., 0., 30.), 3.),
            Material::new(Rgb::new(0.25, 0.4, 0.75), 0.5),
        );

        // Planes are one-sided, the normal has to point away from the camera for the floor to show up
        scene.insert_object(
            Plane::from_offset(1., -Vec3::Y),
            Material::new(linear::RED, 0.2),
        );

        scene.insert_light(Light::point(Point::new(0., 2., -4.), linear::WHITE, 0.8));
    }
}

impl From<SpheresScene> for Scene {
    fn from(_: SpheresScene) -> Self {
        let mut scene = Scene::new();
        SpheresScene::insert_into(&mut scene);
        scene
    }
}
