use glam::Vec3;

use crate::{
    color::{linear, Rgb},
    light::Light,
    material::Material,
    math::point::Point,
    scene::Scene,
    shape::{Plane, Sphere},
};

/// A sphere between two facing mirrors, one in front of and one behind the camera.
///
/// Each mirror sees one of the two lights, so reflections bounce back and forth until the
/// integrator's depth limit.
pub struct MirrorScene;

impl MirrorScene {
    pub fn insert_into(scene: &mut Scene) {
        let mirror = Material::new(Rgb::new(0.1, 0.1, 0.1), 0.9);

        scene.insert_object(Plane::new(Point::new(0., 0., 10.), Vec3::Z), mirror);
        scene.insert_object(Plane::new(Point::new(0., 0., -10.), -Vec3::Z), mirror);
        scene.insert_object(
            Sphere::new(Point::new(0., -1., 5.), 1.5),
            Material::new(Rgb::new(0.9, 0.6, 0.1), 0.3),
        );

        scene.insert_light(Light::point(Point::new(0., 3., 20.), linear::WHITE, 0.7));
        scene.insert_light(Light::point(Point::new(0., 3., -20.), linear::WHITE, 0.7));
    }
}

impl From<MirrorScene> for Scene {
    fn from(_: MirrorScene) -> Self {
        let mut scene = Scene::new();
        MirrorScene::insert_into(&mut scene);
        scene
    }
}
