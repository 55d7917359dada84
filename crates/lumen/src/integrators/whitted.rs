use crate::{
    color::Rgb,
    math::vec::{ReflectVecExt, RgbAsVec3Ext, Vec3, Vec3AsRgbExt},
    ray::Ray,
    scene::{Scene, SceneCollision},
    shape::{RayIntersection, Surface},
    utils::counter::counter,
};

use super::{Integrator, TracerOptions};

/// Ambient, diffuse and mirror reflection.
///
/// For every light that is visible from the hit point, the diffuse strength gets
/// `brightness * max(0, to_light · normal)` and the material's `specular` times the reflected
/// color is added. The reflection is therefore only added for visible lights, and as many times as
/// there are visible lights.
#[derive(Debug, Clone, Default)]
pub struct WhittedIntegrator {
    pub options: TracerOptions,
}

impl WhittedIntegrator {
    pub fn new(options: TracerOptions) -> Self {
        Self { options }
    }
}

impl Integrator for WhittedIntegrator {
    fn ray_cast(&self, scene: &Scene, ray: Ray, depth: u32) -> Rgb {
        let TracerOptions {
            max_depth,
            background,
            ambient,
            bias,
        } = self.options;

        if depth >= max_depth {
            return background;
        }

        let SceneCollision::Hit(RayIntersection { t, info: object }) = scene.nearest_hit(&ray)
        else {
            return background;
        };

        let position = ray.at(t);
        let normal = object.shape.normal(position);
        let material = object.material;

        let mut diffuse_strength = 0.0;
        let mut visible_lights = 0u32;
        for light in scene.lights() {
            let to_light = (light.position() - position).normalize();

            counter!("Shadow rays");
            let shadow_ray = Ray::new_biased(position, to_light, bias);
            if scene.is_occluded(&shadow_ray) {
                continue;
            }

            diffuse_strength += light.brightness() * to_light.dot(normal).max(0.0);
            visible_lights += 1;
        }

        // The reflected ray does not depend on the light, it is traced once and weighted by the
        // number of lights that would each have added it
        let specular = if visible_lights > 0 && material.is_reflective() {
            counter!("Reflection rays");
            let reflected = ray.direction.reflect(normal).normalize();
            let reflected_ray = Ray::new_biased(position, reflected, bias);
            let reflected_color = self.ray_cast(scene, reflected_ray, depth + 1).vec();

            visible_lights as f32 * material.specular * reflected_color
        } else {
            Vec3::ZERO
        };

        let diffuse = material.diffuse.vec();
        (ambient.vec() * diffuse + diffuse * diffuse_strength + specular).rgb()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{
        color::{linear, Rgb},
        integrators::{Integrator, TracerOptions},
        light::Light,
        material::Material,
        math::{point::Point, vec::RgbAsVec3Ext},
        ray::Ray,
        scene::{examples::MirrorScene, Scene},
        shape::{Plane, Sphere},
    };

    use super::WhittedIntegrator;

    fn approx_eq(a: Rgb, b: Rgb) -> bool {
        a.vec().abs_diff_eq(b.vec(), 1e-5)
    }

    fn camera_ray() -> Ray {
        Ray::new(Point::new(0., 0., -1.), Vec3::Z)
    }

    fn lit_sphere(material: Material, light: Point) -> Scene {
        let mut scene = Scene::new();
        scene.insert_object(Sphere::new(Point::new(0., 0., 30.), 5.), material);
        scene.insert_light(Light::point(light, linear::WHITE, 0.8));
        scene
    }

    #[test]
    fn miss_returns_background() {
        let integrator = WhittedIntegrator::default();
        let color = integrator.ray_cast(&Scene::new(), camera_ray(), 0);
        assert_eq!(color, TracerOptions::default().background);
    }

    #[test]
    fn max_depth_returns_background() {
        let integrator = WhittedIntegrator::default();
        let scene = lit_sphere(Material::matte(linear::RED), Point::new(0., 0., -10.));
        let color = integrator.ray_cast(&scene, camera_ray(), integrator.options.max_depth);
        assert_eq!(color, integrator.options.background);
    }

    #[test]
    fn no_light_is_ambient_only() {
        let mut scene = Scene::new();
        let diffuse = Rgb::new(0.5, 0.2, 0.8);
        scene.insert_object(
            Sphere::new(Point::new(0., 0., 30.), 5.),
            Material::new(diffuse, 1.0),
        );

        let integrator = WhittedIntegrator::default();
        let color = integrator.ray_cast(&scene, camera_ray(), 0);
        let expected = (integrator.options.ambient.vec() * diffuse.vec()).to_array();
        assert!(approx_eq(color, Rgb(expected)));
    }

    #[test]
    fn facing_light_adds_diffuse() {
        // The light is right behind the camera: to_light and the normal are aligned
        let diffuse = Rgb::new(0.5, 0.5, 0.5);
        let scene = lit_sphere(Material::matte(diffuse), Point::new(0., 0., -10.));

        let color = WhittedIntegrator::default().ray_cast(&scene, camera_ray(), 0);
        let expected = 0.1 * 0.5 + 0.5 * 0.8;
        assert!(approx_eq(color, Rgb::new(expected, expected, expected)));
    }

    #[test]
    fn light_behind_surface_adds_no_diffuse() {
        // The light is straight behind the surface: to_light and the normal point in opposite
        // directions, the negative dot product is clamped to zero
        let diffuse = Rgb::new(0.5, 0.5, 0.5);
        let scene = lit_sphere(Material::matte(diffuse), Point::new(0., 0., 60.));

        let color = WhittedIntegrator::default().ray_cast(&scene, camera_ray(), 0);
        assert!(approx_eq(color, Rgb::new(0.05, 0.05, 0.05)));
    }

    #[test]
    fn grazing_light_is_clamped() {
        // The light is on the back side of the plane, nothing stands in the way but the dot product
        // is negative
        let mut scene = Scene::new();
        let diffuse = Rgb::new(0.5, 0.5, 0.5);
        scene.insert_object(
            Plane::new(Point::new(0., 0., 10.), Vec3::Z),
            Material::matte(diffuse),
        );
        scene.insert_light(Light::point(Point::new(0., 0., 0.), linear::WHITE, 1.0));

        let color = WhittedIntegrator::default().ray_cast(&scene, camera_ray(), 0);
        assert!(approx_eq(color, Rgb::new(0.05, 0.05, 0.05)));
    }

    #[test]
    fn blocked_light_adds_nothing() {
        let diffuse = Rgb::new(0.5, 0.5, 0.5);
        let mut scene = lit_sphere(Material::new(diffuse, 1.0), Point::new(0., 0., -10.));
        // Blocker between the hit point and the light, out of the camera ray's way
        scene.insert_object(
            Plane::new(Point::new(0., 0., 20.), -Vec3::Z),
            Material::matte(linear::BLACK),
        );

        let color = WhittedIntegrator::default().ray_cast(&scene, camera_ray(), 0);
        // No diffuse from the light and, as it is hidden, no reflection either
        assert!(approx_eq(color, Rgb::new(0.05, 0.05, 0.05)));
    }

    #[test]
    fn reflection_only_counts_visible_lights() {
        // Documented quirk: the reflected color is added once per visible light, and not at all
        // when every light is hidden, even though the reflection does not depend on lights.
        let options = TracerOptions::default();
        let integrator = WhittedIntegrator::new(options);
        let diffuse = Rgb::new(0.2, 0.2, 0.2);
        let mirror = Material::new(diffuse, 0.5);

        let mut one_light = Scene::new();
        one_light.insert_object(Plane::new(Point::new(0., 0., 10.), Vec3::Z), mirror);
        one_light.insert_light(Light::point(Point::new(0., 0., 20.), linear::WHITE, 0.0));

        let mut two_lights = one_light.clone();
        two_lights.insert_light(Light::point(Point::new(1., 0., 20.), linear::WHITE, 0.0));

        let base = options.ambient.vec() * diffuse.vec();
        // The reflected ray goes back toward -z and escapes
        let reflected = options.background.vec();

        let color = integrator.ray_cast(&one_light, camera_ray(), 0);
        assert!(approx_eq(color, Rgb((base + 0.5 * reflected).to_array())));

        let color = integrator.ray_cast(&two_lights, camera_ray(), 0);
        assert!(approx_eq(color, Rgb((base + 2.0 * 0.5 * reflected).to_array())));
    }

    #[test]
    fn facing_mirrors_terminate() {
        let scene: Scene = MirrorScene.into();

        for max_depth in [1, 5, 20, 64] {
            let integrator = WhittedIntegrator::new(TracerOptions {
                max_depth,
                ..Default::default()
            });
            let color = integrator.ray_cast(&scene, Ray::new(Point::new(0., 2., -1.), Vec3::Z), 0);
            assert!(color.vec().is_finite());
        }
    }

    #[test]
    fn depth_limits_reflection_chain() {
        // Between two perfect mirrors, each bounce adds the ambient term of the next mirror, so
        // the accumulated color grows with the depth limit until the background is reached.
        let mut scene = Scene::new();
        let mirror = Material::new(linear::WHITE, 1.0);
        scene.insert_object(Plane::new(Point::new(0., 0., 10.), Vec3::Z), mirror);
        scene.insert_object(Plane::new(Point::new(0., 0., -10.), -Vec3::Z), mirror);
        scene.insert_light(Light::point(Point::new(0., 0., 20.), linear::WHITE, 0.0));
        scene.insert_light(Light::point(Point::new(0., 0., -20.), linear::WHITE, 0.0));

        let color_at_depth = |max_depth| {
            let integrator = WhittedIntegrator::new(TracerOptions {
                max_depth,
                ..Default::default()
            });
            integrator.ray_cast(&scene, camera_ray(), 0).vec()
        };

        let options = TracerOptions::default();
        for max_depth in 1..10 {
            // max_depth surfaces contribute their ambient term, then the background is returned
            let expected =
                max_depth as f32 * options.ambient.vec() + options.background.vec();
            assert!(color_at_depth(max_depth).abs_diff_eq(expected, 1e-4));
        }
    }
}
