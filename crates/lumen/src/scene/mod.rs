pub mod examples;

use crate::{
    light::Light,
    material::Material,
    ray::Ray,
    shape::{IntersectionResult, Shape, Surface},
};

/// A shape and the material it is rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub shape: Shape,
    pub material: Material,
}

/// A [crate::shape::Collision] tagged with the object that was hit.
///
/// The object is borrowed from the [Scene] that answered the query.
pub type SceneCollision<'a> = IntersectionResult<&'a SceneObject>;

impl SceneObject {
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }

    pub fn intersection(&self, ray: &Ray) -> SceneCollision<'_> {
        self.shape.intersection(ray).with_info(self)
    }
}

/// Objects and lights to be rendered.
///
/// A scene is filled once, objects and lights can only be appended. Rendering borrows it
/// immutably, so it cannot change while a render is running.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object in the scene
    pub fn insert_object(&mut self, shape: impl Into<Shape>, material: Material) {
        self.objects.push(SceneObject::new(shape, material));
    }

    /// Insert a light in the scene
    pub fn insert_light(&mut self, light: impl Into<Light>) {
        self.lights.push(light.into());
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// The closest object hit by `ray`.
    ///
    /// When two objects are hit at exactly the same time, the one inserted first wins.
    pub fn nearest_hit(&self, ray: &Ray) -> SceneCollision<'_> {
        self.objects
            .iter()
            .map(|object| object.intersection(ray))
            .fold(IntersectionResult::Miss, IntersectionResult::nearest)
    }

    /// Whether any object is hit by `ray`.
    ///
    /// Hits are not bounded: an object standing further than the light still shadows it.
    pub fn is_occluded(&self, ray: &Ray) -> bool {
        self.objects
            .iter()
            .any(|object| object.shape.intersection(ray).is_hit())
    }
}
