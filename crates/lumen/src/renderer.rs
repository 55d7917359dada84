use rayon::prelude::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

use crate::{
    camera::Camera,
    color::PackedRgb,
    integrators::{Integrator, WhittedIntegrator},
    raster::Raster,
    scene::Scene,
    utils::timer::timed_scope_log,
};

/// Renders a borrowed [Scene].
///
/// The scene is only read during a render, so it is shared between the worker threads and
/// cannot be modified until the renderer is dropped.
pub struct Renderer<'a> {
    pub scene: &'a Scene,
    pub integrator: Box<dyn Integrator>,
    pub camera: Camera,
}

impl<'a> Renderer<'a> {
    pub fn new<I: Integrator + 'static>(scene: &'a Scene, integrator: I) -> Self {
        Self {
            scene,
            integrator: Box::new(integrator),
            camera: Camera::default(),
        }
    }

    pub fn with_camera(self, camera: Camera) -> Self {
        Self { camera, ..self }
    }

    /// Clamped and packed color of pixel `(x, y)` of a `width` x `height` image
    pub fn process_pixel(&self, x: u32, y: u32, width: u32, height: u32) -> PackedRgb {
        let ray = self.camera.ray(x, y, width, height);
        self.integrator.ray_cast(self.scene, ray, 0).clamp().pack()
    }

    /// Render every pixel in parallel on the current rayon pool.
    ///
    /// Blocks until the whole raster is filled.
    pub fn render(&self, width: u32, height: u32) -> Raster {
        self.render_with_progress(width, height, |_| ())
    }

    /// Same as [Renderer::render], `on_row` is called from the worker threads with the index of
    /// each row once all its pixels are done.
    pub fn render_with_progress<F>(&self, width: u32, height: u32, on_row: F) -> Raster
    where
        F: Fn(u32) + Sync,
    {
        let mut raster = Raster::new(width, height);
        if raster.is_empty() {
            log::warn!("nothing to render in a {width}x{height} image");
            return raster;
        }

        log::debug!(
            "rendering {width}x{height}: {} objects, {} lights",
            self.scene.objects().len(),
            self.scene.lights().len()
        );

        timed_scope_log("render", || {
            // Every pixel owns its slot of the buffer, no synchronisation needed
            raster
                .pixels_mut()
                .par_chunks_mut(width as usize)
                .enumerate()
                .for_each(|(y, row)| {
                    row.par_iter_mut().enumerate().for_each(|(x, pixel)| {
                        *pixel = self.process_pixel(x as u32, y as u32, width, height);
                    });
                    on_row(y as u32);
                });
        });

        raster
    }

    /// Render every pixel on the calling thread
    pub fn render_monothreaded(&self, width: u32, height: u32) -> Raster {
        timed_scope_log("render (monothreaded)", || {
            Raster::from_fn(width, height, |x, y| {
                self.process_pixel(x, y, width, height)
            })
        })
        .res
    }
}

impl<'a> From<&'a Scene> for Renderer<'a> {
    fn from(scene: &'a Scene) -> Self {
        Renderer::new(scene, WhittedIntegrator::default())
    }
}
