use std::{
    io::Write,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use anyhow::Result;
use lumen::{
    filter::Kernel,
    integrators::{TracerOptions, WhittedIntegrator},
    raster::Raster,
    renderer::Renderer,
    scene::Scene,
    utils::{counter, timer::timed_scope_log},
};

use crate::{
    output::{FileOutput, FinalOutput},
    progress::Progress,
    utils::{AvailablePlot, Dimensions, ExecutionMode},
    Args,
};

pub struct RenderJob {
    pub dimensions: Dimensions,
    pub options: TracerOptions,
    pub execution_mode: ExecutionMode,
    pub filters: Vec<Kernel>,
    pub filter_passes: usize,
    pub final_outputs: Vec<Box<dyn FinalOutput>>,
}

impl RenderJob {
    pub fn from_args(args: Args) -> Self {
        log::info!("building renderer");
        let options = TracerOptions {
            max_depth: args.max_depth,
            ..Default::default()
        };

        Self {
            dimensions: args.dimensions,
            options,
            execution_mode: args.execution_mode,
            filters: args.filter.into_iter().map(Kernel::from).collect(),
            filter_passes: args.filter_passes,
            final_outputs: vec![Box::new(FileOutput::new(args.output))],
        }
    }

    pub fn run(self, scene: &Scene) -> Result<()> {
        let renderer = Renderer::new(scene, WhittedIntegrator::new(self.options));
        let Dimensions { width, height } = self.dimensions;

        log::info!("rendering {}", self.dimensions);
        let raster = timed_scope_log("run renderer", || match self.execution_mode {
            ExecutionMode::Multithreaded => {
                log::info!("execution mode: multithreaded");
                render_with_progress_bar(&renderer, width, height)
            }
            ExecutionMode::Monothreaded => {
                log::info!("execution mode: monothreaded");
                renderer.render_monothreaded(width, height)
            }
        })
        .res;

        self.finish(raster)
    }

    pub fn plot(self, plot: AvailablePlot) -> Result<()> {
        log::info!("plotting {plot:?}");
        let raster = timed_scope_log("plot", || plot.draw()).res;

        self.finish(raster)
    }

    fn finish(&self, raster: Raster) -> Result<()> {
        let raster = self.apply_filters(raster);

        for final_output in &self.final_outputs {
            final_output.commit(&raster)?;
        }

        counter::report_counters();
        Ok(())
    }

    fn apply_filters(&self, raster: Raster) -> Raster {
        if self.filters.is_empty() || self.filter_passes == 0 {
            return raster;
        }

        timed_scope_log("filters", || {
            self.filters.iter().fold(raster, |raster, kernel| {
                let filtered = kernel.apply_n(&raster, self.filter_passes);
                if filtered.is_empty() {
                    log::warn!(
                        "image became empty after applying a {d}x{d} kernel",
                        d = kernel.dimension()
                    );
                }
                filtered
            })
        })
        .res
    }
}

/// Renders on the global rayon pool while another thread prints a progress bar.
fn render_with_progress_bar(renderer: &Renderer, width: u32, height: u32) -> Raster {
    let progress = Progress::new(height as usize);
    let finished = AtomicBool::new(false);

    std::thread::scope(|s| {
        s.spawn(|| {
            while !finished.load(Ordering::SeqCst) && !progress.is_done() {
                std::thread::sleep(Duration::from_millis(300));
                print!("\r{progress}");
                let _ = std::io::stdout().flush();
            }
            println!("\r{progress}");
        });

        let raster = renderer.render_with_progress(width, height, |_row| {
            progress.add(1);
        });
        finished.store(true, Ordering::SeqCst);
        raster
    })
}
