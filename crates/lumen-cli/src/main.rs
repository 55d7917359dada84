mod output;
mod progress;
mod renderer;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use renderer::RenderJob;
use utils::{AvailableFilter, AvailablePlot, AvailableScene, Dimensions, ExecutionMode};

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(short, long, default_value = "800x600")]
    /// Screen dimension in format `width`x`height`
    dimensions: Dimensions,

    #[arg(long, default_value_t = 20)]
    /// Number of bounces after which a ray gets the background color
    max_depth: u32,

    #[arg(short, long, value_enum, default_value_t)]
    execution_mode: ExecutionMode,

    #[arg(short = 'j', long)]
    /// Size of the thread pool used in multithreaded mode, defaults to the number of cores
    threads: Option<usize>,

    #[arg(long, value_enum)]
    /// Plot a curve instead of rendering the scene, `scene`, `dimensions` and `max_depth` are
    /// then ignored
    plot: Option<AvailablePlot>,

    #[arg(short, long, value_enum)]
    /// Post-processing filters, applied in the given order
    filter: Vec<AvailableFilter>,

    #[arg(long, default_value_t = 1)]
    /// How many times each filter is applied
    filter_passes: usize,

    #[arg(short, long, default_value = "output/render.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Some(threads) = args.threads {
        log::info!("using {threads} worker threads");
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    if let Some(plot) = args.plot {
        let job = RenderJob::from_args(args);
        return job.plot(plot);
    }

    log::info!("loading scene");
    let scene = args.scene.build();
    log::info!(
        "{} objects, {} lights",
        scene.objects().len(),
        scene.lights().len()
    );

    let job = RenderJob::from_args(args);
    job.run(&scene)?;

    Ok(())
}
