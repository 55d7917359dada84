pub mod camera;
pub mod color;
pub mod filter;
pub mod integrators;
pub mod light;
pub mod material;
pub mod math;
pub mod plot;
pub mod raster;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod utils;
