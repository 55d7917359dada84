//! Ready made scenes, used by the command line renderer and by tests.
mod floor;
mod mirror;
mod spheres;

pub use floor::FloorScene;
pub use mirror::MirrorScene;
pub use spheres::SpheresScene;
