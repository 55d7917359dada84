mod file_output;

use anyhow::Result;
pub use file_output::FileOutput;
use lumen::raster::Raster;

pub trait FinalOutput: Send {
    fn commit(&self, raster: &Raster) -> Result<()>;
}
