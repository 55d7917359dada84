use std::path::PathBuf;

use anyhow::Result;
use lumen::raster::Raster;

use super::FinalOutput;

/// Writes the image to disk, the format is guessed from the extension
pub struct FileOutput {
    pub path: PathBuf,
}

impl FileOutput {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl FinalOutput for FileOutput {
    fn commit(&self, raster: &Raster) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }

        log::info!("Saving image to {}...", self.path.display());
        raster.save(&self.path)?;
        Ok(())
    }
}
