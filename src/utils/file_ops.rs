use std::path::{Path, PathBuf};
use std::fs;
use crate::archive::naming::ArchiveName;
use crate::Result;

pub struct FileManager {
    library_root: PathBuf,
}

impl FileManager {
    pub fn new(library_root: impl Into<PathBuf>) -> Self {
        Self {
            library_root: library_root.into(),
        }
    }

    /// Destination folder for an archive: `<library>/<artist>/<album>`.
    pub fn destination_for(&self, name: &ArchiveName) -> PathBuf {
        self.library_root.join(&name.artist).join(&name.album)
    }

    pub fn ensure_directory(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::create_dir_all(path.as_ref())?;
        Ok(())
    }

    pub fn remove_archive(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::remove_file(path.as_ref())?;
        Ok(())
    }
}
