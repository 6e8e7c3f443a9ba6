use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;
use zip::ZipArchive;

use crate::archive::naming::{parse_archive_name, NamingError};
use crate::utils::file_ops::FileManager;
use crate::{ExtractError, Result};

#[derive(Debug, Clone, Serialize)]
pub struct FailedArchive {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractionSummary {
    pub total: usize,
    /// Archives that extracted cleanly. In a dry run nothing is written or
    /// deleted, so this counts archives that parsed and would extract.
    pub extracted: usize,
    pub failures: Vec<FailedArchive>,
}

impl ExtractionSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Walks the archive root for zip files and unpacks each one into
/// `<library>/<artist>/<album>` per the filename convention.
pub struct ArchiveExtractor {
    archive_root: PathBuf,
    files: FileManager,
}

impl ArchiveExtractor {
    pub fn new(archive_root: impl Into<PathBuf>, library_root: impl Into<PathBuf>) -> Self {
        Self {
            archive_root: archive_root.into(),
            files: FileManager::new(library_root),
        }
    }

    fn collect_archives(&self) -> Result<Vec<PathBuf>> {
        if !self.archive_root.is_dir() {
            return Err(ExtractError::RootNotFound(
                self.archive_root.display().to_string(),
            ));
        }

        let archives = walkdir::WalkDir::new(&self.archive_root)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    eprintln!("Error accessing entry: {}", err);
                    None
                }
            })
            .filter(|entry| {
                entry.file_type().is_file()
                    && entry
                        .path()
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .map(|ext| ext.eq_ignore_ascii_case("zip"))
                        .unwrap_or(false)
            })
            .map(|entry| entry.into_path())
            .collect();

        Ok(archives)
    }

    /// Processes every archive under the root once, in filesystem order.
    /// Per-archive failures are accumulated, not fatal; only an unusable
    /// root aborts the run.
    pub fn run(&self, dry_run: bool) -> Result<ExtractionSummary> {
        let archives = self.collect_archives()?;
        let total = archives.len();
        println!(
            "Found {} zip archives under {}",
            total,
            self.archive_root.display()
        );

        let mut extracted = 0;
        let mut failures = Vec::new();

        for (index, archive) in archives.iter().enumerate() {
            match self.process_archive(archive, dry_run) {
                Ok(destination) => {
                    extracted += 1;
                    let verb = if dry_run { "Would extract" } else { "Extracted" };
                    println!(
                        "[{}/{}] {}: {} -> {}",
                        index + 1,
                        total,
                        verb,
                        archive.display(),
                        destination.display()
                    );
                }
                Err(e) => {
                    eprintln!("Error extracting {}: {}", archive.display(), e);
                    failures.push(FailedArchive {
                        path: archive.clone(),
                        reason: e.to_string(),
                    });
                }
            }

            let processed = index + 1;
            println!(
                "Progress: {}/{} files ({:.1}%)",
                processed,
                total,
                processed as f64 / total as f64 * 100.0
            );
        }

        Ok(ExtractionSummary {
            total,
            extracted,
            failures,
        })
    }

    fn process_archive(&self, path: &Path, dry_run: bool) -> Result<PathBuf> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or(NamingError::NotUnicode)?;
        let name = parse_archive_name(file_name)?;
        let destination = self.files.destination_for(&name);

        if dry_run {
            return Ok(destination);
        }

        self.files.ensure_directory(&destination)?;
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;
        archive.extract(&destination)?;
        log::debug!(
            "Unpacked {} entries from {}",
            archive.len(),
            path.display()
        );

        // A leftover source archive would be picked up again on the next
        // run, so a failed delete counts as a failure for this archive.
        self.files.remove_archive(path)?;

        Ok(destination)
    }
}
