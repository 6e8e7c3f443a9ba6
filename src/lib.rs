pub mod archive;
pub mod cli;
pub mod utils;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Invalid archive name: {0}")]
    Naming(#[from] archive::naming::NamingError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Archive root is not a directory: {0}")]
    RootNotFound(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

// Re-exports for convenience
pub use archive::extractor::{ArchiveExtractor, ExtractionSummary, FailedArchive};
pub use archive::naming::{parse_archive_name, ArchiveName, NamingError};
