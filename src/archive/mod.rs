pub mod extractor;
pub mod naming;

pub use extractor::{ArchiveExtractor, ExtractionSummary, FailedArchive};
pub use naming::{parse_archive_name, ArchiveName, NamingError};
