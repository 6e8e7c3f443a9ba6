use serde::Serialize;
use thiserror::Error;

/// Artist/album pair derived from the `<artist> - <album>.zip` convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveName {
    pub artist: String,
    pub album: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    #[error("file name has no ' - ' separator: {0}")]
    MissingSeparator(String),
    #[error("file name has an empty artist part: {0}")]
    EmptyArtist(String),
    #[error("file name has an empty album part: {0}")]
    EmptyAlbum(String),
    #[error("file name is not valid UTF-8")]
    NotUnicode,
}

/// Parse an archive file name into its artist and album parts.
///
/// The split point is the FIRST `" - "` occurrence, so album titles
/// containing the separator survive intact while artist names containing
/// it will misparse. Names that do not match the convention are rejected
/// rather than guessed at.
pub fn parse_archive_name(file_name: &str) -> Result<ArchiveName, NamingError> {
    let stem = strip_zip_suffix(file_name);

    let (artist, album) = stem
        .split_once(" - ")
        .ok_or_else(|| NamingError::MissingSeparator(file_name.to_string()))?;

    if artist.is_empty() {
        return Err(NamingError::EmptyArtist(file_name.to_string()));
    }
    if album.is_empty() {
        return Err(NamingError::EmptyAlbum(file_name.to_string()));
    }

    Ok(ArchiveName {
        artist: artist.to_string(),
        album: album.to_string(),
    })
}

fn strip_zip_suffix(file_name: &str) -> &str {
    match file_name.len().checked_sub(4).and_then(|cut| file_name.get(cut..)) {
        Some(ext) if ext.eq_ignore_ascii_case(".zip") => &file_name[..file_name.len() - 4],
        _ => file_name,
    }
}
