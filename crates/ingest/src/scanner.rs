use pdfmeta_common::{IngestError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List the PDF files in one directory, non-recursively.
///
/// Only regular files whose name ends with the case-sensitive suffix
/// `.pdf` are selected; `c.PDF` is skipped.
pub fn scan_folder(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| match e.into_io_error() {
            Some(io) => IngestError::Io(io),
            None => IngestError::Io(std::io::Error::other("directory walk failed")),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if entry.file_name().to_string_lossy().ends_with(".pdf") {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}
