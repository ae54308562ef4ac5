// src/system/storage.rs

use crate::constants::TEMP_FILE_PREFIX;
use crate::core::{
    document::Document,
    error::{RoadmapError, RoadmapResult},
};
use log::debug;
use std::{
    fs,
    io::{ErrorKind, Write},
    path::Path,
};

/// Fails with `FileNotFound` unless `path` is an existing regular file.
pub fn require_file(path: &Path) -> RoadmapResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(RoadmapError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Reads the roadmap at `path` into a [`Document`], byte-for-byte.
pub fn load_document(path: &Path) -> RoadmapResult<Document> {
    require_file(path)?;

    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => RoadmapError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => RoadmapError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let document = Document::parse(&text);
    debug!(
        "Loaded '{}' ({} bytes, {} lines)",
        path.display(),
        text.len(),
        document.len()
    );
    Ok(document)
}

/// Replaces the file at `path` with `document`.
///
/// The content goes to a temporary file in the same directory, which is synced,
/// given the permissions of the file it replaces and then renamed over it. On
/// any error the previous file is left as it was and the temporary file is
/// removed.
pub fn persist_document(path: &Path, document: &Document) -> RoadmapResult<()> {
    let failure = |source: std::io::Error| RoadmapError::PersistenceFailure {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .tempfile_in(dir)
        .map_err(failure)?;
    debug!("Writing roadmap through '{}'", temp_file.path().display());

    temp_file
        .write_all(document.to_text().as_bytes())
        .map_err(failure)?;
    temp_file.as_file().sync_all().map_err(failure)?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp_file.path(), metadata.permissions()).map_err(failure)?;
    }

    temp_file.persist(path).map_err(|e| failure(e.error))?;
    debug!("Persisted '{}'", path.display());
    Ok(())
}
