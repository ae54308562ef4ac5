// src/system/lock.rs

use crate::core::{
    error::{RoadmapError, RoadmapResult},
    paths,
};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// An exclusive advisory lock on `<roadmap>.lock`, held for the whole
/// read-modify-write of a mutating command and released on drop.
///
/// Only other `roadmap` processes honor it. The lock file is never deleted;
/// removing it while another process waits on it would split the lock.
#[derive(Debug)]
pub struct RoadmapLock {
    file: File,
    path: PathBuf,
}

impl RoadmapLock {
    /// Blocks until the lock for `roadmap` is acquired.
    pub fn acquire(roadmap: &Path) -> RoadmapResult<Self> {
        let path = paths::lock_path_for(roadmap);
        let failure = |source: std::io::Error| RoadmapError::Lock {
            path: path.clone(),
            source,
        };

        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(failure)?;

        let start = Instant::now();
        FileExt::lock_exclusive(&file).map_err(failure)?;
        log::debug!(
            "Acquired '{}' after {} ms",
            path.display(),
            start.elapsed().as_millis()
        );

        Ok(Self { file, path })
    }

    /// The lock file backing this lock.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RoadmapLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            log::warn!("Failed to release '{}': {}", self.path.display(), e);
        }
    }
}
