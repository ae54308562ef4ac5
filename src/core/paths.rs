// src/core/paths.rs

use crate::constants::{
    LOCK_FILE_SUFFIX, PROJECT_ROOT_MARKERS, USER_CONFIG_DIR, USER_CONFIG_FILENAME,
};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures while locating the project root or expanding the roadmap path.
#[derive(Error, Debug)]
pub enum PathError {
    /// An explicit `--root` could not be canonicalized.
    #[error("Project root '{}' could not be resolved: {source}", .path.display())]
    RootNotFound {
        /// The root as given.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A `~` or `$VAR` in the configured path could not be expanded.
    #[error("Failed to expand roadmap path template '{template}': {message}")]
    Expansion {
        /// The configured path.
        template: String,
        /// What `shellexpand` reported.
        message: String,
    },
}

/// Returns the nearest ancestor of `start` (itself included) that holds one of
/// the project root markers, or `start` when none does.
pub fn find_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| {
            PROJECT_ROOT_MARKERS
                .iter()
                .any(|marker| dir.join(marker).exists())
        })
        .unwrap_or(start)
        .to_path_buf()
}

/// Canonicalizes an explicitly requested project root, relative to `cwd`.
pub fn resolve_explicit_root(root: &Path, cwd: &Path) -> Result<PathBuf, PathError> {
    let joined = cwd.join(root);
    dunce::canonicalize(&joined).map_err(|source| PathError::RootNotFound {
        path: joined,
        source,
    })
}

/// Returns the path of the user configuration file
/// (`~/.config/roadmap/config.toml` on Linux), if the platform has a config dir.
///
/// Unlike the project config, this file is only read, never created.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILENAME))
}

/// Expands a configured roadmap path, resolving `~` and environment variables.
/// Relative results are anchored at `root`.
///
/// # Errors
/// Returns an error if the template references an undefined environment variable.
pub fn expand_roadmap_path(template: &str, root: &Path) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(template).map_err(|e| PathError::Expansion {
        template: template.to_string(),
        message: e.to_string(),
    })?;

    let path = PathBuf::from(expanded.into_owned());
    let anchored = if path.is_absolute() {
        path
    } else {
        root.join(path)
    };
    Ok(dunce::simplified(&anchored).to_path_buf())
}

/// The sidecar file used to serialize writers of `roadmap`
/// (`docs/ROADMAP.md` -> `docs/ROADMAP.md.lock`).
pub fn lock_path_for(roadmap: &Path) -> PathBuf {
    let mut name = roadmap
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(LOCK_FILE_SUFFIX);
    roadmap.with_file_name(name)
}
