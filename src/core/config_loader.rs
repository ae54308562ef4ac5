//! # Config Loader
//!
//! Works out which file is "the roadmap" for an invocation. Sources, highest
//! priority first:
//!
//! 1. An explicit file (`--file` / `ROADMAP_FILE`), relative to the working directory.
//! 2. `path` in the project's `roadmap.toml`.
//! 3. `path` in the user's `config.toml`.
//! 4. `docs/ROADMAP.md` under the project root.
//!
//! The `lock` flag is layered the same way (project over user, default `true`).

use crate::{
    constants::{DEFAULT_ROADMAP_PATH, PROJECT_CONFIG_FILENAME},
    core::paths::{self, PathError},
    models::{RoadmapTarget, TomlRoadmapConfig},
};
use log::debug;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Failures while resolving the roadmap target from configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        /// The config file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// A config file is not valid TOML or has unknown keys.
    #[error("Failed to parse TOML file at '{}': {source}", .path.display())]
    Parse {
        /// The config file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: toml::de::Error,
    },
    /// The project root or roadmap path could not be resolved.
    #[error(transparent)]
    Path(#[from] PathError),
}

/// What the command line contributed to path resolution.
#[derive(Debug, Default, Clone)]
pub struct ResolveOptions {
    /// Explicit roadmap file.
    pub file: Option<PathBuf>,
    /// Explicit project root.
    pub root: Option<PathBuf>,
    /// Where to look for the user config. `None` skips that layer.
    pub user_config: Option<PathBuf>,
}

/// Reads one config file. A missing file is not an error and yields `None`.
pub fn load_config_file(path: &Path) -> Result<Option<TomlRoadmapConfig>, ConfigError> {
    if !path.is_file() {
        debug!("No config file at '{}'", path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: TomlRoadmapConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded config from '{}': {:?}", path.display(), config);
    Ok(Some(config))
}

/// Resolves the roadmap target for an invocation running in `cwd`.
pub fn resolve_target(options: &ResolveOptions, cwd: &Path) -> Result<RoadmapTarget, ConfigError> {
    // 1. Project root: explicit, or discovered from the working directory.
    let root = match &options.root {
        Some(root) => paths::resolve_explicit_root(root, cwd)?,
        None => paths::find_project_root(cwd),
    };
    debug!("Project root: '{}'", root.display());

    // 2. Layer the config files.
    let user = match &options.user_config {
        Some(path) => load_config_file(path)?.unwrap_or_default(),
        None => TomlRoadmapConfig::default(),
    };
    let project = load_config_file(&root.join(PROJECT_CONFIG_FILENAME))?.unwrap_or_default();
    let merged = project.over(user);

    // 3. An explicit file beats anything configured.
    let path = match &options.file {
        Some(file) => cwd.join(file),
        None => {
            let template = merged.path.as_deref().unwrap_or(DEFAULT_ROADMAP_PATH);
            paths::expand_roadmap_path(template, &root)?
        }
    };

    let target = RoadmapTarget {
        path,
        lock: merged.lock.unwrap_or(true),
    };
    debug!("Resolved roadmap target: {:?}", target);
    Ok(target)
}
