// src/constants.rs

/// Roadmap location, relative to the project root, when nothing else is configured.
pub const DEFAULT_ROADMAP_PATH: &str = "docs/ROADMAP.md";

/// The name of the per-project configuration file (at the project root).
pub const PROJECT_CONFIG_FILENAME: &str = "roadmap.toml";

/// The name of the directory holding user configuration (inside the system config dir).
pub const USER_CONFIG_DIR: &str = "roadmap";

/// The name of the user configuration file (inside `USER_CONFIG_DIR`).
pub const USER_CONFIG_FILENAME: &str = "config.toml";

/// Directory entries that mark a project root when walking up from the working directory.
pub const PROJECT_ROOT_MARKERS: &[&str] = &[PROJECT_CONFIG_FILENAME, ".git"];

/// Suffix appended to the roadmap file name to form its advisory lock file.
pub const LOCK_FILE_SUFFIX: &str = ".lock";

/// Prefix for the temporary file used when replacing the roadmap.
pub const TEMP_FILE_PREFIX: &str = ".roadmap-";

/// Status marker written for new items.
pub const UNCHECKED_MARKER: &str = "[ ]";
