//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "adaptive-layout";
const APPLICATION: &str = "adaptive-layout";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the data directory for persisted layouts.
///
/// - Linux: `$XDG_DATA_HOME/adaptive-layout` or `~/.local/share/adaptive-layout`
/// - macOS: `~/Library/Application Support/dev.adaptive-layout.adaptive-layout`
/// - Windows: `C:\Users\<User>\AppData\Roaming\adaptive-layout\adaptive-layout\data`
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Get the cache directory, used for log files.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the layout database.
pub fn layout_db() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("layout.db"))
}

/// Get the path to the log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}
