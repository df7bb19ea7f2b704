//! Default directories for the beacon light client.

use directories::ProjectDirs;
use std::path::PathBuf;

use crate::constants::FALLBACK_DATA_DIR;

/// Returns the default project directories.
pub fn default_project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "beacon", "beacon-lc")
}

/// Returns the default data directory path.
///
/// Falls back to a relative `.beacon-lc` when the platform has no home
/// directory to derive one from.
pub fn default_data_dir() -> PathBuf {
    default_project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}
