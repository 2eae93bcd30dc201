//! Path resolution utilities for trackline
//!
//! Provides functions to locate the project directory holding `.trackline`
//! and construct paths to the files inside it.

use std::path::{Path, PathBuf};

/// Name of the per-project settings directory
pub const TRACKLINE_DIR: &str = ".trackline";

/// Find the nearest directory containing a `.trackline` directory.
///
/// Walks up the directory tree from the starting directory. Returns `None`
/// when no ancestor has one; callers then fall back to default settings.
pub fn find_project_root(start_cwd: &Path) -> Option<PathBuf> {
    let mut current = start_cwd.canonicalize().ok()?;

    loop {
        if get_trackline_dir(&current).is_dir() {
            return Some(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .trackline directory.
pub fn get_trackline_dir(root: &Path) -> PathBuf {
    root.join(TRACKLINE_DIR)
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_trackline_dir(root).join("config.json")
}
